//! WASM entry point for the druidic page controller.
//!
//! Loading the module installs the controller once the document is
//! interactive. Pages can override anchors and wording with an embedded
//! `#druidic-config` JSON blob (see `druidic_ui_browser::config`).

mod types;

pub use types::*;

use std::cell::RefCell;

use druidic_ui_browser::{
    Bindings, BrowserPage, SharedQuery, ShareLink, install, page_config_or_default,
};
use gloo_events::EventListener;
use wasm_bindgen::prelude::*;

thread_local! {
    static CONTROLLER: RefCell<Option<Bindings<BrowserPage>>> = const { RefCell::new(None) };
}

/// Initialize panic hook and logging, then mount once the DOM is ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_tracing();

    let Some(page) = BrowserPage::new() else {
        tracing::warn!("No window or document, controller not mounted");
        return;
    };

    if page.document().ready_state() == "loading" {
        // Page-lifetime listener that removes itself after firing.
        EventListener::once(page.document(), "DOMContentLoaded", |_| {
            mount();
        })
        .forget();
    } else {
        mount();
    }
}

fn init_tracing() {
    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    // A host page may have installed its own subscriber already.
    let _ = set_global_default(Registry::default().with(wasm_layer));
}

/// Install the controller on the current document.
///
/// Returns false if it was already mounted or there is no document.
#[wasm_bindgen]
pub fn mount() -> bool {
    let Some(page) = BrowserPage::new() else {
        return false;
    };

    CONTROLLER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            tracing::debug!("Controller already mounted");
            return false;
        }
        let config = page_config_or_default(page.document());
        *slot = Some(install(&page, &config));
        true
    })
}

/// Remove every listener and pending timer installed by `mount`.
#[wasm_bindgen]
pub fn teardown() {
    let bindings = CONTROLLER.with(|slot| slot.borrow_mut().take());
    if let Some(bindings) = bindings {
        bindings.dispose();
    }
}

/// Build a share link the same way the share button does.
#[wasm_bindgen(js_name = shareUrl)]
pub fn share_url(origin: &str, text: &str, script: &str) -> String {
    ShareLink::new(origin, text, script).to_string()
}

/// Decode a share link into its text and script.
#[wasm_bindgen(js_name = decodeShareUrl)]
pub fn decode_share_url(url: &str) -> Result<JsSharedQuery, JsError> {
    SharedQuery::from_url(url)
        .map(JsSharedQuery::from)
        .map_err(|e| JsError::new(&e.to_string()))
}
