//! Browser DOM layer for the druidic page controller.
//!
//! This crate implements the `druidic-ui-core` platform traits on top of
//! `web-sys`. It assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `page`: `BrowserPage`, element lookup, listeners, timers
//! - `clipboard`: async Clipboard API with the legacy `execCommand` path
//! - `events`: keyboard event extraction
//! - `config`: configuration embedded in the page as JSON
//!
//! # Re-exports
//!
//! This crate re-exports `druidic-ui-core` for convenience, so consumers
//! only need to depend on `druidic-ui-browser`.

// Re-export core crate
pub use druidic_ui_core;
pub use druidic_ui_core::*;

pub mod clipboard;
pub mod config;
pub mod events;
pub mod page;

pub use clipboard::legacy_copy;
pub use config::{CONFIG_ELEMENT_ID, page_config_or_default, read_page_config};
pub use events::key_chord;
pub use page::BrowserPage;

use wasm_bindgen::JsValue;

/// Readable message for a thrown JS value.
pub(crate) fn js_error_message(value: JsValue) -> String {
    match gloo_utils::errors::JsError::try_from(value) {
        Ok(error) => error.to_string(),
        Err(not_error) => not_error.to_string(),
    }
}
