//! Browser clipboard implementation.
//!
//! Implements `ClipboardPlatform` for `BrowserPage` using the async
//! Clipboard API, with the textarea + `execCommand("copy")` technique as
//! the legacy path for insecure contexts and refused permissions.

use druidic_ui_core::{ClipboardPlatform, UiError};
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlDocument, HtmlTextAreaElement};

use crate::js_error_message;
use crate::page::BrowserPage;

impl ClipboardPlatform for BrowserPage {
    async fn write_text(&self, text: &str) -> Result<(), UiError> {
        let clipboard = async_clipboard(self.window()).ok_or(UiError::ClipboardUnavailable)?;
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map_err(|e| UiError::ClipboardRejected(js_error_message(e)))?;
        Ok(())
    }

    fn legacy_copy(&self, text: &str) -> Result<(), UiError> {
        legacy_copy(self.document(), text)
    }
}

/// `navigator.clipboard`, which is undefined outside secure contexts.
fn async_clipboard(window: &web_sys::Window) -> Option<web_sys::Clipboard> {
    let navigator = window.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return None;
    }
    Some(clipboard.unchecked_into())
}

/// Copy text through an off-screen textarea and `execCommand("copy")`.
///
/// The textarea is removed again whether or not the command succeeds.
pub fn legacy_copy(document: &Document, text: &str) -> Result<(), UiError> {
    let body = document
        .body()
        .ok_or_else(|| UiError::MissingElement("body".to_owned()))?;
    let textarea = document
        .create_element("textarea")
        .map_err(|e| UiError::Dom(js_error_message(e)))?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| UiError::Dom("created element is not a textarea".to_owned()))?;

    textarea.set_value(text);
    textarea
        .style()
        .set_css_text("position:fixed;opacity:0");
    body.append_child(&textarea)
        .map_err(|e| UiError::Dom(js_error_message(e)))?;
    textarea.select();

    let copied = match document.dyn_ref::<HtmlDocument>() {
        Some(html_document) => html_document
            .exec_command("copy")
            .map_err(|e| UiError::LegacyCopy(js_error_message(e))),
        None => Err(UiError::LegacyCopy("not an HTML document".to_owned())),
    };

    if let Err(e) = body.remove_child(&textarea) {
        tracing::warn!("Failed to remove copy textarea: {}", js_error_message(e));
    }

    if copied? {
        Ok(())
    } else {
        Err(UiError::LegacyCopy("copy command was refused".to_owned()))
    }
}
