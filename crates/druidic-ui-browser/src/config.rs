//! Controller configuration embedded in the page.
//!
//! Hosts override defaults with a JSON blob:
//! ```html
//! <script type="application/json" id="druidic-config">
//!   {"feedback_hide_ms": 3000}
//! </script>
//! ```

use druidic_ui_core::{ControllerConfig, UiError};
use web_sys::Document;

/// Id of the element carrying the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "druidic-config";

/// Parse the embedded configuration, if the page has one.
pub fn read_page_config(document: &Document) -> Result<Option<ControllerConfig>, UiError> {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let json = element.text_content().unwrap_or_default();
    ControllerConfig::from_json(&json).map(Some)
}

/// The embedded configuration, or the defaults when it is absent or invalid.
pub fn page_config_or_default(document: &Document) -> ControllerConfig {
    match read_page_config(document) {
        Ok(Some(config)) => config,
        Ok(None) => ControllerConfig::default(),
        Err(e) => {
            tracing::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            ControllerConfig::default()
        }
    }
}
