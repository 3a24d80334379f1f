//! Controller configuration.
//!
//! Every field has a default matching the markup the transliterator page
//! renders, so an empty JSON object (or no config at all) yields a working
//! controller. Hosts with different markup override only what differs.

use serde::{Deserialize, Serialize};

use crate::error::UiError;

/// Anchors, timings and wording used by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Id of the feedback region.
    pub feedback_id: String,
    /// Class toggled on the feedback region while a message is shown.
    pub visible_class: String,
    /// Milliseconds a feedback message stays visible.
    pub feedback_hide_ms: u32,

    /// Selector of the copy trigger.
    pub copy_selector: String,
    /// Selector of the share trigger.
    pub share_selector: String,
    /// Path placed between the origin and the query of share links.
    pub share_path: String,

    /// Id of the rendered output region.
    pub output_id: String,
    /// Delay before scrolling the output region into view.
    pub scroll_delay_ms: u32,

    /// Id of the text-entry field watched for the submit shortcut.
    pub input_id: String,
    /// Id of the form submitted by the shortcut.
    pub form_id: String,
    /// Prevent the textarea's newline insertion when the shortcut fires.
    pub suppress_newline_on_submit: bool,

    pub messages: FeedbackMessages,
}

/// Feedback wording for each copy outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackMessages {
    pub copied: String,
    pub copied_fallback: String,
    pub link_copied: String,
}

impl Default for FeedbackMessages {
    fn default() -> Self {
        Self {
            copied: "ᚢ Copied to clipboard!".to_owned(),
            copied_fallback: "ᚢ Copied!".to_owned(),
            link_copied: "⎘ Link copied!".to_owned(),
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            feedback_id: "copyFeedback".to_owned(),
            visible_class: "visible".to_owned(),
            feedback_hide_ms: 2200,
            copy_selector: ".copy-btn".to_owned(),
            share_selector: ".share-btn".to_owned(),
            share_path: "/".to_owned(),
            output_id: "output".to_owned(),
            scroll_delay_ms: 150,
            input_id: "inputText".to_owned(),
            form_id: "transliterator-form".to_owned(),
            suppress_newline_on_submit: false,
            messages: FeedbackMessages::default(),
        }
    }
}

impl ControllerConfig {
    /// Parse a configuration from JSON. Omitted fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(json)?)
    }
}
