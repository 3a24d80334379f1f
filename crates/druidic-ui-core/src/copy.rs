//! Clipboard copy with legacy fallback.
//!
//! Both the copy and share triggers go through `copy_with_fallback`; they
//! differ only in payload and feedback wording, carried by `CopyRequest`.

use crate::error::UiError;
use crate::platform::ClipboardPlatform;

/// Which clipboard path delivered the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    /// The async clipboard capability.
    Clipboard,
    /// The legacy selection + copy-command technique.
    Legacy,
}

/// A payload to copy plus the feedback shown for each path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub payload: String,
    pub message: String,
    pub fallback_message: String,
}

impl CopyRequest {
    /// Same message whichever path succeeds.
    pub fn new(payload: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            payload: payload.into(),
            fallback_message: message.clone(),
            message,
        }
    }

    /// Use distinct wording when the legacy path was taken.
    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    /// Feedback for the path that succeeded.
    pub fn message_for(&self, path: CopyPath) -> &str {
        match path {
            CopyPath::Clipboard => &self.message,
            CopyPath::Legacy => &self.fallback_message,
        }
    }
}

/// Copy `request.payload`, falling back to the legacy technique if the
/// async clipboard is unavailable or rejects.
///
/// Returns the path that succeeded, or the legacy path's error if both
/// failed.
pub async fn copy_with_fallback<C: ClipboardPlatform>(
    clipboard: &C,
    request: &CopyRequest,
) -> Result<CopyPath, UiError> {
    match clipboard.write_text(&request.payload).await {
        Ok(()) => Ok(CopyPath::Clipboard),
        Err(e) => {
            tracing::debug!("Clipboard write failed, using legacy copy: {}", e);
            clipboard.legacy_copy(&request.payload)?;
            Ok(CopyPath::Legacy)
        }
    }
}
