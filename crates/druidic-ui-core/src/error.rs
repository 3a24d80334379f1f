//! Error types for controller operations.

use thiserror::Error;

/// Errors that can occur while a controller behavior runs.
///
/// None of these reach the user as a raw error. Clipboard failures are
/// absorbed by the legacy fallback, everything else is logged and dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UiError {
    /// The async clipboard capability is not exposed by the platform.
    #[error("clipboard API unavailable")]
    ClipboardUnavailable,

    /// The async clipboard write was rejected (permissions, focus, etc).
    #[error("clipboard write rejected: {0}")]
    ClipboardRejected(String),

    /// The legacy `execCommand("copy")` technique failed.
    #[error("legacy copy failed: {0}")]
    LegacyCopy(String),

    /// An element the behavior needed at run time is gone.
    #[error("missing element: {0}")]
    MissingElement(String),

    /// Any other DOM call failed.
    #[error("DOM error: {0}")]
    Dom(String),

    /// Controller configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A share URL could not be decoded.
    #[error("invalid share URL: {0}")]
    InvalidShareUrl(String),
}

impl From<serde_json::Error> for UiError {
    fn from(e: serde_json::Error) -> Self {
        UiError::Config(e.to_string())
    }
}

impl From<url::ParseError> for UiError {
    fn from(e: url::ParseError) -> Self {
        UiError::InvalidShareUrl(e.to_string())
    }
}
