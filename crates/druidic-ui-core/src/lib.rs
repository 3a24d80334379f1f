//! druidic-ui-core: Page interaction logic without browser dependencies.
//!
//! This crate provides:
//! - `PagePlatform` / `ClipboardPlatform` traits for the rendered page
//! - `install` - binds copy, share, scroll and submit-shortcut behaviors
//! - `Feedback` - transient status messages with a cancellable hide timer
//! - `ShareLink` / `SharedQuery` - share URL encoding and decoding
//!
//! The browser implementation lives in `druidic-ui-browser`.

pub mod config;
pub mod controller;
pub mod copy;
pub mod error;
pub mod feedback;
pub mod platform;
pub mod share;
pub mod shortcut;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ControllerConfig, FeedbackMessages};
pub use controller::{Anchor, Bindings, install};
pub use copy::{CopyPath, CopyRequest, copy_with_fallback};
pub use error::UiError;
pub use feedback::Feedback;
pub use platform::{ClipboardPlatform, PagePlatform, ScrollBehavior, ScrollBlock, ScrollOptions};
pub use share::{Script, ShareLink, SharedQuery, UnknownScript, encode_uri_component};
pub use shortcut::{KeyChord, KeyDisposition, is_submit_shortcut};
pub use smol_str::SmolStr;
