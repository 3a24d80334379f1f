//! Platform abstraction traits for controller behaviors.
//!
//! These traits define the interface between the controller logic and the
//! page it runs against. The browser implementation lives in
//! `druidic-ui-browser` and talks to the DOM; tests use an in-memory page
//! with a virtual clock.

use std::future::Future;

use crate::error::UiError;
use crate::shortcut::{KeyChord, KeyDisposition};

/// How a scroll request animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Auto,
    Smooth,
}

/// Vertical alignment of a scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
    Center,
    End,
    /// Scroll only as far as needed to bring the element into view.
    Nearest,
}

/// Options for `PagePlatform::scroll_into_view`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

impl ScrollOptions {
    /// Smooth scroll, moving no further than needed.
    pub const SMOOTH_NEAREST: Self = Self {
        behavior: ScrollBehavior::Smooth,
        block: ScrollBlock::Nearest,
    };
}

/// The rendered page: element lookup, mutation, events and timers.
///
/// Implementations are cheap handles (`Clone`) onto shared page state.
/// Listener and timeout handles unsubscribe/cancel when dropped.
pub trait PagePlatform: Clone + 'static {
    /// Handle to an element of the page.
    type Element: Clone + 'static;
    /// Event subscription. Dropping it removes the listener.
    type Listener: 'static;
    /// Pending timer. Dropping it cancels the callback.
    type Timeout: 'static;

    /// Look up an element by id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// First element matching a CSS selector.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Read a `data-*` attribute (`key` without the `data-` prefix).
    fn data_attribute(&self, element: &Self::Element, key: &str) -> Option<String>;

    fn set_text_content(&self, element: &Self::Element, text: &str);

    /// Add (`present == true`) or remove a class.
    fn set_class(&self, element: &Self::Element, class: &str, present: bool)
    -> Result<(), UiError>;

    fn scroll_into_view(&self, element: &Self::Element, options: ScrollOptions);

    /// Submit the form with the given id.
    fn submit_form(&self, form_id: &str) -> Result<(), UiError>;

    /// Origin of the current page, e.g. `https://example.test`.
    fn origin(&self) -> Result<String, UiError>;

    fn on_click(&self, element: &Self::Element, handler: impl FnMut() + 'static)
    -> Self::Listener;

    /// Subscribe to key-down events. When the handler returns
    /// `KeyDisposition::PreventDefault` the platform suppresses the
    /// event's default action.
    fn on_keydown(
        &self,
        element: &Self::Element,
        handler: impl FnMut(&KeyChord) -> KeyDisposition + 'static,
    ) -> Self::Listener;

    /// Run `callback` once after `millis` milliseconds.
    fn set_timeout(&self, millis: u32, callback: impl FnOnce() + 'static) -> Self::Timeout;

    /// Run a future to completion on the local event loop.
    fn spawn_local(&self, task: impl Future<Output = ()> + 'static);
}

/// Clipboard access.
///
/// Two paths: the async clipboard capability, and the legacy synchronous
/// copy command used when the async one is missing or refuses.
pub trait ClipboardPlatform {
    /// Write text through the async clipboard capability.
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), UiError>>;

    /// Copy text with the legacy selection + copy-command technique.
    fn legacy_copy(&self, text: &str) -> Result<(), UiError>;
}
