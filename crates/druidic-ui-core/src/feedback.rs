//! Transient feedback messages.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::platform::PagePlatform;

/// Shows a message in the feedback region, then hides it again.
///
/// Owns one pending hide timer. A new `show` drops the previous handle,
/// cancelling it, so an older message's timer never hides a newer one.
/// Once disabled, every clone stops showing messages.
pub struct Feedback<P: PagePlatform> {
    page: P,
    region: Option<P::Element>,
    visible_class: Rc<str>,
    hide_after_ms: u32,
    pending: Rc<RefCell<Option<P::Timeout>>>,
    disabled: Rc<Cell<bool>>,
}

impl<P: PagePlatform> Clone for Feedback<P> {
    fn clone(&self) -> Self {
        Self {
            page: self.page.clone(),
            region: self.region.clone(),
            visible_class: self.visible_class.clone(),
            hide_after_ms: self.hide_after_ms,
            pending: self.pending.clone(),
            disabled: self.disabled.clone(),
        }
    }
}

impl<P: PagePlatform> Feedback<P> {
    /// Look up the region once. `None` makes every `show` a no-op.
    pub fn new(page: &P, region_id: &str, visible_class: &str, hide_after_ms: u32) -> Self {
        let region = page.element_by_id(region_id);
        if region.is_none() {
            tracing::debug!("No #{} on page, feedback messages are dropped", region_id);
        }
        Self {
            page: page.clone(),
            region,
            visible_class: visible_class.into(),
            hide_after_ms,
            pending: Rc::new(RefCell::new(None)),
            disabled: Rc::new(Cell::new(false)),
        }
    }

    pub fn has_region(&self) -> bool {
        self.region.is_some()
    }

    pub fn show(&self, message: &str) {
        if self.disabled.get() {
            tracing::debug!("Feedback disabled, dropping message");
            return;
        }
        let Some(region) = &self.region else {
            return;
        };

        self.page.set_text_content(region, message);
        if let Err(e) = self.page.set_class(region, &self.visible_class, true) {
            tracing::warn!("Failed to show feedback: {}", e);
        }

        let page = self.page.clone();
        let hide_region = region.clone();
        let class = self.visible_class.clone();
        let timeout = self.page.set_timeout(self.hide_after_ms, move || {
            if let Err(e) = page.set_class(&hide_region, &class, false) {
                tracing::warn!("Failed to hide feedback: {}", e);
            }
        });

        // Replacing the handle drops (cancels) the previous hide timer.
        self.pending.replace(Some(timeout));
    }

    /// Cancel any pending hide. The current message stays as it is.
    pub(crate) fn cancel_pending(&self) {
        self.pending.borrow_mut().take();
    }

    /// Stop showing messages, including from copies still in flight.
    pub(crate) fn disable(&self) {
        self.disabled.set(true);
        self.cancel_pending();
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    /// Hide a visible message now instead of waiting for its timer.
    pub fn hide_now(&self) {
        let Some(pending) = self.pending.borrow_mut().take() else {
            return;
        };
        drop(pending);
        if let Some(region) = &self.region {
            if let Err(e) = self.page.set_class(region, &self.visible_class, false) {
                tracing::warn!("Failed to hide feedback: {}", e);
            }
        }
    }
}
