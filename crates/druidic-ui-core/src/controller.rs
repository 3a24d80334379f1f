//! Controller installation.
//!
//! `install` looks up each optional anchor once and binds the matching
//! behavior. Absent anchors are skipped silently. The returned `Bindings`
//! own every listener and timer; dropping them tears the controller down.

use std::rc::Rc;

use crate::config::ControllerConfig;
use crate::copy::{CopyRequest, copy_with_fallback};
use crate::feedback::Feedback;
use crate::platform::{ClipboardPlatform, PagePlatform, ScrollOptions};
use crate::share::ShareLink;
use crate::shortcut::{KeyDisposition, is_submit_shortcut};

/// Behaviors the controller can install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Click on the copy trigger copies its `data-text`.
    Copy,
    /// Click on the share trigger copies a share link.
    Share,
    /// Scroll the output region into view shortly after load.
    ScrollToOutput,
    /// Ctrl/Cmd+Enter in the input field submits the form.
    SubmitShortcut,
}

/// Live subscriptions of an installed controller.
pub struct Bindings<P: PagePlatform> {
    listeners: Vec<P::Listener>,
    scroll: Option<P::Timeout>,
    feedback: Feedback<P>,
    installed: Vec<Anchor>,
}

impl<P: PagePlatform> Bindings<P> {
    /// Installed behaviors, in installation order.
    pub fn installed(&self) -> &[Anchor] {
        &self.installed
    }

    pub fn is_installed(&self, anchor: Anchor) -> bool {
        self.installed.contains(&anchor)
    }

    pub fn feedback(&self) -> &Feedback<P> {
        &self.feedback
    }

    /// Remove all listeners and cancel the pending scroll.
    ///
    /// Equivalent to dropping, except a visible feedback message is hidden
    /// right away instead of staying up with its timer cancelled.
    pub fn dispose(self) {
        self.feedback.hide_now();
        tracing::debug!(
            listeners = self.listeners.len(),
            scroll_armed = self.scroll.is_some(),
            "Controller disposed"
        );
    }
}

impl<P: PagePlatform> Drop for Bindings<P> {
    fn drop(&mut self) {
        // Copies spawned before teardown may still resolve afterwards.
        self.feedback.disable();
    }
}

/// Bind every behavior whose anchor exists on the page.
pub fn install<P>(page: &P, config: &ControllerConfig) -> Bindings<P>
where
    P: PagePlatform + ClipboardPlatform,
{
    let config = Rc::new(config.clone());
    let feedback = Feedback::new(
        page,
        &config.feedback_id,
        &config.visible_class,
        config.feedback_hide_ms,
    );

    let mut bindings = Bindings {
        listeners: Vec::new(),
        scroll: None,
        feedback: feedback.clone(),
        installed: Vec::new(),
    };

    if let Some(button) = page.query_selector(&config.copy_selector) {
        bindings
            .listeners
            .push(bind_copy(page, &button, config.clone(), feedback.clone()));
        bindings.installed.push(Anchor::Copy);
    }

    if let Some(output) = page.element_by_id(&config.output_id) {
        let scroll_page = page.clone();
        let timeout = page.set_timeout(config.scroll_delay_ms, move || {
            scroll_page.scroll_into_view(&output, ScrollOptions::SMOOTH_NEAREST);
        });
        bindings.scroll = Some(timeout);
        bindings.installed.push(Anchor::ScrollToOutput);
    }

    if let Some(input) = page.element_by_id(&config.input_id) {
        bindings
            .listeners
            .push(bind_submit_shortcut(page, &input, config.clone()));
        bindings.installed.push(Anchor::SubmitShortcut);
    }

    if let Some(button) = page.query_selector(&config.share_selector) {
        bindings
            .listeners
            .push(bind_share(page, &button, config.clone(), feedback));
        bindings.installed.push(Anchor::Share);
    }

    tracing::debug!(installed = ?bindings.installed, "Controller installed");
    bindings
}

fn bind_copy<P>(
    page: &P,
    button: &P::Element,
    config: Rc<ControllerConfig>,
    feedback: Feedback<P>,
) -> P::Listener
where
    P: PagePlatform + ClipboardPlatform,
{
    let handler_page = page.clone();
    let target = button.clone();
    page.on_click(button, move || {
        // Read at click time so later attribute updates are honored.
        let Some(text) = handler_page.data_attribute(&target, "text") else {
            tracing::warn!("Copy trigger has no data-text, ignoring click");
            return;
        };
        let request = CopyRequest::new(text, &config.messages.copied)
            .with_fallback_message(&config.messages.copied_fallback);
        spawn_copy(&handler_page, request, feedback.clone());
    })
}

fn bind_share<P>(
    page: &P,
    button: &P::Element,
    config: Rc<ControllerConfig>,
    feedback: Feedback<P>,
) -> P::Listener
where
    P: PagePlatform + ClipboardPlatform,
{
    let handler_page = page.clone();
    let target = button.clone();
    page.on_click(button, move || {
        let text = handler_page.data_attribute(&target, "text");
        let script = handler_page.data_attribute(&target, "script");
        let (Some(text), Some(script)) = (text, script) else {
            tracing::warn!("Share trigger needs data-text and data-script, ignoring click");
            return;
        };
        let origin = match handler_page.origin() {
            Ok(origin) => origin,
            Err(e) => {
                tracing::warn!("Cannot build share link: {}", e);
                return;
            }
        };

        let url = ShareLink::new(&origin, &text, &script)
            .with_path(&config.share_path)
            .to_string();
        // Same wording whichever clipboard path succeeds.
        let request = CopyRequest::new(url, &config.messages.link_copied);
        spawn_copy(&handler_page, request, feedback.clone());
    })
}

fn spawn_copy<P>(page: &P, request: CopyRequest, feedback: Feedback<P>)
where
    P: PagePlatform + ClipboardPlatform,
{
    let clipboard = page.clone();
    page.spawn_local(async move {
        match copy_with_fallback(&clipboard, &request).await {
            Ok(path) => {
                tracing::debug!(?path, "Copied {} bytes", request.payload.len());
                feedback.show(request.message_for(path));
            }
            Err(e) => tracing::warn!("Copy failed on both clipboard paths: {}", e),
        }
    });
}

fn bind_submit_shortcut<P>(page: &P, input: &P::Element, config: Rc<ControllerConfig>) -> P::Listener
where
    P: PagePlatform,
{
    let handler_page = page.clone();
    page.on_keydown(input, move |chord| {
        if !is_submit_shortcut(chord) {
            return KeyDisposition::PassThrough;
        }
        if let Err(e) = handler_page.submit_form(&config.form_id) {
            tracing::warn!("Submit shortcut failed: {}", e);
            return KeyDisposition::PassThrough;
        }
        if config.suppress_newline_on_submit {
            KeyDisposition::PreventDefault
        } else {
            KeyDisposition::PassThrough
        }
    })
}
