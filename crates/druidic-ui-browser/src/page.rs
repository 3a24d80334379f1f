//! Browser implementation of page platform operations.
//!
//! Element lookup and mutation go through `web-sys`, listeners are
//! `gloo_events::EventListener`s and timers are `gloo_timers` timeouts, so
//! dropping either handle detaches it from the page.

use std::future::Future;

use druidic_ui_core::{
    KeyChord, KeyDisposition, PagePlatform, ScrollBehavior, ScrollBlock, ScrollOptions, UiError,
};
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, KeyboardEvent, ScrollIntoViewOptions, Window};

use crate::events::key_chord;
use crate::js_error_message;

/// The live browser page.
#[derive(Clone)]
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    /// The current window and its document, if both exist.
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn from_parts(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl PagePlatform for BrowserPage {
    type Element = Element;
    type Listener = EventListener;
    type Timeout = Timeout;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_selector(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(element) => element,
            Err(e) => {
                tracing::warn!("Bad selector {:?}: {}", selector, js_error_message(e));
                None
            }
        }
    }

    fn data_attribute(&self, element: &Element, key: &str) -> Option<String> {
        element.get_attribute(&format!("data-{key}"))
    }

    fn set_text_content(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_class(&self, element: &Element, class: &str, present: bool) -> Result<(), UiError> {
        let class_list = element.class_list();
        let result = if present {
            class_list.add_1(class)
        } else {
            class_list.remove_1(class)
        };
        result.map_err(|e| UiError::Dom(js_error_message(e)))
    }

    fn scroll_into_view(&self, element: &Element, options: ScrollOptions) {
        let scroll_options = ScrollIntoViewOptions::new();
        scroll_options.set_behavior(match options.behavior {
            ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        scroll_options.set_block(match options.block {
            ScrollBlock::Start => web_sys::ScrollLogicalPosition::Start,
            ScrollBlock::Center => web_sys::ScrollLogicalPosition::Center,
            ScrollBlock::End => web_sys::ScrollLogicalPosition::End,
            ScrollBlock::Nearest => web_sys::ScrollLogicalPosition::Nearest,
        });
        element.scroll_into_view_with_scroll_into_view_options(&scroll_options);
    }

    fn submit_form(&self, form_id: &str) -> Result<(), UiError> {
        let form = self
            .document
            .get_element_by_id(form_id)
            .ok_or_else(|| UiError::MissingElement(form_id.to_owned()))?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| UiError::Dom(format!("#{form_id} is not a form")))?;
        form.submit().map_err(|e| UiError::Dom(js_error_message(e)))
    }

    fn origin(&self) -> Result<String, UiError> {
        self.window
            .location()
            .origin()
            .map_err(|e| UiError::Dom(js_error_message(e)))
    }

    fn on_click(&self, element: &Element, mut handler: impl FnMut() + 'static) -> EventListener {
        EventListener::new(element, "click", move |_event| handler())
    }

    fn on_keydown(
        &self,
        element: &Element,
        mut handler: impl FnMut(&KeyChord) -> KeyDisposition + 'static,
    ) -> EventListener {
        // gloo listeners are passive by default, which ignores preventDefault().
        let options = EventListenerOptions::enable_prevent_default();
        EventListener::new_with_options(element, "keydown", options, move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if handler(&key_chord(key_event)) == KeyDisposition::PreventDefault {
                event.prevent_default();
            }
        })
    }

    fn set_timeout(&self, millis: u32, callback: impl FnOnce() + 'static) -> Timeout {
        Timeout::new(millis, callback)
    }

    fn spawn_local(&self, task: impl Future<Output = ()> + 'static) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
