//! In-memory page for unit tests.
//!
//! Elements are addressed by id. Timers run on a virtual clock advanced
//! with `advance`, spawned tasks run when `flush` is called, mirroring a
//! browser's microtask checkpoint.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::future::Future;
use std::rc::{Rc, Weak};

use futures::executor::{LocalPool, LocalSpawner};
use futures::task::LocalSpawnExt;

use crate::error::UiError;
use crate::platform::{ClipboardPlatform, PagePlatform, ScrollOptions};
use crate::shortcut::{KeyChord, KeyDisposition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMode {
    Resolve,
    Reject,
    Unavailable,
}

#[derive(Default)]
struct FakeElement {
    id: String,
    classes: BTreeSet<String>,
    text: String,
    data: HashMap<String, String>,
}

type ClickHandler = Rc<RefCell<dyn FnMut()>>;
type KeyHandler = Rc<RefCell<dyn FnMut(&KeyChord) -> KeyDisposition>>;

struct Subscription<H> {
    id: u64,
    element: String,
    handler: H,
}

struct FakeTimer {
    due: u64,
    cancelled: Rc<Cell<bool>>,
    callback: Box<dyn FnOnce()>,
}

struct PageState {
    origin: String,
    elements: Vec<FakeElement>,
    clicks: Vec<Subscription<ClickHandler>>,
    keydowns: Vec<Subscription<KeyHandler>>,
    next_subscription: u64,
    now: u64,
    timers: Vec<FakeTimer>,
    clipboard_mode: ClipboardMode,
    legacy_copy_fails: bool,
    clipboard_writes: Vec<String>,
    legacy_copies: Vec<String>,
    scrolls: Vec<(String, ScrollOptions, u64)>,
    submissions: Vec<String>,
}

impl PageState {
    fn element(&self, id: &str) -> Option<&FakeElement> {
        self.elements.iter().find(|el| el.id == id)
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut FakeElement> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    fn next_subscription_id(&mut self) -> u64 {
        self.next_subscription += 1;
        self.next_subscription
    }
}

/// Listener handle. Dropping it removes the subscription and its handler.
pub struct FakeListener {
    state: Weak<RefCell<PageState>>,
    id: u64,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        let Some(state) = self.state.upgrade() else {
            return;
        };
        let id = self.id;
        // Handlers are dropped after the borrow ends; they may own page handles.
        let _removed = {
            let mut state = state.borrow_mut();
            let click = state.clicks.iter().position(|sub| sub.id == id);
            let click = click.map(|i| state.clicks.remove(i));
            let keydown = state.keydowns.iter().position(|sub| sub.id == id);
            let keydown = keydown.map(|i| state.keydowns.remove(i));
            (click, keydown)
        };
    }
}

/// Timer handle. Dropping it cancels the timer.
pub struct FakeTimeout(Rc<Cell<bool>>);

impl Drop for FakeTimeout {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

#[derive(Clone)]
pub struct FakePage {
    state: Rc<RefCell<PageState>>,
    pool: Rc<RefCell<LocalPool>>,
    spawner: LocalSpawner,
}

impl FakePage {
    pub fn new() -> Self {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        Self {
            state: Rc::new(RefCell::new(PageState {
                origin: "https://example.test".to_owned(),
                elements: Vec::new(),
                clicks: Vec::new(),
                keydowns: Vec::new(),
                next_subscription: 0,
                now: 0,
                timers: Vec::new(),
                clipboard_mode: ClipboardMode::Resolve,
                legacy_copy_fails: false,
                clipboard_writes: Vec::new(),
                legacy_copies: Vec::new(),
                scrolls: Vec::new(),
                submissions: Vec::new(),
            })),
            pool: Rc::new(RefCell::new(pool)),
            spawner,
        }
    }

    // === Setup ===

    pub fn add_element(&self, id: &str, classes: &[&str]) {
        self.state.borrow_mut().elements.push(FakeElement {
            id: id.to_owned(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        });
    }

    pub fn set_data(&self, id: &str, key: &str, value: &str) {
        let mut state = self.state.borrow_mut();
        let element = state.element_mut(id).expect("no such element");
        element.data.insert(key.to_owned(), value.to_owned());
    }

    pub fn set_origin(&self, origin: &str) {
        self.state.borrow_mut().origin = origin.to_owned();
    }

    pub fn set_clipboard_mode(&self, mode: ClipboardMode) {
        self.state.borrow_mut().clipboard_mode = mode;
    }

    pub fn set_legacy_copy_fails(&self, fails: bool) {
        self.state.borrow_mut().legacy_copy_fails = fails;
    }

    // === Driving ===

    /// Dispatch a click to every active listener on the element.
    pub fn click(&self, id: &str) {
        let handlers: Vec<ClickHandler> = {
            let state = self.state.borrow();
            state
                .clicks
                .iter()
                .filter(|sub| sub.element == id)
                .map(|sub| sub.handler.clone())
                .collect()
        };
        for handler in handlers {
            (handler.borrow_mut())();
        }
    }

    /// Dispatch a key-down. Returns `None` when nothing listened.
    pub fn keydown(&self, id: &str, chord: &KeyChord) -> Option<KeyDisposition> {
        let handlers: Vec<KeyHandler> = {
            let state = self.state.borrow();
            state
                .keydowns
                .iter()
                .filter(|sub| sub.element == id)
                .map(|sub| sub.handler.clone())
                .collect()
        };
        let mut result = None;
        for handler in handlers {
            let disposition = (handler.borrow_mut())(chord);
            if result != Some(KeyDisposition::PreventDefault) {
                result = Some(disposition);
            }
        }
        result
    }

    /// Run spawned tasks until none can make progress.
    pub fn flush(&self) {
        self.pool.borrow_mut().run_until_stalled();
    }

    /// Move the virtual clock forward, firing due timers in order.
    pub fn advance(&self, millis: u64) {
        let target = self.state.borrow().now + millis;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                state.timers.retain(|t| !t.cancelled.get());
                let due = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| t.due)
                    .map(|(i, _)| i);
                due.map(|i| {
                    let timer = state.timers.remove(i);
                    state.now = timer.due;
                    timer.callback
                })
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }

    // === Inspection ===

    pub fn text(&self, id: &str) -> String {
        self.state
            .borrow()
            .element(id)
            .map(|el| el.text.clone())
            .unwrap_or_default()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.state
            .borrow()
            .element(id)
            .is_some_and(|el| el.classes.contains(class))
    }

    pub fn clipboard_writes(&self) -> Vec<String> {
        self.state.borrow().clipboard_writes.clone()
    }

    pub fn legacy_copies(&self) -> Vec<String> {
        self.state.borrow().legacy_copies.clone()
    }

    /// `(element id, options, virtual time)` of each scroll request.
    pub fn scrolls(&self) -> Vec<(String, ScrollOptions, u64)> {
        self.state.borrow().scrolls.clone()
    }

    pub fn submissions(&self) -> Vec<String> {
        self.state.borrow().submissions.clone()
    }

    pub fn pending_timers(&self) -> usize {
        self.state
            .borrow()
            .timers
            .iter()
            .filter(|t| !t.cancelled.get())
            .count()
    }

    pub fn active_listeners(&self) -> usize {
        let state = self.state.borrow();
        state.clicks.len() + state.keydowns.len()
    }
}

impl PagePlatform for FakePage {
    type Element = String;
    type Listener = FakeListener;
    type Timeout = FakeTimeout;

    fn element_by_id(&self, id: &str) -> Option<String> {
        self.state.borrow().element(id).map(|el| el.id.clone())
    }

    fn query_selector(&self, selector: &str) -> Option<String> {
        let state = self.state.borrow();
        if let Some(class) = selector.strip_prefix('.') {
            state
                .elements
                .iter()
                .find(|el| el.classes.contains(class))
                .map(|el| el.id.clone())
        } else if let Some(id) = selector.strip_prefix('#') {
            state.element(id).map(|el| el.id.clone())
        } else {
            None
        }
    }

    fn data_attribute(&self, element: &String, key: &str) -> Option<String> {
        self.state
            .borrow()
            .element(element)
            .and_then(|el| el.data.get(key).cloned())
    }

    fn set_text_content(&self, element: &String, text: &str) {
        if let Some(el) = self.state.borrow_mut().element_mut(element) {
            el.text = text.to_owned();
        }
    }

    fn set_class(&self, element: &String, class: &str, present: bool) -> Result<(), UiError> {
        let mut state = self.state.borrow_mut();
        let el = state
            .element_mut(element)
            .ok_or_else(|| UiError::MissingElement(element.clone()))?;
        if present {
            el.classes.insert(class.to_owned());
        } else {
            el.classes.remove(class);
        }
        Ok(())
    }

    fn scroll_into_view(&self, element: &String, options: ScrollOptions) {
        let mut state = self.state.borrow_mut();
        let now = state.now;
        state.scrolls.push((element.clone(), options, now));
    }

    fn submit_form(&self, form_id: &str) -> Result<(), UiError> {
        let mut state = self.state.borrow_mut();
        if state.element(form_id).is_none() {
            return Err(UiError::MissingElement(form_id.to_owned()));
        }
        state.submissions.push(form_id.to_owned());
        Ok(())
    }

    fn origin(&self) -> Result<String, UiError> {
        Ok(self.state.borrow().origin.clone())
    }

    fn on_click(&self, element: &String, handler: impl FnMut() + 'static) -> FakeListener {
        let mut state = self.state.borrow_mut();
        let id = state.next_subscription_id();
        state.clicks.push(Subscription {
            id,
            element: element.clone(),
            handler: Rc::new(RefCell::new(handler)),
        });
        FakeListener {
            state: Rc::downgrade(&self.state),
            id,
        }
    }

    fn on_keydown(
        &self,
        element: &String,
        handler: impl FnMut(&KeyChord) -> KeyDisposition + 'static,
    ) -> FakeListener {
        let mut state = self.state.borrow_mut();
        let id = state.next_subscription_id();
        state.keydowns.push(Subscription {
            id,
            element: element.clone(),
            handler: Rc::new(RefCell::new(handler)),
        });
        FakeListener {
            state: Rc::downgrade(&self.state),
            id,
        }
    }

    fn set_timeout(&self, millis: u32, callback: impl FnOnce() + 'static) -> FakeTimeout {
        let cancelled = Rc::new(Cell::new(false));
        let mut state = self.state.borrow_mut();
        let due = state.now + u64::from(millis);
        state.timers.push(FakeTimer {
            due,
            cancelled: cancelled.clone(),
            callback: Box::new(callback),
        });
        FakeTimeout(cancelled)
    }

    fn spawn_local(&self, task: impl Future<Output = ()> + 'static) {
        self.spawner
            .spawn_local(task)
            .expect("local pool shut down");
    }
}

impl ClipboardPlatform for FakePage {
    async fn write_text(&self, text: &str) -> Result<(), UiError> {
        let mode = self.state.borrow().clipboard_mode;
        match mode {
            ClipboardMode::Resolve => {
                self.state.borrow_mut().clipboard_writes.push(text.to_owned());
                Ok(())
            }
            ClipboardMode::Reject => {
                self.state.borrow_mut().clipboard_writes.push(text.to_owned());
                Err(UiError::ClipboardRejected("denied".to_owned()))
            }
            ClipboardMode::Unavailable => Err(UiError::ClipboardUnavailable),
        }
    }

    fn legacy_copy(&self, text: &str) -> Result<(), UiError> {
        let mut state = self.state.borrow_mut();
        if state.legacy_copy_fails {
            return Err(UiError::LegacyCopy("execCommand returned false".to_owned()));
        }
        state.legacy_copies.push(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropped_listener_releases_handler() {
        let page = FakePage::new();
        page.add_element("copy", &[]);
        let captured = Rc::new(());

        let held = captured.clone();
        let listener = page.on_click(&"copy".to_owned(), move || {
            let _ = &held;
        });
        assert_eq!(Rc::strong_count(&captured), 2);

        drop(listener);
        assert_eq!(Rc::strong_count(&captured), 1);
        assert_eq!(page.active_listeners(), 0);
    }

    #[test]
    fn test_dropping_one_listener_keeps_the_other() {
        let page = FakePage::new();
        page.add_element("input", &[]);
        let first = page.on_keydown(&"input".to_owned(), |_| KeyDisposition::PassThrough);
        let _second = page.on_keydown(&"input".to_owned(), |_| KeyDisposition::PreventDefault);

        drop(first);

        assert_eq!(page.active_listeners(), 1);
        assert_eq!(
            page.keydown("input", &KeyChord::new("Enter")),
            Some(KeyDisposition::PreventDefault)
        );
    }
}
