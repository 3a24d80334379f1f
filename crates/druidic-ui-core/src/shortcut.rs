//! Keyboard chords and the submit shortcut.

use smol_str::SmolStr;

/// Key name and modifier state of a key-down event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyChord {
    /// `KeyboardEvent.key` value, e.g. `"Enter"` or `"a"`.
    pub key: SmolStr,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyChord {
    /// A chord with no modifiers held.
    pub fn new(key: impl Into<SmolStr>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Either platform's primary modifier: Ctrl, or Cmd on macOS.
    pub fn primary_modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Whether the platform should suppress the event's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Let the browser perform its default action.
    PassThrough,
    /// Call `preventDefault()` on the event.
    PreventDefault,
}

/// Ctrl+Enter or Cmd+Enter. Other modifiers are ignored.
pub fn is_submit_shortcut(chord: &KeyChord) -> bool {
    chord.primary_modifier() && chord.key == "Enter"
}
