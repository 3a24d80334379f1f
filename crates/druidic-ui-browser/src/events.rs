//! Browser event extraction.

use druidic_ui_core::KeyChord;

/// Key name and modifier state of a keyboard event.
pub fn key_chord(event: &web_sys::KeyboardEvent) -> KeyChord {
    KeyChord {
        key: event.key().into(),
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
        shift: event.shift_key(),
        alt: event.alt_key(),
    }
}
