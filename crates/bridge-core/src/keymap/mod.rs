//! Key code translation tables for keyboard input injection.
//!
//! The canonical representation is [`KeyCode`], a platform-neutral
//! enumeration of every key the wire protocol can name. Key *names* arriving
//! on the wire (`"enter"`, `"esc"`, `"f5"`, ...) are resolved by
//! [`names::key_from_name`]; the per-platform tables translate the canonical
//! code to the native code at the injection boundary.
//!
//! The tables are pure functions with no OS dependencies, so tests exercise
//! all of them on any platform.

pub mod linux_x11;
pub mod macos_cg;
pub mod names;
pub mod windows_vk;

pub use names::key_from_name;

/// Platform-neutral key enumeration.
///
/// Covers the key-name vocabulary of the wire protocol: letters, digits,
/// editing and navigation keys, modifiers, and the function row. A key that
/// the protocol cannot name has no variant here; an unknown name is rejected
/// at resolution time rather than carried as a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Letters
    KeyA,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF,
    KeyG,
    KeyH,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyM,
    KeyN,
    KeyO,
    KeyP,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyU,
    KeyV,
    KeyW,
    KeyX,
    KeyY,
    KeyZ,

    // Digit row
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,

    // Editing
    Enter,
    Escape,
    Space,
    Tab,
    Backspace,
    Delete,
    Insert,

    // Navigation
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,

    // Modifiers and locks
    ShiftLeft,
    ShiftRight,
    CtrlLeft,
    CtrlRight,
    AltLeft,
    AltRight,
    MetaLeft,
    MetaRight,
    CapsLock,

    // Function row
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

/// Unified key mapper providing all translation directions.
pub struct KeyMapper;

impl KeyMapper {
    /// Resolves a wire key name to a [`KeyCode`].
    ///
    /// Returns `None` for names outside the protocol vocabulary.
    pub fn name_to_key(name: &str) -> Option<KeyCode> {
        names::key_from_name(name)
    }

    /// Translates a [`KeyCode`] to a Windows Virtual-Key code.
    pub fn key_to_windows_vk(key: KeyCode) -> Option<u8> {
        windows_vk::key_to_vk(key)
    }

    /// Translates a [`KeyCode`] to an X11 KeySym value.
    pub fn key_to_x11_keysym(key: KeyCode) -> Option<u32> {
        linux_x11::key_to_keysym(key)
    }

    /// Translates a [`KeyCode`] to a macOS `CGKeyCode` value.
    ///
    /// Returns `None` for keys with no ANSI-layout equivalent (e.g. Insert).
    pub fn key_to_macos_cgkeycode(key: KeyCode) -> Option<u16> {
        macos_cg::key_to_cgkeycode(key)
    }
}
