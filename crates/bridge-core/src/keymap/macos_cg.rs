//! macOS `CGKeyCode` translation.
//!
//! Reference: `Carbon/HIToolbox/Events.h` `kVK_*` constants. CGKeyCodes are
//! ANSI-layout physical key positions, so the values are irregular — the
//! letter codes do not follow alphabetical order.
//!
//! macOS has no Insert key; that translation returns `None` and the caller
//! reports the key as unavailable on this platform.

use super::KeyCode;

/// Translates a [`KeyCode`] to its macOS `CGKeyCode` value.
pub fn key_to_cgkeycode(key: KeyCode) -> Option<u16> {
    use KeyCode::*;

    let code = match key {
        // Letters (kVK_ANSI_*)
        KeyA => 0x00,
        KeyB => 0x0B,
        KeyC => 0x08,
        KeyD => 0x02,
        KeyE => 0x0E,
        KeyF => 0x03,
        KeyG => 0x05,
        KeyH => 0x04,
        KeyI => 0x22,
        KeyJ => 0x26,
        KeyK => 0x28,
        KeyL => 0x25,
        KeyM => 0x2E,
        KeyN => 0x2D,
        KeyO => 0x1F,
        KeyP => 0x23,
        KeyQ => 0x0C,
        KeyR => 0x0F,
        KeyS => 0x01,
        KeyT => 0x11,
        KeyU => 0x20,
        KeyV => 0x09,
        KeyW => 0x0D,
        KeyX => 0x07,
        KeyY => 0x10,
        KeyZ => 0x06,

        // Digit row (kVK_ANSI_0..9)
        Digit0 => 0x1D,
        Digit1 => 0x12,
        Digit2 => 0x13,
        Digit3 => 0x14,
        Digit4 => 0x15,
        Digit5 => 0x17,
        Digit6 => 0x16,
        Digit7 => 0x1A,
        Digit8 => 0x1C,
        Digit9 => 0x19,

        Enter => 0x24,     // kVK_Return
        Escape => 0x35,    // kVK_Escape
        Space => 0x31,     // kVK_Space
        Tab => 0x30,       // kVK_Tab
        Backspace => 0x33, // kVK_Delete (backward delete)
        Delete => 0x75,    // kVK_ForwardDelete
        Insert => return None,

        Home => 0x73,     // kVK_Home
        End => 0x77,      // kVK_End
        PageUp => 0x74,   // kVK_PageUp
        PageDown => 0x79, // kVK_PageDown
        Up => 0x7E,       // kVK_UpArrow
        Down => 0x7D,     // kVK_DownArrow
        Left => 0x7B,     // kVK_LeftArrow
        Right => 0x7C,    // kVK_RightArrow

        ShiftLeft => 0x38,  // kVK_Shift
        ShiftRight => 0x3C, // kVK_RightShift
        CtrlLeft => 0x3B,   // kVK_Control
        CtrlRight => 0x3E,  // kVK_RightControl
        AltLeft => 0x3A,    // kVK_Option
        AltRight => 0x3D,   // kVK_RightOption
        MetaLeft => 0x37,   // kVK_Command
        MetaRight => 0x36,  // kVK_RightCommand
        CapsLock => 0x39,   // kVK_CapsLock

        F1 => 0x7A,
        F2 => 0x78,
        F3 => 0x63,
        F4 => 0x76,
        F5 => 0x60,
        F6 => 0x61,
        F7 => 0x62,
        F8 => 0x64,
        F9 => 0x65,
        F10 => 0x6D,
        F11 => 0x67,
        F12 => 0x6F,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_cgkeycodes_are_positional_not_alphabetical() {
        assert_eq!(key_to_cgkeycode(KeyCode::KeyA), Some(0x00));
        assert_eq!(key_to_cgkeycode(KeyCode::KeyS), Some(0x01));
        assert_eq!(key_to_cgkeycode(KeyCode::KeyB), Some(0x0B));
    }

    #[test]
    fn test_insert_has_no_macos_equivalent() {
        assert_eq!(key_to_cgkeycode(KeyCode::Insert), None);
    }

    #[test]
    fn test_named_key_cgkeycodes() {
        assert_eq!(key_to_cgkeycode(KeyCode::Enter), Some(0x24));
        assert_eq!(key_to_cgkeycode(KeyCode::MetaLeft), Some(0x37));
        assert_eq!(key_to_cgkeycode(KeyCode::F12), Some(0x6F));
    }
}
