//! Windows Virtual-Key code translation.
//!
//! Reference: `WinUser.h` VK_* constants. Letters and digits share their
//! ASCII uppercase values; everything else has a dedicated constant.

use super::KeyCode;

/// Translates a [`KeyCode`] to its Windows Virtual-Key code.
pub fn key_to_vk(key: KeyCode) -> Option<u8> {
    use KeyCode::*;

    let vk = match key {
        // Letters: VK codes equal ASCII 'A'..'Z'
        KeyA => 0x41,
        KeyB => 0x42,
        KeyC => 0x43,
        KeyD => 0x44,
        KeyE => 0x45,
        KeyF => 0x46,
        KeyG => 0x47,
        KeyH => 0x48,
        KeyI => 0x49,
        KeyJ => 0x4A,
        KeyK => 0x4B,
        KeyL => 0x4C,
        KeyM => 0x4D,
        KeyN => 0x4E,
        KeyO => 0x4F,
        KeyP => 0x50,
        KeyQ => 0x51,
        KeyR => 0x52,
        KeyS => 0x53,
        KeyT => 0x54,
        KeyU => 0x55,
        KeyV => 0x56,
        KeyW => 0x57,
        KeyX => 0x58,
        KeyY => 0x59,
        KeyZ => 0x5A,

        // Digits: VK codes equal ASCII '0'..'9'
        Digit0 => 0x30,
        Digit1 => 0x31,
        Digit2 => 0x32,
        Digit3 => 0x33,
        Digit4 => 0x34,
        Digit5 => 0x35,
        Digit6 => 0x36,
        Digit7 => 0x37,
        Digit8 => 0x38,
        Digit9 => 0x39,

        Enter => 0x0D,     // VK_RETURN
        Escape => 0x1B,    // VK_ESCAPE
        Space => 0x20,     // VK_SPACE
        Tab => 0x09,       // VK_TAB
        Backspace => 0x08, // VK_BACK
        Delete => 0x2E,    // VK_DELETE
        Insert => 0x2D,    // VK_INSERT

        Home => 0x24,     // VK_HOME
        End => 0x23,      // VK_END
        PageUp => 0x21,   // VK_PRIOR
        PageDown => 0x22, // VK_NEXT
        Up => 0x26,       // VK_UP
        Down => 0x28,     // VK_DOWN
        Left => 0x25,     // VK_LEFT
        Right => 0x27,    // VK_RIGHT

        ShiftLeft => 0xA0,  // VK_LSHIFT
        ShiftRight => 0xA1, // VK_RSHIFT
        CtrlLeft => 0xA2,   // VK_LCONTROL
        CtrlRight => 0xA3,  // VK_RCONTROL
        AltLeft => 0xA4,    // VK_LMENU
        AltRight => 0xA5,   // VK_RMENU
        MetaLeft => 0x5B,   // VK_LWIN
        MetaRight => 0x5C,  // VK_RWIN
        CapsLock => 0x14,   // VK_CAPITAL

        F1 => 0x70,
        F2 => 0x71,
        F3 => 0x72,
        F4 => 0x73,
        F5 => 0x74,
        F6 => 0x75,
        F7 => 0x76,
        F8 => 0x77,
        F9 => 0x78,
        F10 => 0x79,
        F11 => 0x7A,
        F12 => 0x7B,
    };
    Some(vk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_and_digit_vk_codes_follow_ascii() {
        assert_eq!(key_to_vk(KeyCode::KeyA), Some(0x41));
        assert_eq!(key_to_vk(KeyCode::KeyZ), Some(0x5A));
        assert_eq!(key_to_vk(KeyCode::Digit0), Some(0x30));
    }

    #[test]
    fn test_named_key_vk_codes() {
        assert_eq!(key_to_vk(KeyCode::Enter), Some(0x0D));
        assert_eq!(key_to_vk(KeyCode::F12), Some(0x7B));
        assert_eq!(key_to_vk(KeyCode::ShiftLeft), Some(0xA0));
    }
}
