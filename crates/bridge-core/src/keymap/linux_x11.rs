//! X11 KeySym translation for Linux input injection.
//!
//! Reference: `X11/keysymdef.h`. Letters use the lowercase Latin-1 KeySyms
//! (the X server resolves case through the Shift modifier), digits use their
//! ASCII values, and function/editing keys live in the 0xFFxx block.

use super::KeyCode;

/// Translates a [`KeyCode`] to its X11 KeySym value.
pub fn key_to_keysym(key: KeyCode) -> Option<u32> {
    use KeyCode::*;

    let keysym = match key {
        // Letters: lowercase Latin-1 KeySyms equal ASCII 'a'..'z'
        KeyA => 0x0061,
        KeyB => 0x0062,
        KeyC => 0x0063,
        KeyD => 0x0064,
        KeyE => 0x0065,
        KeyF => 0x0066,
        KeyG => 0x0067,
        KeyH => 0x0068,
        KeyI => 0x0069,
        KeyJ => 0x006A,
        KeyK => 0x006B,
        KeyL => 0x006C,
        KeyM => 0x006D,
        KeyN => 0x006E,
        KeyO => 0x006F,
        KeyP => 0x0070,
        KeyQ => 0x0071,
        KeyR => 0x0072,
        KeyS => 0x0073,
        KeyT => 0x0074,
        KeyU => 0x0075,
        KeyV => 0x0076,
        KeyW => 0x0077,
        KeyX => 0x0078,
        KeyY => 0x0079,
        KeyZ => 0x007A,

        // Digits: KeySyms equal ASCII '0'..'9'
        Digit0 => 0x0030,
        Digit1 => 0x0031,
        Digit2 => 0x0032,
        Digit3 => 0x0033,
        Digit4 => 0x0034,
        Digit5 => 0x0035,
        Digit6 => 0x0036,
        Digit7 => 0x0037,
        Digit8 => 0x0038,
        Digit9 => 0x0039,

        Enter => 0xFF0D,     // XK_Return
        Escape => 0xFF1B,    // XK_Escape
        Space => 0x0020,     // XK_space
        Tab => 0xFF09,       // XK_Tab
        Backspace => 0xFF08, // XK_BackSpace
        Delete => 0xFFFF,    // XK_Delete
        Insert => 0xFF63,    // XK_Insert

        Home => 0xFF50,     // XK_Home
        End => 0xFF57,      // XK_End
        PageUp => 0xFF55,   // XK_Prior
        PageDown => 0xFF56, // XK_Next
        Up => 0xFF52,       // XK_Up
        Down => 0xFF54,     // XK_Down
        Left => 0xFF51,     // XK_Left
        Right => 0xFF53,    // XK_Right

        ShiftLeft => 0xFFE1,  // XK_Shift_L
        ShiftRight => 0xFFE2, // XK_Shift_R
        CtrlLeft => 0xFFE3,   // XK_Control_L
        CtrlRight => 0xFFE4,  // XK_Control_R
        AltLeft => 0xFFE9,    // XK_Alt_L
        AltRight => 0xFFEA,   // XK_Alt_R
        MetaLeft => 0xFFEB,   // XK_Super_L
        MetaRight => 0xFFEC,  // XK_Super_R
        CapsLock => 0xFFE5,   // XK_Caps_Lock

        F1 => 0xFFBE,
        F2 => 0xFFBF,
        F3 => 0xFFC0,
        F4 => 0xFFC1,
        F5 => 0xFFC2,
        F6 => 0xFFC3,
        F7 => 0xFFC4,
        F8 => 0xFFC5,
        F9 => 0xFFC6,
        F10 => 0xFFC7,
        F11 => 0xFFC8,
        F12 => 0xFFC9,
    };
    Some(keysym)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_keysyms_are_lowercase_latin1() {
        assert_eq!(key_to_keysym(KeyCode::KeyA), Some(0x0061));
        assert_eq!(key_to_keysym(KeyCode::KeyZ), Some(0x007A));
    }

    #[test]
    fn test_named_key_keysyms() {
        assert_eq!(key_to_keysym(KeyCode::Enter), Some(0xFF0D));
        assert_eq!(key_to_keysym(KeyCode::F1), Some(0xFFBE));
        assert_eq!(key_to_keysym(KeyCode::MetaLeft), Some(0xFFEB));
    }
}
