//! Resolution of wire key names to canonical [`KeyCode`]s.
//!
//! The wire vocabulary follows the key-name convention of desktop automation
//! libraries: single characters name themselves (`"a"`, `"7"`), named keys
//! use lowercase words (`"enter"`, `"capslock"`), several keys have aliases
//! (`"esc"`/`"escape"`, `"return"`/`"enter"`, `"pgup"`/`"pageup"`), and the
//! side-neutral modifier names (`"shift"`, `"ctrl"`, `"alt"`, `"win"`)
//! resolve to the left-hand key.
//!
//! Resolution is case-insensitive. An unknown name returns `None`; the
//! caller reports it as a command failure.

use super::KeyCode;

/// Resolves a key name to its canonical [`KeyCode`].
pub fn key_from_name(name: &str) -> Option<KeyCode> {
    use KeyCode::*;

    // Single characters: letters and digits name themselves.
    let lowered = name.to_ascii_lowercase();
    if lowered.len() == 1 {
        return match lowered.as_bytes()[0] {
            b'a' => Some(KeyA),
            b'b' => Some(KeyB),
            b'c' => Some(KeyC),
            b'd' => Some(KeyD),
            b'e' => Some(KeyE),
            b'f' => Some(KeyF),
            b'g' => Some(KeyG),
            b'h' => Some(KeyH),
            b'i' => Some(KeyI),
            b'j' => Some(KeyJ),
            b'k' => Some(KeyK),
            b'l' => Some(KeyL),
            b'm' => Some(KeyM),
            b'n' => Some(KeyN),
            b'o' => Some(KeyO),
            b'p' => Some(KeyP),
            b'q' => Some(KeyQ),
            b'r' => Some(KeyR),
            b's' => Some(KeyS),
            b't' => Some(KeyT),
            b'u' => Some(KeyU),
            b'v' => Some(KeyV),
            b'w' => Some(KeyW),
            b'x' => Some(KeyX),
            b'y' => Some(KeyY),
            b'z' => Some(KeyZ),
            b'0' => Some(Digit0),
            b'1' => Some(Digit1),
            b'2' => Some(Digit2),
            b'3' => Some(Digit3),
            b'4' => Some(Digit4),
            b'5' => Some(Digit5),
            b'6' => Some(Digit6),
            b'7' => Some(Digit7),
            b'8' => Some(Digit8),
            b'9' => Some(Digit9),
            b' ' => Some(Space),
            _ => None,
        };
    }

    match lowered.as_str() {
        "enter" | "return" => Some(Enter),
        "esc" | "escape" => Some(Escape),
        "space" => Some(Space),
        "tab" => Some(Tab),
        "backspace" => Some(Backspace),
        "delete" | "del" => Some(Delete),
        "insert" => Some(Insert),

        "home" => Some(Home),
        "end" => Some(End),
        "pageup" | "pgup" => Some(PageUp),
        "pagedown" | "pgdn" => Some(PageDown),
        "up" => Some(Up),
        "down" => Some(Down),
        "left" => Some(Left),
        "right" => Some(Right),

        "shift" | "shiftleft" => Some(ShiftLeft),
        "shiftright" => Some(ShiftRight),
        "ctrl" | "ctrlleft" => Some(CtrlLeft),
        "ctrlright" => Some(CtrlRight),
        "alt" | "altleft" => Some(AltLeft),
        "altright" => Some(AltRight),
        "win" | "winleft" | "super" | "command" => Some(MetaLeft),
        "winright" => Some(MetaRight),
        "capslock" => Some(CapsLock),

        "f1" => Some(F1),
        "f2" => Some(F2),
        "f3" => Some(F3),
        "f4" => Some(F4),
        "f5" => Some(F5),
        "f6" => Some(F6),
        "f7" => Some(F7),
        "f8" => Some(F8),
        "f9" => Some(F9),
        "f10" => Some(F10),
        "f11" => Some(F11),
        "f12" => Some(F12),

        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_characters_name_themselves() {
        assert_eq!(key_from_name("a"), Some(KeyCode::KeyA));
        assert_eq!(key_from_name("z"), Some(KeyCode::KeyZ));
        assert_eq!(key_from_name("0"), Some(KeyCode::Digit0));
        assert_eq!(key_from_name("9"), Some(KeyCode::Digit9));
    }

    #[test]
    fn test_aliases_resolve_to_the_same_key() {
        assert_eq!(key_from_name("esc"), key_from_name("escape"));
        assert_eq!(key_from_name("enter"), key_from_name("return"));
        assert_eq!(key_from_name("pgup"), key_from_name("pageup"));
        assert_eq!(key_from_name("del"), key_from_name("delete"));
    }

    #[test]
    fn test_side_neutral_modifiers_resolve_to_left_key() {
        assert_eq!(key_from_name("shift"), Some(KeyCode::ShiftLeft));
        assert_eq!(key_from_name("ctrl"), Some(KeyCode::CtrlLeft));
        assert_eq!(key_from_name("alt"), Some(KeyCode::AltLeft));
        assert_eq!(key_from_name("win"), Some(KeyCode::MetaLeft));
    }

    #[test]
    fn test_resolution_is_case_insensitive() {
        assert_eq!(key_from_name("Enter"), Some(KeyCode::Enter));
        assert_eq!(key_from_name("F5"), Some(KeyCode::F5));
        assert_eq!(key_from_name("A"), Some(KeyCode::KeyA));
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        assert_eq!(key_from_name("bogus"), None);
        assert_eq!(key_from_name(""), None);
        assert_eq!(key_from_name("f13"), None);
    }
}
