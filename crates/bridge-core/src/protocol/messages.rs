//! Wire message types for the newline-delimited JSON command protocol.
//!
//! Every request is a JSON object with a `"type"` field that identifies the
//! command; all other fields sit in the same object. Serde's
//! `#[serde(tag = "type")]` attribute handles the discriminant, so decoding
//! produces a closed enum and dispatch is an exhaustive `match` — there is no
//! string branching and no silent fallthrough for unrecognized tags.
//!
//! # Message flow
//!
//! ```text
//! supervisor → relay:  JSON line  →  Command
//! relay → supervisor:  Outcome    →  JSON line
//! ```

use serde::{Deserialize, Serialize};

// ── Requests ──────────────────────────────────────────────────────────────────

/// All commands the relay accepts on standard input.
///
/// # Serde representation
///
/// ```json
/// {"type":"mouseMove","x":100,"y":200}
/// {"type":"click","button":"right"}
/// {"type":"press","key":"enter"}
/// {"type":"keyDown","key":"shiftleft"}
/// {"type":"keyUp","key":"shiftleft"}
/// {"type":"type","text":"hello"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    /// Move the pointer to an absolute pixel position on the primary screen.
    MouseMove { x: i32, y: i32 },

    /// Press and release a mouse button at the current pointer position.
    Click {
        /// Which button to click. Absent on the wire means the left button.
        #[serde(default)]
        button: MouseButton,
    },

    /// Press and release a keyboard key (one full down/up cycle).
    Press {
        /// Key name in the wire vocabulary, e.g. `"a"`, `"enter"`, `"f5"`.
        key: String,
    },

    /// Press a keyboard key and leave it held.
    KeyDown { key: String },

    /// Release a previously held keyboard key.
    KeyUp { key: String },

    /// Type a string of text as keyboard input.
    Type { text: String },
}

impl Command {
    /// The `"type"` tags of every command the relay understands, in wire form.
    pub const TYPE_TAGS: [&'static str; 6] =
        ["mouseMove", "click", "press", "keyDown", "keyUp", "type"];
}

/// Mouse buttons addressable over the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

// ── Responses ─────────────────────────────────────────────────────────────────

/// Per-command status reported on standard output, one line per processed
/// command, in input order.
///
/// # Serde representation
///
/// ```json
/// {"status":"success"}
/// {"status":"error","message":"unknown key name: \"bogus\""}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// The command was decoded and injected.
    Success,
    /// The command was decoded but could not be performed, or was a
    /// well-formed JSON object that is not a valid command.
    Error { message: String },
}

impl Outcome {
    /// Builds an error outcome from anything displayable.
    pub fn error(message: impl ToString) -> Self {
        Outcome::Error {
            message: message.to_string(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
