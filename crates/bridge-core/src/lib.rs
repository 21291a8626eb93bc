//! # bridge-core
//!
//! Shared library for Input-Bridge containing the stdin/stdout wire protocol
//! types, the relay error taxonomy, and key code translation tables.
//!
//! This crate is used by the relay binary and its tests. It has zero
//! dependencies on OS APIs or I/O streams.
//!
//! # Protocol overview
//!
//! A supervisor process spawns the relay and speaks newline-delimited JSON
//! with it: one command object per line on the relay's standard input, one
//! status object per line on its standard output.
//!
//! ```text
//! supervisor → relay:  {"type":"mouseMove","x":100,"y":200}
//! relay → supervisor:  {"status":"success"}
//! ```
//!
//! This crate defines:
//!
//! - **`protocol`** – The typed [`Command`] and [`Outcome`] wire model plus
//!   the line codec with its closed [`RelayError`] taxonomy.
//!
//! - **`keymap`** – Resolution of the free-form key names used on the wire
//!   (`"enter"`, `"esc"`, `"f5"`, ...) to the canonical [`KeyCode`], and
//!   translation of [`KeyCode`] to the native key code of each platform
//!   (Windows Virtual-Key codes, X11 KeySyms, macOS CGKeyCodes).

pub mod keymap;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `bridge_core::Command` instead of `bridge_core::protocol::messages::Command`.
pub use keymap::{key_from_name, KeyCode, KeyMapper};
pub use protocol::codec::{decode_command, encode_outcome, RelayError};
pub use protocol::messages::{Command, MouseButton, Outcome};
