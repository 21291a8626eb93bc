//! bridge-relay library entry point.
//!
//! Re-exports the module tree so that integration tests in `tests/` and the
//! binary entry point in `main.rs` share the same code.
//!
//! # What does bridge-relay do?
//!
//! The relay is a subprocess spawned by a supervisor process (typically a
//! desktop automation service). The supervisor writes one JSON command per
//! line to the relay's standard input; the relay:
//!
//! 1. Decodes the line into a typed [`bridge_core::Command`].
//! 2. Resolves key names to canonical key codes.
//! 3. Calls the platform input injection API (`SendInput` on Windows, XTest
//!    on Linux, CoreGraphics on macOS) so the OS sees the events as if a
//!    physical keyboard and mouse produced them.
//! 4. Replies with one `{"status":...}` JSON line on standard output.
//!
//! A corner fail-safe guards every injection: when the pointer sits in a
//! corner of the primary screen, commands are refused so a human operator
//! can always regain control of the machine.

/// Application layer: the injection use case and its trait seam.
pub mod application;

/// Infrastructure layer: OS adapters and the stdio relay loop.
pub mod infrastructure;
