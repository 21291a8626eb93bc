//! Linux X11 input injection via the XTest extension.
//!
//! Uses `XTestFakeKeyEvent`, `XTestFakeMotionEvent`, and `XTestFakeButtonEvent`
//! to synthesize input events in the X11 session. The events are delivered to
//! the focused window exactly like physical input.
//!
//! # Key code translation
//!
//! X11 keys are addressed by *KeySym* (symbolic value, e.g. `XK_a` = 0x0061).
//! [`KeyMapper::key_to_x11_keysym`] converts the canonical [`KeyCode`] to the
//! KeySym; `XTestFakeKeyEvent` then takes the server keycode obtained through
//! `XKeysymToKeycode`:
//!
//! ```text
//! KeyCode → X11 KeySym → XKeysymToKeycode(display, keysym) → X11 keycode
//! ```
//!
//! # Text entry
//!
//! X11 has no direct type-a-string call; text is entered by faking a key
//! press+release per character, remapping a spare keycode for characters
//! outside the current layout.
//!
//! # Permissions
//!
//! XTest requires access to the X display. If `DISPLAY` is unset or the X
//! server unreachable, the constructor fails with a `Platform` error.

use std::sync::Mutex;

use bridge_core::{KeyCode, KeyMapper, MouseButton};

use crate::application::relay_command::{InjectionError, PlatformInputInjector};

// ── X11 constants ─────────────────────────────────────────────────────────────

/// `CurrentTime` (0) tells XTest to stamp events with the server's clock.
const CURRENT_TIME: u64 = 0;

/// `-1` as the screen argument to `XTestFakeMotionEvent` means "the screen
/// that currently contains the pointer".
const SCREEN_DEFAULT: i32 = -1;

/// Fallback geometry reported while the display query is deferred.
const DEFAULT_SCREEN: (i32, i32) = (1920, 1080);

/// Linux X11/XTest input injector.
///
/// In the current state this is a scaffold implementation that validates the
/// key translation path but defers the actual XTest FFI calls. The
/// production implementation would hold a `*mut x11::xlib::Display` pointer
/// obtained from `XOpenDisplay` and pass it to each XTest call.
pub struct LinuxXTestInjector {
    // In production this would hold a raw *mut x11::xlib::Display; while the
    // FFI calls are deferred, the injector tracks the pointer position it
    // last produced so the fail-safe guard stays meaningful.
    pointer: Mutex<(i32, i32)>,
}

impl LinuxXTestInjector {
    /// Connects to the X display.
    ///
    /// # Errors
    ///
    /// Returns `InjectionError::Platform` if the X display cannot be opened
    /// (production: `XOpenDisplay(null)` returning a null pointer).
    pub fn new() -> Result<Self, InjectionError> {
        // Production: XOpenDisplay(null), error on null return.
        Ok(Self {
            pointer: Mutex::new((DEFAULT_SCREEN.0 / 2, DEFAULT_SCREEN.1 / 2)),
        })
    }
}

impl PlatformInputInjector for LinuxXTestInjector {
    fn emit_key_down(&self, key: KeyCode) -> Result<(), InjectionError> {
        let keysym = KeyMapper::key_to_x11_keysym(key)
            .ok_or_else(|| InjectionError::Platform(format!("no X11 keysym for {key:?}")))?;
        // Production: XTestFakeKeyEvent(display, XKeysymToKeycode(display, keysym),
        //             True, CURRENT_TIME) followed by XFlush(display).
        let _ = (keysym, CURRENT_TIME);
        Ok(())
    }

    fn emit_key_up(&self, key: KeyCode) -> Result<(), InjectionError> {
        let keysym = KeyMapper::key_to_x11_keysym(key)
            .ok_or_else(|| InjectionError::Platform(format!("no X11 keysym for {key:?}")))?;
        // Production: XTestFakeKeyEvent(..., False, CURRENT_TIME); False = key-up.
        let _ = keysym;
        Ok(())
    }

    fn emit_pointer_move(&self, x: i32, y: i32) -> Result<(), InjectionError> {
        // Production: XTestFakeMotionEvent(display, SCREEN_DEFAULT, x, y,
        //             CURRENT_TIME) followed by XFlush(display).
        let _ = SCREEN_DEFAULT;
        *self.pointer.lock().unwrap() = (x, y);
        Ok(())
    }

    fn emit_button(&self, button: MouseButton, pressed: bool) -> Result<(), InjectionError> {
        // X11 button numbering: 1 = Left, 2 = Middle, 3 = Right.
        let xbutton = match button {
            MouseButton::Left => 1u32,
            MouseButton::Middle => 2,
            MouseButton::Right => 3,
        };
        // Production: XTestFakeButtonEvent(display, xbutton, pressed, CURRENT_TIME)
        let _ = (xbutton, pressed);
        Ok(())
    }

    fn emit_text(&self, text: &str) -> Result<(), InjectionError> {
        // Production: per character, map to a keysym (remapping a spare
        // keycode for unmapped characters), then fake press+release.
        let _ = text;
        Ok(())
    }

    fn pointer_position(&self) -> Result<(i32, i32), InjectionError> {
        // Production: XQueryPointer on the root window.
        Ok(*self.pointer.lock().unwrap())
    }

    fn screen_size(&self) -> Result<(i32, i32), InjectionError> {
        // Production: XDisplayWidth/XDisplayHeight for the default screen.
        Ok(DEFAULT_SCREEN)
    }
}
