//! macOS CoreGraphics input injection.
//!
//! Uses `CGEventCreateKeyboardEvent`, `CGEventCreateMouseEvent`, and
//! `CGEventPost` to inject events at the `kCGHIDEventTap` level — the same
//! level as physical input, so applications cannot tell the difference.
//!
//! # Key code translation
//!
//! macOS addresses keys by `CGKeyCode`, a physical ANSI-layout position.
//! [`KeyMapper::key_to_macos_cgkeycode`] converts the canonical [`KeyCode`];
//! keys with no macOS equivalent (Insert) are reported as unavailable.
//!
//! # Text entry
//!
//! `CGEventKeyboardSetUnicodeString` attaches the literal characters to a
//! keyboard event, so text entry does not depend on the active layout.
//!
//! # Coordinate origin
//!
//! CoreGraphics mouse events use a top-left origin for `CGEventCreateMouseEvent`
//! positions, matching the wire protocol; no Y-flip is required at this API
//! level (the flip only applies to the legacy AppKit coordinate space).
//!
//! # Accessibility permission
//!
//! `CGEventPost` at `kCGHIDEventTap` requires the Accessibility permission.
//! The constructor checks `AXIsProcessTrustedWithOptions` and fails if the
//! permission has not been granted after prompting.

use std::sync::Mutex;

use bridge_core::{KeyCode, KeyMapper, MouseButton};

use crate::application::relay_command::{InjectionError, PlatformInputInjector};

/// Fallback geometry reported while the display query is deferred.
const DEFAULT_SCREEN: (i32, i32) = (1920, 1080);

/// macOS CoreGraphics input injector.
///
/// This is a scaffold implementation that validates the key translation path
/// and documents the production call sequence. The CoreFoundation/
/// CoreGraphics FFI bindings are deferred; the production implementation
/// would use the `core-graphics` crate.
pub struct MacosEventTapInjector {
    pointer: Mutex<(i32, i32)>,
}

impl MacosEventTapInjector {
    /// Creates the injector and checks for Accessibility permission.
    ///
    /// # Errors
    ///
    /// Returns `InjectionError::Platform` if Accessibility permission has
    /// not been granted after prompting.
    pub fn new() -> Result<Self, InjectionError> {
        // Production: AXIsProcessTrustedWithOptions({kAXTrustedCheckOptionPrompt: true}),
        // error if not trusted.
        Ok(Self {
            pointer: Mutex::new((DEFAULT_SCREEN.0 / 2, DEFAULT_SCREEN.1 / 2)),
        })
    }

    fn cgkeycode(key: KeyCode) -> Result<u16, InjectionError> {
        KeyMapper::key_to_macos_cgkeycode(key)
            .ok_or_else(|| InjectionError::Platform(format!("{key:?} has no macOS key code")))
    }
}

impl PlatformInputInjector for MacosEventTapInjector {
    fn emit_key_down(&self, key: KeyCode) -> Result<(), InjectionError> {
        let code = Self::cgkeycode(key)?;
        // Production sequence:
        //   let src = CGEventSourceCreate(kCGEventSourceStateHIDSystemState);
        //   let event = CGEventCreateKeyboardEvent(src, code, true);  // true = down
        //   CGEventPost(kCGHIDEventTap, event);
        let _ = code;
        Ok(())
    }

    fn emit_key_up(&self, key: KeyCode) -> Result<(), InjectionError> {
        let code = Self::cgkeycode(key)?;
        // Production: CGEventCreateKeyboardEvent(src, code, false) + CGEventPost.
        let _ = code;
        Ok(())
    }

    fn emit_pointer_move(&self, x: i32, y: i32) -> Result<(), InjectionError> {
        // Production: CGEventCreateMouseEvent(src, kCGEventMouseMoved,
        //             CGPointMake(x, y), kCGMouseButtonLeft) + CGEventPost.
        *self.pointer.lock().unwrap() = (x, y);
        Ok(())
    }

    fn emit_button(&self, button: MouseButton, pressed: bool) -> Result<(), InjectionError> {
        // Event type per button/direction:
        //   Left:   kCGEventLeftMouseDown / kCGEventLeftMouseUp
        //   Right:  kCGEventRightMouseDown / kCGEventRightMouseUp
        //   Middle: kCGEventOtherMouseDown / kCGEventOtherMouseUp
        // The event also carries the current pointer position.
        let _ = (button, pressed);
        Ok(())
    }

    fn emit_text(&self, text: &str) -> Result<(), InjectionError> {
        // Production: one keyboard event with
        // CGEventKeyboardSetUnicodeString(event, text.utf16) + CGEventPost,
        // chunked to the API's UniChar limit.
        let _ = text;
        Ok(())
    }

    fn pointer_position(&self) -> Result<(i32, i32), InjectionError> {
        // Production: CGEventGetLocation(CGEventCreate(null)).
        Ok(*self.pointer.lock().unwrap())
    }

    fn screen_size(&self) -> Result<(i32, i32), InjectionError> {
        // Production: CGDisplayBounds(CGMainDisplayID()).size.
        Ok(DEFAULT_SCREEN)
    }
}
