//! Mock platform input injector for tests.
//!
//! The real injectors make OS API calls that require a desktop session and
//! actually move the cursor or press keys on the test machine. The mock
//! replaces all OS calls with in-memory recording: each emission is pushed
//! into a `Mutex<Vec<...>>` so assertions can inspect exactly what was
//! injected and in what order.
//!
//! The pointer position is settable (and tracked through `emit_pointer_move`)
//! so fail-safe behavior can be driven from tests, and `should_fail`
//! simulates OS-level failures without a broken OS.

use std::sync::Mutex;

use bridge_core::{KeyCode, MouseButton};

use crate::application::relay_command::{InjectionError, PlatformInputInjector};

/// Screen size reported by the mock.
const MOCK_SCREEN: (i32, i32) = (1920, 1080);

/// A mock injector that records all calls without touching the OS.
pub struct MockInputInjector {
    /// Records each key passed to `emit_key_down`.
    pub key_downs: Mutex<Vec<KeyCode>>,
    /// Records each key passed to `emit_key_up`.
    pub key_ups: Mutex<Vec<KeyCode>>,
    /// Records each (x, y) position passed to `emit_pointer_move`.
    pub pointer_moves: Mutex<Vec<(i32, i32)>>,
    /// Records (button, pressed) pairs from `emit_button`.
    pub buttons: Mutex<Vec<(MouseButton, bool)>>,
    /// Records each string passed to `emit_text`.
    pub texts: Mutex<Vec<String>>,
    /// When `true`, every method immediately returns an
    /// [`InjectionError::Platform`].
    pub should_fail: bool,
    pointer: Mutex<(i32, i32)>,
}

impl Default for MockInputInjector {
    fn default() -> Self {
        Self {
            key_downs: Mutex::new(Vec::new()),
            key_ups: Mutex::new(Vec::new()),
            pointer_moves: Mutex::new(Vec::new()),
            buttons: Mutex::new(Vec::new()),
            texts: Mutex::new(Vec::new()),
            should_fail: false,
            // Middle of the mock screen, away from every fail-safe corner.
            pointer: Mutex::new((MOCK_SCREEN.0 / 2, MOCK_SCREEN.1 / 2)),
        }
    }
}

impl MockInputInjector {
    /// Creates a new injector with empty records and the pointer centered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parks the pointer at the given position (e.g. a corner for fail-safe
    /// tests).
    pub fn set_pointer(&self, x: i32, y: i32) {
        *self.pointer.lock().unwrap() = (x, y);
    }

    fn fail_if_requested(&self) -> Result<(), InjectionError> {
        if self.should_fail {
            return Err(InjectionError::Platform("mock failure".into()));
        }
        Ok(())
    }
}

impl PlatformInputInjector for MockInputInjector {
    fn emit_key_down(&self, key: KeyCode) -> Result<(), InjectionError> {
        self.fail_if_requested()?;
        self.key_downs.lock().unwrap().push(key);
        Ok(())
    }

    fn emit_key_up(&self, key: KeyCode) -> Result<(), InjectionError> {
        self.fail_if_requested()?;
        self.key_ups.lock().unwrap().push(key);
        Ok(())
    }

    fn emit_pointer_move(&self, x: i32, y: i32) -> Result<(), InjectionError> {
        self.fail_if_requested()?;
        self.pointer_moves.lock().unwrap().push((x, y));
        // Track the position so later fail-safe checks see the move.
        *self.pointer.lock().unwrap() = (x, y);
        Ok(())
    }

    fn emit_button(&self, button: MouseButton, pressed: bool) -> Result<(), InjectionError> {
        self.fail_if_requested()?;
        self.buttons.lock().unwrap().push((button, pressed));
        Ok(())
    }

    fn emit_text(&self, text: &str) -> Result<(), InjectionError> {
        self.fail_if_requested()?;
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn pointer_position(&self) -> Result<(i32, i32), InjectionError> {
        self.fail_if_requested()?;
        Ok(*self.pointer.lock().unwrap())
    }

    fn screen_size(&self) -> Result<(i32, i32), InjectionError> {
        self.fail_if_requested()?;
        Ok(MOCK_SCREEN)
    }
}
