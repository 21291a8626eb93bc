//! RelayCommandUseCase: translates decoded wire commands to OS input events.
//!
//! This use case sits at the application layer and delegates to a
//! [`PlatformInputInjector`] trait object for the OS-level event synthesis.
//! The platform-specific implementations live in the infrastructure layer.
//!
//! Compound commands are decomposed here: `click` is a button press+release
//! pair and `press` is a key down+up pair, so every backend only has to
//! implement single transitions.

use std::sync::Arc;

use bridge_core::{key_from_name, Command, KeyCode, MouseButton};
use thiserror::Error;
use tracing::trace;

/// Error type for input injection operations.
#[derive(Debug, Error)]
pub enum InjectionError {
    #[error("platform error: {0}")]
    Platform(String),
    #[error("unknown key name: {0:?}")]
    UnknownKey(String),
    #[error("fail-safe triggered: pointer at screen corner ({x}, {y})")]
    FailSafe { x: i32, y: i32 },
}

/// Platform-agnostic input injection trait.
///
/// Each supported OS provides an implementation in the infrastructure layer;
/// a recording mock is always compiled for tests.
pub trait PlatformInputInjector: Send + Sync {
    /// Injects a key press (key-down transition).
    fn emit_key_down(&self, key: KeyCode) -> Result<(), InjectionError>;

    /// Injects a key release (key-up transition).
    fn emit_key_up(&self, key: KeyCode) -> Result<(), InjectionError>;

    /// Moves the pointer to an absolute pixel position on the primary screen.
    fn emit_pointer_move(&self, x: i32, y: i32) -> Result<(), InjectionError>;

    /// Injects a mouse button press or release at the current pointer position.
    fn emit_button(&self, button: MouseButton, pressed: bool) -> Result<(), InjectionError>;

    /// Types a string of text as keyboard input.
    fn emit_text(&self, text: &str) -> Result<(), InjectionError>;

    /// Returns the current pointer position in screen pixels.
    fn pointer_position(&self) -> Result<(i32, i32), InjectionError>;

    /// Returns the primary screen size in pixels.
    fn screen_size(&self) -> Result<(i32, i32), InjectionError>;
}

/// Corner fail-safe configuration.
///
/// Constructed once in `main` and passed into the use case — never ambient
/// global state. When enabled, a pointer resting in any corner of the
/// primary screen refuses all injection so a human operator can regain
/// control by slamming the mouse into a corner.
#[derive(Debug, Clone, Copy)]
pub struct FailSafeConfig {
    pub enabled: bool,
    /// Pointer positions within this many pixels of a corner trip the guard.
    pub corner_margin: i32,
}

impl Default for FailSafeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            corner_margin: 2,
        }
    }
}

/// The Relay Command use case.
///
/// Receives decoded wire commands and dispatches them to the platform
/// injector, running the fail-safe guard first.
pub struct RelayCommandUseCase {
    injector: Arc<dyn PlatformInputInjector>,
    fail_safe: FailSafeConfig,
}

impl RelayCommandUseCase {
    /// Creates a new use case with the given platform injector.
    pub fn new(injector: Arc<dyn PlatformInputInjector>, fail_safe: FailSafeConfig) -> Self {
        Self {
            injector,
            fail_safe,
        }
    }

    /// Performs one decoded command against the platform injector.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError`] if the fail-safe trips, a key name is
    /// outside the protocol vocabulary, or the OS event injection fails.
    pub fn handle(&self, command: &Command) -> Result<(), InjectionError> {
        self.check_fail_safe()?;
        trace!(?command, "dispatching command");

        match command {
            Command::MouseMove { x, y } => self.injector.emit_pointer_move(*x, *y),
            Command::Click { button } => {
                self.injector.emit_button(*button, true)?;
                self.injector.emit_button(*button, false)
            }
            Command::Press { key } => {
                let key = resolve_key(key)?;
                self.injector.emit_key_down(key)?;
                self.injector.emit_key_up(key)
            }
            Command::KeyDown { key } => self.injector.emit_key_down(resolve_key(key)?),
            Command::KeyUp { key } => self.injector.emit_key_up(resolve_key(key)?),
            Command::Type { text } => self.injector.emit_text(text),
        }
    }

    /// Refuses injection while the pointer sits in a corner of the primary
    /// screen.
    fn check_fail_safe(&self) -> Result<(), InjectionError> {
        if !self.fail_safe.enabled {
            return Ok(());
        }
        let (x, y) = self.injector.pointer_position()?;
        let (width, height) = self.injector.screen_size()?;
        let margin = self.fail_safe.corner_margin;

        let near_x_edge = x <= margin || x >= width - 1 - margin;
        let near_y_edge = y <= margin || y >= height - 1 - margin;
        if near_x_edge && near_y_edge {
            return Err(InjectionError::FailSafe { x, y });
        }
        Ok(())
    }
}

fn resolve_key(name: &str) -> Result<KeyCode, InjectionError> {
    key_from_name(name).ok_or_else(|| InjectionError::UnknownKey(name.to_string()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::input_injection::mock::MockInputInjector;

    fn make_use_case() -> (RelayCommandUseCase, Arc<MockInputInjector>) {
        let injector = Arc::new(MockInputInjector::new());
        let uc = RelayCommandUseCase::new(
            Arc::clone(&injector) as Arc<dyn PlatformInputInjector>,
            FailSafeConfig::default(),
        );
        (uc, injector)
    }

    // ── Pointer commands ──────────────────────────────────────────────────────

    #[test]
    fn test_mouse_move_passes_coordinates_through() {
        // Arrange
        let (uc, injector) = make_use_case();

        // Act
        uc.handle(&Command::MouseMove { x: 100, y: 200 }).unwrap();

        // Assert
        assert_eq!(*injector.pointer_moves.lock().unwrap(), vec![(100, 200)]);
    }

    #[test]
    fn test_click_is_a_press_release_pair() {
        // Arrange
        let (uc, injector) = make_use_case();

        // Act
        uc.handle(&Command::Click {
            button: MouseButton::Left,
        })
        .unwrap();

        // Assert – press then release, same button
        assert_eq!(
            *injector.buttons.lock().unwrap(),
            vec![(MouseButton::Left, true), (MouseButton::Left, false)]
        );
    }

    // ── Key commands ──────────────────────────────────────────────────────────

    #[test]
    fn test_press_is_a_down_up_pair() {
        // Arrange
        let (uc, injector) = make_use_case();

        // Act
        uc.handle(&Command::Press {
            key: "enter".to_string(),
        })
        .unwrap();

        // Assert
        assert_eq!(*injector.key_downs.lock().unwrap(), vec![KeyCode::Enter]);
        assert_eq!(*injector.key_ups.lock().unwrap(), vec![KeyCode::Enter]);
    }

    #[test]
    fn test_key_down_is_a_single_transition() {
        // Arrange
        let (uc, injector) = make_use_case();

        // Act
        uc.handle(&Command::KeyDown {
            key: "shift".to_string(),
        })
        .unwrap();

        // Assert – held, not released
        assert_eq!(
            *injector.key_downs.lock().unwrap(),
            vec![KeyCode::ShiftLeft]
        );
        assert!(injector.key_ups.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_key_name_injects_nothing() {
        // Arrange
        let (uc, injector) = make_use_case();

        // Act
        let err = uc
            .handle(&Command::Press {
                key: "bogus".to_string(),
            })
            .unwrap_err();

        // Assert
        assert!(matches!(err, InjectionError::UnknownKey(k) if k == "bogus"));
        assert!(injector.key_downs.lock().unwrap().is_empty());
        assert!(injector.key_ups.lock().unwrap().is_empty());
    }

    #[test]
    fn test_type_emits_text_once() {
        // Arrange
        let (uc, injector) = make_use_case();

        // Act
        uc.handle(&Command::Type {
            text: "hello".to_string(),
        })
        .unwrap();

        // Assert
        assert_eq!(*injector.texts.lock().unwrap(), vec!["hello".to_string()]);
    }

    // ── Fail-safe guard ───────────────────────────────────────────────────────

    #[test]
    fn test_fail_safe_refuses_injection_from_a_corner() {
        // Arrange – pointer parked in the top-left corner
        let (uc, injector) = make_use_case();
        injector.set_pointer(0, 0);

        // Act
        let err = uc
            .handle(&Command::Click {
                button: MouseButton::Left,
            })
            .unwrap_err();

        // Assert
        assert!(matches!(err, InjectionError::FailSafe { x: 0, y: 0 }));
        assert!(injector.buttons.lock().unwrap().is_empty());
    }

    #[test]
    fn test_fail_safe_covers_all_four_corners() {
        let (uc, injector) = make_use_case();
        let (width, height) = injector.screen_size().unwrap();

        for corner in [
            (0, 0),
            (width - 1, 0),
            (0, height - 1),
            (width - 1, height - 1),
        ] {
            injector.set_pointer(corner.0, corner.1);
            let result = uc.handle(&Command::Press {
                key: "a".to_string(),
            });
            assert!(result.is_err(), "corner {corner:?} must trip the guard");
        }
    }

    #[test]
    fn test_disabled_fail_safe_injects_from_a_corner() {
        // Arrange
        let injector = Arc::new(MockInputInjector::new());
        injector.set_pointer(0, 0);
        let uc = RelayCommandUseCase::new(
            Arc::clone(&injector) as Arc<dyn PlatformInputInjector>,
            FailSafeConfig {
                enabled: false,
                ..FailSafeConfig::default()
            },
        );

        // Act
        uc.handle(&Command::MouseMove { x: 10, y: 10 }).unwrap();

        // Assert
        assert_eq!(*injector.pointer_moves.lock().unwrap(), vec![(10, 10)]);
    }

    #[test]
    fn test_platform_failure_surfaces_as_error() {
        // Arrange
        let mut injector = MockInputInjector::new();
        injector.should_fail = true;
        let injector = Arc::new(injector);
        let uc = RelayCommandUseCase::new(
            Arc::clone(&injector) as Arc<dyn PlatformInputInjector>,
            FailSafeConfig::default(),
        );

        // Act
        let result = uc.handle(&Command::MouseMove { x: 1, y: 1 });

        // Assert
        assert!(result.is_err());
    }
}
