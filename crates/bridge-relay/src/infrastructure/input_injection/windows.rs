//! Windows input injection via the SendInput API.
//!
//! Keyboard keys are injected by Virtual-Key code, text by
//! `KEYEVENTF_UNICODE` events (layout-independent), and pointer moves with
//! `MOUSEEVENTF_ABSOLUTE` coordinates normalized to the [0, 65535] space
//! SendInput expects.

#![cfg(target_os = "windows")]

use bridge_core::{KeyCode, KeyMapper, MouseButton};
use windows::Win32::Foundation::POINT;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, INPUT_MOUSE, KEYBDINPUT, KEYBD_EVENT_FLAGS,
    KEYEVENTF_KEYUP, KEYEVENTF_UNICODE, MOUSEEVENTF_ABSOLUTE, MOUSEEVENTF_LEFTDOWN,
    MOUSEEVENTF_LEFTUP, MOUSEEVENTF_MIDDLEDOWN, MOUSEEVENTF_MIDDLEUP, MOUSEEVENTF_MOVE,
    MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP, MOUSEINPUT, MOUSE_EVENT_FLAGS, VIRTUAL_KEY,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN,
};

use crate::application::relay_command::{InjectionError, PlatformInputInjector};

/// Windows implementation of [`PlatformInputInjector`] using SendInput.
pub struct WindowsSendInputInjector;

impl WindowsSendInputInjector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsSendInputInjector {
    fn default() -> Self {
        Self::new()
    }
}

/// Sends a batch of events, failing if the OS swallows any of them.
fn send_inputs(inputs: &[INPUT]) -> Result<(), InjectionError> {
    // SAFETY: `inputs` are fully initialized INPUT structures on the stack.
    let sent = unsafe { SendInput(inputs, std::mem::size_of::<INPUT>() as i32) };
    if sent as usize != inputs.len() {
        return Err(InjectionError::Platform(format!(
            "SendInput injected {sent} of {} events",
            inputs.len()
        )));
    }
    Ok(())
}

fn key_input(vk: u8, flags: KEYBD_EVENT_FLAGS) -> INPUT {
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: VIRTUAL_KEY(vk as u16),
                wScan: 0,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

fn unicode_input(unit: u16, flags: KEYBD_EVENT_FLAGS) -> INPUT {
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: VIRTUAL_KEY(0),
                wScan: unit,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

fn mouse_input(dx: i32, dy: i32, flags: MOUSE_EVENT_FLAGS) -> INPUT {
    INPUT {
        r#type: INPUT_MOUSE,
        Anonymous: INPUT_0 {
            mi: MOUSEINPUT {
                dx,
                dy,
                mouseData: 0,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

/// Maps a pixel position into the [0, 65535] space MOUSEEVENTF_ABSOLUTE uses.
fn normalize_coords(x: i32, y: i32) -> (i32, i32) {
    // SAFETY: GetSystemMetrics has no failure mode for these indices.
    let width = unsafe { GetSystemMetrics(SM_CXSCREEN) }.max(1);
    let height = unsafe { GetSystemMetrics(SM_CYSCREEN) }.max(1);
    (
        (x.clamp(0, width - 1) as i64 * 65535 / (width - 1).max(1) as i64) as i32,
        (y.clamp(0, height - 1) as i64 * 65535 / (height - 1).max(1) as i64) as i32,
    )
}

fn vk_for(key: KeyCode) -> Result<u8, InjectionError> {
    KeyMapper::key_to_windows_vk(key)
        .ok_or_else(|| InjectionError::Platform(format!("no Virtual-Key code for {key:?}")))
}

impl PlatformInputInjector for WindowsSendInputInjector {
    fn emit_key_down(&self, key: KeyCode) -> Result<(), InjectionError> {
        send_inputs(&[key_input(vk_for(key)?, KEYBD_EVENT_FLAGS(0))])
    }

    fn emit_key_up(&self, key: KeyCode) -> Result<(), InjectionError> {
        send_inputs(&[key_input(vk_for(key)?, KEYEVENTF_KEYUP)])
    }

    fn emit_pointer_move(&self, x: i32, y: i32) -> Result<(), InjectionError> {
        let (norm_x, norm_y) = normalize_coords(x, y);
        send_inputs(&[mouse_input(
            norm_x,
            norm_y,
            MOUSEEVENTF_ABSOLUTE | MOUSEEVENTF_MOVE,
        )])
    }

    fn emit_button(&self, button: MouseButton, pressed: bool) -> Result<(), InjectionError> {
        let flags = match (button, pressed) {
            (MouseButton::Left, true) => MOUSEEVENTF_LEFTDOWN,
            (MouseButton::Left, false) => MOUSEEVENTF_LEFTUP,
            (MouseButton::Right, true) => MOUSEEVENTF_RIGHTDOWN,
            (MouseButton::Right, false) => MOUSEEVENTF_RIGHTUP,
            (MouseButton::Middle, true) => MOUSEEVENTF_MIDDLEDOWN,
            (MouseButton::Middle, false) => MOUSEEVENTF_MIDDLEUP,
        };
        send_inputs(&[mouse_input(0, 0, flags)])
    }

    fn emit_text(&self, text: &str) -> Result<(), InjectionError> {
        // One down+up KEYEVENTF_UNICODE pair per UTF-16 unit; surrogate
        // pairs arrive as two consecutive units, which is what the API wants.
        let mut inputs = Vec::with_capacity(text.encode_utf16().count() * 2);
        for unit in text.encode_utf16() {
            inputs.push(unicode_input(unit, KEYEVENTF_UNICODE));
            inputs.push(unicode_input(unit, KEYEVENTF_UNICODE | KEYEVENTF_KEYUP));
        }
        if inputs.is_empty() {
            return Ok(());
        }
        send_inputs(&inputs)
    }

    fn pointer_position(&self) -> Result<(i32, i32), InjectionError> {
        let mut point = POINT::default();
        // SAFETY: `point` is a valid out-pointer for the duration of the call.
        unsafe { GetCursorPos(&mut point) }
            .map_err(|e| InjectionError::Platform(format!("GetCursorPos failed: {e}")))?;
        Ok((point.x, point.y))
    }

    fn screen_size(&self) -> Result<(i32, i32), InjectionError> {
        // SAFETY: GetSystemMetrics has no failure mode for these indices.
        let width = unsafe { GetSystemMetrics(SM_CXSCREEN) };
        let height = unsafe { GetSystemMetrics(SM_CYSCREEN) };
        Ok((width, height))
    }
}
