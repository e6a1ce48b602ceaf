// Input manager - message-pump integration for the input state buffer

use super::keys::{virtual_key, vk};
use super::mouse::{CursorPayload, MouseButton, RawMotionPayload};
use super::probe::SharedKeyProbe;
use super::state::InputState;
use log::{debug, info};
use thiserror::Error;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window};

/// Errors from the window-system facing paths. Polling and event feeding are
/// infallible; only mouse capture talks to the OS.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to change mouse capture: {0}")]
    Capture(#[from] winit::error::ExternalError),
}

/// Owns the input state buffer and feeds it from winit events.
///
/// This is the only module that touches the window system. Everything it
/// forwards to `InputState` is a pre-decoded primitive: a virtual-key code, a
/// character, a positional payload.
pub struct InputManager {
    state: InputState,
    probe: SharedKeyProbe,
    mouse_captured: bool,
}

impl InputManager {
    pub fn new() -> Self {
        let probe = SharedKeyProbe::new();
        Self {
            state: InputState::with_probe(Box::new(probe.clone())),
            probe,
            mouse_captured: false,
        }
    }

    /// Optionally claim exclusive cursor capture for the window. Repeat
    /// calls are not guarded; call once per session.
    pub fn initialize(&mut self, window: &Window, capture_mouse: bool) -> Result<(), InputError> {
        if capture_mouse {
            window.set_cursor_grab(CursorGrabMode::Confined)?;
            self.mouse_captured = true;
            info!("Mouse captured for input");
        }
        Ok(())
    }

    /// Release cursor capture if it was claimed.
    pub fn shutdown(&mut self, window: &Window) -> Result<(), InputError> {
        if self.mouse_captured {
            window.set_cursor_grab(CursorGrabMode::None)?;
            self.mouse_captured = false;
            info!("Mouse capture released");
        }
        Ok(())
    }

    pub fn is_mouse_captured(&self) -> bool {
        self.mouse_captured
    }

    /// Process a keyboard event from winit.
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            self.handle_key(
                code,
                event.state,
                event.repeat,
                event.text.as_ref().map(|t| t.as_str()),
            );
        }
    }

    /// Key handling split out of the winit event type so it can be driven
    /// directly in tests.
    fn handle_key(&mut self, code: KeyCode, state: ElementState, repeat: bool, text: Option<&str>) {
        let down = state == ElementState::Pressed;

        // The probe must know the physical side before the generic code is
        // forwarded, so the aliasing in the state buffer reads fresh data.
        match code {
            KeyCode::ShiftLeft => self.probe.set_down(vk::LSHIFT, down),
            KeyCode::ShiftRight => self.probe.set_down(vk::RSHIFT, down),
            KeyCode::ControlLeft => self.probe.set_down(vk::LCONTROL, down),
            KeyCode::ControlRight => self.probe.set_down(vk::RCONTROL, down),
            _ => {}
        }

        if let Some(key) = virtual_key(code) {
            match state {
                ElementState::Pressed => {
                    // Key repeats must not re-fire the pressed edge
                    if !repeat {
                        self.state.set_key_down(key);
                    }
                }
                ElementState::Released => self.state.set_key_up(key),
            }
        } else {
            debug!("dropping unmapped key code {code:?}");
        }

        // The text path runs on repeats too, like the original platform's
        // character messages did
        if down {
            if let Some(text) = text {
                for ch in text.chars() {
                    self.state.set_key_in(ch);
                }
            }
        }
    }

    /// Process a cursor-move event from winit.
    pub fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.state.fill_mouse_position(CursorPayload {
            x: position.x as i32,
            y: position.y as i32,
        });
    }

    /// Process a raw mouse-motion device event from winit.
    pub fn process_raw_motion(&mut self, delta: (f64, f64)) {
        self.state
            .fill_mouse_raw_position(RawMotionPayload::mouse(delta.0 as i32, delta.1 as i32));
    }

    /// Process a mouse-button event from winit. Buttons beyond the tracked
    /// five are dropped.
    pub fn process_mouse_button(&mut self, state: ElementState, button: winit::event::MouseButton) {
        if let Some(button) = map_button(button) {
            self.state
                .set_mouse_button(button, state == ElementState::Pressed);
        }
    }

    /// Frame boundary passthrough. Call exactly once per frame.
    pub fn end_frame(&mut self) {
        self.state.end_frame();
    }

    /// The pollable input snapshot.
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Mutable access, for edge consumption and buffer clears.
    pub fn state_mut(&mut self) -> &mut InputState {
        &mut self.state
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

fn map_button(button: winit::event::MouseButton) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::Left),
        winit::event::MouseButton::Middle => Some(MouseButton::Middle),
        winit::event::MouseButton::Right => Some(MouseButton::Right),
        winit::event::MouseButton::Back => Some(MouseButton::Extra1),
        winit::event::MouseButton::Forward => Some(MouseButton::Extra2),
        winit::event::MouseButton::Other(_) => None,
    }
}
