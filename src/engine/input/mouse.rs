// Mouse state and decoded event payloads

/// The five independently tracked mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Extra1,
    Extra2,
}

/// Which class of device produced a raw-input payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mouse,
    Keyboard,
    Other,
}

/// Window-space cursor coordinates decoded from a cursor-move event.
#[derive(Debug, Clone, Copy)]
pub struct CursorPayload {
    pub x: i32,
    pub y: i32,
}

/// Relative motion decoded from a raw-input event.
///
/// Raw payloads carry the originating device class; only mouse-class
/// payloads update state.
#[derive(Debug, Clone, Copy)]
pub struct RawMotionPayload {
    pub device: DeviceClass,
    pub dx: i32,
    pub dy: i32,
}

impl RawMotionPayload {
    /// Convenience constructor for mouse-class motion.
    pub fn mouse(dx: i32, dy: i32) -> Self {
        Self {
            device: DeviceClass::Mouse,
            dx,
            dy,
        }
    }
}

/// Cursor position, raw relative delta, and button flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: i32,
    pub y: i32,
    pub raw_x: i32,
    pub raw_y: i32,
    pub left: bool,
    pub middle: bool,
    pub right: bool,
    pub extra1: bool,
    pub extra2: bool,
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_button(&mut self, button: MouseButton, down: bool) {
        match button {
            MouseButton::Left => self.left = down,
            MouseButton::Middle => self.middle = down,
            MouseButton::Right => self.right = down,
            MouseButton::Extra1 => self.extra1 = down,
            MouseButton::Extra2 => self.extra2 = down,
        }
    }

    pub fn button(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Middle => self.middle,
            MouseButton::Right => self.right,
            MouseButton::Extra1 => self.extra1,
            MouseButton::Extra2 => self.extra2,
        }
    }

    /// Zero position and raw delta. Button flags are level state owned by
    /// the device and are left alone.
    pub fn clear_motion(&mut self) {
        self.x = 0;
        self.y = 0;
        self.raw_x = 0;
        self.raw_y = 0;
    }
}
