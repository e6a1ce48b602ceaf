// Virtual-key code space and winit translation

use winit::keyboard::KeyCode;

/// Numeric identifier for a physical/logical keyboard key.
///
/// Values follow the classic Win32 virtual-key assignment. The type is wider
/// than the state tables on purpose: platform event payloads can carry codes
/// outside the supported space, and those must degrade to no-ops rather than
/// index out of bounds.
pub type VirtualKey = u16;

/// Number of slots in the key state tables. Codes at or above this are
/// ignored by every table operation.
pub const KEY_TABLE_LEN: usize = 256;

/// Well-known virtual-key codes the framework special-cases or maps to.
pub mod vk {
    use super::VirtualKey;

    pub const BACKSPACE: VirtualKey = 0x08;
    pub const TAB: VirtualKey = 0x09;
    pub const RETURN: VirtualKey = 0x0D;
    /// Generic (side-less) shift, as delivered in key messages.
    pub const SHIFT: VirtualKey = 0x10;
    /// Generic (side-less) control, as delivered in key messages.
    pub const CONTROL: VirtualKey = 0x11;
    pub const ESCAPE: VirtualKey = 0x1B;
    pub const SPACE: VirtualKey = 0x20;
    pub const LEFT: VirtualKey = 0x25;
    pub const UP: VirtualKey = 0x26;
    pub const RIGHT: VirtualKey = 0x27;
    pub const DOWN: VirtualKey = 0x28;

    // '0'-'9' and 'A'-'Z' match their ASCII values.
    pub const KEY_0: VirtualKey = 0x30;
    pub const KEY_9: VirtualKey = 0x39;
    pub const KEY_A: VirtualKey = 0x41;
    pub const KEY_D: VirtualKey = 0x44;
    pub const KEY_S: VirtualKey = 0x53;
    pub const KEY_W: VirtualKey = 0x57;
    pub const KEY_Z: VirtualKey = 0x5A;

    /// Side-specific modifiers, populated by the aliasing probe rather than
    /// by key messages directly.
    pub const LSHIFT: VirtualKey = 0xA0;
    pub const RSHIFT: VirtualKey = 0xA1;
    pub const LCONTROL: VirtualKey = 0xA2;
    pub const RCONTROL: VirtualKey = 0xA3;
}

/// Translate a winit physical key code into the framework's virtual-key code.
///
/// Left/right shift and control deliberately collapse to the generic codes;
/// the side-specific slots are filled by the modifier aliasing in
/// `InputState`, matching how the original platform delivered modifier key
/// messages. Keys without a mapping return `None` and are dropped by the
/// caller.
pub fn virtual_key(code: KeyCode) -> Option<VirtualKey> {
    let key = match code {
        KeyCode::Backspace => vk::BACKSPACE,
        KeyCode::Tab => vk::TAB,
        KeyCode::Enter => vk::RETURN,
        KeyCode::ShiftLeft | KeyCode::ShiftRight => vk::SHIFT,
        KeyCode::ControlLeft | KeyCode::ControlRight => vk::CONTROL,
        KeyCode::Escape => vk::ESCAPE,
        KeyCode::Space => vk::SPACE,
        KeyCode::ArrowLeft => vk::LEFT,
        KeyCode::ArrowUp => vk::UP,
        KeyCode::ArrowRight => vk::RIGHT,
        KeyCode::ArrowDown => vk::DOWN,

        KeyCode::Digit0 => 0x30,
        KeyCode::Digit1 => 0x31,
        KeyCode::Digit2 => 0x32,
        KeyCode::Digit3 => 0x33,
        KeyCode::Digit4 => 0x34,
        KeyCode::Digit5 => 0x35,
        KeyCode::Digit6 => 0x36,
        KeyCode::Digit7 => 0x37,
        KeyCode::Digit8 => 0x38,
        KeyCode::Digit9 => 0x39,

        KeyCode::KeyA => 0x41,
        KeyCode::KeyB => 0x42,
        KeyCode::KeyC => 0x43,
        KeyCode::KeyD => 0x44,
        KeyCode::KeyE => 0x45,
        KeyCode::KeyF => 0x46,
        KeyCode::KeyG => 0x47,
        KeyCode::KeyH => 0x48,
        KeyCode::KeyI => 0x49,
        KeyCode::KeyJ => 0x4A,
        KeyCode::KeyK => 0x4B,
        KeyCode::KeyL => 0x4C,
        KeyCode::KeyM => 0x4D,
        KeyCode::KeyN => 0x4E,
        KeyCode::KeyO => 0x4F,
        KeyCode::KeyP => 0x50,
        KeyCode::KeyQ => 0x51,
        KeyCode::KeyR => 0x52,
        KeyCode::KeyS => 0x53,
        KeyCode::KeyT => 0x54,
        KeyCode::KeyU => 0x55,
        KeyCode::KeyV => 0x56,
        KeyCode::KeyW => 0x57,
        KeyCode::KeyX => 0x58,
        KeyCode::KeyY => 0x59,
        KeyCode::KeyZ => 0x5A,

        _ => return None,
    };
    Some(key)
}
