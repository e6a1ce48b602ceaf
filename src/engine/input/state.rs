// Polled input state buffer

use super::keys::{vk, VirtualKey, KEY_TABLE_LEN};
use super::mouse::{CursorPayload, DeviceClass, MouseButton, MouseState, RawMotionPayload};
use super::probe::{KeyStateProbe, NullProbe};
use super::text::TextInput;
use bitflags::bitflags;

bitflags! {
    /// Buffer categories selectable by `InputState::clear_buffer`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearMask: u8 {
        const KEYS_DOWN = 0b0001;
        const KEYS_PRESSED = 0b0010;
        const MOUSE = 0b0100;
        const TEXT = 0b1000;
    }
}

/// Per-frame snapshot of keyboard and mouse state.
///
/// The message pump pushes decoded events in; gameplay code polls the result
/// once per frame. "Down" is level state (true while held), "pressed" is edge
/// state (true only until `end_frame`). All key operations validate the code
/// against the table length and silently ignore out-of-range codes — that is
/// the subsystem's entire failure policy.
///
/// Single-threaded: mutation and polling both happen on the thread pumping
/// window messages. `end_frame` must be called exactly once per frame, after
/// gameplay has consumed the frame's input.
pub struct InputState {
    down: [bool; KEY_TABLE_LEN],
    pressed: [bool; KEY_TABLE_LEN],
    mouse: MouseState,
    text: TextInput,
    changed: bool,
    probe: Box<dyn KeyStateProbe>,
}

/// Table slot for a code, or `None` when the code is out of range.
fn table_index(key: VirtualKey) -> Option<usize> {
    let slot = key as usize;
    (slot < KEY_TABLE_LEN).then_some(slot)
}

impl InputState {
    /// Create a state buffer with no platform key probe wired.
    pub fn new() -> Self {
        Self::with_probe(Box::new(NullProbe))
    }

    /// Create a state buffer that answers generic-modifier aliasing queries
    /// through the given probe.
    pub fn with_probe(probe: Box<dyn KeyStateProbe>) -> Self {
        Self {
            down: [false; KEY_TABLE_LEN],
            pressed: [false; KEY_TABLE_LEN],
            mouse: MouseState::new(),
            text: TextInput::new(),
            changed: false,
            probe,
        }
    }

    // --- keyboard -------------------------------------------------------

    /// Record a key-down transition. Sets both the level and edge slots.
    ///
    /// Generic shift/control additionally mirror whichever physical side the
    /// probe reports held into the side-specific slots, because the platform
    /// delivers only the generic code in key messages.
    pub fn set_key_down(&mut self, key: VirtualKey) {
        let Some(slot) = table_index(key) else {
            return;
        };
        self.changed = true;
        self.down[slot] = true;
        self.pressed[slot] = true;
        match key {
            vk::SHIFT => {
                if self.probe.is_down(vk::LSHIFT) {
                    self.down[vk::LSHIFT as usize] = true;
                }
                if self.probe.is_down(vk::RSHIFT) {
                    self.down[vk::RSHIFT as usize] = true;
                }
            }
            vk::CONTROL => {
                if self.probe.is_down(vk::LCONTROL) {
                    self.down[vk::LCONTROL as usize] = true;
                }
                if self.probe.is_down(vk::RCONTROL) {
                    self.down[vk::RCONTROL as usize] = true;
                }
            }
            _ => {}
        }
    }

    /// Record a key-up transition. Clears the level slot only; the edge slot
    /// survives until `end_frame` so a press inside a single frame is never
    /// lost.
    pub fn set_key_up(&mut self, key: VirtualKey) {
        let Some(slot) = table_index(key) else {
            return;
        };
        self.changed = true;
        self.down[slot] = false;
        match key {
            // With both shifts held, releasing one does not generate a
            // message for the other on the original platform, so resolve the
            // sides against the probe instead of trusting the event.
            vk::SHIFT => {
                if !self.probe.is_down(vk::LSHIFT) {
                    self.down[vk::LSHIFT as usize] = false;
                }
                if !self.probe.is_down(vk::RSHIFT) {
                    self.down[vk::RSHIFT as usize] = false;
                }
            }
            vk::CONTROL => {
                if !self.probe.is_down(vk::LCONTROL) {
                    self.down[vk::LCONTROL as usize] = false;
                }
                if !self.probe.is_down(vk::RCONTROL) {
                    self.down[vk::RCONTROL as usize] = false;
                }
                // Keep generic control down while either side is still held
                self.down[slot] =
                    self.down[vk::LCONTROL as usize] || self.down[vk::RCONTROL as usize];
            }
            _ => {}
        }
    }

    /// Level query: true while the key is held.
    pub fn key_is_down(&self, key: VirtualKey) -> bool {
        table_index(key).map(|slot| self.down[slot]).unwrap_or(false)
    }

    /// Edge query: true if the key went down since the last `end_frame`.
    pub fn key_was_pressed(&self, key: VirtualKey) -> bool {
        table_index(key)
            .map(|slot| self.pressed[slot])
            .unwrap_or(false)
    }

    /// True if any key at all was pressed this frame.
    pub fn any_key_was_pressed(&self) -> bool {
        self.pressed.iter().any(|&p| p)
    }

    /// Consume a single key's edge immediately, for handlers that must not
    /// wait for the frame boundary.
    pub fn set_key_pressed_false(&mut self, key: VirtualKey) {
        if let Some(slot) = table_index(key) {
            self.pressed[slot] = false;
        }
    }

    // --- text entry -----------------------------------------------------

    /// Feed a typed character into the text accumulator. Independent of the
    /// down/pressed tables.
    pub fn set_key_in(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Text typed since the last line reset.
    pub fn text_in(&self) -> &str {
        self.text.text()
    }

    /// Most recent character received on the text path.
    pub fn char_in(&self) -> char {
        self.text.last_char()
    }

    /// Discard accumulated text.
    pub fn clear_text_in(&mut self) {
        self.text.clear();
    }

    // --- mouse ----------------------------------------------------------

    /// Record a button transition. No validation needed; the set of buttons
    /// is bounded by hardware.
    pub fn set_mouse_button(&mut self, button: MouseButton, down: bool) {
        self.mouse.set_button(button, down);
    }

    pub fn mouse_button(&self, button: MouseButton) -> bool {
        self.mouse.button(button)
    }

    /// Decode window-space cursor coordinates from a cursor-move payload.
    pub fn fill_mouse_position(&mut self, payload: CursorPayload) {
        self.mouse.x = payload.x;
        self.mouse.y = payload.y;
    }

    /// Decode relative motion from a raw-input payload. Non-mouse devices
    /// are skipped.
    pub fn fill_mouse_raw_position(&mut self, payload: RawMotionPayload) {
        if payload.device == DeviceClass::Mouse {
            self.mouse.raw_x = payload.dx;
            self.mouse.raw_y = payload.dy;
        }
    }

    pub fn mouse_x(&self) -> i32 {
        self.mouse.x
    }

    pub fn mouse_y(&self) -> i32 {
        self.mouse.y
    }

    pub fn mouse_raw_x(&self) -> i32 {
        self.mouse.raw_x
    }

    pub fn mouse_raw_y(&self) -> i32 {
        self.mouse.raw_y
    }

    // --- frame lifecycle ------------------------------------------------

    /// Whether any key mutation happened since the last `end_frame`. Reading
    /// does not clear the flag.
    pub fn state_changed(&self) -> bool {
        self.changed
    }

    /// Zero the selected buffer categories. The mouse category covers
    /// position and raw delta; button flags are left alone.
    pub fn clear_buffer(&mut self, mask: ClearMask) {
        log::trace!("clearing input buffers: {mask:?}");
        if mask.contains(ClearMask::KEYS_DOWN) {
            self.down = [false; KEY_TABLE_LEN];
        }
        if mask.contains(ClearMask::KEYS_PRESSED) {
            self.pressed = [false; KEY_TABLE_LEN];
        }
        if mask.contains(ClearMask::MOUSE) {
            self.mouse.clear_motion();
        }
        if mask.contains(ClearMask::TEXT) {
            self.text.clear();
        }
    }

    /// Clear every buffer category.
    pub fn clear_all(&mut self) {
        self.clear_buffer(ClearMask::all());
    }

    /// Frame boundary: drop the edge table and the change flag. Call exactly
    /// once per frame, after gameplay has read this frame's input.
    pub fn end_frame(&mut self) {
        self.clear_buffer(ClearMask::KEYS_PRESSED);
        self.changed = false;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    /// Probe with scripted physical key state.
    #[derive(Clone, Default)]
    struct MockProbe {
        held: Rc<RefCell<HashSet<VirtualKey>>>,
    }

    impl MockProbe {
        fn set(&self, key: VirtualKey, down: bool) {
            let mut held = self.held.borrow_mut();
            if down {
                held.insert(key);
            } else {
                held.remove(&key);
            }
        }
    }

    impl KeyStateProbe for MockProbe {
        fn is_down(&self, key: VirtualKey) -> bool {
            self.held.borrow().contains(&key)
        }
    }

    const OUT_OF_RANGE: VirtualKey = KEY_TABLE_LEN as VirtualKey;

    #[test]
    fn test_down_then_up() {
        let mut input = InputState::new();
        input.set_key_down(vk::KEY_W);
        assert!(input.key_is_down(vk::KEY_W));

        input.set_key_up(vk::KEY_W);
        assert!(!input.key_is_down(vk::KEY_W));
    }

    #[test]
    fn test_down_sets_pressed_edge() {
        let mut input = InputState::new();
        input.set_key_down(vk::SPACE);
        assert!(input.key_is_down(vk::SPACE));
        assert!(input.key_was_pressed(vk::SPACE));
    }

    #[test]
    fn test_key_up_does_not_clear_pressed() {
        let mut input = InputState::new();
        input.set_key_down(vk::SPACE);
        input.set_key_up(vk::SPACE);
        // The edge survives a same-frame release
        assert!(input.key_was_pressed(vk::SPACE));
        assert!(!input.key_is_down(vk::SPACE));
    }

    #[test]
    fn test_out_of_range_codes_are_noops() {
        let mut input = InputState::new();
        input.set_key_down(OUT_OF_RANGE);
        input.set_key_up(OUT_OF_RANGE);
        input.set_key_pressed_false(OUT_OF_RANGE);

        assert!(!input.key_is_down(OUT_OF_RANGE));
        assert!(!input.key_was_pressed(OUT_OF_RANGE));
        assert!(!input.any_key_was_pressed());
        assert!(!input.state_changed(), "invalid code must not flag a change");
    }

    #[test]
    fn test_any_key_was_pressed() {
        let mut input = InputState::new();
        assert!(!input.any_key_was_pressed());

        input.set_key_down(vk::KEY_A);
        assert!(input.any_key_was_pressed());
    }

    #[test]
    fn test_end_frame_clears_edges_and_change_flag() {
        let mut input = InputState::new();
        input.set_key_down(vk::KEY_A);
        assert!(input.state_changed());

        input.end_frame();
        assert!(!input.any_key_was_pressed());
        assert!(!input.state_changed());
        // Level state is untouched by the frame boundary
        assert!(input.key_is_down(vk::KEY_A));
    }

    #[test]
    fn test_state_changed_read_does_not_clear() {
        let mut input = InputState::new();
        input.set_key_down(vk::KEY_A);
        assert!(input.state_changed());
        assert!(input.state_changed());
    }

    #[test]
    fn test_set_key_pressed_false_consumes_single_edge() {
        let mut input = InputState::new();
        input.set_key_down(vk::KEY_A);
        input.set_key_down(vk::KEY_D);

        input.set_key_pressed_false(vk::KEY_A);
        assert!(!input.key_was_pressed(vk::KEY_A));
        assert!(input.key_was_pressed(vk::KEY_D));
        assert!(input.any_key_was_pressed());
    }

    #[test]
    fn test_text_entry_backspace() {
        let mut input = InputState::new();
        for ch in "abc".chars() {
            input.set_key_in(ch);
        }
        input.set_key_in('\u{8}');
        assert_eq!(input.text_in(), "ab");
    }

    #[test]
    fn test_text_entry_carriage_return_keeps_buffer() {
        let mut input = InputState::new();
        for ch in "go\r".chars() {
            input.set_key_in(ch);
        }
        assert_eq!(input.text_in(), "go\r");
        assert_eq!(input.char_in(), '\r');

        input.set_key_in('x');
        assert_eq!(input.text_in(), "x");
    }

    #[test]
    fn test_clear_buffer_is_selective() {
        let mut input = InputState::new();
        input.set_key_down(vk::KEY_A);
        input.set_key_in('h');
        input.fill_mouse_position(CursorPayload { x: 10, y: 20 });
        input.fill_mouse_raw_position(RawMotionPayload::mouse(3, -4));

        input.clear_buffer(ClearMask::MOUSE);
        assert_eq!((input.mouse_x(), input.mouse_y()), (0, 0));
        assert_eq!((input.mouse_raw_x(), input.mouse_raw_y()), (0, 0));
        // Key tables and text are untouched
        assert!(input.key_is_down(vk::KEY_A));
        assert!(input.key_was_pressed(vk::KEY_A));
        assert_eq!(input.text_in(), "h");
    }

    #[test]
    fn test_clear_buffer_keys_down_only() {
        let mut input = InputState::new();
        input.set_key_down(vk::KEY_A);

        input.clear_buffer(ClearMask::KEYS_DOWN);
        assert!(!input.key_is_down(vk::KEY_A));
        assert!(input.key_was_pressed(vk::KEY_A));
    }

    #[test]
    fn test_clear_all() {
        let mut input = InputState::new();
        input.set_key_down(vk::KEY_A);
        input.set_key_in('h');
        input.fill_mouse_position(CursorPayload { x: 5, y: 5 });

        input.clear_all();
        assert!(!input.key_is_down(vk::KEY_A));
        assert!(!input.any_key_was_pressed());
        assert_eq!(input.mouse_x(), 0);
        assert_eq!(input.text_in(), "");
    }

    #[test]
    fn test_mouse_buttons_pass_through() {
        let mut input = InputState::new();
        input.set_mouse_button(MouseButton::Left, true);
        input.set_mouse_button(MouseButton::Extra1, true);

        assert!(input.mouse_button(MouseButton::Left));
        assert!(input.mouse_button(MouseButton::Extra1));
        assert!(!input.mouse_button(MouseButton::Right));

        input.set_mouse_button(MouseButton::Left, false);
        assert!(!input.mouse_button(MouseButton::Left));
    }

    #[test]
    fn test_raw_motion_ignores_non_mouse_devices() {
        let mut input = InputState::new();
        input.fill_mouse_raw_position(RawMotionPayload {
            device: DeviceClass::Keyboard,
            dx: 9,
            dy: 9,
        });
        assert_eq!((input.mouse_raw_x(), input.mouse_raw_y()), (0, 0));

        input.fill_mouse_raw_position(RawMotionPayload::mouse(9, -9));
        assert_eq!((input.mouse_raw_x(), input.mouse_raw_y()), (9, -9));
    }

    #[test]
    fn test_shift_aliasing_mirrors_held_side() {
        let probe = MockProbe::default();
        probe.set(vk::LSHIFT, true);
        let mut input = InputState::with_probe(Box::new(probe.clone()));

        input.set_key_down(vk::SHIFT);
        assert!(input.key_is_down(vk::SHIFT));
        assert!(input.key_is_down(vk::LSHIFT));
        assert!(!input.key_is_down(vk::RSHIFT));
    }

    #[test]
    fn test_shift_release_trusts_probe_over_event() {
        let probe = MockProbe::default();
        probe.set(vk::LSHIFT, true);
        probe.set(vk::RSHIFT, true);
        let mut input = InputState::with_probe(Box::new(probe.clone()));
        input.set_key_down(vk::SHIFT);
        assert!(input.key_is_down(vk::LSHIFT));
        assert!(input.key_is_down(vk::RSHIFT));

        // Right side released physically; left is still held
        probe.set(vk::RSHIFT, false);
        input.set_key_up(vk::SHIFT);
        assert!(input.key_is_down(vk::LSHIFT));
        assert!(!input.key_is_down(vk::RSHIFT));
    }

    #[test]
    fn test_control_release_quirk_restores_generic_slot() {
        let probe = MockProbe::default();
        probe.set(vk::LCONTROL, true);
        probe.set(vk::RCONTROL, true);
        let mut input = InputState::with_probe(Box::new(probe.clone()));
        input.set_key_down(vk::CONTROL);

        // One side released; the generic slot must read down again because
        // the other side is still physically held
        probe.set(vk::RCONTROL, false);
        input.set_key_up(vk::CONTROL);
        assert!(input.key_is_down(vk::CONTROL));
        assert!(input.key_is_down(vk::LCONTROL));
        assert!(!input.key_is_down(vk::RCONTROL));

        // Last side released; generic follows
        probe.set(vk::LCONTROL, false);
        input.set_key_up(vk::CONTROL);
        assert!(!input.key_is_down(vk::CONTROL));
        assert!(!input.key_is_down(vk::LCONTROL));
    }
}
