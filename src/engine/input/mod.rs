// Input handling system
//
// Translates push-style window-system events into a pollable per-frame
// snapshot for gameplay code.
//
// ## Architecture
//
// - `keys`: virtual-key code space and winit translation
// - `state`: the double-buffered key/mouse/text state buffer
// - `text`: text-entry accumulator with line semantics
// - `mouse`: mouse state and decoded event payloads
// - `probe`: injected physical key-state queries for modifier aliasing
// - `manager`: winit integration and mouse capture lifecycle
//
// ## Usage Example
//
// ```rust
// use engine::input::{InputManager, vk};
//
// let mut input = InputManager::new();
//
// // In the event loop, route winit events
// input.process_keyboard_event(&key_event);
//
// // Gameplay polls the snapshot
// if input.state().key_was_pressed(vk::SPACE) {
//     // jump!
// }
//
// // Once per frame, after gameplay has read the input
// input.end_frame();
// ```

pub mod keys;
pub mod manager;
pub mod mouse;
pub mod probe;
pub mod state;
pub mod text;

// Re-export commonly used types
pub use keys::{virtual_key, vk, VirtualKey, KEY_TABLE_LEN};
pub use manager::{InputError, InputManager};
pub use mouse::{CursorPayload, DeviceClass, MouseButton, MouseState, RawMotionPayload};
pub use probe::{KeyStateProbe, NullProbe, SharedKeyProbe};
pub use state::{ClearMask, InputState};
pub use text::TextInput;
