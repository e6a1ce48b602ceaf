// Injected physical key-state queries

use super::keys::VirtualKey;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Source of physical key-down state, independent of the event stream.
///
/// The generic shift/control aliasing in `InputState` needs to ask "is the
/// left/right physical side actually held right now?" — on the original
/// platform this was an OS call. Injecting it as a trait keeps the state
/// buffer free of any window-system dependency and lets tests supply a mock.
pub trait KeyStateProbe {
    fn is_down(&self, key: VirtualKey) -> bool;
}

/// Probe that reports every key up. Used when no platform source is wired.
#[derive(Debug, Default)]
pub struct NullProbe;

impl KeyStateProbe for NullProbe {
    fn is_down(&self, _key: VirtualKey) -> bool {
        false
    }
}

/// Probe backed by a shared set of held keys, fed by the event integration.
///
/// Single-threaded by design: input mutation and polling happen on the
/// message-pump thread, so `Rc<RefCell>` is the right amount of machinery.
#[derive(Debug, Clone, Default)]
pub struct SharedKeyProbe {
    held: Rc<RefCell<HashSet<VirtualKey>>>,
}

impl SharedKeyProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a physical key transition.
    pub fn set_down(&self, key: VirtualKey, down: bool) {
        let mut held = self.held.borrow_mut();
        if down {
            held.insert(key);
        } else {
            held.remove(&key);
        }
    }
}

impl KeyStateProbe for SharedKeyProbe {
    fn is_down(&self, key: VirtualKey) -> bool {
        self.held.borrow().contains(&key)
    }
}
