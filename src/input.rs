//! Pressed-key tracking
//!
//! The host feeds key edges in; the simulation samples the set once per
//! frame. The debug toggle is consumed on read (deleted from the set) so a
//! held key produces a single toggle.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Logical keys the simulation cares about. Unrecognized host key codes
/// simply never map to one of these and are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    /// Hold to move at half speed
    Slow,
    Fire,
    /// One-shot debug overlay toggle
    ToggleDebug,
}

/// The set of currently-held keys
#[derive(Debug, Clone, Default)]
pub struct KeySet {
    pressed: HashSet<Key>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Read-and-consume: returns whether the key is held and removes it,
    /// so the next frame sees it released until the host re-presses.
    pub fn take(&mut self, key: Key) -> bool {
        self.pressed.remove(&key)
    }

    /// Drop everything held (match end detaches listeners)
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    /// Sample the set into a per-frame input snapshot
    pub fn sample(&mut self) -> TickInput {
        TickInput {
            left: self.is_pressed(Key::Left),
            right: self.is_pressed(Key::Right),
            up: self.is_pressed(Key::Up),
            down: self.is_pressed(Key::Down),
            slow: self.is_pressed(Key::Slow),
            fire: self.is_pressed(Key::Fire),
            toggle_debug: self.take(Key::ToggleDebug),
            autopilot: false,
        }
    }
}
