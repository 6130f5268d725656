//! Keyboard Input Module
//!
//! Raw keyboard channel: which physical keys are held right now.
//! Decoupled from winit to use generic key codes.

use std::collections::HashSet;

/// Generic key codes, independent of windowing system.
///
/// These map to standard keyboard keys but are not tied to winit::keyboard::KeyCode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Interaction keys
    E,
    F,
    Q,
    R,
    Z,
    J,
    I,

    // Control keys
    Escape,
    Enter,
    Tab,
    Backspace,
    PageUp,
    PageDown,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks which keys are currently held.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    down: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the level of the key changed.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if key == KeyCode::Unknown {
            return false;
        }
        if pressed {
            self.down.insert(key)
        } else {
            self.down.remove(&key)
        }
    }

    /// Check if a key is held.
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.down.contains(&key)
    }

    /// Check if any key is held.
    pub fn any_down(&self) -> bool {
        !self.down.is_empty()
    }

    /// -1, 0 or 1 from a negative/positive key pair.
    pub fn key_axis(&self, negative: KeyCode, positive: KeyCode) -> f32 {
        (self.is_down(positive) as i32 - self.is_down(negative) as i32) as f32
    }

    /// Reset all keys to released state.
    pub fn reset(&mut self) {
        self.down.clear();
    }
}
