//! Input Module
//!
//! Two layers:
//!
//! - Raw hardware channels ([`KeyboardState`], [`MouseState`], [`GamepadState`])
//!   filled by the host event loop, combined in [`InputState`].
//! - The virtual layer ([`InputRouter`]) that samples the raw channels once per
//!   tick and exposes frame-stamped [`VirtualButton`]s and [`VirtualAxis`]es.
//!
//! The raw layer is decoupled from any specific windowing system; see
//! [`winit_adapter`] for the winit translation.
//!
//! # Example
//!
//! ```rust,ignore
//! use reticle_engine::input::{InputAction, InputRouter, InputState, KeyCode};
//!
//! let mut raw = InputState::new();
//! let mut router = InputRouter::default();
//!
//! raw.keyboard.handle_key(KeyCode::E, true);
//! router.sample(&mut raw, 1.0 / 60.0);
//! assert!(router.went_down(InputAction::Interact));
//! ```

pub mod axis_button;
pub mod bindings;
pub mod cursor_manager;
pub mod gamepad;
pub mod keyboard;
pub mod mouse;
pub mod router;
pub mod virtual_input;
pub mod winit_adapter;

// Re-export commonly used types at module level
pub use axis_button::{AxisButtonEvent, AxisDirection, AxisRepeatButton};
pub use bindings::{AxisId, AxisSource, InputAction, InputBindings, InputSource};
pub use cursor_manager::{CursorAction, CursorManager};
pub use gamepad::{GamepadAxis, GamepadButton, GamepadState};
pub use keyboard::{KeyCode, KeyboardState};
pub use mouse::{ButtonState, MouseButton, MouseState, ScrollDelta};
pub use router::InputRouter;
pub use virtual_input::{Tick, VirtualAxis, VirtualButton};

/// Combined raw state of every hardware channel.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub mouse: MouseState,
    pub gamepad: GamepadState,
}

impl InputState {
    /// Create a new input state with all inputs in their default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all input state to defaults.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.mouse.reset();
        self.gamepad.reset();
    }

    /// Level of one physical button source.
    pub fn is_source_down(&self, source: &InputSource) -> bool {
        match *source {
            InputSource::Key(key) => self.keyboard.is_down(key),
            InputSource::Mouse(button) => self.mouse.buttons.is_pressed(button),
            InputSource::Pad(button) => self.gamepad.is_down(button),
            InputSource::Trigger { axis, threshold } => self.gamepad.axis(axis) > threshold,
        }
    }

    /// Contribution of one axis source. `mouse_delta` is the motion consumed
    /// for the current tick.
    pub fn axis_contribution(&self, source: &AxisSource, mouse_delta: (f32, f32)) -> f32 {
        match *source {
            AxisSource::MouseX { scale } => mouse_delta.0 * scale,
            AxisSource::MouseY { scale } => mouse_delta.1 * scale,
            AxisSource::Pad { axis, scale } => self.gamepad.axis(axis) * scale,
            AxisSource::Keys { negative, positive } => self.keyboard.key_axis(negative, positive),
            AxisSource::PadButtons { negative, positive } => {
                (self.gamepad.is_down(positive) as i32 - self.gamepad.is_down(negative) as i32)
                    as f32
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_default() {
        let input = InputState::new();
        assert!(!input.is_source_down(&InputSource::Key(KeyCode::E)));
        assert!(!input.is_source_down(&InputSource::Mouse(MouseButton::Left)));
    }

    #[test]
    fn test_trigger_source_threshold() {
        let mut input = InputState::new();
        let source = InputSource::Trigger { axis: GamepadAxis::LeftTrigger, threshold: 0.5 };
        input.gamepad.set_axis(GamepadAxis::LeftTrigger, 0.5);
        assert!(!input.is_source_down(&source));
        input.gamepad.set_axis(GamepadAxis::LeftTrigger, 0.75);
        assert!(input.is_source_down(&source));
    }

    #[test]
    fn test_axis_contributions() {
        let mut input = InputState::new();
        input.keyboard.handle_key(KeyCode::D, true);
        let keys = AxisSource::Keys { negative: KeyCode::A, positive: KeyCode::D };
        assert_eq!(input.axis_contribution(&keys, (0.0, 0.0)), 1.0);

        let mouse = AxisSource::MouseX { scale: 2.0 };
        assert_eq!(input.axis_contribution(&mouse, (3.0, 0.0)), 6.0);
    }

    #[test]
    fn test_reset_clears_all_channels() {
        let mut input = InputState::new();
        input.keyboard.handle_key(KeyCode::E, true);
        input.mouse.set_button(MouseButton::Left, true);
        input.gamepad.set_button(GamepadButton::South, true);
        input.reset();
        assert!(!input.is_source_down(&InputSource::Key(KeyCode::E)));
        assert!(!input.is_source_down(&InputSource::Mouse(MouseButton::Left)));
        assert!(!input.is_source_down(&InputSource::Pad(GamepadButton::South)));
    }
}
