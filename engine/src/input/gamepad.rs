//! Gamepad Input Module
//!
//! Raw gamepad channel: digital buttons and analog axes for a single pad.
//! The host fills this from whatever gamepad backend it uses.

use std::collections::HashSet;

/// Gamepad buttons using positional (Xbox-style) naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadButton {
    /// Bottom face button (A / Cross)
    South,
    /// Right face button (B / Circle)
    East,
    /// Left face button (X / Square)
    West,
    /// Top face button (Y / Triangle)
    North,
    LeftBumper,
    RightBumper,
    LeftStick,
    RightStick,
    Start,
    Select,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
}

/// Gamepad analog axes. Sticks range -1..1, triggers 0..1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadAxis {
    LeftStickX,
    LeftStickY,
    RightStickX,
    RightStickY,
    LeftTrigger,
    RightTrigger,
}

impl GamepadAxis {
    const COUNT: usize = 6;

    fn index(self) -> usize {
        match self {
            GamepadAxis::LeftStickX => 0,
            GamepadAxis::LeftStickY => 1,
            GamepadAxis::RightStickX => 2,
            GamepadAxis::RightStickY => 3,
            GamepadAxis::LeftTrigger => 4,
            GamepadAxis::RightTrigger => 5,
        }
    }
}

/// Radial dead zone applied to stick axes.
pub const STICK_DEAD_ZONE: f32 = 0.15;

/// Current state of one gamepad.
#[derive(Debug, Clone, Default)]
pub struct GamepadState {
    connected: bool,
    buttons: HashSet<GamepadButton>,
    axes: [f32; GamepadAxis::COUNT],
}

impl GamepadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Connecting or disconnecting a pad clears its state.
    pub fn set_connected(&mut self, connected: bool) {
        if self.connected != connected {
            self.reset();
            self.connected = connected;
        }
    }

    pub fn set_button(&mut self, button: GamepadButton, pressed: bool) {
        if pressed {
            self.buttons.insert(button);
        } else {
            self.buttons.remove(&button);
        }
    }

    pub fn is_down(&self, button: GamepadButton) -> bool {
        self.buttons.contains(&button)
    }

    pub fn set_axis(&mut self, axis: GamepadAxis, value: f32) {
        self.axes[axis.index()] = value.clamp(-1.0, 1.0);
    }

    /// Raw axis value as reported by the device.
    pub fn axis_raw(&self, axis: GamepadAxis) -> f32 {
        self.axes[axis.index()]
    }

    /// Axis value with the stick dead zone removed and the remaining range
    /// rescaled to 0..1. Triggers are returned unchanged.
    pub fn axis(&self, axis: GamepadAxis) -> f32 {
        let raw = self.axis_raw(axis);
        match axis {
            GamepadAxis::LeftTrigger | GamepadAxis::RightTrigger => raw,
            _ => {
                let magnitude = raw.abs();
                if magnitude <= STICK_DEAD_ZONE {
                    0.0
                } else {
                    raw.signum() * (magnitude - STICK_DEAD_ZONE) / (1.0 - STICK_DEAD_ZONE)
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.buttons.clear();
        self.axes = [0.0; GamepadAxis::COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons() {
        let mut pad = GamepadState::new();
        pad.set_button(GamepadButton::South, true);
        assert!(pad.is_down(GamepadButton::South));
        pad.set_button(GamepadButton::South, false);
        assert!(!pad.is_down(GamepadButton::South));
    }

    #[test]
    fn test_stick_dead_zone() {
        let mut pad = GamepadState::new();
        pad.set_axis(GamepadAxis::LeftStickY, 0.1);
        assert_eq!(pad.axis(GamepadAxis::LeftStickY), 0.0);

        pad.set_axis(GamepadAxis::LeftStickY, -1.0);
        assert_eq!(pad.axis(GamepadAxis::LeftStickY), -1.0);
    }

    #[test]
    fn test_trigger_has_no_dead_zone() {
        let mut pad = GamepadState::new();
        pad.set_axis(GamepadAxis::RightTrigger, 0.1);
        assert_eq!(pad.axis(GamepadAxis::RightTrigger), 0.1);
    }

    #[test]
    fn test_disconnect_clears_state() {
        let mut pad = GamepadState::new();
        pad.set_connected(true);
        pad.set_button(GamepadButton::Start, true);
        pad.set_axis(GamepadAxis::LeftStickX, 0.8);
        pad.set_connected(false);
        assert!(!pad.is_down(GamepadButton::Start));
        assert_eq!(pad.axis_raw(GamepadAxis::LeftStickX), 0.0);
    }
}
