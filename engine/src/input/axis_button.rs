//! Axis-Driven Repeat Button
//!
//! Turns one direction of an analog stick into a repeating button, the way a
//! held d-pad pages through a menu.
//!
//! The stick engages when it moves strictly past the threshold in the watched
//! direction and disengages only once it comes back through zero. Holding the
//! stick exactly at the threshold neither engages nor releases, so a resting
//! stick cannot chatter around the boundary.
//!
//! The repeat timer runs on unscaled time so paging keeps working while the
//! simulation is paused behind a menu.

use super::virtual_input::{Tick, VirtualButton};

/// Default engage threshold for menu paging.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Default interval between repeated presses while the stick is held (seconds).
pub const DEFAULT_REPEAT_INTERVAL: f32 = 0.35;

/// Which half of the axis drives the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisDirection {
    Positive,
    Negative,
}

impl AxisDirection {
    #[inline]
    fn signed(self, value: f32) -> f32 {
        match self {
            AxisDirection::Positive => value,
            AxisDirection::Negative => -value,
        }
    }
}

/// What the repeat button did to its virtual button this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisButtonEvent {
    None,
    Pressed,
    Repeated,
    Released,
}

/// Hysteresis + repeat state for one stick direction.
#[derive(Debug, Clone)]
pub struct AxisRepeatButton {
    direction: AxisDirection,
    threshold: f32,
    repeat_interval: f32,
    engaged: bool,
    repeat_timer: f32,
}

impl AxisRepeatButton {
    pub fn new(direction: AxisDirection, threshold: f32, repeat_interval: f32) -> Self {
        Self {
            direction,
            threshold: threshold.abs(),
            repeat_interval: repeat_interval.max(f32::EPSILON),
            engaged: false,
            repeat_timer: 0.0,
        }
    }

    pub fn with_defaults(direction: AxisDirection) -> Self {
        Self::new(direction, DEFAULT_THRESHOLD, DEFAULT_REPEAT_INTERVAL)
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Advance with the latest axis value and drive `button`.
    ///
    /// `unscaled_dt` is real elapsed time, unaffected by pause.
    pub fn drive(
        &mut self,
        value: f32,
        unscaled_dt: f32,
        button: &mut VirtualButton,
        stamp: Tick,
    ) -> AxisButtonEvent {
        let v = self.direction.signed(value);

        if !self.engaged {
            if v > self.threshold {
                self.engaged = true;
                self.repeat_timer = self.repeat_interval;
                button.pressed(stamp);
                return AxisButtonEvent::Pressed;
            }
            return AxisButtonEvent::None;
        }

        if v <= 0.0 {
            self.engaged = false;
            self.repeat_timer = 0.0;
            button.released(stamp);
            return AxisButtonEvent::Released;
        }

        self.repeat_timer -= unscaled_dt;
        if self.repeat_timer <= 0.0 {
            self.repeat_timer += self.repeat_interval;
            button.repeat(stamp);
            return AxisButtonEvent::Repeated;
        }

        AxisButtonEvent::None
    }

    /// Drop engagement without touching any button (used by flush).
    pub fn reset(&mut self) {
        self.engaged = false;
        self.repeat_timer = 0.0;
    }
}
