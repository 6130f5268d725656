//! Look Sensitivity Smoothing
//!
//! Pointer sensitivity is overridden by zoom and by scripted scenes. Setting
//! an override is instant; restoring can ease back to the base value over
//! several ticks instead of snapping.

use glam::Vec2;

/// Default per-axis sensitivity in radians per pointer unit.
pub const DEFAULT_SENSITIVITY: Vec2 = Vec2::new(0.002, 0.002);
/// Default interpolation rate (fraction of the remaining gap per second).
pub const DEFAULT_SMOOTHING_RATE: f32 = 4.0;

const SNAP_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct SensitivitySmoother {
    base: Vec2,
    current: Vec2,
    target: Vec2,
    smoothing: bool,
    rate: f32,
}

impl Default for SensitivitySmoother {
    fn default() -> Self {
        Self::new(DEFAULT_SENSITIVITY, DEFAULT_SMOOTHING_RATE)
    }
}

impl SensitivitySmoother {
    pub fn new(base: Vec2, rate: f32) -> Self {
        Self {
            base,
            current: base,
            target: base,
            smoothing: false,
            rate,
        }
    }

    pub fn base(&self) -> Vec2 {
        self.base
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn is_smoothing(&self) -> bool {
        self.smoothing
    }

    /// Change the resting value (options menu). Takes effect on the next restore.
    pub fn set_base(&mut self, base: Vec2) {
        self.base = base;
    }

    /// Write the sensitivity immediately and stop any smoothing in progress.
    pub fn set_sensitivity(&mut self, value: Vec2) {
        self.current = value;
        self.target = value;
        self.smoothing = false;
    }

    /// Return to the base value, easing there when `smooth` is set.
    pub fn restore(&mut self, smooth: bool) {
        if smooth {
            self.target = self.base;
            self.smoothing = true;
        } else {
            self.set_sensitivity(self.base);
        }
    }

    /// Advance smoothing by one tick. Returns whether `current` changed.
    pub fn step(&mut self, unscaled_dt: f32) -> bool {
        if !self.smoothing {
            return false;
        }
        let t = (self.rate * unscaled_dt).clamp(0.0, 1.0);
        self.current = self.current.lerp(self.target, t);
        if self.current.distance_squared(self.target) < SNAP_EPSILON * SNAP_EPSILON {
            self.current = self.target;
            self.smoothing = false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_is_immediate_and_cancels_smoothing() {
        let mut s = SensitivitySmoother::default();
        s.set_sensitivity(Vec2::splat(0.001));
        s.restore(true);
        assert!(s.is_smoothing());

        s.set_sensitivity(Vec2::splat(0.0005));
        assert!(!s.is_smoothing());
        assert_eq!(s.current(), Vec2::splat(0.0005));
        assert!(!s.step(1.0 / 60.0));
    }

    #[test]
    fn test_restore_without_smoothing_snaps() {
        let mut s = SensitivitySmoother::new(Vec2::ONE, 4.0);
        s.set_sensitivity(Vec2::ZERO);
        s.restore(false);
        assert_eq!(s.current(), Vec2::ONE);
        assert!(!s.is_smoothing());
    }

    #[test]
    fn test_smoothing_moves_monotonically_and_settles() {
        let mut s = SensitivitySmoother::new(Vec2::ONE, 4.0);
        s.set_sensitivity(Vec2::ZERO);
        s.restore(true);

        let mut last = 0.0;
        for _ in 0..10 {
            s.step(1.0 / 60.0);
            assert!(s.current().x > last);
            assert!(s.current().x <= 1.0);
            last = s.current().x;
        }
        for _ in 0..1000 {
            s.step(1.0 / 60.0);
        }
        assert_eq!(s.current(), Vec2::ONE);
        assert!(!s.is_smoothing());
    }

    #[test]
    fn test_large_step_lands_on_target() {
        let mut s = SensitivitySmoother::new(Vec2::ONE, 4.0);
        s.set_sensitivity(Vec2::ZERO);
        s.restore(true);
        s.step(1.0);
        assert_eq!(s.current(), Vec2::ONE);
    }
}
