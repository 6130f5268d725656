//! Smoothed field of view for hold-to-zoom.

/// Default vertical field of view in degrees.
pub const DEFAULT_FOV: f32 = 70.0;
pub const DEFAULT_ZOOM_FOV: f32 = 35.0;
pub const DEFAULT_FOV_LERP_RATE: f32 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    default_fov: f32,
    zoom_fov: f32,
    current: f32,
    lerp_rate: f32,
    zoomed: bool,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(DEFAULT_FOV, DEFAULT_ZOOM_FOV, DEFAULT_FOV_LERP_RATE)
    }
}

impl ZoomState {
    pub fn new(default_fov: f32, zoom_fov: f32, lerp_rate: f32) -> Self {
        Self {
            default_fov,
            zoom_fov,
            current: default_fov,
            lerp_rate,
            zoomed: false,
        }
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    /// Returns whether the flag changed.
    pub fn set_zoomed(&mut self, zoomed: bool) -> bool {
        let changed = self.zoomed != zoomed;
        self.zoomed = zoomed;
        changed
    }

    pub fn target_fov(&self) -> f32 {
        if self.zoomed { self.zoom_fov } else { self.default_fov }
    }

    pub fn fov(&self) -> f32 {
        self.current
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target_fov()
    }

    /// Ease toward the target field of view; returns the new value.
    pub fn step(&mut self, unscaled_dt: f32) -> f32 {
        let target = self.target_fov();
        let t = (self.lerp_rate * unscaled_dt).clamp(0.0, 1.0);
        self.current += (target - self.current) * t;
        if (self.current - target).abs() < 0.01 {
            self.current = target;
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_eases_in_and_out() {
        let mut zoom = ZoomState::new(70.0, 30.0, 10.0);
        assert!(zoom.set_zoomed(true));
        assert!(!zoom.set_zoomed(true));

        let first = zoom.step(1.0 / 60.0);
        assert!(first < 70.0 && first > 30.0);
        for _ in 0..600 {
            zoom.step(1.0 / 60.0);
        }
        assert_eq!(zoom.fov(), 30.0);

        zoom.set_zoomed(false);
        zoom.step(1.0);
        assert_eq!(zoom.fov(), 70.0);
        assert!(zoom.is_settled());
    }
}
