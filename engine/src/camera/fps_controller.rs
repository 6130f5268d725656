//! First-Person View
//!
//! Yaw/pitch orientation of the player's eye. Pointer deltas rotate it
//! directly with a per-axis sensitivity; there is no smoothing here (the
//! sensitivity itself is smoothed elsewhere).

use glam::{Vec2, Vec3};

/// Pitch limit constant: -89 degrees in radians
const PITCH_LIMIT_MIN: f32 = -89.0 * std::f32::consts::PI / 180.0;
/// Pitch limit constant: +89 degrees in radians
const PITCH_LIMIT_MAX: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Player eye orientation.
///
/// ## Usage
/// ```rust,ignore
/// let mut view = FirstPersonView::new();
/// view.apply_look(Vec2::new(dx, dy), sensitivity);
/// let forward = view.forward();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FirstPersonView {
    pub position: Vec3,
    /// Horizontal angle (radians), unrestricted
    pub yaw: f32,
    /// Vertical angle (radians), clamped to the pitch limits
    pub pitch: f32,
    pitch_limits: (f32, f32),
}

impl Default for FirstPersonView {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            pitch_limits: (PITCH_LIMIT_MIN, PITCH_LIMIT_MAX),
        }
    }
}

impl FirstPersonView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    #[inline]
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(self.pitch_limits.0, self.pitch_limits.1);
    }

    /// Rotate by a pointer delta.
    ///
    /// Positive x turns right (yaw up); positive y looks down (pitch down).
    pub fn apply_look(&mut self, delta: Vec2, sensitivity: Vec2) {
        self.yaw += delta.x * sensitivity.x;
        self.set_pitch(self.pitch - delta.y * sensitivity.y);
    }

    /// View direction. Yaw 0 and pitch 0 look toward -Z.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    #[inline]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Orient toward a world position.
    pub fn look_at(&mut self, target: Vec3) {
        let to_target = target - self.position;
        let distance = to_target.length();

        if distance > 0.001 {
            self.yaw = to_target.x.atan2(-to_target.z);
            self.set_pitch((to_target.y / distance).asin());
        }
    }

    /// Level the view without changing heading.
    pub fn level(&mut self) {
        self.pitch = 0.0;
    }
}
