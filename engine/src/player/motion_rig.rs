//! Motion Rig
//!
//! Kinematic player body for headless hosts: walks on a flat plane, looks
//! with a [`FirstPersonView`], and eases into and out of docks over a fixed
//! duration.
//!
//! # Usage
//!
//! ```rust,ignore
//! use reticle_engine::player::{MotionRig, PlayerMotion};
//!
//! let mut rig = MotionRig::new().with_dock_duration(0.5);
//! rig.dock(pose);
//! while rig.is_dock_in_progress() {
//!     rig.advance(dt, Vec2::ZERO, Vec2::ZERO);
//! }
//! ```

use glam::{Vec2, Vec3};

use super::PlayerMotion;
use crate::camera::FirstPersonView;
use crate::camera::sensitivity::DEFAULT_SENSITIVITY;
use crate::camera::zoom::DEFAULT_FOV;
use crate::world::DockPose;

/// Walk speed in meters per second
pub const WALK_SPEED: f32 = 3.0;

/// Dock enter/leave duration in seconds
pub const DOCK_TRANSITION_DURATION: f32 = 0.75;

/// Eye height above the ground plane in meters
pub const EYE_HEIGHT: f32 = 1.6;

#[derive(Debug, Clone, Copy, PartialEq)]
enum DockPhase {
    Free,
    Entering { from: Vec3, pose: DockPose },
    Docked,
    Leaving { from: Vec3, to: Vec3 },
}

#[derive(Debug, Clone)]
pub struct MotionRig {
    view: FirstPersonView,
    movement_enabled: bool,
    look_enabled: bool,
    frozen: bool,
    sensitivity: Vec2,
    fov: f32,
    dock_duration: f32,
    phase: DockPhase,
    /// Transition progress (0.0 to 1.0)
    progress: f32,
    /// Where the player stood before docking
    return_position: Vec3,
}

impl Default for MotionRig {
    fn default() -> Self {
        Self {
            view: FirstPersonView::with_position(Vec3::new(0.0, EYE_HEIGHT, 0.0)),
            movement_enabled: true,
            look_enabled: true,
            frozen: false,
            sensitivity: DEFAULT_SENSITIVITY,
            fov: DEFAULT_FOV,
            dock_duration: DOCK_TRANSITION_DURATION,
            phase: DockPhase::Free,
            progress: 1.0,
            return_position: Vec3::ZERO,
        }
    }
}

impl MotionRig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, eye: Vec3) -> Self {
        self.view.position = eye;
        self
    }

    pub fn with_dock_duration(mut self, seconds: f32) -> Self {
        self.dock_duration = seconds;
        self
    }

    pub fn view(&self) -> &FirstPersonView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut FirstPersonView {
        &mut self.view
    }

    pub fn is_docked(&self) -> bool {
        self.phase == DockPhase::Docked
    }

    pub fn is_movement_enabled(&self) -> bool {
        self.movement_enabled
    }

    pub fn is_look_enabled(&self) -> bool {
        self.look_enabled
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn field_of_view(&self) -> f32 {
        self.fov
    }

    pub fn look_sensitivity(&self) -> Vec2 {
        self.sensitivity
    }

    fn advance_transition(&mut self, dt: f32) {
        let (from, to) = match self.phase {
            DockPhase::Entering { from, pose } => (from, pose.position),
            DockPhase::Leaving { from, to } => (from, to),
            DockPhase::Free | DockPhase::Docked => return,
        };

        self.progress = if self.dock_duration > 0.0 {
            (self.progress + dt / self.dock_duration).min(1.0)
        } else {
            1.0
        };
        self.view.position = from.lerp(to, ease_in_out(self.progress));

        if self.progress >= 1.0 {
            self.phase = match self.phase {
                DockPhase::Entering { pose, .. } => {
                    self.view.look_at(pose.look_at);
                    DockPhase::Docked
                }
                _ => DockPhase::Free,
            };
        }
    }
}

impl PlayerMotion for MotionRig {
    fn disable_movement(&mut self) {
        self.movement_enabled = false;
    }

    fn enable_movement(&mut self) {
        self.movement_enabled = true;
    }

    fn disable_look(&mut self) {
        self.look_enabled = false;
    }

    fn enable_look(&mut self) {
        self.look_enabled = true;
    }

    fn dock(&mut self, pose: DockPose) {
        if self.phase != DockPhase::Free {
            return;
        }
        self.return_position = self.view.position;
        self.phase = DockPhase::Entering { from: self.view.position, pose };
        self.progress = 0.0;
    }

    fn undock(&mut self) {
        if self.phase != DockPhase::Docked {
            return;
        }
        self.phase = DockPhase::Leaving { from: self.view.position, to: self.return_position };
        self.progress = 0.0;
    }

    fn is_dock_in_progress(&self) -> bool {
        matches!(self.phase, DockPhase::Entering { .. } | DockPhase::Leaving { .. })
    }

    fn settle_dock(&mut self, dock: Option<DockPose>) {
        self.progress = 1.0;
        match dock {
            Some(pose) => {
                if self.phase == DockPhase::Free {
                    self.return_position = self.view.position;
                }
                self.view.position = pose.position;
                self.view.look_at(pose.look_at);
                self.phase = DockPhase::Docked;
            }
            None => {
                if self.phase != DockPhase::Free {
                    self.view.position = self.return_position;
                }
                self.phase = DockPhase::Free;
            }
        }
    }

    fn freeze(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    fn reset_look(&mut self) {
        self.view.level();
    }

    fn eye_position(&self) -> Vec3 {
        self.view.position
    }

    fn view_forward(&self) -> Vec3 {
        self.view.forward()
    }

    fn set_field_of_view(&mut self, fov_degrees: f32) {
        self.fov = fov_degrees;
    }

    fn set_look_sensitivity(&mut self, sensitivity: Vec2) {
        self.sensitivity = sensitivity;
    }

    fn advance(&mut self, dt: f32, look: Vec2, movement: Vec2) {
        if self.frozen {
            return;
        }
        let dt = dt.max(0.0);

        if self.is_dock_in_progress() {
            self.advance_transition(dt);
            return;
        }

        if self.look_enabled {
            self.view.apply_look(look, self.sensitivity);
        }

        if self.movement_enabled && self.phase == DockPhase::Free {
            let forward = self.view.forward();
            let flat_forward = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
            let right = self.view.right();
            let wish = (flat_forward * movement.y + right * movement.x).clamp_length_max(1.0);
            self.view.position += wish * WALK_SPEED * dt;
        }
    }
}

/// Smooth ease-in-out curve (smoothstep)
fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}
