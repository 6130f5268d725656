//! Player Module
//!
//! The motion contract the interaction layer drives, and [`MotionRig`], a
//! kinematic implementation with a timed dock transition.
//!
//! # Components
//!
//! - [`PlayerMotion`] - Movement/look enable flags, docking, freeze, view queries
//! - [`MotionRig`] - Walks on a flat plane, eases into and out of docks

pub mod motion_rig;

pub use motion_rig::{DOCK_TRANSITION_DURATION, MotionRig, WALK_SPEED};

use glam::{Vec2, Vec3};

use crate::world::DockPose;

/// Player-motion collaborator.
pub trait PlayerMotion {
    fn disable_movement(&mut self);
    fn enable_movement(&mut self);
    fn disable_look(&mut self);
    fn enable_look(&mut self);

    /// Start moving into a dock. Completion is polled through
    /// [`is_dock_in_progress`](Self::is_dock_in_progress).
    fn dock(&mut self, pose: DockPose);

    /// Start moving back out of the current dock.
    fn undock(&mut self);

    fn is_dock_in_progress(&self) -> bool;

    /// Place the body in `dock` (or out of any dock) with no transition.
    /// Used when loading a save.
    fn settle_dock(&mut self, _dock: Option<DockPose>) {}

    /// Halt all motion (menu, cutscene, suspend).
    fn freeze(&mut self, frozen: bool);

    /// Level the view (after load or cutscene).
    fn reset_look(&mut self);

    fn eye_position(&self) -> Vec3;
    fn view_forward(&self) -> Vec3;

    fn set_field_of_view(&mut self, fov_degrees: f32);
    fn set_look_sensitivity(&mut self, sensitivity: Vec2);

    /// Advance one tick with the sampled look and move axes.
    fn advance(&mut self, _dt: f32, _look: Vec2, _movement: Vec2) {}
}
