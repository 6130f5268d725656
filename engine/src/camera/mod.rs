//! Camera Module
//!
//! Everything tied to the player's view: what the reticle is on, the view
//! orientation, pointer sensitivity and zoom. Window-system agnostic.

pub mod fps_controller;
pub mod look;
pub mod raycast;
pub mod sensitivity;
pub mod zoom;

pub use fps_controller::FirstPersonView;
pub use look::{LayerMask, LookTarget, RayHit, SpatialQuery, WorldLookResolver};
pub use raycast::{ColliderScene, SphereCollider, ray_sphere_distance};
pub use sensitivity::SensitivitySmoother;
pub use zoom::ZoomState;
