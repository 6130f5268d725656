//! World Module
//!
//! Interactable entities, put-back slots and the registry that owns them.

pub mod entity;
pub mod prop;
pub mod registry;
pub mod slot;

pub use entity::{
    ActivationRequirement, DockPose, EntityId, HoldProfile, HoldRelease, Interactable,
    InteractableKind, ItemType, RotationLock,
};
pub use prop::{Prop, DEFAULT_INTERACTION_DISTANCE};
pub use registry::World;
pub use slot::PutBackSlot;
