//! Interactable Entities
//!
//! The closed set of interaction kinds and the capability trait the
//! interaction layer dispatches through. Kind-specific effects (opening a
//! drawer, lighting a lamp, playing a door animation) live behind the trait.

use std::any::Any;
use std::fmt;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Stable handle to a world entity or put-back slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Inventory item category ("brass_key", "fuse").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemType(String);

impl ItemType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Discriminant for interaction behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractableKind {
    /// Scenery that can only be read
    Static,
    /// Physical object that can be held
    Pickup,
    /// Switch, lever, lock, toggle
    Activate,
    /// Note or book opened in a reading view
    Journal,
    /// Holdable object that can also be stored
    Inventory,
    /// Fixed viewpoint the player attaches to
    Dock,
    AudioDiary,
}

impl InteractableKind {
    pub const ALL: [InteractableKind; 7] = [
        InteractableKind::Static,
        InteractableKind::Pickup,
        InteractableKind::Activate,
        InteractableKind::Journal,
        InteractableKind::Inventory,
        InteractableKind::Dock,
        InteractableKind::AudioDiary,
    ];

    /// Kinds that can occupy the hand.
    pub fn is_holdable(self) -> bool {
        matches!(self, InteractableKind::Pickup | InteractableKind::Inventory)
    }

    pub fn name(self) -> &'static str {
        match self {
            InteractableKind::Static => "static",
            InteractableKind::Pickup => "pickup",
            InteractableKind::Activate => "activate",
            InteractableKind::Journal => "journal",
            InteractableKind::Inventory => "inventory",
            InteractableKind::Dock => "dock",
            InteractableKind::AudioDiary => "audio_diary",
        }
    }
}

/// Which axes the player may rotate a held object about while examining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RotationLock {
    #[default]
    Free,
    /// Yaw only
    Horizontal,
    /// Pitch only
    Vertical,
    /// No rotation at all
    None,
}

impl RotationLock {
    /// Mask a raw (yaw, pitch) rotation input.
    pub fn filter(self, yaw: f32, pitch: f32) -> (f32, f32) {
        match self {
            RotationLock::Free => (yaw, pitch),
            RotationLock::Horizontal => (yaw, 0.0),
            RotationLock::Vertical => (0.0, pitch),
            RotationLock::None => (0.0, 0.0),
        }
    }
}

/// How an entity behaves in the hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoldProfile {
    pub rotation_lock: RotationLock,
    /// Impulse magnitude applied along the view vector when tossed
    pub toss_strength: f32,
}

impl Default for HoldProfile {
    fn default() -> Self {
        Self {
            rotation_lock: RotationLock::Free,
            toss_strength: 4.0,
        }
    }
}

/// Inventory item needed before `activate()` may run.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationRequirement {
    pub item: ItemType,
    pub quantity: u32,
    /// Remove the item(s) once used
    pub consume: bool,
    /// Only required to switch an already-on toggle off
    pub only_when_toggling_off: bool,
}

impl ActivationRequirement {
    pub fn new(item: ItemType, quantity: u32) -> Self {
        Self {
            item,
            quantity,
            consume: false,
            only_when_toggling_off: false,
        }
    }

    pub fn consumed(mut self) -> Self {
        self.consume = true;
        self
    }

    pub fn only_when_toggling_off(mut self) -> Self {
        self.only_when_toggling_off = true;
        self
    }

    /// Whether the requirement applies given the current toggle state.
    pub fn applies(&self, toggled_on: bool) -> bool {
        !self.only_when_toggling_off || toggled_on
    }
}

/// Where a dock places the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// How a held entity leaves the hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoldRelease {
    Toss { impulse: Vec3 },
    PutBack { position: Vec3, rotation: Quat },
    Stored,
    Consumed,
}

/// Capability surface of every interactable world entity.
///
/// Only `id`, `kind`, `interaction_distance` and the highlight pair are
/// required; everything else defaults to "not supported".
pub trait Interactable: fmt::Debug {
    fn id(&self) -> EntityId;
    fn kind(&self) -> InteractableKind;

    /// Per-entity reach; the hit is ignored beyond it.
    fn interaction_distance(&self) -> f32;

    fn allows_interaction_while_holding(&self) -> bool {
        false
    }

    fn set_highlighted(&mut self, highlighted: bool);
    fn is_highlighted(&self) -> bool;

    /// Kind-specific primary effect (read, open, listen, use).
    fn interact(&mut self) {}

    fn activate(&mut self) {}

    /// Activation was attempted without the required item.
    fn fail_to_activate(&mut self) {}

    fn activation_requirement(&self) -> Option<&ActivationRequirement> {
        None
    }

    fn is_toggled_on(&self) -> bool {
        false
    }

    /// `None` means the entity cannot be picked up.
    fn hold_profile(&self) -> Option<HoldProfile> {
        None
    }

    /// Orientation from the last examination, reused on the next pickup.
    fn examine_rotation(&self) -> Quat {
        Quat::IDENTITY
    }

    fn set_examine_rotation(&mut self, _rotation: Quat) {}

    /// Attached to the hand anchor: collision off, examination-safe layer on.
    fn begin_hold(&mut self) {}

    fn end_hold(&mut self, _release: HoldRelease) {}

    fn item_type(&self) -> Option<&ItemType> {
        None
    }

    /// Called after the inventory took the item. `keep_instance` tells
    /// whether the physical object stays in the world (hidden) or is gone.
    fn on_stored(&mut self, _keep_instance: bool) {}

    /// Dock occupancy.
    fn is_occupied(&self) -> bool {
        false
    }

    fn set_occupied(&mut self, _occupied: bool) {}

    fn dock_pose(&self) -> Option<DockPose> {
        None
    }

    /// Collectible identifier recorded the first time the entity is used.
    fn collectible(&self) -> Option<&str> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_lock_filter() {
        assert_eq!(RotationLock::Free.filter(1.0, 2.0), (1.0, 2.0));
        assert_eq!(RotationLock::Horizontal.filter(1.0, 2.0), (1.0, 0.0));
        assert_eq!(RotationLock::Vertical.filter(1.0, 2.0), (0.0, 2.0));
        assert_eq!(RotationLock::None.filter(1.0, 2.0), (0.0, 0.0));
    }

    #[test]
    fn test_requirement_applies() {
        let always = ActivationRequirement::new(ItemType::new("fuse"), 1);
        assert!(always.applies(false));
        assert!(always.applies(true));

        let off_only = always.clone().only_when_toggling_off();
        assert!(!off_only.applies(false));
        assert!(off_only.applies(true));
    }

    #[test]
    fn test_holdable_kinds() {
        let holdable: Vec<_> = InteractableKind::ALL
            .into_iter()
            .filter(|k| k.is_holdable())
            .collect();
        assert_eq!(holdable, vec![InteractableKind::Pickup, InteractableKind::Inventory]);
    }

    #[test]
    fn test_entity_id_serializes_transparently() {
        let json = serde_json::to_string(&EntityId(7)).unwrap();
        assert_eq!(json, "7");
    }
}
