//! Prop
//!
//! Data-driven [`Interactable`] used for level content that needs no custom
//! code: configure it with the builder methods, and it keeps counters of what
//! happened to it so scripted scenes (and tests) can observe the outcome.

use std::any::Any;

use glam::{Quat, Vec3};

use super::entity::{
    ActivationRequirement, DockPose, EntityId, HoldProfile, HoldRelease, Interactable,
    InteractableKind, ItemType,
};

pub const DEFAULT_INTERACTION_DISTANCE: f32 = 2.5;

#[derive(Debug, Clone)]
pub struct Prop {
    id: EntityId,
    kind: InteractableKind,
    distance: f32,
    while_holding: bool,
    highlighted: bool,
    hold: Option<HoldProfile>,
    examine_rotation: Quat,
    requirement: Option<ActivationRequirement>,
    toggle: Option<bool>,
    item: Option<ItemType>,
    occupied: bool,
    dock_pose: Option<DockPose>,
    collectible: Option<String>,

    pub position: Vec3,
    pub rotation: Quat,
    /// Attached to the hand anchor
    pub in_hand: bool,
    /// Removed from the world (stored without a kept instance, or consumed)
    pub removed: bool,
    pub interactions: u32,
    pub activations: u32,
    pub failed_activations: u32,
    pub last_release: Option<HoldRelease>,
}

impl Prop {
    pub fn new(id: EntityId, kind: InteractableKind) -> Self {
        Self {
            id,
            kind,
            distance: DEFAULT_INTERACTION_DISTANCE,
            while_holding: false,
            highlighted: false,
            hold: None,
            examine_rotation: Quat::IDENTITY,
            requirement: None,
            toggle: None,
            item: None,
            occupied: false,
            dock_pose: None,
            collectible: None,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            in_hand: false,
            removed: false,
            interactions: 0,
            activations: 0,
            failed_activations: 0,
            last_release: None,
        }
    }

    /// Holdable prop with the default hold profile.
    pub fn pickup(id: EntityId) -> Self {
        Self::new(id, InteractableKind::Pickup).holdable(HoldProfile::default())
    }

    /// Storable prop with the default hold profile.
    pub fn inventory_item(id: EntityId, item: ItemType) -> Self {
        Self::new(id, InteractableKind::Inventory)
            .holdable(HoldProfile::default())
            .with_item(item)
    }

    pub fn dock(id: EntityId, pose: DockPose) -> Self {
        let mut prop = Self::new(id, InteractableKind::Dock);
        prop.dock_pose = Some(pose);
        prop
    }

    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    pub fn allowing_interaction_while_holding(mut self) -> Self {
        self.while_holding = true;
        self
    }

    pub fn holdable(mut self, profile: HoldProfile) -> Self {
        self.hold = Some(profile);
        self
    }

    pub fn requiring(mut self, requirement: ActivationRequirement) -> Self {
        self.requirement = Some(requirement);
        self
    }

    /// Make `activate()` flip an on/off state.
    pub fn toggle(mut self, initially_on: bool) -> Self {
        self.toggle = Some(initially_on);
        self
    }

    pub fn with_item(mut self, item: ItemType) -> Self {
        self.item = Some(item);
        self
    }

    pub fn collectible(mut self, name: impl Into<String>) -> Self {
        self.collectible = Some(name.into());
        self
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }
}

impl Interactable for Prop {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> InteractableKind {
        self.kind
    }

    fn interaction_distance(&self) -> f32 {
        self.distance
    }

    fn allows_interaction_while_holding(&self) -> bool {
        self.while_holding
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    fn interact(&mut self) {
        self.interactions += 1;
    }

    fn activate(&mut self) {
        self.activations += 1;
        if let Some(on) = self.toggle.as_mut() {
            *on = !*on;
        }
    }

    fn fail_to_activate(&mut self) {
        self.failed_activations += 1;
    }

    fn activation_requirement(&self) -> Option<&ActivationRequirement> {
        self.requirement.as_ref()
    }

    fn is_toggled_on(&self) -> bool {
        self.toggle.unwrap_or(false)
    }

    fn hold_profile(&self) -> Option<HoldProfile> {
        self.hold
    }

    fn examine_rotation(&self) -> Quat {
        self.examine_rotation
    }

    fn set_examine_rotation(&mut self, rotation: Quat) {
        self.examine_rotation = rotation;
    }

    fn begin_hold(&mut self) {
        self.in_hand = true;
        self.removed = false;
    }

    fn end_hold(&mut self, release: HoldRelease) {
        self.in_hand = false;
        match release {
            HoldRelease::PutBack { position, rotation } => {
                self.position = position;
                self.rotation = rotation;
            }
            HoldRelease::Consumed => self.removed = true,
            HoldRelease::Toss { .. } | HoldRelease::Stored => {}
        }
        self.last_release = Some(release);
    }

    fn item_type(&self) -> Option<&ItemType> {
        self.item.as_ref()
    }

    fn on_stored(&mut self, keep_instance: bool) {
        self.in_hand = false;
        self.removed = !keep_instance;
    }

    fn is_occupied(&self) -> bool {
        self.occupied
    }

    fn set_occupied(&mut self, occupied: bool) {
        self.occupied = occupied;
    }

    fn dock_pose(&self) -> Option<DockPose> {
        self.dock_pose
    }

    fn collectible(&self) -> Option<&str> {
        self.collectible.as_deref()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_on_activate() {
        let mut lamp = Prop::new(EntityId(1), InteractableKind::Activate).toggle(false);
        lamp.activate();
        assert!(lamp.is_toggled_on());
        lamp.activate();
        assert!(!lamp.is_toggled_on());
        assert_eq!(lamp.activations, 2);
    }

    #[test]
    fn test_put_back_moves_prop() {
        let mut cup = Prop::pickup(EntityId(2));
        cup.begin_hold();
        assert!(cup.in_hand);

        let position = Vec3::new(1.0, 0.5, -2.0);
        cup.end_hold(HoldRelease::PutBack { position, rotation: Quat::IDENTITY });
        assert!(!cup.in_hand);
        assert_eq!(cup.position, position);
    }

    #[test]
    fn test_plain_prop_is_not_holdable() {
        let sign = Prop::new(EntityId(3), InteractableKind::Static);
        assert!(sign.hold_profile().is_none());
        assert!(sign.item_type().is_none());
    }
}
