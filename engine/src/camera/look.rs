//! World Look Resolution
//!
//! Classifies what the reticle is on each tick. Two range checks apply: the
//! spatial query is capped at a global distance, and each entity then applies
//! its own (usually shorter) interaction distance, so small objects are only
//! grabbable up close while scenery reads from farther away.

use std::ops::BitOr;

use serde::{Deserialize, Serialize};

use crate::world::{EntityId, InteractableKind, World};

/// Bitmask of collision layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    pub const INTERACTABLE: LayerMask = LayerMask(1 << 0);
    pub const PUT_BACK: LayerMask = LayerMask(1 << 1);
    pub const SCENERY: LayerMask = LayerMask(1 << 2);
    /// Held objects live here so they never block the reticle
    pub const HELD: LayerMask = LayerMask(1 << 3);

    pub const fn layer(index: u32) -> LayerMask {
        LayerMask(1 << index)
    }

    pub fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for LayerMask {
    type Output = LayerMask;

    fn bitor(self, rhs: LayerMask) -> LayerMask {
        LayerMask(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: EntityId,
    pub distance: f32,
}

/// Forward ray query from the player's view, answered by the physics host.
pub trait SpatialQuery {
    /// Nearest hit along the view ray within `max_distance` on `mask`.
    fn raycast_forward(&self, max_distance: f32, mask: LayerMask) -> Option<RayHit>;
}

/// What the reticle is on this tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LookTarget {
    #[default]
    None,
    Interactable {
        id: EntityId,
        kind: InteractableKind,
        distance: f32,
    },
    PutBackSlot(EntityId),
}

impl LookTarget {
    pub fn is_none(&self) -> bool {
        matches!(self, LookTarget::None)
    }

    pub fn interactable(&self) -> Option<(EntityId, InteractableKind)> {
        match *self {
            LookTarget::Interactable { id, kind, .. } => Some((id, kind)),
            _ => None,
        }
    }

    pub fn put_back_slot(&self) -> Option<EntityId> {
        match *self {
            LookTarget::PutBackSlot(id) => Some(id),
            _ => None,
        }
    }

    /// Entity or slot id under the reticle.
    pub fn id(&self) -> Option<EntityId> {
        match *self {
            LookTarget::None => None,
            LookTarget::Interactable { id, .. } | LookTarget::PutBackSlot(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WorldLookResolver {
    max_distance: f32,
    interactable_layers: LayerMask,
    put_back_layers: LayerMask,
}

impl Default for WorldLookResolver {
    fn default() -> Self {
        Self::new(3.0, LayerMask::INTERACTABLE, LayerMask::PUT_BACK)
    }
}

impl WorldLookResolver {
    pub fn new(max_distance: f32, interactable_layers: LayerMask, put_back_layers: LayerMask) -> Self {
        Self {
            max_distance,
            interactable_layers,
            put_back_layers,
        }
    }

    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Resolve the look target.
    ///
    /// A put-back slot wins when `held` is set and the slot takes it and is
    /// empty; otherwise the interactable layer is queried. Hits on the held
    /// entity itself, on unregistered ids, or past the entity's own
    /// interaction distance resolve to `None`.
    pub fn resolve(
        &self,
        query: &dyn SpatialQuery,
        world: &World,
        held: Option<EntityId>,
    ) -> LookTarget {
        if let Some(held) = held {
            if let Some(hit) = query.raycast_forward(self.max_distance, self.put_back_layers) {
                if let Some(slot) = world.slot(hit.entity) {
                    if slot.can_accept(held) && hit.distance <= slot.interaction_distance {
                        return LookTarget::PutBackSlot(slot.id);
                    }
                }
            }
        }

        let Some(hit) = query.raycast_forward(self.max_distance, self.interactable_layers) else {
            return LookTarget::None;
        };
        if Some(hit.entity) == held {
            return LookTarget::None;
        }
        let Some(entity) = world.get(hit.entity) else {
            return LookTarget::None;
        };
        if hit.distance > entity.interaction_distance() {
            return LookTarget::None;
        }

        LookTarget::Interactable {
            id: hit.entity,
            kind: entity.kind(),
            distance: hit.distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Prop, PutBackSlot};
    use glam::Vec3;

    /// Answers every query on a layer with a fixed hit.
    struct FixedHits(Vec<(LayerMask, RayHit)>);

    impl SpatialQuery for FixedHits {
        fn raycast_forward(&self, max_distance: f32, mask: LayerMask) -> Option<RayHit> {
            self.0
                .iter()
                .filter(|(layer, hit)| layer.intersects(mask) && hit.distance <= max_distance)
                .map(|(_, hit)| *hit)
                .next()
        }
    }

    fn hit(id: u32, distance: f32) -> RayHit {
        RayHit { entity: EntityId(id), distance }
    }

    #[test]
    fn test_per_entity_distance_cutoff() {
        let mut world = World::new();
        world.insert(Prop::pickup(EntityId(1)).with_distance(1.0));
        world.insert(Prop::new(EntityId(2), InteractableKind::Static).with_distance(5.0));
        let resolver = WorldLookResolver::new(6.0, LayerMask::INTERACTABLE, LayerMask::PUT_BACK);

        let far_cup = FixedHits(vec![(LayerMask::INTERACTABLE, hit(1, 2.0))]);
        assert_eq!(resolver.resolve(&far_cup, &world, None), LookTarget::None);

        let far_sign = FixedHits(vec![(LayerMask::INTERACTABLE, hit(2, 4.0))]);
        assert_eq!(
            resolver.resolve(&far_sign, &world, None).interactable(),
            Some((EntityId(2), InteractableKind::Static))
        );
    }

    #[test]
    fn test_global_cutoff() {
        let mut world = World::new();
        world.insert(Prop::new(EntityId(2), InteractableKind::Static).with_distance(50.0));
        let resolver = WorldLookResolver::new(3.0, LayerMask::INTERACTABLE, LayerMask::PUT_BACK);
        let query = FixedHits(vec![(LayerMask::INTERACTABLE, hit(2, 10.0))]);
        assert!(resolver.resolve(&query, &world, None).is_none());
    }

    #[test]
    fn test_put_back_slot_needs_matching_held_entity() {
        let mut world = World::new();
        world.insert(Prop::pickup(EntityId(1)));
        world.insert(Prop::pickup(EntityId(3)));
        world
            .insert_slot(PutBackSlot::new(EntityId(10), EntityId(1), Vec3::ZERO))
            .unwrap();
        let resolver = WorldLookResolver::default();
        let query = FixedHits(vec![
            (LayerMask::PUT_BACK, hit(10, 1.0)),
            (LayerMask::INTERACTABLE, hit(3, 1.5)),
        ]);

        assert_eq!(
            resolver.resolve(&query, &world, Some(EntityId(1))),
            LookTarget::PutBackSlot(EntityId(10))
        );
        // Wrong entity in hand: fall through to the interactable layer
        assert_eq!(
            resolver.resolve(&query, &world, Some(EntityId(3))),
            LookTarget::None
        );
        // Nothing held: slots are never targets
        assert_eq!(
            resolver.resolve(&query, &world, None).interactable(),
            Some((EntityId(3), InteractableKind::Pickup))
        );
    }

    #[test]
    fn test_layer_mask_ops() {
        let mask = LayerMask::INTERACTABLE | LayerMask::SCENERY;
        assert!(mask.intersects(LayerMask::SCENERY));
        assert!(!mask.intersects(LayerMask::PUT_BACK));
        assert_eq!(LayerMask::layer(1), LayerMask::PUT_BACK);
        assert!(LayerMask::NONE.is_empty());
    }
}
