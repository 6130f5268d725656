//! Entity Registry
//!
//! Owns every interactable entity and put-back slot of the loaded scene.
//! Slots share the id space with entities because both are raycast targets.

use std::collections::BTreeMap;

use crate::error::{InteractionError, Result};

use super::entity::{EntityId, Interactable, InteractableKind};
use super::slot::PutBackSlot;

#[derive(Debug, Default)]
pub struct World {
    entities: BTreeMap<EntityId, Box<dyn Interactable>>,
    slots: BTreeMap<EntityId, PutBackSlot>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity, replacing any previous one with the same id.
    pub fn insert(&mut self, entity: impl Interactable + 'static) -> EntityId {
        let id = entity.id();
        self.entities.insert(id, Box::new(entity));
        id
    }

    /// Register a put-back slot. The entity it accepts must already exist.
    pub fn insert_slot(&mut self, slot: PutBackSlot) -> Result<EntityId> {
        if !self.entities.contains_key(&slot.accepts) {
            return Err(InteractionError::UnknownEntity { id: slot.accepts });
        }
        let id = slot.id;
        self.slots.insert(id, slot);
        Ok(id)
    }

    pub fn get(&self, id: EntityId) -> Option<&dyn Interactable> {
        self.entities.get(&id).map(|e| &**e)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut (dyn Interactable + 'static)> {
        self.entities.get_mut(&id).map(|e| &mut **e)
    }

    /// Concrete view of an entity, for host code that built it.
    pub fn downcast_ref<T: 'static>(&self, id: EntityId) -> Option<&T> {
        self.get(id)?.as_any().downcast_ref::<T>()
    }

    pub fn kind(&self, id: EntityId) -> Option<InteractableKind> {
        self.get(id).map(|e| e.kind())
    }

    pub fn slot(&self, id: EntityId) -> Option<&PutBackSlot> {
        self.slots.get(&id)
    }

    pub fn slot_mut(&mut self, id: EntityId) -> Option<&mut PutBackSlot> {
        self.slots.get_mut(&id)
    }

    /// Rest the slot's accepted entity in it (scene setup and loading).
    pub fn occupy_slot(&mut self, id: EntityId) -> Result<()> {
        let slot = self
            .slots
            .get_mut(&id)
            .ok_or(InteractionError::UnknownSlot { id })?;
        slot.place(slot.accepts);
        Ok(())
    }

    /// Slot the entity currently rests in.
    pub fn slot_holding(&self, entity: EntityId) -> Option<EntityId> {
        self.slots
            .values()
            .find(|slot| slot.occupant() == Some(entity))
            .map(|slot| slot.id)
    }

    /// Empty whatever slot the entity rests in.
    pub fn vacate_slots_of(&mut self, entity: EntityId) {
        for slot in self.slots.values_mut() {
            if slot.occupant() == Some(entity) {
                slot.vacate();
            }
        }
    }

    /// Highlight an entity or a slot; unknown ids are ignored.
    pub fn set_highlighted(&mut self, id: EntityId, highlighted: bool) {
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.set_highlighted(highlighted);
        } else if let Some(slot) = self.slots.get_mut(&id) {
            slot.set_highlighted(highlighted);
        }
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id) || self.slots.contains_key(&id)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn entity_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.keys().copied()
    }

    /// Boot-time check that every mapped reference resolves.
    pub fn validate(&self) -> Result<()> {
        for slot in self.slots.values() {
            if self.entities.contains_key(&slot.id) {
                return Err(InteractionError::invalid_config(format!(
                    "slot {} shares its id with an entity",
                    slot.id
                )));
            }
            if !self.entities.contains_key(&slot.accepts) {
                return Err(InteractionError::UnknownEntity { id: slot.accepts });
            }
            if let Some(occupant) = slot.occupant() {
                if occupant != slot.accepts {
                    return Err(InteractionError::invalid_config(format!(
                        "slot {} is occupied by {occupant}, which it does not accept",
                        slot.id
                    )));
                }
            }
        }
        for (id, entity) in &self.entities {
            if entity.kind() == InteractableKind::Dock && entity.dock_pose().is_none() {
                return Err(InteractionError::NotADock { id: *id });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Prop;
    use glam::Vec3;

    #[test]
    fn test_slot_requires_known_entity() {
        let mut world = World::new();
        let slot = PutBackSlot::new(EntityId(10), EntityId(1), Vec3::ZERO);
        assert!(matches!(
            world.insert_slot(slot.clone()),
            Err(InteractionError::UnknownEntity { id: EntityId(1) })
        ));

        world.insert(Prop::pickup(EntityId(1)));
        assert!(world.insert_slot(slot).is_ok());
        assert!(world.validate().is_ok());
    }

    #[test]
    fn test_downcast_to_concrete() {
        let mut world = World::new();
        world.insert(Prop::pickup(EntityId(1)));
        let prop = world.downcast_ref::<Prop>(EntityId(1)).unwrap();
        assert_eq!(prop.interactions, 0);
        assert!(world.downcast_ref::<PutBackSlot>(EntityId(1)).is_none());
    }

    #[test]
    fn test_vacate_slots_of() {
        let mut world = World::new();
        world.insert(Prop::pickup(EntityId(1)));
        world
            .insert_slot(PutBackSlot::new(EntityId(10), EntityId(1), Vec3::ZERO).occupied())
            .unwrap();
        assert_eq!(world.slot_holding(EntityId(1)), Some(EntityId(10)));

        world.vacate_slots_of(EntityId(1));
        assert_eq!(world.slot_holding(EntityId(1)), None);
    }

    #[test]
    fn test_occupy_unknown_slot() {
        let mut world = World::new();
        assert!(matches!(
            world.occupy_slot(EntityId(99)),
            Err(InteractionError::UnknownSlot { id: EntityId(99) })
        ));
    }

    #[test]
    fn test_validate_rejects_dock_without_pose() {
        let mut world = World::new();
        world.insert(Prop::new(EntityId(4), InteractableKind::Dock));
        assert!(matches!(world.validate(), Err(InteractionError::NotADock { .. })));
    }
}
