//! Put-back slots: resting places that accept one specific entity.

use glam::{Quat, Vec3};

use super::entity::EntityId;
use super::prop::DEFAULT_INTERACTION_DISTANCE;

#[derive(Debug, Clone)]
pub struct PutBackSlot {
    pub id: EntityId,
    /// The only entity this slot takes
    pub accepts: EntityId,
    pub position: Vec3,
    pub rotation: Quat,
    pub interaction_distance: f32,
    occupant: Option<EntityId>,
    highlighted: bool,
}

impl PutBackSlot {
    pub fn new(id: EntityId, accepts: EntityId, position: Vec3) -> Self {
        Self {
            id,
            accepts,
            position,
            rotation: Quat::IDENTITY,
            interaction_distance: DEFAULT_INTERACTION_DISTANCE,
            occupant: None,
            highlighted: false,
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Start with the accepted entity already resting here.
    pub fn occupied(mut self) -> Self {
        self.occupant = Some(self.accepts);
        self
    }

    /// Whether `entity` can be put back here right now.
    pub fn can_accept(&self, entity: EntityId) -> bool {
        self.accepts == entity && self.occupant.is_none()
    }

    pub fn occupant(&self) -> Option<EntityId> {
        self.occupant
    }

    pub fn place(&mut self, entity: EntityId) {
        self.occupant = Some(entity);
    }

    pub fn vacate(&mut self) {
        self.occupant = None;
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}
