//! Inventory Module
//!
//! The storage contract the interaction layer talks to, and [`Ledger`], an
//! in-memory implementation that counts stored items per type.

pub mod ledger;

pub use ledger::Ledger;

use crate::world::{EntityId, ItemType};

/// One stored world object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredItem {
    pub entity: EntityId,
    pub item_type: ItemType,
}

/// Inventory storage collaborator.
pub trait Inventory {
    /// Store an item. Returns whether the physical instance stays in the
    /// world (hidden) rather than being discarded.
    fn add_item(&mut self, item: StoredItem) -> bool;

    /// Stored count of a type. Items taken into the hand are not counted.
    fn quantity_of(&self, item_type: &ItemType) -> u32;

    fn destroy_items_of_type(&mut self, item_type: &ItemType, count: u32);

    /// The item left the player (tossed or put back into the world).
    fn drop_item(&mut self, entity: EntityId);

    /// Move a stored item into the hand. Returns false if it is not stored.
    fn hold_item(&mut self, entity: EntityId) -> bool;

    /// The item was used up.
    fn consume_item(&mut self, entity: EntityId);
}
