//! In-memory inventory ledger.

use std::collections::BTreeMap;

use super::{Inventory, StoredItem};
use crate::world::{EntityId, ItemType};

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Stored items per type, oldest first
    stored: BTreeMap<ItemType, Vec<EntityId>>,
    /// Item currently taken out into the hand
    in_hand: Option<StoredItem>,
    /// Whether stored items keep their world instance
    keep_instances: bool,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored items keep their (hidden) world instance so they can be taken
    /// back out into the hand.
    pub fn keeping_instances() -> Self {
        Self {
            keep_instances: true,
            ..Self::default()
        }
    }

    /// Pre-stock items of a type (scene setup and tests).
    pub fn stock(&mut self, item_type: ItemType, entities: impl IntoIterator<Item = EntityId>) {
        self.stored.entry(item_type).or_default().extend(entities);
    }

    pub fn in_hand(&self) -> Option<&StoredItem> {
        self.in_hand.as_ref()
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.stored.values().any(|ids| ids.contains(&entity))
    }

    pub fn total(&self) -> usize {
        self.stored.values().map(Vec::len).sum()
    }

    fn take_stored(&mut self, entity: EntityId) -> Option<StoredItem> {
        for (item_type, ids) in self.stored.iter_mut() {
            if let Some(pos) = ids.iter().position(|id| *id == entity) {
                ids.remove(pos);
                return Some(StoredItem { entity, item_type: item_type.clone() });
            }
        }
        None
    }
}

impl Inventory for Ledger {
    fn add_item(&mut self, item: StoredItem) -> bool {
        if self.in_hand.as_ref().is_some_and(|held| held.entity == item.entity) {
            self.in_hand = None;
        }
        let ids = self.stored.entry(item.item_type).or_default();
        if !ids.contains(&item.entity) {
            ids.push(item.entity);
        }
        self.keep_instances
    }

    fn quantity_of(&self, item_type: &ItemType) -> u32 {
        self.stored.get(item_type).map_or(0, |ids| ids.len() as u32)
    }

    fn destroy_items_of_type(&mut self, item_type: &ItemType, count: u32) {
        if let Some(ids) = self.stored.get_mut(item_type) {
            let n = (count as usize).min(ids.len());
            ids.drain(..n);
        }
    }

    fn drop_item(&mut self, entity: EntityId) {
        if self.in_hand.as_ref().is_some_and(|held| held.entity == entity) {
            self.in_hand = None;
        } else {
            self.take_stored(entity);
        }
    }

    fn hold_item(&mut self, entity: EntityId) -> bool {
        match self.take_stored(entity) {
            Some(item) => {
                self.in_hand = Some(item);
                true
            }
            None => false,
        }
    }

    fn consume_item(&mut self, entity: EntityId) {
        self.drop_item(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ItemType {
        ItemType::new("brass_key")
    }

    #[test]
    fn test_add_and_count() {
        let mut ledger = Ledger::new();
        assert!(!ledger.add_item(StoredItem { entity: EntityId(1), item_type: key() }));
        ledger.add_item(StoredItem { entity: EntityId(2), item_type: key() });
        // Storing the same entity twice does not double count
        ledger.add_item(StoredItem { entity: EntityId(2), item_type: key() });
        assert_eq!(ledger.quantity_of(&key()), 2);
        assert_eq!(ledger.quantity_of(&ItemType::new("fuse")), 0);
    }

    #[test]
    fn test_destroy_is_bounded() {
        let mut ledger = Ledger::new();
        ledger.stock(key(), [EntityId(1), EntityId(2)]);
        ledger.destroy_items_of_type(&key(), 5);
        assert_eq!(ledger.quantity_of(&key()), 0);
    }

    #[test]
    fn test_hold_moves_item_out_of_storage() {
        let mut ledger = Ledger::keeping_instances();
        ledger.stock(key(), [EntityId(1)]);

        assert!(ledger.hold_item(EntityId(1)));
        assert_eq!(ledger.quantity_of(&key()), 0);
        assert_eq!(ledger.in_hand().map(|i| i.entity), Some(EntityId(1)));
        assert!(!ledger.hold_item(EntityId(1)));

        // Stored again from the hand
        assert!(ledger.add_item(StoredItem { entity: EntityId(1), item_type: key() }));
        assert!(ledger.in_hand().is_none());
        assert_eq!(ledger.quantity_of(&key()), 1);
    }

    #[test]
    fn test_drop_and_consume_from_hand() {
        let mut ledger = Ledger::new();
        ledger.stock(key(), [EntityId(1), EntityId(2)]);
        ledger.hold_item(EntityId(1));
        ledger.consume_item(EntityId(1));
        assert!(ledger.in_hand().is_none());
        assert_eq!(ledger.quantity_of(&key()), 1);

        ledger.hold_item(EntityId(2));
        ledger.drop_item(EntityId(2));
        assert_eq!(ledger.total(), 0);
    }
}
