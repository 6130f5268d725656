//! Interact and Store dispatch: picking up, putting back, tossing, reading,
//! activating, journals, diaries and storing into the inventory.

use crate::camera::LookTarget;
use crate::game::hud::Hint;
use crate::inventory::StoredItem;
use crate::player::PlayerMotion;
use crate::world::{EntityId, HoldRelease, InteractableKind, World};

use super::machine::{Collaborators, HeldEntity, InteractionStateMachine};
use super::mode::InteractionMode;

impl InteractionStateMachine {
    /// INTERACT edge in FREE mode, not examining.
    pub(super) fn dispatch_interact(&mut self, ctx: &mut Collaborators<'_>) {
        match (self.held, self.looked_at) {
            (Some(held), LookTarget::PutBackSlot(slot)) => self.put_back(held, slot, ctx),
            (Some(_), LookTarget::Interactable { id, kind, .. }) => {
                let allowed = ctx
                    .world
                    .get(id)
                    .is_some_and(|e| e.allows_interaction_while_holding());
                if allowed {
                    self.interact_with(id, kind, ctx);
                } else if kind == InteractableKind::Static {
                    read(id, ctx.world);
                } else {
                    log::debug!("{} {} refused while holding", kind.name(), id);
                }
            }
            (Some(held), LookTarget::None) => self.toss(held, ctx),
            (None, LookTarget::Interactable { id, kind, .. }) => self.interact_with(id, kind, ctx),
            (None, LookTarget::PutBackSlot(_) | LookTarget::None) => {}
        }
    }

    fn interact_with(&mut self, id: EntityId, kind: InteractableKind, ctx: &mut Collaborators<'_>) {
        match kind {
            InteractableKind::Static => read(id, ctx.world),
            InteractableKind::Pickup | InteractableKind::Inventory => {
                if self.held.is_some() {
                    if let Some(entity) = ctx.world.get_mut(id) {
                        entity.interact();
                    }
                } else {
                    self.pick_up(id, kind, false, ctx);
                }
            }
            InteractableKind::Activate => self.activate(id, ctx),
            InteractableKind::Journal => self.open_journal(id, ctx),
            InteractableKind::Dock => self.begin_dock(id, ctx),
            InteractableKind::AudioDiary => self.play_diary(id, ctx),
        }
    }

    // ------------------------------------------------------------------
    // Holding
    // ------------------------------------------------------------------

    /// Put `id` in the hand. Fails without a hold profile.
    pub(super) fn pick_up(
        &mut self,
        id: EntityId,
        kind: InteractableKind,
        from_inventory: bool,
        ctx: &mut Collaborators<'_>,
    ) -> bool {
        let Some(profile) = ctx.world.get(id).and_then(|e| e.hold_profile()) else {
            log::warn!("{} {} has no hold profile", kind.name(), id);
            return false;
        };

        self.apply_highlight(None, ctx.world);
        ctx.world.vacate_slots_of(id);
        if let Some(entity) = ctx.world.get_mut(id) {
            entity.set_highlighted(false);
            entity.begin_hold();
        }

        self.held = Some(HeldEntity { id, kind, profile, from_inventory });
        self.looked_at = LookTarget::None;
        self.hint = Hint::None;
        self.set_zoomed(false, ctx.motion);
        log::debug!("holding {} {}", kind.name(), id);
        true
    }

    /// Take an item out of the inventory into the hand.
    pub fn hold_from_inventory(&mut self, id: EntityId, ctx: &mut Collaborators<'_>) -> bool {
        if self.mode != InteractionMode::Free
            || self.held.is_some()
            || self.examining
            || self.journal_open.is_some()
            || self.is_docking()
        {
            log::debug!("cannot hold {} right now", id);
            return false;
        }
        let Some(kind) = ctx.world.kind(id) else {
            log::warn!("hold from inventory: unknown entity {}", id);
            return false;
        };
        let holdable =
            kind.is_holdable() && ctx.world.get(id).is_some_and(|e| e.hold_profile().is_some());
        if !holdable {
            log::warn!("{} {} cannot be held", kind.name(), id);
            return false;
        }
        if !ctx.inventory.hold_item(id) {
            log::debug!("{} is not in the inventory", id);
            return false;
        }
        self.pick_up(id, kind, true, ctx)
    }

    fn put_back(&mut self, held: HeldEntity, slot_id: EntityId, ctx: &mut Collaborators<'_>) {
        let Some(slot) = ctx.world.slot(slot_id) else {
            log::warn!("put back into unknown slot {}", slot_id);
            return;
        };
        let (position, rotation) = (slot.position, slot.rotation);

        if let Some(entity) = ctx.world.get_mut(held.id) {
            entity.end_hold(HoldRelease::PutBack { position, rotation });
        }
        if let Some(slot) = ctx.world.slot_mut(slot_id) {
            slot.place(held.id);
        }
        if held.from_inventory {
            ctx.inventory.drop_item(held.id);
        }
        self.clear_hand(ctx.world);
        log::debug!("put {} back into {}", held.id, slot_id);
    }

    fn toss(&mut self, held: HeldEntity, ctx: &mut Collaborators<'_>) {
        let impulse = ctx.motion.view_forward() * held.profile.toss_strength;
        if let Some(entity) = ctx.world.get_mut(held.id) {
            entity.end_hold(HoldRelease::Toss { impulse });
        }
        if held.from_inventory {
            ctx.inventory.drop_item(held.id);
        }
        self.clear_hand(ctx.world);
        log::debug!("tossed {}", held.id);
    }

    /// Empty the hand and drop whatever the reticle was on.
    fn clear_hand(&mut self, world: &mut World) {
        self.apply_highlight(None, world);
        self.held = None;
        self.looked_at = LookTarget::None;
        self.hint = Hint::None;
    }

    // ------------------------------------------------------------------
    // Activation
    // ------------------------------------------------------------------

    fn activate(&mut self, id: EntityId, ctx: &mut Collaborators<'_>) {
        let Some(entity) = ctx.world.get(id) else {
            return;
        };
        let requirement = entity
            .activation_requirement()
            .filter(|r| r.applies(entity.is_toggled_on()))
            .cloned();

        let Some(requirement) = requirement else {
            if let Some(entity) = ctx.world.get_mut(id) {
                entity.activate();
            }
            return;
        };

        let source = self.config.activation_source;
        let in_hand = source.allows_hand()
            && self.held.is_some_and(|held| {
                ctx.world.get(held.id).and_then(|e| e.item_type()) == Some(&requirement.item)
            });

        if in_hand {
            if requirement.consume {
                self.consume_held(ctx);
            }
        } else if source.allows_inventory()
            && ctx.inventory.quantity_of(&requirement.item) >= requirement.quantity
        {
            if requirement.consume {
                ctx.inventory
                    .destroy_items_of_type(&requirement.item, requirement.quantity);
            }
        } else {
            log::debug!(
                "{} needs {} x{}",
                id,
                requirement.item,
                requirement.quantity
            );
            if let Some(entity) = ctx.world.get_mut(id) {
                entity.fail_to_activate();
            }
            return;
        }

        if let Some(entity) = ctx.world.get_mut(id) {
            entity.activate();
        }
    }

    fn consume_held(&mut self, ctx: &mut Collaborators<'_>) {
        let Some(held) = self.held else {
            return;
        };
        if let Some(entity) = ctx.world.get_mut(held.id) {
            entity.end_hold(HoldRelease::Consumed);
        }
        if held.from_inventory {
            ctx.inventory.consume_item(held.id);
        }
        self.clear_hand(ctx.world);
        log::debug!("consumed {}", held.id);
    }

    // ------------------------------------------------------------------
    // Journals and diaries
    // ------------------------------------------------------------------

    fn open_journal(&mut self, id: EntityId, ctx: &mut Collaborators<'_>) {
        if let Some(entity) = ctx.world.get_mut(id) {
            entity.interact();
        }
        self.apply_highlight(None, ctx.world);
        self.hint = Hint::None;
        self.set_zoomed(false, ctx.motion);
        ctx.motion.disable_movement();
        ctx.motion.disable_look();
        self.journal_open = Some(id);
        self.collect(id, ctx.world);
        self.refresh_requested = true;
        log::debug!("reading journal {}", id);
    }

    pub(super) fn close_journal(&mut self, motion: &mut dyn PlayerMotion) {
        let Some(id) = self.journal_open.take() else {
            return;
        };
        if self.docked_at.is_none() {
            motion.enable_movement();
        }
        motion.enable_look();
        self.refresh_requested = true;
        log::debug!("closed journal {}", id);
    }

    fn play_diary(&mut self, id: EntityId, ctx: &mut Collaborators<'_>) {
        if ctx.audio.playing_diary() == Some(id) && !self.diary_fade.is_active() {
            log::debug!("diary {} already playing", id);
            return;
        }
        self.diary_fade.cancel();
        ctx.audio.play_diary(id);
        if let Some(entity) = ctx.world.get_mut(id) {
            entity.interact();
        }
        self.collect(id, ctx.world);
        self.refresh_requested = true;
    }

    /// Record the entity's collectible, once.
    pub(super) fn collect(&mut self, id: EntityId, world: &World) {
        let Some(name) = world.get(id).and_then(|e| e.collectible()) else {
            return;
        };
        if self.collected.insert(name.to_owned()) {
            log::info!("collected {name} ({} total)", self.collected.len());
        }
    }

    // ------------------------------------------------------------------
    // Store
    // ------------------------------------------------------------------

    /// STORE edge in FREE mode, not examining.
    pub(super) fn dispatch_store(&mut self, ctx: &mut Collaborators<'_>) {
        match (self.held, self.looked_at) {
            (_, LookTarget::Interactable { id, kind: InteractableKind::Inventory, .. }) => {
                self.store_from_world(id, ctx);
            }
            (Some(held), _) if held.kind == InteractableKind::Inventory => {
                self.store_held(held, ctx);
            }
            _ => {}
        }
    }

    fn store_from_world(&mut self, id: EntityId, ctx: &mut Collaborators<'_>) {
        let Some(item_type) = ctx.world.get(id).and_then(|e| e.item_type().cloned()) else {
            log::warn!("inventory entity {} has no item type", id);
            return;
        };

        self.apply_highlight(None, ctx.world);
        ctx.world.vacate_slots_of(id);
        let keep = ctx.inventory.add_item(StoredItem { entity: id, item_type });
        if let Some(entity) = ctx.world.get_mut(id) {
            entity.set_highlighted(false);
            entity.on_stored(keep);
        }
        self.looked_at = LookTarget::None;
        self.hint = Hint::None;
        log::debug!("stored {}", id);
    }

    fn store_held(&mut self, held: HeldEntity, ctx: &mut Collaborators<'_>) {
        let Some(item_type) = ctx.world.get(held.id).and_then(|e| e.item_type().cloned()) else {
            log::warn!("held inventory entity {} has no item type", held.id);
            return;
        };

        if let Some(entity) = ctx.world.get_mut(held.id) {
            entity.end_hold(HoldRelease::Stored);
        }
        let keep = ctx.inventory.add_item(StoredItem { entity: held.id, item_type });
        if let Some(entity) = ctx.world.get_mut(held.id) {
            entity.on_stored(keep);
        }
        self.clear_hand(ctx.world);
        log::debug!("stored held {}", held.id);
    }
}

fn read(id: EntityId, world: &mut World) {
    if let Some(entity) = world.get_mut(id) {
        entity.interact();
    }
    log::debug!("read {}", id);
}
