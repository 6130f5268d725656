//! Highlight Policy
//!
//! Decides, from what is held and what is under the reticle, which entity
//! glows and which prompt the HUD shows. This table is the player-visible
//! answer to "what can I do right now", so it is kept as one pure function.
//!
//! | held \ looking at | nothing | put-back | static | pickup | activate | journal | inventory | dock | diary |
//! |---|---|---|---|---|---|---|---|---|---|
//! | nothing | - | - | Read | PickUp* | Use | Open | Take | Dock† | Listen |
//! | pickup / inventory | Toss | PutBack | Read | Use‡ | Use‡ | Open‡ | Take | Dock†‡ | Listen‡ |
//!
//! \* only with a hold profile; † only when unoccupied; ‡ only when the target
//! allows interaction while holding.

use crate::game::hud::Hint;
use crate::world::{EntityId, InteractableKind};

/// Flags of the entity under the reticle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetInfo {
    pub id: EntityId,
    pub kind: InteractableKind,
    pub allows_while_holding: bool,
    pub occupied: bool,
    pub holdable: bool,
}

/// Classification of the reticle for the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookedAt {
    Nothing,
    PutBack(EntityId),
    Entity(TargetInfo),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightQuery {
    pub held: Option<InteractableKind>,
    pub looked_at: LookedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighlightDecision {
    /// Entity or slot to highlight
    pub highlight: Option<EntityId>,
    pub hint: Hint,
}

impl HighlightDecision {
    pub const NONE: HighlightDecision = HighlightDecision { highlight: None, hint: Hint::None };

    fn on(id: EntityId, hint: Hint) -> Self {
        Self { highlight: Some(id), hint }
    }

    fn hint_only(hint: Hint) -> Self {
        Self { highlight: None, hint }
    }
}

/// Evaluate the table. `None` means the combination has no rule (a held
/// kind that cannot be held); callers log it and show nothing.
pub fn evaluate(query: &HighlightQuery) -> Option<HighlightDecision> {
    match query.held {
        None => Some(empty_handed(query.looked_at)),
        Some(held) if held.is_holdable() => Some(holding(query.looked_at)),
        Some(_) => None,
    }
}

fn empty_handed(looked_at: LookedAt) -> HighlightDecision {
    let target = match looked_at {
        LookedAt::Nothing | LookedAt::PutBack(_) => return HighlightDecision::NONE,
        LookedAt::Entity(target) => target,
    };

    match target.kind {
        InteractableKind::Static => HighlightDecision::on(target.id, Hint::Read),
        InteractableKind::Pickup if target.holdable => {
            HighlightDecision::on(target.id, Hint::PickUp)
        }
        InteractableKind::Pickup => HighlightDecision::NONE,
        InteractableKind::Activate => HighlightDecision::on(target.id, Hint::Use),
        InteractableKind::Journal => HighlightDecision::on(target.id, Hint::Open),
        InteractableKind::Inventory => HighlightDecision::on(target.id, Hint::Take),
        InteractableKind::Dock if !target.occupied => HighlightDecision::on(target.id, Hint::Dock),
        InteractableKind::Dock => HighlightDecision::NONE,
        InteractableKind::AudioDiary => HighlightDecision::on(target.id, Hint::Listen),
    }
}

fn holding(looked_at: LookedAt) -> HighlightDecision {
    let target = match looked_at {
        LookedAt::Nothing => return HighlightDecision::hint_only(Hint::Toss),
        LookedAt::PutBack(slot) => return HighlightDecision::on(slot, Hint::PutBack),
        LookedAt::Entity(target) => target,
    };

    match target.kind {
        InteractableKind::Static => HighlightDecision::on(target.id, Hint::Read),
        InteractableKind::Inventory => HighlightDecision::on(target.id, Hint::Take),
        _ if !target.allows_while_holding => HighlightDecision::NONE,
        InteractableKind::Pickup | InteractableKind::Activate => {
            HighlightDecision::on(target.id, Hint::Use)
        }
        InteractableKind::Journal => HighlightDecision::on(target.id, Hint::Open),
        InteractableKind::Dock if !target.occupied => HighlightDecision::on(target.id, Hint::Dock),
        InteractableKind::Dock => HighlightDecision::NONE,
        InteractableKind::AudioDiary => HighlightDecision::on(target.id, Hint::Listen),
    }
}
