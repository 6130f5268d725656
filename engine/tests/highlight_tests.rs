//! Highlight Tests - Policy Totality
//!
//! Every (held, looked-at) pair the state machine can produce must have a
//! rule, and a rule may only ever highlight the thing under the reticle.

use proptest::prelude::*;
use reticle_engine::game::Hint;
use reticle_engine::game::interaction::highlight::{
    HighlightDecision, HighlightQuery, LookedAt, TargetInfo, evaluate,
};
use reticle_engine::{EntityId, InteractableKind};

const HELD: [Option<InteractableKind>; 3] =
    [None, Some(InteractableKind::Pickup), Some(InteractableKind::Inventory)];

fn kind_strategy() -> impl Strategy<Value = InteractableKind> {
    prop::sample::select(InteractableKind::ALL.to_vec())
}

fn target_strategy() -> impl Strategy<Value = TargetInfo> {
    (kind_strategy(), 1u32..100, any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(kind, id, allows_while_holding, occupied, holdable)| TargetInfo {
            id: EntityId(id),
            kind,
            allows_while_holding,
            occupied,
            holdable,
        },
    )
}

// ============================================================================
// Exhaustive
// ============================================================================

#[test]
fn test_every_reachable_pair_has_a_rule() {
    for held in HELD {
        for kind in InteractableKind::ALL {
            for flags in 0..8u8 {
                let target = TargetInfo {
                    id: EntityId(5),
                    kind,
                    allows_while_holding: flags & 1 != 0,
                    occupied: flags & 2 != 0,
                    holdable: flags & 4 != 0,
                };
                let query = HighlightQuery { held, looked_at: LookedAt::Entity(target) };
                assert!(evaluate(&query).is_some(), "{query:?}");
            }
        }
        for looked_at in [LookedAt::Nothing, LookedAt::PutBack(EntityId(9))] {
            let query = HighlightQuery { held, looked_at };
            assert!(evaluate(&query).is_some(), "{query:?}");
        }
    }
}

#[test]
fn test_empty_hand_ignores_put_back_slots() {
    let query = HighlightQuery { held: None, looked_at: LookedAt::PutBack(EntityId(9)) };
    assert_eq!(evaluate(&query), Some(HighlightDecision::NONE));
}

#[test]
fn test_static_and_inventory_always_offered_while_holding() {
    for held in [InteractableKind::Pickup, InteractableKind::Inventory] {
        for (kind, hint) in [
            (InteractableKind::Static, Hint::Read),
            (InteractableKind::Inventory, Hint::Take),
        ] {
            let target = TargetInfo {
                id: EntityId(3),
                kind,
                allows_while_holding: false,
                occupied: false,
                holdable: true,
            };
            let query = HighlightQuery { held: Some(held), looked_at: LookedAt::Entity(target) };
            let decision = evaluate(&query).unwrap();
            assert_eq!(decision.highlight, Some(EntityId(3)));
            assert_eq!(decision.hint, hint);
        }
    }
}

#[test]
fn test_journal_while_holding_needs_flag() {
    let mut target = TargetInfo {
        id: EntityId(4),
        kind: InteractableKind::Journal,
        allows_while_holding: false,
        occupied: false,
        holdable: false,
    };
    let held = Some(InteractableKind::Pickup);
    let decision = evaluate(&HighlightQuery { held, looked_at: LookedAt::Entity(target) });
    assert_eq!(decision, Some(HighlightDecision::NONE));

    target.allows_while_holding = true;
    let decision =
        evaluate(&HighlightQuery { held, looked_at: LookedAt::Entity(target) }).unwrap();
    assert_eq!(decision.hint, Hint::Open);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_highlight_is_only_the_target(held_index in 0usize..3, target in target_strategy()) {
        let query = HighlightQuery { held: HELD[held_index], looked_at: LookedAt::Entity(target) };
        let decision = evaluate(&query).unwrap();
        prop_assert!(decision.highlight.is_none() || decision.highlight == Some(target.id));
        // A highlight always comes with a prompt, and vice versa for entities
        prop_assert_eq!(decision.highlight.is_some(), decision.hint != Hint::None);
    }

    #[test]
    fn prop_occupied_dock_never_offered(held_index in 0usize..3, target in target_strategy()) {
        let target = TargetInfo { kind: InteractableKind::Dock, occupied: true, ..target };
        let query = HighlightQuery { held: HELD[held_index], looked_at: LookedAt::Entity(target) };
        prop_assert_eq!(evaluate(&query), Some(HighlightDecision::NONE));
    }

    #[test]
    fn prop_holding_with_nothing_in_view_offers_toss(held_index in 1usize..3) {
        let query = HighlightQuery { held: HELD[held_index], looked_at: LookedAt::Nothing };
        let decision = evaluate(&query).unwrap();
        prop_assert_eq!(decision.highlight, None);
        prop_assert_eq!(decision.hint, Hint::Toss);
    }
}
