//! Input Tests - Virtual Buttons, Router Edges and Aggregation
//!
//! Property tests drive the router with random hardware sequences and check
//! the edge contract against a simple level model.

use proptest::prelude::*;
use reticle_engine::input::{
    GamepadAxis, GamepadButton, InputAction, InputBindings, InputRouter, InputState, KeyCode,
    MouseButton, VirtualButton,
};

const DT: f32 = 1.0 / 60.0;

fn step(router: &mut InputRouter, raw: &mut InputState) {
    router.sample(raw, DT);
}

// ============================================================================
// VirtualButton
// ============================================================================

#[test]
fn test_virtual_button_never_pressed_has_no_edges() {
    let button = VirtualButton::new("interact");
    for now in 0..4 {
        assert!(!button.went_down(now));
        assert!(!button.went_up(now));
    }
    assert!(!button.is_down());
}

#[test]
fn test_virtual_button_repeat_restamps_only_while_held() {
    let mut button = VirtualButton::new("page_next");
    button.repeat(3);
    assert_eq!(button.last_pressed_tick(), None);

    button.pressed(3);
    button.repeat(9);
    assert!(button.went_down(10));
    assert!(button.is_down());
}

#[test]
fn test_virtual_button_pressed_is_idempotent() {
    let mut button = VirtualButton::new("zoom");
    button.pressed(2);
    button.pressed(3);
    assert_eq!(button.last_pressed_tick(), Some(2));
}

// ============================================================================
// Router
// ============================================================================

#[test]
fn test_trigger_drives_examine() {
    let mut router = InputRouter::default();
    let mut raw = InputState::new();

    raw.gamepad.set_axis(GamepadAxis::LeftTrigger, 0.8);
    step(&mut router, &mut raw);
    assert!(router.went_down(InputAction::Examine));

    raw.gamepad.set_axis(GamepadAxis::LeftTrigger, 0.1);
    step(&mut router, &mut raw);
    assert!(router.went_up(InputAction::Examine));
}

#[test]
fn test_unbound_action_never_fires() {
    let mut bindings = InputBindings::new();
    bindings.unbind_action(InputAction::Store);
    let mut router = InputRouter::new(bindings);
    let mut raw = InputState::new();

    raw.keyboard.handle_key(KeyCode::Q, true);
    raw.gamepad.set_button(GamepadButton::West, true);
    step(&mut router, &mut raw);
    assert!(!router.is_down(InputAction::Store));
    assert!(!router.went_down(InputAction::Store));
}

#[test]
fn test_flush_releases_held_button_once() {
    let mut router = InputRouter::default();
    let mut raw = InputState::new();

    raw.keyboard.handle_key(KeyCode::R, true);
    step(&mut router, &mut raw);
    step(&mut router, &mut raw);
    assert!(router.is_down(InputAction::Examine));

    router.flush();
    assert!(!router.is_down(InputAction::Examine));
    assert!(router.went_up(InputAction::Examine));

    // Hardware is still down: no new press until it is let go
    step(&mut router, &mut raw);
    assert!(!router.went_down(InputAction::Examine));
    assert!(!router.is_down(InputAction::Examine));

    raw.keyboard.handle_key(KeyCode::R, false);
    step(&mut router, &mut raw);
    raw.keyboard.handle_key(KeyCode::R, true);
    step(&mut router, &mut raw);
    assert!(router.went_down(InputAction::Examine));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// A press edge is reported exactly on the tick after an up->down
    /// transition, and a release edge exactly after down->up.
    #[test]
    fn prop_edges_follow_level_transitions(levels in prop::collection::vec(any::<bool>(), 1..64)) {
        let mut router = InputRouter::default();
        let mut raw = InputState::new();
        let mut previous = false;

        for level in levels {
            raw.keyboard.handle_key(KeyCode::E, level);
            step(&mut router, &mut raw);

            prop_assert_eq!(router.is_down(InputAction::Interact), level);
            prop_assert_eq!(router.went_down(InputAction::Interact), level && !previous);
            prop_assert_eq!(router.went_up(InputAction::Interact), !level && previous);
            prop_assert!(
                !(router.went_down(InputAction::Interact) && router.went_up(InputAction::Interact))
            );
            previous = level;
        }
    }

    /// Any bound source holding the button keeps it down; edges only fire
    /// on the aggregate transition.
    #[test]
    fn prop_aggregate_of_sources(
        levels in prop::collection::vec((any::<bool>(), any::<bool>(), any::<bool>()), 1..48)
    ) {
        let mut router = InputRouter::default();
        let mut raw = InputState::new();
        let mut previous = false;

        for (key, mouse, pad) in levels {
            raw.keyboard.handle_key(KeyCode::E, key);
            raw.mouse.set_button(MouseButton::Left, mouse);
            raw.gamepad.set_button(GamepadButton::South, pad);
            step(&mut router, &mut raw);

            let aggregate = key || mouse || pad;
            prop_assert_eq!(router.is_down(InputAction::Interact), aggregate);
            prop_assert_eq!(router.went_down(InputAction::Interact), aggregate && !previous);
            previous = aggregate;
        }
    }

    /// Reading an edge does not consume it.
    #[test]
    fn prop_queries_are_pure(readers in 1usize..8) {
        let mut router = InputRouter::default();
        let mut raw = InputState::new();
        raw.keyboard.handle_key(KeyCode::Escape, true);
        step(&mut router, &mut raw);

        for _ in 0..readers {
            prop_assert!(router.went_down(InputAction::Menu));
        }
    }
}
