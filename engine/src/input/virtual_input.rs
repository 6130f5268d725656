//! Virtual Input Primitives
//!
//! Frame-stamped logical buttons and axes. Edges are derived by comparing a
//! stored stamp against the tick counter at query time, so any number of
//! readers can poll the same press during one tick without consuming it.
//!
//! # Timing
//!
//! The router stamps presses with the tick in which it samples hardware and
//! then advances its counter. Readers query with the advanced counter, so a
//! press is visible as an edge for exactly one tick:
//!
//! ```text
//! sample (stamp = 7) -> now = 8: went_down == true
//! sample             -> now = 9: went_down == false
//! ```

use std::fmt;

/// Monotonic simulation tick counter.
pub type Tick = u64;

/// Returns true when `stamp` lies exactly one tick behind `now`.
#[inline]
fn is_edge(now: Tick, stamp: Option<Tick>) -> bool {
    match stamp {
        Some(stamp) => now.checked_sub(stamp) == Some(1),
        None => false,
    }
}

/// A logical button with level state and tick-stamped edges.
///
/// Created once per logical input at startup and only mutated by the
/// input router during its sampling phase.
#[derive(Clone, PartialEq, Eq)]
pub struct VirtualButton {
    id: &'static str,
    last_pressed_tick: Option<Tick>,
    last_released_tick: Option<Tick>,
    is_down: bool,
}

impl VirtualButton {
    /// Create a released button that has never produced an edge.
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            last_pressed_tick: None,
            last_released_tick: None,
            is_down: false,
        }
    }

    /// Logical name of this button.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Mark the button as held. Idempotent while already down: the press
    /// stamp is only recorded on the transition.
    pub fn pressed(&mut self, stamp: Tick) {
        if !self.is_down {
            self.is_down = true;
            self.last_pressed_tick = Some(stamp);
        }
    }

    /// Mark the button as released and record the release stamp.
    pub fn released(&mut self, stamp: Tick) {
        self.is_down = false;
        self.last_released_tick = Some(stamp);
    }

    /// Re-stamp the press edge of a held button without releasing it.
    ///
    /// Used by auto-repeat sources. Does nothing while the button is up.
    pub fn repeat(&mut self, stamp: Tick) {
        if self.is_down {
            self.last_pressed_tick = Some(stamp);
        }
    }

    /// Force the button up, stamping the release so it is visible to
    /// readers of the tick in which the flush happens.
    pub fn flush(&mut self, stamp: Tick) {
        self.is_down = false;
        self.last_released_tick = Some(stamp);
    }

    /// Level signal.
    #[inline]
    pub fn is_down(&self) -> bool {
        self.is_down
    }

    /// True for exactly one tick after the press was stamped.
    #[inline]
    pub fn went_down(&self, now: Tick) -> bool {
        is_edge(now, self.last_pressed_tick)
    }

    /// True for exactly one tick after the release was stamped.
    #[inline]
    pub fn went_up(&self, now: Tick) -> bool {
        is_edge(now, self.last_released_tick)
    }

    pub fn last_pressed_tick(&self) -> Option<Tick> {
        self.last_pressed_tick
    }

    pub fn last_released_tick(&self) -> Option<Tick> {
        self.last_released_tick
    }
}

impl fmt::Debug for VirtualButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualButton")
            .field("id", &self.id)
            .field("down", &self.is_down)
            .field("pressed@", &self.last_pressed_tick)
            .field("released@", &self.last_released_tick)
            .finish()
    }
}

/// A logical analog axis. Holds the last sampled value, no history.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualAxis {
    id: &'static str,
    value: f32,
}

impl VirtualAxis {
    pub fn new(id: &'static str) -> Self {
        Self { id, value: 0.0 }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Overwrite the sampled value.
    #[inline]
    pub fn update(&mut self, value: f32) {
        self.value = value;
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_button_has_no_edges() {
        let button = VirtualButton::new("interact");
        assert!(!button.is_down());
        for now in 0..4 {
            assert!(!button.went_down(now));
            assert!(!button.went_up(now));
        }
    }

    #[test]
    fn test_press_edge_visible_for_one_tick() {
        let mut button = VirtualButton::new("interact");
        button.pressed(10);

        assert!(!button.went_down(10));
        assert!(button.went_down(11));
        assert!(!button.went_down(12));
        assert!(button.is_down());
    }

    #[test]
    fn test_press_is_idempotent_while_held() {
        let mut button = VirtualButton::new("interact");
        button.pressed(3);
        button.pressed(4);
        button.pressed(5);
        assert_eq!(button.last_pressed_tick(), Some(3));
    }

    #[test]
    fn test_release_always_restamps() {
        let mut button = VirtualButton::new("interact");
        button.released(2);
        button.released(6);
        assert_eq!(button.last_released_tick(), Some(6));
        assert!(button.went_up(7));
    }

    #[test]
    fn test_flush_clears_level_and_reports_release() {
        let mut button = VirtualButton::new("zoom");
        button.pressed(1);
        button.flush(4);
        assert!(!button.is_down());
        assert!(button.went_up(5));
        assert!(!button.went_up(6));
    }

    #[test]
    fn test_repeat_only_while_down() {
        let mut button = VirtualButton::new("page_next");
        button.repeat(2);
        assert_eq!(button.last_pressed_tick(), None);

        button.pressed(3);
        button.repeat(8);
        assert!(button.went_down(9));
        assert!(button.is_down());
    }

    #[test]
    fn test_axis_overwrites() {
        let mut axis = VirtualAxis::new("look_x");
        axis.update(0.5);
        axis.update(-0.25);
        assert_eq!(axis.value(), -0.25);
    }
}
