//! Input Router
//!
//! Owns the logical [`VirtualButton`]s and [`VirtualAxis`]es and refreshes
//! them from the raw hardware channels exactly once per tick. Everything
//! downstream reads the router and never the raw channels, so all readers of
//! one tick observe the same edges.

use std::collections::{HashMap, HashSet};

use super::axis_button::{AxisDirection, AxisRepeatButton};
use super::bindings::{AxisId, InputAction, InputBindings};
use super::virtual_input::{Tick, VirtualAxis, VirtualButton};
use super::InputState;

/// Samples raw input into frame-stamped virtual buttons and axes.
#[derive(Debug, Clone)]
pub struct InputRouter {
    /// Tick readers compare against. Presses sampled in this tick carry
    /// `now - 1` as their stamp. Starts at 1 so a flush before the first
    /// sample still has a stamp one behind.
    now: Tick,
    bindings: InputBindings,
    buttons: HashMap<InputAction, VirtualButton>,
    /// Flushed while held; ignored until every source lets go.
    latched: HashSet<InputAction>,
    axes: HashMap<AxisId, VirtualAxis>,
    page_next: AxisRepeatButton,
    page_previous: AxisRepeatButton,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new(InputBindings::default())
    }
}

impl InputRouter {
    /// Create a router with the default menu-stick repeat settings.
    pub fn new(bindings: InputBindings) -> Self {
        Self::with_repeat(
            bindings,
            super::axis_button::DEFAULT_THRESHOLD,
            super::axis_button::DEFAULT_REPEAT_INTERVAL,
        )
    }

    /// Create a router with explicit menu-stick threshold and repeat interval.
    pub fn with_repeat(bindings: InputBindings, threshold: f32, repeat_interval: f32) -> Self {
        let buttons = InputAction::ALL
            .into_iter()
            .map(|action| (action, VirtualButton::new(action.name())))
            .collect();
        let axes = AxisId::ALL
            .into_iter()
            .map(|axis| (axis, VirtualAxis::new(axis.name())))
            .collect();

        Self {
            now: 1,
            bindings,
            buttons,
            latched: HashSet::new(),
            axes,
            page_next: AxisRepeatButton::new(AxisDirection::Positive, threshold, repeat_interval),
            page_previous: AxisRepeatButton::new(
                AxisDirection::Negative,
                threshold,
                repeat_interval,
            ),
        }
    }

    pub fn bindings(&self) -> &InputBindings {
        &self.bindings
    }

    /// Remap at run time. Takes effect on the next sample.
    pub fn bindings_mut(&mut self) -> &mut InputBindings {
        &mut self.bindings
    }

    /// Current tick as seen by readers.
    pub fn now(&self) -> Tick {
        self.now
    }

    /// Sample every raw channel into the virtual layer and advance the tick.
    ///
    /// Consumes the accumulated mouse motion from `raw`. `unscaled_dt` drives
    /// the menu repeat timer.
    pub fn sample(&mut self, raw: &mut InputState, unscaled_dt: f32) {
        let stamp = self.now;

        for action in InputAction::ALL {
            if action.is_derived() {
                continue;
            }
            let down = self
                .bindings
                .sources(action)
                .iter()
                .any(|source| raw.is_source_down(source));
            if self.latched.contains(&action) {
                if down {
                    continue;
                }
                self.latched.remove(&action);
            }
            if let Some(button) = self.buttons.get_mut(&action) {
                if down {
                    button.pressed(stamp);
                } else if button.is_down() {
                    button.released(stamp);
                }
            }
        }

        let mouse_delta = raw.mouse.consume_delta();
        for axis in AxisId::ALL {
            let mut value: f32 = self
                .bindings
                .axis_sources(axis)
                .iter()
                .map(|source| raw.axis_contribution(source, mouse_delta))
                .sum();
            if axis.is_bounded() {
                value = value.clamp(-1.0, 1.0);
            }
            if let Some(virtual_axis) = self.axes.get_mut(&axis) {
                virtual_axis.update(value);
            }
        }

        let menu = self.axis(AxisId::MenuVertical);
        if !self.still_latched(InputAction::PageNext, menu > 0.0) {
            if let Some(button) = self.buttons.get_mut(&InputAction::PageNext) {
                self.page_next.drive(menu, unscaled_dt, button, stamp);
            }
        }
        if !self.still_latched(InputAction::PagePrevious, menu < 0.0) {
            if let Some(button) = self.buttons.get_mut(&InputAction::PagePrevious) {
                self.page_previous.drive(menu, unscaled_dt, button, stamp);
            }
        }

        self.now += 1;
    }

    /// Force every button up and zero every axis.
    ///
    /// Release edges are visible to readers of the current tick. Used across
    /// suspend/load boundaries and on focus loss so nothing stays stuck.
    /// A button that was down stays silent until all of its sources have
    /// been seen up, so a key held through a load does not press again.
    pub fn flush(&mut self) {
        let stamp = self.now.saturating_sub(1);
        for (action, button) in self.buttons.iter_mut() {
            if button.is_down() {
                self.latched.insert(*action);
            }
            button.flush(stamp);
        }
        for axis in self.axes.values_mut() {
            axis.update(0.0);
        }
        self.page_next.reset();
        self.page_previous.reset();
        log::debug!("input flushed at tick {}", self.now);
    }

    /// Clears the latch on a derived button once its axis is back at rest.
    fn still_latched(&mut self, action: InputAction, held: bool) -> bool {
        if !self.latched.contains(&action) {
            return false;
        }
        if !held {
            self.latched.remove(&action);
        }
        held
    }

    pub fn button(&self, action: InputAction) -> Option<&VirtualButton> {
        self.buttons.get(&action)
    }

    /// Level signal for an action.
    pub fn is_down(&self, action: InputAction) -> bool {
        self.buttons.get(&action).is_some_and(VirtualButton::is_down)
    }

    /// Press edge for an action, visible for the whole current tick.
    pub fn went_down(&self, action: InputAction) -> bool {
        self.buttons.get(&action).is_some_and(|b| b.went_down(self.now))
    }

    /// Release edge for an action, visible for the whole current tick.
    pub fn went_up(&self, action: InputAction) -> bool {
        self.buttons.get(&action).is_some_and(|b| b.went_up(self.now))
    }

    /// Last sampled value of an axis.
    pub fn axis(&self, axis: AxisId) -> f32 {
        self.axes.get(&axis).map_or(0.0, VirtualAxis::value)
    }
}
