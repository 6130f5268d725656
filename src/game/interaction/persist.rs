//! Save/load of the interaction state.
//!
//! Only the held entity, the dock and the mode are persisted. Everything
//! else (look target, highlight, zoom, examination) is rebuilt on the next
//! tick. Restoring does not run hold or dock hooks a second time; the world
//! is expected to have been restored with those effects already applied.
//! The player body is put into the state the restored mode and dock imply
//! (frozen outside FREE, seated and unable to walk while docked), which is
//! the same whatever state it was in before.

use serde::{Deserialize, Serialize};

use crate::camera::LookTarget;
use crate::error::{InteractionError, Result};
use crate::game::hud::Hint;
use crate::player::PlayerMotion;
use crate::world::{EntityId, InteractableKind, World};

use super::machine::{HeldEntity, InteractionStateMachine};
use super::mode::{DockAction, InteractionMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSnapshot {
    pub held: Option<EntityId>,
    pub dock: Option<EntityId>,
    pub mode: InteractionMode,
}

impl InteractionSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl InteractionStateMachine {
    /// A dock transition in flight is saved as its destination.
    pub fn snapshot(&self) -> InteractionSnapshot {
        let dock = match self.dock.filter(|s| s.in_progress) {
            Some(session) => match session.action {
                DockAction::Docking => Some(session.dock),
                DockAction::Undocking => None,
            },
            None => self.docked_at,
        };
        InteractionSnapshot { held: self.held(), dock, mode: self.mode }
    }

    /// Replace the current state with `snapshot`. Validated against `world`
    /// before anything changes.
    pub fn restore(
        &mut self,
        snapshot: &InteractionSnapshot,
        world: &mut World,
        motion: &mut dyn PlayerMotion,
    ) -> Result<()> {
        let held = match snapshot.held {
            Some(id) => {
                let entity = world.get(id).ok_or(InteractionError::UnknownEntity { id })?;
                let kind = entity.kind();
                let profile = entity
                    .hold_profile()
                    .filter(|_| kind.is_holdable())
                    .ok_or(InteractionError::NotHoldable { id })?;
                Some(HeldEntity { id, kind, profile, from_inventory: false })
            }
            None => None,
        };
        let dock_pose = match snapshot.dock {
            Some(id) => {
                let entity = world.get(id).ok_or(InteractionError::UnknownEntity { id })?;
                if entity.kind() != InteractableKind::Dock {
                    return Err(InteractionError::NotADock { id });
                }
                Some(entity.dock_pose().ok_or(InteractionError::NotADock { id })?)
            }
            None => None,
        };

        if let Some(old) = self.highlighted.take() {
            world.set_highlighted(old, false);
        }
        self.held = held;
        self.docked_at = snapshot.dock;
        self.dock = None;
        self.looked_at = LookTarget::None;
        self.hint = Hint::None;
        self.examining = false;
        self.journal_open = None;
        self.zoom.set_zoomed(false);
        self.sensitivity.restore(false);
        self.diary_fade.cancel();

        self.mode = snapshot.mode;
        match self.mode {
            InteractionMode::Free => self.cursor.capture(),
            InteractionMode::InMenu | InteractionMode::Suspended => self.cursor.release(),
        };

        motion.settle_dock(dock_pose);
        if dock_pose.is_some() {
            motion.disable_movement();
        } else {
            motion.enable_movement();
        }
        motion.enable_look();
        motion.freeze(self.mode != InteractionMode::Free);
        motion.set_look_sensitivity(self.sensitivity.current());
        self.refresh_requested = true;
        log::info!(
            "restored interaction state: mode {:?}, held {:?}, dock {:?}",
            self.mode,
            self.held(),
            self.docked_at
        );
        Ok(())
    }
}
