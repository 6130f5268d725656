//! Interaction modes and docking session state.

use serde::{Deserialize, Serialize};

use crate::world::EntityId;

/// Top-level interaction mode. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    /// Per-tick interaction runs
    #[default]
    Free,
    /// Pause menu open; only menu/close input is read
    InMenu,
    /// Cutscene or save/load; nothing runs until resumed
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockAction {
    Docking,
    Undocking,
}

/// A dock transition handed to the motion collaborator and polled each tick.
///
/// The last session is kept after it completes, with `in_progress` cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockSession {
    pub dock: EntityId,
    pub action: DockAction,
    pub in_progress: bool,
}

impl DockSession {
    pub fn docking(dock: EntityId) -> Self {
        Self { dock, action: DockAction::Docking, in_progress: true }
    }

    pub fn undocking(dock: EntityId) -> Self {
        Self { dock, action: DockAction::Undocking, in_progress: true }
    }
}
