//! HUD Data
//!
//! The per-tick snapshot the UI draws from, and the sink it is published to.
//! The snapshot is rebuilt from scratch every tick; the UI never diffs it.

use serde::Serialize;

use crate::game::interaction::InteractionMode;
use crate::input::Tick;
use crate::world::{EntityId, InteractableKind};

/// What the reticle prompt offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Hint {
    #[default]
    None,
    Read,
    PickUp,
    Use,
    Open,
    Take,
    Dock,
    Listen,
    PutBack,
    Toss,
}

impl Hint {
    pub fn label(self) -> &'static str {
        match self {
            Hint::None => "",
            Hint::Read => "Read",
            Hint::PickUp => "Pick up",
            Hint::Use => "Use",
            Hint::Open => "Open",
            Hint::Take => "Take",
            Hint::Dock => "Sit",
            Hint::Listen => "Listen",
            Hint::PutBack => "Put back",
            Hint::Toss => "Throw",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct HudSnapshot {
    pub tick: Tick,
    pub mode: InteractionMode,

    pub held: Option<EntityId>,
    pub held_kind: Option<InteractableKind>,
    pub looked_at: Option<EntityId>,
    pub looked_at_kind: Option<InteractableKind>,
    pub highlighted: Option<EntityId>,

    pub hint: Hint,
    pub hint_label: &'static str,
    /// A Store press would do something
    pub store_available: bool,

    pub docked_at: Option<EntityId>,
    pub docking: bool,
    /// The dock under the reticle is taken
    pub dock_occupied: bool,

    pub examining: bool,
    pub zoomed: bool,
    pub field_of_view: f32,
    pub journal_open: Option<EntityId>,

    pub diary_playing: Option<EntityId>,
    pub diary_volume: f32,

    pub cursor_visible: bool,
    pub collected: usize,
}

/// UI collaborator.
pub trait HudSink {
    /// Called once per tick with the fresh snapshot.
    fn publish(&mut self, snapshot: &HudSnapshot);

    /// Structural change (mode, journal, dock): rebuild panels.
    fn refresh(&mut self, _snapshot: &HudSnapshot) {}
}

/// Sink that writes to the log.
#[derive(Debug, Default)]
pub struct LogHud {
    last_hint: Hint,
    pub refreshes: u32,
}

impl HudSink for LogHud {
    fn publish(&mut self, snapshot: &HudSnapshot) {
        if snapshot.hint != self.last_hint {
            log::debug!("hint: {:?} {}", snapshot.hint, snapshot.hint_label);
            self.last_hint = snapshot.hint;
        }
    }

    fn refresh(&mut self, snapshot: &HudSnapshot) {
        self.refreshes += 1;
        log::info!(
            "hud refresh at tick {}: mode {:?}, journal {:?}, docked {:?}, collected {}",
            snapshot.tick,
            snapshot.mode,
            snapshot.journal_open,
            snapshot.docked_at,
            snapshot.collected
        );
    }
}
