//! Interaction State Machine
//!
//! Owns the mode, the held slot, the look target and the dock session, and
//! advances them once per tick from the sampled input. Collaborators are
//! borrowed for the duration of a tick through [`Collaborators`]; the held
//! entity and the dock slot are only ever written here.
//!
//! Tick order (FREE mode):
//!
//! 1. diary fade (runs in every mode, on unscaled time)
//! 2. sensitivity smoothing
//! 3. dock transition poll; nothing else runs while one is in progress
//! 4. journal reading; only close/menu are read while a journal is open
//! 5. look resolution and highlight (skipped while examining)
//! 6. examination
//! 7. interact and store edges
//! 8. close and menu edges
//! 9. zoom

use std::collections::BTreeSet;

use glam::Quat;

use crate::audio::{DiaryAudio, DiaryFade, FadeStep};
use crate::camera::{LookTarget, SensitivitySmoother, SpatialQuery, WorldLookResolver, ZoomState};
use crate::error::Result;
use crate::game::config::InteractionConfig;
use crate::game::hud::{Hint, HudSnapshot};
use crate::input::{CursorManager, InputAction, InputRouter, Tick};
use crate::inventory::Inventory;
use crate::player::PlayerMotion;
use crate::world::{EntityId, HoldProfile, InteractableKind, World};

use super::highlight::{self, HighlightDecision, HighlightQuery, LookedAt, TargetInfo};
use super::mode::{DockSession, InteractionMode};

/// The entity in the player's hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeldEntity {
    pub id: EntityId,
    pub kind: InteractableKind,
    pub profile: HoldProfile,
    /// Taken out of the inventory rather than picked up from the world
    pub from_inventory: bool,
}

/// Everything outside the state machine that a tick touches.
pub struct Collaborators<'a> {
    pub world: &'a mut World,
    pub query: &'a dyn SpatialQuery,
    pub inventory: &'a mut dyn Inventory,
    pub motion: &'a mut dyn PlayerMotion,
    pub audio: &'a mut dyn DiaryAudio,
}

#[derive(Debug)]
pub struct InteractionStateMachine {
    pub(super) config: InteractionConfig,
    pub(super) mode: InteractionMode,
    pub(super) held: Option<HeldEntity>,
    pub(super) looked_at: LookTarget,
    pub(super) highlighted: Option<EntityId>,
    pub(super) hint: Hint,
    pub(super) dock: Option<DockSession>,
    pub(super) docked_at: Option<EntityId>,
    pub(super) examining: bool,
    pub(super) examine_rotation: Quat,
    pub(super) journal_open: Option<EntityId>,
    pub(super) resolver: WorldLookResolver,
    pub(super) sensitivity: SensitivitySmoother,
    pub(super) zoom: ZoomState,
    pub(super) diary_fade: DiaryFade,
    pub(super) cursor: CursorManager,
    pub(super) collected: BTreeSet<String>,
    pub(super) refresh_requested: bool,
}

impl Default for InteractionStateMachine {
    fn default() -> Self {
        Self::new(InteractionConfig::default())
    }
}

impl InteractionStateMachine {
    /// Build from a config that has already been validated (or is the
    /// default). Use [`try_new`](Self::try_new) for configs loaded from disk.
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            resolver: WorldLookResolver::new(
                config.max_look_distance,
                config.interactable_layers,
                config.put_back_layers,
            ),
            sensitivity: SensitivitySmoother::new(
                config.base_sensitivity,
                config.sensitivity_smoothing_rate,
            ),
            zoom: ZoomState::new(config.default_fov, config.zoom_fov, config.fov_lerp_rate),
            diary_fade: DiaryFade::new(config.diary_fade_step, config.diary_fade_interval),
            config,
            mode: InteractionMode::Free,
            held: None,
            looked_at: LookTarget::None,
            highlighted: None,
            hint: Hint::None,
            dock: None,
            docked_at: None,
            examining: false,
            examine_rotation: Quat::IDENTITY,
            journal_open: None,
            cursor: CursorManager::new(),
            collected: BTreeSet::new(),
            refresh_requested: false,
        }
    }

    /// Validate `config`, then build.
    pub fn try_new(config: InteractionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn held(&self) -> Option<EntityId> {
        self.held.map(|h| h.id)
    }

    pub fn held_entity(&self) -> Option<&HeldEntity> {
        self.held.as_ref()
    }

    pub fn looked_at(&self) -> LookTarget {
        self.looked_at
    }

    pub fn highlighted(&self) -> Option<EntityId> {
        self.highlighted
    }

    pub fn hint(&self) -> Hint {
        self.hint
    }

    pub fn is_examining(&self) -> bool {
        self.examining
    }

    /// A dock or undock transition is running.
    pub fn is_docking(&self) -> bool {
        self.dock.is_some_and(|d| d.in_progress)
    }

    /// The running transition, or the last one once it has finished.
    pub fn dock_session(&self) -> Option<&DockSession> {
        self.dock.as_ref()
    }

    pub fn docked_at(&self) -> Option<EntityId> {
        self.docked_at
    }

    pub fn journal_open(&self) -> Option<EntityId> {
        self.journal_open
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_zoomed()
    }

    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    pub fn sensitivity(&self) -> &SensitivitySmoother {
        &self.sensitivity
    }

    pub fn cursor(&self) -> &CursorManager {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut CursorManager {
        &mut self.cursor
    }

    pub fn collected_count(&self) -> usize {
        self.collected.len()
    }

    pub fn has_collected(&self, name: &str) -> bool {
        self.collected.contains(name)
    }

    /// Whether a Store press would do something right now.
    pub fn store_available(&self) -> bool {
        matches!(self.held, Some(HeldEntity { kind: InteractableKind::Inventory, .. }))
            || matches!(
                self.looked_at,
                LookTarget::Interactable { kind: InteractableKind::Inventory, .. }
            )
    }

    /// Consume the pending structural-refresh request.
    pub fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }

    // ------------------------------------------------------------------
    // Mode commands (trusted orchestration only, never per-tick input)
    // ------------------------------------------------------------------

    fn set_mode(&mut self, mode: InteractionMode) {
        if self.mode != mode {
            log::info!("interaction mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
            self.refresh_requested = true;
        }
    }

    /// FREE -> IN_MENU. Refused while a journal is open.
    pub fn open_menu(&mut self, motion: &mut dyn PlayerMotion) -> bool {
        if self.mode != InteractionMode::Free || self.journal_open.is_some() {
            log::debug!("menu refused in {:?}", self.mode);
            return false;
        }
        self.set_mode(InteractionMode::InMenu);
        self.cursor.release();
        motion.freeze(true);
        true
    }

    /// IN_MENU -> FREE.
    pub fn close_menu(&mut self, motion: &mut dyn PlayerMotion) -> bool {
        if self.mode != InteractionMode::InMenu {
            return false;
        }
        self.set_mode(InteractionMode::Free);
        self.cursor.capture();
        motion.freeze(false);
        true
    }

    /// FREE -> SUSPENDED for a scripted scene.
    pub fn begin_cutscene(&mut self, show_cursor: bool, motion: &mut dyn PlayerMotion) -> bool {
        if self.mode != InteractionMode::Free {
            log::debug!("cutscene refused in {:?}", self.mode);
            return false;
        }
        self.set_mode(InteractionMode::Suspended);
        motion.freeze(true);
        if show_cursor {
            self.cursor.release();
        }
        true
    }

    /// SUSPENDED -> FREE after a scripted scene.
    pub fn end_cutscene(&mut self, hide_cursor: bool, motion: &mut dyn PlayerMotion) -> bool {
        if self.mode != InteractionMode::Suspended {
            return false;
        }
        self.set_mode(InteractionMode::Free);
        motion.freeze(false);
        if hide_cursor {
            self.cursor.capture();
        }
        true
    }

    /// Any mode -> SUSPENDED (save/load).
    pub fn suspend(&mut self, motion: &mut dyn PlayerMotion) -> bool {
        if self.mode == InteractionMode::Suspended {
            return false;
        }
        self.set_mode(InteractionMode::Suspended);
        motion.freeze(true);
        true
    }

    /// SUSPENDED -> FREE (save/load).
    pub fn resume(&mut self, reset_look: bool, motion: &mut dyn PlayerMotion) -> bool {
        if self.mode != InteractionMode::Suspended {
            return false;
        }
        self.set_mode(InteractionMode::Free);
        motion.freeze(false);
        self.cursor.capture();
        if reset_look {
            motion.reset_look();
        }
        true
    }

    // ------------------------------------------------------------------
    // Tick
    // ------------------------------------------------------------------

    /// Advance one tick. `input` must already be sampled for this tick.
    pub fn tick(&mut self, input: &InputRouter, unscaled_dt: f32, ctx: &mut Collaborators<'_>) {
        self.advance_diary_fade(unscaled_dt, ctx.audio);

        match self.mode {
            InteractionMode::Suspended => return,
            InteractionMode::InMenu => {
                if input.went_down(InputAction::Menu) || input.went_down(InputAction::Close) {
                    self.close_menu(ctx.motion);
                }
                return;
            }
            InteractionMode::Free => {}
        }

        if self.sensitivity.step(unscaled_dt) {
            ctx.motion.set_look_sensitivity(self.sensitivity.current());
        }

        if self.poll_dock(ctx) {
            return;
        }

        if self.journal_open.is_some() {
            if input.went_down(InputAction::Close) || input.went_down(InputAction::Menu) {
                self.close_journal(ctx.motion);
            }
            self.update_zoom(input, unscaled_dt, ctx.motion);
            return;
        }

        self.looked_at = self.resolver.resolve(ctx.query, ctx.world, self.held());
        if !self.examining {
            self.update_highlight(ctx.world);
        }

        self.update_examine(input, ctx);

        if !self.examining {
            if input.went_down(InputAction::Interact) {
                self.dispatch_interact(ctx);
            }
            if input.went_down(InputAction::Store) {
                self.dispatch_store(ctx);
            }
        }

        if input.went_down(InputAction::Close) {
            self.handle_close(ctx);
        }
        if input.went_down(InputAction::Menu)
            && !self.examining
            && !self.is_docking()
            && self.journal_open.is_none()
        {
            self.open_menu(ctx.motion);
        }

        self.update_zoom(input, unscaled_dt, ctx.motion);
    }

    fn advance_diary_fade(&mut self, unscaled_dt: f32, audio: &mut dyn DiaryAudio) {
        if self.diary_fade.is_active() && audio.playing_diary().is_none() {
            self.diary_fade.cancel();
            return;
        }
        match self.diary_fade.advance(unscaled_dt) {
            FadeStep::Idle => {}
            FadeStep::Faded(volume) => audio.set_diary_volume(volume),
            FadeStep::Finished => {
                log::debug!("diary faded out");
                audio.stop_diary();
                self.refresh_requested = true;
            }
        }
    }

    /// CLOSE in FREE mode with no journal open: leave the dock, else fade
    /// the playing diary.
    fn handle_close(&mut self, ctx: &mut Collaborators<'_>) {
        if self.docked_at.is_some() && !self.examining {
            self.end_dock(ctx.motion);
        } else if ctx.audio.playing_diary().is_some() {
            self.diary_fade.begin(ctx.audio.diary_volume());
        }
    }

    fn update_zoom(&mut self, input: &InputRouter, unscaled_dt: f32, motion: &mut dyn PlayerMotion) {
        let wanted = input.is_down(InputAction::Zoom)
            && self.held.is_none()
            && self.journal_open.is_none()
            && self.mode == InteractionMode::Free;
        self.set_zoomed(wanted, motion);

        let before = self.zoom.fov();
        let fov = self.zoom.step(unscaled_dt);
        if fov != before {
            motion.set_field_of_view(fov);
        }
    }

    /// Flip the zoom flag and its sensitivity override.
    pub(super) fn set_zoomed(&mut self, zoomed: bool, motion: &mut dyn PlayerMotion) {
        if !self.zoom.set_zoomed(zoomed) {
            return;
        }
        if zoomed {
            let scaled = self.sensitivity.base() * self.config.zoom_sensitivity_scale;
            self.sensitivity.set_sensitivity(scaled);
        } else {
            self.sensitivity.restore(true);
        }
        motion.set_look_sensitivity(self.sensitivity.current());
    }

    // ------------------------------------------------------------------
    // Highlight
    // ------------------------------------------------------------------

    pub(super) fn highlight_query(&self, world: &World) -> HighlightQuery {
        let looked_at = match self.looked_at {
            LookTarget::None => LookedAt::Nothing,
            LookTarget::PutBackSlot(slot) => LookedAt::PutBack(slot),
            LookTarget::Interactable { id, .. } => match world.get(id) {
                Some(entity) => LookedAt::Entity(TargetInfo {
                    id,
                    kind: entity.kind(),
                    allows_while_holding: entity.allows_interaction_while_holding(),
                    occupied: entity.is_occupied(),
                    holdable: entity.hold_profile().is_some(),
                }),
                None => LookedAt::Nothing,
            },
        };
        HighlightQuery { held: self.held.map(|h| h.kind), looked_at }
    }

    fn update_highlight(&mut self, world: &mut World) {
        let query = self.highlight_query(world);
        let decision = highlight::evaluate(&query).unwrap_or_else(|| {
            log::warn!("no highlight rule for {query:?}");
            HighlightDecision::NONE
        });
        self.apply_highlight(decision.highlight, world);
        self.hint = decision.hint;
    }

    /// Move the highlight to `target`, unhighlighting the previous one.
    pub(super) fn apply_highlight(&mut self, target: Option<EntityId>, world: &mut World) {
        if self.highlighted == target {
            return;
        }
        if let Some(old) = self.highlighted {
            world.set_highlighted(old, false);
        }
        if let Some(new) = target {
            world.set_highlighted(new, true);
        }
        self.highlighted = target;
    }

    // ------------------------------------------------------------------
    // HUD
    // ------------------------------------------------------------------

    pub fn hud_snapshot(&self, tick: Tick, world: &World, audio: &dyn DiaryAudio) -> HudSnapshot {
        let looked_at = self.looked_at.id();
        let looked_at_kind = self.looked_at.interactable().map(|(_, kind)| kind);
        let dock_occupied = match self.looked_at {
            LookTarget::Interactable { id, kind: InteractableKind::Dock, .. } => {
                world.get(id).is_some_and(|e| e.is_occupied())
            }
            _ => false,
        };

        HudSnapshot {
            tick,
            mode: self.mode,
            held: self.held(),
            held_kind: self.held.map(|h| h.kind),
            looked_at,
            looked_at_kind,
            highlighted: self.highlighted,
            hint: self.hint,
            hint_label: self.hint.label(),
            store_available: self.store_available(),
            docked_at: self.docked_at,
            docking: self.is_docking(),
            dock_occupied,
            examining: self.examining,
            zoomed: self.zoom.is_zoomed(),
            field_of_view: self.zoom.fov(),
            journal_open: self.journal_open,
            diary_playing: audio.playing_diary(),
            diary_volume: audio.diary_volume(),
            cursor_visible: self.cursor.should_cursor_be_visible(),
            collected: self.collected.len(),
        }
    }
}
