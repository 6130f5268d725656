//! Docking: hand the player to a fixed pose (a chair, a desk) and back.
//!
//! The motion collaborator runs the transition; the machine polls it each
//! tick and commits the occupancy change once it reports done.

use crate::game::hud::Hint;
use crate::player::PlayerMotion;
use crate::world::EntityId;

use super::machine::{Collaborators, InteractionStateMachine};
use super::mode::{DockAction, DockSession};

impl InteractionStateMachine {
    pub(super) fn begin_dock(&mut self, id: EntityId, ctx: &mut Collaborators<'_>) {
        if self.docked_at.is_some() || self.is_docking() {
            log::debug!("dock {} refused: already docked", id);
            return;
        }
        let Some(entity) = ctx.world.get(id) else {
            return;
        };
        if entity.is_occupied() {
            log::debug!("dock {} is occupied", id);
            return;
        }
        let Some(pose) = entity.dock_pose() else {
            log::warn!("dock {} has no pose", id);
            return;
        };

        self.apply_highlight(None, ctx.world);
        self.hint = Hint::None;
        self.set_zoomed(false, ctx.motion);
        ctx.motion.disable_movement();
        ctx.motion.dock(pose);
        self.dock = Some(DockSession::docking(id));
        self.collect(id, ctx.world);
        log::debug!("docking at {}", id);
    }

    /// Leave the current dock. No-op while a transition is running.
    pub(super) fn end_dock(&mut self, motion: &mut dyn PlayerMotion) {
        let Some(dock) = self.docked_at else {
            return;
        };
        if self.is_docking() {
            return;
        }
        motion.undock();
        self.dock = Some(DockSession::undocking(dock));
        log::debug!("undocking from {}", dock);
    }

    /// Returns true while a transition is still running.
    pub(super) fn poll_dock(&mut self, ctx: &mut Collaborators<'_>) -> bool {
        let Some(session) = self.dock.filter(|s| s.in_progress) else {
            return false;
        };
        if ctx.motion.is_dock_in_progress() {
            return true;
        }
        self.finish_dock(session, ctx);
        false
    }

    fn finish_dock(&mut self, session: DockSession, ctx: &mut Collaborators<'_>) {
        self.end_examine(ctx);

        match session.action {
            DockAction::Docking => {
                if let Some(entity) = ctx.world.get_mut(session.dock) {
                    entity.set_occupied(true);
                }
                self.docked_at = Some(session.dock);
            }
            DockAction::Undocking => {
                if let Some(entity) = ctx.world.get_mut(session.dock) {
                    entity.set_occupied(false);
                }
                self.docked_at = None;
                if self.journal_open.is_none() {
                    ctx.motion.enable_movement();
                }
            }
        }

        self.dock = Some(DockSession { in_progress: false, ..session });
        self.refresh_requested = true;
        log::info!("{:?} finished at {}", session.action, session.dock);
    }
}
