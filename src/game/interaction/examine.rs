//! Hold-to-examine: while the Examine button is held, pointer motion turns
//! the held object instead of the camera.

use glam::{Quat, Vec2};

use crate::game::hud::Hint;
use crate::input::{AxisId, InputAction, InputRouter};
use crate::world::World;

use super::machine::{Collaborators, HeldEntity, InteractionStateMachine};

impl InteractionStateMachine {
    pub(super) fn update_examine(&mut self, input: &InputRouter, ctx: &mut Collaborators<'_>) {
        if self.examining {
            if self.held.is_none() || !input.is_down(InputAction::Examine) {
                self.end_examine(ctx);
                return;
            }
            let delta = Vec2::new(input.axis(AxisId::LookX), input.axis(AxisId::LookY));
            self.rotate_held(delta, ctx.world);
        } else if input.went_down(InputAction::Examine) {
            match self.held {
                Some(held) if held.kind.is_holdable() => self.begin_examine(held, ctx),
                _ => {}
            }
        }
    }

    fn begin_examine(&mut self, held: HeldEntity, ctx: &mut Collaborators<'_>) {
        self.examining = true;
        self.examine_rotation = ctx
            .world
            .get(held.id)
            .map_or(Quat::IDENTITY, |e| e.examine_rotation());
        self.apply_highlight(None, ctx.world);
        self.hint = Hint::None;
        self.set_zoomed(false, ctx.motion);
        ctx.motion.disable_movement();
        ctx.motion.disable_look();
        log::debug!("examining {}", held.id);
    }

    pub(super) fn end_examine(&mut self, ctx: &mut Collaborators<'_>) {
        if !self.examining {
            return;
        }
        self.examining = false;
        if self.docked_at.is_none() && self.journal_open.is_none() {
            ctx.motion.enable_movement();
        }
        ctx.motion.enable_look();
    }

    fn rotate_held(&mut self, delta: Vec2, world: &mut World) {
        let Some(held) = self.held else {
            return;
        };
        let dead_zone = self.config.examine_dead_zone;
        let yaw = if delta.x.abs() > dead_zone { delta.x } else { 0.0 };
        let pitch = if delta.y.abs() > dead_zone { delta.y } else { 0.0 };
        let (yaw, pitch) = held.profile.rotation_lock.filter(yaw, pitch);
        if yaw == 0.0 && pitch == 0.0 {
            return;
        }

        let speed = self.config.examine_rotation_speed;
        self.examine_rotation = (Quat::from_rotation_y(yaw * speed)
            * Quat::from_rotation_x(pitch * speed)
            * self.examine_rotation)
            .normalize();
        if let Some(entity) = world.get_mut(held.id) {
            entity.set_examine_rotation(self.examine_rotation);
        }
    }
}
