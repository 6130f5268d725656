//! Interaction Session
//!
//! Holds the raw input, the router, the state machine, the world and the
//! boxed collaborators together, and runs one tick in a fixed order:
//!
//! 1. sample input into the virtual layer
//! 2. advance the interaction state machine
//! 3. advance player motion with the look/move axes
//! 4. publish the HUD snapshot (and a structural refresh when requested)

use glam::Vec2;
use winit::event::{DeviceEvent, WindowEvent};

use crate::audio::DiaryAudio;
use crate::camera::SpatialQuery;
use crate::error::{InteractionError, Result};
use crate::game::config::InteractionConfig;
use crate::game::hud::{HudSink, HudSnapshot};
use crate::game::interaction::{Collaborators, InteractionSnapshot, InteractionStateMachine};
use crate::input::winit_adapter::{self, WindowInput};
use crate::input::{AxisId, InputBindings, InputRouter, InputState};
use crate::inventory::Inventory;
use crate::player::PlayerMotion;
use crate::world::{EntityId, World};

pub struct Session {
    // === Input ===
    raw: InputState,
    router: InputRouter,

    // === Interaction ===
    machine: InteractionStateMachine,
    world: World,

    // === Collaborators ===
    inventory: Box<dyn Inventory>,
    motion: Box<dyn PlayerMotion>,
    audio: Box<dyn DiaryAudio>,
    hud: Box<dyn HudSink>,

    /// Snapshot published on the last tick
    last_hud: HudSnapshot,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    /// Run one tick. `unscaled_dt` is wall time, unaffected by game slow-mo.
    pub fn tick(&mut self, unscaled_dt: f32, query: &dyn SpatialQuery) {
        self.router.sample(&mut self.raw, unscaled_dt);

        let mut ctx = Collaborators {
            world: &mut self.world,
            query,
            inventory: self.inventory.as_mut(),
            motion: self.motion.as_mut(),
            audio: self.audio.as_mut(),
        };
        self.machine.tick(&self.router, unscaled_dt, &mut ctx);

        let look = Vec2::new(self.router.axis(AxisId::LookX), self.router.axis(AxisId::LookY));
        let movement = Vec2::new(self.router.axis(AxisId::MoveX), self.router.axis(AxisId::MoveY));
        self.motion.advance(unscaled_dt, look, movement);

        self.last_hud = self
            .machine
            .hud_snapshot(self.router.now(), &self.world, self.audio.as_ref());
        self.hud.publish(&self.last_hud);
        if self.machine.take_refresh_request() {
            self.hud.refresh(&self.last_hud);
        }
    }

    // ------------------------------------------------------------------
    // Window events
    // ------------------------------------------------------------------

    /// Feed a window event. Focus loss flushes every virtual button so
    /// nothing stays held while the window is in the background.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> WindowInput {
        let result = winit_adapter::handle_window_event(&mut self.raw, event);
        match result {
            WindowInput::FocusLost => {
                self.router.flush();
                self.machine.cursor_mut().set_focus(false);
            }
            WindowInput::FocusGained => {
                self.machine.cursor_mut().set_focus(true);
            }
            WindowInput::Handled | WindowInput::Ignored => {}
        }
        result
    }

    pub fn handle_device_event(&mut self, event: &DeviceEvent) -> bool {
        winit_adapter::handle_device_event(&mut self.raw, event)
    }

    // ------------------------------------------------------------------
    // Mode commands
    // ------------------------------------------------------------------

    pub fn open_menu(&mut self) -> bool {
        self.machine.open_menu(self.motion.as_mut())
    }

    pub fn close_menu(&mut self) -> bool {
        self.machine.close_menu(self.motion.as_mut())
    }

    pub fn begin_cutscene(&mut self, show_cursor: bool) -> bool {
        self.machine.begin_cutscene(show_cursor, self.motion.as_mut())
    }

    pub fn end_cutscene(&mut self, hide_cursor: bool) -> bool {
        self.machine.end_cutscene(hide_cursor, self.motion.as_mut())
    }

    /// Suspend for save/load. Input is flushed so no button survives.
    pub fn suspend(&mut self) -> bool {
        let suspended = self.machine.suspend(self.motion.as_mut());
        if suspended {
            self.router.flush();
        }
        suspended
    }

    pub fn resume(&mut self, reset_look: bool) -> bool {
        self.machine.resume(reset_look, self.motion.as_mut())
    }

    /// Take an item out of the inventory into the hand (inventory UI).
    pub fn hold_from_inventory(&mut self, id: EntityId, query: &dyn SpatialQuery) -> bool {
        let mut ctx = Collaborators {
            world: &mut self.world,
            query,
            inventory: self.inventory.as_mut(),
            motion: self.motion.as_mut(),
            audio: self.audio.as_mut(),
        };
        self.machine.hold_from_inventory(id, &mut ctx)
    }

    // ------------------------------------------------------------------
    // Save/load
    // ------------------------------------------------------------------

    pub fn snapshot(&self) -> InteractionSnapshot {
        self.machine.snapshot()
    }

    /// Load `snapshot`. Input is flushed, and buttons still held through the
    /// load stay silent until they are released.
    pub fn restore(&mut self, snapshot: &InteractionSnapshot) -> Result<()> {
        self.router.flush();
        self.machine.restore(snapshot, &mut self.world, self.motion.as_mut())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Raw input, for hosts that feed events without winit.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.raw
    }

    pub fn router(&self) -> &InputRouter {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut InputRouter {
        &mut self.router
    }

    pub fn machine(&self) -> &InteractionStateMachine {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut InteractionStateMachine {
        &mut self.machine
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn inventory(&self) -> &dyn Inventory {
        self.inventory.as_ref()
    }

    pub fn motion(&self) -> &dyn PlayerMotion {
        self.motion.as_ref()
    }

    pub fn audio(&self) -> &dyn DiaryAudio {
        self.audio.as_ref()
    }

    pub fn hud_snapshot(&self) -> &HudSnapshot {
        &self.last_hud
    }
}

/// Assembles a [`Session`]. Every collaborator is required.
#[derive(Default)]
pub struct SessionBuilder {
    config: Option<InteractionConfig>,
    bindings: Option<InputBindings>,
    world: Option<World>,
    inventory: Option<Box<dyn Inventory>>,
    motion: Option<Box<dyn PlayerMotion>>,
    audio: Option<Box<dyn DiaryAudio>>,
    hud: Option<Box<dyn HudSink>>,
}

impl SessionBuilder {
    pub fn config(mut self, config: InteractionConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn bindings(mut self, bindings: InputBindings) -> Self {
        self.bindings = Some(bindings);
        self
    }

    pub fn world(mut self, world: World) -> Self {
        self.world = Some(world);
        self
    }

    pub fn inventory(mut self, inventory: impl Inventory + 'static) -> Self {
        self.inventory = Some(Box::new(inventory));
        self
    }

    pub fn motion(mut self, motion: impl PlayerMotion + 'static) -> Self {
        self.motion = Some(Box::new(motion));
        self
    }

    pub fn audio(mut self, audio: impl DiaryAudio + 'static) -> Self {
        self.audio = Some(Box::new(audio));
        self
    }

    pub fn hud(mut self, hud: impl HudSink + 'static) -> Self {
        self.hud = Some(Box::new(hud));
        self
    }

    pub fn build(self) -> Result<Session> {
        let machine = InteractionStateMachine::try_new(self.config.unwrap_or_default())?;

        let world = self.world.ok_or(InteractionError::MissingCollaborator { name: "world" })?;
        let inventory = self
            .inventory
            .ok_or(InteractionError::MissingCollaborator { name: "inventory" })?;
        let motion = self
            .motion
            .ok_or(InteractionError::MissingCollaborator { name: "motion" })?;
        let audio = self.audio.ok_or(InteractionError::MissingCollaborator { name: "audio" })?;
        let hud = self.hud.ok_or(InteractionError::MissingCollaborator { name: "hud" })?;
        world.validate()?;

        let router = InputRouter::with_repeat(
            self.bindings.unwrap_or_default(),
            machine.config().menu_stick_threshold,
            machine.config().menu_repeat_interval,
        );
        log::info!(
            "interaction session ready: {} entities, {} put-back slots",
            world.entity_count(),
            world.slot_count()
        );

        Ok(Session {
            raw: InputState::new(),
            router,
            machine,
            world,
            inventory,
            motion,
            audio,
            hud,
            last_hud: HudSnapshot::default(),
        })
    }
}
