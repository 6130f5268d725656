//! Interaction Sandbox
//!
//! Run with: `cargo run --bin interaction_sandbox [config.json]`
//!
//! Headless walkthrough of a small study: picks up a cup and puts it back,
//! takes a key, unlocks a drawer with it, reads a journal, plays a diary,
//! sits in a chair and pauses. Every step is logged; set `RUST_LOG=debug`
//! to see hints and dispatch decisions.

use glam::Vec3;
use reticle_engine::audio::SilentAudio;
use reticle_engine::camera::{ColliderScene, LayerMask, SphereCollider};
use reticle_engine::game::{InteractionConfig, LogHud, Session};
use reticle_engine::input::KeyCode;
use reticle_engine::inventory::Ledger;
use reticle_engine::player::MotionRig;
use reticle_engine::world::{ActivationRequirement, DockPose, ItemType, Prop, PutBackSlot, World};
use reticle_engine::{EntityId, InteractableKind, Result};

const DT: f32 = 1.0 / 30.0;

const CUP: EntityId = EntityId(1);
const KEY: EntityId = EntityId(2);
const DRAWER: EntityId = EntityId(3);
const JOURNAL: EntityId = EntityId(4);
const DIARY: EntityId = EntityId(5);
const CHAIR: EntityId = EntityId(6);
const CUP_SLOT: EntityId = EntityId(100);

// ============================================================================
// SCENE
// ============================================================================

fn place(id: EntityId) -> Vec3 {
    match id {
        CUP => Vec3::new(-0.6, 1.0, -1.8),
        KEY => Vec3::new(0.0, 1.0, -1.8),
        DRAWER => Vec3::new(0.6, 0.7, -1.8),
        JOURNAL => Vec3::new(-0.6, 1.6, -1.8),
        DIARY => Vec3::new(0.6, 1.6, -1.8),
        CHAIR => Vec3::new(0.0, 0.5, -1.2),
        CUP_SLOT => Vec3::new(-1.2, 1.0, -1.8),
        _ => Vec3::ZERO,
    }
}

fn build_world() -> Result<World> {
    let brass_key = ItemType::new("brass_key");
    let mut world = World::new();
    world.insert(Prop::pickup(CUP).at(place(CUP)));
    world.insert(Prop::inventory_item(KEY, brass_key.clone()).at(place(KEY)));
    world.insert(
        Prop::new(DRAWER, InteractableKind::Activate)
            .toggle(false)
            .requiring(ActivationRequirement::new(brass_key, 1).consumed())
            .at(place(DRAWER)),
    );
    world.insert(
        Prop::new(JOURNAL, InteractableKind::Journal)
            .collectible("study_notes")
            .at(place(JOURNAL)),
    );
    world.insert(
        Prop::new(DIARY, InteractableKind::AudioDiary)
            .collectible("diary_tape_1")
            .at(place(DIARY)),
    );
    world.insert(
        Prop::dock(
            CHAIR,
            DockPose { position: Vec3::new(0.0, 1.1, -1.0), look_at: place(JOURNAL) },
        )
        .collectible("reading_chair"),
    );
    world.insert_slot(PutBackSlot::new(CUP_SLOT, CUP, place(CUP_SLOT)))?;
    Ok(world)
}

fn build_scene() -> ColliderScene {
    let mut scene = ColliderScene::new();
    for id in [CUP, KEY, DRAWER, JOURNAL, DIARY, CHAIR] {
        scene.add(SphereCollider {
            entity: id,
            center: place(id),
            radius: 0.2,
            layers: LayerMask::INTERACTABLE,
        });
    }
    scene.add(SphereCollider {
        entity: CUP_SLOT,
        center: place(CUP_SLOT),
        radius: 0.2,
        layers: LayerMask::PUT_BACK,
    });
    scene.set_view(Vec3::new(0.0, 1.2, 0.0), Vec3::NEG_Z);
    scene
}

// ============================================================================
// SCRIPT
// ============================================================================

struct Sandbox {
    session: Session,
    scene: ColliderScene,
}

impl Sandbox {
    fn idle(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.session.tick(DT, &self.scene);
        }
    }

    fn look_at(&mut self, id: EntityId) {
        self.scene.look_at(place(id));
        self.idle(1);
    }

    fn press(&mut self, key: KeyCode) {
        self.session.input_mut().keyboard.handle_key(key, true);
        self.idle(1);
        self.session.input_mut().keyboard.handle_key(key, false);
        self.idle(1);
    }

    fn report(&self, step: &str) {
        let hud = self.session.hud_snapshot();
        println!(
            "{step:<28} mode={:?} held={:?} hint={:?} docked={:?} collected={}",
            hud.mode, hud.held, hud.hint, hud.docked_at, hud.collected
        );
    }
}

fn load_config() -> Result<InteractionConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading interaction config from {path}");
            InteractionConfig::load(path)
        }
        None => Ok(InteractionConfig::default()),
    }
}

fn run() -> Result<()> {
    let session = Session::builder()
        .config(load_config()?)
        .world(build_world()?)
        .inventory(Ledger::new())
        .motion(MotionRig::new().with_position(Vec3::new(0.0, 1.2, 0.0)))
        .audio(SilentAudio::new())
        .hud(LogHud::default())
        .build()?;
    let mut sandbox = Sandbox { session, scene: build_scene() };

    sandbox.look_at(CUP);
    sandbox.report("look at cup");
    sandbox.press(KeyCode::E);
    sandbox.report("pick up cup");

    sandbox.look_at(CUP_SLOT);
    sandbox.report("look at shelf");
    sandbox.press(KeyCode::E);
    sandbox.report("put cup back");

    sandbox.look_at(KEY);
    sandbox.press(KeyCode::Q);
    sandbox.report("store key");

    sandbox.look_at(DRAWER);
    sandbox.press(KeyCode::E);
    sandbox.report("unlock drawer");

    sandbox.look_at(JOURNAL);
    sandbox.press(KeyCode::E);
    sandbox.report("open journal");
    sandbox.press(KeyCode::Tab);
    sandbox.report("close journal");

    sandbox.look_at(DIARY);
    sandbox.press(KeyCode::E);
    sandbox.report("play diary");

    sandbox.look_at(CHAIR);
    sandbox.press(KeyCode::E);
    sandbox.idle(30);
    sandbox.report("sit down");

    sandbox.press(KeyCode::Tab);
    sandbox.idle(30);
    sandbox.report("stand up");

    sandbox.press(KeyCode::Tab);
    sandbox.idle(15);
    sandbox.report("fade diary");

    sandbox.press(KeyCode::Escape);
    sandbox.report("pause");
    let snapshot = sandbox.session.snapshot();
    println!("saved: {}", snapshot.to_json()?);
    sandbox.press(KeyCode::Escape);
    sandbox.report("resume");

    Ok(())
}

fn main() {
    env_logger::init();

    println!("===========================================");
    println!("   Reticle - Interaction Sandbox");
    println!("===========================================");
    println!();

    if let Err(err) = run() {
        log::error!("sandbox failed: {err}");
        std::process::exit(1);
    }
}
