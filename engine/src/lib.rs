//! Reticle Engine Library
//!
//! Run-time core of a first-person "examine and manipulate" game: frame-stamped
//! virtual input, look-target resolution and the interaction state machine
//! that decides what the player may do with what they are looking at.
//!
//! # Modules
//!
//! - [`input`] - Raw keyboard/mouse/gamepad state, virtual buttons and axes, winit adapter
//! - [`camera`] - Look-target resolution, reference raycasting, sensitivity and zoom
//! - [`world`] - Interactable capability trait, props, put-back slots, registry
//! - [`inventory`] - Inventory contract and in-memory ledger
//! - [`player`] - Player-motion contract and kinematic rig
//! - [`audio`] - Audio-diary contract and fade timer
//! - [`game`] - Highlight policy, interaction state machine, HUD and session
//!
//! # Example
//!
//! ```ignore
//! use reticle_engine::game::Session;
//! use reticle_engine::camera::ColliderScene;
//!
//! let mut session = Session::builder()
//!     .world(world)
//!     .inventory(Ledger::new())
//!     .motion(MotionRig::new())
//!     .audio(SilentAudio::new())
//!     .hud(LogHud::default())
//!     .build()?;
//!
//! // Host event loop
//! session.handle_window_event(&event);
//! session.tick(dt, &scene);
//! ```

pub mod audio;
pub mod camera;
pub mod error;
pub mod input;
pub mod inventory;
pub mod player;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use error::{InteractionError, Result};
// Re-export commonly used input types
pub use input::{InputAction, InputRouter, InputState, KeyCode, MouseButton};
// Re-export world types for convenience
pub use world::{EntityId, Interactable, InteractableKind, World};
