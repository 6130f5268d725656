//! Game Module
//!
//! The interaction layer built on top of the engine: configuration, the
//! interaction state machine, HUD data and the session that ties them to the
//! input router and the collaborators.

pub mod config;
pub mod hud;
pub mod interaction;
pub mod session;

pub use config::{ActivationSource, InteractionConfig};
pub use hud::{Hint, HudSink, HudSnapshot, LogHud};
pub use interaction::{
    Collaborators, DockAction, DockSession, HeldEntity, InteractionMode, InteractionSnapshot,
    InteractionStateMachine,
};
pub use session::{Session, SessionBuilder};
