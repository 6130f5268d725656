//! Interaction layer: the per-tick state machine, its highlight policy and
//! the persisted snapshot.

mod dispatch;
mod dock;
mod examine;
pub mod highlight;
pub mod machine;
pub mod mode;
pub mod persist;

pub use highlight::{HighlightDecision, HighlightQuery, LookedAt, TargetInfo};
pub use machine::{Collaborators, HeldEntity, InteractionStateMachine};
pub use mode::{DockAction, DockSession, InteractionMode};
pub use persist::InteractionSnapshot;
