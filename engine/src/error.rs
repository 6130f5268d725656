//! Error types
//!
//! Boot-time and load-time failures. Nothing inside a tick returns these;
//! per-tick code logs and does nothing instead.

use thiserror::Error;

use crate::world::EntityId;

pub type Result<T> = std::result::Result<T, InteractionError>;

#[derive(Debug, Error)]
pub enum InteractionError {
    #[error("missing collaborator: {name}")]
    MissingCollaborator { name: &'static str },

    #[error("entity {id} is not registered")]
    UnknownEntity { id: EntityId },

    #[error("put-back slot {id} is not registered")]
    UnknownSlot { id: EntityId },

    #[error("entity {id} cannot be held")]
    NotHoldable { id: EntityId },

    #[error("entity {id} is not a dock")]
    NotADock { id: EntityId },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("failed to parse JSON: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    #[error("i/o error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl InteractionError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        InteractionError::InvalidConfig { message: message.into() }
    }
}
