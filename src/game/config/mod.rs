//! Config Module
//!
//! Centralized configuration for interaction tuning.

pub mod interaction_config;

pub use interaction_config::{ActivationSource, InteractionConfig};
