//! Interaction Configuration
//!
//! Tunables for look range, examination, sensitivity, zoom, diary fading and
//! the activation-item rule. Loaded from JSON; every field has a default, so
//! a partial file only overrides what it names.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::camera::LayerMask;
use crate::camera::sensitivity::{DEFAULT_SENSITIVITY, DEFAULT_SMOOTHING_RATE};
use crate::camera::zoom::{DEFAULT_FOV, DEFAULT_FOV_LERP_RATE, DEFAULT_ZOOM_FOV};
use crate::audio::{DEFAULT_FADE_INTERVAL, DEFAULT_FADE_STEP};
use crate::error::{InteractionError, Result};
use crate::input::axis_button::{DEFAULT_REPEAT_INTERVAL, DEFAULT_THRESHOLD};

/// Where a required activation item may come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationSource {
    /// Hand first, then inventory
    #[default]
    HandOrInventory,
    HandOnly,
    InventoryOnly,
}

impl ActivationSource {
    pub fn allows_hand(self) -> bool {
        self != ActivationSource::InventoryOnly
    }

    pub fn allows_inventory(self) -> bool {
        self != ActivationSource::HandOnly
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Global spatial-query cutoff (meters)
    pub max_look_distance: f32,
    pub interactable_layers: LayerMask,
    pub put_back_layers: LayerMask,

    /// Radians of held-object rotation per pointer unit
    pub examine_rotation_speed: f32,
    /// Pointer deltas at or below this magnitude do not rotate
    pub examine_dead_zone: f32,

    pub base_sensitivity: Vec2,
    pub sensitivity_smoothing_rate: f32,

    /// Degrees
    pub zoom_fov: f32,
    /// Degrees
    pub default_fov: f32,
    pub fov_lerp_rate: f32,
    /// Sensitivity multiplier while zoomed
    pub zoom_sensitivity_scale: f32,

    pub diary_fade_step: f32,
    /// Seconds
    pub diary_fade_interval: f32,

    pub activation_source: ActivationSource,

    pub menu_stick_threshold: f32,
    /// Seconds
    pub menu_repeat_interval: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            max_look_distance: 3.0,
            interactable_layers: LayerMask::INTERACTABLE,
            put_back_layers: LayerMask::PUT_BACK,
            examine_rotation_speed: 0.01,
            examine_dead_zone: 0.05,
            base_sensitivity: DEFAULT_SENSITIVITY,
            sensitivity_smoothing_rate: DEFAULT_SMOOTHING_RATE,
            zoom_fov: DEFAULT_ZOOM_FOV,
            default_fov: DEFAULT_FOV,
            fov_lerp_rate: DEFAULT_FOV_LERP_RATE,
            zoom_sensitivity_scale: 0.5,
            diary_fade_step: DEFAULT_FADE_STEP,
            diary_fade_interval: DEFAULT_FADE_INTERVAL,
            activation_source: ActivationSource::HandOrInventory,
            menu_stick_threshold: DEFAULT_THRESHOLD,
            menu_repeat_interval: DEFAULT_REPEAT_INTERVAL,
        }
    }
}

impl InteractionConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the interaction layer cannot work with.
    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, value: f32) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(InteractionError::invalid_config(format!(
                    "{name} must be positive, got {value}"
                )))
            }
        }

        positive("max_look_distance", self.max_look_distance)?;
        positive("examine_rotation_speed", self.examine_rotation_speed)?;
        positive("sensitivity_smoothing_rate", self.sensitivity_smoothing_rate)?;
        positive("zoom_fov", self.zoom_fov)?;
        positive("default_fov", self.default_fov)?;
        positive("fov_lerp_rate", self.fov_lerp_rate)?;
        positive("zoom_sensitivity_scale", self.zoom_sensitivity_scale)?;
        positive("diary_fade_step", self.diary_fade_step)?;
        positive("diary_fade_interval", self.diary_fade_interval)?;
        positive("menu_repeat_interval", self.menu_repeat_interval)?;

        if !(self.examine_dead_zone >= 0.0) {
            return Err(InteractionError::invalid_config("examine_dead_zone must not be negative"));
        }
        if self.base_sensitivity.cmple(Vec2::ZERO).any() || !self.base_sensitivity.is_finite() {
            return Err(InteractionError::invalid_config("base_sensitivity must be positive"));
        }
        if self.zoom_fov >= self.default_fov {
            return Err(InteractionError::invalid_config(format!(
                "zoom_fov ({}) must be narrower than default_fov ({})",
                self.zoom_fov, self.default_fov
            )));
        }
        if !(self.menu_stick_threshold > 0.0 && self.menu_stick_threshold < 1.0) {
            return Err(InteractionError::invalid_config(format!(
                "menu_stick_threshold must be in (0, 1), got {}",
                self.menu_stick_threshold
            )));
        }
        if self.interactable_layers.is_empty() {
            return Err(InteractionError::invalid_config("interactable_layers is empty"));
        }
        Ok(())
    }
}
