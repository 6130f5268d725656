//! Audio Module
//!
//! Audio-diary playback contract and the fade-out timer that runs on
//! unscaled time, so a diary keeps fading while the game is paused.

pub mod diary;

pub use diary::{DEFAULT_FADE_INTERVAL, DEFAULT_FADE_STEP, DiaryFade, FadeStep, SilentAudio};

use crate::world::EntityId;

/// Diary playback collaborator.
pub trait DiaryAudio {
    fn play_diary(&mut self, diary: EntityId);
    fn set_diary_volume(&mut self, volume: f32);
    fn stop_diary(&mut self);
    fn playing_diary(&self) -> Option<EntityId>;
    fn diary_volume(&self) -> f32;
}
