//! Diary fade timer and a silent playback backend.

use super::DiaryAudio;
use crate::world::EntityId;

/// Volume removed per fade interval.
pub const DEFAULT_FADE_STEP: f32 = 0.1;
/// Seconds between fade steps.
pub const DEFAULT_FADE_INTERVAL: f32 = 0.05;

/// Outcome of advancing a fade by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FadeStep {
    /// No fade running
    Idle,
    /// Still audible at this volume
    Faded(f32),
    /// Reached zero this tick; playback should stop
    Finished,
}

/// Steps volume down by a fixed amount every fixed interval.
#[derive(Debug, Clone, PartialEq)]
pub struct DiaryFade {
    step: f32,
    interval: f32,
    active: bool,
    volume: f32,
    /// Time accumulated toward the next step
    timer: f32,
}

impl Default for DiaryFade {
    fn default() -> Self {
        Self::new(DEFAULT_FADE_STEP, DEFAULT_FADE_INTERVAL)
    }
}

impl DiaryFade {
    pub fn new(step: f32, interval: f32) -> Self {
        Self {
            step,
            interval,
            active: false,
            volume: 1.0,
            timer: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Start fading from `volume`. Restarting an active fade keeps its timer.
    pub fn begin(&mut self, volume: f32) {
        if !self.active {
            self.timer = 0.0;
            self.volume = volume.clamp(0.0, 1.0);
        }
        self.active = true;
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.volume = 1.0;
        self.timer = 0.0;
    }

    /// Advance on unscaled time.
    pub fn advance(&mut self, unscaled_dt: f32) -> FadeStep {
        if !self.active {
            return FadeStep::Idle;
        }
        self.timer += unscaled_dt.max(0.0);
        while self.timer >= self.interval && self.volume > 0.0 {
            self.timer -= self.interval;
            self.volume = (self.volume - self.step).max(0.0);
        }
        if self.volume <= 0.0 {
            self.active = false;
            self.timer = 0.0;
            self.volume = 1.0;
            return FadeStep::Finished;
        }
        FadeStep::Faded(self.volume)
    }
}

/// Playback backend that only tracks state.
#[derive(Debug, Clone)]
pub struct SilentAudio {
    playing: Option<EntityId>,
    volume: f32,
    /// Number of `play_diary` calls
    pub plays: u32,
}

impl Default for SilentAudio {
    fn default() -> Self {
        Self {
            playing: None,
            volume: 1.0,
            plays: 0,
        }
    }
}

impl SilentAudio {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiaryAudio for SilentAudio {
    fn play_diary(&mut self, diary: EntityId) {
        self.playing = Some(diary);
        self.volume = 1.0;
        self.plays += 1;
    }

    fn set_diary_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn stop_diary(&mut self) {
        self.playing = None;
        self.volume = 1.0;
    }

    fn playing_diary(&self) -> Option<EntityId> {
        self.playing
    }

    fn diary_volume(&self) -> f32 {
        self.volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_fade_does_nothing() {
        let mut fade = DiaryFade::default();
        assert_eq!(fade.advance(1.0), FadeStep::Idle);
    }

    #[test]
    fn test_fade_steps_on_interval() {
        let mut fade = DiaryFade::new(0.25, 0.5);
        fade.begin(1.0);

        assert_eq!(fade.advance(0.25), FadeStep::Faded(1.0));
        assert_eq!(fade.advance(0.25), FadeStep::Faded(0.75));
        assert_eq!(fade.advance(0.5), FadeStep::Faded(0.5));
        assert_eq!(fade.advance(1.0), FadeStep::Finished);
        assert!(!fade.is_active());
        assert_eq!(fade.advance(1.0), FadeStep::Idle);
    }

    #[test]
    fn test_cancel_resets_volume() {
        let mut fade = DiaryFade::new(0.5, 0.5);
        fade.begin(1.0);
        fade.advance(0.5);
        fade.cancel();
        assert!(!fade.is_active());
        assert_eq!(fade.volume(), 1.0);
    }

    #[test]
    fn test_silent_audio_tracks_playback() {
        let mut audio = SilentAudio::new();
        audio.play_diary(EntityId(5));
        audio.set_diary_volume(0.4);
        assert_eq!(audio.playing_diary(), Some(EntityId(5)));
        assert_eq!(audio.diary_volume(), 0.4);
        audio.stop_diary();
        assert_eq!(audio.playing_diary(), None);
        assert_eq!(audio.plays, 1);
    }
}
