//! Cue-based audio
//!
//! The gameplay screen plays named cues from a sound bank and asks whether the
//! bank is busy. Backends implement `AudioBackend`; `AudioMixer` applies the
//! player's volume settings on top.

use std::collections::HashMap;

use crate::consts::{AMBIENCE_CUE, MUSIC_CUE};
use crate::settings::Settings;

/// Cues the gameplay screen plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Looping background track, restarted whenever the bank goes idle
    Music,
    /// Periodic environmental sound
    Ambience,
}

impl Cue {
    pub fn name(&self) -> &'static str {
        match self {
            Cue::Music => MUSIC_CUE,
            Cue::Ambience => AMBIENCE_CUE,
        }
    }
}

/// Sound bank + engine collaborator
pub trait AudioBackend {
    /// Any cue in the bank is currently playing
    fn is_busy(&self) -> bool;
    /// Start a cue by name at the given volume (0.0 - 1.0)
    fn play_cue(&mut self, name: &str, volume: f32);
    /// Pump the engine; called once per active frame
    fn update(&mut self);
}

/// Audio manager for the gameplay screen
pub struct AudioMixer {
    backend: Box<dyn AudioBackend>,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl AudioMixer {
    pub fn new(backend: Box<dyn AudioBackend>, settings: &Settings) -> Self {
        let mut mixer = Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
        };
        mixer.apply_settings(settings);
        mixer
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.master_volume = settings.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = settings.music_volume.clamp(0.0, 1.0);
        self.muted = settings.muted;
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume for a cue
    fn effective_volume(&self, cue: Cue) -> f32 {
        if self.muted {
            return 0.0;
        }
        let channel = match cue {
            Cue::Music => self.music_volume,
            Cue::Ambience => self.sfx_volume,
        };
        self.master_volume * channel
    }

    /// Play a cue; silent cues are skipped entirely
    pub fn play(&mut self, cue: Cue) {
        let vol = self.effective_volume(cue);
        if vol.is_nan() || vol <= 0.0 {
            return;
        }
        log::debug!("Playing cue {} at volume {:.2}", cue.name(), vol);
        self.backend.play_cue(cue.name(), vol);
    }

    pub fn is_busy(&self) -> bool {
        self.backend.is_busy()
    }

    pub fn update(&mut self) {
        self.backend.update();
    }
}

struct PlayingCue {
    name: String,
    /// Updates left before the bank reports it
    pending: u32,
    /// Updates left until it finishes
    remaining: u32,
}

/// In-memory sound bank driven by `update` calls
///
/// Each cue lasts a fixed number of updates. `latency` delays the moment a
/// started cue counts as busy, like a real engine that registers playback a
/// frame or more after the request.
pub struct SimulatedBank {
    cue_lengths: HashMap<String, u32>,
    latency: u32,
    playing: Vec<PlayingCue>,
    /// Every cue started, in order
    pub history: Vec<String>,
}

impl SimulatedBank {
    pub fn new(latency: u32) -> Self {
        Self {
            cue_lengths: HashMap::new(),
            latency,
            playing: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Register a cue with its length in updates
    pub fn with_cue(mut self, name: &str, updates: u32) -> Self {
        self.cue_lengths.insert(name.to_string(), updates);
        self
    }

    pub fn count_played(&self, name: &str) -> usize {
        self.history.iter().filter(|n| n.as_str() == name).count()
    }
}

impl AudioBackend for SimulatedBank {
    fn is_busy(&self) -> bool {
        self.playing.iter().any(|c| c.pending == 0)
    }

    fn play_cue(&mut self, name: &str, _volume: f32) {
        let Some(&length) = self.cue_lengths.get(name) else {
            log::warn!("Unknown cue `{name}`");
            return;
        };
        self.history.push(name.to_string());
        self.playing.push(PlayingCue {
            name: name.to_string(),
            pending: self.latency,
            remaining: length,
        });
    }

    fn update(&mut self) {
        for cue in &mut self.playing {
            if cue.pending > 0 {
                cue.pending -= 1;
            } else {
                cue.remaining = cue.remaining.saturating_sub(1);
            }
        }
        self.playing.retain(|c| {
            if c.pending == 0 && c.remaining == 0 {
                log::trace!("Cue {} finished", c.name);
                false
            } else {
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Backend that records cue volumes through a shared handle
    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<(String, f32)>>>);

    impl AudioBackend for Recorder {
        fn is_busy(&self) -> bool {
            false
        }
        fn play_cue(&mut self, name: &str, volume: f32) {
            self.0.borrow_mut().push((name.to_string(), volume));
        }
        fn update(&mut self) {}
    }

    #[test]
    fn test_mixer_applies_channel_volume() {
        let recorder = Recorder::default();
        let settings = Settings {
            master_volume: 0.5,
            music_volume: 0.5,
            sfx_volume: 1.0,
            ..Default::default()
        };
        let mut mixer = AudioMixer::new(Box::new(recorder.clone()), &settings);
        mixer.play(Cue::Music);
        mixer.play(Cue::Ambience);
        let played = recorder.0.borrow();
        assert_eq!(played[0], ("Music".to_string(), 0.25));
        assert_eq!(played[1], ("Ambience".to_string(), 0.5));
    }

    #[test]
    fn test_muted_mixer_plays_nothing() {
        let recorder = Recorder::default();
        let mut mixer = AudioMixer::new(Box::new(recorder.clone()), &Settings::default());
        mixer.set_muted(true);
        mixer.play(Cue::Music);
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn test_mixer_skips_nan_volume() {
        let recorder = Recorder::default();
        let settings = Settings {
            music_volume: f32::NAN,
            ..Default::default()
        };
        let mut mixer = AudioMixer::new(Box::new(recorder.clone()), &settings);
        mixer.play(Cue::Music);
        mixer.play(Cue::Ambience);
        assert_eq!(*recorder.0.borrow(), vec![("Ambience".to_string(), 0.8)]);
    }

    #[test]
    fn test_simulated_bank_busy_until_cue_ends() {
        let mut bank = SimulatedBank::new(0).with_cue("Music", 3);
        assert!(!bank.is_busy());
        bank.play_cue("Music", 1.0);
        assert!(bank.is_busy());
        bank.update();
        bank.update();
        assert!(bank.is_busy());
        bank.update();
        assert!(!bank.is_busy());
    }

    #[test]
    fn test_latency_delays_busy() {
        let mut bank = SimulatedBank::new(1).with_cue("Music", 2);
        bank.play_cue("Music", 1.0);
        assert!(!bank.is_busy());
        bank.update();
        assert!(bank.is_busy());
    }

    #[test]
    fn test_unknown_cue_ignored() {
        let mut bank = SimulatedBank::new(0);
        bank.play_cue("Thunder", 1.0);
        assert_eq!(bank.count_played("Thunder"), 0);
        assert!(!bank.is_busy());
    }
}
