//! Ambience and music cue timing

use serde::{Deserialize, Serialize};

/// Seconds accumulated toward the next ambience cue
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AmbienceClock {
    pub elapsed: f32,
}

impl AmbienceClock {
    /// Accumulate `dt`; returns true (and restarts) once `interval` is reached
    pub fn advance(&mut self, dt: f32, interval: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed >= interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }
}

/// Music restarts whenever the bank reports idle.
///
/// Not debounced: a bank that still reads idle on the frame after a start
/// gets another start request.
#[inline]
pub fn should_start_music(bank_busy: bool) -> bool {
    !bank_busy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_every_five_seconds() {
        let mut clock = AmbienceClock::default();
        let mut fired = 0;
        // 20 seconds at 0.5s steps (exact in binary)
        for _ in 0..40 {
            if clock.advance(0.5, 5.0) {
                fired += 1;
            }
            assert!(clock.elapsed < 5.0);
        }
        assert_eq!(fired, 4);
    }

    #[test]
    fn test_fires_on_exact_threshold() {
        let mut clock = AmbienceClock { elapsed: 4.0 };
        assert!(clock.advance(1.0, 5.0));
        assert_eq!(clock.elapsed, 0.0);
    }

    #[test]
    fn test_large_step_fires_once() {
        let mut clock = AmbienceClock::default();
        assert!(clock.advance(12.0, 5.0));
        assert_eq!(clock.elapsed, 0.0);
        assert!(!clock.advance(1.0, 5.0));
    }

    #[test]
    fn test_music_starts_only_when_idle() {
        assert!(should_start_music(false));
        assert!(!should_start_music(true));
    }
}
