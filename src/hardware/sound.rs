//! Canned sound effects built from `Tone::play`.

use super::{Clock, Tone};

/// Sound cues emitted by the games. The session maps them to tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Snake ate a fruit.
    Eat,
    /// The run ended.
    GameOver,
}

/// One step of a tone sequence: play, then stay silent for `gap_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub frequency_hz: u32,
    pub duration_ms: u32,
    pub gap_ms: u32,
}

const fn note(frequency_hz: u32, duration_ms: u32, gap_ms: u32) -> Note {
    Note {
        frequency_hz,
        duration_ms,
        gap_ms,
    }
}

/// High pitched "ding".
const EAT: [Note; 1] = [note(2000, 50, 0)];
/// Descending "sad" tones.
const GAME_OVER: [Note; 3] = [note(1000, 150, 50), note(800, 150, 50), note(400, 300, 0)];

impl SoundEffect {
    pub fn notes(&self) -> &'static [Note] {
        match self {
            Self::Eat => &EAT,
            Self::GameOver => &GAME_OVER,
        }
    }
}

/// Play an effect to completion. Blocks for the whole sequence.
pub fn play_effect<T: Tone, C: Clock>(tone: &mut T, clock: &mut C, effect: SoundEffect) {
    tracing::trace!(?effect, "playing sound effect");
    for n in effect.notes() {
        tone.play(n.frequency_hz, n.duration_ms);
        if n.gap_ms > 0 {
            clock.sleep_ms(n.gap_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        tones: Vec<(u32, u32)>,
    }

    impl Tone for Recorder {
        fn play(&mut self, frequency_hz: u32, duration_ms: u32) {
            self.tones.push((frequency_hz, duration_ms));
        }
    }

    struct StillClock(Vec<u32>);

    impl Clock for StillClock {
        fn now_ms(&self) -> u32 {
            0
        }
        fn sleep_ms(&mut self, ms: u32) {
            self.0.push(ms);
        }
    }

    #[test]
    fn test_eat_is_single_ding() {
        let mut rec = Recorder::default();
        let mut clock = StillClock(Vec::new());
        play_effect(&mut rec, &mut clock, SoundEffect::Eat);
        assert_eq!(rec.tones, vec![(2000, 50)]);
        assert!(clock.0.is_empty());
    }

    #[test]
    fn test_game_over_descends_with_gaps() {
        let mut rec = Recorder::default();
        let mut clock = StillClock(Vec::new());
        play_effect(&mut rec, &mut clock, SoundEffect::GameOver);
        assert_eq!(rec.tones, vec![(1000, 150), (800, 150), (400, 300)]);
        assert_eq!(clock.0, vec![50, 50]);
    }

    #[test]
    fn test_effects_never_use_silent_frequency() {
        for effect in [SoundEffect::Eat, SoundEffect::GameOver] {
            assert!(effect.notes().iter().all(|n| n.frequency_hz > 0));
        }
    }
}
