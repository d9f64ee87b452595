//! Tone synthesis and playback for the game's audio cues.

use std::time::Duration;

use rodio::{OutputStream, OutputStreamHandle, Sink};
use tracing::warn;

use crate::errors::AudioError;
use crate::feedback::{HintDirection, ToneKind};

const SAMPLE_RATE: u32 = 44_100;
const AMPLITUDE: f32 = 0.125;

// Frequencies in Hz with per-note durations in milliseconds.
const WIN_NOTES: [(f32, u64); 3] = [(523.25, 150), (659.25, 150), (783.99, 150)]; // C5 E5 G5
const LOSE_NOTES: [(f32, u64); 3] = [(392.00, 150), (349.23, 150), (329.63, 150)]; // G4 F4 E4
const HINT_LOW_NOTE: [(f32, u64); 1] = [(440.00, 100)]; // A4
const HINT_HIGH_NOTE: [(f32, u64); 1] = [(466.16, 100)]; // Bb4

/// Notes for a cue, in play order.
pub fn notes(kind: ToneKind) -> &'static [(f32, u64)] {
    match kind {
        ToneKind::Win => &WIN_NOTES,
        ToneKind::Lose => &LOSE_NOTES,
        ToneKind::Hint(HintDirection::Low) => &HINT_LOW_NOTE,
        ToneKind::Hint(HintDirection::High) => &HINT_HIGH_NOTE,
    }
}

/// Fixed-length mono sine wave.
#[derive(Debug, Clone)]
pub struct SineTone {
    frequency: f32,
    sample_rate: u32,
    frame: u64,
    total_frames: u64,
}

impl SineTone {
    pub fn new(frequency: f32, duration_ms: u64) -> Self {
        Self {
            frequency,
            sample_rate: SAMPLE_RATE,
            frame: 0,
            total_frames: SAMPLE_RATE as u64 * duration_ms / 1_000,
        }
    }
}

impl Iterator for SineTone {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.frame >= self.total_frames {
            return None;
        }
        let t = self.frame as f32 / self.sample_rate as f32;
        let sample = (2.0 * std::f32::consts::PI * self.frequency * t).sin() * AMPLITUDE;
        self.frame += 1;
        Some(sample)
    }
}

impl rodio::Source for SineTone {
    fn current_frame_len(&self) -> Option<usize> {
        Some(self.total_frames.saturating_sub(self.frame) as usize)
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(Duration::from_millis(
            self.total_frames * 1_000 / self.sample_rate as u64,
        ))
    }
}

/// Plays tone sequences on the default audio device.
///
/// Built once at startup. When no device is available every `play` is a
/// silent no-op; the game runs fine without sound.
pub struct ToneMixer {
    output: Option<(OutputStream, OutputStreamHandle)>,
}

impl ToneMixer {
    pub fn new() -> Self {
        match OutputStream::try_default().map_err(AudioError::from) {
            Ok((stream, handle)) => Self {
                output: Some((stream, handle)),
            },
            Err(e) => {
                warn!(error = %e, "tones disabled");
                Self { output: None }
            }
        }
    }

    /// Play a cue, blocking until the last note finishes. Failures are
    /// logged and swallowed.
    pub fn play(&self, kind: ToneKind) {
        if let Err(e) = self.try_play(kind) {
            warn!(error = %e, "skipping tone");
        }
    }

    fn try_play(&self, kind: ToneKind) -> Result<(), AudioError> {
        let Some((_, handle)) = &self.output else {
            return Ok(());
        };
        let sink = Sink::try_new(handle)?;
        for &(frequency, duration_ms) in notes(kind) {
            sink.append(SineTone::new(frequency, duration_ms));
        }
        sink.sleep_until_end();
        Ok(())
    }
}

impl Default for ToneMixer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rodio::Source;

    // -- SineTone tests --

    #[test]
    fn test_sine_tone_frame_count() {
        // 150ms at 44.1kHz
        assert_eq!(SineTone::new(440.0, 150).count(), 6_615);
    }

    #[test]
    fn test_sine_tone_starts_at_zero_and_stays_bounded() {
        let samples: Vec<f32> = SineTone::new(523.25, 150).collect();
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().all(|s| s.abs() <= AMPLITUDE));
    }

    #[test]
    fn test_sine_tone_source_metadata() {
        let tone = SineTone::new(440.0, 100);
        assert_eq!(tone.channels(), 1);
        assert_eq!(tone.sample_rate(), 44_100);
        assert_eq!(tone.total_duration(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn test_current_frame_len_shrinks() {
        let mut tone = SineTone::new(440.0, 100);
        let before = tone.current_frame_len().unwrap();
        tone.next();
        assert_eq!(tone.current_frame_len().unwrap(), before - 1);
    }

    // -- note table tests --

    #[test]
    fn test_win_is_a_rising_major_triad() {
        let win = notes(ToneKind::Win);
        assert_eq!(win, &[(523.25, 150), (659.25, 150), (783.99, 150)]);
    }

    #[test]
    fn test_lose_is_a_falling_sequence() {
        let lose = notes(ToneKind::Lose);
        assert_eq!(lose, &[(392.00, 150), (349.23, 150), (329.63, 150)]);
    }

    #[test]
    fn test_hint_notes_differ_by_direction() {
        assert_eq!(notes(ToneKind::Hint(HintDirection::Low)), &[(440.00, 100)]);
        assert_eq!(notes(ToneKind::Hint(HintDirection::High)), &[(466.16, 100)]);
    }

    // -- ToneMixer tests --

    #[test]
    fn test_play_without_device_is_noop() {
        let mixer = ToneMixer { output: None };
        mixer.play(ToneKind::Win);
        mixer.play(ToneKind::Hint(HintDirection::Low));
    }
}
