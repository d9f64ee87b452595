//! Round control: secret selection and the attempt loop.

use rand::Rng;
use tracing::debug;

use crate::config::GameConfig;
use crate::editor::{GuessEditor, GuessOutcome};
use crate::errors::GameError;
use crate::feedback::{Announcement, Feedback, HintDirection, ToneKind};
use crate::input::KeySource;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The secret was guessed; carries the winning guess.
    Win(u32),
    /// The attempt budget ran out.
    Exhausted,
    /// The player pressed the quit sentinel mid-round.
    Quit,
}

/// Plays single rounds of the guessing game.
pub struct RoundController {
    config: GameConfig,
}

impl RoundController {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Draw a secret uniformly from the configured range.
    pub fn draw_secret(&self) -> u32 {
        rand::rng().random_range(self.config.min_number..=self.config.max_number)
    }

    /// Play one round with a freshly drawn secret.
    pub fn play<K: KeySource, F: Feedback>(
        &self,
        keys: &mut K,
        feedback: &mut F,
    ) -> Result<RoundOutcome, GameError> {
        self.play_with_secret(self.draw_secret(), keys, feedback)
    }

    /// Play one round against a fixed secret.
    ///
    /// Exhaustion and quitting are normal outcomes, not errors; only
    /// terminal I/O failures surface as `Err`.
    pub fn play_with_secret<K: KeySource, F: Feedback>(
        &self,
        secret: u32,
        keys: &mut K,
        feedback: &mut F,
    ) -> Result<RoundOutcome, GameError> {
        debug!(secret, "round started");

        feedback.clear_screen();
        feedback.announce(Announcement::RoundStart {
            min: self.config.min_number,
            max: self.config.max_number,
            attempts: self.config.max_attempts,
        });

        let mut attempts = self.config.max_attempts;
        while attempts > 0 {
            feedback.announce(Announcement::AttemptsRemaining(attempts));

            let mut editor = GuessEditor::new(self.config);
            let guess = match editor.read_guess(keys, feedback)? {
                GuessOutcome::Accepted(guess) => guess,
                GuessOutcome::Quit => return Ok(RoundOutcome::Quit),
            };

            if guess == secret {
                feedback.clear_screen();
                feedback.tone(ToneKind::Win);
                feedback.announce(Announcement::Win(secret));
                return Ok(RoundOutcome::Win(guess));
            }

            let direction = if guess < secret {
                HintDirection::Low
            } else {
                HintDirection::High
            };
            feedback.tone(ToneKind::Hint(direction));
            feedback.announce(Announcement::Hint(direction));

            attempts -= 1;
            if attempts == 0 {
                feedback.clear_screen();
                feedback.tone(ToneKind::Lose);
                feedback.announce(Announcement::Exhausted(secret));
            }
        }

        Ok(RoundOutcome::Exhausted)
    }
}
