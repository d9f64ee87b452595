//! Session control: the multi-round loop and running statistics.

use tracing::info;

use crate::config::GameConfig;
use crate::errors::GameError;
use crate::feedback::{Announcement, Feedback};
use crate::input::{Key, KeySource};
use crate::round::{RoundController, RoundOutcome};

/// Totals across the rounds of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub games_played: u32,
    pub games_won: u32,
}

impl SessionStats {
    /// Record one finished round.
    ///
    /// Every outcome counts as a played game, including quit-interrupted
    /// rounds; only `Win` counts as won.
    pub fn record(&mut self, outcome: &RoundOutcome) {
        self.games_played += 1;
        if matches!(outcome, RoundOutcome::Win(_)) {
            self.games_won += 1;
        }
    }

    /// Percentage of played games won. Zero when nothing was played yet.
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }
}

/// Runs rounds until the player quits, then shows the final stats.
pub struct SessionController {
    rounds: RoundController,
    stats: SessionStats,
}

impl SessionController {
    pub fn new(config: GameConfig) -> Self {
        Self {
            rounds: RoundController::new(config),
            stats: SessionStats::default(),
        }
    }

    /// Totals recorded so far.
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Main loop: play a round, record it, then wait on the play-again
    /// menu.
    ///
    /// The stats block is announced exactly once, at the moment the
    /// session ends (mid-round quit or menu quit).
    pub fn run<K: KeySource, F: Feedback>(
        &mut self,
        keys: &mut K,
        feedback: &mut F,
    ) -> Result<(), GameError> {
        loop {
            let outcome = self.rounds.play(keys, feedback)?;
            self.stats.record(&outcome);

            if matches!(outcome, RoundOutcome::Quit) {
                if self.stats.games_played > 0 {
                    feedback.announce(Announcement::Stats(self.stats));
                }
                break;
            }

            feedback.announce(Announcement::Menu);
            if !self.menu_wants_replay(keys)? {
                feedback.clear_screen();
                feedback.announce(Announcement::Stats(self.stats));
                break;
            }
        }

        info!(
            games_played = self.stats.games_played,
            games_won = self.stats.games_won,
            "session ended"
        );
        Ok(())
    }

    /// Poll the menu keys: space replays, `q` quits, anything else is
    /// ignored.
    fn menu_wants_replay<K: KeySource>(&self, keys: &mut K) -> Result<bool, GameError> {
        loop {
            match keys.next_key()? {
                Key::Char(' ') => return Ok(true),
                Key::Char(c) if c.eq_ignore_ascii_case(&'q') => return Ok(false),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- SessionStats tests --

    #[test]
    fn test_record_counts_every_outcome() {
        let mut stats = SessionStats::default();
        stats.record(&RoundOutcome::Win(7));
        stats.record(&RoundOutcome::Exhausted);
        stats.record(&RoundOutcome::Quit);
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn test_record_win_increments_both_counters() {
        let mut stats = SessionStats::default();
        stats.record(&RoundOutcome::Win(3));
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn test_win_rate_zero_without_games() {
        assert_eq!(SessionStats::default().win_rate(), 0.0);
    }

    #[test]
    fn test_win_rate_percentage() {
        let mut stats = SessionStats::default();
        stats.record(&RoundOutcome::Win(5));
        stats.record(&RoundOutcome::Exhausted);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }
}
