//! Event seam between game logic and presentation.
//!
//! Controllers emit typed events; the terminal front-end (and the test
//! recorders) decide how to render them.

use crate::session::SessionStats;

/// Whether an incorrect guess fell below or above the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintDirection {
    Low,
    High,
}

/// Audio cue categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneKind {
    Win,
    Lose,
    Hint(HintDirection),
}

/// Everything the game ever tells the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    RoundStart { min: u32, max: u32, attempts: u32 },
    AttemptsRemaining(u32),
    ValidationError,
    RangeError { min: u32, max: u32 },
    Win(u32),
    Hint(HintDirection),
    Exhausted(u32),
    Quit,
    Menu,
    Stats(SessionStats),
}

/// Presentation sink for game events.
///
/// All three methods are fire-and-forget: failures stay inside the
/// implementation and never feed back into game state.
pub trait Feedback {
    /// Render a message for the player.
    fn announce(&mut self, event: Announcement);

    /// Play an audible cue. Blocking until the cue finishes is allowed.
    fn tone(&mut self, kind: ToneKind);

    /// Best-effort screen clear.
    fn clear_screen(&mut self);
}
