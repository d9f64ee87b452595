//! Domain error types for hilo.
//!
//! Typed errors at module boundaries keep terminal failures, guess
//! validation, and audio problems distinguishable at their handling sites.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Terminal errors
// ---------------------------------------------------------------------------

/// Unrecoverable terminal I/O failures.
///
/// Embedded in `anyhow::Error` at the binary boundary so `main` can
/// downcast: `e.downcast_ref::<GameError>()`. By the time one of these
/// surfaces, the raw-mode guard has already restored the terminal.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to toggle terminal raw mode: {0}")]
    RawMode(std::io::Error),

    #[error("failed to read key event: {0}")]
    ReadKey(std::io::Error),
}

// ---------------------------------------------------------------------------
// Guess validation
// ---------------------------------------------------------------------------

/// Why a submitted guess was rejected.
///
/// Recoverable by construction: the editor reports the problem, clears the
/// buffer, and keeps editing. Never propagated past the editor loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("input is not a number")]
    NotNumeric,

    #[error("number is outside the configured range")]
    OutOfRange,
}

// ---------------------------------------------------------------------------
// Audio errors
// ---------------------------------------------------------------------------

/// Audio device and playback failures.
///
/// Non-fatal everywhere: callers log at `warn` and the game continues
/// without sound.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio output unavailable: {0}")]
    Stream(#[from] rodio::StreamError),

    #[error("tone playback failed: {0}")]
    Play(#[from] rodio::PlayError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    // -- GameError tests --

    #[test]
    fn test_game_error_display() {
        let e = GameError::RawMode(io::Error::other("ioctl refused"));
        assert_eq!(
            e.to_string(),
            "failed to toggle terminal raw mode: ioctl refused"
        );
    }

    #[test]
    fn test_game_error_downcast() {
        let anyhow_err: anyhow::Error = GameError::ReadKey(io::Error::other("boom")).into();
        let downcasted = anyhow_err.downcast_ref::<GameError>();
        assert!(matches!(downcasted, Some(GameError::ReadKey(_))));
    }

    // -- GuessError tests --

    #[test]
    fn test_guess_error_display() {
        assert_eq!(GuessError::NotNumeric.to_string(), "input is not a number");
        assert_eq!(
            GuessError::OutOfRange.to_string(),
            "number is outside the configured range"
        );
    }

    #[test]
    fn test_guess_error_equality() {
        assert_eq!(GuessError::NotNumeric, GuessError::NotNumeric);
        assert_ne!(GuessError::NotNumeric, GuessError::OutOfRange);
    }

    // -- AudioError tests --

    #[test]
    fn test_audio_error_from_stream_error() {
        let e = AudioError::from(rodio::StreamError::NoDevice);
        assert!(e.to_string().starts_with("audio output unavailable"));
    }
}
