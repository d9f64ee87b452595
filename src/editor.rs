//! Keystroke-level editor that assembles and validates a numeric guess.

use std::io::{self, Write};

use crate::config::GameConfig;
use crate::errors::{GameError, GuessError};
use crate::feedback::{Announcement, Feedback};
use crate::input::{Key, KeySource};
use crate::tui::{CYAN, RESET, WHITE};

/// Result of feeding one keystroke to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Still collecting characters.
    Editing,
    /// Submit failed validation; the buffer was cleared.
    Rejected(GuessError),
    /// A validated guess within the configured range.
    Accepted(u32),
    /// The quit sentinel was pressed.
    Quit,
}

/// Final result of an interactive guess read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Accepted(u32),
    Quit,
}

/// Assembles digits into a guess, one keystroke at a time.
///
/// [`GuessEditor::feed`] is the pure state transition; [`GuessEditor::read_guess`]
/// drives it against a key source and repaints the prompt echo that raw
/// mode suppresses. A fresh editor is created for every guess.
pub struct GuessEditor {
    config: GameConfig,
    buffer: String,
}

impl GuessEditor {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            buffer: String::new(),
        }
    }

    /// Digits typed so far.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Feed one keystroke. No I/O.
    ///
    /// Priority: quit sentinel, backspace, submit, digit append, ignore.
    pub fn feed(&mut self, key: Key) -> Step {
        match key {
            Key::Char(c) if c.eq_ignore_ascii_case(&'x') => {
                // Quit wins over everything and discards partial input.
                self.buffer.clear();
                Step::Quit
            }
            Key::Backspace => {
                self.buffer.pop();
                Step::Editing
            }
            Key::Enter => self.submit(),
            Key::Char(c) if c.is_ascii_digit() && self.buffer.len() < self.config.digit_width() => {
                self.buffer.push(c);
                Step::Editing
            }
            _ => Step::Editing,
        }
    }

    fn submit(&mut self) -> Step {
        if self.buffer.is_empty() {
            return Step::Editing;
        }
        if !self.buffer.chars().all(|c| c.is_ascii_digit()) {
            self.buffer.clear();
            return Step::Rejected(GuessError::NotNumeric);
        }
        // An all-digit buffer can still overflow u32 with a wide enough
        // configured maximum; any such value is out of range.
        let parsed = match self.buffer.parse::<u32>() {
            Ok(n) => n,
            Err(_) => {
                self.buffer.clear();
                return Step::Rejected(GuessError::OutOfRange);
            }
        };
        if parsed < self.config.min_number || parsed > self.config.max_number {
            self.buffer.clear();
            return Step::Rejected(GuessError::OutOfRange);
        }
        Step::Accepted(parsed)
    }

    /// Read one validated guess interactively.
    ///
    /// Repaints the prompt and buffered digits before every keystroke,
    /// announces rejects through `feedback`, and loops until a guess is
    /// accepted or the player quits.
    pub fn read_guess<K: KeySource, F: Feedback>(
        &mut self,
        keys: &mut K,
        feedback: &mut F,
    ) -> Result<GuessOutcome, GameError> {
        loop {
            self.paint_prompt();
            let key = keys.next_key()?;
            match self.feed(key) {
                Step::Editing => {
                    // Submitting an empty buffer re-prompts on a fresh line.
                    if key == Key::Enter {
                        print!("\r\n");
                        io::stdout().flush().ok();
                    }
                }
                Step::Rejected(err) => {
                    print!("\r\n");
                    io::stdout().flush().ok();
                    feedback.announce(match err {
                        GuessError::NotNumeric => Announcement::ValidationError,
                        GuessError::OutOfRange => Announcement::RangeError {
                            min: self.config.min_number,
                            max: self.config.max_number,
                        },
                    });
                }
                Step::Accepted(guess) => {
                    print!("\r\n");
                    io::stdout().flush().ok();
                    return Ok(GuessOutcome::Accepted(guess));
                }
                Step::Quit => {
                    print!("\r\n");
                    io::stdout().flush().ok();
                    feedback.announce(Announcement::Quit);
                    return Ok(GuessOutcome::Quit);
                }
            }
        }
    }

    fn paint_prompt(&self) {
        print!(
            "\r\x1b[K{CYAN}Enter your guess ({}-{}){WHITE}: {}{RESET}",
            self.config.min_number, self.config.max_number, self.buffer
        );
        io::stdout().flush().ok();
    }
}

#[cfg(test)]
impl GuessEditor {
    /// Put arbitrary text into the buffer, bypassing `feed`'s digit filter.
    fn seed(&mut self, text: &str) {
        self.buffer = text.to_string();
    }
}
