//! Terminal presentation: ANSI constants and the colored feedback renderer.

use std::io::{self, Write};

use crate::audio::ToneMixer;
use crate::feedback::{Announcement, Feedback, HintDirection, ToneKind};

// ============================================================================
// ANSI Escape Sequences
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const CYAN: &str = "\x1b[36m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const RED: &str = "\x1b[31m";
pub const BLUE: &str = "\x1b[34m";
pub const WHITE: &str = "\x1b[97m";
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

// ============================================================================
// Feedback renderer
// ============================================================================

/// Render an announcement as colored terminal text, trailing newline
/// included.
fn render(event: Announcement) -> String {
    match event {
        Announcement::RoundStart { min, max, attempts } => format!(
            "\n{GREEN}=== New Game ==={RESET}\n\
             {YELLOW}I'm thinking of a number between {min} and {max}{RESET}\n\
             {YELLOW}You have {attempts} attempts to guess it{RESET}\n\n"
        ),
        Announcement::AttemptsRemaining(n) => {
            format!("{CYAN}Attempts remaining: {n}{RESET}\n")
        }
        Announcement::ValidationError => {
            format!("{RED}Please enter a valid number!{RESET}\n")
        }
        Announcement::RangeError { min, max } => {
            format!("{RED}Please enter a number between {min} and {max}!{RESET}\n")
        }
        Announcement::Win(secret) => {
            format!("\n{GREEN}🎉 Congratulations! {secret} is correct!{RESET}\n")
        }
        Announcement::Hint(direction) => {
            let hint = match direction {
                HintDirection::Low => "low",
                HintDirection::High => "high",
            };
            format!("\n{BLUE}Too {hint}! Try again.{RESET}\n\n")
        }
        Announcement::Exhausted(secret) => {
            format!("\n{RED}Game Over! The number was {secret}{RESET}\n")
        }
        Announcement::Quit => format!("{RED}Game interrupted!{RESET}\n"),
        Announcement::Menu => {
            format!("\n{YELLOW}Press SPACE to play again, or 'q' to quit...{RESET}\n")
        }
        Announcement::Stats(stats) => {
            let mut out = format!(
                "\n{GREEN}=== Final Stats ==={RESET}\n\
                 {CYAN}Games Played: {}{RESET}\n\
                 {CYAN}Games Won: {}{RESET}\n",
                stats.games_played, stats.games_won
            );
            if stats.games_played > 0 {
                out.push_str(&format!("{CYAN}Win Rate: {:.1}%{RESET}\n", stats.win_rate()));
            }
            out.push_str(&format!("\n{YELLOW}Thanks for playing! Goodbye!{RESET}\n"));
            out
        }
    }
}

/// Colored terminal renderer with tone playback.
pub struct TerminalFeedback {
    mixer: ToneMixer,
}

impl TerminalFeedback {
    pub fn new() -> Self {
        Self {
            mixer: ToneMixer::new(),
        }
    }
}

impl Default for TerminalFeedback {
    fn default() -> Self {
        Self::new()
    }
}

impl Feedback for TerminalFeedback {
    fn announce(&mut self, event: Announcement) {
        print!("{}", render(event));
        io::stdout().flush().ok();
    }

    fn tone(&mut self, kind: ToneKind) {
        self.mixer.play(kind);
    }

    fn clear_screen(&mut self) {
        print!("{CLEAR_SCREEN}");
        io::stdout().flush().ok();
    }
}
