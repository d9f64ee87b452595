//! Single-keystroke input: raw mode scoping and key event mapping.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::errors::GameError;

/// A keystroke reduced to what the game distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    /// Arrows, function keys, modified characters, and everything else.
    Other,
}

/// Source of keystrokes.
///
/// The terminal implements it for play; tests implement it with scripted
/// sequences.
pub trait KeySource {
    /// Block until the next keystroke arrives.
    fn next_key(&mut self) -> Result<Key, GameError>;
}

/// Raw mode held while alive, restored on drop.
///
/// Drop runs on every exit path, including unwinding, so a failed read
/// cannot leave the terminal raw. The success path calls [`Self::restore`]
/// instead, which reports a failed mode switch rather than swallowing it.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self, GameError> {
        terminal::enable_raw_mode().map_err(GameError::RawMode)?;
        Ok(Self)
    }

    fn restore(self) -> Result<(), GameError> {
        std::mem::forget(self);
        terminal::disable_raw_mode().map_err(GameError::RawMode)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        terminal::disable_raw_mode().ok();
    }
}

/// Map a crossterm key event to a game key.
///
/// Returns `None` for key releases. Ctrl- and Alt-modified characters are
/// not the character itself and map to [`Key::Other`]; Shift passes through
/// so `X` still reads as `x`'s uppercase.
fn map_key_event(key: KeyEvent) -> Option<Key> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace | KeyCode::Delete => Some(Key::Backspace),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(KeyModifiers::ALT)
            {
                Some(Key::Other)
            } else {
                Some(Key::Char(c))
            }
        }
        _ => Some(Key::Other),
    }
}

/// Keystrokes from the real terminal.
///
/// Raw mode is held only for the duration of each read; prompt echo and
/// message printing happen in cooked mode between reads.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Result<Key, GameError> {
        let raw = RawModeGuard::enable()?;
        let key = loop {
            match event::read().map_err(GameError::ReadKey)? {
                Event::Key(key) => {
                    if let Some(mapped) = map_key_event(key) {
                        break mapped;
                    }
                }
                _ => {} // ignore mouse, resize, etc.
            }
        };
        raw.restore()?;
        Ok(key)
    }
}
