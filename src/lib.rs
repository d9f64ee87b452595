//! hilo library — exposes the game modules for the binary and integration tests.

pub mod audio;
pub mod config;
pub mod editor;
pub mod errors;
pub mod feedback;
pub mod input;
pub mod round;
pub mod session;
pub mod tui;
