//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Direction`] turns and
//! session commands, and buffers turns pressed between two environment
//! steps so that quick double turns are not lost.

pub mod handler;
pub mod map;

pub use snake_gym_types as types;

pub use handler::TurnBuffer;
pub use map::{handle_key_event, should_quit, Command};
