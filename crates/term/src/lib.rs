//! Terminal "human" display for the snake environment.
//!
//! This is a small, game-oriented rendering layer. It avoids widget
//! toolkits and instead renders into a simple framebuffer that can be
//! flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` headless and deterministic
//! - Show exactly what the agent observes (the view samples the pixel frame)
//! - Compensate for glyph aspect ratio (2 chars wide per grid cell)

pub mod display;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use snake_gym_core as core;
pub use snake_gym_types as types;

pub use display::{terminal_display_factory, TerminalDisplay};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
