//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no I/O, making them usable in any context
//! (environment logic, terminal rendering, replay output).
//!
//! # Grid Geometry
//!
//! Positions are measured in pixels. The playfield is divided into square
//! cells of [`CELL_SIZE`] pixels; the snake and the food always occupy whole
//! cells.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CELL_SIZE` | 10 | Cell edge in pixels |
//! | `DEFAULT_FRAME_WIDTH` | 200 | Frame width in pixels |
//! | `DEFAULT_FRAME_HEIGHT` | 200 | Frame height in pixels |
//! | `DEFAULT_STEP_LIMIT` | 1000 | Steps before an episode is cut off |
//! | `RENDER_FPS` | 10 | Playback rate for human viewing |
//!
//! # Actions
//!
//! The action space is discrete with [`ACTION_COUNT`] values:
//!
//! | Code | Direction |
//! |------|-----------|
//! | 0 | Up |
//! | 1 | Down |
//! | 2 | Left |
//! | 3 | Right |
//!
//! # Examples
//!
//! ```
//! use snake_gym_types::{Direction, Position, CELL_SIZE};
//!
//! let dir = Direction::from_action(3).unwrap();
//! assert_eq!(dir, Direction::Right);
//! assert_eq!(dir.opposite(), Direction::Left);
//!
//! // A reversal request keeps the current heading.
//! assert_eq!(Direction::Right.turn(Direction::Left), Direction::Right);
//!
//! let head = Position::new(100, 50).moved(Direction::Up);
//! assert_eq!(head, Position::new(100, 50 - CELL_SIZE));
//! ```

use serde::{Deserialize, Serialize};

/// Cell edge length in pixels.
pub const CELL_SIZE: i32 = 10;

/// Default frame width in pixels.
pub const DEFAULT_FRAME_WIDTH: u32 = 200;

/// Default frame height in pixels.
pub const DEFAULT_FRAME_HEIGHT: u32 = 200;

/// Default number of steps before an episode is cut off.
pub const DEFAULT_STEP_LIMIT: u32 = 1000;

/// Number of discrete actions.
pub const ACTION_COUNT: usize = 4;

/// Channels per observation pixel (RGB).
pub const OBS_CHANNELS: usize = 3;

/// Playback rate for human viewing, in frames per second.
pub const RENDER_FPS: u32 = 10;

/// Initial snake length.
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Head position after reset.
pub const START_HEAD: Position = Position::new(100, 50);

/// Heading after reset.
pub const START_DIRECTION: Direction = Direction::Right;

/// Snake segments after reset, head first, trailing opposite to the heading.
///
/// ```
/// use snake_gym_types::{starting_body, Position};
///
/// assert_eq!(
///     starting_body(),
///     [Position::new(100, 50), Position::new(90, 50), Position::new(80, 50)]
/// );
/// ```
pub fn starting_body() -> [Position; INITIAL_SNAKE_LEN] {
    let back = START_DIRECTION.opposite();
    let mut body = [START_HEAD; INITIAL_SNAKE_LEN];
    for i in 1..INITIAL_SNAKE_LEN {
        body[i] = body[i - 1].moved(back);
    }
    body
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);

/// Observation background.
pub const BACKGROUND_COLOR: Rgb = BLACK;

/// Observation color of every snake segment.
pub const SNAKE_COLOR: Rgb = GREEN;

/// Observation color of the food cell.
pub const FOOD_COLOR: Rgb = WHITE;

/// Pixel position of a cell's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position one cell away in `direction`.
    pub fn moved(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * CELL_SIZE,
            y: self.y + dy * CELL_SIZE,
        }
    }

    /// True when the cells at `self` and `other` overlap.
    ///
    /// Cells overlap when they are less than one cell apart on both axes.
    pub fn overlaps(self, other: Position) -> bool {
        (self.x - other.x).abs() < CELL_SIZE && (self.y - other.y).abs() < CELL_SIZE
    }
}

/// Snake heading.
///
/// Discriminants double as the action codes of the discrete action space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    pub const ALL: [Direction; ACTION_COUNT] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Decode a discrete action code.
    ///
    /// # Examples
    ///
    /// ```
    /// use snake_gym_types::Direction;
    ///
    /// assert_eq!(Direction::from_action(0), Some(Direction::Up));
    /// assert_eq!(Direction::from_action(2), Some(Direction::Left));
    /// assert_eq!(Direction::from_action(4), None);
    /// ```
    pub fn from_action(action: usize) -> Option<Self> {
        Self::ALL.get(action).copied()
    }

    /// Discrete action code for this direction.
    pub fn action(self) -> usize {
        self as usize
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Resolve a requested heading against the current one.
    ///
    /// A request for the direct opposite is ignored.
    pub fn turn(self, requested: Direction) -> Self {
        if requested == self.opposite() {
            self
        } else {
            requested
        }
    }

    /// Unit cell offset `(dx, dy)`; y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// How `render` should present the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Flush the frame to a visible display.
    Human,
    /// Return a copy of the pixel buffer.
    Rgb,
}

impl RenderMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" => Some(RenderMode::Human),
            "rgb" | "rgb_array" => Some(RenderMode::Rgb),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Human => "human",
            RenderMode::Rgb => "rgb",
        }
    }
}
