//! Snake environment core - pure, deterministic, and testable
//!
//! This crate contains the game rules, the episode state and the
//! render-to-observation pipeline. It has **no dependency** on a terminal or
//! window, making it:
//!
//! - **Deterministic**: the same seed produces identical food sequences and observations
//! - **Headless**: observations are owned pixel buffers, no display required
//! - **Testable**: every rule is exercised by unit tests
//!
//! # Module Structure
//!
//! - [`env`]: the [`SnakeEnv`] reset/step/render contract
//! - [`config`]: construction-time [`EnvConfig`] with validation and env-var overrides
//! - [`frame`]: the `[height][width][3]` pixel buffer returned as observation
//! - [`rng`]: seeded food placement
//! - [`pacing`]: per-step delay policies for human playback
//! - [`display`]: the seam a frontend implements for `render(Human)`
//! - [`error`]: [`EnvError`]
//!
//! # Rules
//!
//! - The snake starts as three segments at (100, 50) heading right
//! - Each step moves the head one 10-pixel cell; a direct reversal is ignored
//! - Overlapping the food scores 1 and grows the snake by one segment
//! - Leaving the frame or running into the body ends the episode with reward -1
//! - Reaching the step limit ends the episode with reward 0
//!
//! # Example
//!
//! ```
//! use snake_gym_core::{EnvConfig, SnakeEnv};
//! use snake_gym_types::Direction;
//!
//! let mut env = SnakeEnv::new(EnvConfig::default().with_seed(12345)).unwrap();
//! let obs = env.reset();
//! assert_eq!(obs.shape(), [200, 200, 3]);
//!
//! let step = env.step(Direction::Right.action()).unwrap();
//! assert!(!step.done);
//! assert_eq!(env.head().x, 110);
//!
//! // Out-of-range actions are rejected.
//! assert!(env.step(7).is_err());
//! ```

pub mod config;
pub mod display;
pub mod env;
pub mod error;
pub mod frame;
pub mod pacing;
pub mod rng;

pub use snake_gym_types as types;

// Re-export commonly used types for convenience
pub use config::{EnvConfig, FoodSpawnPolicy};
pub use display::{DisplayFactory, EpisodeStatus, HumanDisplay};
pub use env::{SnakeEnv, Step, StepInfo, COLLISION_REWARD, FOOD_REWARD};
pub use error::{EnvError, Result};
pub use frame::Frame;
pub use pacing::{NoDelay, SleepPacer, StepPacer};
pub use rng::FoodSpawner;
