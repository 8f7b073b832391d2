//! Snake RL environment (workspace facade crate).
//!
//! Re-exports `snake_gym::{core,input,term,types}` while the implementation
//! lives in dedicated crates under `crates/`.

pub mod logging;

pub use snake_gym_core as core;
pub use snake_gym_input as input;
pub use snake_gym_term as term;
pub use snake_gym_types as types;
