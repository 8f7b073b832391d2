//! Environment errors.
//!
//! Collisions and step-limit cutoffs are ordinary terminal transitions and
//! never surface here.

use crate::types::ACTION_COUNT;

#[derive(thiserror::Error, Debug)]
pub enum EnvError {
    #[error("invalid action {0}: expected a value in 0..{ACTION_COUNT}")]
    InvalidAction(usize),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("no human display available: install a display factory first")]
    DisplayUnavailable,
    #[error(transparent)]
    Display(#[from] anyhow::Error),
}

/// Convenience alias for results using [`EnvError`].
pub type Result<T> = std::result::Result<T, EnvError>;
