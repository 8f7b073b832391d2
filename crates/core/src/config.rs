//! Construction-time environment configuration.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{EnvError, Result};
use crate::types::{
    starting_body, CELL_SIZE, DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH, DEFAULT_STEP_LIMIT,
};

/// Where food may respawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FoodSpawnPolicy {
    /// Any cell, including cells occupied by the snake.
    #[default]
    Anywhere,
    /// Only cells not occupied by the snake.
    AvoidSnake,
}

impl FoodSpawnPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "anywhere" => Some(FoodSpawnPolicy::Anywhere),
            "avoid-snake" | "avoid_snake" => Some(FoodSpawnPolicy::AvoidSnake),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodSpawnPolicy::Anywhere => "anywhere",
            FoodSpawnPolicy::AvoidSnake => "avoid-snake",
        }
    }
}

/// Environment configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Frame width in pixels (multiple of the cell size).
    pub frame_width: u32,
    /// Frame height in pixels (multiple of the cell size).
    pub frame_height: u32,
    /// Steps after which an episode ends with reward 0.
    pub step_limit: u32,
    /// Delay after every step, for human playback only.
    pub step_sleep: Duration,
    pub food_spawn: FoodSpawnPolicy,
    /// Food RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
            step_limit: DEFAULT_STEP_LIMIT,
            step_sleep: Duration::ZERO,
            food_spawn: FoodSpawnPolicy::Anywhere,
            seed: None,
        }
    }
}

impl EnvConfig {
    pub fn with_frame_size(mut self, width: u32, height: u32) -> Self {
        self.frame_width = width;
        self.frame_height = height;
        self
    }

    pub fn with_step_limit(mut self, step_limit: u32) -> Self {
        self.step_limit = step_limit;
        self
    }

    pub fn with_step_sleep(mut self, step_sleep: Duration) -> Self {
        self.step_sleep = step_sleep;
        self
    }

    pub fn with_food_spawn(mut self, food_spawn: FoodSpawnPolicy) -> Self {
        self.food_spawn = food_spawn;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Grid columns.
    pub fn columns(&self) -> i32 {
        self.frame_width as i32 / CELL_SIZE
    }

    /// Grid rows.
    pub fn rows(&self) -> i32 {
        self.frame_height as i32 / CELL_SIZE
    }

    /// Check frame dimensions and limits.
    ///
    /// The frame must be a positive multiple of the cell size and large
    /// enough to hold the starting snake.
    pub fn validate(&self) -> Result<()> {
        check_dimension("frame_width", self.frame_width)?;
        check_dimension("frame_height", self.frame_height)?;

        for p in starting_body() {
            if p.x < 0
                || p.y < 0
                || p.x > self.frame_width as i32 - CELL_SIZE
                || p.y > self.frame_height as i32 - CELL_SIZE
            {
                return Err(EnvError::InvalidConfiguration(format!(
                    "frame {}x{} cannot hold the starting snake at ({}, {})",
                    self.frame_width, self.frame_height, p.x, p.y
                )));
            }
        }

        if self.step_limit == 0 {
            return Err(EnvError::InvalidConfiguration(
                "step_limit must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Create from environment variables, falling back to defaults.
    ///
    /// - `SNAKE_FRAME_WIDTH` / `SNAKE_FRAME_HEIGHT`: frame size in pixels
    /// - `SNAKE_STEP_LIMIT`: episode step limit
    /// - `SNAKE_STEP_SLEEP_MS`: per-step delay in milliseconds
    /// - `SNAKE_FOOD_SPAWN`: `anywhere` or `avoid-snake`
    /// - `SNAKE_SEED`: food RNG seed
    ///
    /// Unparsable values are rejected rather than ignored.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let frame_width = parse_var("SNAKE_FRAME_WIDTH")?.unwrap_or(defaults.frame_width);
        let frame_height = parse_var("SNAKE_FRAME_HEIGHT")?.unwrap_or(defaults.frame_height);
        let step_limit = parse_var("SNAKE_STEP_LIMIT")?.unwrap_or(defaults.step_limit);
        let step_sleep = parse_var::<u64>("SNAKE_STEP_SLEEP_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.step_sleep);
        let seed = parse_var("SNAKE_SEED")?;

        let food_spawn = match read_var("SNAKE_FOOD_SPAWN") {
            Some(raw) => FoodSpawnPolicy::from_str(&raw).ok_or_else(|| {
                EnvError::InvalidConfiguration(format!("SNAKE_FOOD_SPAWN: unknown policy {raw:?}"))
            })?,
            None => defaults.food_spawn,
        };

        Ok(Self {
            frame_width,
            frame_height,
            step_limit,
            step_sleep,
            food_spawn,
            seed,
        })
    }
}

fn check_dimension(name: &str, value: u32) -> Result<()> {
    if value == 0 || value % CELL_SIZE as u32 != 0 {
        return Err(EnvError::InvalidConfiguration(format!(
            "{name} must be a positive multiple of {CELL_SIZE}, got {value}"
        )));
    }
    Ok(())
}

fn read_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match read_var(name) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| EnvError::InvalidConfiguration(format!("{name}: cannot parse {raw:?}"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EnvConfig::default();
        assert_eq!(config.frame_width, 200);
        assert_eq!(config.frame_height, 200);
        assert_eq!(config.step_limit, 1000);
        assert_eq!(config.step_sleep, Duration::ZERO);
        assert_eq!(config.food_spawn, FoodSpawnPolicy::Anywhere);
        assert!(config.validate().is_ok());
        assert_eq!(config.columns(), 20);
        assert_eq!(config.rows(), 20);
    }

    #[test]
    fn rejects_zero_and_unaligned_dimensions() {
        for (w, h) in [(0, 200), (200, 0), (205, 200), (200, 199)] {
            let err = EnvConfig::default().with_frame_size(w, h).validate();
            assert!(
                matches!(err, Err(EnvError::InvalidConfiguration(_))),
                "{w}x{h} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_frame_too_small_for_starting_snake() {
        // Head starts at x=100, so the frame needs at least 110 columns of pixels.
        let err = EnvConfig::default().with_frame_size(100, 200).validate();
        assert!(matches!(err, Err(EnvError::InvalidConfiguration(_))));
        assert!(EnvConfig::default().with_frame_size(110, 60).validate().is_ok());
        assert!(EnvConfig::default().with_frame_size(110, 50).validate().is_err());
    }

    #[test]
    fn rejects_zero_step_limit() {
        let err = EnvConfig::default().with_step_limit(0).validate();
        assert!(matches!(err, Err(EnvError::InvalidConfiguration(_))));
    }

    #[test]
    fn food_spawn_policy_parses() {
        assert_eq!(
            FoodSpawnPolicy::from_str("avoid-snake"),
            Some(FoodSpawnPolicy::AvoidSnake)
        );
        assert_eq!(
            FoodSpawnPolicy::from_str(" Anywhere "),
            Some(FoodSpawnPolicy::Anywhere)
        );
        assert_eq!(FoodSpawnPolicy::from_str("nowhere"), None);
    }

    #[test]
    fn config_serializes_to_json() {
        let config = EnvConfig::default()
            .with_seed(7)
            .with_food_spawn(FoodSpawnPolicy::AvoidSnake);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"food_spawn\":\"avoid-snake\""));
        let back: EnvConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn from_env_reads_overrides() {
        std::env::set_var("SNAKE_FRAME_WIDTH", "300");
        std::env::set_var("SNAKE_STEP_SLEEP_MS", "25");
        std::env::set_var("SNAKE_FOOD_SPAWN", "avoid-snake");
        let config = EnvConfig::from_env().unwrap();
        std::env::remove_var("SNAKE_FRAME_WIDTH");
        std::env::remove_var("SNAKE_STEP_SLEEP_MS");
        std::env::remove_var("SNAKE_FOOD_SPAWN");

        assert_eq!(config.frame_width, 300);
        assert_eq!(config.frame_height, 200);
        assert_eq!(config.step_sleep, Duration::from_millis(25));
        assert_eq!(config.food_spawn, FoodSpawnPolicy::AvoidSnake);

        // Kept in one test: the process environment is shared across threads.
        std::env::set_var("SNAKE_SEED", "7");
        std::env::set_var("SNAKE_STEP_LIMIT", "250");
        let config = EnvConfig::from_env().unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.step_limit, 250);

        std::env::set_var("SNAKE_STEP_LIMIT", "abc");
        let err = EnvConfig::from_env();
        std::env::remove_var("SNAKE_STEP_LIMIT");
        assert!(matches!(err, Err(EnvError::InvalidConfiguration(_))));

        std::env::set_var("SNAKE_FOOD_SPAWN", "nowhere");
        let err = EnvConfig::from_env();
        std::env::remove_var("SNAKE_FOOD_SPAWN");
        std::env::remove_var("SNAKE_SEED");
        assert!(matches!(err, Err(EnvError::InvalidConfiguration(_))));
    }
}
