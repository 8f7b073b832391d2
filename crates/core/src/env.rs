//! Snake environment - state, rules, and the render-to-observation pipeline
//!
//! [`SnakeEnv`] follows the single-agent RL contract: [`SnakeEnv::reset`]
//! starts an episode and returns the first observation, [`SnakeEnv::step`]
//! applies one action and returns `(observation, reward, done, info)`.
//!
//! # Step order
//!
//! 1. Resolve the requested heading (a direct reversal is ignored).
//! 2. Move the head one cell and prepend it to the body.
//! 3. Eat: grow and respawn food on overlap, otherwise drop the tail.
//! 4. Redraw the frame.
//! 5. Evaluate terminal conditions ([`SnakeEnv::game_over`]).
//! 6. Count the step and run the pacer.

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::config::EnvConfig;
use crate::display::{DisplayFactory, EpisodeStatus, HumanDisplay};
use crate::error::{EnvError, Result};
use crate::frame::Frame;
use crate::pacing::{pacer_for, StepPacer};
use crate::rng::FoodSpawner;
use crate::types::{
    starting_body, Direction, Position, RenderMode, ACTION_COUNT, BACKGROUND_COLOR, CELL_SIZE,
    FOOD_COLOR, SNAKE_COLOR, START_DIRECTION, START_HEAD,
};

/// Reward for eating food.
pub const FOOD_REWARD: i32 = 1;

/// Reward for hitting a wall or the body.
pub const COLLISION_REWARD: i32 = -1;

/// Extra step information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepInfo {
    pub score: u32,
}

/// Result of one [`SnakeEnv::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub observation: Frame,
    pub reward: i32,
    pub done: bool,
    pub info: StepInfo,
}

/// Snake environment
pub struct SnakeEnv {
    config: EnvConfig,
    spawner: FoodSpawner,
    /// Head first.
    body: VecDeque<Position>,
    head: Position,
    direction: Direction,
    food: Position,
    /// Set between eating the food and respawning it.
    food_pending: bool,
    score: u32,
    steps: u32,
    done: bool,
    frame: Frame,
    pacer: Box<dyn StepPacer>,
    display_factory: Option<DisplayFactory>,
    display: Option<Box<dyn HumanDisplay>>,
}

impl std::fmt::Debug for SnakeEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnakeEnv")
            .field("config", &self.config)
            .field("head", &self.head)
            .field("direction", &self.direction)
            .field("len", &self.body.len())
            .field("food", &self.food)
            .field("score", &self.score)
            .field("steps", &self.steps)
            .field("done", &self.done)
            .field("display_open", &self.display.is_some())
            .finish()
    }
}

impl SnakeEnv {
    /// Create an environment and start the first episode.
    ///
    /// The configuration is validated up front.
    pub fn new(config: EnvConfig) -> Result<Self> {
        config.validate()?;

        let spawner = FoodSpawner::new(
            config.columns(),
            config.rows(),
            config.food_spawn,
            config.seed,
        );
        let frame = Frame::new(config.frame_width as usize, config.frame_height as usize);
        let pacer = pacer_for(config.step_sleep);

        let mut env = Self {
            config,
            spawner,
            body: VecDeque::with_capacity(64),
            head: START_HEAD,
            direction: START_DIRECTION,
            food: START_HEAD,
            food_pending: false,
            score: 0,
            steps: 0,
            done: false,
            frame,
            pacer,
            display_factory: None,
            display: None,
        };
        env.reset();
        Ok(env)
    }

    /// Replace the pacing policy.
    pub fn with_pacer(mut self, pacer: Box<dyn StepPacer>) -> Self {
        self.pacer = pacer;
        self
    }

    /// Install the factory used to open a display on the first human render.
    pub fn with_display(mut self, factory: DisplayFactory) -> Self {
        self.display_factory = Some(factory);
        self
    }

    /// Restart the food sequence from `seed`.
    ///
    /// Takes effect from the next spawn; call [`SnakeEnv::reset`] afterwards
    /// to reproduce a whole episode.
    pub fn seed(&mut self, seed: u64) {
        self.spawner.reseed(seed);
    }

    /// Start a new episode and return its first observation.
    pub fn reset(&mut self) -> Frame {
        self.frame.fill(BACKGROUND_COLOR);

        self.body.clear();
        self.body.extend(starting_body());
        self.head = START_HEAD;
        self.direction = START_DIRECTION;

        self.food = self.spawner.spawn(self.body.iter());
        self.food_pending = false;

        self.score = 0;
        self.steps = 0;
        self.done = false;

        self.draw();
        debug!(food = ?self.food, "episode reset");
        self.frame.clone()
    }

    /// Apply a discrete action (`0..4` = up, down, left, right).
    pub fn step(&mut self, action: usize) -> Result<Step> {
        let requested = Direction::from_action(action).ok_or(EnvError::InvalidAction(action))?;
        Ok(self.step_direction(requested))
    }

    /// Apply a typed action.
    pub fn step_direction(&mut self, requested: Direction) -> Step {
        if self.done {
            warn!(steps = self.steps, "step called on a finished episode; call reset first");
        }

        self.direction = self.direction.turn(requested);
        self.head = self.head.moved(self.direction);
        self.body.push_front(self.head);

        let reward = self.handle_food();
        self.draw();

        let (reward, done) = self.game_over(reward);
        self.done = done;
        if done {
            debug!(
                reward,
                score = self.score,
                steps = self.steps,
                head = ?self.head,
                "episode finished"
            );
        }

        self.steps += 1;
        trace!(step = self.steps, head = ?self.head, dir = self.direction.as_str(), reward);
        self.pacer.after_step();

        Step {
            observation: self.frame.clone(),
            reward,
            done,
            info: StepInfo { score: self.score },
        }
    }

    /// Evaluate terminal conditions for the current head and counters.
    ///
    /// Checked in order: horizontal bounds, vertical bounds, self-collision
    /// (head against every non-head segment), step limit. A collision yields
    /// `(-1, true)`, reaching the step limit `(0, true)`, anything else
    /// `(reward, false)`.
    pub fn game_over(&self, reward: i32) -> (i32, bool) {
        let max_x = self.config.frame_width as i32 - CELL_SIZE;
        let max_y = self.config.frame_height as i32 - CELL_SIZE;

        if self.head.x < 0 || self.head.x > max_x {
            return (COLLISION_REWARD, true);
        }
        if self.head.y < 0 || self.head.y > max_y {
            return (COLLISION_REWARD, true);
        }
        if self.body.iter().skip(1).any(|&segment| segment == self.head) {
            return (COLLISION_REWARD, true);
        }
        if self.steps >= self.config.step_limit {
            return (0, true);
        }
        (reward, false)
    }

    /// Present the current frame.
    ///
    /// [`RenderMode::Human`] opens the display on first use and returns
    /// `None`; [`RenderMode::Rgb`] returns a copy of the observation.
    pub fn render(&mut self, mode: RenderMode) -> Result<Option<Frame>> {
        match mode {
            RenderMode::Rgb => Ok(Some(self.frame.clone())),
            RenderMode::Human => {
                if self.display.is_none() {
                    let factory = self
                        .display_factory
                        .as_mut()
                        .ok_or(EnvError::DisplayUnavailable)?;
                    self.display = Some(factory()?);
                    debug!("human display opened");
                }
                let status = self.status();
                if let Some(display) = self.display.as_mut() {
                    display.present(&self.frame, status)?;
                }
                Ok(None)
            }
        }
    }

    /// Close the display if one is open.
    ///
    /// A later human render opens a fresh display.
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut display) = self.display.take() {
            display.close()?;
            debug!("human display closed");
        }
        Ok(())
    }

    pub fn action_space(&self) -> usize {
        ACTION_COUNT
    }

    /// `[height, width, 3]`.
    pub fn observation_shape(&self) -> [usize; 3] {
        self.frame.shape()
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn head(&self) -> Position {
        self.head
    }

    /// Snake segments, head first.
    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Last rendered frame, without copying.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn status(&self) -> EpisodeStatus {
        EpisodeStatus {
            score: self.score,
            steps: self.steps,
            done: self.done,
        }
    }

    fn eats_food(&self) -> bool {
        self.head.overlaps(self.food)
    }

    /// Returns the food reward for this step.
    fn handle_food(&mut self) -> i32 {
        let reward = if self.eats_food() {
            self.score += 1;
            self.food_pending = true;
            debug!(score = self.score, food = ?self.food, "food eaten");
            FOOD_REWARD
        } else {
            self.body.pop_back();
            0
        };

        if self.food_pending {
            self.food = self.spawner.spawn(self.body.iter());
            self.food_pending = false;
        }

        reward
    }

    fn draw(&mut self) {
        self.frame.fill(BACKGROUND_COLOR);
        for segment in &self.body {
            self.frame
                .fill_rect(segment.x, segment.y, CELL_SIZE, CELL_SIZE, SNAKE_COLOR);
        }
        self.frame
            .fill_rect(self.food.x, self.food.y, CELL_SIZE, CELL_SIZE, FOOD_COLOR);
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, food: Position) {
        self.food = food;
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, body: &[Position], direction: Direction) {
        self.body = body.iter().copied().collect();
        self.head = body[0];
        self.direction = direction;
    }
}

impl Drop for SnakeEnv {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            warn!(%err, "failed to close display");
        }
    }
}
