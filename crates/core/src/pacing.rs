//! Step pacing - throttles playback for human viewing.
//!
//! The environment calls [`StepPacer::after_step`] once per step. Simulation
//! state is final by then, so a pacer can only change wall-clock timing,
//! never what a step returns.

use std::thread;
use std::time::Duration;

pub trait StepPacer {
    fn after_step(&mut self);

    /// Delay added by each step.
    fn delay(&self) -> Duration {
        Duration::ZERO
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl StepPacer for NoDelay {
    fn after_step(&mut self) {}
}

/// Blocks the calling thread for a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct SleepPacer {
    delay: Duration,
}

impl SleepPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl StepPacer for SleepPacer {
    fn after_step(&mut self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    fn delay(&self) -> Duration {
        self.delay
    }
}

/// Pacer matching a configured delay: [`NoDelay`] for zero.
pub fn pacer_for(delay: Duration) -> Box<dyn StepPacer> {
    if delay.is_zero() {
        Box::new(NoDelay)
    } else {
        Box::new(SleepPacer::new(delay))
    }
}
