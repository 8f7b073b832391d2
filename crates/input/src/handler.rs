//! Turn buffer for human play.
//!
//! The environment advances at a fixed rate, but a player can press two
//! keys within one tick (e.g. up then left to U-turn). Keeping only the
//! last press would drop the first turn, so presses are queued and
//! consumed one per step.

use arrayvec::ArrayVec;

use crate::types::Direction;

/// Pending turns beyond this are dropped.
pub const MAX_PENDING_TURNS: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct TurnBuffer {
    pending: ArrayVec<Direction, MAX_PENDING_TURNS>,
}

impl TurnBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a turn. Repeats of the last queued turn are ignored.
    pub fn push(&mut self, direction: Direction) {
        if self.pending.last() == Some(&direction) {
            return;
        }
        let _ = self.pending.try_push(direction);
    }

    /// Turn to apply this step; `current` when nothing is queued.
    pub fn next(&mut self, current: Direction) -> Direction {
        if self.pending.is_empty() {
            current
        } else {
            self.pending.remove(0)
        }
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
