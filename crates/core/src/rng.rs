//! RNG module - seeded food placement
//!
//! Food lands on a cell drawn uniformly over the grid. Under
//! [`FoodSpawnPolicy::Anywhere`] the draw ignores the snake, so food may
//! appear on a body cell; [`FoodSpawnPolicy::AvoidSnake`] draws only from
//! free cells.
//!
//! The generator is ChaCha8, so a fixed seed reproduces the same food
//! sequence on every platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::FoodSpawnPolicy;
use crate::types::{Position, CELL_SIZE};

/// Seeded food position generator.
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    rng: ChaCha8Rng,
    columns: i32,
    rows: i32,
    policy: FoodSpawnPolicy,
}

impl FoodSpawner {
    /// Create a spawner over a `columns` x `rows` grid.
    ///
    /// `None` seeds from OS entropy.
    pub fn new(columns: i32, rows: i32, policy: FoodSpawnPolicy, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            rng,
            columns,
            rows,
            policy,
        }
    }

    /// Restart the sequence from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Draw the next food position.
    ///
    /// With [`FoodSpawnPolicy::AvoidSnake`] and no free cell left, this
    /// falls back to an unrestricted draw.
    pub fn spawn<'a>(&mut self, occupied: impl IntoIterator<Item = &'a Position>) -> Position {
        match self.policy {
            FoodSpawnPolicy::Anywhere => self.any_cell(),
            FoodSpawnPolicy::AvoidSnake => {
                let taken: Vec<Position> = occupied.into_iter().copied().collect();
                let total = (self.columns * self.rows) as usize;
                let free = total.saturating_sub(count_on_grid(&taken, self.columns, self.rows));
                if free == 0 {
                    return self.any_cell();
                }

                // Pick the n-th free cell in row-major order.
                let mut n = self.rng.gen_range(0..free);
                for row in 0..self.rows {
                    for col in 0..self.columns {
                        let p = cell(col, row);
                        if taken.contains(&p) {
                            continue;
                        }
                        if n == 0 {
                            return p;
                        }
                        n -= 1;
                    }
                }
                self.any_cell()
            }
        }
    }

    fn any_cell(&mut self) -> Position {
        let col = self.rng.gen_range(0..self.columns);
        let row = self.rng.gen_range(0..self.rows);
        cell(col, row)
    }
}

fn cell(col: i32, row: i32) -> Position {
    Position::new(col * CELL_SIZE, row * CELL_SIZE)
}

/// Distinct on-grid cells among `taken`.
fn count_on_grid(taken: &[Position], columns: i32, rows: i32) -> usize {
    let mut seen: Vec<Position> = Vec::with_capacity(taken.len());
    for &p in taken {
        let on_grid = p.x >= 0
            && p.y >= 0
            && p.x % CELL_SIZE == 0
            && p.y % CELL_SIZE == 0
            && p.x / CELL_SIZE < columns
            && p.y / CELL_SIZE < rows;
        if on_grid && !seen.contains(&p) {
            seen.push(p);
        }
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawner_deterministic() {
        let mut a = FoodSpawner::new(20, 20, FoodSpawnPolicy::Anywhere, Some(12345));
        let mut b = FoodSpawner::new(20, 20, FoodSpawnPolicy::Anywhere, Some(12345));

        for _ in 0..100 {
            assert_eq!(a.spawn(&[]), b.spawn(&[]));
        }
    }

    #[test]
    fn test_spawner_reseed_restarts_sequence() {
        let mut spawner = FoodSpawner::new(20, 20, FoodSpawnPolicy::Anywhere, Some(1));
        let first: Vec<Position> = (0..10).map(|_| spawner.spawn(&[])).collect();

        spawner.reseed(1);
        let again: Vec<Position> = (0..10).map(|_| spawner.spawn(&[])).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_spawn_stays_on_grid() {
        let mut spawner = FoodSpawner::new(20, 15, FoodSpawnPolicy::Anywhere, Some(99));
        for _ in 0..1000 {
            let p = spawner.spawn(&[]);
            assert!(p.x >= 0 && p.x <= 190);
            assert!(p.y >= 0 && p.y <= 140);
            assert_eq!(p.x % CELL_SIZE, 0);
            assert_eq!(p.y % CELL_SIZE, 0);
        }
    }

    #[test]
    fn test_avoid_snake_never_hits_body() {
        // 2x2 grid with three cells taken leaves exactly one choice.
        let body = [
            Position::new(0, 0),
            Position::new(10, 0),
            Position::new(0, 10),
        ];
        let mut spawner = FoodSpawner::new(2, 2, FoodSpawnPolicy::AvoidSnake, Some(7));
        for _ in 0..50 {
            assert_eq!(spawner.spawn(&body), Position::new(10, 10));
        }
    }

    #[test]
    fn test_avoid_snake_full_grid_falls_back() {
        let body = [
            Position::new(0, 0),
            Position::new(10, 0),
            Position::new(0, 10),
            Position::new(10, 10),
        ];
        let mut spawner = FoodSpawner::new(2, 2, FoodSpawnPolicy::AvoidSnake, Some(7));
        let p = spawner.spawn(&body);
        assert!(body.contains(&p));
    }

    #[test]
    fn test_off_grid_segments_do_not_shrink_free_count() {
        let body = [Position::new(-10, 0), Position::new(0, 0)];
        assert_eq!(count_on_grid(&body, 2, 2), 1);
    }
}
