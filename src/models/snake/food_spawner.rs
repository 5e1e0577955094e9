//! Random food placement.
use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;

use super::grid::{Cell, Grid};

/// Picks free cells with rejection sampling.
#[derive(Debug)]
pub struct FoodSpawner<R: Rng> {
    rng: R,
}

impl<R: Rng> FoodSpawner<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws uniformly from `grid` until a cell not in `occupied` comes up.
    ///
    /// Returns `None` if `occupied` already covers every cell on the board.
    pub fn spawn<'a>(
        &mut self,
        grid: &Grid,
        occupied: impl IntoIterator<Item = &'a Cell>,
    ) -> Option<Cell> {
        let taken: HashSet<Cell> = occupied.into_iter().copied().collect();
        if grid.cells().all(|cell| taken.contains(&cell)) {
            warn!("No where left to place food");
            return None;
        }
        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            let candidate = Cell::new(
                self.rng.gen_range(0..grid.size()),
                self.rng.gen_range(0..grid.size()),
            );
            if !taken.contains(&candidate) {
                debug!("Food placed at {candidate:?} after {attempts} draw(s)");
                return Some(candidate);
            }
        }
    }
}
