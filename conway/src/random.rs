//! Random fills.

use crate::grid::{ALIVE, DEAD, Grid};
use rand::{Rng, distributions::Standard};

/// A cell comes out alive when a uniform draw in `[0, 1)` exceeds this,
/// so about 40% of the cells are alive.
pub const DEFAULT_ALIVE_THRESHOLD: f64 = 0.6;

/// Returns a randomly filled grid of the same shape. `grid` is left untouched.
pub fn randomize_grid(grid: &Grid) -> Grid {
    randomize_grid_with(grid, &mut rand::thread_rng(), DEFAULT_ALIVE_THRESHOLD)
}

/// Like [`randomize_grid`], with a caller-supplied RNG and threshold.
pub fn randomize_grid_with<R: Rng + ?Sized>(grid: &Grid, rng: &mut R, threshold: f64) -> Grid {
    let mut random = Grid::new(grid.rows(), grid.cols());
    for cell in random.cells_mut() {
        let draw: f64 = rng.sample(Standard);
        *cell = if draw > threshold { ALIVE } else { DEAD };
    }
    random
}
