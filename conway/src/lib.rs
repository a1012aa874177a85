//! Conway's Game of Life on a fixed-size grid.
//!
//! ```
//! use conway::{create_empty_grid, is_grid_empty, next_generation};
//!
//! let mut grid = create_empty_grid(5, 5);
//! grid.toggle(2, 2).unwrap();
//! next_generation(&mut grid);
//! assert!(is_grid_empty(&grid));
//! ```

mod error;
mod grid;
mod life;
pub mod patterns;
mod random;
mod settings;

pub use error::{Error, Result};
pub use grid::{ALIVE, Cell, DEAD, Grid};
pub use life::{count_neighbors, is_grid_empty, next_generation, next_generation_into};
pub use patterns::{Pattern, apply_pattern, find_pattern, place_pattern};
pub use random::{DEFAULT_ALIVE_THRESHOLD, randomize_grid, randomize_grid_with};
pub use settings::GameSettings;

/// Creates a grid with every cell dead.
pub fn create_empty_grid(rows: usize, cols: usize) -> Grid {
    Grid::new(rows, cols)
}
