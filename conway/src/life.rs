//! Neighbor counting and the generation step.

use crate::grid::{ALIVE, Cell, DEAD, Grid};

/// Marks a live cell that dies in this generation.
///
/// Must stay positive: later cells in the same pass still count it as alive.
const WILL_DIE: Cell = 2;

/// Marks a dead cell that is born in this generation.
///
/// Must stay non-positive: later cells in the same pass still count it as dead.
const WILL_BE_BORN: Cell = -3;

/// The Moore neighborhood.
#[rustfmt::skip]
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// B3/S23.
fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}

/// Counts the live cells around `(row, col)`.
///
/// Neighbors outside the grid are skipped, there is no wrapping. Any strictly
/// positive value counts as alive, which keeps the count correct while
/// [`next_generation`] has sentinels in the grid.
pub fn count_neighbors(row: usize, col: usize, grid: &Grid) -> u8 {
    OFFSETS
        .iter()
        .filter(|&&(dr, dc)| {
            match (row.checked_add_signed(dr), col.checked_add_signed(dc)) {
                (Some(r), Some(c)) => grid.is_alive(r, c),
                _ => false,
            }
        })
        .count() as u8
}

/// Advances the grid by one generation, in place.
///
/// The first pass writes [`WILL_DIE`] over live cells that die and
/// [`WILL_BE_BORN`] over dead cells that are born. Sentinels keep the sign of
/// the cell's old state, so neighbor counts later in the pass see the previous
/// generation no matter the traversal order. The second pass resolves them to
/// 0 and 1.
pub fn next_generation(grid: &mut Grid) -> &mut Grid {
    let (rows, cols) = grid.shape();

    for row in 0..rows {
        for col in 0..cols {
            let neighbors = count_neighbors(row, col, grid);
            let index = grid.index(row, col);
            let cell = &mut grid.cells_mut()[index];
            let alive = *cell == ALIVE;
            match (alive, next_state(alive, neighbors)) {
                (true, false) => *cell = WILL_DIE,
                (false, true) => *cell = WILL_BE_BORN,
                _ => {}
            }
        }
    }

    for cell in grid.cells_mut() {
        *cell = match *cell {
            WILL_DIE => DEAD,
            WILL_BE_BORN => ALIVE,
            other => other,
        };
    }

    grid
}

/// Writes the next generation of `current` into `next`.
///
/// `current` is only read. `next` is reallocated if its shape differs, so the
/// two can be swapped back and forth as a double buffer.
pub fn next_generation_into(current: &Grid, next: &mut Grid) {
    if next.shape() != current.shape() {
        *next = Grid::new(current.rows(), current.cols());
    }

    for row in 0..current.rows() {
        for col in 0..current.cols() {
            let neighbors = count_neighbors(row, col, current);
            let alive = next_state(current.is_alive(row, col), neighbors);
            let index = next.index(row, col);
            next.cells_mut()[index] = if alive { ALIVE } else { DEAD };
        }
    }
}

/// Whether no cell is alive. Only meaningful between generations.
pub fn is_grid_empty(grid: &Grid) -> bool {
    grid.is_empty()
}
