//! Classic starting patterns.

use crate::error::{Error, Result};
use crate::grid::Grid;
use log::debug;

/// A named set of live cells, as `(row, col)` offsets from the top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding box as `(rows, cols)`.
    pub fn size(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(rows, cols), &(r, c)| (rows.max(r + 1), cols.max(c + 1)))
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 24),
            (1, 22), (1, 24),
            (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
            (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35),
            (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
            (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22), (5, 24),
            (6, 10), (6, 16), (6, 24),
            (7, 11), (7, 15),
            (8, 12), (8, 13),
        ],
    },
];

/// Looks a pattern up by name, ignoring case.
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

/// Sets the pattern's cells alive with its top-left corner at `(row, col)`.
///
/// The grid is left untouched if the pattern does not fit.
pub fn place_pattern(grid: &mut Grid, pattern: &Pattern, row: usize, col: usize) -> Result<()> {
    let (height, width) = pattern.size();
    let (rows, cols) = grid.shape();
    if row + height > rows || col + width > cols {
        return Err(Error::OutOfBounds {
            row: row + height.saturating_sub(1),
            col: col + width.saturating_sub(1),
            rows,
            cols,
        });
    }
    for &(r, c) in pattern.cells {
        grid.set(row + r, col + c, true)?;
    }
    Ok(())
}

/// Clears the grid and draws the pattern in its center.
///
/// Cells that do not fit are dropped. Returns how many cells were placed.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) -> usize {
    grid.clear();

    let (height, width) = pattern.size();
    let top = grid.rows().saturating_sub(height) / 2;
    let left = grid.cols().saturating_sub(width) / 2;

    let mut placed = 0;
    for &(r, c) in pattern.cells {
        if grid.set(top + r, left + c, true).is_ok() {
            placed += 1;
        }
    }
    if placed < pattern.cells.len() {
        debug!(
            "{} clipped to {} of {} cells on a {}x{} grid",
            pattern.name,
            placed,
            pattern.cells.len(),
            grid.rows(),
            grid.cols()
        );
    }
    placed
}
