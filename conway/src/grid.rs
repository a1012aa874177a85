// grid.rs - Grid type for Conway's Game of Life

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Value stored in a single cell.
///
/// Outside of a generation step every cell is either [`DEAD`] or [`ALIVE`].
pub type Cell = i8;

pub const DEAD: Cell = 0;
pub const ALIVE: Cell = 1;

/// A fixed-size rectangular grid of cells, stored row-major.
///
/// Every constructor checks the shape, so a `Grid` is always rectangular:
/// `cells.len() == rows * cols`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![DEAD; rows * cols],
        }
    }

    /// Builds a grid from nested rows.
    ///
    /// Fails if the rows differ in length or hold anything other than 0 or 1.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(Error::RaggedRow {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value != DEAD && value != ALIVE {
                    return Err(Error::InvalidCell { row, col, value });
                }
            }
            cells.extend_from_slice(values);
        }
        Ok(Grid {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Copies the grid out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells.chunks(self.cols).map(<[Cell]>::to_vec).collect()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All cells, row by row.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub(crate) fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn check(&self, row: usize, col: usize) -> Result<usize> {
        if self.contains(row, col) {
            Ok(self.index(row, col))
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Gets the value of a cell, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.contains(row, col) {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Whether the cell is alive. Cells outside the grid are dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|cell| cell > DEAD)
    }

    /// Sets a cell alive or dead.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let index = self.check(row, col)?;
        self.cells[index] = if alive { ALIVE } else { DEAD };
        Ok(())
    }

    /// Flips a cell between dead and alive, returning whether it is now alive.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool> {
        let index = self.check(row, col)?;
        let alive = self.cells[index] == DEAD;
        self.cells[index] = if alive { ALIVE } else { DEAD };
        Ok(alive)
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == ALIVE).count()
    }

    /// Whether every cell is dead.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == DEAD)
    }
}

/// Plaintext: `.` for dead and `o` for alive, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let c = if self.is_alive(row, col) { 'o' } else { '.' };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses plaintext. `o`, `O` and `*` are alive, `.` is dead.
/// Blank lines and lines starting with `!` are skipped.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('!'))
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        '.' => Ok(DEAD),
                        'o' | 'O' | '*' => Ok(ALIVE),
                        _ => Err(Error::InvalidChar(c)),
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Grid::from_rows(rows)
    }
}
