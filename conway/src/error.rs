//! Errors raised at the edges of the engine.
//!
//! The generation step itself never fails; only data coming from outside
//! (nested rows, plaintext, coordinates, settings) is checked.

use crate::grid::Cell;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Row {row} has {found} cells, expected {expected}.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Cell ({row}, {col}) has value {value}, expected 0 or 1.
    InvalidCell { row: usize, col: usize, value: Cell },
    /// Unexpected character {0:?} in plaintext grid.
    InvalidChar(char),
    /// Cell ({row}, {col}) is outside a {rows}x{cols} grid.
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Tick interval must be positive.
    ZeroSpeed,
    /// Alive threshold {0} is outside [0, 1].
    InvalidThreshold(f64),
}

/// Shorthand used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
