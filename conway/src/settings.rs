//! Simulation settings.

use crate::error::{Error, Result};
use crate::random::DEFAULT_ALIVE_THRESHOLD;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Grid size and tick rate of a simulation run.
///
/// Fixed for the lifetime of a run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameSettings {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,

    /// Tick period, in milliseconds.
    pub speed: u64,

    /// Random fills make a cell alive when a uniform draw exceeds this.
    pub alive_threshold: f64,

    /// Whether to stop once a generation repeats a recent one.
    ///
    /// Extinction always stops the run.
    pub halt_on_cycle: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            rows: 30,
            cols: 30,
            speed: 100,
            alive_threshold: DEFAULT_ALIVE_THRESHOLD,
            halt_on_cycle: false,
        }
    }
}

impl GameSettings {
    /// Sets up settings with given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        GameSettings {
            rows,
            cols,
            ..GameSettings::default()
        }
    }

    /// Sets the grid size.
    pub fn set_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Sets the tick period in milliseconds.
    pub fn set_speed(mut self, speed: u64) -> Self {
        self.speed = speed;
        self
    }

    pub fn set_alive_threshold(mut self, alive_threshold: f64) -> Self {
        self.alive_threshold = alive_threshold;
        self
    }

    pub fn set_halt_on_cycle(mut self, halt_on_cycle: bool) -> Self {
        self.halt_on_cycle = halt_on_cycle;
        self
    }

    /// The tick period.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.speed)
    }

    /// Checks the values a run cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.speed == 0 {
            return Err(Error::ZeroSpeed);
        }
        if !(0.0..=1.0).contains(&self.alive_threshold) {
            return Err(Error::InvalidThreshold(self.alive_threshold));
        }
        Ok(())
    }
}
