//! Runs the conway engine: owns the grid, ticks it on a timer, and applies
//! edits between ticks.

mod controller;
mod history;
mod scheduler;

pub use controller::{Controller, GameState, Halt, TickReport};
pub use history::History;
pub use scheduler::{Scheduler, SharedController, lock};

use std::sync::{Arc, Mutex};

/// Wraps a controller for use with a [`Scheduler`].
pub fn shared(controller: Controller) -> SharedController {
    Arc::new(Mutex::new(controller))
}
