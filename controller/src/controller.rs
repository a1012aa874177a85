//! Simulation state and the actions that change it.

use crate::history::History;
use conway::{GameSettings, Grid, Pattern, Result};
use log::{debug, info};
use rand::Rng;

/// The grid and whether it is being ticked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub grid: Grid,
    pub is_running: bool,
}

/// Why a run stopped on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Halt {
    /// No cell is alive.
    Extinct,
    /// The grid repeats one of the recent generations.
    Cycle,
}

/// What a single generation produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub generation: u64,
    pub population: usize,
    pub halt: Option<Halt>,
}

/// Owns the simulation state.
///
/// Ticks come from a [`Scheduler`](crate::Scheduler) or from the caller; toggles,
/// resets and random fills happen between them.
#[derive(Clone, Debug)]
pub struct Controller {
    settings: GameSettings,
    state: GameState,
    generation: u64,
    history: History,
}

impl Controller {
    /// Starts from an empty, stopped grid.
    pub fn new(settings: GameSettings) -> Result<Self> {
        settings.validate()?;
        let grid = conway::create_empty_grid(settings.rows, settings.cols);
        Ok(Controller {
            settings,
            state: GameState {
                grid,
                is_running: false,
            },
            generation: 0,
            history: History::new(),
        })
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    /// Generations since the last reset or edit of the whole grid.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.state.grid.population()
    }

    pub fn start(&mut self) {
        if !self.state.is_running {
            info!("Starting at generation {}", self.generation);
            self.state.is_running = true;
        }
    }

    pub fn stop(&mut self) {
        if self.state.is_running {
            info!("Stopping at generation {}", self.generation);
            self.state.is_running = false;
        }
    }

    /// Advances one generation if running.
    pub fn tick(&mut self) -> Option<TickReport> {
        if self.state.is_running {
            Some(self.step())
        } else {
            None
        }
    }

    /// Advances one generation whether running or not.
    ///
    /// The run is stopped when the grid dies out, or when it repeats a recent
    /// generation and `halt_on_cycle` is set.
    pub fn step(&mut self) -> TickReport {
        conway::next_generation(&mut self.state.grid);
        self.generation += 1;

        let halt = if conway::is_grid_empty(&self.state.grid) {
            Some(Halt::Extinct)
        } else if self.settings.halt_on_cycle && self.history.record(&self.state.grid) {
            Some(Halt::Cycle)
        } else {
            None
        };

        if let Some(halt) = halt {
            if self.state.is_running {
                info!("{:?} at generation {}", halt, self.generation);
                self.state.is_running = false;
            }
        }

        TickReport {
            generation: self.generation,
            population: self.population(),
            halt,
        }
    }

    /// Flips one cell, returning whether it is now alive.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<bool> {
        let alive = self.state.grid.toggle(row, col)?;
        debug!("Toggled ({}, {}) to {}", row, col, if alive { "alive" } else { "dead" });
        self.history.clear();
        Ok(alive)
    }

    /// Back to an empty, stopped grid at generation 0.
    pub fn reset(&mut self) {
        info!("Reset");
        self.state = GameState {
            grid: conway::create_empty_grid(self.settings.rows, self.settings.cols),
            is_running: false,
        };
        self.restart_count();
    }

    /// Replaces the grid with a random fill. The running flag is kept.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::thread_rng());
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.state.grid =
            conway::randomize_grid_with(&self.state.grid, rng, self.settings.alive_threshold);
        debug!("Randomized, population {}", self.population());
        self.restart_count();
    }

    /// Stops and draws `pattern` centered on a cleared grid.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        self.stop();
        let placed = conway::apply_pattern(&mut self.state.grid, pattern);
        debug!("Applied {} ({} cells)", pattern.name, placed);
        self.restart_count();
    }

    fn restart_count(&mut self) {
        self.generation = 0;
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::{Error, find_pattern};
    use rand::{SeedableRng, rngs::StdRng};

    fn blinker() -> Controller {
        let mut controller = Controller::new(GameSettings::new(5, 5)).unwrap();
        controller.apply_pattern(find_pattern("Blinker").unwrap());
        controller
    }

    #[test]
    fn starts_empty_and_stopped() {
        let controller = Controller::new(GameSettings::default()).unwrap();
        assert_eq!(controller.grid().shape(), (30, 30));
        assert!(controller.grid().is_empty());
        assert!(!controller.is_running());
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn rejects_bad_settings() {
        let err = Controller::new(GameSettings::default().set_speed(0)).unwrap_err();
        assert_eq!(err, Error::ZeroSpeed);
    }

    #[test]
    fn tick_does_nothing_while_stopped() {
        let mut controller = blinker();
        let before = controller.grid().clone();
        assert_eq!(controller.tick(), None);
        assert_eq!(controller.grid(), &before);
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn tick_advances_one_generation() {
        let mut controller = blinker();
        let horizontal = controller.grid().clone();
        controller.start();

        let report = controller.tick().unwrap();
        assert_eq!(
            report,
            TickReport {
                generation: 1,
                population: 3,
                halt: None
            }
        );
        assert_ne!(controller.grid(), &horizontal);

        controller.tick().unwrap();
        assert_eq!(controller.grid(), &horizontal);
        assert!(controller.is_running());
    }

    #[test]
    fn extinction_stops_the_run() {
        let mut controller = Controller::new(GameSettings::new(5, 5)).unwrap();
        controller.toggle_cell(2, 2).unwrap();
        controller.start();
        let report = controller.tick().unwrap();
        assert_eq!(report.halt, Some(Halt::Extinct));
        assert_eq!(report.population, 0);
        assert!(!controller.is_running());
        assert_eq!(controller.tick(), None);
    }

    #[test]
    fn cycles_stop_the_run_only_when_asked() {
        let mut controller = blinker();
        controller.start();
        for _ in 0..6 {
            assert_eq!(controller.tick().unwrap().halt, None);
        }

        let settings = GameSettings::new(5, 5).set_halt_on_cycle(true);
        let mut controller = Controller::new(settings).unwrap();
        controller.apply_pattern(find_pattern("Blinker").unwrap());
        controller.start();
        assert_eq!(controller.tick().unwrap().halt, None);
        assert_eq!(controller.tick().unwrap().halt, None);
        assert_eq!(controller.tick().unwrap().halt, Some(Halt::Cycle));
        assert!(!controller.is_running());
    }

    #[test]
    fn step_works_while_stopped() {
        let mut controller = blinker();
        let report = controller.step();
        assert_eq!(report.generation, 1);
        assert!(!controller.is_running());
    }

    #[test]
    fn toggle_between_ticks() {
        let mut controller = blinker();
        controller.start();
        controller.tick();
        assert!(controller.toggle_cell(0, 0).unwrap());
        assert!(controller.grid().is_alive(0, 0));
        assert_eq!(controller.grid().shape(), (5, 5));
        assert!(controller.toggle_cell(5, 0).is_err());
        assert!(controller.is_running());
    }

    #[test]
    fn reset_clears_everything() {
        let mut controller = blinker();
        controller.start();
        controller.tick();
        controller.reset();
        assert!(controller.grid().is_empty());
        assert!(!controller.is_running());
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn randomize_keeps_shape_and_running_flag() {
        let settings = GameSettings::new(8, 12).set_alive_threshold(0.0);
        let mut controller = Controller::new(settings).unwrap();
        controller.start();
        controller.randomize_with(&mut StdRng::seed_from_u64(5));
        assert_eq!(controller.grid().shape(), (8, 12));
        assert!(controller.population() > 0);
        assert!(controller.is_running());
        assert_eq!(controller.generation(), 0);
    }
}
