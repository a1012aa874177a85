// app.rs - Window state: the shared controller, its scheduler and display options

use conway::patterns::PATTERNS;
use conway_controller::{Controller, Scheduler, lock, shared};
use egui::Color32;
use log::warn;
use std::sync::MutexGuard;
use tokio::runtime::Runtime;

pub struct LifeApp {
    // Dropped before the runtime, so the tick task is cancelled first.
    scheduler: Scheduler,
    _runtime: Runtime,
    ctx: egui::Context,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
}

impl LifeApp {
    pub fn new(ctx: egui::Context, runtime: Runtime, controller: Controller) -> Self {
        let scheduler = Scheduler::new(shared(controller), runtime.handle().clone());
        Self {
            scheduler,
            _runtime: runtime,
            ctx,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
        }
    }

    pub fn controller(&self) -> MutexGuard<'_, Controller> {
        lock(self.scheduler.controller())
    }

    pub fn start(&mut self) {
        let ctx = self.ctx.clone();
        self.scheduler.start(move |_| ctx.request_repaint());
    }

    pub fn pause(&mut self) {
        self.scheduler.stop();
    }

    pub fn step(&mut self) {
        self.controller().step();
    }

    pub fn clear(&mut self) {
        self.scheduler.stop();
        self.controller().reset();
    }

    pub fn randomize(&mut self) {
        self.controller().randomize();
    }

    pub fn apply_selected_pattern(&mut self) {
        self.scheduler.stop();
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            self.controller().apply_pattern(pattern);
        }
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if let Err(err) = self.controller().toggle_cell(row, col) {
            warn!("{}", err);
        }
    }
}
