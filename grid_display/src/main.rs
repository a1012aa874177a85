// main.rs - Desktop front end for Conway's Game of Life

use conway_controller::Controller;
use eframe::egui;
use log::info;
use std::error::Error;

mod app;
mod args;
mod error;
mod ui;

use app::LifeApp;
use args::Args;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse()?;
    let mut controller = Controller::new(args.settings.clone())?;
    if let Some(pattern) = args.pattern {
        controller.apply_pattern(pattern);
    }
    info!(
        "{}x{} grid, one generation every {} ms",
        args.settings.rows, args.settings.cols, args.settings.speed
    );

    let runtime = tokio::runtime::Runtime::new()?;

    let grid = ui::grid_size(args.settings.rows, args.settings.cols);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([(grid.x + 40.0).max(800.0), grid.y + 200.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Box::new(LifeApp::new(cc.egui_ctx.clone(), runtime, controller))),
    )?;
    Ok(())
}
