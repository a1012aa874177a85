// ui.rs - Controls, grid painting and cell clicks

use crate::app::LifeApp;
use conway::patterns::PATTERNS;
use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};

pub const BOX_SIZE: f32 = 15.0;
pub const SPACING: f32 = 0.5;

/// Pixel size of a painted grid.
pub fn grid_size(rows: usize, cols: usize) -> Vec2 {
    let extent = |n: usize| ((BOX_SIZE + SPACING) * n as f32 - SPACING).max(0.0);
    Vec2::new(extent(cols), extent(rows))
}

/// The cell under `pos`, if any. Clicks on the spacing between boxes count
/// for the box to their upper left.
fn cell_at(origin: Pos2, pos: Pos2, rows: usize, cols: usize) -> Option<(usize, usize)> {
    let offset = pos - origin;
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let row = (offset.y / (BOX_SIZE + SPACING)) as usize;
    let col = (offset.x / (BOX_SIZE + SPACING)) as usize;
    (row < rows && col < cols).then_some((row, col))
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (is_running, generation, population, (rows, cols)) = {
            let controller = self.controller();
            (
                controller.is_running(),
                controller.generation(),
                controller.population(),
                controller.grid().shape(),
            )
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    if is_running {
                        self.pause();
                    } else {
                        self.start();
                    }
                }

                if ui.add_enabled(!is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.step();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.randomize();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", generation));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them alive/dead. Use Start/Pause to run the simulation.");

            ui.separator();

            let (response, painter) = ui.allocate_painter(grid_size(rows, cols), egui::Sense::click());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, Color32::BLACK);

            {
                let controller = self.controller();
                let grid = controller.grid();
                for row in 0..rows {
                    for col in 0..cols {
                        let x = origin.x + col as f32 * (BOX_SIZE + SPACING);
                        let y = origin.y + row as f32 * (BOX_SIZE + SPACING);
                        let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(BOX_SIZE));

                        let cell_color = if grid.is_alive(row, col) {
                            self.live_color
                        } else {
                            self.dead_color
                        };

                        painter.rect_filled(rect, 1.0, cell_color);
                        painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                    }
                }
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some((row, col)) = cell_at(origin, pos, rows, cols) {
                        self.toggle_cell(row, col);
                    }
                }
            }

            ui.separator();

            let cells = rows * cols;
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", population));
                ui.label(format!("Dead cells: {}", cells - population));
                if cells > 0 {
                    ui.label(format!(
                        "Population: {:.1}%",
                        population as f32 / cells as f32 * 100.0
                    ));
                }
            });
        });
    }
}
