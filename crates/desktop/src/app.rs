//! Main application module

use std::path::PathBuf;

use eframe::egui;
use egui_phosphor::regular;

use itemfinder_core::load_items;
use itemfinder_core::ui::ItemTableView;

use crate::config::Config;

pub struct ItemFinderApp {
    pub(crate) config: Config,
    table: ItemTableView,
    items_path: PathBuf,
    status: String,
}

impl ItemFinderApp {
    pub fn new(items_path: PathBuf) -> Self {
        let mut app = Self {
            config: Config::load(),
            table: ItemTableView::new(),
            items_path,
            status: String::new(),
        };
        app.reload_items();
        app
    }

    /// Load the items export and push it into the table. A failed load keeps
    /// the previous table contents and only updates the status line.
    fn reload_items(&mut self) {
        match load_items(&self.items_path) {
            Ok(items) => {
                self.status = format!(
                    "Loaded {} items at {}",
                    items.len(),
                    chrono::Local::now().format("%H:%M:%S")
                );
                self.table.set_items(items);
            }
            Err(e) => {
                eprintln!("{}", e);
                self.status = e.to_string();
            }
        }
    }

    fn render_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Item Finder");
                ui.separator();

                if ui
                    .button(format!("{} Reload", regular::ARROWS_CLOCKWISE))
                    .on_hover_text(self.items_path.display().to_string())
                    .clicked()
                {
                    self.reload_items();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(egui::Label::new(&self.status).truncate());
                });
            });
        });
    }

    fn render_items_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("Dropped Items ({})", self.table.model().row_count()));
            ui.separator();

            if self.table.model().row_count() == 0 {
                ui.label("No items loaded. Export a dropped-items list and click 'Reload'.");
                return;
            }

            self.table.show(ui);
        });
    }
}

impl eframe::App for ItemFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window state for persistence (only when not maximized to
        // preserve the restore size)
        ctx.input(|i| {
            let maximized = i.viewport().maximized.unwrap_or(false);
            self.config.window_maximized = maximized;
            if !maximized {
                if let Some(rect) = i.viewport().inner_rect {
                    self.config.window_x = Some(rect.min.x);
                    self.config.window_y = Some(rect.min.y);
                    self.config.window_width = Some(rect.width());
                    self.config.window_height = Some(rect.height());
                }
            }
        });

        self.render_top_panel(ctx);
        self.render_items_panel(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Save window state to config on exit
        let _ = self.config.save();
    }
}
