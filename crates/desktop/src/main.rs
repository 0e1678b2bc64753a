// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;

use std::path::PathBuf;

use app::ItemFinderApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    // Load config to get saved window state
    let config = config::Config::load();

    // Items file: a CLI argument wins over the configured path
    let items_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.items_path));

    // Build viewport with saved or default size/position
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([
        config.window_width.unwrap_or(900.0),
        config.window_height.unwrap_or(600.0),
    ]);

    if let (Some(x), Some(y)) = (config.window_x, config.window_y) {
        viewport = viewport.with_position([x, y]);
    }

    if config.window_maximized {
        viewport = viewport.with_maximized(true);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Item Finder",
        options,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(ItemFinderApp::new(items_path)))
        }),
    )
}
