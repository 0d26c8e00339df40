#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use dinodex::{
    core::dataset,
    gui::DinodexApp,
};
use eframe::egui;

fn main() -> eframe::Result {
    let records = dataset::load_or_fallback(dataset::DATASET_FILE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_title("Dinodex"),
        ..Default::default()
    };

    eframe::run_native(
        "dinodex",
        options,
        Box::new(|cc| Ok(Box::new(DinodexApp::new(cc, records)))),
    )
}
