mod app;
mod color;
mod data;
mod figure;
mod state;
mod ui;

use app::DashboardApp;
use data::loader::{self, DATA_URL};
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // One-shot fetch before the event loop starts. Any failure aborts the
    // process; there is no retry or fallback.
    let dataset = match loader::fetch_dataset(DATA_URL) {
        Ok(ds) => {
            log::info!(
                "Loaded {} rows, outcomes {:?}",
                ds.len(),
                ds.distinct_outcomes()
            );
            ds
        }
        Err(e) => {
            log::error!("Failed to load dataset: {e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Diabetes Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(dataset)))),
    )
}
