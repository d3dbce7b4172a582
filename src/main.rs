mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use app::GeneticPlotApp;
use eframe::egui;
use state::ChartState;

fn main() -> Result<()> {
    env_logger::init();

    // Load fully before any window exists.
    let dataset = match data::loader::load_file(Path::new(config::DATA_FILE)) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load {}: {e}", config::DATA_FILE);
            return Err(e).with_context(|| format!("loading {}", config::DATA_FILE));
        }
    };

    if dataset.is_empty() {
        log::warn!("{} contains no records", config::DATA_FILE);
    }
    log::info!(
        "Loaded {} records across {} threads",
        dataset.len(),
        dataset.threads().len()
    );
    let state = ChartState::from_dataset(&dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        config::CHART_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(GeneticPlotApp::new(state)))),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}
