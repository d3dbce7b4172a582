use eframe::egui;

use crate::state::ChartState;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GeneticPlotApp {
    pub state: ChartState,
}

impl GeneticPlotApp {
    pub fn new(state: ChartState) -> Self {
        Self { state }
    }
}

impl eframe::App for GeneticPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Bottom bar: counts ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(format!(
                "{} records, {} threads",
                self.state.record_count,
                self.state.series.len()
            ));
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::results_plot(ui, &self.state);
        });
    }
}
