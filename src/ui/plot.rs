use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::config::{CHART_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL};
use crate::state::ChartState;

// ---------------------------------------------------------------------------
// Score-per-generation plot (central panel)
// ---------------------------------------------------------------------------

/// Render the title and one line per thread on shared axes.
pub fn results_plot(ui: &mut Ui, state: &ChartState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(CHART_TITLE);
    });

    Plot::new("results_plot")
        .legend(Legend::default())
        .x_axis_label(X_AXIS_LABEL)
        .y_axis_label(Y_AXIS_LABEL)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &state.series {
                let points: PlotPoints = series.points.iter().copied().collect();

                let line = Line::new(points)
                    .name(series.label())
                    .color(state.color_map.color_for(&series.thread))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}
