use eframe::egui::Ui;
use egui_plot::{Plot, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the current figure spec in the central panel.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    let figure = &state.figure;

    ui.heading(&figure.title);

    Plot::new("scatter_plot")
        .x_axis_label(&figure.x_label)
        .y_axis_label(&figure.y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One marker per point so each keeps its own color on the
            // continuous Age scale.
            for pt in &figure.points {
                let color = state.color_scale.color_for(pt.color_value);
                let marker = Points::new(vec![[pt.x, pt.y]])
                    .color(color)
                    .radius(2.5);
                plot_ui.points(marker);
            }
        });
}
