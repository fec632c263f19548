use eframe::egui::{self, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top header bar
// ---------------------------------------------------------------------------

/// Render the dashboard title and row counts.
pub fn header_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Diabetes Dashboard");
        ui.separator();
        ui.label(format!(
            "{} rows loaded, {} plotted",
            state.dataset().len(),
            state.visible_indices.len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Left side panel – outcome filter
// ---------------------------------------------------------------------------

/// Render the filter panel: the `Outcome` dropdown, a reset control, and the
/// color-scale legend.
pub fn filter_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Filter data");
    ui.separator();

    // ---- Outcome dropdown ----
    ui.strong("Outcome");
    let selected_text = state
        .selected_outcome
        .map(|o| o.to_string())
        .unwrap_or_default();
    let options = state.outcome_options.clone();

    egui::ComboBox::from_id_salt("outcome_filter")
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            for outcome in &options {
                let is_selected =
                    state.filter_applied() && state.selected_outcome == Some(*outcome);
                if ui
                    .selectable_label(is_selected, outcome.to_string())
                    .clicked()
                {
                    state.select_outcome(*outcome);
                }
            }
        });

    ui.add_space(4.0);
    if state.filter_applied() {
        if ui.small_button("All outcomes").clicked() {
            state.clear_filter();
        }
    } else {
        ui.label(RichText::new("Showing all rows").weak());
    }

    ui.separator();

    // ---- Color legend ----
    ui.strong("Color by Age");
    let (min, max) = state.color_scale.range();
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(format!("{min:.0}")).color(state.color_scale.color_for(min)));
        ui.label("→");
        ui.label(RichText::new(format!("{max:.0}")).color(state.color_scale.color_for(max)));
    });
}
