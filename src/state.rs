use crate::color::ColorScale;
use crate::data::filter::{all_indices, outcome_indices};
use crate::data::model::Dataset;
use crate::figure::{FigureSpec, scatter_figure};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is set once at construction and never mutated; every derived
/// value (visible indices, figure spec, color scale) is rebuilt from it.
pub struct AppState {
    /// The loaded dataset, read-only for the process lifetime.
    dataset: Dataset,

    /// Dropdown options: distinct `Outcome` values in first-occurrence order.
    pub outcome_options: Vec<i64>,

    /// Value shown in the dropdown. Defaults to the first option; a filter
    /// is only applied once the user actually picks a value.
    pub selected_outcome: Option<i64>,

    /// Whether a selection has been applied (the initial figure is the
    /// unfiltered one even though the dropdown displays a default).
    filter_applied: bool,

    /// Indices of rows in the current view (cached).
    pub visible_indices: Vec<usize>,

    /// Current figure spec, rebuilt on every filter change.
    pub figure: FigureSpec,

    /// Color scale over the dataset's full `Age` range. Fixed across filter
    /// changes so colors stay comparable between views.
    pub color_scale: ColorScale,
}

impl AppState {
    /// Seed the state with the static (unfiltered) figure.
    pub fn new(dataset: Dataset) -> Self {
        let outcome_options = dataset.distinct_outcomes().to_vec();
        let selected_outcome = outcome_options.first().copied();
        let visible_indices = all_indices(&dataset);
        let figure = scatter_figure(&dataset, &visible_indices);
        let color_scale = ColorScale::new(dataset.age_range());

        AppState {
            dataset,
            outcome_options,
            selected_outcome,
            filter_applied: false,
            visible_indices,
            figure,
            color_scale,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Whether the current view is filtered to a single outcome.
    pub fn filter_applied(&self) -> bool {
        self.filter_applied
    }

    /// The reactive update rule: filter to the chosen `Outcome`, rebuild the
    /// figure over the filtered rows. Re-invoking with the same value yields
    /// an identical figure.
    pub fn select_outcome(&mut self, outcome: i64) {
        self.selected_outcome = Some(outcome);
        self.filter_applied = true;
        self.visible_indices = outcome_indices(&self.dataset, outcome);
        self.figure = scatter_figure(&self.dataset, &self.visible_indices);
    }

    /// Drop the filter and restore the static figure over all rows. The
    /// dropdown falls back to its default display value.
    pub fn clear_filter(&mut self) {
        self.selected_outcome = self.outcome_options.first().copied();
        self.filter_applied = false;
        self.visible_indices = all_indices(&self.dataset);
        self.figure = scatter_figure(&self.dataset, &self.visible_indices);
    }
}
