use serde::Serialize;

use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Figure specification
// ---------------------------------------------------------------------------

/// Title shared by the static and filtered scatter plots.
pub const SCATTER_TITLE: &str = "Blood Pressure vs BMI colored by Age";

/// One plotted point: axis values plus the raw value driving the color scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigurePoint {
    pub x: f64,
    pub y: f64,
    pub color_value: f64,
}

/// A declarative scatter-plot description: axis/color bindings, title, and
/// the resolved point set. Built fresh on every filter change and handed to
/// the plot renderer as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color_label: String,
    pub points: Vec<FigurePoint>,
}

/// Build the scatter spec over the rows named by `indices`.
///
/// Pure function of its inputs: the same dataset and indices always produce
/// the same spec. Zero indices produce a zero-point figure.
pub fn scatter_figure(dataset: &Dataset, indices: &[usize]) -> FigureSpec {
    let points = indices
        .iter()
        .map(|&i| {
            let rec = &dataset.records()[i];
            FigurePoint {
                x: rec.blood_pressure,
                y: rec.bmi,
                color_value: rec.age,
            }
        })
        .collect();

    FigureSpec {
        title: SCATTER_TITLE.to_string(),
        x_label: "BloodPressure".to_string(),
        y_label: "BMI".to_string(),
        color_label: "Age".to_string(),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{all_indices, outcome_indices};
    use crate::data::model::tests::sample_dataset;

    #[test]
    fn static_figure_has_one_point_per_row() {
        let ds = sample_dataset();
        let fig = scatter_figure(&ds, &all_indices(&ds));

        assert_eq!(fig.points.len(), ds.len());
        assert_eq!(fig.title, SCATTER_TITLE);
        assert_eq!(fig.x_label, "BloodPressure");
        assert_eq!(fig.y_label, "BMI");
        assert_eq!(fig.color_label, "Age");
    }

    #[test]
    fn points_carry_the_bound_columns() {
        let ds = sample_dataset();
        let fig = scatter_figure(&ds, &[0]);

        let rec = &ds.records()[0];
        assert_eq!(fig.points[0].x, rec.blood_pressure);
        assert_eq!(fig.points[0].y, rec.bmi);
        assert_eq!(fig.points[0].color_value, rec.age);
    }

    #[test]
    fn rebuilding_with_same_inputs_is_identical() {
        let ds = sample_dataset();
        let indices = outcome_indices(&ds, 0);

        let a = scatter_figure(&ds, &indices);
        let b = scatter_figure(&ds, &indices);

        assert_eq!(a, b);
        // The serialized form is stable too.
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn empty_selection_produces_an_empty_figure() {
        let ds = sample_dataset();
        let fig = scatter_figure(&ds, &[]);
        assert!(fig.points.is_empty());
        assert_eq!(fig.title, SCATTER_TITLE);
    }
}
