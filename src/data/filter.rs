use super::model::Dataset;

// ---------------------------------------------------------------------------
// Outcome filter
// ---------------------------------------------------------------------------

/// Return indices of rows whose `Outcome` equals `outcome`, in file order.
///
/// An outcome absent from the dataset simply yields an empty vector; the
/// caller renders an empty plot rather than treating this as an error.
pub fn outcome_indices(dataset: &Dataset, outcome: i64) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| rec.outcome == outcome)
        .map(|(i, _)| i)
        .collect()
}

/// Indices of all rows (the unfiltered view).
pub fn all_indices(dataset: &Dataset) -> Vec<usize> {
    (0..dataset.len()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::sample_dataset;

    #[test]
    fn selects_exactly_the_matching_rows() {
        let ds = sample_dataset();

        let ones = outcome_indices(&ds, 1);
        let zeros = outcome_indices(&ds, 0);

        assert_eq!(ones, vec![0, 2, 4]);
        assert_eq!(zeros, vec![1, 3]);
        for &i in &ones {
            assert_eq!(ds.records()[i].outcome, 1);
        }
        for &i in &zeros {
            assert_eq!(ds.records()[i].outcome, 0);
        }
    }

    #[test]
    fn outcome_subsets_partition_the_dataset() {
        let ds = sample_dataset();

        let mut combined: Vec<usize> = ds
            .distinct_outcomes()
            .iter()
            .flat_map(|&o| outcome_indices(&ds, o))
            .collect();
        combined.sort_unstable();

        // No overlap, no omissions.
        assert_eq!(combined, all_indices(&ds));
    }

    #[test]
    fn unknown_outcome_yields_empty_selection() {
        let ds = sample_dataset();
        assert!(outcome_indices(&ds, 7).is_empty());
    }
}
