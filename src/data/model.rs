use serde::Deserialize;

// ---------------------------------------------------------------------------
// PatientRecord – one row of the diabetes CSV
// ---------------------------------------------------------------------------

/// A single patient record. Field names mirror the CSV header of the
/// public Pima diabetes dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PatientRecord {
    pub pregnancies: i64,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "DiabetesPedigreeFunction")]
    pub diabetes_pedigree: f64,
    pub age: f64,
    pub outcome: i64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Immutable after load; derived column facts are
/// precomputed by [`Dataset::from_records`].
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All patient records (rows), in file order.
    records: Vec<PatientRecord>,
    /// Distinct `Outcome` values in first-occurrence order (not sorted).
    distinct_outcomes: Vec<i64>,
    /// Observed `Age` range, `None` for an empty dataset.
    age_range: Option<(f64, f64)>,
}

impl Dataset {
    /// Build the dataset and its derived column facts from parsed rows.
    pub fn from_records(records: Vec<PatientRecord>) -> Self {
        let mut distinct_outcomes = Vec::new();
        for rec in &records {
            if !distinct_outcomes.contains(&rec.outcome) {
                distinct_outcomes.push(rec.outcome);
            }
        }

        let age_range = records.iter().map(|r| r.age).fold(None, |acc, age| {
            let (min, max) = acc.unwrap_or((age, age));
            Some((f64::min(min, age), f64::max(max, age)))
        });

        Dataset {
            records,
            distinct_outcomes,
            age_range,
        }
    }

    /// All rows, in file order.
    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    /// Distinct `Outcome` values in first-occurrence order.
    pub fn distinct_outcomes(&self) -> &[i64] {
        &self.distinct_outcomes
    }

    /// Observed `Age` range across all rows.
    pub fn age_range(&self) -> Option<(f64, f64)> {
        self.age_range
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
