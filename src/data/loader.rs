use std::io::Read;

use anyhow::{Context, Result, bail};

use super::model::{Dataset, PatientRecord};

/// The public diabetes dataset served from the plotly datasets repository.
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/plotly/datasets/master/diabetes-vid.csv";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Fetch the CSV from `url` and parse it into a [`Dataset`].
///
/// One-shot: any network or parse failure is returned as-is, with no retry
/// and no partial result.
pub fn fetch_dataset(url: &str) -> Result<Dataset> {
    let response = reqwest::blocking::get(url)
        .with_context(|| format!("fetching {url}"))?
        .error_for_status()
        .with_context(|| format!("fetching {url}"))?;

    read_csv(response)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse CSV text into a [`Dataset`].
///
/// Expects the dataset's header row (`Pregnancies,Glucose,BloodPressure,...`);
/// every data row must deserialize into a [`PatientRecord`].
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut records = Vec::new();
    for (row_no, result) in csv_reader.deserialize::<PatientRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    if records.is_empty() {
        bail!("CSV contained a header but no data rows");
    }

    Ok(Dataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction,Age,Outcome";

    #[test]
    fn parses_well_formed_csv() {
        let csv = format!(
            "{HEADER}\n\
             6,148,72,35,0,33.6,0.627,50,1\n\
             1,85,66,29,0,26.6,0.351,31,0\n"
        );
        let ds = read_csv(csv.as_bytes()).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.distinct_outcomes(), &[1, 0]);

        let first = &ds.records()[0];
        assert_eq!(first.blood_pressure, 72.0);
        assert_eq!(first.bmi, 33.6);
        assert_eq!(first.age, 50.0);
        assert_eq!(first.outcome, 1);
    }

    #[test]
    fn rejects_missing_column() {
        // No Outcome column.
        let csv = "Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction,Age\n\
                   6,148,72,35,0,33.6,0.627,50\n";
        assert!(read_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn rejects_non_numeric_cell() {
        let csv = format!("{HEADER}\n6,148,n/a,35,0,33.6,0.627,50,1\n");
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("CSV row 0"));
    }

    #[test]
    fn rejects_header_only_payload() {
        let csv = format!("{HEADER}\n");
        assert!(read_csv(csv.as_bytes()).is_err());
    }
}
