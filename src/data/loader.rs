use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Dataset, Record};

/// Columns the input file must provide. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] =
    ["claim_text", "report_text", "predicted_label", "confidence"];

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Everything that can go wrong while turning a file into a [`Dataset`].
///
/// All variants are terminal for the load: no partial dataset is ever
/// returned, and the caller's previously loaded data is left untouched.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0} (expected .csv or .json)")]
    UnsupportedExtension(String),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("row {row}: {problem}")]
    Row { row: usize, problem: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a predictions dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with the four required columns (the format the
///   upstream classifier writes)
/// * `.json` – `[{ "claim_text": ..., "report_text": ..., ... }, ...]`
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = open(path)?;
            read_csv(file)
        }
        "json" => {
            let file = open(path)?;
            read_json(file)
        }
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

fn open(path: &Path) -> Result<std::fs::File, LoadError> {
    std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse CSV from any reader.
///
/// The header is validated before any row is parsed, so a file with a
/// missing column fails with the column's name rather than an opaque row
/// error. Row numbers in errors are 1-based data rows (header excluded).
pub fn read_csv<R: Read>(input: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_reader(input);

    let headers = reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required));
        }
    }

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<Record>().enumerate() {
        let row = i + 1;
        let record = result.map_err(|e| LoadError::Row {
            row,
            problem: e.to_string(),
        })?;
        validate_confidence(&record, row)?;
        records.push(record);
    }

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Parse a top-level JSON array of record objects (the default
/// `df.to_json(orient='records')` layout).
pub fn read_json<R: Read>(input: R) -> Result<Dataset, LoadError> {
    let records: Vec<Record> = serde_json::from_reader(input)?;
    for (i, record) in records.iter().enumerate() {
        validate_confidence(record, i + 1)?;
    }
    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Shared validation
// ---------------------------------------------------------------------------

/// Confidence is a classifier probability; anything outside [0, 1] (or NaN)
/// means the input file is corrupt, not merely surprising.
fn validate_confidence(record: &Record, row: usize) -> Result<(), LoadError> {
    let c = record.confidence;
    if !c.is_finite() || !(0.0..=1.0).contains(&c) {
        return Err(LoadError::Row {
            row,
            problem: format!("confidence {c} outside [0.0, 1.0]"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LABEL_FULFILLED, LABEL_UNFULFILLED};

    const GOOD_CSV: &str = "\
claim_text,report_text,predicted_label,confidence
Free textbooks for all,Books missing in 3 districts,Unfulfilled,0.82
Roads repaved by June,Repaving completed on time,Fulfilled,0.91
";

    #[test]
    fn csv_happy_path_preserves_row_order() {
        let ds = read_csv(GOOD_CSV.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].predicted_label, LABEL_UNFULFILLED);
        assert_eq!(ds.records[0].confidence, 0.82);
        assert_eq!(ds.records[1].predicted_label, LABEL_FULFILLED);
        assert_eq!(
            ds.labels.iter().collect::<Vec<_>>(),
            vec![LABEL_FULFILLED, LABEL_UNFULFILLED]
        );
    }

    #[test]
    fn csv_extra_columns_are_ignored() {
        let csv = "\
claim_text,report_text,predicted_label,confidence,district
c,r,Fulfilled,0.5,North
";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn csv_missing_column_fails_fast_with_its_name() {
        let csv = "claim_text,report_text,predicted_label\nc,r,Fulfilled\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        match err {
            LoadError::MissingColumn(col) => assert_eq!(col, "confidence"),
            other => panic!("expected MissingColumn, got {other}"),
        }
    }

    #[test]
    fn csv_unparseable_confidence_names_the_row() {
        let csv = "\
claim_text,report_text,predicted_label,confidence
c1,r1,Fulfilled,0.9
c2,r2,Fulfilled,not-a-number
";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        match err {
            LoadError::Row { row, .. } => assert_eq!(row, 2),
            other => panic!("expected Row error, got {other}"),
        }
    }

    #[test]
    fn confidence_outside_unit_interval_is_rejected() {
        let csv = "\
claim_text,report_text,predicted_label,confidence
c,r,Fulfilled,1.5
";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        match err {
            LoadError::Row { row, problem } => {
                assert_eq!(row, 1);
                assert!(problem.contains("1.5"), "problem was: {problem}");
            }
            other => panic!("expected Row error, got {other}"),
        }
    }

    #[test]
    fn json_happy_path() {
        let json = r#"[
            {"claim_text": "c", "report_text": "r",
             "predicted_label": "Neutral / Unclear", "confidence": 0.42}
        ]"#;
        let ds = read_json(json.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].predicted_label, "Neutral / Unclear");
    }

    #[test]
    fn json_missing_field_is_an_error() {
        let json = r#"[{"claim_text": "c", "report_text": "r", "confidence": 0.5}]"#;
        assert!(matches!(read_json(json.as_bytes()), Err(LoadError::Json(_))));
    }

    #[test]
    fn unsupported_extension_is_rejected_before_io() {
        // The path does not exist; dispatch must fail on the extension alone.
        let err = load_file(Path::new("/nonexistent/predictions.xlsx")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedExtension(ext) if ext == "xlsx"));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_file(Path::new("/nonexistent/predictions.csv")).unwrap_err();
        match err {
            LoadError::Io { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/predictions.csv"))
            }
            other => panic!("expected Io error, got {other}"),
        }
    }

    #[test]
    fn empty_csv_with_valid_header_loads_empty_dataset() {
        let csv = "claim_text,report_text,predicted_label,confidence\n";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert!(ds.is_empty());
    }
}
