use crate::error::{Error, Result};
use chartlife_types::{LifecycleRecord, REQUIRED_COLUMNS};
use std::fs::File;
use std::path::Path;

/// Read the full lifecycle table from `path`.
///
/// The header row is validated against the required column set before any row
/// is deserialized, so pointing at the wrong file fails with a column listing
/// rather than a row-level type error. Extra columns are tolerated. Returns
/// every row or an error; a partially parsed table is never surfaced.
pub fn read_records(path: &Path) -> Result<Vec<LifecycleRecord>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingColumns(missing));
    }

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: LifecycleRecord = row?;
        records.push(record);
    }
    Ok(records)
}
