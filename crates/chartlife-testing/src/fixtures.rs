//! Sample dataset generation for chartlife tests.
//!
//! The sample table is small enough to recompute aggregates by hand and wide
//! enough to exercise both filter axes, an out-of-vocabulary album type, tied
//! ranking values, and every lifecycle bucket ordering rule.

use anyhow::Result;
use chartlife_types::LifecycleRecord;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Build one lifecycle record with fixed placeholder dates.
pub fn record(
    song_id: &str,
    is_explicit: bool,
    album_type: &str,
    total_days: f64,
    peak_rank: u32,
    days_to_peak: f64,
    lifecycle_type: &str,
) -> LifecycleRecord {
    LifecycleRecord {
        song_id: song_id.to_string(),
        is_explicit,
        album_type: album_type.to_string(),
        entry_date: "2024-01-05".to_string(),
        exit_date: "2024-02-24".to_string(),
        total_days,
        peak_rank,
        days_to_peak,
        lifecycle_type: lifecycle_type.to_string(),
    }
}

/// The standard eight-row sample table.
///
/// Hand-checked aggregates over the full table:
/// - song_count 8, mean total_days 39.88, mean days_to_peak 11.00
/// - distribution: fader 3, riser 2, steady 2, one_shot 1
/// - album-type means: album 43.00, compilation 21.00, single 42.25
/// - explicit means: clean 49.75, explicit 30.00
pub fn sample_records() -> Vec<LifecycleRecord> {
    vec![
        record("s001", true, "single", 50.0, 3, 5.0, "riser"),
        record("s002", false, "album", 80.0, 1, 20.0, "steady"),
        record("s003", true, "single", 21.0, 12, 2.0, "riser"),
        record("s004", false, "single", 42.0, 7, 14.0, "fader"),
        record("s005", true, "album", 14.0, 25, 3.0, "one_shot"),
        record("s006", false, "single", 56.0, 2, 28.0, "steady"),
        record("s007", true, "album", 35.0, 9, 10.0, "fader"),
        record("s008", false, "compilation", 21.0, 30, 6.0, "fader"),
    ]
}

/// Write `records` as a dataset CSV (header row included) at `path`.
pub fn write_dataset(path: &Path, records: &[LifecycleRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Materialize the standard sample table in a fresh temp directory.
///
/// Returns the directory guard together with the dataset path; dropping the
/// guard deletes the file.
pub fn sample_dataset_dir() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("final_lifecycle_dataset.csv");
    write_dataset(&path, &sample_records())?;
    Ok((dir, path))
}
