use chartlife_types::LifecycleRecord;
use serde::Serialize;

/// Scalar aggregates over one filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub song_count: usize,
    /// Mean of `total_days`, rounded to 2 decimal places.
    pub mean_total_days: f64,
    /// Mean of `days_to_peak`, rounded to 2 decimal places.
    pub mean_days_to_peak: f64,
}

/// Returns `None` for an empty view instead of surfacing NaN means.
pub fn compute_summary(records: &[LifecycleRecord]) -> Option<SummaryMetrics> {
    if records.is_empty() {
        return None;
    }

    let count = records.len() as f64;
    let total_days: f64 = records.iter().map(|r| r.total_days).sum();
    let days_to_peak: f64 = records.iter().map(|r| r.days_to_peak).sum();

    Some(SummaryMetrics {
        song_count: records.len(),
        mean_total_days: round2(total_days / count),
        mean_days_to_peak: round2(days_to_peak / count),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
