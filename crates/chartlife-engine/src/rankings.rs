use chartlife_types::LifecycleRecord;
use serde::Serialize;

/// Number of rows shown in a ranking table unless the caller asks otherwise.
pub const DEFAULT_RANKING_LIMIT: usize = 10;

/// Projection of one longest-survivor row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurvivorEntry {
    pub song_id: String,
    pub total_days: f64,
    pub peak_rank: u32,
}

/// Projection of one fastest-riser row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiserEntry {
    pub song_id: String,
    pub days_to_peak: f64,
    pub peak_rank: u32,
}

/// Longest-surviving songs: stable sort by `total_days` descending, first
/// `limit` rows. Ties keep original row order.
pub fn top_survivors(records: &[LifecycleRecord], limit: usize) -> Vec<SurvivorEntry> {
    let mut sorted: Vec<&LifecycleRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.total_days.total_cmp(&a.total_days));

    sorted
        .into_iter()
        .take(limit)
        .map(|r| SurvivorEntry {
            song_id: r.song_id.clone(),
            total_days: r.total_days,
            peak_rank: r.peak_rank,
        })
        .collect()
}

/// Fastest-rising songs: stable sort by `days_to_peak` ascending, first
/// `limit` rows. Ties keep original row order.
pub fn top_risers(records: &[LifecycleRecord], limit: usize) -> Vec<RiserEntry> {
    let mut sorted: Vec<&LifecycleRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.days_to_peak.total_cmp(&b.days_to_peak));

    sorted
        .into_iter()
        .take(limit)
        .map(|r| RiserEntry {
            song_id: r.song_id.clone(),
            days_to_peak: r.days_to_peak,
            peak_rank: r.peak_rank,
        })
        .collect()
}
