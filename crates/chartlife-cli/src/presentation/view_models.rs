use chartlife_engine::{
    ExplicitMeans, GroupMean, LifecycleCount, RiserEntry, SummaryMetrics, SurvivorEntry,
};
use chartlife_types::FilterSelection;
use serde::Serialize;

/// The full analytics page, block by block in render order.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardViewModel {
    pub filters: FilterSelection,
    pub summary: SummaryMetrics,
    pub distribution: Vec<LifecycleCount>,
    pub song_detail: SongDetailViewModel,
    pub comparisons: ComparisonViewModel,
    pub rankings: RankingsViewModel,
}

/// The five-field detail panel for one song of the filtered view.
#[derive(Debug, Clone, Serialize)]
pub struct SongDetailViewModel {
    pub song_id: String,
    pub entry_date: String,
    pub exit_date: String,
    pub total_days: f64,
    pub peak_rank: u32,
    pub days_to_peak: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonViewModel {
    pub by_album_type: Vec<GroupMean>,
    pub by_explicit: ExplicitMeans,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingsViewModel {
    pub survivors: Vec<SurvivorEntry>,
    pub risers: Vec<RiserEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsViewModel {
    pub filters: FilterSelection,
    pub summary: SummaryMetrics,
    pub distribution: Vec<LifecycleCount>,
    pub comparisons: ComparisonViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct SongListViewModel {
    pub filters: FilterSelection,
    pub song_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SurvivorsViewModel {
    pub filters: FilterSelection,
    pub entries: Vec<SurvivorEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RisersViewModel {
    pub filters: FilterSelection,
    pub entries: Vec<RiserEntry>,
}

/// Short-circuit block for a filter selection that matches no rows.
#[derive(Debug, Clone, Serialize)]
pub struct EmptyResultViewModel {
    pub status: String,
    pub message: String,
    pub filters: FilterSelection,
}
