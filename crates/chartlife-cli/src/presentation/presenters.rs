use super::view_models::{
    ComparisonViewModel, DashboardViewModel, EmptyResultViewModel, RankingsViewModel,
    RisersViewModel, SongDetailViewModel, SongListViewModel, StatsViewModel, SurvivorsViewModel,
};
use chartlife_engine as engine;
use chartlife_engine::SummaryMetrics;
use chartlife_types::{FilterSelection, LifecycleRecord};

/// Assemble the full page over one non-empty filtered view. `song` must be a
/// record of that same view; handlers resolve it before presenting.
pub fn present_dashboard(
    records: &[LifecycleRecord],
    selection: &FilterSelection,
    summary: SummaryMetrics,
    song: &LifecycleRecord,
) -> DashboardViewModel {
    DashboardViewModel {
        filters: *selection,
        summary,
        distribution: engine::lifecycle_distribution(records),
        song_detail: present_song_detail(song),
        comparisons: present_comparisons(records),
        rankings: RankingsViewModel {
            survivors: engine::top_survivors(records, engine::DEFAULT_RANKING_LIMIT),
            risers: engine::top_risers(records, engine::DEFAULT_RANKING_LIMIT),
        },
    }
}

pub fn present_stats(
    records: &[LifecycleRecord],
    selection: &FilterSelection,
    summary: SummaryMetrics,
) -> StatsViewModel {
    StatsViewModel {
        filters: *selection,
        summary,
        distribution: engine::lifecycle_distribution(records),
        comparisons: present_comparisons(records),
    }
}

pub fn present_song_detail(record: &LifecycleRecord) -> SongDetailViewModel {
    SongDetailViewModel {
        song_id: record.song_id.clone(),
        entry_date: record.entry_date.clone(),
        exit_date: record.exit_date.clone(),
        total_days: record.total_days,
        peak_rank: record.peak_rank,
        days_to_peak: record.days_to_peak,
    }
}

pub fn present_song_list(
    records: &[LifecycleRecord],
    selection: &FilterSelection,
) -> SongListViewModel {
    SongListViewModel {
        filters: *selection,
        song_ids: engine::song_ids(records),
    }
}

pub fn present_survivors(
    records: &[LifecycleRecord],
    selection: &FilterSelection,
    limit: usize,
) -> SurvivorsViewModel {
    SurvivorsViewModel {
        filters: *selection,
        entries: engine::top_survivors(records, limit),
    }
}

pub fn present_risers(
    records: &[LifecycleRecord],
    selection: &FilterSelection,
    limit: usize,
) -> RisersViewModel {
    RisersViewModel {
        filters: *selection,
        entries: engine::top_risers(records, limit),
    }
}

pub fn present_empty_result(selection: &FilterSelection) -> EmptyResultViewModel {
    EmptyResultViewModel {
        status: "empty_result".to_string(),
        message: "No data available for selected filters.".to_string(),
        filters: *selection,
    }
}

fn present_comparisons(records: &[LifecycleRecord]) -> ComparisonViewModel {
    ComparisonViewModel {
        by_album_type: engine::mean_total_days_by_album_type(records),
        by_explicit: engine::mean_total_days_by_explicit(records),
    }
}
