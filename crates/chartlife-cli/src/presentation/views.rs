use super::formatters::{format_days, scaled_bar};
use super::view_models::{
    ComparisonViewModel, DashboardViewModel, EmptyResultViewModel, RisersViewModel,
    SongDetailViewModel, SongListViewModel, StatsViewModel, SurvivorsViewModel,
};
use chartlife_engine::{LifecycleCount, RiserEntry, SummaryMetrics, SurvivorEntry};
use chartlife_types::FilterSelection;
use owo_colors::OwoColorize;
use std::fmt;

const SECTION_RULE_WIDTH: usize = 60;
const BAR_WIDTH: usize = 30;

/// The full analytics page in its fixed block order.
pub struct DashboardView<'a> {
    pub dashboard: &'a DashboardViewModel,
    pub enable_color: bool,
}

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vm = self.dashboard;

        write_title(f, self.enable_color)?;
        write_filters(f, &vm.filters)?;
        writeln!(f)?;
        write_summary(f, &vm.summary, self.enable_color)?;
        writeln!(f)?;
        write_distribution(f, &vm.distribution, self.enable_color)?;
        writeln!(f)?;
        write_song_detail(f, &vm.song_detail, self.enable_color)?;
        writeln!(f)?;
        write_comparisons(f, &vm.comparisons, self.enable_color)?;
        writeln!(f)?;
        write_section(f, "TOP PERFORMERS", self.enable_color)?;
        writeln!(f, "Longest surviving songs:")?;
        write_survivor_table(f, &vm.rankings.survivors)?;
        writeln!(f)?;
        writeln!(f, "Fastest rising songs:")?;
        write_riser_table(f, &vm.rankings.risers)
    }
}

pub struct StatsView<'a> {
    pub stats: &'a StatsViewModel,
    pub enable_color: bool,
}

impl fmt::Display for StatsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vm = self.stats;

        write_title(f, self.enable_color)?;
        write_filters(f, &vm.filters)?;
        writeln!(f)?;
        write_summary(f, &vm.summary, self.enable_color)?;
        writeln!(f)?;
        write_distribution(f, &vm.distribution, self.enable_color)?;
        writeln!(f)?;
        write_comparisons(f, &vm.comparisons, self.enable_color)
    }
}

pub struct SongListView<'a> {
    pub list: &'a SongListViewModel,
}

impl fmt::Display for SongListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vm = self.list;

        write_filters(f, &vm.filters)?;
        writeln!(f, "{} song(s) in the filtered view:", vm.song_ids.len())?;
        for id in &vm.song_ids {
            writeln!(f, "  {}", id)?;
        }
        Ok(())
    }
}

pub struct SongDetailView<'a> {
    pub song: &'a SongDetailViewModel,
    pub enable_color: bool,
}

impl fmt::Display for SongDetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_song_detail(f, self.song, self.enable_color)
    }
}

pub struct SurvivorsView<'a> {
    pub survivors: &'a SurvivorsViewModel,
}

impl fmt::Display for SurvivorsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_filters(f, &self.survivors.filters)?;
        writeln!(f, "Longest surviving songs:")?;
        write_survivor_table(f, &self.survivors.entries)
    }
}

pub struct RisersView<'a> {
    pub risers: &'a RisersViewModel,
}

impl fmt::Display for RisersView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_filters(f, &self.risers.filters)?;
        writeln!(f, "Fastest rising songs:")?;
        write_riser_table(f, &self.risers.entries)
    }
}

pub struct EmptyResultView<'a> {
    pub result: &'a EmptyResultViewModel,
    pub enable_color: bool,
}

impl fmt::Display for EmptyResultView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vm = self.result;
        let suffix = format!(
            "(explicit={} album={})",
            vm.filters.explicit, vm.filters.album
        );
        if self.enable_color {
            writeln!(f, "{} {} {}", "Warning:".yellow(), vm.message, suffix)
        } else {
            writeln!(f, "Warning: {} {}", vm.message, suffix)
        }
    }
}

fn write_title(f: &mut fmt::Formatter<'_>, enable_color: bool) -> fmt::Result {
    if enable_color {
        writeln!(f, "{}", "Song Lifecycle Analytics".bright_cyan())
    } else {
        writeln!(f, "Song Lifecycle Analytics")
    }
}

fn write_filters(f: &mut fmt::Formatter<'_>, filters: &FilterSelection) -> fmt::Result {
    writeln!(
        f,
        "Filters: explicit={} album={}",
        filters.explicit, filters.album
    )
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, enable_color: bool) -> fmt::Result {
    if enable_color {
        writeln!(f, "{}", title.bold())?;
    } else {
        writeln!(f, "{}", title)?;
    }
    writeln!(f, "{}", "-".repeat(SECTION_RULE_WIDTH))
}

fn write_summary(
    f: &mut fmt::Formatter<'_>,
    summary: &SummaryMetrics,
    enable_color: bool,
) -> fmt::Result {
    write_section(f, "KEY METRICS", enable_color)?;
    writeln!(f, "Total Songs:           {}", summary.song_count)?;
    writeln!(
        f,
        "Average Lifespan:      {:.2} days",
        summary.mean_total_days
    )?;
    writeln!(
        f,
        "Average Days to Peak:  {:.2} days",
        summary.mean_days_to_peak
    )
}

fn write_distribution(
    f: &mut fmt::Formatter<'_>,
    buckets: &[LifecycleCount],
    enable_color: bool,
) -> fmt::Result {
    write_section(f, "LIFECYCLE TYPE DISTRIBUTION", enable_color)?;
    let label_width = buckets
        .iter()
        .map(|b| b.lifecycle_type.len())
        .max()
        .unwrap_or(0);
    let max_count = buckets.iter().map(|b| b.count).max().unwrap_or(0) as f64;

    for bucket in buckets {
        writeln!(
            f,
            "  {:<width$}  {} {}",
            bucket.lifecycle_type,
            scaled_bar(bucket.count as f64, max_count, BAR_WIDTH),
            bucket.count,
            width = label_width
        )?;
    }
    Ok(())
}

fn write_song_detail(
    f: &mut fmt::Formatter<'_>,
    song: &SongDetailViewModel,
    enable_color: bool,
) -> fmt::Result {
    write_section(f, &format!("SONG DETAIL: {}", song.song_id), enable_color)?;
    writeln!(f, "Entry Date:    {}", song.entry_date)?;
    writeln!(f, "Exit Date:     {}", song.exit_date)?;
    writeln!(f, "Total Days:    {}", format_days(song.total_days))?;
    writeln!(f, "Peak Rank:     {}", song.peak_rank)?;
    writeln!(f, "Days to Peak:  {}", format_days(song.days_to_peak))
}

fn write_comparisons(
    f: &mut fmt::Formatter<'_>,
    comparisons: &ComparisonViewModel,
    enable_color: bool,
) -> fmt::Result {
    write_section(f, "PERFORMANCE COMPARISONS", enable_color)?;

    writeln!(f, "Average lifespan by album type:")?;
    let label_width = comparisons
        .by_album_type
        .iter()
        .map(|m| m.group.len())
        .max()
        .unwrap_or(0);
    let max_mean = comparisons
        .by_album_type
        .iter()
        .map(|m| m.mean_total_days)
        .fold(0.0_f64, f64::max);
    for group_mean in &comparisons.by_album_type {
        writeln!(
            f,
            "  {:<width$}  {} {:.2}",
            group_mean.group,
            scaled_bar(group_mean.mean_total_days, max_mean, BAR_WIDTH),
            group_mean.mean_total_days,
            width = label_width
        )?;
    }

    writeln!(f)?;
    writeln!(f, "Average lifespan, clean vs explicit:")?;
    let pairs = [
        ("clean", comparisons.by_explicit.clean),
        ("explicit", comparisons.by_explicit.explicit),
    ];
    let max_mean = pairs
        .iter()
        .filter_map(|(_, mean)| *mean)
        .fold(0.0_f64, f64::max);
    for (label, mean) in pairs {
        if let Some(mean) = mean {
            writeln!(
                f,
                "  {:<8}  {} {:.2}",
                label,
                scaled_bar(mean, max_mean, BAR_WIDTH),
                mean
            )?;
        }
    }
    Ok(())
}

fn write_survivor_table(f: &mut fmt::Formatter<'_>, entries: &[SurvivorEntry]) -> fmt::Result {
    let id_width = entries
        .iter()
        .map(|e| e.song_id.len())
        .max()
        .unwrap_or(0)
        .max("SONG ID".len());

    writeln!(
        f,
        "  {:<id_width$}  {:>10}  {:>9}",
        "SONG ID",
        "TOTAL DAYS",
        "PEAK RANK",
        id_width = id_width
    )?;
    for entry in entries {
        writeln!(
            f,
            "  {:<id_width$}  {:>10}  {:>9}",
            entry.song_id,
            format_days(entry.total_days),
            entry.peak_rank,
            id_width = id_width
        )?;
    }
    Ok(())
}

fn write_riser_table(f: &mut fmt::Formatter<'_>, entries: &[RiserEntry]) -> fmt::Result {
    let id_width = entries
        .iter()
        .map(|e| e.song_id.len())
        .max()
        .unwrap_or(0)
        .max("SONG ID".len());

    writeln!(
        f,
        "  {:<id_width$}  {:>12}  {:>9}",
        "SONG ID",
        "DAYS TO PEAK",
        "PEAK RANK",
        id_width = id_width
    )?;
    for entry in entries {
        writeln!(
            f,
            "  {:<id_width$}  {:>12}  {:>9}",
            entry.song_id,
            format_days(entry.days_to_peak),
            entry.peak_rank,
            id_width = id_width
        )?;
    }
    Ok(())
}
