//! Pure analytics over lifecycle records.
//!
//! Every function here is a pure projection of an in-memory record slice:
//! filtering, scalar aggregates, the lifecycle-type distribution, grouped
//! means, song lookup, and the top-N rankings. Nothing performs I/O or holds
//! state; callers own the dataset and pass slices in, and every derived view
//! is a fresh value. An empty view short-circuits to `None`/empty collections
//! so no NaN ever reaches a renderer.

mod comparison;
mod distribution;
mod lookup;
mod rankings;
mod summary;
mod view;

pub use comparison::{
    mean_total_days_by_album_type, mean_total_days_by_explicit, ExplicitMeans, GroupMean,
};
pub use distribution::{lifecycle_distribution, LifecycleCount};
pub use lookup::{find_song, song_ids};
pub use rankings::{top_risers, top_survivors, RiserEntry, SurvivorEntry, DEFAULT_RANKING_LIMIT};
pub use summary::{compute_summary, SummaryMetrics};
pub use view::filter_records;
