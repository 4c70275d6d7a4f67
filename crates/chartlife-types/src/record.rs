use serde::{Deserialize, Deserializer, Serialize};

/// Column names the dataset header must carry, in upstream order.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "song_id",
    "is_explicit",
    "album_type",
    "entry_date",
    "exit_date",
    "total_days",
    "peak_rank",
    "days_to_peak",
    "lifecycle_type",
];

/// One song chart run, as produced by the upstream pipeline.
///
/// `total_days` and `days_to_peak` are computed upstream; nothing in this
/// workspace re-derives them from the date columns, which are carried as
/// display strings. Expected invariants (`total_days >= 0`,
/// `0 <= days_to_peak <= total_days`, `peak_rank >= 1`) are not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleRecord {
    /// Identifier, unique within one chart run context. A song may reappear
    /// in the table as a separate run.
    pub song_id: String,
    /// The upstream pipeline encodes booleans in `True`/`False` style.
    #[serde(deserialize_with = "bool_from_dataset")]
    pub is_explicit: bool,
    /// Expected vocabulary `single` | `album` (lowercase). Values outside the
    /// vocabulary are carried verbatim, never rejected.
    pub album_type: String,
    pub entry_date: String,
    pub exit_date: String,
    /// Days the song remained on the chart (exit - entry, computed upstream).
    pub total_days: f64,
    /// Best (numerically lowest) chart position reached.
    pub peak_rank: u32,
    /// Days from entry until the peak rank was reached.
    pub days_to_peak: f64,
    /// Opaque upstream taxonomy label (e.g. "riser", "fader").
    pub lifecycle_type: String,
}

/// Accepts the boolean spellings that show up in delimited exports:
/// `true`/`false` in any casing, plus `1`/`0`.
fn bool_from_dataset<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "1" => Ok(true),
        "0" => Ok(false),
        other if other.eq_ignore_ascii_case("true") => Ok(true),
        other if other.eq_ignore_ascii_case("false") => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid boolean value: {:?}",
            other
        ))),
    }
}
