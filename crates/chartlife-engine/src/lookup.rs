use chartlife_types::LifecycleRecord;

/// Distinct song ids of the view, lexicographically sorted.
///
/// Selection lists must always be derived from the currently filtered view,
/// never the full table, so an excluded id can never be offered.
pub fn song_ids(records: &[LifecycleRecord]) -> Vec<String> {
    let mut ids: Vec<String> = records.iter().map(|r| r.song_id.clone()).collect();
    ids.sort();
    ids.dedup();
    ids
}

/// First record matching `song_id`, if the id is present in the view.
pub fn find_song<'a>(records: &'a [LifecycleRecord], song_id: &str) -> Option<&'a LifecycleRecord> {
    records.iter().find(|r| r.song_id == song_id)
}
