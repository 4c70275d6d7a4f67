use chartlife_types::{FilterSelection, LifecycleRecord};

/// Apply the filter selection, producing a derived copy of the matching rows.
///
/// Source order is preserved and the input is never mutated; the result is
/// always a subset of `records`, and the default selection returns the whole
/// table.
pub fn filter_records(
    records: &[LifecycleRecord],
    selection: &FilterSelection,
) -> Vec<LifecycleRecord> {
    records
        .iter()
        .filter(|record| selection.matches(record))
        .cloned()
        .collect()
}
