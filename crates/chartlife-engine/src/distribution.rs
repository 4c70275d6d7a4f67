use chartlife_types::LifecycleRecord;
use serde::Serialize;
use std::collections::HashMap;

/// One bucket of the lifecycle-type distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifecycleCount {
    pub lifecycle_type: String,
    pub count: usize,
}

/// Frequency of each distinct `lifecycle_type` value, ordered by descending
/// count. Ties break on ascending label so the ordering is deterministic.
///
/// The taxonomy is assigned upstream and treated as an arbitrary finite
/// string enumeration; labels are never validated or interpreted.
pub fn lifecycle_distribution(records: &[LifecycleRecord]) -> Vec<LifecycleCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.lifecycle_type.as_str()).or_insert(0) += 1;
    }

    let mut buckets: Vec<LifecycleCount> = counts
        .into_iter()
        .map(|(label, count)| LifecycleCount {
            lifecycle_type: label.to_string(),
            count,
        })
        .collect();
    buckets.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.lifecycle_type.cmp(&b.lifecycle_type))
    });
    buckets
}
