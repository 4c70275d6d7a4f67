use chartlife_types::LifecycleRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Mean `total_days` for one grouping key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean {
    pub group: String,
    pub mean_total_days: f64,
}

/// Mean `total_days` per `album_type` value present in the view, ordered by
/// label. Out-of-vocabulary values group like any other; nothing is dropped.
pub fn mean_total_days_by_album_type(records: &[LifecycleRecord]) -> Vec<GroupMean> {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = sums.entry(record.album_type.as_str()).or_insert((0.0, 0));
        entry.0 += record.total_days;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(group, (sum, count))| GroupMean {
            group: group.to_string(),
            mean_total_days: sum / count as f64,
        })
        .collect()
}

/// Mean `total_days` for the clean and explicit partitions of the view.
///
/// A partition with no rows yields `None` rather than a NaN mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExplicitMeans {
    pub clean: Option<f64>,
    pub explicit: Option<f64>,
}

pub fn mean_total_days_by_explicit(records: &[LifecycleRecord]) -> ExplicitMeans {
    let mut clean = (0.0_f64, 0_usize);
    let mut explicit = (0.0_f64, 0_usize);

    for record in records {
        let slot = if record.is_explicit {
            &mut explicit
        } else {
            &mut clean
        };
        slot.0 += record.total_days;
        slot.1 += 1;
    }

    let mean = |(sum, count): (f64, usize)| (count > 0).then(|| sum / count as f64);
    ExplicitMeans {
        clean: mean(clean),
        explicit: mean(explicit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartlife_testing::fixtures::record;

    #[test]
    fn test_grouped_mean_by_album_type() {
        let records = vec![
            record("1", false, "single", 10.0, 5, 2.0, "riser"),
            record("2", false, "single", 30.0, 5, 2.0, "riser"),
            record("3", false, "album", 100.0, 5, 2.0, "steady"),
        ];

        let means = mean_total_days_by_album_type(&records);
        assert_eq!(means.len(), 2);
        assert_eq!(means[0].group, "album");
        assert_eq!(means[0].mean_total_days, 100.0);
        assert_eq!(means[1].group, "single");
        assert_eq!(means[1].mean_total_days, 20.0);
    }

    #[test]
    fn test_out_of_vocabulary_values_form_their_own_group() {
        let records = vec![
            record("1", false, "single", 10.0, 5, 2.0, "riser"),
            record("2", false, "compilation", 40.0, 5, 2.0, "riser"),
        ];

        let means = mean_total_days_by_album_type(&records);
        let groups: Vec<&str> = means.iter().map(|m| m.group.as_str()).collect();
        assert_eq!(groups, ["compilation", "single"]);
    }

    #[test]
    fn test_explicit_partition_means() {
        let records = vec![
            record("1", true, "single", 50.0, 3, 5.0, "riser"),
            record("2", false, "album", 80.0, 1, 20.0, "steady"),
            record("3", true, "single", 30.0, 12, 2.0, "fader"),
        ];

        let means = mean_total_days_by_explicit(&records);
        assert_eq!(means.explicit, Some(40.0));
        assert_eq!(means.clean, Some(80.0));
    }

    #[test]
    fn test_missing_partition_yields_none() {
        let records = vec![record("1", true, "single", 50.0, 3, 5.0, "riser")];

        let means = mean_total_days_by_explicit(&records);
        assert_eq!(means.explicit, Some(50.0));
        assert_eq!(means.clean, None);

        let empty = mean_total_days_by_explicit(&[]);
        assert_eq!(empty.explicit, None);
        assert_eq!(empty.clean, None);
    }
}
