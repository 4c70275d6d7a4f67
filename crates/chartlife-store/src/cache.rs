use crate::dataset::read_records;
use crate::error::Result;
use chartlife_types::LifecycleRecord;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

static GLOBAL_CACHE: Lazy<DatasetCache> = Lazy::new(DatasetCache::new);

/// Load `path` through the process-wide cache.
///
/// Repeated invocations within a session reuse the parsed table instead of
/// re-reading the file, as long as the file's modification time is unchanged.
pub fn load_cached(path: &Path) -> Result<Arc<Vec<LifecycleRecord>>> {
    GLOBAL_CACHE.get_or_load(path)
}

struct CacheEntry {
    modified: Option<SystemTime>,
    records: Arc<Vec<LifecycleRecord>>,
}

/// Read-through dataset cache keyed by path and modification time.
///
/// A hit requires both the path and the file's mtime to match the cached
/// entry; a changed file is re-read and the entry replaced. Entries are never
/// evicted otherwise since the table is read-only for the life of the process.
pub struct DatasetCache {
    entries: Mutex<HashMap<PathBuf, CacheEntry>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get_or_load(&self, path: &Path) -> Result<Arc<Vec<LifecycleRecord>>> {
        let modified = std::fs::metadata(path)?.modified().ok();

        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(entry) = entries.get(path)
            && entry.modified == modified
        {
            return Ok(Arc::clone(&entry.records));
        }

        let records = Arc::new(read_records(path)?);
        entries.insert(
            path.to_path_buf(),
            CacheEntry {
                modified,
                records: Arc::clone(&records),
            },
        );
        Ok(records)
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartlife_testing::fixtures::{record, sample_dataset_dir, write_dataset};
    use filetime::FileTime;

    #[test]
    fn test_second_load_reuses_the_parsed_table() {
        let (_dir, path) = sample_dataset_dir().unwrap();
        let cache = DatasetCache::new();

        let first = cache.get_or_load(&path).unwrap();
        let second = cache.get_or_load(&path).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_changed_mtime_triggers_a_reload() {
        let (_dir, path) = sample_dataset_dir().unwrap();
        let cache = DatasetCache::new();

        let first = cache.get_or_load(&path).unwrap();
        assert_eq!(first.len(), 8);

        write_dataset(&path, &[record("s100", true, "single", 7.0, 40, 1.0, "one_shot")]).unwrap();
        filetime::set_file_mtime(&path, FileTime::from_unix_time(1_700_000_000, 0)).unwrap();

        let second = cache.get_or_load(&path).unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].song_id, "s100");
    }

    #[test]
    fn test_missing_file_is_not_cached() {
        let (dir, _path) = sample_dataset_dir().unwrap();
        let cache = DatasetCache::new();

        let missing = dir.path().join("nope.csv");
        assert!(cache.get_or_load(&missing).is_err());

        // The failed load must not leave a poisoned entry behind.
        write_dataset(&missing, &[record("s200", false, "album", 9.0, 11, 2.0, "fader")]).unwrap();
        let loaded = cache.get_or_load(&missing).unwrap();
        assert_eq!(loaded.len(), 1);
    }
}
