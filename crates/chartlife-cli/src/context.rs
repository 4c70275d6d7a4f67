use crate::config::Config;
use anyhow::{anyhow, Result};
use chartlife_types::LifecycleRecord;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Per-invocation state, materialized lazily: the configuration and the
/// memoized dataset handle. A command that never touches the dataset never
/// reads the file.
pub struct ExecutionContext {
    data_dir: PathBuf,
    dataset_override: Option<PathBuf>,
    config: OnceCell<Config>,
    dataset: OnceCell<Arc<Vec<LifecycleRecord>>>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, dataset_override: Option<PathBuf>) -> Self {
        Self {
            data_dir,
            dataset_override,
            config: OnceCell::new(),
            dataset: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let config_path = self.data_dir.join("config.toml");
            Config::load_from(&config_path)
        })
    }

    /// Dataset path resolution priority: `--dataset` flag, then `config.toml`,
    /// then the data-dir default.
    pub fn dataset_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.dataset_override {
            return Ok(path.clone());
        }
        if let Some(path) = &self.config()?.dataset.path {
            return Ok(path.clone());
        }
        Ok(self.data_dir.join("final_lifecycle_dataset.csv"))
    }

    /// The full lifecycle table, read through the process-wide store cache on
    /// first access and reused for the rest of the invocation. A load failure
    /// is fatal for the command; no partial table is ever returned.
    pub fn dataset(&self) -> Result<&Arc<Vec<LifecycleRecord>>> {
        self.dataset.get_or_try_init(|| {
            let path = self.dataset_path()?;
            chartlife_store::load_cached(&path)
                .map_err(|err| anyhow!("failed to load dataset {}: {}", path.display(), err))
        })
    }
}
