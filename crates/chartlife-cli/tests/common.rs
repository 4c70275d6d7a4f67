//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use chartlife_testing::fixtures;
use chartlife_types::LifecycleRecord;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    dataset_path: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".chartlife");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        let dataset_path = temp_dir.path().join("final_lifecycle_dataset.csv");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            dataset_path,
        }
    }

    /// Fixture pre-loaded with the standard eight-row sample table.
    pub fn with_sample_dataset() -> Self {
        let fixture = Self::new();
        fixture.write_records(&fixtures::sample_records());
        fixture
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn dataset_path(&self) -> &PathBuf {
        &self.dataset_path
    }

    pub fn write_records(&self, records: &[LifecycleRecord]) {
        fixtures::write_dataset(&self.dataset_path, records).expect("Failed to write dataset");
    }

    pub fn write_raw_dataset(&self, content: &str) {
        fs::write(&self.dataset_path, content).expect("Failed to write dataset");
    }

    /// A command with data dir and dataset preset.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_without_dataset();
        cmd.arg("--dataset").arg(&self.dataset_path);
        cmd
    }

    /// A command with only the data dir preset, for path-resolution tests.
    pub fn command_without_dataset(&self) -> Command {
        let mut cmd = Command::cargo_bin("chartlife").expect("Failed to find chartlife binary");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }
}
