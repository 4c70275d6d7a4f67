//! Testing infrastructure for chartlife integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `fixtures`: sample record builders and on-disk dataset generation

pub mod fixtures;
