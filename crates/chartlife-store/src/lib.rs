//! Dataset loading for chartlife.
//!
//! The store reads the upstream lifecycle CSV into memory and fronts it with a
//! process-wide read-through cache keyed by path and modification time. The
//! loaded table is immutable for the life of the process; consumers receive
//! shared `Arc` handles and derive their own filtered copies.

mod cache;
mod dataset;
pub mod error;

pub use cache::{load_cached, DatasetCache};
pub use dataset::read_records;
pub use error::{Error, Result};
