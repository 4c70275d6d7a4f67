// NOTE: chartlife Architecture Rationale
//
// Why a memoized read-through cache (not re-read per command)?
// - The dataset is produced upstream and is immutable within a session
// - Caching on (path, mtime) keeps repeated views cheap without a staleness bug
// - A failed load caches nothing, so a fixed file is picked up on retry
//
// Why a pure engine (not aggregates inside handlers)?
// - Every output is a function of (table, filter selection, selected song id)
// - Pure slice-in/value-out functions make the §testable properties trivial
// - Handlers only orchestrate: load, filter, short-circuit on empty, render
//
// Why ViewModel-first rendering?
// - JSON output is an API: raw numbers, no pre-formatted strings
// - Text views layer styling and layout on top of the same view models

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, SongsCommand, TopCommand};
pub use commands::run;
