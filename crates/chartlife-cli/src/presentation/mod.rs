//! # Presentation Layer
//!
//! Scaled-down MVVM split, console-only:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] ==(json)==> serde_json --> Output
//!                                                ==(plain)=> [ View ] ----> Output
//! ```
//!
//! Rules of the house:
//! - ViewModels carry raw data (numbers, labels), never pre-formatted strings.
//!   `--format json` pretty-prints the view model verbatim; it IS the API.
//! - Presenters are pure functions from engine output to view models.
//! - Views own layout, alignment, bars and color. Color is only applied when
//!   stdout is a terminal, and never reaches JSON output.

pub mod formatters;
pub mod presenters;
pub mod view_models;
pub mod views;
