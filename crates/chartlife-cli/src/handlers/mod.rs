pub mod dashboard;
pub mod songs;
pub mod stats;
pub mod top;

use crate::presentation::{presenters, views::EmptyResultView};
use crate::types::OutputFormat;
use anyhow::Result;
use chartlife_types::FilterSelection;
use is_terminal::IsTerminal;

/// Empty filtered view: render the warning block and stop with exit code 0.
/// No aggregate is ever computed over an empty set.
pub(crate) fn render_empty(selection: &FilterSelection, format: OutputFormat) -> Result<()> {
    let vm = presenters::present_empty_result(selection);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Plain => print!(
            "{}",
            EmptyResultView {
                result: &vm,
                enable_color: color_enabled(),
            }
        ),
    }
    Ok(())
}

pub(crate) fn color_enabled() -> bool {
    std::io::stdout().is_terminal()
}
