use crate::context::ExecutionContext;
use crate::presentation::{presenters, views::StatsView};
use crate::types::OutputFormat;
use anyhow::Result;
use chartlife_engine as engine;
use chartlife_types::FilterSelection;

pub fn handle(
    context: &ExecutionContext,
    selection: &FilterSelection,
    format: OutputFormat,
) -> Result<()> {
    let dataset = context.dataset()?;
    let filtered = engine::filter_records(dataset, selection);

    let Some(summary) = engine::compute_summary(&filtered) else {
        return super::render_empty(selection, format);
    };

    let vm = presenters::present_stats(&filtered, selection, summary);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Plain => print!(
            "{}",
            StatsView {
                stats: &vm,
                enable_color: super::color_enabled(),
            }
        ),
    }
    Ok(())
}
