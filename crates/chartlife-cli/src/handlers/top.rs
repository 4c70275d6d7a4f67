use crate::context::ExecutionContext;
use crate::presentation::{
    presenters,
    views::{RisersView, SurvivorsView},
};
use crate::types::OutputFormat;
use anyhow::Result;
use chartlife_engine as engine;
use chartlife_types::FilterSelection;

pub fn handle_survivors(
    context: &ExecutionContext,
    selection: &FilterSelection,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let dataset = context.dataset()?;
    let filtered = engine::filter_records(dataset, selection);

    if filtered.is_empty() {
        return super::render_empty(selection, format);
    }

    let vm = presenters::present_survivors(&filtered, selection, limit);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Plain => print!("{}", SurvivorsView { survivors: &vm }),
    }
    Ok(())
}

pub fn handle_risers(
    context: &ExecutionContext,
    selection: &FilterSelection,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let dataset = context.dataset()?;
    let filtered = engine::filter_records(dataset, selection);

    if filtered.is_empty() {
        return super::render_empty(selection, format);
    }

    let vm = presenters::present_risers(&filtered, selection, limit);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Plain => print!("{}", RisersView { risers: &vm }),
    }
    Ok(())
}
