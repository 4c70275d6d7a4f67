use crate::context::ExecutionContext;
use crate::presentation::{
    presenters,
    views::{SongDetailView, SongListView},
};
use crate::types::OutputFormat;
use anyhow::{anyhow, Result};
use chartlife_engine as engine;
use chartlife_types::FilterSelection;

pub fn handle_list(
    context: &ExecutionContext,
    selection: &FilterSelection,
    format: OutputFormat,
) -> Result<()> {
    let dataset = context.dataset()?;
    let filtered = engine::filter_records(dataset, selection);

    if filtered.is_empty() {
        return super::render_empty(selection, format);
    }

    let vm = presenters::present_song_list(&filtered, selection);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Plain => print!("{}", SongListView { list: &vm }),
    }
    Ok(())
}

pub fn handle_show(
    context: &ExecutionContext,
    selection: &FilterSelection,
    song_id: &str,
    format: OutputFormat,
) -> Result<()> {
    let dataset = context.dataset()?;
    let filtered = engine::filter_records(dataset, selection);

    if filtered.is_empty() {
        return super::render_empty(selection, format);
    }

    let record = engine::find_song(&filtered, song_id).ok_or_else(|| {
        anyhow!(
            "song '{}' is not in the current filtered view (see 'chartlife songs list')",
            song_id
        )
    })?;

    let vm = presenters::present_song_detail(record);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Plain => print!(
            "{}",
            SongDetailView {
                song: &vm,
                enable_color: super::color_enabled(),
            }
        ),
    }
    Ok(())
}
