use crate::context::ExecutionContext;
use crate::presentation::{presenters, views::DashboardView};
use crate::types::OutputFormat;
use anyhow::{anyhow, Result};
use chartlife_engine as engine;
use chartlife_types::FilterSelection;

pub fn handle(
    context: &ExecutionContext,
    selection: &FilterSelection,
    song: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let dataset = context.dataset()?;
    let filtered = engine::filter_records(dataset, selection);

    let Some(summary) = engine::compute_summary(&filtered) else {
        return super::render_empty(selection, format);
    };

    // The detail panel follows the selector semantics: an explicit id must
    // exist in the filtered view, otherwise the first sorted id is featured.
    let song_record = match song {
        Some(id) => engine::find_song(&filtered, id).ok_or_else(|| {
            anyhow!(
                "song '{}' is not in the current filtered view (see 'chartlife songs list')",
                id
            )
        })?,
        None => engine::song_ids(&filtered)
            .first()
            .and_then(|id| engine::find_song(&filtered, id))
            .ok_or_else(|| anyhow!("filtered view has no songs"))?,
    };

    let vm = presenters::present_dashboard(&filtered, selection, summary, song_record);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Plain => print!(
            "{}",
            DashboardView {
                dashboard: &vm,
                enable_color: super::color_enabled(),
            }
        ),
    }
    Ok(())
}
