use super::args::{Cli, Commands, SongsCommand, TopCommand};
use super::handlers;
use crate::context::ExecutionContext;
use anyhow::Result;
use chartlife_types::FilterSelection;
use std::path::PathBuf;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = expand_tilde(&cli.data_dir);
    let context = ExecutionContext::new(data_dir, cli.dataset.clone());
    let selection = FilterSelection::new(cli.explicit.into(), cli.album.into());

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::Dashboard { song } => {
            handlers::dashboard::handle(&context, &selection, song.as_deref(), cli.format)
        }

        Commands::Stats => handlers::stats::handle(&context, &selection, cli.format),

        Commands::Songs { command } => match command {
            SongsCommand::List => handlers::songs::handle_list(&context, &selection, cli.format),
            SongsCommand::Show { song_id } => {
                handlers::songs::handle_show(&context, &selection, &song_id, cli.format)
            }
        },

        Commands::Top { command } => match command {
            TopCommand::Survivors { limit } => {
                handlers::top::handle_survivors(&context, &selection, limit, cli.format)
            }
            TopCommand::Risers { limit } => {
                handlers::top::handle_risers(&context, &selection, limit, cli.format)
            }
        },
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

fn show_guidance() {
    println!("chartlife - Top-50 song lifecycle analytics\n");
    println!("Quick commands:");
    println!("  chartlife dashboard               # Full analytics page");
    println!("  chartlife stats                   # Metrics and distribution");
    println!("  chartlife songs list              # Song ids in the current view");
    println!("  chartlife top survivors           # Longest chart runs\n");
    println!("Filters compose across all commands:");
    println!("  chartlife dashboard --explicit clean --album single\n");
    println!("Point at a dataset with --dataset <file> or set it once in");
    println!("<data-dir>/config.toml under [dataset] path.\n");
    println!("For more commands:");
    println!("  chartlife --help");
}
