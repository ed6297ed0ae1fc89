mod commands;
mod config;
mod feed;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "examline")]
#[command(about = "Match exam session numbers against a university calendar feed and render them as a timeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the calendar feed and refresh the local cache
    Pull,
    /// List every event found in the feed, with session annotations
    Events,
    /// Match the configured exam sessions and write the timeline document
    Timeline {
        /// Where to write the timeline JSON (defaults to "<calendar_name>.timeline.json")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write an HTML page and open it in the browser
        #[arg(long)]
        open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;

    match cli.command {
        Commands::Pull => commands::pull::run(&cfg).await,
        Commands::Events => commands::events::run(&cfg).await,
        Commands::Timeline { output, open } => {
            commands::timeline::run(&cfg, output, open).await
        }
    }
}
