use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use rewind::Catalog;
use rewind_types::GameRecord;

use app::App;

pub mod app;
pub mod board;
pub mod demo;
pub mod games;
pub mod popup;
pub mod status;

/// Step through recorded games in the terminal.
#[derive(Parser)]
struct Args {
    /// RON file holding the list of game records
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Participant name used to pick the board perspective
    #[arg(long, default_value = "local")]
    player: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        // stderr, the terminal UI owns stdout
        .with_writer(std::io::stderr)
        .init();

    let games: Vec<GameRecord> = match &args.catalog {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            ron::from_str(&text).context("parsing catalog")?
        }
        None => demo::games(),
    };

    let terminal = ratatui::init();
    let result = App::new(Catalog::new(games), args.player).run(terminal);
    ratatui::restore();
    result.map_err(Into::into)
}
