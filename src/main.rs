use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tuido::config::Config;

/// A terminal to-do list with a reducer-based store.
#[derive(Debug, Parser)]
#[command(name = "tuido", version, about)]
struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the event-loop tick rate in milliseconds.
    #[arg(long)]
    tick_rate_ms: Option<u64>,
}

fn main() -> Result<()> {
    tuido::trace::init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(tick_rate_ms) = cli.tick_rate_ms {
        config.ui.tick_rate_ms = tick_rate_ms;
        config.validate()?;
    }

    tuido::ui::runtime::run(config)?;
    Ok(())
}
