//! todo-list - an editable to-do list in the terminal
//!
//! Usage:
//!   todo-list                     - 100 placeholder items
//!   todo-list -n 10               - 10 placeholder items
//!   todo-list --positional-rows   - row edit state keyed by position
//!   todo-list --config todo.json  - settings from a JSON file

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use todo_list::cli::Cli;
use todo_list::tui::run_tui;

fn init_logging(cli: &Cli) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.resolve_config().context("Failed to load configuration")?;
    log::info!(
        "Starting with {} items ({:?} rows)",
        config.seed_count,
        config.row_identity
    );

    run_tui(config).await
}
