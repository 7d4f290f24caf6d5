//! Command-line arguments and config resolution

use crate::config::TodoConfig;
use crate::error::Result;
use crate::types::RowIdentity;
use clap::Parser;
use std::path::PathBuf;

/// todo-list - an editable to-do list in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of placeholder items to start with
    #[arg(short = 'n', long)]
    pub seed_count: Option<usize>,

    /// Key row edit state by position instead of by item
    #[arg(long)]
    pub positional_rows: bool,

    /// Title bar text
    #[arg(long)]
    pub title: Option<String>,

    /// Write log output to this file (the terminal is used by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Defaults, then the config file, then flags
    pub fn resolve_config(&self) -> Result<TodoConfig> {
        let mut config = match &self.config {
            Some(path) => TodoConfig::load(path)?,
            None => TodoConfig::default(),
        };

        if let Some(seed_count) = self.seed_count {
            config.seed_count = seed_count;
        }
        if self.positional_rows {
            config.row_identity = RowIdentity::Positional;
        }
        if let Some(title) = &self.title {
            config.title = title.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
