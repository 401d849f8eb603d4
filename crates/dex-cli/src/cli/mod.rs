//! CLI for the dex catalog browser.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dex_core::config;
use std::path::Path;

use commands::{run_browse, run_config, run_render, run_show, BrowseArgs};

/// Top-level CLI for the dex catalog browser.
#[derive(Debug, Parser)]
#[command(name = "dex")]
#[command(about = "dex: browse a paginated remote catalog and inspect its records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Load catalog pages and list the items.
    Browse {
        /// Number of pages to load (initial page plus N-1 "load more" signals).
        #[arg(long, default_value = "1", value_name = "N")]
        pages: usize,
        /// Only show items whose name contains this text (case-insensitive).
        #[arg(long, value_name = "QUERY")]
        filter: Option<String>,
        /// Also print each item's sprite URL.
        #[arg(long)]
        sprites: bool,
    },

    /// Fetch one record by identifier and render it.
    Show {
        /// Item identifier (e.g. 25).
        id: String,
        /// Print the raw JSON record instead of the rendered outline.
        #[arg(long)]
        json: bool,
    },

    /// Render a local JSON file the same way `show` renders records.
    Render {
        /// Path to the JSON file.
        path: String,
    },

    /// Print the config file path and effective settings.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Browse {
                pages,
                filter,
                sprites,
            } => {
                let args = BrowseArgs {
                    pages,
                    filter: filter.as_deref(),
                    sprites,
                };
                run_browse(&cfg, args).await?;
            }
            CliCommand::Show { id, json } => run_show(&cfg, &id, json).await?,
            CliCommand::Render { path } => run_render(&cfg, Path::new(&path))?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
