use std::path::PathBuf;

use clap::{Parser, Subcommand};
use holocron_model::SortBy;

use crate::config::ConfigOverrides;

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "holocron", version)]
#[command(about = "Browse the Star Wars film catalog from the terminal")]
pub struct Cli {
    /// Film list endpoint (overrides config and HOLOCRON_FILMS_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Path to a JSON config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds, 0 disables it
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Write logs to this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive catalog browser (default)
    Browse,
    /// Print the catalog, optionally filtered and sorted
    List {
        /// Keep only titles containing this text (case-insensitive)
        #[arg(long)]
        search: Option<String>,
        /// Sort the listed films by `episode` or `year`
        #[arg(long, value_name = "KEY")]
        sort: Option<SortBy>,
    },
    /// Show the detail view for one episode
    Show {
        /// Episode number as published by the film list
        episode: i32,
    },
}

impl Cli {
    pub fn action(&self) -> Command {
        self.command.clone().unwrap_or(Command::Browse)
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_path: self.config.clone(),
            films_url: self.url.clone(),
            request_timeout_secs: self.timeout,
        }
    }
}
