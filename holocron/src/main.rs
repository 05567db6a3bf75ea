//! `holocron` command-line entry point.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use holocron::cli::{Cli, Command};
use holocron::commands;
use holocron::config::AppConfig;
use holocron::logging::{self, LogTarget};
use holocron::tui;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let command = cli.action();

    let log_target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, Command::Browse) => LogTarget::File(LogTarget::default_file()),
        (None, _) => LogTarget::Stderr,
    };
    logging::init(&log_target)?;

    let config = AppConfig::load(&cli.overrides())?;
    tracing::info!(url = %config.films_url, timeout = ?config.request_timeout, "configuration resolved");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    let client = commands::client_for(&config)?;

    match command {
        Command::Browse => {
            tui::run(client, runtime.handle())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::List { search, sort } => {
            let mut stdout = io::stdout().lock();
            runtime.block_on(commands::run_list(
                &client,
                search.as_deref(),
                sort,
                &mut stdout,
            ))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Show { episode } => {
            let mut stdout = io::stdout().lock();
            let found = runtime.block_on(commands::run_show(&client, episode, &mut stdout))?;
            Ok(if found {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
