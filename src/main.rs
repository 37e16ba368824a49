//! Chartify Correlation - two-variable correlation verdicts
//!
//! Command line and interactive front ends over the analysis library.

mod cli;
mod commands;
mod gui;

use anyhow::{anyhow, Context, Result};
use chartify_corr::config::AppConfig;
use chartify_corr::logging::{init_logging, LogConfig, LogFormat};
use clap::Parser;
use std::io::{self, IsTerminal};
use tracing::debug;

use crate::cli::{Cli, Command, LogFormatArg};

fn main() {
    let cli = Cli::parse();

    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let log_config = LogConfig::from_verbosity(cli.verbose, cli.quiet)
        .with_format(format)
        .with_ansi(io::stderr().is_terminal());
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    debug!(?config, "configuration resolved");

    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => gui::run(config).map_err(|e| anyhow!("GUI error: {e}")),
        Command::Analyze(args) => commands::run_analyze(&config, &args),
        Command::Variables => {
            commands::print_variables();
            Ok(())
        }
    }
}

/// Config file first, then command line overrides.
fn resolve_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(data) = &cli.data {
        config.dataset_path = data.clone();
    }
    if let Some(alpha) = cli.alpha {
        config.significance_threshold = alpha;
    }
    config.validate()?;
    Ok(config)
}
