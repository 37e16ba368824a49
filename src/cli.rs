//! Command line definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "chartify-corr",
    version,
    about = "Test two dataset variables for linear correlation",
    long_about = "Load a CSV dataset, fill missing values with column means and test a\n\
                  whitelisted pair of variables for Pearson correlation.\n\n\
                  Without a subcommand the interactive window is opened."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON config file (dataset path, threshold, PNG size).
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// CSV dataset to analyse (overrides the config file).
    #[arg(long, value_name = "CSV", global = true)]
    pub data: Option<PathBuf>,

    /// Significance threshold (overrides the config file).
    #[arg(long, value_name = "ALPHA", global = true)]
    pub alpha: Option<f64>,

    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Open the interactive window (default).
    Gui,

    /// Run one analysis and print the verdict.
    Analyze(AnalyzeArgs),

    /// List the variables that may be selected.
    Variables,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Explanatory variable, by label or column name.
    #[arg(short, long, value_name = "VARIABLE")]
    pub x: String,

    /// Target variable, by label or column name.
    #[arg(short, long, value_name = "VARIABLE")]
    pub y: String,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write the scatter plot to this PNG file.
    #[arg(long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// Open the PNG with the system viewer once written.
    #[arg(long, requires = "png")]
    pub open: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
