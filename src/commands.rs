//! Non-interactive subcommands.

use anyhow::{Context, Result};
use chartify_corr::charts::StaticChartRenderer;
use chartify_corr::config::AppConfig;
use chartify_corr::selection::{ExplanatoryVariable, TargetVariable, Variable};
use chartify_corr::{AnalysisSession, VariableSelection};
use tracing::warn;

use crate::cli::AnalyzeArgs;

/// Run one analysis and print it; optionally export the scatter PNG.
pub fn run_analyze(config: &AppConfig, args: &AnalyzeArgs) -> Result<()> {
    let selection = VariableSelection::parse(&args.x, &args.y)
        .inspect_err(|error| warn!(%error, "rejected variable selection"))?;

    let session = AnalysisSession::open(&config.dataset_path, config.significance_threshold)
        .with_context(|| format!("failed to prepare {}", config.dataset_path.display()))?;
    let report = session.analyze(selection)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary());
    }

    if let Some(png) = &args.png {
        StaticChartRenderer::render_png(&report, png, config.png_width, config.png_height)
            .with_context(|| format!("failed to write {}", png.display()))?;
        if args.open {
            open::that(png).with_context(|| format!("failed to open {}", png.display()))?;
        }
    }
    Ok(())
}

pub fn print_variables() {
    println!("Explanatory variables (--x):");
    print_table(ExplanatoryVariable::all());
    println!();
    println!("Target variables (--y):");
    print_table(TargetVariable::all());
}

fn print_table<V: Variable>(variables: &[V]) {
    let width = variables
        .iter()
        .map(|v| v.label().len())
        .max()
        .unwrap_or(0);
    for v in variables {
        println!("  {:<width$}  {}", v.label(), v.column());
    }
}
