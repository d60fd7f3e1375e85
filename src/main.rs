use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cellular::Rule;
use cellular::io::Output;
use cellular::world::validate_steps;

/// Render an elementary cellular automaton as a plain PBM image.
///
/// The image is `2 * STEPS + 1` cells wide and `STEPS + 1` rows tall, starting from a single live
/// cell in the middle. Cells past either edge are always dead.
#[derive(Parser)]
#[command(name = "cellular", version)]
struct Args {
    /// The rule number, from 0 to 255
    #[arg(allow_negative_numbers = true)]
    rule: i64,

    /// Number of steps
    #[arg(allow_negative_numbers = true)]
    steps: i64,

    /// Save to a file instead of printing to stdout
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Produce a Wolfram Atlas correct solution using an infinite grid. Currently has no effect.
    #[arg(short, long)]
    wolfram: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Args::parse())
}

fn run(args: Args) -> anyhow::Result<()> {
    // Validate before touching the output so bad arguments never create or truncate a file.
    let rule = Rule::try_from(args.rule).context("Invalid rule")?;
    let steps = validate_steps(args.steps).context("Invalid number of steps")?;

    if args.wolfram {
        debug!("--wolfram is accepted but not implemented, using the bounded grid");
    }

    let mut out = Output::open(args.file.as_deref()).with_context(|| match &args.file {
        Some(path) => format!("Failed to open {}", path.display()),
        None => "Failed to open stdout".to_string(),
    })?;

    cellular::write_image(&mut out, rule, steps).context("Failed to write image")?;
    out.finish().context("Failed to flush image")?;

    Ok(())
}
