use std::path::PathBuf;

use clap::Parser;
use cli::{run, Invocation};
use color_eyre::eyre::Result;
use detector::ThresholdRange;
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

/// Detect small blobs, mark their centroids and write them to a table
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input image
    #[arg(short, long)]
    input: PathBuf,
    /// Path to the output image
    #[arg(short, long)]
    output: PathBuf,
    /// Path to the output csv file
    #[arg(short, long)]
    csv: PathBuf,
    /// Threshold interval: pixels above min become max, the rest 0
    #[arg(short, long, default_value = "[60,185]")]
    range: ThresholdRange,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let invocation = Invocation {
        input: cli.input,
        output: cli.output,
        csv: cli.csv,
        threshold: cli.range,
    };

    let summary = run(&invocation)?;

    info!(
        "✅ Matched {} of {} contours -> {:?}, {:?}",
        summary.accepted, summary.contours, invocation.csv, invocation.output
    );
    Ok(())
}
