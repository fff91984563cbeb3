mod batch;
mod io;

use anyhow::{bail, Result};
use clap::Parser;
use graphsky_layout::SlicedLayout;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Lay out single-entry, single-exit DAGs on a layered integer grid
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON graph descriptions to lay out
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Write `<name>.layout.json` files here instead of printing to stdout
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Number of worker threads, defaults to the available parallelism
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Drop nodes unreachable from the entry instead of failing
    #[arg(long)]
    allow_unreachable: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let engine = SlicedLayout::new().allow_unreachable(args.allow_unreachable);
    let workers = args.jobs.unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
    });

    let results = batch::lay_out_all(&args.inputs, &engine, workers)?;
    let failures = batch::write_all(
        results,
        args.output_dir.as_deref(),
        args.pretty,
        &mut std::io::stdout().lock(),
    );

    if failures > 0 {
        bail!("{failures} of {} graphs could not be laid out", args.inputs.len());
    }

    Ok(())
}
