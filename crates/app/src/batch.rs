use crate::io::{load_description, output_path, save_layout, to_json};
use anyhow::{anyhow, Context, Result};
use crossbeam::channel;
use graphsky_layout::{Layout, LayoutEngine};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Load one description file and lay it out
pub fn lay_out_file<E>(path: &Path, engine: &E) -> Result<Layout>
where
    E: LayoutEngine + Sync,
{
    debug!("Laying out {}", path.display());

    let graph = load_description(path)?
        .to_graph()
        .with_context(|| format!("Invalid graph in {}", path.display()))?;
    engine
        .layout(&graph)
        .with_context(|| format!("Failed to lay out {}", path.display()))
}

/// Lay out every input on a pool of `workers` threads, keeping the input order
pub fn lay_out_all<'a, E>(
    inputs: &'a [PathBuf],
    engine: &E,
    workers: usize,
) -> Result<Vec<(&'a Path, Result<Layout>)>>
where
    E: LayoutEngine + Sync,
{
    let workers = workers.clamp(1, inputs.len().max(1));
    debug!("Laying out {} graphs on {workers} workers", inputs.len());

    let (job_tx, job_rx) = channel::unbounded();
    for job in inputs.iter().map(PathBuf::as_path).enumerate() {
        job_tx
            .send(job)
            .map_err(|_| anyhow!("Layout job queue closed"))?;
    }
    drop(job_tx);

    let (result_tx, result_rx) = channel::unbounded();
    crossbeam::thread::scope(|scope| {
        for _ in 0..workers {
            let jobs = job_rx.clone();
            let results = result_tx.clone();
            scope.spawn(move |_| {
                for (index, input) in jobs.iter() {
                    if results.send((index, lay_out_file(input, engine))).is_err() {
                        break;
                    }
                }
            });
        }
    })
    .map_err(|_| anyhow!("Layout worker panicked"))?;
    drop(result_tx);

    let mut layouts: Vec<Option<Result<Layout>>> = inputs.iter().map(|_| None).collect();
    for (index, result) in result_rx.iter() {
        layouts[index] = Some(result);
    }

    Ok(inputs
        .iter()
        .zip(layouts)
        .map(|(input, layout)| {
            let layout = layout
                .unwrap_or_else(|| Err(anyhow!("No layout produced for {}", input.display())));
            (input.as_path(), layout)
        })
        .collect())
}

/// Write every successful layout, returning how many inputs failed
///
/// Failed layouts and failed writes are logged and counted, and never stop
/// the remaining inputs from being written.
pub fn write_all<W>(
    results: Vec<(&Path, Result<Layout>)>,
    output_dir: Option<&Path>,
    pretty: bool,
    stdout: &mut W,
) -> usize
where
    W: Write,
{
    let mut failures = 0;
    for (input, result) in results {
        let written = result.and_then(|layout| match output_dir {
            Some(dir) => {
                let path = output_path(dir, input);
                save_layout(&path, &layout, pretty)?;
                info!("Wrote {}", path.display());
                Ok(())
            }
            None => {
                writeln!(stdout, "{}", to_json(&layout, pretty)?)
                    .with_context(|| format!("Failed to print layout of {}", input.display()))
            }
        });

        if let Err(e) = written {
            error!("{e:#}");
            failures += 1;
        }
    }
    failures
}
