//! End-to-end run: load → process → {plot, xvg, sel}
//!
//! Outputs are written one after another (PNG, PDF, XVG, SEL). A failure
//! stops the run and leaves the files already written in place.

use std::path::Path;

use tracing::info;

use crate::cli::{check_time_offset, Args};
use crate::error::Result;
use crate::loader::load_table;
use crate::output::export::{Exporter, SelectionExporter, XvgExporter};
use crate::output::visualization::{plot_cumulative, PlotConfig};
use crate::output::OutputPaths;
use crate::processor::process;

/// What a completed run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Number of permeation events after the time filter
    pub events: usize,

    /// Rows dropped by the time filter
    pub discarded: usize,

    pub paths: OutputPaths,
}

/// Run the whole pipeline for parsed command-line arguments
///
/// Argument validation ([`Args::validate`]) is the caller's job; this
/// function only reports the loader's own errors for a missing file.
pub fn run(args: &Args) -> Result<RunSummary> {
    run_with(
        &args.csv_file,
        &args.flag,
        args.time_offset,
        args.output_dir(),
    )
}

/// Same as [`run`] with explicit inputs
///
/// A non-finite `time_offset` is refused with [`Usage`](crate::error::PermeationError::Usage)
/// before anything is read or written.
///
/// # Example
///
/// ```rust,ignore
/// let summary = run_with(Path::new("perm_events.dat"), "popc", 10.0, Path::new("."))?;
/// println!("{} permeations", summary.events);
/// ```
pub fn run_with(
    csv_file: &Path,
    flag: &str,
    time_offset: f64,
    output_dir: &Path,
) -> Result<RunSummary> {
    check_time_offset(time_offset)?;
    let table = load_table(csv_file, time_offset)?;
    let discarded = table.discarded;

    let processed = process(table);
    let paths = OutputPaths::new(output_dir, flag);

    plot_cumulative(
        &processed,
        flag,
        time_offset,
        &paths,
        Some(&PlotConfig::permeation(flag)),
    )?;
    XvgExporter::default().export(&processed, &paths.xvg)?;
    SelectionExporter.export(&processed, &paths.sel)?;

    info!(
        flag,
        events = processed.len(),
        discarded,
        output_dir = %output_dir.display(),
        "permeation outputs written"
    );

    Ok(RunSummary {
        events: processed.len(),
        discarded,
        paths,
    })
}
