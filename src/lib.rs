//! perm-tot: cumulative water permeation reports
//!
//! Turns a table of water permeation events (one row per molecule crossing
//! the membrane, with its time and residue id) into:
//!
//! - a step plot of the cumulative number of permeations vs time (PNG + PDF)
//! - a two-column XVG series (time, cumulative count)
//! - a VMD selection of the permeated water molecules
//!
//! # Architecture
//!
//! A straight pipeline over one immutable table:
//!
//! ```text
//! loader::load_table ──► processor::process ──┬─► output::visualization (png, pdf)
//!   (filter time > t0)    (stable sort, 1..N)  ├─► output::export::xvg
//!                                              └─► output::export::selection
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use perm_tot::prelude::*;
//!
//! # fn main() -> Result<(), PermeationError> {
//! let table = load_table(Path::new("perm_events.dat"), 10.0)?;
//! let processed = process(table);
//!
//! let paths = OutputPaths::new(".", "popc");
//! plot_cumulative(&processed, "popc", 10.0, &paths, None)?;
//! XvgExporter::default().export(&processed, &paths.xvg)?;
//! SelectionExporter.export(&processed, &paths.sel)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`table`]: Event records and tables
//! - [`loader`]: Event log parsing and time filtering
//! - [`processor`]: Time ordering and cumulative counts
//! - [`output`]: Plot rendering and text exports
//! - [`pipeline`]: The full run used by the binary
//! - [`cli`]: Command-line arguments

pub mod cli;
pub mod error;
pub mod exit_codes;
pub mod loader;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod processor;
pub mod table;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use perm_tot::prelude::*;
    //! ```
    pub use crate::error::PermeationError;
    pub use crate::loader::load_table;
    pub use crate::output::export::{Exporter, SelectionExporter, XvgConfig, XvgExporter};
    pub use crate::output::visualization::{plot_cumulative, PlotConfig};
    pub use crate::output::OutputPaths;
    pub use crate::processor::process;
    pub use crate::table::{ProcessedRecord, ProcessedTable, Record, Resid, Table};
}
