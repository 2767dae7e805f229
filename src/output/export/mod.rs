//! Text exports of a processed permeation table.
//!
//! # Architecture
//!
//! The [`Exporter`] trait abstracts the file format. Each format lives in its
//! own sub-module and only has to say how the file is named and what its body
//! is; writing and progress reporting are shared.
//!
//! | Format | Module        | Consumer                         |
//! |--------|---------------|----------------------------------|
//! | XVG    | [`xvg`]       | xmgrace / any two-column plotter |
//! | SEL    | [`selection`] | VMD atom selection               |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use perm_tot::output::export::{Exporter, XvgExporter, SelectionExporter};
//!
//! XvgExporter::default().export(&processed, &paths.xvg)?;
//! SelectionExporter.export(&processed, &paths.sel)?;
//! ```

pub mod selection;
pub mod xvg;

pub use selection::SelectionExporter;
pub use xvg::{XvgConfig, XvgExporter};

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PermeationError, Result};
use crate::table::ProcessedTable;

/// Abstraction over the text export formats.
///
/// Implementors provide [`file_name`](Exporter::file_name) and
/// [`render`](Exporter::render); [`export`](Exporter::export) writes the
/// rendered body, replacing any existing file, and prints one progress line.
pub trait Exporter {
    /// Short label used in the progress line (`Saving <label>: <path>`)
    fn label(&self) -> &str;

    /// File name for a run identified by `flag`
    fn file_name(&self, flag: &str) -> String;

    /// Complete file body for `table`
    fn render(&self, table: &ProcessedTable) -> String;

    /// Write `table` to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PermeationError::Io`] if the file cannot be written
    /// (e.g. the directory does not exist).
    fn export(&self, table: &ProcessedTable, path: &Path) -> Result<()> {
        let body = self.render(table);
        fs::write(path, &body).map_err(|err| PermeationError::io(path, err))?;
        debug!(path = %path.display(), bytes = body.len(), rows = table.len(), "wrote export");
        println!("Saving {}: {}", self.label(), path.display());
        Ok(())
    }
}
