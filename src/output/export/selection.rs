//! VMD selection of the water molecules that permeated
//!
//! The file holds one line without a trailing newline, e.g.
//!
//! ```text
//! resname SOL TIP3 and resid 20 10 812
//! ```
//!
//! Ids follow the time order of the table. A molecule that crossed twice is
//! listed twice.

use crate::table::ProcessedTable;

use super::Exporter;

/// Fixed head of the selection expression
pub const SELECTION_PREFIX: &str = "resname SOL TIP3 and resid";

/// Writes `permeation_selec_<flag>.sel`
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionExporter;

impl Exporter for SelectionExporter {
    fn label(&self) -> &str {
        "SEL file"
    }

    fn file_name(&self, flag: &str) -> String {
        format!("permeation_selec_{flag}.sel")
    }

    fn render(&self, table: &ProcessedTable) -> String {
        let ids: Vec<&str> = table.iter().map(|row| row.resid().as_str()).collect();
        format!("{} {}", SELECTION_PREFIX, ids.join(" "))
    }
}
