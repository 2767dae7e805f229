//! XVG export of the cumulative permeation series
//!
//! Plain two-column text, one line per event, without any xmgrace header:
//!
//! ```text
//!   2.00   1.00
//!   5.00   2.00
//! ```
//!
//! Columns are time (ns) and cumulative count, both written as fixed-width
//! decimals (`%6.2f` by default).

use std::fmt::Write as _;

use crate::table::ProcessedTable;

use super::Exporter;

/// Number formatting for the XVG columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XvgConfig {
    /// Minimum field width, right-aligned (default: 6)
    pub width: usize,

    /// Digits after the decimal point (default: 2)
    pub precision: usize,
}

impl Default for XvgConfig {
    fn default() -> Self {
        Self {
            width: 6,
            precision: 2,
        }
    }
}

impl XvgConfig {
    fn format_number(&self, value: f64) -> String {
        format!("{:>width$.prec$}", value, width = self.width, prec = self.precision)
    }
}

/// Writes `permeation_cumul_<flag>.xvg`
#[derive(Debug, Clone, Default)]
pub struct XvgExporter {
    pub config: XvgConfig,
}

impl XvgExporter {
    pub fn new(config: XvgConfig) -> Self {
        Self { config }
    }
}

impl Exporter for XvgExporter {
    fn label(&self) -> &str {
        "XVG data"
    }

    fn file_name(&self, flag: &str) -> String {
        format!("permeation_cumul_{flag}.xvg")
    }

    fn render(&self, table: &ProcessedTable) -> String {
        let mut body = String::with_capacity(table.len() * (2 * self.config.width + 2));
        for row in table.iter() {
            // Writing into a String cannot fail
            let _ = writeln!(
                body,
                "{} {}",
                self.config.format_number(row.time()),
                self.config.format_number(row.cumulative_count as f64)
            );
        }
        body
    }
}
