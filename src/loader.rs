//! Event log loader
//!
//! Reads a whitespace-delimited table whose first non-blank line names the
//! columns, and keeps the rows whose `time(ns)` is strictly greater than the
//! time offset.
//!
//! ```text
//!   time(ns)   resid   z(nm)   direction
//!      2.35      812    3.41          up
//!     10.02     1045   -3.38        down
//! ```
//!
//! A structurally broken file fails as a whole; rows are never skipped.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{PermeationError, Result};
use crate::table::{Record, Resid, Table, RESID_COLUMN, TIME_COLUMN};

/// Load the event log at `path`, keeping rows with `time > time_offset`
///
/// # Errors
///
/// - [`PermeationError::NotFound`] if `path` is not an existing file
/// - [`PermeationError::EmptyOrInvalidFormat`] if the file has no header,
///   lacks `time(ns)` or `resid`, has a row of the wrong width, or a time
///   that is not a number
///
/// # Example
///
/// ```rust,ignore
/// let table = load_table(Path::new("perm_events.dat"), 10.0)?;
/// ```
pub fn load_table(path: &Path, time_offset: f64) -> Result<Table> {
    if !path.is_file() {
        return Err(PermeationError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => PermeationError::NotFound {
            path: path.to_path_buf(),
        },
        _ => PermeationError::invalid(path, err.to_string()),
    })?;

    let table = parse_table(&content, time_offset).map_err(|reason| PermeationError::invalid(path, reason))?;

    info!(
        path = %path.display(),
        kept = table.len(),
        discarded = table.discarded,
        time_offset,
        "loaded permeation events"
    );
    Ok(table)
}

/// Parse table text; the error is a human-readable reason
pub(crate) fn parse_table(content: &str, time_offset: f64) -> std::result::Result<Table, String> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header_line) = lines
        .next()
        .ok_or_else(|| "no columns to parse from file".to_string())?;

    let columns: Vec<String> = header_line.split_whitespace().map(str::to_string).collect();
    let time_idx = column_index(&columns, TIME_COLUMN)?;
    let resid_idx = column_index(&columns, RESID_COLUMN)?;
    debug!(?columns, time_idx, resid_idx, "parsed header");

    let mut records = Vec::new();
    let mut discarded = 0;

    for (line_no, line) in lines {
        let fields: Vec<String> = line.split_whitespace().map(str::to_string).collect();

        if fields.len() != columns.len() {
            return Err(format!(
                "line {}: expected {} fields, found {}",
                line_no,
                columns.len(),
                fields.len()
            ));
        }

        let raw_time = &fields[time_idx];
        let time: f64 = raw_time
            .parse()
            .map_err(|_| format!("line {}: invalid {} value '{}'", line_no, TIME_COLUMN, raw_time))?;

        // NaN fails this comparison and is dropped with the filtered rows
        if time > time_offset {
            let resid = Resid::new(fields[resid_idx].clone());
            records.push(Record { time, resid, fields });
        } else {
            discarded += 1;
        }
    }

    Ok(Table {
        columns,
        records,
        discarded,
    })
}

fn column_index(columns: &[String], name: &str) -> std::result::Result<usize, String> {
    columns
        .iter()
        .position(|c| c == name)
        .ok_or_else(|| format!("missing column `{}`", name))
}

// =================================================================================================
// Tests
// =================================================================================================
