//! Permeation event tables
//!
//! Two value types flow through the pipeline:
//!
//! - [`Table`]: rows read from the event log, already filtered by the time offset
//! - [`ProcessedTable`]: the same rows sorted by time, each carrying its
//!   cumulative permeation count
//!
//! Both are built once and only read afterwards.

use std::fmt;

/// Name of the time column (nanoseconds) in the event log header
pub const TIME_COLUMN: &str = "time(ns)";

/// Name of the residue id column in the event log header
pub const RESID_COLUMN: &str = "resid";

// =================================================================================================
// Resid
// =================================================================================================

/// Residue identifier of a permeating water molecule
///
/// Kept as the token read from the file. Ids such as `20`, `020` or `W12`
/// are written back exactly as they appeared, so the selection file never
/// depends on numeric reformatting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resid(String);

impl Resid {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Resid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Resid {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

// =================================================================================================
// Record / Table
// =================================================================================================

/// One permeation event (one data row of the input file)
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Event time in nanoseconds
    pub time: f64,

    /// Residue id of the water molecule
    pub resid: Resid,

    /// Every field of the row, in header order (includes passthrough columns)
    pub fields: Vec<String>,
}

impl Record {
    /// Build a record holding only the two columns the pipeline reads
    pub fn new(time: f64, resid: impl Into<Resid>) -> Self {
        let resid = resid.into();
        Self {
            time,
            fields: vec![time.to_string(), resid.to_string()],
            resid,
        }
    }
}

/// Events retained by the loader, in file order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    /// Header column names
    pub columns: Vec<String>,

    /// Rows with `time > time_offset`
    pub records: Vec<Record>,

    /// Number of data rows dropped by the time filter
    pub discarded: usize,
}

impl Table {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self {
            columns,
            records,
            discarded: 0,
        }
    }

    /// Table with the two required columns, handy for building inputs in code
    pub fn from_events(events: impl IntoIterator<Item = (f64, &'static str)>) -> Self {
        let records = events
            .into_iter()
            .map(|(time, resid)| Record::new(time, resid))
            .collect();
        Self::new(
            vec![TIME_COLUMN.to_string(), RESID_COLUMN.to_string()],
            records,
        )
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// =================================================================================================
// ProcessedTable
// =================================================================================================

/// A record with its rank in time order
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedRecord {
    pub record: Record,

    /// 1-based position in the sorted table
    pub cumulative_count: usize,
}

impl ProcessedRecord {
    pub fn time(&self) -> f64 {
        self.record.time
    }

    pub fn resid(&self) -> &Resid {
        &self.record.resid
    }
}

/// Events sorted by time with running counts
///
/// Invariants (established by [`crate::processor::process`]):
/// - rows are non-decreasing in `time`, equal times keep file order
/// - `cumulative_count` runs `1, 2, ..., len()`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcessedTable {
    pub columns: Vec<String>,
    pub rows: Vec<ProcessedRecord>,
}

impl ProcessedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessedRecord> {
        self.rows.iter()
    }

    pub fn times(&self) -> Vec<f64> {
        self.rows.iter().map(ProcessedRecord::time).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.rows.iter().map(|row| row.cumulative_count).collect()
    }

    pub fn resids(&self) -> Vec<&Resid> {
        self.rows.iter().map(ProcessedRecord::resid).collect()
    }

    /// First and last event times, `None` when empty
    pub fn time_range(&self) -> Option<(f64, f64)> {
        let first = self.rows.first()?.time();
        let last = self.rows.last()?.time();
        Some((first, last))
    }

    /// Final cumulative count (0 when empty)
    pub fn max_count(&self) -> usize {
        self.rows.last().map_or(0, |row| row.cumulative_count)
    }
}
