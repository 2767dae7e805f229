//! Time ordering and cumulative counts

use tracing::debug;

use crate::table::{ProcessedRecord, ProcessedTable, Table};

/// Sort events by time and number them
///
/// The sort is stable: events sharing a timestamp keep their file order, so
/// repeated runs on the same input produce identical outputs. Row `i` (0-based)
/// of the result gets `cumulative_count = i + 1`.
///
/// No filtering happens here; an empty table gives an empty result.
pub fn process(table: Table) -> ProcessedTable {
    let Table {
        columns,
        mut records,
        ..
    } = table;

    records.sort_by(|a, b| a.time.total_cmp(&b.time));

    let rows: Vec<ProcessedRecord> = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| ProcessedRecord {
            record,
            cumulative_count: i + 1,
        })
        .collect();

    debug!(rows = rows.len(), "assigned cumulative permeation counts");

    ProcessedTable { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_ascending() {
        let processed = process(Table::from_events([(5.0, "10"), (2.0, "20")]));
        assert_eq!(processed.times(), vec![2.0, 5.0]);
        let resids: Vec<&str> = processed.resids().iter().map(|r| r.as_str()).collect();
        assert_eq!(resids, vec!["20", "10"]);
    }

    #[test]
    fn test_counts_are_one_to_n() {
        let processed = process(Table::from_events([
            (4.0, "1"),
            (1.0, "2"),
            (3.0, "3"),
            (2.0, "4"),
        ]));
        assert_eq!(processed.counts(), vec![1, 2, 3, 4]);
        assert_eq!(processed.max_count(), 4);
        assert_eq!(processed.time_range(), Some((1.0, 4.0)));
    }

    #[test]
    fn test_ties_keep_file_order() {
        let processed = process(Table::from_events([
            (3.0, "a"),
            (1.0, "b"),
            (3.0, "c"),
            (3.0, "d"),
            (1.0, "e"),
        ]));
        let resids: Vec<&str> = processed.resids().iter().map(|r| r.as_str()).collect();
        assert_eq!(resids, vec!["b", "e", "a", "c", "d"]);
    }

    #[test]
    fn test_duplicate_resids_are_kept() {
        let processed = process(Table::from_events([(2.0, "7"), (1.0, "7")]));
        assert_eq!(processed.len(), 2);
    }

    #[test]
    fn test_empty_table() {
        let processed = process(Table::from_events(Vec::<(f64, &str)>::new()));
        assert!(processed.is_empty());
        assert_eq!(processed.columns, vec!["time(ns)", "resid"]);
    }
}
