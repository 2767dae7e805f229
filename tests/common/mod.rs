//! Common utilities for integration tests

pub mod fixtures;

pub use fixtures::{read_output, write_events, write_raw};
