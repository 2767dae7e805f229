//! Stable exit codes for the perm-tot binary.

/// All four outputs were written.
pub const OK: i32 = 0;
/// Missing or invalid input, empty flag, or an output could not be written.
pub const FAILURE: i32 = 1;
