//! Event-log fixtures for integration tests

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary directory holding an input event table; outputs go in `out/`
pub struct EventFile {
    // Keeps the directory alive for the duration of the test
    _dir: TempDir,
    pub input: PathBuf,
    pub out_dir: PathBuf,
}

/// Write an event table with a `time(ns) resid` header plus a passthrough column
pub fn write_events(events: &[(&str, &str)]) -> EventFile {
    let mut content = String::from("  time(ns)   resid   leaflet\n");
    for (time, resid) in events {
        content.push_str(&format!("  {time:>8}   {resid:>5}   upper\n"));
    }
    write_raw(&content)
}

/// Write `content` verbatim as the input table
pub fn write_raw(content: &str) -> EventFile {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("perm_events.dat");
    std::fs::write(&input, content).expect("write input");

    let out_dir = dir.path().join("out");
    std::fs::create_dir(&out_dir).expect("create out dir");

    EventFile {
        _dir: dir,
        input,
        out_dir,
    }
}

/// Read an output file as text
pub fn read_output(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("read {}: {err}", path.display()))
}
