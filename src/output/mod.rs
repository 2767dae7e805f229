//! Output artifacts for a processed permeation table
//!
//! ```text
//! output/
//! ├── mod.rs              ← OutputPaths (file naming)
//! ├── visualization/      ← PNG/PDF step plot
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── cumulative.rs
//! └── export/             ← Text exports
//!     ├── mod.rs
//!     ├── xvg.rs
//!     └── selection.rs
//! ```
//!
//! Every file name is derived from the output directory and the run `flag`
//! alone, so two runs with the same flag overwrite each other's files.

use std::path::{Path, PathBuf};

pub mod export;
pub mod visualization;

pub use export::{Exporter, SelectionExporter, XvgConfig, XvgExporter};
pub use visualization::{plot_cumulative, PlotConfig};

/// Paths of the four files written for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub png: PathBuf,
    pub pdf: PathBuf,
    pub xvg: PathBuf,
    pub sel: PathBuf,
}

impl OutputPaths {
    /// # Example
    ///
    /// ```rust
    /// use perm_tot::output::OutputPaths;
    ///
    /// let paths = OutputPaths::new(".", "popc");
    /// assert!(paths.png.ends_with("permeation_cumul_popc.png"));
    /// assert!(paths.sel.ends_with("permeation_selec_popc.sel"));
    /// ```
    pub fn new(dir: impl AsRef<Path>, flag: &str) -> Self {
        let dir = dir.as_ref();
        let plot = |ext: &str| dir.join(format!("permeation_cumul_{flag}.{ext}"));
        Self {
            png: plot("png"),
            pdf: plot("pdf"),
            xvg: dir.join(XvgExporter::default().file_name(flag)),
            sel: dir.join(SelectionExporter.file_name(flag)),
        }
    }

    /// All paths in the order they are written
    pub fn all(&self) -> [&Path; 4] {
        [
            self.png.as_path(),
            self.pdf.as_path(),
            self.xvg.as_path(),
            self.sel.as_path(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_base_name() {
        let paths = OutputPaths::new("/tmp/run", "dopc_300K");
        assert_eq!(paths.png, PathBuf::from("/tmp/run/permeation_cumul_dopc_300K.png"));
        assert_eq!(paths.pdf, PathBuf::from("/tmp/run/permeation_cumul_dopc_300K.pdf"));
        assert_eq!(paths.xvg, PathBuf::from("/tmp/run/permeation_cumul_dopc_300K.xvg"));
        assert_eq!(paths.sel, PathBuf::from("/tmp/run/permeation_selec_dopc_300K.sel"));
    }

    #[test]
    fn test_export_paths_follow_exporters() {
        let paths = OutputPaths::new("out", "popc");
        assert_eq!(paths.xvg, Path::new("out").join(XvgExporter::default().file_name("popc")));
        assert_eq!(paths.sel, Path::new("out").join(SelectionExporter.file_name("popc")));
        assert_eq!(paths.xvg.file_stem(), paths.png.file_stem());
    }

    #[test]
    fn test_all_in_write_order() {
        let paths = OutputPaths::new(".", "x");
        let exts: Vec<&str> = paths
            .all()
            .into_iter()
            .map(|p| p.extension().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(exts, vec!["png", "pdf", "xvg", "sel"]);
    }
}
