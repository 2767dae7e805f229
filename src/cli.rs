//! Command-line arguments

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};

use crate::error::{PermeationError, Result};

const LONG_ABOUT: &str = "\
Analyze a table of water permeation events detected across a lipid membrane.

This tool processes simulation data to generate visualizations and data files that help analyze permeation events.

Outputs:
    - PNG file: A plot of cumulated total permeation events over time.
    - PDF file: A PDF version of the same plot.
    - XVG file: Data in XVG format containing time and cumulative permeations.
    - SEL file: Selection file for visualizing the permeated water molecules in VMD.

Examples:
    1. Basic usage without time offset:
       perm-tot data.csv <simulation_flag>

    2. Usage with a time offset:
       perm-tot data.csv <simulation_flag> --time-offset 10.0

The second form generates the same output files but only includes permeations occurring after 10 nanoseconds.";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "perm-tot",
    version,
    about = "Cumulative water permeation plot, XVG series and VMD selection from a permeation event table",
    long_about = LONG_ABOUT
)]
pub struct Args {
    /// Path to the CSV file containing the simulation data.
    pub csv_file: PathBuf,

    /// Identifier for the output files.
    pub flag: String,

    /// Time offset (in nanoseconds) to filter the data for water molecule selection.
    #[arg(
        short = 't',
        long = "time-offset",
        default_value_t = 0.0,
        allow_negative_numbers = true
    )]
    pub time_offset: f64,

    /// Output directory (must exist). Empty means the current directory.
    #[arg(short = 'o', long = "output-dir", default_value = "")]
    pub output_dir: String,
}

impl Args {
    /// Output directory, `.` when not given or empty
    pub fn output_dir(&self) -> &Path {
        if self.output_dir.is_empty() {
            Path::new(".")
        } else {
            Path::new(&self.output_dir)
        }
    }

    /// Checks clap cannot express: the input must be an existing file, the
    /// flag must not be empty and the time offset must be finite.
    pub fn validate(&self) -> Result<()> {
        if !self.csv_file.is_file() {
            return Err(PermeationError::NotFound {
                path: self.csv_file.clone(),
            });
        }

        if self.flag.is_empty() {
            return Err(PermeationError::Usage {
                message: "The 'flag' argument is required.".to_string(),
            });
        }

        check_time_offset(self.time_offset)
    }

    /// Full help text, as printed by `--help`
    pub fn help_text() -> String {
        Self::command().render_long_help().to_string()
    }
}

/// Rejects offsets that cannot start the time axis (`NaN`, `inf`)
pub fn check_time_offset(time_offset: f64) -> Result<()> {
    if time_offset.is_finite() {
        Ok(())
    } else {
        Err(PermeationError::Usage {
            message: format!("The 'time_offset' argument must be a finite number, got {time_offset}."),
        })
    }
}
