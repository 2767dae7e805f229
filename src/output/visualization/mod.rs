//! Visualization of cumulative permeation counts
//!
//! Uses the `plotters` library for drawing; the PDF copy goes through
//! `svg2pdf`.
//!
//! # Organization
//!
//! - **config**: Plot configuration (`PlotConfig`)
//! - **cumulative**: Step plot of the running permeation count vs time
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use perm_tot::output::{OutputPaths, visualization::plot_cumulative};
//!
//! let paths = OutputPaths::new("results", "popc");
//! plot_cumulative(&processed, "popc", 10.0, &paths, None)?;
//! // results/permeation_cumul_popc.png
//! // results/permeation_cumul_popc.pdf
//! ```

pub mod config;
pub mod cumulative;

pub use config::PlotConfig;

pub use cumulative::{
    axis_ranges, plot_cumulative, plot_cumulative_pdf, plot_cumulative_png, step_post_points,
};
