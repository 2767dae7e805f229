//! Plot configuration for the cumulative permeation plot

use plotters::prelude::*;

/// Configuration for customizing the plot
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels (PDF page size follows the same numbers in points)
/// - `title_lines`: Title, one entry per line
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`, `background`, `line_width`: Series and canvas styling
/// - `title_font_size`, `label_font_size`, `tick_font_size`: Font sizes in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust,ignore
/// use perm_tot::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::permeation("popc");
/// config.line_color = RED;
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 800)
    pub width: u32,

    /// Image height in pixels (default: 600)
    pub height: u32,

    /// Title lines, drawn top to bottom
    pub title_lines: Vec<String>,

    /// X-axis label (default: "time(ns)")
    pub xlabel: String,

    /// Y-axis label (default: "# permeations")
    pub ylabel: String,

    /// Step line color (default: matplotlib's first cycle color)
    pub line_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    pub title_font_size: f64,
    pub label_font_size: f64,
    pub tick_font_size: f64,

    /// Show grid lines (default: false)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title_lines: vec!["Plot".to_string()],
            xlabel: "time(ns)".to_string(),
            ylabel: "# permeations".to_string(),
            line_color: RGBColor(31, 119, 180),
            background: WHITE,
            line_width: 2,
            title_font_size: 30.0,
            label_font_size: 26.0,
            tick_font_size: 22.0,
            show_grid: false,
        }
    }
}

impl PlotConfig {
    /// Config for the cumulative permeation plot of run `flag`
    ///
    /// The title reads `Cumulated Total number of Permeations` on the first
    /// line and `in <flag>` on the second.
    pub fn permeation(flag: &str) -> Self {
        Self {
            title_lines: vec![
                "Cumulated Total number of Permeations".to_string(),
                format!("in {flag}"),
            ],
            ..Default::default()
        }
    }

    pub fn title(&self) -> String {
        self.title_lines.join(" ")
    }
}
