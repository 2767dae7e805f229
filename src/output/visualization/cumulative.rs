//! Cumulative permeation step plot
//!
//! Draws the running permeation count against time as a "post" step
//! function: after each event the count holds until the next event time,
//! then jumps by one.
//!
//! ```text
//!  count
//!    3 |               ┌──
//!    2 |        ┌──────┘
//!    1 |  ┌─────┘
//!    0 +──┴──────────────── time(ns)
//!     offset
//! ```
//!
//! The same drawing is written twice: PNG through the plotters bitmap
//! backend, and PDF by rendering SVG in memory and converting it with
//! `svg2pdf`.

use plotters::prelude::*;
use std::error::Error;
use std::fs;
use std::ops::Range;
use std::path::Path;

use svg2pdf::usvg;
use svg2pdf::{ConversionOptions, PageOptions};
use tracing::debug;

use super::config::PlotConfig;
use crate::error::{PermeationError, Result};
use crate::output::OutputPaths;
use crate::table::ProcessedTable;

/// Fraction of the data span added past the last event / highest count
const AUTOSCALE_MARGIN: f64 = 0.05;

/// Widest x span handed to plotters; its tick arithmetic overflows on wider ones
pub const MAX_SPAN: f64 = f64::MAX / 2.0;

/// Upper bound on the number of y tick labels
const MAX_COUNT_LABELS: usize = 10;

// =================================================================================================
// Geometry
// =================================================================================================

/// Vertices of the post-style step line through the table's events
///
/// For events `(t_0, 1), (t_1, 2), ...` the path is
/// `(t_0, 1) → (t_1, 1) → (t_1, 2) → (t_2, 2) → ...` and stops at the last
/// event.
pub fn step_post_points(table: &ProcessedTable) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(table.len() * 2);
    let mut previous: Option<f64> = None;

    for row in table.iter() {
        let time = row.time();
        let count = row.cumulative_count as f64;
        if let Some(held) = previous {
            points.push((time, held));
        }
        points.push((time, count));
        previous = Some(count);
    }

    points
}

/// Axis ranges: x starts at `time_offset`, y at 0, upper bounds follow the data
///
/// An empty table (or one whose last event is not a finite time after the
/// offset) gets a unit span, widened for offsets too large for `+ 1.0` to
/// register. The x span never exceeds [`MAX_SPAN`]; the only offset with no
/// room above it (`f64::MAX`) gets an axis ending at the offset instead.
///
/// `time_offset` must be finite.
pub fn axis_ranges(table: &ProcessedTable, time_offset: f64) -> (Range<f64>, Range<f64>) {
    let wanted = match table.time_range() {
        Some((_, last)) if last.is_finite() && last > time_offset => {
            last + (last - time_offset) * AUTOSCALE_MARGIN
        }
        _ => time_offset + (time_offset.abs() * AUTOSCALE_MARGIN).max(1.0),
    };

    let x_end = wanted.min(time_offset + MAX_SPAN).min(f64::MAX);
    let x_range = if x_end > time_offset {
        time_offset..x_end
    } else {
        time_offset - MAX_SPAN..time_offset
    };

    let max_count = table.max_count() as f64;
    let y_end = if max_count > 0.0 {
        max_count * (1.0 + AUTOSCALE_MARGIN)
    } else {
        1.0
    };

    (x_range, 0.0..y_end)
}

/// Number of y labels to request so every tick is a whole count
///
/// plotters picks the finest 1/2/5 step that fits the requested number of
/// labels. Asking for no more labels than there are whole counts in the
/// range keeps the step at 1 or above, and caps the label count for tall
/// axes.
pub fn count_label_limit(y_range: &Range<f64>) -> usize {
    let whole_counts = (y_range.end - y_range.start).floor() as usize + 1;
    whole_counts.clamp(2, MAX_COUNT_LABELS)
}

// =================================================================================================
// Public API
// =================================================================================================

/// Plot the cumulative count and write it as PNG and PDF
///
/// Prints `Saving plot as PNG: <path>` and `Saving plot as PDF: <path>`
/// before each file is written. Existing files are replaced.
///
/// # Arguments
///
/// * `table`       — Processed (sorted, counted) events; may be empty
/// * `flag`        — Run identifier used in the title when `config` is `None`
/// * `time_offset` — Lower bound of the x axis
/// * `paths`       — Destination of the `png` and `pdf` files
/// * `config`      — Optional plot configuration; `None` uses [`PlotConfig::permeation`]
///
/// # Errors
///
/// [`PermeationError::Render`] if drawing fails (including an unwritable PNG
/// path), [`PermeationError::Pdf`] if the PDF conversion fails, and
/// [`PermeationError::Io`] if the PDF cannot be written.
///
/// # Example
///
/// ```rust,ignore
/// let paths = OutputPaths::new(".", "popc");
/// plot_cumulative(&processed, "popc", 10.0, &paths, None)?;
/// ```
pub fn plot_cumulative(
    table: &ProcessedTable,
    flag: &str,
    time_offset: f64,
    paths: &OutputPaths,
    config: Option<&PlotConfig>,
) -> Result<()> {
    let default_config = PlotConfig::permeation(flag);
    let config = config.unwrap_or(&default_config);

    println!("Saving plot as PNG: {}", paths.png.display());
    plot_cumulative_png(table, time_offset, &paths.png, config)?;

    println!("Saving plot as PDF: {}", paths.pdf.display());
    plot_cumulative_pdf(table, time_offset, &paths.pdf, config)?;

    Ok(())
}

/// Render the plot to a PNG file
pub fn plot_cumulative_png(
    table: &ProcessedTable,
    time_offset: f64,
    path: &Path,
    config: &PlotConfig,
) -> Result<()> {
    let (x_range, y_range) = drawable_ranges(table, time_offset, path)?;
    let points = step_post_points(table);

    let backend = BitMapBackend::new(path, (config.width, config.height));
    draw_cumulative(backend, &points, x_range, y_range, config).map_err(|err| {
        PermeationError::Render {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    })?;

    debug!(path = %path.display(), vertices = points.len(), "rendered png");
    Ok(())
}

/// Render the plot to a PDF file
pub fn plot_cumulative_pdf(
    table: &ProcessedTable,
    time_offset: f64,
    path: &Path,
    config: &PlotConfig,
) -> Result<()> {
    drawable_ranges(table, time_offset, path)?;
    let svg = render_svg(table, time_offset, config).map_err(|err| PermeationError::Render {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let pdf = svg_to_pdf(&svg).map_err(|message| PermeationError::Pdf {
        path: path.to_path_buf(),
        message,
    })?;

    fs::write(path, &pdf).map_err(|err| PermeationError::io(path, err))?;

    debug!(path = %path.display(), bytes = pdf.len(), "rendered pdf");
    Ok(())
}

// =================================================================================================
// Private Implementations
// =================================================================================================

/// [`axis_ranges`], refusing an offset plotters cannot place on an axis
fn drawable_ranges(
    table: &ProcessedTable,
    time_offset: f64,
    path: &Path,
) -> Result<(Range<f64>, Range<f64>)> {
    if !time_offset.is_finite() {
        return Err(PermeationError::Render {
            path: path.to_path_buf(),
            message: format!("time offset {time_offset} is not a finite number"),
        });
    }
    Ok(axis_ranges(table, time_offset))
}

/// Render the plot as an SVG document held in memory
fn render_svg(
    table: &ProcessedTable,
    time_offset: f64,
    config: &PlotConfig,
) -> std::result::Result<String, Box<dyn Error>> {
    let points = step_post_points(table);
    let (x_range, y_range) = axis_ranges(table, time_offset);

    let mut svg = String::new();
    {
        let backend = SVGBackend::with_string(&mut svg, (config.width, config.height));
        draw_cumulative(backend, &points, x_range, y_range, config)?;
    }
    Ok(svg)
}

fn svg_to_pdf(svg: &str) -> std::result::Result<Vec<u8>, String> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options).map_err(|err| err.to_string())?;
    svg2pdf::to_pdf(&tree, ConversionOptions::default(), PageOptions::default())
        .map_err(|err| err.to_string())
}

/// Draw the step plot on any plotters backend
fn draw_cumulative<DB: DrawingBackend>(
    backend: DB,
    points: &[(f64, f64)],
    x_range: Range<f64>,
    y_range: Range<f64>,
    config: &PlotConfig,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let y_labels = count_label_limit(&y_range);
    // Only a span clamped to MAX_SPAN leaves events past the axis end
    let x_max = x_range.end;

    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    // Each `titled` call consumes one line at the top of the area
    let mut area = root.margin(0, 0, 0, 0);
    for line in &config.title_lines {
        area = area.titled(line, ("sans-serif", config.title_font_size).into_font())?;
    }

    let mut chart = ChartBuilder::on(&area)
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(75)
        .build_cartesian_2d(x_range, y_range)?;

    let count_formatter = |y: &f64| format!("{:.0}", y);
    let mut mesh = chart.configure_mesh();
    mesh.x_desc(config.xlabel.as_str())
        .y_desc(config.ylabel.as_str())
        .axis_desc_style(("sans-serif", config.label_font_size).into_font())
        .label_style(("sans-serif", config.tick_font_size).into_font())
        .y_labels(y_labels)
        .y_label_formatter(&count_formatter);
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().map(|&(time, count)| (time.min(x_max), count)),
        ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
    ))?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::process;
    use crate::table::Table;
    use plotters::coord::types::RangedCoordf64;

    fn sample() -> ProcessedTable {
        process(Table::from_events([(5.0, "10"), (2.0, "20"), (8.0, "30")]))
    }

    fn events(n: usize) -> ProcessedTable {
        process(Table::from_events((1..=n).map(|i| (i as f64, "1"))))
    }

    /// Text of the right-anchored labels, i.e. the y axis ticks
    fn y_tick_labels(svg: &str) -> Vec<String> {
        svg.split("<text")
            .skip(1)
            .filter_map(|element| element.split_once('>'))
            .filter(|(attrs, _)| attrs.contains("text-anchor=\"end\""))
            .map(|(_, body)| body.trim_start().lines().next().unwrap_or("").to_string())
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Geometry
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_step_points_hold_then_jump() {
        let points = step_post_points(&sample());
        assert_eq!(
            points,
            vec![
                (2.0, 1.0),
                (5.0, 1.0),
                (5.0, 2.0),
                (8.0, 2.0),
                (8.0, 3.0),
            ]
        );
    }

    #[test]
    fn test_step_points_single_and_empty() {
        let single = process(Table::from_events([(4.0, "1")]));
        assert_eq!(step_post_points(&single), vec![(4.0, 1.0)]);
        assert!(step_post_points(&ProcessedTable::default()).is_empty());
    }

    #[test]
    fn test_axis_ranges_start_at_offset_and_zero() {
        let (x, y) = axis_ranges(&sample(), 1.0);
        assert_eq!(x.start, 1.0);
        assert!((x.end - 8.35).abs() < 1e-12);
        assert_eq!(y.start, 0.0);
        assert!((y.end - 3.15).abs() < 1e-12);
    }

    #[test]
    fn test_axis_ranges_empty_table() {
        let (x, y) = axis_ranges(&ProcessedTable::default(), 10.0);
        assert_eq!(x, 10.0..11.0);
        assert_eq!(y, 0.0..1.0);
    }

    #[test]
    fn test_axis_ranges_empty_table_large_offset() {
        let (x, _) = axis_ranges(&ProcessedTable::default(), 1e20);
        assert_eq!(x.start, 1e20);
        assert!(x.end > x.start);
    }

    #[test]
    fn test_axis_ranges_overflowing_span_stays_finite() {
        let table = process(Table::from_events([(1e308, "1")]));
        let (x, _) = axis_ranges(&table, -1e308);
        assert_eq!(x.start, -1e308);
        assert!(x.end.is_finite());
        assert!(x.end - x.start <= MAX_SPAN);
        assert!(x.end > x.start);
    }

    #[test]
    fn test_axis_ranges_offset_at_float_max() {
        let (x, _) = axis_ranges(&ProcessedTable::default(), f64::MAX);
        assert!(x.start.is_finite() && x.end.is_finite());
        assert!(x.end > x.start);
    }

    #[test]
    fn test_count_ticks_are_whole_numbers() {
        for n in [0, 1, 2, 3, 7, 12, 40, 1000] {
            let (_, y) = axis_ranges(&events(n), 0.0);
            let coord: RangedCoordf64 = y.clone().into();
            let ticks = coord.key_points(count_label_limit(&y));

            assert!(ticks.len() >= 2, "n={n}: {ticks:?}");
            assert!(ticks.len() <= MAX_COUNT_LABELS, "n={n}: {ticks:?}");
            for tick in &ticks {
                assert_eq!(tick.fract(), 0.0, "n={n}: {ticks:?}");
            }
        }
    }

    #[test]
    fn test_svg_count_labels_are_unique() {
        let config = PlotConfig::permeation("popc");
        for n in 1..=3 {
            let svg = render_svg(&events(n), 0.0, &config).unwrap();
            let labels = y_tick_labels(&svg);
            let expected: Vec<String> = (0..=n).map(|count| count.to_string()).collect();
            assert_eq!(labels, expected, "n={n}");
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // File output
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_render_svg_contains_labels() {
        let config = PlotConfig::permeation("popc");
        let svg = render_svg(&sample(), 0.0, &config).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("in popc"));
        assert!(svg.contains("# permeations"));
    }

    #[test]
    fn test_plot_png_and_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let paths = OutputPaths::new(dir.path(), "popc");
        plot_cumulative(&sample(), "popc", 0.0, &paths, None).unwrap();

        assert!(paths.png.exists());
        let pdf = std::fs::read(&paths.pdf).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_svg_overflowing_span() {
        let table = process(Table::from_events([(1e308, "1")]));
        let config = PlotConfig::permeation("wide");
        assert!(render_svg(&table, -1e308, &config).is_ok());
    }

    #[test]
    fn test_plot_nan_offset_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = OutputPaths::new(dir.path(), "nan");
        let err = plot_cumulative(&sample(), "nan", f64::NAN, &paths, None).unwrap_err();
        assert!(matches!(err, PermeationError::Render { .. }));
        assert!(!paths.png.exists());
    }

    #[test]
    fn test_plot_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let paths = OutputPaths::new(dir.path(), "empty");
        plot_cumulative(&ProcessedTable::default(), "empty", 3.0, &paths, None).unwrap();
        assert!(paths.png.exists());
        assert!(paths.pdf.exists());
    }
}
