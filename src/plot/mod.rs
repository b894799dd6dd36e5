//! Grid renderers
//!
//! Each renderer splits the drawing area into a single row of equally wide panels, one per
//! configuration entry, and draws the configured column of the table into it. Any `plotters`
//! backend works; the `*_svg` helpers write an SVG file into the configured output directory.

use plotters::coord::Shift;
use plotters::data::float::pretty_print_float;
use plotters::prelude::*;
use std::fs;
use std::ops::Range;
use std::path::PathBuf;

use crate::color;
use crate::config::FigureSettings;
use crate::details::{BoxplotDetails, HistogramDetails, PlotDetails};
use crate::error::{Error, Result};
use crate::stats::univariate::{Histogram, Sample};
use crate::table::Table;

mod boxplot;
mod histogram;

const LINE_GRAY: RGBColor = RGBColor(63, 63, 63);
static POINT_SIZE: u32 = 3;

/// Draws one histogram per entry of `details`, side by side
///
/// An empty `details` leaves a blank figure. A configuration naming a column the table does not
/// have fails with [`Error::InvalidColumn`](crate::Error::InvalidColumn).
pub fn plot_histograms<DB>(
    root: &DrawingArea<DB, Shift>,
    table: &Table,
    details: &[HistogramDetails],
    settings: &FigureSettings,
) -> Result<()>
where
    DB: DrawingBackend,
{
    draw_grid(root, details, "histogram", |area, details| {
        histogram::histogram_panel(area, table, details, settings)
    })
}

/// Draws one box plot per entry of `details`, side by side
///
/// Same contract as [`plot_histograms`].
pub fn plot_boxes<DB>(
    root: &DrawingArea<DB, Shift>,
    table: &Table,
    details: &[BoxplotDetails],
    settings: &FigureSettings,
) -> Result<()>
where
    DB: DrawingBackend,
{
    draw_grid(root, details, "box plot", |area, details| {
        boxplot::boxplot_panel(area, table, details, settings)
    })
}

/// Draws a row mixing histograms and box plots, in the order given
pub fn plot_details<DB>(
    root: &DrawingArea<DB, Shift>,
    table: &Table,
    details: &[PlotDetails],
    settings: &FigureSettings,
) -> Result<()>
where
    DB: DrawingBackend,
{
    draw_grid(root, details, "mixed", |area, details| match details {
        PlotDetails::Histogram(details) => {
            histogram::histogram_panel(area, table, details, settings)
        }
        PlotDetails::Boxplot(details) => boxplot::boxplot_panel(area, table, details, settings),
    })
}

/// Renders [`plot_histograms`] into `file_name` under the settings' output directory
pub fn render_histograms_svg(
    table: &Table,
    details: &[HistogramDetails],
    settings: &FigureSettings,
    file_name: &str,
) -> Result<PathBuf> {
    let path = output_path(settings, file_name)?;
    {
        let root = SVGBackend::new(&path, settings.get_size()).into_drawing_area();
        plot_histograms(&root, table, details, settings)?;
    }
    info!("Wrote {:?}", path);

    Ok(path)
}

/// Renders [`plot_boxes`] into `file_name` under the settings' output directory
pub fn render_boxes_svg(
    table: &Table,
    details: &[BoxplotDetails],
    settings: &FigureSettings,
    file_name: &str,
) -> Result<PathBuf> {
    let path = output_path(settings, file_name)?;
    {
        let root = SVGBackend::new(&path, settings.get_size()).into_drawing_area();
        plot_boxes(&root, table, details, settings)?;
    }
    info!("Wrote {:?}", path);

    Ok(path)
}

fn output_path(settings: &FigureSettings, file_name: &str) -> Result<PathBuf> {
    let dir = settings.get_output_directory();
    fs::create_dir_all(dir).map_err(|inner| Error::AccessError {
        path: dir.to_owned(),
        inner,
    })?;

    Ok(dir.join(file_name))
}

fn draw_grid<DB, T, F>(
    root: &DrawingArea<DB, Shift>,
    details: &[T],
    kind: &str,
    mut draw_panel: F,
) -> Result<()>
where
    DB: DrawingBackend,
    F: FnMut(&DrawingArea<DB, Shift>, &T) -> Result<()>,
{
    root.fill(&WHITE)?;

    if details.is_empty() {
        warn!("No {} panels configured; drawing an empty figure", kind);
    } else {
        let panels = root.split_evenly((1, details.len()));
        for (panel, details) in panels.iter().zip(details) {
            draw_panel(panel, details)?;
        }
        debug!("Drew {} {} panel(s)", details.len(), kind);
    }

    root.present()?;
    Ok(())
}

/// Collects the finite numeric cells of `column`, warning when there are none to draw
fn panel_values(table: &Table, column: &str) -> Result<Vec<f64>> {
    let cells = table.numeric_column(column)?;
    let total = cells.len();
    let values: Vec<f64> = cells
        .into_iter()
        .map(|(_, x)| x)
        .filter(|x| x.is_finite())
        .collect();

    if values.len() < total {
        warn!(
            "Column '{}' has {} infinite value(s); they are left out of the plot",
            column,
            total - values.len()
        );
    }
    if values.is_empty() {
        warn!("Column '{}' has no numeric values to plot", column);
    }

    Ok(values)
}

/// Pads `[lo, hi]` by 5% on each side, or by 0.5 when the range is a single point
///
/// Fails when the padded range of `column` is too wide to be represented.
fn padded_range(column: &str, lo: f64, hi: f64) -> Result<Range<f64>> {
    let range = if lo == hi {
        (lo - 0.5)..(hi + 0.5)
    } else {
        let pad = (hi - lo) * 0.05;
        (lo - pad)..(hi + pad)
    };

    if (range.end - range.start).is_finite() {
        Ok(range)
    } else {
        Err(Error::InvalidDetails(format!(
            "column '{}' has a non-finite range",
            column
        )))
    }
}
