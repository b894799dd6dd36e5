//! Helpers for exploratory data analysis over an in-memory table.
//!
//! Two things are provided:
//!
//! - [`get_outliers`] extracts the rows whose value in a column falls outside Tukey's
//!   `1.5 * IQR` fences, on one or both sides.
//! - [`plot_histograms`] and [`plot_boxes`] draw a single row of histogram or box-plot panels,
//!   one per declarative configuration record ([`HistogramDetails`], [`BoxplotDetails`]).
//!
//! ```no_run
//! use eda_utils::{
//!     get_outliers, render_histograms_svg, CoreDetails, FigureSettings, HistogramDetails,
//!     OutlierSide, Table,
//! };
//!
//! # fn main() -> eda_utils::Result<()> {
//! let table = Table::from_json(r#"{"columns": ["age", "income"],
//!                                  "rows": [[34, 52000], [29, 48000], [71, 310000]]}"#)?;
//!
//! let rich = get_outliers(&table, "income", OutlierSide::High)?;
//! println!("{} high earners", rich.len());
//!
//! let details = vec![HistogramDetails::new(
//!     CoreDetails::new("age", "Customer age", "Age", "Customers"),
//!     10,
//!     "skyblue",
//! )?];
//! render_histograms_svg(&table, &details, &FigureSettings::default(), "age.svg")?;
//! # Ok(())
//! # }
//! ```
//!
//! Progress is reported through the `log` facade; install any logger to see it.

#![warn(bare_trait_objects)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod color;
mod config;
mod details;
mod error;
mod outliers;
mod plot;
mod table;

pub mod stats;

pub use crate::color::parse as parse_color;
pub use crate::config::FigureSettings;
pub use crate::details::{BoxplotDetails, CoreDetails, HistogramDetails, PlotDetails};
pub use crate::error::{Error, Result};
pub use crate::outliers::{get_outliers, iqr_fences, summarize, OutlierSide};
pub use crate::stats::univariate::outliers::tukey::{Fences, LabelCounts};
pub use crate::plot::{
    plot_boxes, plot_details, plot_histograms, render_boxes_svg, render_histograms_svg,
};
pub use crate::table::{Table, Value};
