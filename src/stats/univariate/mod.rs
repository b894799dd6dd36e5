//! Univariate analysis

mod histogram;
mod percentiles;
mod sample;

pub mod outliers;

pub use self::histogram::{Bin, Histogram};
pub use self::percentiles::Percentiles;
pub use self::sample::Sample;
