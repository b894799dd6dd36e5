//! Descriptive statistics over numeric columns.
//!
//! Only the pieces needed for exploratory analysis live here: a validated view over a slice of
//! floats, its percentiles and the Tukey outlier classifier built on top of them.

pub mod univariate;

mod float;

pub use crate::stats::float::Float;

fn sum<A>(xs: &[A]) -> A
where
    A: Float,
{
    use std::ops::Add;

    xs.iter().cloned().fold(A::cast(0), Add::add)
}
