//! Float trait

use cast::From;
use num_traits::float;

/// Extension of `num_traits::float::Float` with the safe casts the percentile and histogram
/// code relies on.
pub trait Float: float::Float + From<usize, Output = Self> + From<f32, Output = Self> {}

impl Float for f32 {}
impl Float for f64 {}
