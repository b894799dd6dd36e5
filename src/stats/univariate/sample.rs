use std::{mem, ops};

use crate::stats::float::Float;
use crate::stats::univariate::{Histogram, Percentiles};

/// A collection of numeric observations taken from one column of a table
///
/// Invariants:
///
/// - The sample contains at least 1 data point
/// - The sample contains no `NaN`s
#[repr(transparent)]
pub struct Sample<A>([A]);

impl<A> Sample<A>
where
    A: Float,
{
    /// Creates a new sample from an existing slice
    ///
    /// # Panics
    ///
    /// Panics if `slice` contains any `NaN` or if `slice` is empty
    #[allow(clippy::new_ret_no_self)]
    pub fn new(slice: &[A]) -> &Sample<A> {
        match Sample::try_new(slice) {
            Some(sample) => sample,
            None => panic!("a sample needs at least one data point and no NaNs"),
        }
    }

    /// Creates a new sample from an existing slice, or `None` if the slice is empty or contains
    /// a `NaN`
    pub fn try_new(slice: &[A]) -> Option<&Sample<A>> {
        if slice.is_empty() || slice.iter().any(|x| x.is_nan()) {
            return None;
        }

        // NB `Sample` is `repr(transparent)` over `[A]`
        Some(unsafe { mem::transmute::<&[A], &Sample<A>>(slice) })
    }

    /// Returns the biggest element in the sample
    ///
    /// - Time: `O(length)`
    pub fn max(&self) -> A {
        let mut elems = self.iter();

        match elems.next() {
            Some(&head) => elems.fold(head, |a, &b| a.max(b)),
            // NB `unreachable!` because `Sample` is guaranteed to have at least one data point
            None => unreachable!(),
        }
    }

    /// Returns the arithmetic average of the sample
    ///
    /// - Time: `O(length)`
    pub fn mean(&self) -> A {
        let n = self.len();

        self.sum() / A::cast(n)
    }

    /// Returns the smallest element in the sample
    ///
    /// - Time: `O(length)`
    pub fn min(&self) -> A {
        let mut elems = self.iter();

        match elems.next() {
            Some(&elem) => elems.fold(elem, |a, &b| a.min(b)),
            // NB `unreachable!` because `Sample` is guaranteed to have at least one data point
            None => unreachable!(),
        }
    }

    /// Returns a "view" into the percentiles of the sample
    ///
    /// This "view" makes consecutive computations of percentiles much faster (`O(1)`)
    ///
    /// - Time: `O(N log N) where N = length`
    /// - Memory: `O(length)`
    pub fn percentiles(&self) -> Percentiles<A>
    where
        usize: cast::From<A, Output = Result<usize, cast::Error>>,
    {
        use std::cmp::Ordering;

        // NB This function assumes that there are no `NaN`s in the sample
        fn cmp<T>(a: &T, b: &T) -> Ordering
        where
            T: PartialOrd,
        {
            match a.partial_cmp(b) {
                Some(o) => o,
                // Arbitrary way to handle NaNs that should never happen
                None => Ordering::Equal,
            }
        }

        let mut v = self.to_vec().into_boxed_slice();
        v.sort_unstable_by(cmp);

        Percentiles::from_sorted(v)
    }

    /// Counts the data points falling into `bins` equal-width bins spanning `[min, max]`
    ///
    /// - Time: `O(length)`
    pub fn histogram(&self, bins: usize) -> Histogram<A>
    where
        usize: cast::From<A, Output = Result<usize, cast::Error>>,
    {
        Histogram::new(self, bins)
    }

    /// Returns the sum of all the elements of the sample
    ///
    /// - Time: `O(length)`
    pub fn sum(&self) -> A {
        crate::stats::sum(self)
    }

    /// Returns the variance of the sample
    ///
    /// The `mean` can be optionally passed along to speed up (2X) the computation. A sample with
    /// a single data point has zero variance.
    ///
    /// - Time: `O(length)`
    pub fn var(&self, mean: Option<A>) -> A {
        use std::ops::Add;

        if self.len() == 1 {
            return A::cast(0);
        }

        let mean = mean.unwrap_or_else(|| self.mean());

        let sum = self
            .iter()
            .map(|&x| (x - mean).powi(2))
            .fold(A::cast(0), Add::add);

        sum / A::cast(self.len() - 1)
    }
}

impl<A> ops::Deref for Sample<A> {
    type Target = [A];

    fn deref(&self) -> &[A] {
        &self.0
    }
}
