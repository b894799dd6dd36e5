use crate::stats::float::Float;
use crate::stats::univariate::Sample;
use cast::usize;

/// A half-open `[start, end)` bin and the number of data points that fell into it
///
/// The last bin of a histogram is closed on both ends, so the maximum of the sample is counted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bin<A> {
    pub start: A,
    pub end: A,
    pub count: usize,
}

/// Equal-width binning of a sample
#[derive(Clone, Debug)]
pub struct Histogram<A> {
    bins: Vec<Bin<A>>,
}

impl<A> Histogram<A>
where
    A: Float,
    usize: cast::From<A, Output = Result<usize, cast::Error>>,
{
    /// Bins `sample` into `nbins` bins spanning `[min, max]`
    ///
    /// When every data point has the same value the range is widened to `value ± 0.5`.
    ///
    /// # Panics
    ///
    /// Panics if `nbins` is zero, or if the range of the sample is not finite
    pub fn new(sample: &Sample<A>, nbins: usize) -> Histogram<A> {
        assert!(nbins > 0);
        assert!((sample.max() - sample.min()).is_finite());

        let half = A::cast(0.5_f32);
        let (mut lo, mut hi) = (sample.min(), sample.max());
        if lo == hi {
            lo = lo - half;
            hi = hi + half;
        }

        let n = A::cast(nbins);
        let width = (hi - lo) / n;
        let mut bins: Vec<_> = (0..nbins)
            .map(|i| Bin {
                start: lo + width * A::cast(i),
                end: if i + 1 == nbins {
                    hi
                } else {
                    lo + width * A::cast(i + 1)
                },
                count: 0,
            })
            .collect();

        for &x in sample.iter() {
            let offset = ((x - lo) / (hi - lo) * n).floor();
            // NB `x >= lo`, so only the maximum can land past the last bin
            let i = usize(offset).unwrap_or(0).min(nbins - 1);
            bins[i].count += 1;
        }

        Histogram { bins }
    }

    /// Returns the bins, ordered from lowest to highest
    pub fn bins(&self) -> &[Bin<A>] {
        &self.bins
    }

    /// Returns the count of the fullest bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}
