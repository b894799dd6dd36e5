//! Tukey's method
//!
//! Tukey's method uses two "fences" to classify the data. All the observations "inside" the
//! fences are considered "normal", and the rest are considered outliers.
//!
//! The fences are computed from the quartiles of the sample, according to the following formula:
//!
//! ``` ignore
//! // q1, q3 are the first and third quartiles
//! let iqr = q3 - q1;  // The interquartile range
//! let (f1, f2) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);  // the "fences"
//!
//! let is_outlier = |x| x < f1 || x > f2;
//! ```
//!
//! The classifier provided here adds two extra outer fences:
//!
//! ``` ignore
//! let (f3, f4) = (q1 - 3 * iqr, q3 + 3 * iqr);  // the outer "fences"
//! ```
//!
//! Data points outside of the outer fences are "severe" outliers, points between an inner and an
//! outer fence are "mild" outliers, and everything inside the inner fences is "normal" data.
//!
//! ``` ignore
//!          LOW-ish                NORMAL-ish                 HIGH-ish
//!         x   |       +    |  o o  o    o   o o  o  |        +   |   x
//!             f3           f1                       f2           f4
//!
//! Legend:
//! o: "normal" data (not an outlier)
//! +: "mild" outlier
//! x: "severe" outlier
//! ```
//!
//! Comparisons against the fences are strict: a point sitting exactly on a fence is not beyond it.

use std::ops::Deref;
use std::slice;

use crate::stats::float::Float;
use crate::stats::univariate::Sample;

use self::Label::*;

/// The quartiles of a sample and the four fences derived from them
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fences<A> {
    pub q1: A,
    pub q3: A,
    pub low_severe: A,
    pub low_mild: A,
    pub high_mild: A,
    pub high_severe: A,
}

impl<A> Fences<A>
where
    A: Float,
{
    /// Computes the fences from the first and third quartiles
    pub fn from_quartiles(q1: A, q3: A) -> Fences<A> {
        let iqr = q3 - q1;

        // Mild
        let k_m = A::cast(1.5_f32);
        // Severe
        let k_s = A::cast(3);

        Fences {
            q1,
            q3,
            low_severe: q1 - k_s * iqr,
            low_mild: q1 - k_m * iqr,
            high_mild: q3 + k_m * iqr,
            high_severe: q3 + k_s * iqr,
        }
    }

    /// Returns the interquartile range
    pub fn iqr(&self) -> A {
        self.q3 - self.q1
    }

    /// Labels a single data point
    pub fn label(&self, x: A) -> Label {
        if x < self.low_severe {
            LowSevere
        } else if x > self.high_severe {
            HighSevere
        } else if x < self.low_mild {
            LowMild
        } else if x > self.high_mild {
            HighMild
        } else {
            NotAnOutlier
        }
    }
}

/// Number of data points per label
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    pub low_severe: usize,
    pub low_mild: usize,
    pub not_an_outlier: usize,
    pub high_mild: usize,
    pub high_severe: usize,
}

impl LabelCounts {
    /// Total number of outliers, mild and severe, on both sides
    pub fn outliers(&self) -> usize {
        self.low_severe + self.low_mild + self.high_mild + self.high_severe
    }
}

/// A classified/labeled sample.
///
/// The order of the data points is retained.
#[derive(Clone, Copy)]
pub struct LabeledSample<'a, A>
where
    A: Float,
{
    fences: Fences<A>,
    sample: &'a Sample<A>,
}

impl<'a, A> LabeledSample<'a, A>
where
    A: Float,
{
    /// Returns the number of data points per label
    ///
    /// - Time: `O(length)`
    pub fn count(&self) -> LabelCounts {
        let mut counts = LabelCounts::default();

        for (_, label) in self {
            match label {
                LowSevere => counts.low_severe += 1,
                LowMild => counts.low_mild += 1,
                NotAnOutlier => counts.not_an_outlier += 1,
                HighMild => counts.high_mild += 1,
                HighSevere => counts.high_severe += 1,
            }
        }

        counts
    }

    /// Returns the fences used to classify the outliers
    pub fn fences(&self) -> Fences<A> {
        self.fences
    }

    /// Returns an iterator over the labeled data
    pub fn iter(&self) -> Iter<'a, A> {
        Iter {
            fences: self.fences,
            iter: self.sample.iter(),
        }
    }
}

impl<'a, A> Deref for LabeledSample<'a, A>
where
    A: Float,
{
    type Target = Sample<A>;

    fn deref(&self) -> &Sample<A> {
        self.sample
    }
}

impl<'a, A> IntoIterator for &LabeledSample<'a, A>
where
    A: Float,
{
    type Item = (A, Label);
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Iter<'a, A> {
        self.iter()
    }
}

/// Iterator over the labeled data
pub struct Iter<'a, A>
where
    A: Float,
{
    fences: Fences<A>,
    iter: slice::Iter<'a, A>,
}

impl<'a, A> Iterator for Iter<'a, A>
where
    A: Float,
{
    type Item = (A, Label);

    fn next(&mut self) -> Option<(A, Label)> {
        let fences = self.fences;

        self.iter.next().map(|&x| (x, fences.label(x)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Labels used to classify outliers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    /// A "mild" outlier in the "high" spectrum
    HighMild,
    /// A "severe" outlier in the "high" spectrum
    HighSevere,
    /// A "mild" outlier in the "low" spectrum
    LowMild,
    /// A "severe" outlier in the "low" spectrum
    LowSevere,
    /// A normal data point
    NotAnOutlier,
}

impl Label {
    /// Checks if the data point has an "unusually" high value
    pub fn is_high(&self) -> bool {
        matches!(*self, HighMild | HighSevere)
    }

    /// Checks if the data point is labeled as a "mild" outlier
    pub fn is_mild(&self) -> bool {
        matches!(*self, HighMild | LowMild)
    }

    /// Checks if the data point has an "unusually" low value
    pub fn is_low(&self) -> bool {
        matches!(*self, LowMild | LowSevere)
    }

    /// Checks if the data point is labeled as an outlier
    pub fn is_outlier(&self) -> bool {
        !matches!(*self, NotAnOutlier)
    }

    /// Checks if the data point is labeled as a "severe" outlier
    pub fn is_severe(&self) -> bool {
        matches!(*self, HighSevere | LowSevere)
    }
}

/// Classifies the sample, and returns a labeled sample.
///
/// - Time: `O(N log N) where N = length`
pub fn classify<A>(sample: &Sample<A>) -> LabeledSample<'_, A>
where
    A: Float,
    usize: cast::From<A, Output = Result<usize, cast::Error>>,
{
    let (q1, _, q3) = sample.percentiles().quartiles();

    LabeledSample {
        fences: Fences::from_quartiles(q1, q3),
        sample,
    }
}

#[cfg(test)]
mod test {
    use approx::relative_eq;

    use super::*;

    #[test]
    fn fences() {
        let v = [1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        let fences = classify(Sample::new(&v)).fences();

        assert!(relative_eq!(fences.iqr(), 4.5));
        assert!(relative_eq!(fences.low_mild, -3.5));
        assert!(relative_eq!(fences.high_mild, 14.5));
        assert!(relative_eq!(fences.low_severe, -10.25));
        assert!(relative_eq!(fences.high_severe, 21.25));
    }

    #[test]
    fn labels() {
        let v = [1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        let labeled = classify(Sample::new(&v));
        let labels: Vec<_> = labeled.iter().map(|(_, label)| label).collect();

        assert_eq!(labels[9], HighSevere);
        assert!(labels[..9].iter().all(|l| !l.is_outlier()));
        assert_eq!(
            labeled.count(),
            LabelCounts {
                not_an_outlier: 9,
                high_severe: 1,
                ..LabelCounts::default()
            }
        );
    }

    #[test]
    fn strict_boundaries() {
        let fences = Fences::from_quartiles(0.0_f64, 2.0);

        assert_eq!(fences.label(-3.0), NotAnOutlier);
        assert_eq!(fences.label(5.0), NotAnOutlier);
        assert_eq!(fences.label(5.5), HighMild);
        assert_eq!(fences.label(-6.5), LowSevere);
        assert!(fences.label(-3.5).is_mild());
    }
}
