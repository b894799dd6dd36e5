use crate::stats::float::Float;
use cast::usize;

/// A "view" into the percentiles of a sample
///
/// Percentiles are estimated by linear interpolation between the two closest ranks, the same
/// estimator spreadsheet tools and dataframe libraries use by default.
pub struct Percentiles<A>(Box<[A]>)
where
    A: Float;

impl<A> Percentiles<A>
where
    A: Float,
    usize: cast::From<A, Output = Result<usize, cast::Error>>,
{
    /// Wraps data that is already sorted in ascending order
    pub(crate) fn from_sorted(sorted: Box<[A]>) -> Percentiles<A> {
        debug_assert!(!sorted.is_empty());
        debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

        Percentiles(sorted)
    }

    /// Returns the percentile at `p`%
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the closed `[0, 100]` range
    pub fn at(&self, p: A) -> A {
        let _0 = A::cast(0);
        let _100 = A::cast(100);

        assert!(p >= _0 && p <= _100);

        let len = self.0.len() - 1;
        if p == _100 {
            return self.0[len];
        }

        let rank = (p / _100) * A::cast(len);
        let integer = rank.floor();
        let fraction = rank - integer;
        // NB `rank` lies in `[0, len)`, so the conversion cannot fail
        let n = usize(integer).unwrap_or(0);
        let floor = self.0[n];

        if fraction == _0 {
            floor
        } else {
            let ceiling = self.0[n + 1];

            floor + (ceiling - floor) * fraction
        }
    }

    /// Returns the interquartile range
    pub fn iqr(&self) -> A {
        let q1 = self.at(A::cast(25));
        let q3 = self.at(A::cast(75));

        q3 - q1
    }

    /// Returns the 50th percentile
    pub fn median(&self) -> A {
        self.at(A::cast(50))
    }

    /// Returns the 25th, 50th and 75th percentiles
    pub fn quartiles(&self) -> (A, A, A) {
        (
            self.at(A::cast(25)),
            self.at(A::cast(50)),
            self.at(A::cast(75)),
        )
    }

    /// Returns the sorted data backing this view
    pub fn sorted(&self) -> &[A] {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use approx::relative_eq;
    use quickcheck::quickcheck;
    use quickcheck::TestResult;

    use crate::stats::univariate::Sample;

    #[test]
    fn interpolated_quartiles() {
        let v = [1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        let (q1, q2, q3) = Sample::new(&v).percentiles().quartiles();

        assert!(relative_eq!(q1, 3.25));
        assert!(relative_eq!(q2, 5.5));
        assert!(relative_eq!(q3, 7.75));
    }

    #[test]
    fn unsorted_input() {
        let v = [9.0_f64, 1.0, 5.0, 3.0, 7.0];
        let percentiles = Sample::new(&v).percentiles();

        assert_eq!(percentiles.median(), 5.0);
        assert_eq!(percentiles.iqr(), 4.0);
        assert_eq!(percentiles.at(0.0), 1.0);
        assert_eq!(percentiles.at(100.0), 9.0);
    }

    #[test]
    fn single_point() {
        let percentiles = Sample::new(&[42.0_f64]).percentiles();

        assert_eq!(percentiles.quartiles(), (42.0, 42.0, 42.0));
        assert_eq!(percentiles.iqr(), 0.0);
    }

    #[test]
    #[should_panic]
    fn out_of_range() {
        Sample::new(&[1.0_f64, 2.0]).percentiles().at(101.0);
    }

    quickcheck! {
        fn monotonic(v: Vec<i16>, a: u8, b: u8) -> TestResult {
            let v: Vec<f64> = v.into_iter().map(f64::from).collect();
            let (a, b) = (a % 101, b % 101);
            let (a, b) = (f64::from(a.min(b)), f64::from(a.max(b)));

            match Sample::try_new(&v) {
                Some(sample) => {
                    let percentiles = sample.percentiles();
                    TestResult::from_bool(percentiles.at(a) <= percentiles.at(b))
                }
                _ => TestResult::discard(),
            }
        }
    }

    quickcheck! {
        fn bounded_by_extremes(v: Vec<i16>, p: u8) -> TestResult {
            let v: Vec<f64> = v.into_iter().map(f64::from).collect();
            let p = f64::from(p % 101);

            match Sample::try_new(&v) {
                Some(sample) => {
                    let x = sample.percentiles().at(p);
                    TestResult::from_bool(sample.min() <= x && x <= sample.max())
                }
                None => TestResult::discard(),
            }
        }
    }
}
