//! IQR outlier extraction
//!
//! Rows are outliers when their value lies strictly below `Q1 - 1.5 * IQR` or strictly above
//! `Q3 + 1.5 * IQR`, with the quartiles estimated by linear interpolation over the non-null
//! numeric cells of the column.

use crate::error::Result;
use crate::stats::univariate::outliers::tukey::{self, Fences, Label, LabelCounts};
use crate::stats::univariate::Sample;
use crate::table::Table;

/// Which side of the distribution to extract outliers from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlierSide {
    /// Values below the lower fence or above the upper fence
    Both,
    /// Only values below the lower fence ("min only")
    Low,
    /// Only values above the upper fence ("max only")
    High,
}

impl Default for OutlierSide {
    fn default() -> OutlierSide {
        OutlierSide::Both
    }
}

impl OutlierSide {
    fn selects(self, label: Label) -> bool {
        match self {
            OutlierSide::Both => label.is_outlier(),
            OutlierSide::Low => label.is_low(),
            OutlierSide::High => label.is_high(),
        }
    }
}

/// Computes the quartiles and fences of `column`
///
/// Returns `None` when the column exists but holds no numeric values, in which case no row can
/// be an outlier.
pub fn iqr_fences(table: &Table, column: &str) -> Result<Option<Fences<f64>>> {
    let numeric = table.numeric_column(column)?;
    let values: Vec<f64> = numeric.iter().map(|&(_, x)| x).collect();

    Ok(Sample::try_new(&values).map(|sample| tukey::classify(sample).fences()))
}

/// Returns the rows of `table` whose `column` value is an outlier on the selected side
///
/// The result keeps the schema and the row order of `table`. Fails with
/// [`Error::InvalidColumn`](crate::Error::InvalidColumn), listing the available columns, when
/// `column` does not exist.
///
/// ```
/// use eda_utils::{get_outliers, OutlierSide, Table, Value};
///
/// let ages = (1..=9).chain(Some(100)).map(Value::from).collect();
/// let table = Table::from_columns(vec![("age", ages)]).unwrap();
///
/// let outliers = get_outliers(&table, "age", OutlierSide::Both).unwrap();
/// assert_eq!(outliers.rows(), &[vec![Value::from(100)]]);
/// ```
pub fn get_outliers(table: &Table, column: &str, side: OutlierSide) -> Result<Table> {
    let numeric = table.numeric_column(column)?;
    let (rows, values): (Vec<usize>, Vec<f64>) = numeric.into_iter().unzip();

    let sample = match Sample::try_new(&values) {
        Some(sample) => sample,
        None => {
            warn!("column '{}' has no numeric values; no outliers", column);
            return Ok(table.select_rows(&[]));
        }
    };

    let labeled = tukey::classify(sample);
    let fences = labeled.fences();
    debug!(
        "'{}': Q1 = {}, Q3 = {}, IQR = {}, fences = [{}, {}]",
        column,
        fences.q1,
        fences.q3,
        fences.iqr(),
        fences.low_mild,
        fences.high_mild
    );

    let selected: Vec<usize> = rows
        .iter()
        .zip(labeled.iter())
        .filter(|&(_, (_, label))| side.selects(label))
        .map(|(&row, _)| row)
        .collect();

    info!(
        "'{}': {} of {} rows are {:?} outliers",
        column,
        selected.len(),
        table.len(),
        side
    );

    Ok(table.select_rows(&selected))
}

/// Counts the rows of `column` per Tukey label, mild and severe
pub fn summarize(table: &Table, column: &str) -> Result<LabelCounts> {
    let numeric = table.numeric_column(column)?;
    let values: Vec<f64> = numeric.iter().map(|&(_, x)| x).collect();

    Ok(Sample::try_new(&values)
        .map(|sample| tukey::classify(sample).count())
        .unwrap_or_default())
}

#[cfg(test)]
mod test {
    use approx::relative_eq;
    use quickcheck::quickcheck;
    use quickcheck::TestResult;

    use super::*;
    use crate::error::Error;
    use crate::table::Value;

    fn ages(values: &[i64]) -> Table {
        Table::from_columns(vec![
            ("id", (0..values.len() as i64).map(Value::from).collect()),
            ("age", values.iter().map(|&v| Value::from(v)).collect()),
        ])
        .unwrap()
    }

    fn column(table: &Table, name: &str) -> Vec<f64> {
        table
            .column(name)
            .unwrap()
            .filter_map(Value::as_f64)
            .collect()
    }

    #[test]
    fn extracts_high_outlier() {
        let table = ages(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 100]);

        let outliers = get_outliers(&table, "age", OutlierSide::Both).unwrap();
        assert_eq!(outliers.rows(), &[vec![Value::from(9), Value::from(100)]]);

        let fences = iqr_fences(&table, "age").unwrap().unwrap();
        assert!(relative_eq!(fences.q1, 3.25));
        assert!(relative_eq!(fences.q3, 7.75));
        assert!(relative_eq!(fences.iqr(), 4.5));
        assert!(relative_eq!(fences.low_mild, -3.5));
        assert!(relative_eq!(fences.high_mild, 14.5));

        assert!(get_outliers(&table, "age", OutlierSide::Low).unwrap().is_empty());
        assert_eq!(get_outliers(&table, "age", OutlierSide::High).unwrap().len(), 1);
    }

    #[test]
    fn no_outliers() {
        let table = ages(&[10, 11, 12, 13, 14, 15]);

        assert!(get_outliers(&table, "age", OutlierSide::Both).unwrap().is_empty());
    }

    #[test]
    fn both_sides() {
        let table = ages(&[-50, 10, 11, 12, 13, 14, 15, 16, 80]);
        let outliers = get_outliers(&table, "age", OutlierSide::Both).unwrap();

        assert_eq!(column(&outliers, "age"), vec![-50.0, 80.0]);
        assert_eq!(
            column(&get_outliers(&table, "age", OutlierSide::Low).unwrap(), "age"),
            vec![-50.0]
        );
    }

    #[test]
    fn invalid_column_names_options() {
        let table = ages(&[1, 2, 3]);

        match get_outliers(&table, "height", OutlierSide::Both) {
            Err(err @ Error::InvalidColumn { .. }) => {
                let message = err.to_string();
                assert!(message.contains("'id'"));
                assert!(message.contains("'age'"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn nulls_are_never_outliers() {
        let table = Table::from_columns(vec![(
            "score",
            vec![
                Value::from(1.0),
                Value::Null,
                Value::from(2.0),
                Value::from(f64::NAN),
                Value::from(3.0),
                Value::from(250.0),
            ],
        )])
        .unwrap();

        let outliers = get_outliers(&table, "score", OutlierSide::Both).unwrap();
        assert_eq!(outliers.rows(), &[vec![Value::from(250.0)]]);
    }

    #[test]
    fn all_null_column() {
        let table = Table::from_columns(vec![("score", vec![Value::Null, Value::Null])]).unwrap();

        let outliers = get_outliers(&table, "score", OutlierSide::Both).unwrap();
        assert!(outliers.is_empty());
        assert_eq!(outliers.column_names(), table.column_names());
        assert!(iqr_fences(&table, "score").unwrap().is_none());
        assert_eq!(summarize(&table, "score").unwrap(), LabelCounts::default());
    }

    #[test]
    fn summary_counts_severity() {
        let table = ages(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 100]);
        let counts = summarize(&table, "age").unwrap();

        assert_eq!(counts.high_severe, 1);
        assert_eq!(counts.not_an_outlier, 9);
        assert_eq!(counts.outliers(), 1);
    }

    fn check(values: Vec<i16>, side: OutlierSide) -> TestResult {
        if values.is_empty() {
            return TestResult::discard();
        }

        let values: Vec<i64> = values.into_iter().map(i64::from).collect();
        let table = ages(&values);
        let fences = iqr_fences(&table, "age").unwrap().unwrap();
        let all = column(&get_outliers(&table, "age", OutlierSide::Both).unwrap(), "id");
        let some = get_outliers(&table, "age", side).unwrap();

        let beyond = column(&some, "age").into_iter().all(|x| match side {
            OutlierSide::Both => x < fences.low_mild || x > fences.high_mild,
            OutlierSide::Low => x < fences.low_mild,
            OutlierSide::High => x > fences.high_mild,
        });
        let subset = column(&some, "id").iter().all(|id| all.contains(id));

        TestResult::from_bool(beyond && subset)
    }

    quickcheck! {
        fn two_sided_beyond_fences(values: Vec<i16>) -> TestResult {
            check(values, OutlierSide::Both)
        }

        fn low_is_subset(values: Vec<i16>) -> TestResult {
            check(values, OutlierSide::Low)
        }

        fn high_is_subset(values: Vec<i16>) -> TestResult {
            check(values, OutlierSide::High)
        }
    }
}
