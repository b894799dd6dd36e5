//! In-memory labeled table
//!
//! A `Table` is a row-major grid of [`Value`]s with a named column per field. Cells are
//! dynamically typed, so a column may mix integers, floats, booleans, text and nulls the way a
//! loosely-typed dataframe column does.

use std::collections::HashSet;
use std::fmt;

use crate::error::{Error, Result};

/// A single cell of a table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Returns the numeric value of the cell, if it has one
    ///
    /// Booleans count as `0`/`1`. Nulls and text have no numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Bool(b) => Some(if b { 1. } else { 0. }),
            Value::Int(i) => Some(i as f64),
            Value::Float(f) => Some(f),
            Value::Null | Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),*) => {
        $(
            impl From<$ty> for Value {
                fn from(other: $ty) -> Value {
                    Value::$variant(other.into())
                }
            }
        )*
    }
}

value_from!(bool => Bool, i32 => Int, i64 => Int, u32 => Int, f32 => Float, f64 => Float,
            String => Text, &str => Text);

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(other: Option<T>) -> Value {
        other.map_or(Value::Null, Into::into)
    }
}

/// A two-dimensional labeled dataset
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

#[derive(Deserialize)]
struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Creates a table from column names and rows
    ///
    /// Fails if a column name repeats or a row does not have one value per column.
    pub fn new<S: Into<String>>(columns: Vec<S>, rows: Vec<Vec<Value>>) -> Result<Table> {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();

        let mut seen = HashSet::new();
        if let Some(dup) = columns.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(Error::InvalidDetails(format!("duplicate column '{}'", dup)));
        }

        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(Error::InvalidDetails(format!(
                "row {} has {} values but the table has {} columns",
                i,
                row.len(),
                columns.len()
            )));
        }

        Ok(Table { columns, rows })
    }

    /// Creates a table from named columns of equal length
    ///
    /// ```
    /// use eda_utils::{Table, Value};
    ///
    /// let table = Table::from_columns(vec![
    ///     ("age", vec![Value::from(31), Value::from(58)]),
    ///     ("city", vec![Value::from("Lyon"), Value::Null]),
    /// ]).unwrap();
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn from_columns<I, S>(columns: I) -> Result<Table>
    where
        I: IntoIterator<Item = (S, Vec<Value>)>,
        S: Into<String>,
    {
        let (names, data): (Vec<String>, Vec<Vec<Value>>) = columns
            .into_iter()
            .map(|(name, values)| (name.into(), values))
            .unzip();

        let nrows = data.first().map_or(0, Vec::len);
        if let Some((name, values)) = names
            .iter()
            .zip(&data)
            .find(|(_, values)| values.len() != nrows)
        {
            return Err(Error::InvalidDetails(format!(
                "column '{}' has {} values, expected {}",
                name,
                values.len(),
                nrows
            )));
        }

        let mut columns: Vec<_> = data.into_iter().map(Vec::into_iter).collect();
        let rows = (0..nrows)
            .map(|_| columns.iter_mut().filter_map(|c| c.next()).collect())
            .collect();

        Table::new(names, rows)
    }

    /// Parses a table from JSON of the form `{"columns": [..], "rows": [[..], ..]}`
    pub fn from_json(json: &str) -> Result<Table> {
        let raw: RawTable = serde_json::from_str(json).map_err(|inner| Error::SerdeError {
            context: "table",
            inner,
        })?;

        Table::new(raw.columns, raw.rows)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|inner| Error::SerdeError {
            context: "table",
            inner,
        })
    }

    /// Returns the column names in order
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Returns the position of `name`, or an `InvalidColumn` error listing the columns
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| Error::InvalidColumn {
                column: name.to_owned(),
                available: self.columns.clone(),
            })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Iterates over the cells of one column
    pub fn column(&self, name: &str) -> Result<impl Iterator<Item = &Value> + '_> {
        let index = self.column_index(name)?;

        Ok(self.rows.iter().map(move |row| &row[index]))
    }

    /// Returns the `(row index, value)` pairs of the numeric cells of a column
    ///
    /// Nulls and `NaN`s are skipped. Fails if the column is missing or holds text.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<(usize, f64)>> {
        let mut numeric = Vec::with_capacity(self.len());

        for (i, value) in self.column(name)?.enumerate() {
            match value {
                Value::Text(_) => {
                    return Err(Error::NonNumericColumn {
                        column: name.to_owned(),
                    })
                }
                other => {
                    if let Some(x) = other.as_f64().filter(|x| !x.is_nan()) {
                        numeric.push((i, x));
                    }
                }
            }
        }

        Ok(numeric)
    }

    /// Returns a new table with the same columns holding the given rows, in the given order
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds
    pub fn select_rows(&self, indices: &[usize]) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn people() -> Table {
        Table::from_columns(vec![
            ("name", vec!["ann".into(), "bob".into(), "cy".into()]),
            ("age", vec![31.into(), Value::Null, 2.5.into()]),
        ])
        .unwrap()
    }

    #[test]
    fn from_columns_transposes() {
        let table = people();

        assert_eq!(table.column_names(), &["name".to_owned(), "age".to_owned()]);
        assert_eq!(table.rows()[1], vec![Value::from("bob"), Value::Null]);
    }

    #[test]
    fn ragged_columns() {
        let result = Table::from_columns(vec![
            ("a", vec![Value::from(1)]),
            ("b", vec![Value::from(1), Value::from(2)]),
        ]);

        assert!(matches!(result, Err(Error::InvalidDetails(_))));
    }

    #[test]
    fn duplicate_columns() {
        let result = Table::new(vec!["a", "a"], vec![]);

        assert!(matches!(result, Err(Error::InvalidDetails(_))));
    }

    #[test]
    fn numeric_column_skips_nulls() {
        let numeric = people().numeric_column("age").unwrap();

        assert_eq!(numeric, vec![(0, 31.0), (2, 2.5)]);
    }

    #[test]
    fn text_is_not_numeric() {
        match people().numeric_column("name") {
            Err(Error::NonNumericColumn { column }) => assert_eq!(column, "name"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn missing_column() {
        match people().column_index("height") {
            Err(Error::InvalidColumn { column, available }) => {
                assert_eq!(column, "height");
                assert_eq!(available, vec!["name".to_owned(), "age".to_owned()]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn select_keeps_schema() {
        let table = people();
        let subset = table.select_rows(&[2, 0]);

        assert_eq!(subset.column_names(), table.column_names());
        assert_eq!(subset.rows()[0][0], Value::from("cy"));
        assert_eq!(subset.len(), 2);
    }

    #[test]
    fn json() {
        let table = Table::from_json(
            r#"{"columns": ["id", "score", "ok"], "rows": [[1, 0.5, true], [2, null, false]]}"#,
        )
        .unwrap();

        assert_eq!(table.rows()[0][0], Value::Int(1));
        assert_eq!(table.rows()[0][1], Value::Float(0.5));
        assert_eq!(table.rows()[1][1], Value::Null);
        assert_eq!(Table::from_json(&table.to_json().unwrap()).unwrap(), table);
    }

    #[test]
    fn json_ragged_rows() {
        let result = Table::from_json(r#"{"columns": ["a"], "rows": [[1, 2]]}"#);

        assert!(matches!(result, Err(Error::InvalidDetails(_))));
    }
}
