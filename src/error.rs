use itertools::Itertools;
use plotters::drawing::DrawingAreaErrorKind;
use serde_json::Error as SerdeError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// A column was requested that the table does not have.
    InvalidColumn {
        column: String,
        available: Vec<String>,
    },
    NonNumericColumn {
        column: String,
    },
    /// A plot configuration or table failed structural validation.
    InvalidDetails(String),
    SerdeError {
        context: &'static str,
        inner: SerdeError,
    },
    AccessError {
        path: PathBuf,
        inner: io::Error,
    },
    PlotError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidColumn { column, available } => write!(
                f,
                "Invalid column name '{}'. Options: [{}]",
                column,
                available.iter().map(|c| format!("'{}'", c)).join(", ")
            ),
            Error::NonNumericColumn { column } => {
                write!(f, "Column '{}' contains non-numeric values", column)
            }
            Error::InvalidDetails(msg) => write!(f, "Invalid plot details: {}", msg),
            Error::SerdeError { context, inner } => {
                write!(f, "Failed to parse {}: {}", context, inner)
            }
            Error::AccessError { path, inner } => {
                write!(f, "Failed to access file {:?}: {}", path, inner)
            }
            Error::PlotError(msg) => write!(f, "Failed to draw figure: {}", msg),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::SerdeError { inner, .. } => Some(inner),
            Error::AccessError { inner, .. } => Some(inner),
            _ => None,
        }
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for Error
where
    E: StdError + Send + Sync,
{
    fn from(other: DrawingAreaErrorKind<E>) -> Self {
        Error::PlotError(other.to_string())
    }
}

pub type Result<T> = ::std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn invalid_column_lists_options() {
        let error = Error::InvalidColumn {
            column: "agee".to_owned(),
            available: vec!["age".to_owned(), "income".to_owned()],
        };

        assert_eq!(
            error.to_string(),
            "Invalid column name 'agee'. Options: ['age', 'income']"
        );
    }
}
