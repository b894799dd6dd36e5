//! Declarative per-panel plot configuration.
//!
//! Every panel names the column it draws and carries its own caption and axis descriptions
//! ([`CoreDetails`]); the histogram and box-plot records add the fields specific to their kind.
//! The records are immutable once built and can be read from JSON:
//!
//! ```
//! use eda_utils::PlotDetails;
//!
//! let details: Vec<PlotDetails> = serde_json::from_str(r#"[
//!     {"kind": "histogram", "column": "age", "title": "Age", "xlabel": "Years",
//!      "ylabel": "Customers", "bins": 20, "color": "skyblue"},
//!     {"kind": "boxplot", "column": "income", "title": "Income", "xlabel": "",
//!      "ylabel": "USD", "color": "salmon"}
//! ]"#).unwrap();
//! assert_eq!(details[0].core().column(), "age");
//! ```

use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};

/// Fields shared by every kind of panel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreDetails {
    column: String,
    title: String,
    xlabel: String,
    ylabel: String,
}

impl CoreDetails {
    pub fn new<S: Into<String>>(column: S, title: S, xlabel: S, ylabel: S) -> CoreDetails {
        CoreDetails {
            column: column.into(),
            title: title.into(),
            xlabel: xlabel.into(),
            ylabel: ylabel.into(),
        }
    }

    /// The table column this panel draws
    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn xlabel(&self) -> &str {
        &self.xlabel
    }

    pub fn ylabel(&self) -> &str {
        &self.ylabel
    }
}

fn default_edgecolor() -> String {
    "black".to_owned()
}

fn positive_bins<'de, D>(deserializer: D) -> ::std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let bins = usize::deserialize(deserializer)?;
    if bins == 0 {
        return Err(serde::de::Error::custom("bins must be at least 1"));
    }
    Ok(bins)
}

/// Configuration of one histogram panel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramDetails {
    #[serde(flatten)]
    core: CoreDetails,
    #[serde(deserialize_with = "positive_bins")]
    bins: usize,
    color: String,
    #[serde(default = "default_edgecolor")]
    edgecolor: String,
}

impl HistogramDetails {
    /// Creates a histogram configuration with black bar edges
    ///
    /// Fails if `bins` is zero.
    pub fn new<S: Into<String>>(
        core: CoreDetails,
        bins: usize,
        color: S,
    ) -> Result<HistogramDetails> {
        if bins == 0 {
            return Err(Error::InvalidDetails(format!(
                "histogram of '{}' needs at least one bin",
                core.column
            )));
        }

        Ok(HistogramDetails {
            core,
            bins,
            color: color.into(),
            edgecolor: default_edgecolor(),
        })
    }

    /// Returns a copy with a different bar edge color
    #[must_use]
    pub fn with_edgecolor<S: Into<String>>(mut self, edgecolor: S) -> HistogramDetails {
        self.edgecolor = edgecolor.into();
        self
    }

    pub fn core(&self) -> &CoreDetails {
        &self.core
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn edgecolor(&self) -> &str {
        &self.edgecolor
    }
}

/// Configuration of one box-plot panel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxplotDetails {
    #[serde(flatten)]
    core: CoreDetails,
    color: String,
}

impl BoxplotDetails {
    pub fn new<S: Into<String>>(core: CoreDetails, color: S) -> BoxplotDetails {
        BoxplotDetails {
            core,
            color: color.into(),
        }
    }

    pub fn core(&self) -> &CoreDetails {
        &self.core
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

/// Either kind of panel, tagged by `"kind"` when serialized
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PlotDetails {
    Histogram(HistogramDetails),
    Boxplot(BoxplotDetails),
}

impl PlotDetails {
    pub fn core(&self) -> &CoreDetails {
        match self {
            PlotDetails::Histogram(details) => details.core(),
            PlotDetails::Boxplot(details) => details.core(),
        }
    }

    /// Parses a list of panel configurations from JSON
    pub fn list_from_json(json: &str) -> Result<Vec<PlotDetails>> {
        serde_json::from_str(json).map_err(|inner| Error::SerdeError {
            context: "plot details",
            inner,
        })
    }
}

impl From<HistogramDetails> for PlotDetails {
    fn from(other: HistogramDetails) -> PlotDetails {
        PlotDetails::Histogram(other)
    }
}

impl From<BoxplotDetails> for PlotDetails {
    fn from(other: BoxplotDetails) -> PlotDetails {
        PlotDetails::Boxplot(other)
    }
}
