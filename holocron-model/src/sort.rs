use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// User-facing sort criterion for the film list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortBy {
    /// Ascending by episode id
    #[default]
    Episode,
    /// Ascending by release year
    Year,
}

impl SortBy {
    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Episode => "EPISODE",
            SortBy::Year => "YEAR",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Episode => "episode",
            SortBy::Year => "year",
        }
    }

    /// The other criterion; used by two-state selectors.
    pub fn toggled(self) -> SortBy {
        match self {
            SortBy::Episode => SortBy::Year,
            SortBy::Year => SortBy::Episode,
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SortBy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "episode" => Ok(SortBy::Episode),
            "year" => Ok(SortBy::Year),
            _ => Err(ModelError::InvalidSortKey(s.to_string())),
        }
    }
}
