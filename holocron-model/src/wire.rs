//! Payload shape of the film list endpoint.

use crate::film::MovieRecord;

/// Body returned by the film list endpoint.
///
/// Only `results` is consumed; paging and count fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilmsPage {
    pub results: Vec<MovieRecord>,
}

impl FilmsPage {
    pub fn into_records(self) -> Vec<MovieRecord> {
        self.results
    }
}
