//! Field sets declaring which fields each entity supports

use super::fields::{EpisodeField, ReleaseYearField};
use super::traits::{HasField, SortFieldSet};

/// Fields available on a film record
#[derive(Debug, Clone, Copy)]
pub struct FilmFields;

impl SortFieldSet for FilmFields {}

impl HasField<EpisodeField> for FilmFields {}
impl HasField<ReleaseYearField> for FilmFields {}
