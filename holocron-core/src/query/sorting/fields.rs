//! Field marker types for compile-time safe sorting

use super::keys::OptionalI32Key;
use super::traits::SortFieldMarker;

/// Sort by episode id
#[derive(Copy, Clone, Debug)]
pub struct EpisodeField;

impl SortFieldMarker for EpisodeField {
    type Key = OptionalI32Key;
    const ID: &'static str = "episode";
}

/// Sort by the year parsed from the release date
#[derive(Copy, Clone, Debug)]
pub struct ReleaseYearField;

impl SortFieldMarker for ReleaseYearField {
    type Key = OptionalI32Key;
    const ID: &'static str = "year";
}
