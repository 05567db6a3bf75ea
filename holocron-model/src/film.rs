use crate::error::{ModelError, Result};

/// Episode number as published by the film data source.
///
/// Doubles as the stable identity key when rendering lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EpisodeId(i32);

impl EpisodeId {
    pub fn new(num: i32) -> Self {
        EpisodeId(num)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for EpisodeId {
    fn from(num: i32) -> Self {
        EpisodeId(num)
    }
}

/// One film entry of the catalog.
///
/// `release_date` stays a string: only its leading four characters (the
/// year) carry meaning for sorting and display.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMovieRecord"))]
pub struct MovieRecord {
    pub title: String,
    pub episode_id: EpisodeId,
    pub release_date: String,
    pub opening_crawl: String,
}

/// Wire form of [`MovieRecord`]; decoding goes through [`MovieRecord::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMovieRecord {
    title: String,
    episode_id: EpisodeId,
    release_date: String,
    opening_crawl: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMovieRecord> for MovieRecord {
    type Error = ModelError;

    fn try_from(raw: RawMovieRecord) -> Result<Self> {
        MovieRecord::new(raw.title, raw.episode_id, raw.release_date, raw.opening_crawl)
    }
}

impl MovieRecord {
    /// Build a record, rejecting an empty title.
    pub fn new(
        title: impl Into<String>,
        episode_id: impl Into<EpisodeId>,
        release_date: impl Into<String>,
        opening_crawl: impl Into<String>,
    ) -> Result<Self> {
        let title = title.into();
        if title.is_empty() {
            return Err(ModelError::InvalidMovie(
                "Movie title cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            title,
            episode_id: episode_id.into(),
            release_date: release_date.into(),
            opening_crawl: opening_crawl.into(),
        })
    }

    /// Leading four characters of the release date, verbatim.
    ///
    /// Shorter dates are returned whole.
    pub fn year_label(&self) -> &str {
        match self.release_date.char_indices().nth(4) {
            Some((end, _)) => &self.release_date[..end],
            None => &self.release_date,
        }
    }

    /// Release year parsed from the leading four characters.
    ///
    /// `None` when those characters are not an integer or the date is
    /// shorter than four characters.
    pub fn release_year(&self) -> Option<i32> {
        let label = self.year_label();
        if label.chars().count() < 4 {
            return None;
        }
        label.parse::<i32>().ok()
    }
}
