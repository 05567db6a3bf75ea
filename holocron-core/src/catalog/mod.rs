//! Movie catalog controller.
//!
//! Holds every record fetched at startup, derives the visible list from the
//! applied filter and sort, and tracks the selected record.
//!
//! - Filtering always rebuilds the visible list from the full catalog, in
//!   catalog order.
//! - Sorting reorders whatever is currently visible. A later filter discards
//!   that order.
//! - Selection survives filtering and sorting; there is no deselect.

mod criteria;

use std::sync::Arc;

use holocron_model::{EpisodeId, MovieRecord, SortBy};

use crate::error::{CatalogError, Result};
use crate::query::{filter_by_title, strategy_for};
use crate::source::{self, FilmSource};

pub use criteria::Criteria;

#[derive(Debug, Default)]
pub struct Catalog {
    all: Vec<Arc<MovieRecord>>,
    visible: Vec<Arc<MovieRecord>>,
    selected: Option<Arc<MovieRecord>>,
    criteria: Criteria,
    load_attempted: bool,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the film list from `source` and ingest it.
    ///
    /// Only the first call per catalog reaches the source.
    pub async fn load<S>(&mut self, source: &S) -> Result<usize>
    where
        S: FilmSource + ?Sized,
    {
        if self.load_attempted {
            tracing::warn!("catalog load requested twice; ignoring");
            return Err(CatalogError::AlreadyLoaded);
        }
        let fetched = source.fetch_films().await;
        self.ingest(fetched)
    }

    /// Apply the outcome of a fetch performed elsewhere.
    ///
    /// On success both the full and the visible list become the fetched
    /// records in received order. On failure the catalog stays empty and the
    /// error is logged and returned; no retry happens.
    pub fn ingest(
        &mut self,
        fetched: source::Result<Vec<MovieRecord>>,
    ) -> Result<usize> {
        if self.load_attempted {
            tracing::warn!("film list delivered after catalog load; ignoring");
            return Err(CatalogError::AlreadyLoaded);
        }
        self.load_attempted = true;

        match fetched {
            Ok(films) => {
                self.all = films.into_iter().map(Arc::new).collect();
                self.visible = self.all.clone();
                self.criteria.reset_applied();
                tracing::info!(count = self.all.len(), "film catalog loaded");
                Ok(self.all.len())
            }
            Err(err) => {
                tracing::error!(error = %err, "Error fetching films; catalog stays empty");
                Err(CatalogError::Load(err))
            }
        }
    }

    /// Rebuild the visible list from every record whose title contains
    /// `term`, ignoring case.
    pub fn apply_filter(&mut self, term: &str) {
        self.visible = filter_by_title(&self.all, term);
        self.criteria.mark_filtered(term);
        tracing::debug!(term, visible = self.visible.len(), "filter applied");
    }

    /// Reorder the visible list, stable and ascending by `key`.
    pub fn apply_sort(&mut self, key: SortBy) {
        strategy_for(key).sort(&mut self.visible);
        self.criteria.mark_sorted(key);
        tracing::debug!(key = key.as_str(), "sort applied");
    }

    /// Stage the search box contents without touching the list.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.stage_search(term);
    }

    /// Stage the sort selector value without touching the list.
    pub fn set_sort_key(&mut self, key: SortBy) {
        self.criteria.stage_sort(key);
    }

    /// Filter by the staged search term.
    pub fn search(&mut self) {
        let term = self.criteria.pending_search().to_string();
        self.apply_filter(&term);
    }

    /// Sort by the staged sort key.
    pub fn sort(&mut self) {
        self.apply_sort(self.criteria.pending_sort());
    }

    /// Select a record of the catalog, visible or not.
    pub fn select(&mut self, movie: &MovieRecord) -> Result<()> {
        let found = self
            .all
            .iter()
            .find(|candidate| candidate.as_ref() == movie)
            .cloned()
            .ok_or(CatalogError::NotInCatalog(movie.episode_id))?;

        tracing::debug!(episode = %found.episode_id, title = %found.title, "movie selected");
        self.selected = Some(found);
        Ok(())
    }

    /// Select the record shown at `row` of the visible list.
    pub fn select_visible(&mut self, row: usize) -> Result<()> {
        let movie = self
            .visible
            .get(row)
            .cloned()
            .ok_or(CatalogError::NoSuchRow(row))?;
        self.select(&movie)
    }

    pub fn find_by_episode(&self, episode: EpisodeId) -> Option<&Arc<MovieRecord>> {
        self.all.iter().find(|movie| movie.episode_id == episode)
    }

    pub fn all_movies(&self) -> &[Arc<MovieRecord>] {
        &self.all
    }

    pub fn visible_movies(&self) -> &[Arc<MovieRecord>] {
        &self.visible
    }

    pub fn selected(&self) -> Option<&Arc<MovieRecord>> {
        self.selected.as_ref()
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Loaded means at least one record arrived.
    pub fn is_loaded(&self) -> bool {
        !self.all.is_empty()
    }

    pub fn load_attempted(&self) -> bool {
        self.load_attempted
    }
}
