//! Pending versus applied search/sort criteria.
//!
//! Typing into the search box or changing the sort selector only stages a
//! value. The list changes when the matching action runs, which records the
//! staged value as applied.

use holocron_model::SortBy;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pending_search: String,
    pending_sort: SortBy,
    applied_search: Option<String>,
    applied_sort: Option<SortBy>,
}

impl Criteria {
    pub fn stage_search(&mut self, term: impl Into<String>) {
        self.pending_search = term.into();
    }

    pub fn stage_sort(&mut self, key: SortBy) {
        self.pending_sort = key;
    }

    pub fn pending_search(&self) -> &str {
        &self.pending_search
    }

    pub fn pending_sort(&self) -> SortBy {
        self.pending_sort
    }

    /// Term of the last filter run, if any since load.
    pub fn applied_search(&self) -> Option<&str> {
        self.applied_search.as_deref()
    }

    /// Key of the last sort run, if it still shapes the visible list.
    pub fn applied_sort(&self) -> Option<SortBy> {
        self.applied_sort
    }

    /// A filter rebuilds the list in catalog order, so any earlier sort
    /// no longer applies.
    pub(crate) fn mark_filtered(&mut self, term: &str) {
        self.applied_search = Some(term.to_string());
        self.applied_sort = None;
    }

    pub(crate) fn mark_sorted(&mut self, key: SortBy) {
        self.applied_sort = Some(key);
    }

    pub(crate) fn reset_applied(&mut self) {
        self.applied_search = None;
        self.applied_sort = None;
    }
}
