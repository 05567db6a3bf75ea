//! Core data model definitions shared across Holocron crates.
#![allow(missing_docs)]

pub mod error;
pub mod film;
pub mod sort;
pub mod wire;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use film::{EpisodeId, MovieRecord};
pub use sort::SortBy;
pub use wire::FilmsPage;
