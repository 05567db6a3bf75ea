//! Convenience re-exports for crates that only render or sort films.

pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::film::{EpisodeId, MovieRecord};
pub use crate::sort::SortBy;
