pub mod filtering;
pub mod sorting;

pub use filtering::{filter_by_title, matches_title, normalize_term};
pub use sorting::{FieldSort, SortStrategy, strategy_for};
