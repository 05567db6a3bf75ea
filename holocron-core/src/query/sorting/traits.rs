//! Core traits for sortable entities
//!
//! Field availability is checked at compile time: an entity can only be
//! sorted by fields its field set declares through [`HasField`].

/// Base trait for any sortable item
pub trait SortableEntity: Send + Sync {
    /// The set of fields this entity type supports for sorting
    type AvailableFields: SortFieldSet;

    /// Extract a sort key for the given field
    fn extract_key<F: SortFieldMarker>(&self, field: F) -> F::Key
    where
        Self::AvailableFields: HasField<F>;
}

/// Marker trait for sets of sort fields
pub trait SortFieldSet: Send + Sync + 'static {}

/// Compile-time proof that a field set contains a specific field
pub trait HasField<F: SortFieldMarker>: SortFieldSet {}

/// Individual sort field with associated key type
pub trait SortFieldMarker: Copy + Clone + Send + Sync + 'static {
    /// The type of key extracted for this field
    type Key: SortKey;

    /// Unique identifier for this field, used in diagnostics
    const ID: &'static str;
}

/// Keys that can be compared for sorting
///
/// Missing values (for example an unparseable release year) compare
/// greater than every present value.
pub trait SortKey: Ord + Clone + Send + Sync + 'static {
    /// Check if this key represents missing data
    fn is_missing(&self) -> bool;
}
