//! Strategy pattern for sorting
//!
//! A strategy reorders a slice in place. [`FieldSort`] is stable: items with
//! equal keys keep their relative input order.

use super::{HasField, SortFieldMarker, SortKey, SortableEntity};
use std::marker::PhantomData;

/// A sorting strategy
pub trait SortStrategy<T>: Send + Sync {
    /// Apply this sorting strategy to the given items
    fn sort(&self, items: &mut [T]);

    /// Identifier of the field this strategy orders by
    fn field_id(&self) -> &'static str;
}

/// Single field ascending sort strategy
pub struct FieldSort<T, F>
where
    T: SortableEntity,
    F: SortFieldMarker,
    T::AvailableFields: HasField<F>,
{
    pub field: F,
    pub _phantom: PhantomData<T>,
}

impl<T, F> FieldSort<T, F>
where
    T: SortableEntity,
    F: SortFieldMarker,
    T::AvailableFields: HasField<F>,
{
    /// Create a new field sort strategy
    pub fn new(field: F) -> Self {
        Self {
            field,
            _phantom: PhantomData,
        }
    }
}

impl<T, F> std::fmt::Debug for FieldSort<T, F>
where
    T: SortableEntity,
    F: SortFieldMarker,
    T::AvailableFields: HasField<F>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSort").field("field", &F::ID).finish()
    }
}

impl<T, F> SortStrategy<T> for FieldSort<T, F>
where
    T: SortableEntity + Clone,
    F: SortFieldMarker,
    T::AvailableFields: HasField<F>,
{
    fn sort(&self, items: &mut [T]) {
        // Extract keys once
        let mut keys: Vec<_> = items
            .iter()
            .enumerate()
            .map(|(i, item)| (i, item.extract_key(self.field)))
            .collect();

        let missing = keys.iter().filter(|(_, key)| key.is_missing()).count();
        if missing > 0 {
            tracing::debug!(
                field = F::ID,
                missing,
                "sorting items without a usable key; they are placed last"
            );
        }

        // slice::sort_by is stable, ties keep their input order
        keys.sort_by(|a, b| a.1.cmp(&b.1));

        let indices: Vec<_> = keys.into_iter().map(|(i, _)| i).collect();
        super::utils::reorder_by_indices(items, &indices);

        debug_assert!(super::utils::is_sorted_by(items, |a, b| {
            a.extract_key(self.field).cmp(&b.extract_key(self.field))
        }));
    }

    fn field_id(&self) -> &'static str {
        F::ID
    }
}
