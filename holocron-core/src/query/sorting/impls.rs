//! SortableEntity implementations for film records

use std::sync::Arc;

use holocron_model::{MovieRecord, SortBy};

use super::fields::{EpisodeField, ReleaseYearField};
use super::fieldsets::FilmFields;
use super::keys::OptionalI32Key;
use super::strategy::{FieldSort, SortStrategy};
use super::traits::{HasField, SortFieldMarker, SortableEntity};

impl SortableEntity for MovieRecord {
    type AvailableFields = FilmFields;

    fn extract_key<F: SortFieldMarker>(&self, _field: F) -> F::Key
    where
        Self::AvailableFields: HasField<F>,
    {
        use std::any::Any;

        // Runtime dispatch on the field's const ID; the HasField bound
        // already restricts F to the fields declared by FilmFields.
        let key: Box<dyn Any> = if F::ID == EpisodeField::ID {
            Box::new(OptionalI32Key::new(Some(self.episode_id.value())))
        } else if F::ID == ReleaseYearField::ID {
            Box::new(OptionalI32Key::new(self.release_year()))
        } else {
            unreachable!("FilmFields only declares episode and year")
        };

        match key.downcast::<F::Key>() {
            Ok(key) => *key,
            Err(_) => unreachable!("film sort fields use OptionalI32Key"),
        }
    }
}

impl<T: SortableEntity> SortableEntity for Arc<T> {
    type AvailableFields = T::AvailableFields;

    fn extract_key<F: SortFieldMarker>(&self, field: F) -> F::Key
    where
        Self::AvailableFields: HasField<F>,
    {
        (**self).extract_key(field)
    }
}

/// Map the user-facing criterion to a strategy over shared records
pub fn strategy_for(sort_by: SortBy) -> Box<dyn SortStrategy<Arc<MovieRecord>>> {
    match sort_by {
        SortBy::Episode => Box::new(FieldSort::<Arc<MovieRecord>, _>::new(EpisodeField)),
        SortBy::Year => Box::new(FieldSort::<Arc<MovieRecord>, _>::new(ReleaseYearField)),
    }
}
