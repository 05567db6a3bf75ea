//! Sort key types for comparing films
//!
//! These types wrap the values extracted from records and handle missing
//! data in their `Ord` implementations.

use super::traits::SortKey;
use std::cmp::Ordering;

/// Signed integer key for episode ids and release years
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionalI32Key(Option<i32>);

impl OptionalI32Key {
    pub fn new(value: Option<i32>) -> Self {
        OptionalI32Key(value)
    }

    pub fn value(&self) -> Option<i32> {
        self.0
    }
}

impl Ord for OptionalI32Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less, // Items with values come first
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for OptionalI32Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SortKey for OptionalI32Key {
    fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_sort_last() {
        let present = OptionalI32Key::new(Some(2002));
        let missing = OptionalI32Key::new(None);
        assert!(present < missing);
        assert!(missing.is_missing());
        assert_eq!(missing.cmp(&OptionalI32Key::new(None)), Ordering::Equal);
    }

    #[test]
    fn test_key_ordering() {
        let low = OptionalI32Key::new(Some(1977));
        let high = OptionalI32Key::new(Some(1999));
        assert!(low < high);
        assert_eq!(low.value(), Some(1977));
    }
}
