//! Title filtering for the film list.
//!
//! Matching is a case-insensitive substring test against the title only.
//! An empty term matches every record.

use std::borrow::Borrow;

use holocron_model::MovieRecord;

/// Lower-case a search term once so it can be reused across records.
pub fn normalize_term(term: &str) -> String {
    term.to_lowercase()
}

/// Whether `title` contains the already-normalized `needle`.
pub fn matches_title(title: &str, needle: &str) -> bool {
    needle.is_empty() || title.to_lowercase().contains(needle)
}

/// Every record whose title contains `term`, in input order.
pub fn filter_by_title<M>(movies: &[M], term: &str) -> Vec<M>
where
    M: Borrow<MovieRecord> + Clone,
{
    let needle = normalize_term(term);
    movies
        .iter()
        .filter(|movie| {
            matches_title(&Borrow::<MovieRecord>::borrow(*movie).title, &needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, episode: i32) -> MovieRecord {
        MovieRecord::new(title, episode, "1977-05-25", "").unwrap()
    }

    #[test]
    fn matching_ignores_case() {
        let needle = normalize_term("THE");
        assert!(matches_title("The Phantom Menace", &needle));
        assert!(matches_title("Return of the Jedi", &needle));
        assert!(!matches_title("A New Hope", &needle));
    }

    #[test]
    fn empty_term_matches_everything() {
        assert!(matches_title("Anything", ""));
        assert!(matches_title("", ""));
    }

    #[test]
    fn filter_preserves_input_order() {
        let movies = vec![
            movie("Return of the Jedi", 6),
            movie("A New Hope", 4),
            movie("The Empire Strikes Back", 5),
        ];

        let filtered = filter_by_title(&movies, "the");
        let titles: Vec<&str> =
            filtered.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Return of the Jedi", "The Empire Strikes Back"]);
    }

    #[test]
    fn filters_shared_records() {
        use std::sync::Arc;

        let movies = vec![
            Arc::new(movie("Attack of the Clones", 2)),
            Arc::new(movie("A New Hope", 4)),
        ];

        let filtered = filter_by_title(&movies, "CLONES");
        assert_eq!(filtered.len(), 1);
        assert!(Arc::ptr_eq(&filtered[0], &movies[0]));
    }

    #[test]
    fn no_match_yields_empty() {
        let movies = vec![movie("A New Hope", 4)];
        assert!(filter_by_title(&movies, "clone").is_empty());
    }

    #[test]
    fn whitespace_is_part_of_the_term() {
        let movies = vec![movie("A New Hope", 4), movie("Rogue One", 0)];
        let filtered = filter_by_title(&movies, "new ");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "A New Hope");
    }
}
