//! Text projections of the catalog shared by the printing commands and the
//! terminal browser.

use std::fmt;

use holocron_core::Catalog;
use holocron_model::MovieRecord;

pub const LOADING_MESSAGE: &str = "Loading Movies.....";
pub const NO_SELECTION_MESSAGE: &str = "No Movie selected";

/// One entry of the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub episode: String,
    pub title: String,
    pub year: String,
}

impl ListRow {
    pub fn from_movie(movie: &MovieRecord) -> Self {
        Self {
            episode: format!("EPISODE {}", movie.episode_id),
            title: movie.title.clone(),
            year: format!("Year {}", movie.year_label()),
        }
    }
}

impl fmt::Display for ListRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.episode, self.title, self.year)
    }
}

/// Rows for the visible list. Empty means the loading indicator is shown.
pub fn list_rows(catalog: &Catalog) -> Vec<ListRow> {
    catalog
        .visible_movies()
        .iter()
        .map(|movie| ListRow::from_movie(movie))
        .collect()
}

/// The list view as printable lines.
pub fn render_list(catalog: &Catalog) -> Vec<String> {
    let rows = list_rows(catalog);
    if rows.is_empty() {
        return vec![LOADING_MESSAGE.to_string()];
    }
    rows.iter().map(ToString::to_string).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Movie {
        title: String,
        episode: String,
        opening_crawl: Vec<String>,
    },
    Empty,
}

impl DetailView {
    pub fn of(selected: Option<&MovieRecord>) -> Self {
        match selected {
            Some(movie) => DetailView::Movie {
                title: movie.title.clone(),
                episode: format!("EPISODE {}", movie.episode_id),
                // The crawl arrives with CRLF line breaks
                opening_crawl: movie.opening_crawl.lines().map(str::to_string).collect(),
            },
            None => DetailView::Empty,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            DetailView::Movie {
                title,
                episode,
                opening_crawl,
            } => {
                let mut lines = vec![title.clone(), episode.clone(), String::new()];
                lines.extend(opening_crawl.iter().cloned());
                lines
            }
            DetailView::Empty => vec![NO_SELECTION_MESSAGE.to_string()],
        }
    }
}

/// The detail view of the catalog's selection as printable lines.
pub fn render_detail(catalog: &Catalog) -> Vec<String> {
    DetailView::of(catalog.selected().map(|movie| movie.as_ref())).lines()
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocron_core::source;
    use holocron_model::EpisodeId;

    fn film(title: &str, episode: i32, date: &str) -> MovieRecord {
        MovieRecord::new(
            title,
            EpisodeId::new(episode),
            date,
            "It is a period of civil war.\r\nRebel spaceships...",
        )
        .unwrap()
    }

    fn loaded(films: Vec<MovieRecord>) -> Catalog {
        let mut catalog = Catalog::new();
        catalog.ingest(Ok(films)).unwrap();
        catalog
    }

    #[test]
    fn list_row_projects_episode_title_and_year() {
        let row = ListRow::from_movie(&film("A New Hope", 4, "1977-05-25"));
        assert_eq!(row.episode, "EPISODE 4");
        assert_eq!(row.title, "A New Hope");
        assert_eq!(row.year, "Year 1977");
        assert_eq!(row.to_string(), "EPISODE 4\tA New Hope\tYear 1977");
    }

    #[test]
    fn empty_list_shows_loading_indicator() {
        assert_eq!(render_list(&Catalog::new()), vec![LOADING_MESSAGE]);

        let mut failed = Catalog::new();
        let malformed = serde_json::from_str::<i32>("{").unwrap_err();
        let _ = failed.ingest(Err(source::SourceError::Decode(malformed)));
        assert_eq!(render_list(&failed), vec![LOADING_MESSAGE]);

        let mut no_match = loaded(vec![film("A New Hope", 4, "1977-05-25")]);
        no_match.apply_filter("xyz");
        assert_eq!(render_list(&no_match), vec![LOADING_MESSAGE]);
    }

    #[test]
    fn list_follows_visible_order() {
        let mut catalog = loaded(vec![
            film("A New Hope", 4, "1977-05-25"),
            film("The Phantom Menace", 1, "1999-05-19"),
        ]);
        catalog.apply_sort(holocron_model::SortBy::Episode);
        assert_eq!(
            render_list(&catalog),
            vec![
                "EPISODE 1\tThe Phantom Menace\tYear 1999",
                "EPISODE 4\tA New Hope\tYear 1977",
            ]
        );
    }

    #[test]
    fn short_release_date_uses_what_is_there() {
        let row = ListRow::from_movie(&film("Draft", 9, "19"));
        assert_eq!(row.year, "Year 19");
    }

    #[test]
    fn detail_without_selection() {
        assert_eq!(render_detail(&Catalog::new()), vec![NO_SELECTION_MESSAGE]);
    }

    #[test]
    fn detail_of_selected_movie() {
        let mut catalog = loaded(vec![film("A New Hope", 4, "1977-05-25")]);
        catalog.select_visible(0).unwrap();
        assert_eq!(
            render_detail(&catalog),
            vec![
                "A New Hope",
                "EPISODE 4",
                "",
                "It is a period of civil war.",
                "Rebel spaceships...",
            ]
        );
    }
}
