//! The film data source collaborator.
//!
//! The catalog pulls its records from a [`FilmSource`] exactly once per
//! session. [`SwapiClient`] talks to the public film endpoint over HTTP;
//! [`StaticSource`] serves a fixed list for embedding and tests.

pub mod http;

use async_trait::async_trait;
use holocron_model::MovieRecord;
use thiserror::Error;

pub use http::{DEFAULT_FILMS_URL, SwapiClient};

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed film list: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid films URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, SourceError>;

/// Anything that can produce the film list.
#[async_trait]
pub trait FilmSource: Send + Sync {
    /// Fetch every film, in the order the source publishes them.
    async fn fetch_films(&self) -> Result<Vec<MovieRecord>>;
}

/// In-memory source returning a fixed list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    films: Vec<MovieRecord>,
}

impl StaticSource {
    pub fn new(films: Vec<MovieRecord>) -> Self {
        Self { films }
    }
}

#[async_trait]
impl FilmSource for StaticSource {
    async fn fetch_films(&self) -> Result<Vec<MovieRecord>> {
        Ok(self.films.clone())
    }
}
