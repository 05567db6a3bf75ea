use std::time::Duration;

use async_trait::async_trait;
use holocron_model::{FilmsPage, MovieRecord};
use reqwest::Client;
use url::Url;

use super::{FilmSource, Result, SourceError};

/// Public film list endpoint.
pub const DEFAULT_FILMS_URL: &str = "https://swapi.dev/api/films/?format=json";

/// HTTP client for the film list endpoint.
#[derive(Clone, Debug)]
pub struct SwapiClient {
    client: Client,
    films_url: Url,
}

impl SwapiClient {
    /// Create a client for `films_url`.
    ///
    /// Without a timeout a request waits for the server indefinitely.
    pub fn new(films_url: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        tracing::debug!(url = %films_url, ?timeout, "creating film source client");

        Ok(Self { client, films_url })
    }

    /// Client for the public endpoint with no timeout.
    pub fn public() -> Result<Self> {
        Self::new(Url::parse(DEFAULT_FILMS_URL)?, None)
    }

    pub fn films_url(&self) -> &Url {
        &self.films_url
    }
}

#[async_trait]
impl FilmSource for SwapiClient {
    async fn fetch_films(&self) -> Result<Vec<MovieRecord>> {
        tracing::debug!(url = %self.films_url, "GET film list");

        let response = self.client.get(self.films_url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SourceError::Status { status, body });
        }

        let text = response.text().await?;
        let films = decode_films(&text)?;

        tracing::debug!(count = films.len(), "film list decoded");
        Ok(films)
    }
}

/// Decode a film list body. Every record must carry a non-empty title.
pub fn decode_films(body: &str) -> Result<Vec<MovieRecord>> {
    let page: FilmsPage = serde_json::from_str(body)?;
    Ok(page.into_records())
}
