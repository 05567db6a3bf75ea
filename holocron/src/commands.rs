//! One-shot commands: fetch once, shape the catalog, print a projection.

use std::io::Write;

use anyhow::{Context, Result};
use holocron_core::{Catalog, FilmSource, SwapiClient};
use holocron_model::{EpisodeId, SortBy};

use crate::config::AppConfig;
use crate::view;

pub fn client_for(config: &AppConfig) -> Result<SwapiClient> {
    SwapiClient::new(config.films_url.clone(), config.request_timeout)
        .context("build film list client")
}

/// Load `catalog` from `source`. A failed fetch leaves it empty and is only
/// logged, so callers print the loading indicator.
pub async fn load_catalog<S>(catalog: &mut Catalog, source: &S)
where
    S: FilmSource + ?Sized,
{
    if let Err(err) = catalog.load(source).await {
        tracing::debug!(error = %err, "continuing with an empty catalog");
    }
}

/// Print the list view after applying the optional search and sort.
pub async fn run_list<S, W>(
    source: &S,
    search: Option<&str>,
    sort: Option<SortBy>,
    out: &mut W,
) -> Result<()>
where
    S: FilmSource + ?Sized,
    W: Write,
{
    let mut catalog = Catalog::new();
    load_catalog(&mut catalog, source).await;

    if let Some(term) = search {
        catalog.set_search_term(term);
        catalog.search();
    }
    if let Some(key) = sort {
        catalog.set_sort_key(key);
        catalog.sort();
    }

    for line in view::render_list(&catalog) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Print the detail view for `episode`. Returns whether it was found.
pub async fn run_show<S, W>(source: &S, episode: i32, out: &mut W) -> Result<bool>
where
    S: FilmSource + ?Sized,
    W: Write,
{
    let mut catalog = Catalog::new();
    load_catalog(&mut catalog, source).await;

    let found = match catalog.find_by_episode(EpisodeId::new(episode)).cloned() {
        Some(movie) => {
            catalog.select(&movie)?;
            true
        }
        None => {
            tracing::warn!(episode, "no film with that episode in the catalog");
            false
        }
    };

    for line in view::render_detail(&catalog) {
        writeln!(out, "{line}")?;
    }
    Ok(found)
}
