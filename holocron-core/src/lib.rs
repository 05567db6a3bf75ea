//! # Holocron Core
//!
//! Film catalog state and the rules that shape it.
//!
//! - [`catalog`]: the catalog controller (load once, filter, sort, select)
//! - [`query`]: title filtering and typed, stable sorting
//! - [`source`]: the film data source trait and its HTTP client
//!
//! ## Examples
//!
//! ```no_run
//! use holocron_core::catalog::Catalog;
//! use holocron_core::source::SwapiClient;
//! use holocron_model::SortBy;
//!
//! async fn browse() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SwapiClient::public()?;
//!     let mut catalog = Catalog::new();
//!     catalog.load(&client).await?;
//!
//!     catalog.apply_filter("the");
//!     catalog.apply_sort(SortBy::Year);
//!     for movie in catalog.visible_movies() {
//!         println!("EPISODE {} {}", movie.episode_id, movie.title);
//!     }
//!     Ok(())
//! }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod query;
pub mod source;

pub use catalog::{Catalog, Criteria};
pub use error::{CatalogError, Result};
pub use source::{FilmSource, SourceError, StaticSource, SwapiClient};

pub use holocron_model as model;
