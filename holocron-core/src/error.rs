use holocron_model::EpisodeId;
use thiserror::Error;

use crate::source::SourceError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to load films: {0}")]
    Load(#[from] SourceError),

    #[error("Catalog load was already attempted this session")]
    AlreadyLoaded,

    #[error("Movie not in catalog: episode {0}")]
    NotInCatalog(EpisodeId),

    #[error("No visible movie at row {0}")]
    NoSuchRow(usize),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
