//! Search-layer error type.

use thiserror::Error;

/// Errors produced by `geodine-search` — thin wrappers over the two
/// collaborator crates.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Distance(#[from] geodine_distance::DistanceError),

    #[error(transparent)]
    Catalog(#[from] geodine_catalog::CatalogError),

    #[error("invalid search radius: {0} km")]
    InvalidRadius(f64),
}

/// Shorthand result type for `geodine-search`.
pub type SearchResult<T> = Result<T, SearchError>;
