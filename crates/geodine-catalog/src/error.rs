//! Catalog error type.

use thiserror::Error;

use geodine_core::{GeoError, RestaurantId};

/// Errors produced by `geodine-catalog`.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A row carried an out-of-range or non-finite coordinate.
    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error("duplicate restaurant {0}")]
    DuplicateRestaurant(RestaurantId),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `geodine-catalog`.
pub type CatalogResult<T> = Result<T, CatalogError>;
