//! Distance-engine error type.

use thiserror::Error;

use geodine_core::GeoError;

/// Errors produced by `geodine-distance`.
#[derive(Debug, Error)]
pub enum DistanceError {
    /// Out-of-range coordinate rejected at a boundary.
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// The spherical-function strategy was selected but the backend is
    /// missing, errored, or returned NULL.  Never triggers a silent switch
    /// to another formula — the caller decides what to do.
    #[error("spherical backend unavailable: {0}")]
    BackendUnavailable(String),

    /// A formula produced a non-finite or negative distance.  Should never
    /// happen given the haversine domain clamp; if it does, the guard has
    /// regressed and the failure must be loud.
    #[error("formula produced invalid distance: {0} km")]
    NumericDomain(f64),

    #[error("configuration error: {0}")]
    Config(String),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Shorthand result type for `geodine-distance`.
pub type DistResult<T> = Result<T, DistanceError>;
