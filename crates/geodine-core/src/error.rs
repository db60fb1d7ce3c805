//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `GeoError` as one variant
//! via `#[from]`.  Keeping the core enum tiny means coordinate validation can
//! be reported uniformly from every boundary (constructors, CSV loaders,
//! deserialization).

use thiserror::Error;

/// The top-level error type for `geodine-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    /// Latitude outside [-90, 90], longitude outside [-180, 180], or a
    /// non-finite value.  Rejected at construction — never clamped.
    #[error("invalid coordinate ({lat}, {lon}): lat must be in [-90, 90], lon in [-180, 180], both finite")]
    InvalidCoordinate { lat: f64, lon: f64 },
}

/// Shorthand result type for `geodine-core`.
pub type GeoResult<T> = Result<T, GeoError>;
