//! CSV catalog loader.
//!
//! # CSV format
//!
//! One row per restaurant:
//!
//! ```csv
//! restaurant_id,lat,lon
//! 1,52.2297,21.0122
//! 2,50.0647,19.9450
//! ```
//!
//! Coordinates are validated through `GeoPoint::new`, so a bad row fails the
//! whole load with `InvalidCoordinate` rather than being clamped or skipped.
//! Duplicate ids fail at build.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use geodine_core::{GeoPoint, RestaurantId};

use crate::{CatalogBuilder, CatalogResult, RestaurantCatalog};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CatalogRecord {
    restaurant_id: u64,
    lat: f64,
    lon: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`RestaurantCatalog`] from a CSV file.
pub fn load_catalog_csv(path: &Path) -> CatalogResult<RestaurantCatalog> {
    let file = std::fs::File::open(path)?;
    load_catalog_reader(file)
}

/// Like [`load_catalog_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_catalog_reader<R: Read>(reader: R) -> CatalogResult<RestaurantCatalog> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = CatalogBuilder::new();

    for result in csv_reader.deserialize::<CatalogRecord>() {
        let row = result.map_err(|e| crate::CatalogError::Parse(e.to_string()))?;
        let pos = GeoPoint::new(row.lat, row.lon)?;
        builder.add(RestaurantId(row.restaurant_id), pos);
    }

    builder.build()
}
