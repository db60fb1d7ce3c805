//! citydemo — smallest runnable example for the geodine library.
//!
//! Loads a dozen Warsaw restaurants from inline CSV, then runs the same
//! proximity query twice: once with the configured default (the
//! spherical-function strategy, backed here by an in-memory SQLite database
//! with a registered `spherical_distance` function) and once with the pure
//! haversine fallback, showing that the caller — not the engine — decides
//! what to do when a backend is unavailable.

use std::io::Cursor;
use std::sync::Arc;

use anyhow::{Context, Result};

use geodine_catalog::load_catalog_reader;
use geodine_core::GeoPoint;
use geodine_distance::sqlite::{register_spherical_distance, SqliteSphericalBackend};
use geodine_distance::{DistanceEngine, DistanceError, EngineConfig, FormulaChoice};
use geodine_search::{ProximitySearch, SearchRequest};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Query center: the Palace of Culture and Science, Warsaw.
const CENTER_LAT: f64 = 52.2319;
const CENTER_LON: f64 = 21.0067;

const RADIUS_KM: f64 = 5.0;
const LIMIT: usize = 8;

// ── Catalog CSV ───────────────────────────────────────────────────────────────

// restaurant_id,lat,lon — a spread of central-Warsaw spots plus two far
// outliers (Kraków, Gdańsk) that the radius filter must drop.
const CATALOG_CSV: &str = "\
restaurant_id,lat,lon
1,52.2319,21.0067
2,52.2297,21.0122
3,52.2405,21.0200
4,52.2500,21.0120
5,52.2200,20.9800
6,52.2100,21.0400
7,52.2600,20.9850
8,52.1900,21.0600
9,52.2850,21.0700
10,52.1700,20.9200
11,50.0647,19.9450
12,54.3520,18.6466
";

fn main() -> Result<()> {
    let center = GeoPoint::new(CENTER_LAT, CENTER_LON)?;
    let request = SearchRequest::new(center, RADIUS_KM).with_limit(LIMIT);

    // ── Hard failure on a stock build ─────────────────────────────────────
    // A stock SQLite has no spherical_distance function; the probe at open
    // fails loudly instead of silently handing back a different formula.
    let bare = rusqlite::Connection::open_in_memory()?;
    match SqliteSphericalBackend::from_connection(bare) {
        Err(DistanceError::BackendUnavailable(reason)) => {
            println!("stock SQLite: {reason}");
        }
        Err(e) => return Err(e.into()),
        Ok(_) => println!("this SQLite build ships a spherical_distance function"),
    }

    // ── Default configuration: spherical-function strategy ────────────────
    let config = EngineConfig::default();
    println!("formula: {} (default)", config.formula);

    let engine = match build_spherical_engine(&config) {
        Ok(engine) => engine,
        Err(DistanceError::BackendUnavailable(reason)) => {
            // The engine never falls back on its own; switching formula is
            // an explicit caller decision.
            println!("spherical backend unavailable ({reason}); switching to haversine");
            DistanceEngine::haversine()
        }
        Err(e) => return Err(e.into()),
    };

    let catalog = load_catalog_reader(Cursor::new(CATALOG_CSV))
        .context("loading inline catalog")?;
    println!("catalog: {} restaurants", catalog.len());

    let label = engine.formula_choice().to_string();
    let search = ProximitySearch::new(catalog, engine);
    let hits = search.run(&request)?;
    print_results(&label, &hits);

    // ── Same query under the pure haversine fallback ──────────────────────
    let catalog = load_catalog_reader(Cursor::new(CATALOG_CSV))?;
    let search = ProximitySearch::new(catalog, DistanceEngine::haversine());
    let hits = search.run(&request)?;
    print_results("haversine", &hits);

    Ok(())
}

/// Open an in-memory SQLite database, register the spherical function, and
/// build the engine on top of it.
fn build_spherical_engine(config: &EngineConfig) -> Result<DistanceEngine, DistanceError> {
    debug_assert_eq!(config.formula, FormulaChoice::SphericalFunction);

    let conn = rusqlite::Connection::open_in_memory()
        .map_err(|e| DistanceError::BackendUnavailable(e.to_string()))?;
    register_spherical_distance(&conn)
        .map_err(|e| DistanceError::BackendUnavailable(e.to_string()))?;
    let backend = SqliteSphericalBackend::from_connection(conn)?;

    DistanceEngine::new(config, Some(Arc::new(backend)))
}

fn print_results(label: &str, hits: &[geodine_distance::RestaurantDistance]) {
    println!("\n{label}: {} within {RADIUS_KM} km", hits.len());
    for hit in hits {
        println!("  {:>16}  {:8.3} km", hit.id.to_string(), hit.distance_km);
    }
}
