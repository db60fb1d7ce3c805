//! SQLite spherical backend (feature `sqlite`).
//!
//! Delegates to a `spherical_distance(lat1, lon1, lat2, lon2)` SQL function
//! returning metres.  Stock SQLite builds do not ship one — availability is
//! probed at open time and a build without it fails with
//! [`DistanceError::BackendUnavailable`] before any query runs.
//!
//! A batch is served by exactly one SELECT: the points are staged in a temp
//! table inside a transaction and joined against the function, so the cost
//! per batch is one statement rather than N.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use geodine_core::GeoPoint;

use crate::{DistResult, DistanceError, SphericalBackend};

/// A [`SphericalBackend`] backed by a SQLite connection.
///
/// The connection is wrapped in a `Mutex` because `rusqlite::Connection` is
/// not `Sync`; batches from concurrent requests serialize on it.
#[derive(Debug)]
pub struct SqliteSphericalBackend {
    conn: Mutex<Connection>,
}

impl SqliteSphericalBackend {
    /// Open the database at `path` and probe for the spherical function.
    pub fn open(path: &Path) -> DistResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// In-memory variant, mainly for tests.
    pub fn open_in_memory() -> DistResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Adopt an existing connection (e.g. one with an extension already
    /// loaded or a function already registered).
    pub fn from_connection(conn: Connection) -> DistResult<Self> {
        // Probe: a build lacking the function must fail here, not mid-query.
        if let Err(e) = conn.query_row(
            "SELECT spherical_distance(0.0, 0.0, 0.0, 0.0)",
            [],
            |row| row.get::<_, Option<f64>>(0),
        ) {
            return Err(DistanceError::BackendUnavailable(format!(
                "spherical_distance probe failed: {e}"
            )));
        }

        conn.execute_batch(
            "CREATE TEMP TABLE IF NOT EXISTS batch_points (
                 idx INTEGER PRIMARY KEY,
                 lat REAL NOT NULL,
                 lon REAL NOT NULL
             );",
        )?;

        Ok(Self { conn: Mutex::new(conn) })
    }
}

/// Query-time failures mean the capability is gone (connection dropped,
/// function unloaded), so they map to `BackendUnavailable`.
fn backend_err(e: rusqlite::Error) -> DistanceError {
    DistanceError::BackendUnavailable(e.to_string())
}

impl SphericalBackend for SqliteSphericalBackend {
    fn batch_meters(
        &self,
        center: GeoPoint,
        targets: &[GeoPoint],
    ) -> DistResult<Vec<Option<f64>>> {
        if targets.is_empty() {
            return Ok(Vec::new());
        }

        let conn = self
            .conn
            .lock()
            .map_err(|_| DistanceError::BackendUnavailable("connection mutex poisoned".into()))?;

        let tx = conn.unchecked_transaction().map_err(backend_err)?;
        let out = {
            tx.execute("DELETE FROM batch_points", []).map_err(backend_err)?;

            {
                let mut insert = tx
                    .prepare_cached("INSERT INTO batch_points (idx, lat, lon) VALUES (?1, ?2, ?3)")
                    .map_err(backend_err)?;
                for (i, t) in targets.iter().enumerate() {
                    insert
                        .execute(rusqlite::params![i as i64, t.lat(), t.lon()])
                        .map_err(backend_err)?;
                }
            }

            let mut select = tx
                .prepare_cached(
                    "SELECT spherical_distance(?1, ?2, lat, lon) \
                     FROM batch_points ORDER BY idx",
                )
                .map_err(backend_err)?;

            let mut out = Vec::with_capacity(targets.len());
            let mut rows = select
                .query(rusqlite::params![center.lat(), center.lon()])
                .map_err(backend_err)?;
            while let Some(row) = rows.next().map_err(backend_err)? {
                out.push(row.get::<_, Option<f64>>(0).map_err(backend_err)?);
            }
            out
        };
        tx.commit().map_err(backend_err)?;

        Ok(out)
    }
}

/// Register a pure-Rust `spherical_distance` implementation on `conn`.
///
/// For builds whose SQLite has no geospatial extension: tests and demos use
/// this to stand in for a capable server.  Uses the sphere radius common to
/// database geospatial functions (6 370 986 m), which differs slightly from
/// the haversine strategy's 6 371 km mean radius — the two formulas agree to
/// well under 0.5 %.
pub fn register_spherical_distance(conn: &Connection) -> rusqlite::Result<()> {
    use rusqlite::functions::FunctionFlags;

    const DB_SPHERE_RADIUS_M: f64 = 6_370_986.0;

    conn.create_scalar_function(
        "spherical_distance",
        4,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let lat1: f64 = ctx.get::<f64>(0)?.to_radians();
            let lon1: f64 = ctx.get::<f64>(1)?.to_radians();
            let lat2: f64 = ctx.get::<f64>(2)?.to_radians();
            let lon2: f64 = ctx.get::<f64>(3)?.to_radians();

            let h = ((lat2 - lat1) * 0.5).sin().powi(2)
                + lat1.cos() * lat2.cos() * ((lon2 - lon1) * 0.5).sin().powi(2);
            let h = h.clamp(0.0, 1.0);

            Ok(DB_SPHERE_RADIUS_M * 2.0 * h.sqrt().asin())
        },
    )
}
