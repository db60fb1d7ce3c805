//! `geodine-distance` — the distance engine.
//!
//! Given a center point and a batch of restaurant locations, computes a
//! great-circle distance for every restaurant in one call.  Two
//! interchangeable formula strategies sit behind the [`DistanceFormula`]
//! trait, selected once at engine construction and never re-branched per
//! point:
//!
//! | Strategy             | Source of truth                                  |
//! |----------------------|--------------------------------------------------|
//! | [`Haversine`]        | Pure trigonometric computation, no dependencies  |
//! | [`SphericalFormula`] | A database-provided `spherical_distance` primitive, reached through [`SphericalBackend`] |
//!
//! The engine is stateless and `Send + Sync`; it may be called concurrently
//! from any number of threads.  It performs no retries and imposes no
//! timeouts — a failed backend call surfaces immediately as
//! [`DistanceError::BackendUnavailable`], and the caller decides whether to
//! retry or construct a haversine engine instead.  There is no silent
//! formula switching.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`engine`]    | `DistanceEngine`, `EngineConfig`, `RestaurantDistance` |
//! | [`formula`]   | `FormulaChoice`, the `DistanceFormula` trait           |
//! | [`haversine`] | `haversine_km`, the `Haversine` strategy               |
//! | [`spherical`] | `SphericalBackend` trait, `SphericalFormula` wrapper   |
//! | [`sqlite`]    | `SqliteSphericalBackend` (feature `sqlite` only)       |
//! | [`error`]     | `DistanceError`, `DistResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Rayon-parallel haversine batches above a size threshold.  |
//! | `sqlite`   | SQLite spherical backend via `rusqlite`.                  |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod engine;
pub mod error;
pub mod formula;
pub mod haversine;
pub mod spherical;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use engine::{DistanceEngine, EngineConfig, RestaurantDistance};
pub use error::{DistResult, DistanceError};
pub use formula::{DistanceFormula, FormulaChoice};
pub use haversine::{haversine_km, Haversine};
pub use spherical::{SphericalBackend, SphericalFormula};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteSphericalBackend;
