//! Formula selection and the strategy trait all formulas implement.

use std::fmt;
use std::str::FromStr;

use geodine_core::GeoPoint;

use crate::{DistResult, DistanceError};

// ── FormulaChoice ─────────────────────────────────────────────────────────────

/// Which distance formula the engine uses.
///
/// Resolved once at [`DistanceEngine::new`](crate::DistanceEngine::new) from
/// process-wide configuration; never re-read mid-query.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormulaChoice {
    /// Delegate to a database-provided great-circle distance primitive.
    /// Requires a [`SphericalBackend`](crate::SphericalBackend).
    #[default]
    SphericalFunction,

    /// Pure trigonometric haversine — portable, no external dependency.
    Haversine,
}

impl FromStr for FormulaChoice {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "spherical-function" => Ok(FormulaChoice::SphericalFunction),
            "haversine" => Ok(FormulaChoice::Haversine),
            other => Err(DistanceError::Config(format!(
                "unknown formula choice {other:?} (expected \"spherical-function\" or \"haversine\")"
            ))),
        }
    }
}

impl fmt::Display for FormulaChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FormulaChoice::SphericalFunction => "spherical-function",
            FormulaChoice::Haversine => "haversine",
        };
        f.write_str(s)
    }
}

// ── DistanceFormula ───────────────────────────────────────────────────────────

/// A great-circle distance strategy.
///
/// Implementations take the whole target collection in one call — never one
/// call per point — so a database-backed strategy pays one round-trip per
/// batch.  The returned vector is parallel to `targets` (same length, same
/// order).
///
/// Implementations must be `Send + Sync`: one engine is typically shared
/// across request-handling threads.
pub trait DistanceFormula: Send + Sync {
    /// Distance in kilometres from `center` to every target.
    fn batch_km(&self, center: GeoPoint, targets: &[GeoPoint]) -> DistResult<Vec<f64>>;
}
