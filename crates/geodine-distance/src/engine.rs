//! The `DistanceEngine` — one batch in, one distance per restaurant out.

use std::sync::Arc;

use geodine_core::{GeoPoint, RestaurantId, RestaurantLocation};

use crate::{
    DistResult, DistanceError, DistanceFormula, FormulaChoice, Haversine, SphericalBackend,
    SphericalFormula,
};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Engine configuration, read once at construction.
///
/// `formula` typically comes from a process-wide setting string via
/// [`FormulaChoice::from_str`]; the default is
/// [`FormulaChoice::SphericalFunction`].
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    pub formula: FormulaChoice,
}

// ── Result row ────────────────────────────────────────────────────────────────

/// Distance from a query center to one restaurant.
///
/// Derived and ephemeral — recomputed per query, never persisted.  For valid
/// inputs `distance_km` is always finite and ≥ 0, and exactly 0 for
/// coincident points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestaurantDistance {
    pub id: RestaurantId,
    pub distance_km: f64,
}

// ── DistanceEngine ────────────────────────────────────────────────────────────

/// Computes great-circle distances from a center point to a batch of
/// restaurant locations.
///
/// The formula strategy is fixed at construction.  The engine holds no
/// mutable state, so one instance can serve concurrent requests.
///
/// # Example
///
/// ```rust,ignore
/// let engine = DistanceEngine::haversine();
/// let results = engine.compute_distances(center, catalog.locations())?;
/// ```
pub struct DistanceEngine {
    formula: Box<dyn DistanceFormula>,
    choice: FormulaChoice,
}

impl std::fmt::Debug for DistanceEngine {
    // Manual impl: the boxed formula strategy has no Debug bound.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DistanceEngine")
            .field("formula", &self.choice)
            .finish_non_exhaustive()
    }
}

impl DistanceEngine {
    /// Build an engine from configuration.
    ///
    /// Selecting [`FormulaChoice::SphericalFunction`] without supplying a
    /// backend fails immediately with
    /// [`DistanceError::BackendUnavailable`] — there is no silent fallback
    /// to haversine.
    pub fn new(
        config: &EngineConfig,
        backend: Option<Arc<dyn SphericalBackend>>,
    ) -> DistResult<Self> {
        let formula: Box<dyn DistanceFormula> = match config.formula {
            FormulaChoice::Haversine => Box::new(Haversine),
            FormulaChoice::SphericalFunction => {
                let backend = backend.ok_or_else(|| {
                    DistanceError::BackendUnavailable(
                        "formula \"spherical-function\" selected but no backend supplied".into(),
                    )
                })?;
                Box::new(SphericalFormula::new(backend))
            }
        };
        Ok(Self { formula, choice: config.formula })
    }

    /// Convenience constructor for the pure haversine engine; cannot fail.
    pub fn haversine() -> Self {
        Self { formula: Box::new(Haversine), choice: FormulaChoice::Haversine }
    }

    /// The formula this engine was constructed with.
    pub fn formula_choice(&self) -> FormulaChoice {
        self.choice
    }

    /// Distance in kilometres from `center` to every restaurant in `points`.
    ///
    /// One result per input, in input order — ranking and radius filtering
    /// are the caller's step (see `geodine-search`).  An empty input yields
    /// an empty output, not an error.
    pub fn compute_distances(
        &self,
        center: GeoPoint,
        points: &[RestaurantLocation],
    ) -> DistResult<Vec<RestaurantDistance>> {
        if points.is_empty() {
            return Ok(Vec::new());
        }

        let targets: Vec<GeoPoint> = points.iter().map(|p| p.pos).collect();
        let kms = self.formula.batch_km(center, &targets)?;
        debug_assert_eq!(kms.len(), points.len());

        points
            .iter()
            .zip(kms)
            .map(|(p, km)| {
                if !km.is_finite() || km < 0.0 {
                    return Err(DistanceError::NumericDomain(km));
                }
                Ok(RestaurantDistance { id: p.id, distance_km: km })
            })
            .collect()
    }
}
