//! The database-delegated spherical-distance strategy.
//!
//! The actual computation lives in an external backend (typically a
//! geospatial SQL function); this module defines the capability trait and
//! the [`DistanceFormula`] wrapper that converts the backend's metres to
//! kilometres and turns every backend anomaly into an explicit
//! [`DistanceError::BackendUnavailable`].

use std::sync::Arc;

use geodine_core::GeoPoint;

use crate::{DistResult, DistanceError, DistanceFormula};

/// An external great-circle distance capability.
///
/// One call covers the whole batch — implementations must not issue one
/// round-trip per point.  Each output row is `Some(metres)` or `None` when
/// the backend reported NULL for that row.
pub trait SphericalBackend: Send + Sync {
    /// Distances in **metres** from `center` to every target, parallel to
    /// `targets`.
    fn batch_meters(&self, center: GeoPoint, targets: &[GeoPoint])
        -> DistResult<Vec<Option<f64>>>;
}

/// [`DistanceFormula`] implementation that delegates to a
/// [`SphericalBackend`].
pub struct SphericalFormula {
    backend: Arc<dyn SphericalBackend>,
}

impl SphericalFormula {
    pub fn new(backend: Arc<dyn SphericalBackend>) -> Self {
        Self { backend }
    }
}

impl DistanceFormula for SphericalFormula {
    fn batch_km(&self, center: GeoPoint, targets: &[GeoPoint]) -> DistResult<Vec<f64>> {
        let meters = self.backend.batch_meters(center, targets)?;

        if meters.len() != targets.len() {
            return Err(DistanceError::BackendUnavailable(format!(
                "backend returned {} distances for {} points",
                meters.len(),
                targets.len(),
            )));
        }

        meters
            .into_iter()
            .map(|m| match m {
                Some(m) => Ok(m / 1_000.0),
                None => Err(DistanceError::BackendUnavailable(
                    "backend returned NULL distance".into(),
                )),
            })
            .collect()
    }
}
