//! The search request value type.

use geodine_core::GeoPoint;

/// One proximity query: "restaurants within `radius_km` of `center`,
/// nearest first".
#[derive(Copy, Clone, Debug)]
pub struct SearchRequest {
    pub center: GeoPoint,

    /// Inclusive radius in kilometres; must be finite and ≥ 0.
    pub radius_km: f64,

    /// Cap on the number of results after ranking; `None` returns everything
    /// in radius.
    pub limit: Option<usize>,
}

impl SearchRequest {
    pub fn new(center: GeoPoint, radius_km: f64) -> Self {
        Self { center, radius_km, limit: None }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
