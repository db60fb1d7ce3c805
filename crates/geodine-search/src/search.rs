//! Ranking policy and the proximity search orchestrator.

use geodine_catalog::RestaurantCatalog;
use geodine_distance::{DistanceEngine, RestaurantDistance};

use crate::{SearchError, SearchRequest, SearchResult};

/// Filter to `distance_km <= radius_km` and sort nearest first.
///
/// Ties on distance break by ascending restaurant id so identical inputs
/// always produce identical output order.
pub fn rank(mut results: Vec<RestaurantDistance>, radius_km: f64) -> Vec<RestaurantDistance> {
    results.retain(|r| r.distance_km <= radius_km);
    // total_cmp is safe here: the engine guarantees finite distances.
    results.sort_unstable_by(|a, b| {
        a.distance_km
            .total_cmp(&b.distance_km)
            .then_with(|| a.id.cmp(&b.id))
    });
    results
}

/// Catalog + engine wired into a one-call search.
///
/// Stateless between calls; holds no timeout, retry, or cancellation logic —
/// wrap the whole [`run`](Self::run) invocation if a request deadline is
/// needed.
///
/// # Example
///
/// ```rust,ignore
/// let search = ProximitySearch::new(catalog, DistanceEngine::haversine());
/// let hits = search.run(&SearchRequest::new(center, 10.0).with_limit(20))?;
/// ```
pub struct ProximitySearch {
    catalog: RestaurantCatalog,
    engine: DistanceEngine,
}

impl ProximitySearch {
    pub fn new(catalog: RestaurantCatalog, engine: DistanceEngine) -> Self {
        Self { catalog, engine }
    }

    pub fn catalog(&self) -> &RestaurantCatalog {
        &self.catalog
    }

    /// Run one query: candidate pre-filter → one engine batch → rank →
    /// truncate to the request's limit.
    pub fn run(&self, req: &SearchRequest) -> SearchResult<Vec<RestaurantDistance>> {
        if !req.radius_km.is_finite() || req.radius_km < 0.0 {
            return Err(SearchError::InvalidRadius(req.radius_km));
        }

        let candidates = self.catalog.candidates_within(req.center, req.radius_km);
        let distances = self.engine.compute_distances(req.center, &candidates)?;

        let mut ranked = rank(distances, req.radius_km);
        if let Some(limit) = req.limit {
            ranked.truncate(limit);
        }
        Ok(ranked)
    }
}
