//! Restaurant catalog and builder.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over `(lat, lon)` answers the candidate queries:
//! envelope containment for radius pre-filtering and nearest-neighbor
//! iteration for k-nearest.  R-tree distances are squared Euclidean in
//! degree space — good enough to *collect* candidates, never used as a
//! final distance (that is the engine's job, in kilometres).

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use geodine_core::geo::{lat_margin_deg, lon_margin_deg};
use geodine_core::{GeoPoint, RestaurantId, RestaurantLocation};

use crate::{CatalogError, CatalogResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[lat, lon]` point plus the slot of the
/// full record in the catalog's location vector.
#[derive(Clone, Debug)]
struct LocationEntry {
    point: [f64; 2], // [lat, lon]
    slot: usize,
}

impl RTreeObject for LocationEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for LocationEntry {
    /// Squared Euclidean distance in lat/lon space — candidate ordering only.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── RestaurantCatalog ─────────────────────────────────────────────────────────

/// Read-only store of restaurant locations with spatial candidate queries.
///
/// Construct via [`CatalogBuilder`] or the CSV loader.
#[derive(Debug)]
pub struct RestaurantCatalog {
    locations: Vec<RestaurantLocation>,
    by_id: FxHashMap<RestaurantId, usize>,
    spatial_idx: RTree<LocationEntry>,
}

impl RestaurantCatalog {
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// All locations, in insertion order.
    pub fn locations(&self) -> &[RestaurantLocation] {
        &self.locations
    }

    pub fn get(&self, id: RestaurantId) -> Option<RestaurantLocation> {
        self.by_id.get(&id).map(|&slot| self.locations[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RestaurantLocation> {
        self.locations.iter()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Every restaurant that *could* lie within `radius_km` of `center`.
    ///
    /// Conservative: the degree margins are computed to over-cover the
    /// radius, so the result is a superset of the true in-radius set and an
    /// exact distance pass must follow.  Order is unspecified.
    pub fn candidates_within(&self, center: GeoPoint, radius_km: f64) -> Vec<RestaurantLocation> {
        let half_lat = lat_margin_deg(radius_km);
        let half_lon = lon_margin_deg(radius_km, center.lat());

        let lon_lo = center.lon() - half_lon;
        let lon_hi = center.lon() + half_lon;
        // The envelope cannot wrap the antimeridian; when the margin crosses
        // ±180° fall back to scanning everything rather than dropping the
        // far side.
        if lon_lo < -180.0 || lon_hi > 180.0 {
            return self.locations.clone();
        }

        let lat_lo = (center.lat() - half_lat).max(-90.0);
        let lat_hi = (center.lat() + half_lat).min(90.0);

        let envelope = AABB::from_corners([lat_lo, lon_lo], [lat_hi, lon_hi]);
        self.spatial_idx
            .locate_in_envelope(&envelope)
            .map(|e| self.locations[e.slot])
            .collect()
    }

    /// Up to `k` restaurants closest to `center`, nearest first (by degree
    ///-space distance — pass the result through the engine for kilometre
    /// ordering near the poles or over large spans).
    pub fn k_nearest(&self, center: GeoPoint, k: usize) -> Vec<RestaurantLocation> {
        self.spatial_idx
            .nearest_neighbor_iter(&[center.lat(), center.lon()])
            .take(k)
            .map(|e| self.locations[e.slot])
            .collect()
    }
}

// ── CatalogBuilder ────────────────────────────────────────────────────────────

/// Accumulate locations, then call [`build`](Self::build).
///
/// `build()` detects duplicate ids, constructs the id index, and bulk-loads
/// the R-tree (O(N log N), faster than N inserts).
///
/// # Example
///
/// ```
/// use geodine_core::{GeoPoint, RestaurantId};
/// use geodine_catalog::CatalogBuilder;
///
/// let mut b = CatalogBuilder::new();
/// b.add(RestaurantId(1), GeoPoint::new(52.23, 21.01).unwrap());
/// b.add(RestaurantId(2), GeoPoint::new(52.24, 21.02).unwrap());
/// let catalog = b.build().unwrap();
/// assert_eq!(catalog.len(), 2);
/// ```
pub struct CatalogBuilder {
    locations: Vec<RestaurantLocation>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self { locations: Vec::new() }
    }

    /// Pre-allocate for the expected number of restaurants.
    pub fn with_capacity(n: usize) -> Self {
        Self { locations: Vec::with_capacity(n) }
    }

    pub fn add(&mut self, id: RestaurantId, pos: GeoPoint) -> &mut Self {
        self.locations.push(RestaurantLocation::new(id, pos));
        self
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Consume the builder and produce a [`RestaurantCatalog`].
    ///
    /// Fails with [`CatalogError::DuplicateRestaurant`] if the same id was
    /// added twice.
    pub fn build(self) -> CatalogResult<RestaurantCatalog> {
        let mut by_id = FxHashMap::default();
        by_id.reserve(self.locations.len());
        for (slot, loc) in self.locations.iter().enumerate() {
            if by_id.insert(loc.id, slot).is_some() {
                return Err(CatalogError::DuplicateRestaurant(loc.id));
            }
        }

        let entries: Vec<LocationEntry> = self
            .locations
            .iter()
            .enumerate()
            .map(|(slot, loc)| LocationEntry {
                point: [loc.pos.lat(), loc.pos.lon()],
                slot,
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        Ok(RestaurantCatalog { locations: self.locations, by_id, spatial_idx })
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
