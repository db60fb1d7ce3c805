//! Geographic coordinate type and bounding-box helpers.
//!
//! `GeoPoint` uses `f64` latitude/longitude: the distance engine's contract
//! (exact zero for coincident points, symmetry within 1e-9 km) is not
//! reachable in single precision.
//!
//! Fields are private and the constructor is fallible — a `GeoPoint` that
//! exists is always in range, so formula code downstream never has to
//! re-validate.

use crate::{GeoError, GeoResult};

/// Mean Earth radius in kilometres, shared by every distance formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometres per degree of latitude, taken at its minimum (the equator) so
/// that margins derived from it are conservative (too wide, never too narrow).
const KM_PER_DEG_LAT: f64 = 110.574;

/// Kilometres per degree of longitude at the equator; scales with cos(lat).
const KM_PER_DEG_LON_EQ: f64 = 111.320;

/// A WGS-84 geographic coordinate, validated at construction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGeoPoint"))]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Construct a point, rejecting out-of-range or non-finite coordinates
    /// with [`GeoError::InvalidCoordinate`].
    pub fn new(lat: f64, lon: f64) -> GeoResult<Self> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        if valid {
            Ok(Self { lat, lon })
        } else {
            Err(GeoError::InvalidCoordinate { lat, lon })
        }
    }

    #[inline]
    pub fn lat(self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lon(self) -> f64 {
        self.lon
    }

    /// Cheap rectangular containment check — used by the catalog to collect
    /// candidates before the exact (and more expensive) formula pass.
    #[inline]
    pub fn within_bbox(self, center: GeoPoint, half_lat_deg: f64, half_lon_deg: f64) -> bool {
        (self.lat - center.lat).abs() <= half_lat_deg
            && (self.lon - center.lon).abs() <= half_lon_deg
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGeoPoint {
    lat: f64,
    lon: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = GeoError;

    fn try_from(raw: RawGeoPoint) -> GeoResult<Self> {
        GeoPoint::new(raw.lat, raw.lon)
    }
}

// ── Radius → degree margins ───────────────────────────────────────────────────

/// Degrees of latitude guaranteed to cover `radius_km`.
///
/// Uses the equatorial (minimum) km-per-degree constant, so the returned
/// margin errs on the wide side everywhere on the globe.
#[inline]
pub fn lat_margin_deg(radius_km: f64) -> f64 {
    (radius_km / KM_PER_DEG_LAT).min(180.0)
}

/// Degrees of longitude guaranteed to cover `radius_km` at latitude
/// `at_lat_deg`.
///
/// Longitude degrees shrink with cos(lat); the margin is computed at the
/// latitude extreme of the search band so it can only over-cover.  A band
/// that touches a pole spans every longitude, so the margin saturates at
/// the full 180°.
pub fn lon_margin_deg(radius_km: f64, at_lat_deg: f64) -> f64 {
    let band_edge = at_lat_deg.abs() + lat_margin_deg(radius_km);
    if band_edge >= 90.0 {
        return 180.0;
    }
    let km_per_deg = KM_PER_DEG_LON_EQ * band_edge.to_radians().cos();
    (radius_km / km_per_deg).min(180.0)
}
