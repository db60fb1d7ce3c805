//! Haversine great-circle distance — the portable fallback formula.

use geodine_core::{GeoPoint, EARTH_RADIUS_KM};

use crate::{DistResult, DistanceFormula};

/// Haversine distance in kilometres between two valid points.
///
/// Symmetric by construction, and exactly 0.0 for coincident points (every
/// intermediate term vanishes, no rounding occurs).
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.lon() - a.lon()).to_radians();

    let h = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    // Rounding can push h a hair outside [0, 1] for antipodal or coincident
    // pairs, which would send asin(sqrt(h)) out of its domain (NaN).
    let h = h.clamp(0.0, 1.0);

    let c = 2.0 * h.sqrt().asin();
    EARTH_RADIUS_KM * c
}

/// The pure-computation strategy.  Stateless; a unit struct is enough.
pub struct Haversine;

/// Below this batch size the Rayon fork/join overhead outweighs the ~100 ns
/// per-point formula cost.
#[cfg(feature = "parallel")]
const PAR_THRESHOLD: usize = 4_096;

impl DistanceFormula for Haversine {
    fn batch_km(&self, center: GeoPoint, targets: &[GeoPoint]) -> DistResult<Vec<f64>> {
        #[cfg(not(feature = "parallel"))]
        {
            Ok(targets.iter().map(|&t| haversine_km(center, t)).collect())
        }

        #[cfg(feature = "parallel")]
        {
            if targets.len() < PAR_THRESHOLD {
                return Ok(targets.iter().map(|&t| haversine_km(center, t)).collect());
            }
            use rayon::prelude::*;
            Ok(targets.par_iter().map(|&t| haversine_km(center, t)).collect())
        }
    }
}
