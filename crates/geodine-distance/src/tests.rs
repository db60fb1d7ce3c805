//! Unit tests for the distance engine and both formula strategies.

use geodine_core::{GeoPoint, RestaurantId, RestaurantLocation};

use crate::{DistResult, SphericalBackend};

fn pt(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::new(lat, lon).unwrap()
}

fn loc(id: u64, lat: f64, lon: f64) -> RestaurantLocation {
    RestaurantLocation::new(RestaurantId(id), pt(lat, lon))
}

// ── Mock backends ─────────────────────────────────────────────────────────────

/// Faithful backend: haversine in metres.
struct MockSpherical;

impl SphericalBackend for MockSpherical {
    fn batch_meters(&self, c: GeoPoint, ts: &[GeoPoint]) -> DistResult<Vec<Option<f64>>> {
        Ok(ts.iter().map(|&t| Some(crate::haversine_km(c, t) * 1_000.0)).collect())
    }
}

/// Backend that reports NULL for every row.
struct NullBackend;

impl SphericalBackend for NullBackend {
    fn batch_meters(&self, _: GeoPoint, ts: &[GeoPoint]) -> DistResult<Vec<Option<f64>>> {
        Ok(vec![None; ts.len()])
    }
}

/// Backend that returns one row too few.
struct ShortBackend;

impl SphericalBackend for ShortBackend {
    fn batch_meters(&self, _: GeoPoint, ts: &[GeoPoint]) -> DistResult<Vec<Option<f64>>> {
        Ok(vec![Some(0.0); ts.len().saturating_sub(1)])
    }
}

/// Backend with a broken numeric domain.
struct NanBackend;

impl SphericalBackend for NanBackend {
    fn batch_meters(&self, _: GeoPoint, ts: &[GeoPoint]) -> DistResult<Vec<Option<f64>>> {
        Ok(vec![Some(f64::NAN); ts.len()])
    }
}

// ── Haversine formula ─────────────────────────────────────────────────────────

#[cfg(test)]
mod haversine {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::pt;
    use crate::haversine_km;

    #[test]
    fn coincident_points_zero_exactly() {
        let p = pt(52.2297, 21.0122);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn symmetric_for_random_pairs() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..500 {
            let a = pt(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0));
            let b = pt(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0));
            let ab = haversine_km(a, b);
            let ba = haversine_km(b, a);
            assert!((ab - ba).abs() <= 1e-9, "asymmetry: {ab} vs {ba}");
        }
    }

    #[test]
    fn antipodal_is_half_circumference_not_nan() {
        // The clamp keeps asin in domain here; without it rounding can
        // produce NaN.
        let d = haversine_km(pt(0.0, 0.0), pt(0.0, 180.0));
        assert!(d.is_finite());
        assert!((d - 20_015.0).abs() < 1.0, "got {d}");

        let d2 = haversine_km(pt(45.0, 10.0), pt(-45.0, -170.0));
        assert!(d2.is_finite());
        assert!((d2 - 20_015.0).abs() < 1.0, "got {d2}");
    }

    #[test]
    fn warsaw_to_krakow_fixture() {
        let warsaw = pt(52.2297, 21.0122);
        let krakow = pt(50.0647, 19.9450);
        let d = haversine_km(warsaw, krakow);
        assert!((d - 252.0).abs() < 2.0, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = haversine_km(pt(30.0, -88.0), pt(31.0, -88.0));
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn random_pairs_finite_and_nonnegative() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let a = pt(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0));
            let b = pt(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0));
            let d = haversine_km(a, b);
            assert!(d.is_finite() && d >= 0.0, "got {d}");
        }
    }
}

// ── FormulaChoice ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod formula_choice {
    use crate::{DistanceError, FormulaChoice};

    #[test]
    fn default_is_spherical_function() {
        assert_eq!(FormulaChoice::default(), FormulaChoice::SphericalFunction);
    }

    #[test]
    fn from_str_roundtrip() {
        for choice in [FormulaChoice::SphericalFunction, FormulaChoice::Haversine] {
            assert_eq!(choice.to_string().parse::<FormulaChoice>().unwrap(), choice);
        }
    }

    #[test]
    fn from_str_trims_whitespace() {
        assert_eq!(" haversine ".parse::<FormulaChoice>().unwrap(), FormulaChoice::Haversine);
    }

    #[test]
    fn unknown_string_is_config_error() {
        let err = "vincenty".parse::<FormulaChoice>().unwrap_err();
        assert!(matches!(err, DistanceError::Config(_)));
    }
}

// ── DistanceEngine ────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use std::sync::Arc;

    use super::{loc, pt, MockSpherical, NanBackend, NullBackend, ShortBackend};
    use crate::{DistanceEngine, DistanceError, EngineConfig, FormulaChoice};

    fn spherical_engine(backend: impl crate::SphericalBackend + 'static) -> DistanceEngine {
        let config = EngineConfig { formula: FormulaChoice::SphericalFunction };
        DistanceEngine::new(&config, Some(Arc::new(backend))).unwrap()
    }

    #[test]
    fn empty_input_empty_output() {
        let engine = DistanceEngine::haversine();
        let out = engine.compute_distances(pt(0.0, 0.0), &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn output_matches_input_order() {
        let engine = DistanceEngine::haversine();
        let points = [
            loc(30, 50.0647, 19.9450),
            loc(10, 52.2297, 21.0122),
            loc(20, 52.4064, 16.9252),
        ];
        let out = engine.compute_distances(pt(52.2297, 21.0122), &points).unwrap();
        let ids: Vec<u64> = out.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, [30, 10, 20]);
        // Second entry is the center itself.
        assert_eq!(out[1].distance_km, 0.0);
    }

    #[test]
    fn spherical_without_backend_fails_at_construction() {
        let config = EngineConfig::default();
        let err = DistanceEngine::new(&config, None).unwrap_err();
        assert!(matches!(err, DistanceError::BackendUnavailable(_)));
    }

    #[test]
    fn formulas_agree_within_half_percent() {
        let haversine = DistanceEngine::haversine();
        let spherical = spherical_engine(MockSpherical);
        let points = [
            loc(1, 50.0647, 19.9450),
            loc(2, 48.8566, 2.3522),
            loc(3, 40.7128, -74.0060),
        ];
        let center = pt(52.2297, 21.0122);

        let h = haversine.compute_distances(center, &points).unwrap();
        let s = spherical.compute_distances(center, &points).unwrap();
        for (a, b) in h.iter().zip(&s) {
            let rel = (a.distance_km - b.distance_km).abs() / a.distance_km;
            assert!(rel < 0.005, "{} vs {}", a.distance_km, b.distance_km);
        }
    }

    #[test]
    fn null_row_surfaces_backend_unavailable() {
        let engine = spherical_engine(NullBackend);
        let err = engine
            .compute_distances(pt(0.0, 0.0), &[loc(1, 1.0, 1.0)])
            .unwrap_err();
        assert!(matches!(err, DistanceError::BackendUnavailable(_)));
    }

    #[test]
    fn short_row_count_surfaces_backend_unavailable() {
        let engine = spherical_engine(ShortBackend);
        let err = engine
            .compute_distances(pt(0.0, 0.0), &[loc(1, 1.0, 1.0), loc(2, 2.0, 2.0)])
            .unwrap_err();
        assert!(matches!(err, DistanceError::BackendUnavailable(_)));
    }

    #[test]
    fn nan_from_backend_is_numeric_domain() {
        let engine = spherical_engine(NanBackend);
        let err = engine
            .compute_distances(pt(0.0, 0.0), &[loc(1, 1.0, 1.0)])
            .unwrap_err();
        assert!(matches!(err, DistanceError::NumericDomain(_)));
    }

    #[test]
    fn engine_is_debuggable() {
        // Needed so Result<DistanceEngine, _>::unwrap_err() compiles.
        let repr = format!("{:?}", DistanceEngine::haversine());
        assert!(repr.contains("Haversine"), "got {repr}");
    }

    #[test]
    fn formula_choice_is_recorded() {
        assert_eq!(DistanceEngine::haversine().formula_choice(), FormulaChoice::Haversine);
        let spherical = spherical_engine(MockSpherical);
        assert_eq!(spherical.formula_choice(), FormulaChoice::SphericalFunction);
    }
}

// ── SQLite backend ────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_backend {
    use std::sync::Arc;

    use rusqlite::Connection;

    use super::{loc, pt};
    use crate::sqlite::{register_spherical_distance, SqliteSphericalBackend};
    use crate::{DistanceEngine, DistanceError, EngineConfig, SphericalBackend};

    fn capable_backend() -> SqliteSphericalBackend {
        let conn = Connection::open_in_memory().unwrap();
        register_spherical_distance(&conn).unwrap();
        SqliteSphericalBackend::from_connection(conn).unwrap()
    }

    #[test]
    fn missing_function_fails_probe() {
        let conn = Connection::open_in_memory().unwrap();
        let err = SqliteSphericalBackend::from_connection(conn).unwrap_err();
        assert!(matches!(err, DistanceError::BackendUnavailable(_)));
    }

    #[test]
    fn empty_batch_is_empty() {
        let backend = capable_backend();
        assert!(backend.batch_meters(pt(0.0, 0.0), &[]).unwrap().is_empty());
    }

    #[test]
    fn agrees_with_haversine_within_half_percent() {
        let config = EngineConfig::default(); // spherical-function
        let spherical = DistanceEngine::new(&config, Some(Arc::new(capable_backend()))).unwrap();
        let haversine = DistanceEngine::haversine();

        let center = pt(52.2297, 21.0122);
        let points = [
            loc(1, 50.0647, 19.9450),
            loc(2, 52.4064, 16.9252),
            loc(3, 54.3520, 18.6466),
        ];

        let s = spherical.compute_distances(center, &points).unwrap();
        let h = haversine.compute_distances(center, &points).unwrap();
        for (a, b) in s.iter().zip(&h) {
            let rel = (a.distance_km - b.distance_km).abs() / b.distance_km;
            assert!(rel < 0.005, "{} vs {}", a.distance_km, b.distance_km);
        }
    }

    #[test]
    fn batch_preserves_order_across_two_queries() {
        let backend = capable_backend();
        let center = pt(0.0, 0.0);
        let first = backend
            .batch_meters(center, &[pt(1.0, 0.0), pt(2.0, 0.0)])
            .unwrap();
        // Second batch reuses the temp table; stale rows must not leak in.
        let second = backend.batch_meters(center, &[pt(3.0, 0.0)]).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 1);
        assert!(first[0].unwrap() < first[1].unwrap());
        assert!(second[0].unwrap() > first[1].unwrap());
    }
}
