//! Regression values for the two distance strategies.
//!
//! Reference numbers were evaluated independently in double precision
//! (Vincenty separation; literal equirectangular formula).

use selene_geo::{
    DistanceMethod, GeoPoint, MOON_MEAN_RADIUS_KM, compare, great_circle_distance_km,
    surface_distance,
};

fn tranquility() -> GeoPoint {
    GeoPoint::new(0.674_08, 23.472_97)
}

fn tycho() -> GeoPoint {
    GeoPoint::new(-43.43, -11.21)
}

#[test]
fn tranquility_to_tycho() {
    let c = compare(&tranquility(), &tycho(), MOON_MEAN_RADIUS_KM);
    assert!((c.exact_km - 1_634.749_956_337_6).abs() < 1e-6, "exact = {}", c.exact_km);
    assert!((c.planar_km - 1_657.620_688_390_9).abs() < 1e-6, "planar = {}", c.planar_km);
    assert!((c.delta_km - 22.870_732_053_2).abs() < 1e-6, "delta = {}", c.delta_km);
    assert!((c.relative_error() - 0.013_99).abs() < 1e-4);
}

#[test]
fn tycho_to_copernicus() {
    let copernicus = GeoPoint::new(9.62, -20.01);
    let c = compare(&tycho(), &copernicus, MOON_MEAN_RADIUS_KM);
    assert!((c.exact_km - 1_626.905_809).abs() < 1e-5);
    assert!((c.planar_km - 1_628.788_632).abs() < 1e-5);
}

#[test]
fn strategies_agree_for_small_separations() {
    let a = GeoPoint::new(0.0, 0.0);
    let b = GeoPoint::new(0.1, 0.1);
    let c = compare(&a, &b, MOON_MEAN_RADIUS_KM);
    // Sub-millimetre on the Moon for a ~4 km hop.
    assert!(c.delta_km.abs() < 1e-6, "delta = {}", c.delta_km);
    assert!(c.delta_km.abs() > 0.0);
}

#[test]
fn delta_grows_with_separation() {
    let origin = GeoPoint::new(5.0, 5.0);
    let mut last = 0.0;
    for step in 1..=8 {
        let far = GeoPoint::new(5.0 - 5.0 * step as f64, 5.0 + 2.0 * step as f64);
        let delta = compare(&origin, &far, MOON_MEAN_RADIUS_KM).delta_km.abs();
        assert!(delta >= last, "delta shrank at step {step}: {delta} < {last}");
        last = delta;
    }
}

#[test]
fn unified_entry_point_matches_strategies() {
    let exact = surface_distance(
        &tranquility(),
        &tycho(),
        MOON_MEAN_RADIUS_KM,
        DistanceMethod::ExactSpherical,
    );
    assert_eq!(
        exact,
        great_circle_distance_km(&tranquility(), &tycho(), MOON_MEAN_RADIUS_KM)
    );
}
