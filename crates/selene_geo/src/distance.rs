//! Surface distance between two points on a sphere.
//!
//! Two strategies share one entry point, [`surface_distance`]:
//!
//! - [`DistanceMethod::ExactSpherical`]: true angular separation times
//!   the radius.
//! - [`DistanceMethod::PlanarApprox`]: the equirectangular shortcut
//!   `θ = √(Δφ² + (Δλ·cos φ̄)²)`. The longitude difference is used as given,
//!   without wrapping across the antimeridian.
//!
//! Neither validates input; NaN and out-of-range angles pass straight
//! through to the result.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use selene_frames::angular_separation_rad;

use crate::point::GeoPoint;

/// How to turn two points and a radius into a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceMethod {
    /// Equirectangular approximation.
    PlanarApprox,
    /// Great-circle distance from the true angular separation.
    #[default]
    ExactSpherical,
}

impl DistanceMethod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::PlanarApprox => "planar",
            Self::ExactSpherical => "exact",
        }
    }
}

impl Display for DistanceMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "planar" | "planar-approx" | "approx" => Ok(Self::PlanarApprox),
            "exact" | "exact-spherical" | "spherical" | "great-circle" => Ok(Self::ExactSpherical),
            other => Err(format!(
                "unknown distance method '{other}' (expected planar or exact)"
            )),
        }
    }
}

/// Great-circle distance in the unit of `radius`.
pub fn great_circle_distance_km(a: &GeoPoint, b: &GeoPoint, radius: f64) -> f64 {
    angular_separation_rad(
        a.lon_deg.to_radians(),
        a.lat_deg.to_radians(),
        b.lon_deg.to_radians(),
        b.lat_deg.to_radians(),
    ) * radius
}

/// Equirectangular distance in the unit of `radius`.
pub fn planar_chord_distance_km(a: &GeoPoint, b: &GeoPoint, radius: f64) -> f64 {
    let d_lat = a.lat_deg - b.lat_deg;
    let mean_lat = ((a.lat_deg + b.lat_deg) / 2.0).to_radians();
    let d_lon = (a.lon_deg - b.lon_deg) * mean_lat.cos();
    d_lat.hypot(d_lon).to_radians() * radius
}

/// Distance between `a` and `b` on a sphere of `radius` using `method`.
pub fn surface_distance(a: &GeoPoint, b: &GeoPoint, radius: f64, method: DistanceMethod) -> f64 {
    match method {
        DistanceMethod::PlanarApprox => planar_chord_distance_km(a, b, radius),
        DistanceMethod::ExactSpherical => great_circle_distance_km(a, b, radius),
    }
}

/// Both strategies side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceComparison {
    pub exact_km: f64,
    pub planar_km: f64,
    /// `planar_km − exact_km`.
    pub delta_km: f64,
}

impl DistanceComparison {
    pub fn new(a: &GeoPoint, b: &GeoPoint, radius: f64) -> Self {
        let exact_km = great_circle_distance_km(a, b, radius);
        let planar_km = planar_chord_distance_km(a, b, radius);
        Self {
            exact_km,
            planar_km,
            delta_km: planar_km - exact_km,
        }
    }

    /// `|delta| / exact`, or 0 for coincident points.
    pub fn relative_error(&self) -> f64 {
        if self.exact_km == 0.0 {
            0.0
        } else {
            (self.delta_km / self.exact_km).abs()
        }
    }
}

/// Evaluate both strategies for one pair.
pub fn compare(a: &GeoPoint, b: &GeoPoint, radius: f64) -> DistanceComparison {
    DistanceComparison::new(a, b, radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{EARTH_MEAN_RADIUS_KM, MOON_MEAN_RADIUS_KM};

    const METHODS: [DistanceMethod; 2] = [DistanceMethod::PlanarApprox, DistanceMethod::ExactSpherical];

    #[test]
    fn identical_points_are_zero() {
        let p = GeoPoint::new(-43.43, -11.21);
        for m in METHODS {
            assert_eq!(surface_distance(&p, &p, MOON_MEAN_RADIUS_KM, m), 0.0);
        }
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(9.62, -20.01);
        let b = GeoPoint::new(18.91, -3.67);
        for m in METHODS {
            let ab = surface_distance(&a, &b, MOON_MEAN_RADIUS_KM, m);
            let ba = surface_distance(&b, &a, MOON_MEAN_RADIUS_KM, m);
            assert!((ab - ba).abs() < 1e-9, "{m}: {ab} vs {ba}");
        }
    }

    #[test]
    fn scales_linearly_with_radius() {
        let a = GeoPoint::new(64.2559, -21.1299);
        let b = GeoPoint::new(65.8147, -16.3846);
        for m in METHODS {
            let r1 = surface_distance(&a, &b, EARTH_MEAN_RADIUS_KM, m);
            let r2 = surface_distance(&a, &b, 2.0 * EARTH_MEAN_RADIUS_KM, m);
            assert!((r2 - 2.0 * r1).abs() < 1e-9);
        }
    }

    #[test]
    fn quarter_meridian() {
        let d = great_circle_distance_km(
            &GeoPoint::new(0.0, 0.0),
            &GeoPoint::new(90.0, 0.0),
            EARTH_MEAN_RADIUS_KM,
        );
        assert!((d - EARTH_MEAN_RADIUS_KM * std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn antipodal_exact_is_half_circumference() {
        let a = GeoPoint::new(10.0, 20.0);
        let b = GeoPoint::new(-10.0, -160.0);
        let c = compare(&a, &b, MOON_MEAN_RADIUS_KM);
        assert!((c.exact_km - std::f64::consts::PI * MOON_MEAN_RADIUS_KM).abs() < 1e-6);
        assert!((c.planar_km - 5_491.792_335).abs() < 1e-5, "planar = {}", c.planar_km);
    }

    #[test]
    fn planar_does_not_wrap_antimeridian() {
        let a = GeoPoint::new(0.0, 179.0);
        let b = GeoPoint::new(0.0, -179.0);
        let c = compare(&a, &b, EARTH_MEAN_RADIUS_KM);
        assert!((c.exact_km - 222.389_853).abs() < 1e-5);
        assert!(c.planar_km > 39_000.0);
    }

    #[test]
    fn method_parse_and_default() {
        assert_eq!(DistanceMethod::default(), DistanceMethod::ExactSpherical);
        assert_eq!("Planar".parse(), Ok(DistanceMethod::PlanarApprox));
        assert_eq!("great-circle".parse(), Ok(DistanceMethod::ExactSpherical));
        assert!("manhattan".parse::<DistanceMethod>().is_err());
    }

    #[test]
    fn nan_propagates() {
        let a = GeoPoint::new(f64::NAN, 0.0);
        let b = GeoPoint::new(0.0, 0.0);
        for m in METHODS {
            assert!(surface_distance(&a, &b, 1.0, m).is_nan());
        }
    }

    #[test]
    fn relative_error_of_coincident_points() {
        let p = GeoPoint::new(1.0, 2.0);
        assert_eq!(compare(&p, &p, 1.0).relative_error(), 0.0);
    }
}
