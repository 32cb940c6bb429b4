//! Observer position on the WGS-84 ellipsoid and topocentric parallax.
//!
//! Geocentric observer terms follow Meeus, _Astronomical Algorithms_,
//! ch. 11. Parallax is applied by vector subtraction in the true
//! equatorial frame of date, which is exact for any body distance.

use crate::spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};

/// WGS-84 equatorial radius in km.
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.137;

/// WGS-84 flattening.
pub const EARTH_FLATTENING: f64 = 1.0 / 298.257_223_563;

/// Observer's geocentric distance factors `(ρ sin φ′, ρ cos φ′)`.
///
/// `ρ` is in units of the equatorial radius; `φ′` is geocentric latitude.
pub fn geocentric_factors(latitude_rad: f64, height_m: f64) -> (f64, f64) {
    let b_over_a = 1.0 - EARTH_FLATTENING;
    let u = (b_over_a * latitude_rad.tan()).atan();
    let h = height_m / (EARTH_EQUATORIAL_RADIUS_KM * 1000.0);
    let rho_sin = b_over_a * u.sin() + h * latitude_rad.sin();
    let rho_cos = u.cos() + h * latitude_rad.cos();
    (rho_sin, rho_cos)
}

/// Observer position (km) in the true equatorial frame of date.
///
/// `local_sidereal_rad` is the local apparent sidereal time.
pub fn observer_equatorial_km(rho_sin: f64, rho_cos: f64, local_sidereal_rad: f64) -> [f64; 3] {
    let (s, c) = local_sidereal_rad.sin_cos();
    [
        EARTH_EQUATORIAL_RADIUS_KM * rho_cos * c,
        EARTH_EQUATORIAL_RADIUS_KM * rho_cos * s,
        EARTH_EQUATORIAL_RADIUS_KM * rho_sin,
    ]
}

/// Shift a geocentric equatorial position (RA/Dec/distance) to the observer.
pub fn topocentric(geocentric: &SphericalCoords, observer_km: &[f64; 3]) -> SphericalCoords {
    let body = spherical_to_cartesian(geocentric);
    cartesian_to_spherical(&[
        body[0] - observer_km[0],
        body[1] - observer_km[1],
        body[2] - observer_km[2],
    ])
}

/// Equatorial horizontal parallax in degrees for a body at `distance_km`.
pub fn horizontal_parallax_deg(distance_km: f64) -> f64 {
    (EARTH_EQUATORIAL_RADIUS_KM / distance_km).asin().to_degrees()
}
