//! Cartesian ↔ spherical conversion and angular separation.

use std::f64::consts::TAU;

/// Spherical coordinates: longitude, latitude, distance.
///
/// Used for both ecliptic (λ, β) and equatorial (α, δ) directions; the frame
/// is implied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360).
    /// Measured in the x-y plane from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Distance from origin in km.
    pub distance_km: f64,
}

impl SphericalCoords {
    pub fn new(lon_deg: f64, lat_deg: f64, distance_km: f64) -> Self {
        Self {
            lon_deg,
            lat_deg,
            distance_km,
        }
    }
}

/// Convert Cartesian `[x, y, z]` (km) to spherical coordinates.
///
/// The zero vector maps to all-zero coordinates.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return SphericalCoords::new(0.0, 0.0, 0.0);
    }
    SphericalCoords {
        lon_deg: y.atan2(x).rem_euclid(TAU).to_degrees(),
        lat_deg: (z / r).asin().to_degrees(),
        distance_km: r,
    }
}

/// Convert spherical coordinates back to Cartesian `[x, y, z]` (km).
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let (sin_lon, cos_lon) = s.lon_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = s.lat_deg.to_radians().sin_cos();
    [
        s.distance_km * cos_lat * cos_lon,
        s.distance_km * cos_lat * sin_lon,
        s.distance_km * sin_lat,
    ]
}

/// Angle between two directions given as (longitude, latitude) in radians.
///
/// Vincenty's formula: well-conditioned for coincident, small, and
/// antipodal separations alike. Returns radians in [0, π].
pub fn angular_separation_rad(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let (sin_lat1, cos_lat1) = lat1.sin_cos();
    let (sin_lat2, cos_lat2) = lat2.sin_cos();
    let (sin_dlon, cos_dlon) = (lon2 - lon1).sin_cos();

    let num1 = cos_lat2 * sin_dlon;
    let num2 = cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_dlon;
    let denominator = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_dlon;

    num1.hypot(num2).atan2(denominator)
}

/// [`angular_separation_rad`] with inputs and output in degrees.
pub fn angular_separation_deg(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    angular_separation_rad(
        lon1.to_radians(),
        lat1.to_radians(),
        lon2.to_radians(),
        lat2.to_radians(),
    )
    .to_degrees()
}
