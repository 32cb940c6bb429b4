//! Points on a spherical body and the bodies themselves.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Mean lunar radius, km (IAU/IAG).
pub const MOON_MEAN_RADIUS_KM: f64 = 1737.4;

/// Mean Earth radius, km (IUGG).
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude, north positive, [-90, 90].
    pub lat_deg: f64,
    /// Longitude, east positive, [-180, 180].
    pub lon_deg: f64,
}

impl GeoPoint {
    pub const fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }

    /// True when both angles are finite and within their ranges.
    pub fn is_valid(&self) -> bool {
        self.lat_deg.is_finite()
            && self.lon_deg.is_finite()
            && (-90.0..=90.0).contains(&self.lat_deg)
            && (-180.0..=180.0).contains(&self.lon_deg)
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let ns = if self.lat_deg < 0.0 { 'S' } else { 'N' };
        let ew = if self.lon_deg < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.5}°{ns} {:.5}°{ew}",
            self.lat_deg.abs(),
            self.lon_deg.abs()
        )
    }
}

/// A body whose surface carries catalogued places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceBody {
    Moon,
    Earth,
}

impl SurfaceBody {
    pub const fn radius_km(self) -> f64 {
        match self {
            Self::Moon => MOON_MEAN_RADIUS_KM,
            Self::Earth => EARTH_MEAN_RADIUS_KM,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Moon => "moon",
            Self::Earth => "earth",
        }
    }
}

impl Display for SurfaceBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SurfaceBody {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "moon" | "luna" => Ok(Self::Moon),
            "earth" => Ok(Self::Earth),
            other => Err(format!("unknown body '{other}' (expected moon or earth)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(GeoPoint::new(0.67408, 23.47297).is_valid());
        assert!(GeoPoint::new(-90.0, 180.0).is_valid());
        assert!(!GeoPoint::new(90.5, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.1).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn display_uses_hemispheres() {
        assert_eq!(
            GeoPoint::new(-43.43, -11.21).to_string(),
            "43.43000°S 11.21000°W"
        );
    }

    #[test]
    fn body_parse() {
        assert_eq!("Moon".parse::<SurfaceBody>(), Ok(SurfaceBody::Moon));
        assert_eq!(" earth ".parse::<SurfaceBody>(), Ok(SurfaceBody::Earth));
        assert!("mars".parse::<SurfaceBody>().is_err());
    }

    #[test]
    fn radii() {
        assert_eq!(SurfaceBody::Moon.radius_km(), 1737.4);
        assert_eq!(SurfaceBody::Earth.radius_km(), 6371.0);
    }
}
