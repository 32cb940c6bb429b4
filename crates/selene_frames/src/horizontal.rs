//! Equatorial → local horizontal (altitude/azimuth) conversion.
//!
//! Azimuth is measured from true north through east, in [0, 360).
//! Altitude is geometric unless a [`RefractionModel`] is applied.

use std::f64::consts::TAU;

/// Local horizontal coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoords {
    /// Altitude above the horizon in degrees, [-90, 90].
    pub altitude_deg: f64,
    /// Azimuth clockwise from true north in degrees, [0, 360).
    pub azimuth_deg: f64,
}

/// Convert hour angle / declination to horizontal coordinates.
///
/// All inputs in radians: `hour_angle` is measured westward from the
/// meridian, `latitude` is the observer's geodetic latitude.
pub fn equatorial_to_horizontal(hour_angle: f64, declination: f64, latitude: f64) -> HorizontalCoords {
    let (sin_h, cos_h) = hour_angle.sin_cos();
    let (sin_d, cos_d) = declination.sin_cos();
    let (sin_p, cos_p) = latitude.sin_cos();

    let sin_alt = (sin_p * sin_d + cos_p * cos_d * cos_h).clamp(-1.0, 1.0);
    let az = (-cos_d * sin_h).atan2(sin_d * cos_p - cos_d * cos_h * sin_p);

    HorizontalCoords {
        altitude_deg: sin_alt.asin().to_degrees(),
        azimuth_deg: normalize_azimuth_deg(az.rem_euclid(TAU).to_degrees()),
    }
}

/// Fold an azimuth into [0, 360), mapping a rounded-up 360.0 back to 0.
fn normalize_azimuth_deg(az: f64) -> f64 {
    if az >= 360.0 { 0.0 } else { az }
}

/// Atmospheric refraction settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefractionModel {
    /// Station pressure in millibar (hPa).
    pub pressure_mbar: f64,
    /// Air temperature in °C.
    pub temperature_c: f64,
}

impl Default for RefractionModel {
    fn default() -> Self {
        Self {
            pressure_mbar: 1010.0,
            temperature_c: 10.0,
        }
    }
}

impl RefractionModel {
    /// Refraction in degrees for a geometric (airless) altitude.
    ///
    /// Sæmundsson's formula (Meeus 16.4) scaled for pressure and
    /// temperature. Below −1° the body is out of sight and the value at
    /// −1° is held.
    pub fn refraction_deg(&self, geometric_alt_deg: f64) -> f64 {
        let h = geometric_alt_deg.max(-1.0);
        let arcmin = 1.02 / (h + 10.3 / (h + 5.11)).to_radians().tan();
        let scale = (self.pressure_mbar / 1010.0) * (283.0 / (273.0 + self.temperature_c));
        (arcmin * scale / 60.0).max(0.0)
    }

    /// Lift a geometric position to its apparent (refracted) altitude.
    pub fn apply(&self, coords: HorizontalCoords) -> HorizontalCoords {
        let altitude_deg = (coords.altitude_deg + self.refraction_deg(coords.altitude_deg)).min(90.0);
        HorizontalCoords {
            altitude_deg,
            ..coords
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meridian_transit_due_south() {
        // Dec 0 at latitude +40 transits 50° high in the south.
        let h = equatorial_to_horizontal(0.0, 0.0, 40.0_f64.to_radians());
        assert!((h.altitude_deg - 50.0).abs() < 1e-10);
        assert!((h.azimuth_deg - 180.0).abs() < 1e-10);
    }

    #[test]
    fn rising_in_the_east() {
        // Six hours before transit on the equator, a Dec 0 body is rising due east.
        let h = equatorial_to_horizontal(-std::f64::consts::FRAC_PI_2, 0.0, 0.0);
        assert!(h.altitude_deg.abs() < 1e-10);
        assert!((h.azimuth_deg - 90.0).abs() < 1e-10);
    }

    #[test]
    fn pole_star_is_north() {
        let lat = 37.5_f64.to_radians();
        let h = equatorial_to_horizontal(1.0, 89.999_f64.to_radians(), lat);
        assert!((h.altitude_deg - 37.5).abs() < 0.01);
        assert!(h.azimuth_deg < 0.01 || h.azimuth_deg > 359.99);
    }

    #[test]
    fn ranges_hold_on_a_grid() {
        for ha in (-12..12).map(|h| (h as f64 * 15.0).to_radians()) {
            for dec in (-9..=9).map(|d| (d as f64 * 10.0).to_radians()) {
                for lat in (-9..=9).map(|p| (p as f64 * 10.0).to_radians()) {
                    let h = equatorial_to_horizontal(ha, dec, lat);
                    assert!((-90.0..=90.0).contains(&h.altitude_deg));
                    assert!((0.0..360.0).contains(&h.azimuth_deg), "az = {}", h.azimuth_deg);
                }
            }
        }
    }

    #[test]
    fn refraction_at_horizon_is_about_half_a_degree() {
        let r = RefractionModel::default().refraction_deg(0.0);
        assert!((r - 0.4765).abs() < 0.01, "R(0) = {r}");
    }

    #[test]
    fn refraction_vanishes_at_zenith() {
        let r = RefractionModel::default().refraction_deg(90.0);
        assert!(r < 1e-4, "R(90) = {r}");
    }

    #[test]
    fn refraction_scales_with_pressure() {
        let thin = RefractionModel {
            pressure_mbar: 505.0,
            temperature_c: 10.0,
        };
        let ratio = thin.refraction_deg(10.0) / RefractionModel::default().refraction_deg(10.0);
        assert!((ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn apply_keeps_azimuth() {
        let h = HorizontalCoords {
            altitude_deg: 5.0,
            azimuth_deg: 123.0,
        };
        let lifted = RefractionModel::default().apply(h);
        assert_eq!(lifted.azimuth_deg, 123.0);
        assert!(lifted.altitude_deg > 5.0);
    }
}
