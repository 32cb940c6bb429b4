//! Low-precision geocentric Sun (Meeus, _Astronomical Algorithms_, ch. 25).
//!
//! Good to about 0.01°. The returned longitude includes annual aberration
//! but not nutation, matching the lunar series.

use selene_frames::SphericalCoords;

/// Astronomical unit in km (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Constant of aberration in arcseconds, scaled by 1/R (AU).
const ABERRATION_ARCSEC: f64 = 20.4898;

/// Geocentric ecliptic position of the Sun at `t` TT centuries from J2000.0.
pub fn sun_ecliptic_of_date(t: f64) -> SphericalCoords {
    let t2 = t * t;
    let mean_longitude = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let mean_anomaly = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2;
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t2;

    let m = mean_anomaly.to_radians();
    let center = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_longitude = mean_longitude + center;
    let true_anomaly = (mean_anomaly + center).to_radians();
    let radius_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

    SphericalCoords::new(
        (true_longitude - ABERRATION_ARCSEC / 3600.0 / radius_au).rem_euclid(360.0),
        0.0,
        radius_au * AU_KM,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_25a() {
        // 1992 October 13, 0h TD: ☉ = 199.90988°, R = 0.99766 AU
        let t = (2_448_908.5 - 2_451_545.0) / 36_525.0;
        let p = sun_ecliptic_of_date(t);
        let aberration = ABERRATION_ARCSEC / 3600.0 / 0.997_66;
        assert!((p.lon_deg + aberration - 199.909_88).abs() < 1e-4, "λ = {}", p.lon_deg);
        assert!((p.distance_km / AU_KM - 0.997_66).abs() < 1e-5);
        assert_eq!(p.lat_deg, 0.0);
    }

    #[test]
    fn near_vernal_equinox_in_march() {
        // 2024 March 20, 03:06 UTC equinox
        let t = (2_460_389.63 - 2_451_545.0) / 36_525.0;
        let lon = sun_ecliptic_of_date(t).lon_deg;
        let off = (lon + 180.0).rem_euclid(360.0) - 180.0;
        assert!(off.abs() < 0.02, "λ = {lon}");
    }

    #[test]
    fn distance_within_perihelion_aphelion() {
        for day in 0..366 {
            let t = (2_460_310.5 + day as f64 - 2_451_545.0) / 36_525.0;
            let r = sun_ecliptic_of_date(t).distance_km / AU_KM;
            assert!((0.983..1.017).contains(&r), "R = {r}");
        }
    }
}
