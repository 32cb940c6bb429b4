//! Geocentric ecliptic position → observer's sky.
//!
//! Chain: nutation in longitude, ecliptic → true equatorial of date,
//! apparent sidereal time, topocentric parallax on the WGS-84 ellipsoid,
//! hour angle, local horizon, optional refraction.

use selene_frames::{
    HorizontalCoords, RefractionModel, SphericalCoords, cartesian_to_spherical,
    ecliptic_to_equatorial, equatorial_to_horizontal, geocentric_factors, nutation_arcsec,
    observer_equatorial_km, spherical_to_cartesian, topocentric, true_obliquity_deg,
};
use selene_time::{
    ResolvedInstant, equation_of_equinoxes_rad, gast_rad, jd_to_centuries,
    local_sidereal_time_rad,
};

use crate::GeoLocation;

/// Everything the pipeline derives for one body, observer and instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApparentPosition {
    /// Input position (mean ecliptic and equinox of date).
    pub geocentric_ecliptic: SphericalCoords,
    /// Geocentric right ascension/declination, true equator of date.
    pub geocentric_equatorial: SphericalCoords,
    /// Topocentric right ascension/declination and distance.
    pub topocentric_equatorial: SphericalCoords,
    /// Local apparent sidereal time in degrees, [0, 360).
    pub local_sidereal_deg: f64,
    /// Topocentric hour angle in degrees, [0, 360).
    pub hour_angle_deg: f64,
    pub horizontal: HorizontalCoords,
}

/// Project a geocentric ecliptic position onto an observer's horizon.
pub fn to_horizontal(
    geocentric: &SphericalCoords,
    location: &GeoLocation,
    instant: &ResolvedInstant,
    refraction: Option<&RefractionModel>,
) -> ApparentPosition {
    let t = jd_to_centuries(instant.jd_tt);
    let (dpsi_arcsec, deps_arcsec) = nutation_arcsec(t);
    let obliquity_rad = true_obliquity_deg(t, deps_arcsec).to_radians();

    let apparent_ecliptic = SphericalCoords::new(
        (geocentric.lon_deg + dpsi_arcsec / 3600.0).rem_euclid(360.0),
        geocentric.lat_deg,
        geocentric.distance_km,
    );
    let equatorial = cartesian_to_spherical(&ecliptic_to_equatorial(
        &spherical_to_cartesian(&apparent_ecliptic),
        obliquity_rad,
    ));

    let dpsi_rad = (dpsi_arcsec / 3600.0).to_radians();
    let gast = gast_rad(
        instant.jd_ut1,
        instant.jd_tt,
        equation_of_equinoxes_rad(dpsi_rad, obliquity_rad),
    );
    let lst = local_sidereal_time_rad(gast, location.longitude_deg.to_radians());

    let latitude_rad = location.latitude_deg.to_radians();
    let (rho_sin, rho_cos) = geocentric_factors(latitude_rad, location.height_m);
    let topo = topocentric(&equatorial, &observer_equatorial_km(rho_sin, rho_cos, lst));

    let hour_angle = (lst - topo.lon_deg.to_radians()).rem_euclid(std::f64::consts::TAU);
    let geometric = equatorial_to_horizontal(hour_angle, topo.lat_deg.to_radians(), latitude_rad);
    let horizontal = match refraction {
        Some(model) => model.apply(geometric),
        None => geometric,
    };

    ApparentPosition {
        geocentric_ecliptic: *geocentric,
        geocentric_equatorial: equatorial,
        topocentric_equatorial: topo,
        local_sidereal_deg: lst.to_degrees(),
        hour_angle_deg: hour_angle.to_degrees(),
        horizontal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(jd: f64) -> ResolvedInstant {
        ResolvedInstant {
            jd_utc: jd,
            jd_ut1: jd,
            jd_tt: jd,
            jd_tdb: jd,
        }
    }

    #[test]
    fn meeus_47a_right_ascension_declination() {
        // Meeus: apparent α = 134.688470°, δ = 13.768368° (IAU 1980
        // obliquity; the IAU 2006 value shifts δ by ~1e-5°).
        let moon = SphericalCoords::new(133.162_655, -3.229_126, 368_409.7);
        let loc = GeoLocation::new(0.0, 0.0, 0.0);
        let p = to_horizontal(&moon, &loc, &instant(2_448_724.5), None);
        let eq = p.geocentric_equatorial;
        assert!((eq.lon_deg - 134.688_470).abs() < 1e-4, "α = {}", eq.lon_deg);
        assert!((eq.lat_deg - 13.768_368).abs() < 1e-4, "δ = {}", eq.lat_deg);
    }

    #[test]
    fn parallax_lowers_the_moon() {
        let moon = SphericalCoords::new(200.0, 2.0, 380_000.0);
        let loc = GeoLocation::new(37.5665, 126.978, 38.0);
        let p = to_horizontal(&moon, &loc, &instant(2_460_390.0), None);
        // Geocentric altitude from the geocentric RA/Dec.
        let ha = (p.local_sidereal_deg - p.geocentric_equatorial.lon_deg).to_radians();
        let geo = equatorial_to_horizontal(
            ha,
            p.geocentric_equatorial.lat_deg.to_radians(),
            loc.latitude_deg.to_radians(),
        );
        let drop = geo.altitude_deg - p.horizontal.altitude_deg;
        assert!(drop > 0.0 && drop < 1.0, "parallax drop = {drop}");
        assert!(p.topocentric_equatorial.distance_km < moon.distance_km + 6_400.0);
    }

    #[test]
    fn refraction_only_raises_altitude() {
        let moon = SphericalCoords::new(200.0, 2.0, 380_000.0);
        let loc = GeoLocation::new(64.1, -21.9, 20.0);
        let at = instant(2_460_390.0);
        let plain = to_horizontal(&moon, &loc, &at, None);
        let refracted = to_horizontal(&moon, &loc, &at, Some(&RefractionModel::default()));
        assert!(refracted.horizontal.altitude_deg >= plain.horizontal.altitude_deg);
        assert_eq!(refracted.horizontal.azimuth_deg, plain.horizontal.azimuth_deg);
    }

    #[test]
    fn hour_angle_and_sidereal_in_range() {
        let moon = SphericalCoords::new(10.0, -4.0, 400_000.0);
        for i in 0..48 {
            let at = instant(2_460_000.5 + i as f64 / 48.0);
            let p = to_horizontal(&moon, &GeoLocation::new(-33.9, 18.4, 0.0), &at, None);
            assert!((0.0..360.0).contains(&p.hour_angle_deg));
            assert!((0.0..360.0).contains(&p.local_sidereal_deg));
        }
    }
}
