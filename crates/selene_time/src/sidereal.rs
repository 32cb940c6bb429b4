//! Earth Rotation Angle and sidereal time.
//!
//! Mean sidereal time links UT1 to the rotation of the Earth; apparent
//! sidereal time adds the equation of the equinoxes so that hour angles can
//! be formed against true-of-date right ascensions.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Arcseconds to radians.
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle at a UT1 Julian Date, radians in [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut1: f64) -> f64 {
    let du = jd_ut1 - J2000_JD;
    // Whole days contribute whole turns; keep only the fraction.
    let theta = TAU * (du.rem_euclid(1.0) + 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time, radians in [0, 2π).
///
/// The ERA carries UT1; the precession polynomial is evaluated in TT
/// centuries. Passing the UT1 date for both is accurate to ~10⁻⁴ arcsec.
pub fn gmst_rad(jd_ut1: f64, jd_tt: f64) -> f64 {
    let t = (jd_tt - J2000_JD) / DAYS_PER_CENTURY;
    let poly_arcsec = 0.014_506
        + t * (4612.156_534
            + t * (1.391_581_7 + t * (-0.000_000_44 + t * (-0.000_029_956 - t * 0.000_000_036_8))));
    (earth_rotation_angle_rad(jd_ut1) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Equation of the equinoxes, radians: `Δψ · cos ε`.
///
/// `dpsi_rad` is the nutation in longitude and `true_obliquity_rad` the true
/// obliquity of the ecliptic at the same instant.
pub fn equation_of_equinoxes_rad(dpsi_rad: f64, true_obliquity_rad: f64) -> f64 {
    dpsi_rad * true_obliquity_rad.cos()
}

/// Greenwich Apparent Sidereal Time, radians in [0, 2π).
pub fn gast_rad(jd_ut1: f64, jd_tt: f64, equation_of_equinoxes: f64) -> f64 {
    (gmst_rad(jd_ut1, jd_tt) + equation_of_equinoxes).rem_euclid(TAU)
}

/// Local sidereal time from a Greenwich sidereal time and east longitude.
pub fn local_sidereal_time_rad(greenwich_rad: f64, longitude_east_rad: f64) -> f64 {
    (greenwich_rad + longitude_east_rad).rem_euclid(TAU)
}
