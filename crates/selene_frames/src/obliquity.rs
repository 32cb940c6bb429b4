//! Obliquity of the ecliptic.
//!
//! Source: IAU 2006 precession (Capitaine et al. 2003), IERS Conventions
//! 2010, Eq. 5.40.

/// Mean obliquity of the ecliptic at J2000.0 in arcseconds.
pub const OBLIQUITY_J2000_ARCSEC: f64 = 84_381.406;

/// Mean obliquity of the ecliptic in degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = OBLIQUITY_J2000_ARCSEC
        + t * (-46.836_769
            + t * (-0.000_183_1 + t * (0.002_003_40 + t * (-0.000_000_576 - t * 0.000_000_043_4))));
    arcsec / 3600.0
}

/// True obliquity: mean obliquity plus nutation in obliquity (arcseconds).
pub fn true_obliquity_deg(t: f64, deps_arcsec: f64) -> f64 {
    mean_obliquity_deg(t) + deps_arcsec / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        assert!((mean_obliquity_deg(0.0) - 23.439_279_4).abs() < 1e-7);
    }

    #[test]
    fn decreases_over_this_century() {
        assert!(mean_obliquity_deg(0.25) < mean_obliquity_deg(0.0));
    }

    #[test]
    fn true_adds_nutation() {
        let t = 0.24;
        let diff = true_obliquity_deg(t, 9.0) - mean_obliquity_deg(t);
        assert!((diff - 0.0025).abs() < 1e-12);
    }
}
