//! ΔT = TT − UT for epochs before the leap-second era.
//!
//! Piecewise polynomials by Espenak & Meeus (NASA Five Millennium Canon of
//! Solar Eclipses, 2006), restricted to 1800–1972. From 1972 onward the
//! leap-second table gives TT − UTC exactly.

use crate::julian::J2000_JD;

/// First decimal year covered by the model.
pub const DELTA_T_MODEL_START_YEAR: f64 = 1800.0;

/// Decimal year of a Julian Date (Julian years from J2000.0).
pub fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

/// ΔT in seconds for a decimal year in [1800, 1986).
///
/// Returns `None` outside that span.
pub fn delta_t_model_s(year: f64) -> Option<f64> {
    let dt = if !(DELTA_T_MODEL_START_YEAR..1986.0).contains(&year) {
        return None;
    } else if year < 1860.0 {
        let t = year - 1800.0;
        13.72 - 0.332_447 * t + 0.006_861_2 * t.powi(2) + 0.004_111_6 * t.powi(3)
            - 0.000_374_36 * t.powi(4)
            + 0.000_012_127_2 * t.powi(5)
            - 0.000_000_169_9 * t.powi(6)
            + 0.000_000_000_875 * t.powi(7)
    } else if year < 1900.0 {
        let t = year - 1860.0;
        7.62 + 0.5737 * t - 0.251_754 * t.powi(2) + 0.016_806_68 * t.powi(3)
            - 0.000_447_362_4 * t.powi(4)
            + t.powi(5) / 233_174.0
    } else if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494_119 * t - 0.059_893_9 * t.powi(2) + 0.006_196_6 * t.powi(3)
            - 0.000_197 * t.powi(4)
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.844_93 * t - 0.076_100 * t.powi(2) + 0.002_093_6 * t.powi(3)
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    };
    Some(dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_model_is_none() {
        assert_eq!(delta_t_model_s(1799.9), None);
        assert_eq!(delta_t_model_s(1990.0), None);
    }

    #[test]
    fn known_values() {
        // Tabulated ΔT: 1900 ≈ −2.8 s, 1950 ≈ 29.1 s, 1970 ≈ 40.2 s
        assert!((delta_t_model_s(1900.0).unwrap() + 2.79).abs() < 0.01);
        assert!((delta_t_model_s(1950.0).unwrap() - 29.07).abs() < 0.01);
        assert!((delta_t_model_s(1970.0).unwrap() - 40.2).abs() < 0.5);
    }

    #[test]
    fn joins_leap_second_era() {
        // TT − UTC on 1972-Jan-01 is 42.184 s
        let dt = delta_t_model_s(1972.0).unwrap();
        assert!((dt - 42.184).abs() < 0.5, "ΔT(1972) = {dt}");
    }

    #[test]
    fn continuous_at_segment_edges() {
        for edge in [1860.0, 1900.0, 1920.0, 1941.0, 1961.0] {
            let a = delta_t_model_s(edge - 1e-6).unwrap();
            let b = delta_t_model_s(edge).unwrap();
            assert!((a - b).abs() < 1.0, "jump of {} s at {edge}", (a - b).abs());
        }
    }

    #[test]
    fn decimal_year_at_j2000() {
        assert_eq!(decimal_year(J2000_JD), 2000.0);
    }
}
