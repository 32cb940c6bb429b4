//! Ephemeris collaborator seam and the built-in analytic implementation.

use selene_frames::SphericalCoords;
use selene_time::jd_to_centuries;

use crate::lunar::moon_ecliptic_of_date;
use crate::solar::sun_ecliptic_of_date;
use crate::{Body, EngineError};

/// 1800-01-01 0h TT.
pub const ANALYTIC_RANGE_START_JD: f64 = 2_378_496.5;
/// 2200-01-01 0h TT.
pub const ANALYTIC_RANGE_END_JD: f64 = 2_524_593.5;

/// Source of geocentric body positions.
///
/// Positions are ecliptic longitude/latitude in degrees and distance in km,
/// referred to the mean ecliptic and equinox of date. Nutation, aberration
/// of the observer, and parallax are applied downstream.
pub trait Ephemeris: Send + Sync {
    fn name(&self) -> &'static str;

    /// Inclusive TT Julian Date range this source can evaluate.
    fn supported_range_jd(&self) -> (f64, f64);

    /// Geocentric position of `body` at `jd_tt`.
    ///
    /// Returns [`EngineError::EphemerisUnavailable`] outside the supported
    /// range.
    fn geocentric(&self, body: Body, jd_tt: f64) -> Result<SphericalCoords, EngineError>;

    fn covers(&self, jd_tt: f64) -> bool {
        let (start, end) = self.supported_range_jd();
        (start..=end).contains(&jd_tt)
    }
}

/// Series-based ephemeris: truncated ELP-2000/82 for the Moon, the
/// low-precision solar theory for the Sun.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn name(&self) -> &'static str {
        "analytic (ELP-2000/82 truncated, Meeus solar)"
    }

    fn supported_range_jd(&self) -> (f64, f64) {
        (ANALYTIC_RANGE_START_JD, ANALYTIC_RANGE_END_JD)
    }

    fn geocentric(&self, body: Body, jd_tt: f64) -> Result<SphericalCoords, EngineError> {
        if !jd_tt.is_finite() || !self.covers(jd_tt) {
            return Err(EngineError::EphemerisUnavailable { body, jd_tt });
        }
        let t = jd_to_centuries(jd_tt);
        Ok(match body {
            Body::Moon => moon_ecliptic_of_date(t),
            Body::Sun => sun_ecliptic_of_date(t),
        })
    }
}
