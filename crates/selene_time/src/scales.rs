//! UTC → TAI → TT → TDB, and UTC → UT1.
//!
//! All functions work on Julian Dates. UT1 is obtained from a caller-supplied
//! DUT1 (UT1−UTC) offset, which IERS keeps below 0.9 s.
//!
//! Before 1972 there are no leap seconds to count; [`ResolvedInstant`]
//! then treats the given time as UT1 and takes TT − UT1 from the ΔT model.

use crate::delta_t::{decimal_year, delta_t_model_s};
use crate::error::TimeError;
use crate::julian::{J2000_JD, SECONDS_PER_DAY};
use crate::leap_seconds::{LEAP_ERA_START_JD, tai_minus_utc_s};

/// TT − TAI in seconds (exact, by definition).
pub const TT_MINUS_TAI_S: f64 = 32.184;

/// Largest DUT1 magnitude IERS allows before inserting a leap second.
pub const MAX_DUT1_S: f64 = 0.9;

/// TT − UTC in seconds at a UTC Julian Date.
pub fn tt_minus_utc_s(jd_utc: f64) -> Result<f64, TimeError> {
    Ok(tai_minus_utc_s(jd_utc)? + TT_MINUS_TAI_S)
}

/// Convert a UTC Julian Date to TT.
pub fn utc_to_tt_jd(jd_utc: f64) -> Result<f64, TimeError> {
    Ok(jd_utc + tt_minus_utc_s(jd_utc)? / SECONDS_PER_DAY)
}

/// Convert a TT Julian Date to TDB.
///
/// Uses the two dominant periodic terms of TDB−TT (amplitude ~1.7 ms),
/// driven by the Earth's mean anomaly.
pub fn tt_to_tdb_jd(jd_tt: f64) -> f64 {
    let g = (357.53 + 0.985_600_28 * (jd_tt - J2000_JD)).to_radians();
    let tdb_minus_tt_s = 0.001_657 * g.sin() + 0.000_014 * (2.0 * g).sin();
    jd_tt + tdb_minus_tt_s / SECONDS_PER_DAY
}

/// Convert a UTC Julian Date to UT1 using a DUT1 offset in seconds.
pub fn utc_to_ut1_jd(jd_utc: f64, dut1_s: f64) -> f64 {
    jd_utc + dut1_s / SECONDS_PER_DAY
}

/// ΔT = TT − UT1 in seconds.
///
/// Before 1972 `dut1_s` is ignored and the ΔT model is used.
pub fn delta_t_s(jd_utc: f64, dut1_s: f64) -> Result<f64, TimeError> {
    if jd_utc < LEAP_ERA_START_JD {
        return delta_t_model_s(decimal_year(jd_utc)).ok_or(TimeError::EpochOutOfRange(jd_utc));
    }
    Ok(tt_minus_utc_s(jd_utc)? - dut1_s)
}

/// One UTC instant expressed in every scale the pipeline needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedInstant {
    pub jd_utc: f64,
    pub jd_ut1: f64,
    pub jd_tt: f64,
    pub jd_tdb: f64,
}

impl ResolvedInstant {
    /// Resolve a UTC Julian Date into UT1, TT and TDB.
    ///
    /// Dates from 1800 up to 1972 go through the ΔT model with UT1 = UTC.
    pub fn from_jd_utc(jd_utc: f64, dut1_s: f64) -> Result<Self, TimeError> {
        let (jd_ut1, jd_tt) = if jd_utc < LEAP_ERA_START_JD {
            (jd_utc, jd_utc + delta_t_s(jd_utc, 0.0)? / SECONDS_PER_DAY)
        } else {
            (utc_to_ut1_jd(jd_utc, dut1_s), utc_to_tt_jd(jd_utc)?)
        };
        Ok(Self {
            jd_utc,
            jd_ut1,
            jd_tt,
            jd_tdb: tt_to_tdb_jd(jd_tt),
        })
    }
}
