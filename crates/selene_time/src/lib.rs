//! Time-scale conversions (UTC/TT/TDB/UT1) and sidereal time.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - A built-in leap-second table (TAI−UTC since 1972)
//! - A ΔT model for 1800–1972
//! - UTC → TAI → TT → TDB and UTC → UT1 conversion
//! - Earth Rotation Angle, mean and apparent sidereal time
//! - `UtcTime`, the instant type accepted by every query

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod leap_seconds;
pub mod scales;
pub mod sidereal;
pub mod utc_time;

pub use delta_t::{DELTA_T_MODEL_START_YEAR, decimal_year, delta_t_model_s};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar,
    jd_to_centuries, unix_seconds_to_jd,
};
pub use leap_seconds::{LEAP_ERA_START_JD, tai_minus_utc_s};
pub use scales::{
    MAX_DUT1_S, ResolvedInstant, TT_MINUS_TAI_S, delta_t_s, tt_minus_utc_s, tt_to_tdb_jd,
    utc_to_tt_jd, utc_to_ut1_jd,
};
pub use sidereal::{
    earth_rotation_angle_rad, equation_of_equinoxes_rad, gast_rad, gmst_rad,
    local_sidereal_time_rad,
};
pub use utc_time::UtcTime;

impl UtcTime {
    /// Validate and resolve this instant into UT1, TT and TDB.
    pub fn resolve(&self, dut1_s: f64) -> Result<ResolvedInstant, TimeError> {
        self.validate()?;
        ResolvedInstant::from_jd_utc(self.to_jd_utc(), dut1_s)
    }
}
