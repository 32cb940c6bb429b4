//! Position engine for the Moon and Sun as seen by a ground observer.
//!
//! The [`Engine`] resolves a UTC instant into the needed time scales, asks
//! an [`Ephemeris`] for the body's geocentric position, and projects it
//! onto the observer's horizon.

use std::error::Error;
use std::fmt::{Display, Formatter};

use log::debug;
use selene_time::MAX_DUT1_S;

pub mod ephemeris;
pub mod lunar;
pub mod observe;
pub mod solar;

pub use ephemeris::{
    ANALYTIC_RANGE_END_JD, ANALYTIC_RANGE_START_JD, AnalyticEphemeris, Ephemeris,
};
pub use observe::{ApparentPosition, to_horizontal};
pub use selene_frames::{HorizontalCoords, RefractionModel, SphericalCoords};
pub use selene_time::{ResolvedInstant, TimeError, UtcTime};

/// Bodies the engine can place in the sky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    /// NAIF-style body code.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 10,
            Self::Moon => 301,
        }
    }

    /// Convert a NAIF-style body code into a [`Body`].
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            10 => Some(Self::Sun),
            301 => Some(Self::Moon),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Geodetic position of an observer on the WGS-84 ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Height above the ellipsoid in metres.
    pub height_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, height_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            height_m,
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(EngineError::InvalidObserver(
                "latitude must be within [-90, 90] degrees",
            ));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(EngineError::InvalidObserver(
                "longitude must be within [-180, 180] degrees",
            ));
        }
        if !self.height_m.is_finite() || !(-12_000.0..=100_000.0).contains(&self.height_m) {
            return Err(EngineError::InvalidObserver(
                "height must be within [-12000, 100000] metres",
            ));
        }
        Ok(())
    }
}

/// Where and when a body is observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub location: GeoLocation,
    pub time: UtcTime,
}

impl Observer {
    pub fn new(location: GeoLocation, time: UtcTime) -> Self {
        Self { location, time }
    }

    /// Observer at the current system time.
    pub fn now(location: GeoLocation) -> Result<Self, EngineError> {
        Ok(Self::new(location, UtcTime::now()?))
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// UT1 − UTC in seconds, |DUT1| ≤ 0.9.
    pub dut1_s: f64,
    /// Atmospheric refraction; `None` reports geometric altitude.
    pub refraction: Option<RefractionModel>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dut1_s: 0.0,
            refraction: None,
        }
    }
}

impl EngineConfig {
    /// Check DUT1 bounds and refraction parameters.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.dut1_s.is_finite() || self.dut1_s.abs() > MAX_DUT1_S {
            return Err(EngineError::InvalidConfig(
                "dut1_s must be finite and within ±0.9 s",
            ));
        }
        if let Some(model) = &self.refraction {
            if !model.pressure_mbar.is_finite() || model.pressure_mbar < 0.0 {
                return Err(EngineError::InvalidConfig(
                    "refraction pressure must be finite and non-negative",
                ));
            }
            if !model.temperature_c.is_finite() || model.temperature_c <= -273.0 {
                return Err(EngineError::InvalidConfig(
                    "refraction temperature must be above -273 °C",
                ));
            }
        }
        Ok(())
    }
}

/// Core engine errors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    /// The ephemeris cannot evaluate `body` at this instant. For instants
    /// that could not be put on the TT scale at all, `jd_tt` holds the UTC
    /// Julian Date that was requested.
    EphemerisUnavailable { body: Body, jd_tt: f64 },
    InvalidObserver(&'static str),
    InvalidConfig(&'static str),
    Time(TimeError),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EphemerisUnavailable { body, jd_tt } => {
                write!(f, "ephemeris unavailable for {body} at JD {jd_tt}")
            }
            Self::InvalidObserver(msg) => write!(f, "invalid observer: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for EngineError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

/// Position engine.
///
/// `Engine` is [`Send`] + [`Sync`] and holds no mutable state, so one
/// instance can serve any number of threads.
pub struct Engine {
    config: EngineConfig,
    ephemeris: Box<dyn Ephemeris>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("ephemeris", &self.ephemeris.name())
            .finish()
    }
}

impl Engine {
    /// Create an engine backed by the built-in [`AnalyticEphemeris`].
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_ephemeris(config, Box::new(AnalyticEphemeris::new()))
    }

    pub fn with_ephemeris(
        config: EngineConfig,
        ephemeris: Box<dyn Ephemeris>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        debug!(
            "engine ready: ephemeris={}, dut1={} s, refraction={}",
            ephemeris.name(),
            config.dut1_s,
            config.refraction.is_some()
        );
        Ok(Self { config, ephemeris })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn ephemeris(&self) -> &dyn Ephemeris {
        self.ephemeris.as_ref()
    }

    /// Put a UTC instant on every scale the pipeline needs.
    ///
    /// Instants the time model cannot place (before 1800) are reported as
    /// [`EngineError::EphemerisUnavailable`] for `body`.
    pub fn resolve_instant(&self, body: Body, time: &UtcTime) -> Result<ResolvedInstant, EngineError> {
        match time.resolve(self.config.dut1_s) {
            Ok(instant) => Ok(instant),
            Err(TimeError::EpochOutOfRange(jd_utc)) => {
                Err(EngineError::EphemerisUnavailable { body, jd_tt: jd_utc })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Geocentric ecliptic position of `body` at a TT Julian Date.
    pub fn body_position(&self, body: Body, jd_tt: f64) -> Result<SphericalCoords, EngineError> {
        self.ephemeris.geocentric(body, jd_tt)
    }

    /// Full apparent position of `body` for an observer.
    pub fn apparent(&self, body: Body, observer: &Observer) -> Result<ApparentPosition, EngineError> {
        observer.location.validate()?;
        let instant = self.resolve_instant(body, &observer.time)?;
        let geocentric = self.body_position(body, instant.jd_tt)?;
        let position = to_horizontal(
            &geocentric,
            &observer.location,
            &instant,
            self.config.refraction.as_ref(),
        );
        debug!(
            "{body} at {} for ({:.4}, {:.4}): alt={:.4} az={:.4}",
            observer.time,
            observer.location.latitude_deg,
            observer.location.longitude_deg,
            position.horizontal.altitude_deg,
            position.horizontal.azimuth_deg
        );
        Ok(position)
    }

    /// Altitude/azimuth of `body` for an observer.
    pub fn horizontal(&self, body: Body, observer: &Observer) -> Result<HorizontalCoords, EngineError> {
        Ok(self.apparent(body, observer)?.horizontal)
    }

    /// Altitude/azimuth of the Moon for an observer.
    pub fn moon_alt_az(&self, observer: &Observer) -> Result<HorizontalCoords, EngineError> {
        self.horizontal(Body::Moon, observer)
    }
}
