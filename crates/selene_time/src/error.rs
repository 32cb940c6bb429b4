//! Error types for calendar parsing and time-scale conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from UTC parsing, validation, or scale conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Timestamp text could not be parsed.
    Parse(String),
    /// A calendar field is out of range.
    InvalidDate(&'static str),
    /// UTC epoch is before 1972-Jan-01 (pre-modern leap seconds).
    Pre1972Utc,
    /// The system clock could not be read.
    Clock(String),
    /// No ΔT is available for this UTC Julian Date (before 1800).
    EpochOutOfRange(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "timestamp parse error: {msg}"),
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::Pre1972Utc => write!(f, "UTC before 1972-Jan-01 is not supported"),
            Self::Clock(msg) => write!(f, "system clock error: {msg}"),
            Self::EpochOutOfRange(jd) => write!(f, "no ΔT model for JD {jd} (before 1800)"),
        }
    }
}

impl Error for TimeError {}
