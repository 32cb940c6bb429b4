//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the instant type every query takes. It parses the
//! `YYYY-MM-DDThh:mm:ss[.fff]Z` form used on the command line, and can be
//! read from the system clock for "now" queries.

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar, unix_seconds_to_jd};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of a calendar day.
    pub fn from_date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Current time from the system clock.
    pub fn now() -> Result<Self, TimeError> {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| TimeError::Clock(e.to_string()))?;
        Ok(Self::from_jd_utc(unix_seconds_to_jd(
            since_epoch.as_secs_f64(),
        )))
    }

    /// Check every field against the Gregorian calendar.
    ///
    /// A `second` value up to (but excluding) 61 is accepted so that an
    /// inserted leap second can be written as `23:59:60`.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidDate("month must be in 1..=12"));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidDate("day is outside the month"));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidDate("hour must be in 0..=23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidDate("minute must be in 0..=59"));
        }
        if !self.second.is_finite() || !(0.0..61.0).contains(&self.second) {
            return Err(TimeError::InvalidDate("second must be in [0, 61)"));
        }
        Ok(())
    }

    /// Julian Date on the UTC time scale.
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Calendar fields from a UTC Julian Date.
    pub fn from_jd_utc(jd_utc: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd_utc);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn parse_field<T: FromStr>(text: &str, what: &str) -> Result<T, TimeError> {
    text.parse()
        .map_err(|_| TimeError::Parse(format!("bad {what}: '{text}'")))
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DDThh:mm[:ss[.fff]][Z]`, with a space
    /// allowed in place of `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix('Z').unwrap_or(s);
        let (date, time) = match s.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        // A leading '-' belongs to the year, so split from the right.
        let mut parts = date.rsplitn(3, '-');
        let (Some(day), Some(month), Some(year)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got '{date}'")));
        };
        let year: i32 = parse_field(year, "year")?;
        let month: u32 = parse_field(month, "month")?;
        let day: u32 = parse_field(day, "day")?;

        let (hour, minute, second) = match time {
            None => (0, 0, 0.0),
            Some(t) => {
                let fields: Vec<&str> = t.split(':').collect();
                match fields.as_slice() {
                    [h, m] => (parse_field(h, "hour")?, parse_field(m, "minute")?, 0.0),
                    [h, m, sec] => (
                        parse_field(h, "hour")?,
                        parse_field(m, "minute")?,
                        parse_field(sec, "second")?,
                    ),
                    _ => {
                        return Err(TimeError::Parse(format!(
                            "expected hh:mm[:ss], got '{t}'"
                        )));
                    }
                }
            }
        };

        let utc = Self::new(year, month, day, hour, minute, second);
        utc.validate()?;
        Ok(utc)
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
