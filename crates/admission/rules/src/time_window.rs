//! Parser for log-age time strings: `YYYY-MM-DD HH [+/-XX]`.
//!
//! The hour may be one or two digits. The optional suffix is a space, a sign
//! and a two-digit hour offset. Without an offset the wall clock is read as
//! UTC; the local timezone of the host is never consulted.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Human-readable form of the accepted grammar, used in messages.
pub const LOG_AGE_TIME_FORMAT: &str = "YYYY-MM-DD HH [+/-XX]";

lazy_static! {
    // ASCII digits only; `\d` is Unicode-aware.
    static ref LOG_AGE_TIME: Regex =
        Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2}) ([0-9]{1,2})(?: ([+-])([0-9]{2}))?$")
            .expect("log-age time pattern is valid");
}

/// Why a time string was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeWindowError {
    #[error("{input:?} does not match YYYY-MM-DD HH [+/-XX]")]
    Format { input: String },

    #[error("{input:?} is not a valid time: {reason}")]
    OutOfRange { input: String, reason: String },
}

/// A successfully parsed log-age time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedInstant {
    /// Date and hour exactly as written
    pub wall_clock: NaiveDateTime,
    /// Signed hour offset, if one was written
    pub offset_hours: Option<i32>,
    instant: DateTime<Utc>,
}

impl ParsedInstant {
    /// The absolute instant: the wall clock read as UTC, shifted by the offset.
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Pure grammar check, no calendar validation.
pub fn matches_log_age_format(input: &str) -> bool {
    LOG_AGE_TIME.is_match(input)
}

/// Parse `YYYY-MM-DD HH [+/-XX]` into an absolute instant.
///
/// Calendar nonsense (month 13, February 30, hour 24) is an error, never a
/// normalized instant.
pub fn parse_log_age_time(input: &str) -> Result<ParsedInstant, TimeWindowError> {
    let caps = LOG_AGE_TIME
        .captures(input)
        .ok_or_else(|| TimeWindowError::Format {
            input: input.to_string(),
        })?;

    let out_of_range = |reason: &str| TimeWindowError::OutOfRange {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    // Captures are at most four ASCII digits.
    let number = |idx: usize| -> u32 {
        caps.get(idx)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or_default()
    };

    let year = number(1) as i32;
    let (month, day, hour) = (number(2), number(3), number(4));

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| out_of_range("no such calendar date"))?;
    let wall_clock = date
        .and_hms_opt(hour, 0, 0)
        .ok_or_else(|| out_of_range("hour must be between 0 and 23"))?;

    let offset_hours = match (caps.get(5), caps.get(6)) {
        (Some(sign), Some(_)) => {
            let magnitude = number(6) as i32;
            Some(if sign.as_str() == "-" { -magnitude } else { magnitude })
        }
        _ => None,
    };

    let utc = Utc.from_utc_datetime(&wall_clock);
    let instant = utc
        .checked_add_signed(Duration::hours(i64::from(offset_hours.unwrap_or(0))))
        .ok_or_else(|| out_of_range("offset moves the time out of range"))?;

    Ok(ParsedInstant {
        wall_clock,
        offset_hours,
        instant,
    })
}
