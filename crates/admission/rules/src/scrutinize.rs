//! Rules for VerticaScrutinize: the log-age window.
//!
//! The window is either a duration (`logAgeHours`) or a pair of optional
//! timestamps. The rules below run in a fixed order and never stop early.

use admission_types::{paths, ErrorKind, FieldError, FieldErrorList, FieldPath, ScrutinizeSpec};
use chrono::{DateTime, Utc};
use tracing::trace;

use crate::context::RuleContext;
use crate::time_window::{matches_log_age_format, parse_log_age_time, LOG_AGE_TIME_FORMAT};

/// Duration and timestamps are exclusive, and the duration is never negative.
pub fn validate_log_age_hours(
    spec: &ScrutinizeSpec,
    _ctx: &RuleContext,
    errs: &mut FieldErrorList,
) {
    if spec.log_age_hours != 0 && spec.has_time_window() {
        errs.push(FieldError::new(
            ErrorKind::MutuallyExclusiveFields,
            paths::log_age_hours(),
            spec.log_age_hours,
            "log-age-hours cannot be set alongside log-age-oldest-time and log-age-newest-time",
        ));
    }

    if spec.log_age_hours < 0 {
        errs.push(FieldError::new(
            ErrorKind::NegativeDuration,
            paths::log_age_hours(),
            spec.log_age_hours,
            "log-age-hours cannot be negative",
        ));
    }
}

/// Ordering of the explicit timestamps. Only applies when no duration is set.
///
/// The oldest boundary defaults to `now - lookback`; a parsable
/// `logAgeOldestTime` replaces it. It may not lie in the future, and a
/// parsable `logAgeNewestTime` may not precede it.
pub fn validate_log_age_times(
    spec: &ScrutinizeSpec,
    ctx: &RuleContext,
    errs: &mut FieldErrorList,
) {
    if spec.log_age_hours != 0 {
        return;
    }

    let mut oldest = ctx.default_oldest();

    if let Some(parsed) = parse_field(
        &spec.log_age_oldest_time,
        paths::log_age_oldest_time(),
        "log-age-oldest-time",
        errs,
    ) {
        if parsed > ctx.now {
            errs.push(FieldError::new(
                ErrorKind::FutureBoundary,
                paths::log_age_oldest_time(),
                spec.log_age_oldest_time.as_str(),
                "log-age-oldest-time cannot be set after current time",
            ));
        }
        oldest = parsed;
    }

    if let Some(newest) = parse_field(
        &spec.log_age_newest_time,
        paths::log_age_newest_time(),
        "log-age-newest-time",
        errs,
    ) {
        if newest < oldest {
            errs.push(FieldError::new(
                ErrorKind::InvertedRange,
                paths::log_age_newest_time(),
                spec.log_age_newest_time.as_str(),
                "log-age-oldest-time cannot be set after log-age-newest-time",
            ));
        }
    }
}

/// Grammar check of every non-empty timestamp, whatever `logAgeHours` says.
pub fn validate_log_age_time_format(
    spec: &ScrutinizeSpec,
    _ctx: &RuleContext,
    errs: &mut FieldErrorList,
) {
    let fields = [
        (&spec.log_age_oldest_time, paths::log_age_oldest_time()),
        (&spec.log_age_newest_time, paths::log_age_newest_time()),
    ];
    for (value, path) in fields {
        if value.is_empty() || matches_log_age_format(value) {
            continue;
        }
        errs.push(FieldError::new(
            ErrorKind::MalformedTimeString,
            path,
            value.as_str(),
            format!("{} should be formatted as: {}.", value, LOG_AGE_TIME_FORMAT),
        ));
    }
}

/// Parse a non-empty timestamp field, recording a failure against `path`.
fn parse_field(
    value: &str,
    path: FieldPath,
    label: &str,
    errs: &mut FieldErrorList,
) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        return None;
    }
    match parse_log_age_time(value) {
        Ok(parsed) => {
            trace!(
                field = label,
                wall_clock = %parsed.wall_clock,
                offset_hours = ?parsed.offset_hours,
                instant = %parsed.instant(),
                "parsed log-age time"
            );
            Some(parsed.instant())
        }
        Err(e) => {
            errs.push(FieldError::new(
                ErrorKind::MalformedTimeString,
                path,
                value,
                format!("failed to parse {}: {}", label, e),
            ));
            None
        }
    }
}
