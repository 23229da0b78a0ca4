//! Per-call inputs shared by every rule.

use chrono::{DateTime, Duration, Utc};

/// Default look-back when a scrutinize run names no oldest boundary.
pub const DEFAULT_LOOKBACK_HOURS: i64 = 24;

/// Inputs that are not part of the spec.
///
/// `now` is sampled once by the caller and reused by every comparison in the
/// pass, so two time checks can never disagree about the current instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContext {
    pub now: DateTime<Utc>,
    pub lookback: Duration,
}

impl RuleContext {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            lookback: Duration::try_hours(DEFAULT_LOOKBACK_HOURS).unwrap_or(Duration::MAX),
        }
    }

    pub fn with_lookback(mut self, lookback: Duration) -> Self {
        self.lookback = lookback;
        self
    }

    /// Oldest boundary used when none is given explicitly.
    ///
    /// Clamps to the earliest representable instant.
    pub fn default_oldest(&self) -> DateTime<Utc> {
        self.now
            .checked_sub_signed(self.lookback)
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}
