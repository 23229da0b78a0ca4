//! Admission Rules - rule sets evaluated by the validation gate
//!
//! Each rule is a plain function of the spec and a [`RuleContext`] that
//! appends findings to a shared [`admission_types::FieldErrorList`]. Rules
//! never abort the pass, so one submission reports every problem at once.

#![deny(unsafe_code)]

pub mod autoscaler;
pub mod context;
pub mod registry;
pub mod scrutinize;
pub mod time_window;

pub use context::{RuleContext, DEFAULT_LOOKBACK_HOURS};
pub use registry::{run_rules, Rule, AUTOSCALER_RULES, SCRUTINIZE_RULES};
pub use time_window::{
    matches_log_age_format, parse_log_age_time, ParsedInstant, TimeWindowError,
    LOG_AGE_TIME_FORMAT,
};
