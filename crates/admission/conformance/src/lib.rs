//! Shared fixtures for the admission conformance suites.

use std::sync::Arc;

use admission_gate::{FixedClock, GateConfig, ValidationGate};
use admission_types::{AutoscalerSpec, ResourceSpec, ScrutinizeSpec};
use chrono::{DateTime, TimeZone, Utc};

/// The instant every suite treats as "now": 2024-06-01 12:00 UTC.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .expect("reference instant is unambiguous")
}

/// A gate frozen at [`reference_now`] with auditing off.
pub fn frozen_gate() -> ValidationGate {
    ValidationGate::new(GateConfig::default().with_emit_audit_events(false))
        .with_clock(Arc::new(FixedClock(reference_now())))
}

pub fn autoscaler(
    granularity: &str,
    service_name: &str,
    template_service_name: &str,
    template_size: i32,
) -> ResourceSpec {
    let mut spec = AutoscalerSpec {
        scaling_granularity: granularity.to_string(),
        service_name: service_name.to_string(),
        ..AutoscalerSpec::default()
    };
    spec.template.service_name = template_service_name.to_string();
    spec.template.size = template_size;
    spec.into()
}

pub fn scrutinize(log_age_hours: i64, oldest: &str, newest: &str) -> ResourceSpec {
    ScrutinizeSpec {
        log_age_hours,
        log_age_oldest_time: oldest.to_string(),
        log_age_newest_time: newest.to_string(),
    }
    .into()
}
