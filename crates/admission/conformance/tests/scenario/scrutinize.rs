//! VerticaScrutinize scenarios: the log-age window.

use admission_conformance::{frozen_gate, scrutinize};
use admission_types::{paths, ErrorKind};

#[test]
fn hours_and_oldest_time_are_exclusive() {
    let verdict = frozen_gate().on_create(&scrutinize(5, "2023-01-01 00", ""));
    assert_eq!(verdict.error_kinds(), vec![ErrorKind::MutuallyExclusiveFields]);
    assert_eq!(verdict.errors()[0].path, paths::log_age_hours());
    assert_eq!(verdict.errors()[0].value, serde_json::json!(5));
}

#[test]
fn inverted_range_is_rejected() {
    let verdict = frozen_gate().on_create(&scrutinize(0, "2023-01-02 00", "2023-01-01 00"));
    assert_eq!(verdict.error_kinds(), vec![ErrorKind::InvertedRange]);
}

#[test]
fn malformed_string_is_rejected_for_any_hours() {
    let gate = frozen_gate();
    for hours in [-3, 0, 5] {
        let verdict = gate.on_create(&scrutinize(hours, "not-a-date", ""));
        assert!(
            verdict.error_kinds().contains(&ErrorKind::MalformedTimeString),
            "hours = {hours}: {:?}",
            verdict
        );
    }
}

#[test]
fn every_violation_is_reported_in_order() {
    let verdict = frozen_gate().on_create(&scrutinize(-2, "bad", "2024-01-01 00"));
    assert_eq!(
        verdict.error_kinds(),
        vec![
            ErrorKind::MutuallyExclusiveFields,
            ErrorKind::NegativeDuration,
            ErrorKind::MalformedTimeString
        ]
    );
}

#[test]
fn oldest_in_the_future_is_rejected() {
    let verdict = frozen_gate().on_create(&scrutinize(0, "2024-06-02 00", ""));
    assert_eq!(verdict.error_kinds(), vec![ErrorKind::FutureBoundary]);
}

#[test]
fn negative_offset_can_pull_a_future_time_into_the_past() {
    let gate = frozen_gate();
    // 14:00 wall clock at -03 is 11:00 UTC, before the reference noon.
    assert!(gate.on_create(&scrutinize(0, "2024-06-01 14 -03", "")).is_accepted());
    assert_eq!(
        gate.on_create(&scrutinize(0, "2024-06-01 14", "")).error_kinds(),
        vec![ErrorKind::FutureBoundary]
    );
}

#[test]
fn plain_duration_is_accepted() {
    assert!(frozen_gate().on_create(&scrutinize(24, "", "")).is_accepted());
}

#[test]
fn delete_accepts_anything() {
    assert!(frozen_gate()
        .on_delete(&scrutinize(-1, "bad", "worse"))
        .is_accepted());
}
