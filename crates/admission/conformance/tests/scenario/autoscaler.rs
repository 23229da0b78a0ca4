//! VerticaAutoscaler scenarios: granularity enum and template consistency.

use admission_conformance::{autoscaler, frozen_gate};
use admission_types::{paths, ErrorKind};

#[test]
fn bad_granularity_yields_one_enum_error() {
    let verdict = frozen_gate().on_create(&autoscaler("BadValue", "", "", 0));
    assert_eq!(verdict.error_kinds(), vec![ErrorKind::InvalidEnumValue]);
    assert_eq!(verdict.errors()[0].path, paths::scaling_granularity());
}

#[test]
fn pod_without_template_is_accepted() {
    assert!(frozen_gate()
        .on_create(&autoscaler("Pod", "", "", 0))
        .is_accepted());
}

#[test]
fn template_service_name_mismatch() {
    let gate = frozen_gate();
    let verdict = gate.on_create(&autoscaler("Subcluster", "svcA", "svcB", 3));
    assert_eq!(verdict.error_kinds(), vec![ErrorKind::FieldMismatch]);
    assert_eq!(verdict.errors()[0].path, paths::template_service_name());
    assert_eq!(verdict.errors()[0].value, serde_json::json!("svcB"));

    assert!(gate
        .on_create(&autoscaler("Subcluster", "svcA", "svcA", 3))
        .is_accepted());
}

#[test]
fn template_mismatch_with_unset_service_name() {
    let verdict = frozen_gate().on_create(&autoscaler("Subcluster", "", "svcB", 3));
    assert!(verdict.is_rejected());
    assert_eq!(verdict.error_kinds(), vec![ErrorKind::FieldMismatch]);
    assert_eq!(verdict.errors()[0].path, paths::template_service_name());
}

#[test]
fn template_with_pod_granularity() {
    let gate = frozen_gate();
    let verdict = gate.on_create(&autoscaler("Pod", "", "", 3));
    assert_eq!(verdict.error_kinds(), vec![ErrorKind::IncompatibleCombination]);
    assert!(verdict.errors()[0].detail.contains("template size to 0"));

    assert!(gate.on_create(&autoscaler("Pod", "", "", 0)).is_accepted());
}

#[test]
fn template_checks_fire_together() {
    let verdict = frozen_gate().on_create(&autoscaler("Pod", "svcA", "svcB", 3));
    assert_eq!(
        verdict.error_kinds(),
        vec![ErrorKind::FieldMismatch, ErrorKind::IncompatibleCombination]
    );
}

#[test]
fn defaulted_and_undefaulted_specs_agree_when_consistent() {
    let gate = frozen_gate();
    // Defaulter ran: template service copied from the top level.
    assert!(gate
        .on_create(&autoscaler("Subcluster", "svcA", "svcA", 2))
        .is_accepted());
    // Defaulter did not run and the template is disabled.
    assert!(gate
        .on_create(&autoscaler("Subcluster", "svcA", "", 0))
        .is_accepted());
}

#[test]
fn update_revalidates_unchanged_fields() {
    let gate = frozen_gate();
    let bad = autoscaler("Subcluster", "svcA", "svcB", 3);
    assert_eq!(gate.on_update(&bad, &bad), gate.on_create(&bad));
    assert!(gate.on_update(&bad, &bad).is_rejected());
}
