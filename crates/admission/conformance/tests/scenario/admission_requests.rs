//! Admission requests decoded from JSON, as the lifecycle framework sends them.

use admission_conformance::frozen_gate;
use admission_gate::{AdmissionRequest, ResourceKind};

fn request(json: &str) -> AdmissionRequest {
    serde_json::from_str(json).expect("fixture is valid JSON")
}

#[test]
fn stored_autoscaler_with_bad_enum_is_rejected() {
    let req = request(
        r#"{
            "operation": "Create",
            "name": "vas-sample",
            "object": {
                "kind": "VerticaAutoscaler",
                "spec": {
                    "scalingGranularity": "Node",
                    "serviceName": "primary",
                    "template": {"serviceName": "secondary", "size": 3}
                }
            }
        }"#,
    );

    let err = frozen_gate().admit(&req).unwrap_err();
    assert_eq!(err.kind, ResourceKind::VerticaAutoscaler);
    assert_eq!(err.errors.len(), 2);
    assert_eq!(
        err.to_string(),
        "VerticaAutoscaler.vertica.com \"vas-sample\" is invalid: [\
         spec.scalingGranularity: Invalid value: \"Node\": scalingGranularity must be set to either Subcluster or Pod, \
         spec.template.serviceName: Invalid value: \"secondary\": The serviceName in the subcluster template must match spec.serviceName]"
    );
}

#[test]
fn update_without_old_object_is_still_validated() {
    let req = request(
        r#"{
            "operation": "Update",
            "name": "vscr-sample",
            "object": {"kind": "VerticaScrutinize", "spec": {"logAgeHours": -1}}
        }"#,
    );
    let err = frozen_gate().admit(&req).unwrap_err();
    assert_eq!(err.errors.len(), 1);
    assert!(err.to_string().contains("log-age-hours cannot be negative"));
}

#[test]
fn valid_scrutinize_window_is_admitted() {
    let req = request(
        r#"{
            "operation": "Create",
            "name": "vscr-window",
            "object": {
                "kind": "VerticaScrutinize",
                "spec": {
                    "logAgeOldestTime": "2024-05-30 08 +02",
                    "logAgeNewestTime": "2024-05-31 9"
                }
            }
        }"#,
    );
    assert!(frozen_gate().admit(&req).is_ok());
}

#[test]
fn delete_request_is_admitted() {
    let req = request(
        r#"{
            "operation": "Delete",
            "name": "vscr-broken",
            "object": {"kind": "VerticaScrutinize", "spec": {"logAgeHours": -9, "logAgeOldestTime": "?"}}
        }"#,
    );
    assert!(frozen_gate().admit(&req).is_ok());
}
