//! Property tests: idempotence, completeness and unconditional delete.

use admission_conformance::{autoscaler, frozen_gate, scrutinize};
use admission_gate::ResourceSpec;
use admission_types::ErrorKind;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_granularity() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Pod".to_string()),
        Just("Subcluster".to_string()),
        Just(String::new()),
        "[A-Za-z]{1,12}",
    ]
}

fn arb_time_string() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (2000i32..2030, 1u32..=12, 1u32..=28, 0u32..24)
            .prop_map(|(y, m, d, h)| format!("{:04}-{:02}-{:02} {:02}", y, m, d, h)),
        (2000i32..2030, 1u32..=12, 1u32..=28, 0u32..24, -12i32..=12).prop_map(
            |(y, m, d, h, o)| format!(
                "{:04}-{:02}-{:02} {} {}{:02}",
                y,
                m,
                d,
                h,
                if o < 0 { '-' } else { '+' },
                o.abs()
            )
        ),
        ".{0,16}",
    ]
}

fn arb_spec() -> impl Strategy<Value = ResourceSpec> {
    prop_oneof![
        (arb_granularity(), "[a-c]{0,2}", "[a-c]{0,2}", -2i32..5)
            .prop_map(|(g, s, ts, size)| autoscaler(&g, &s, &ts, size)),
        (-5i64..5, arb_time_string(), arb_time_string())
            .prop_map(|(h, o, n)| scrutinize(h, &o, &n)),
    ]
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn validation_is_idempotent(spec in arb_spec()) {
        let gate = frozen_gate();
        prop_assert_eq!(gate.on_create(&spec), gate.on_create(&spec));
    }

    #[test]
    fn update_is_create_for_the_new_snapshot(old in arb_spec(), new in arb_spec()) {
        let gate = frozen_gate();
        prop_assert_eq!(gate.on_update(&old, &new), gate.on_create(&new));
    }

    #[test]
    fn delete_is_unconditional(spec in arb_spec()) {
        prop_assert!(frozen_gate().on_delete(&spec).is_accepted());
    }

    #[test]
    fn accepted_iff_no_errors(spec in arb_spec()) {
        let verdict = frozen_gate().on_create(&spec);
        prop_assert_eq!(verdict.is_accepted(), verdict.errors().is_empty());
    }

    #[test]
    fn errors_address_fields_of_the_spec_kind(spec in arb_spec()) {
        let kind = spec.kind();
        for err in frozen_gate().on_create(&spec).errors() {
            prop_assert!(kind.governs(&err.path), "{} is not a field of {}", err.path, kind);
        }
    }

    #[test]
    fn independent_autoscaler_violations_all_surface(
        bad in "[a-z]{1,8}",
        size in 1i32..10,
    ) {
        // Lowercase values are never in the closed set; template names differ.
        let verdict = frozen_gate().on_create(&autoscaler(&bad, "svcA", "svcB", size));
        prop_assert_eq!(
            verdict.error_kinds(),
            vec![ErrorKind::InvalidEnumValue, ErrorKind::FieldMismatch]
        );
    }

    #[test]
    fn negative_hours_with_window_reports_both(hours in -100i64..0) {
        let verdict = frozen_gate().on_create(&scrutinize(hours, "2024-01-01 00", ""));
        prop_assert_eq!(
            verdict.error_kinds(),
            vec![ErrorKind::MutuallyExclusiveFields, ErrorKind::NegativeDuration]
        );
    }
}
