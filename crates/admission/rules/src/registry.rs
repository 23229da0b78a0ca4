//! Dispatch table from resource kind to rule set.

use admission_types::{AutoscalerSpec, FieldErrorList, ResourceSpec, ScrutinizeSpec};
use tracing::debug;

use crate::autoscaler;
use crate::context::RuleContext;
use crate::scrutinize;

/// A named check over one spec variant.
pub struct Rule<S> {
    pub name: &'static str,
    pub check: fn(&S, &RuleContext, &mut FieldErrorList),
}

/// Autoscaler rules, in evaluation order.
pub const AUTOSCALER_RULES: &[Rule<AutoscalerSpec>] = &[
    Rule {
        name: "scaling-granularity",
        check: autoscaler::validate_scaling_granularity,
    },
    Rule {
        name: "subcluster-template",
        check: autoscaler::validate_subcluster_template,
    },
];

/// Scrutinize rules, in evaluation order.
pub const SCRUTINIZE_RULES: &[Rule<ScrutinizeSpec>] = &[
    Rule {
        name: "log-age-hours",
        check: scrutinize::validate_log_age_hours,
    },
    Rule {
        name: "log-age-times",
        check: scrutinize::validate_log_age_times,
    },
    Rule {
        name: "log-age-time-format",
        check: scrutinize::validate_log_age_time_format,
    },
];

/// Run every rule for the spec's kind, appending to `errs`.
pub fn run_rules(spec: &ResourceSpec, ctx: &RuleContext, errs: &mut FieldErrorList) {
    match spec {
        ResourceSpec::Autoscaler(s) => run_all(AUTOSCALER_RULES, s, ctx, errs),
        ResourceSpec::Scrutinize(s) => run_all(SCRUTINIZE_RULES, s, ctx, errs),
    }
}

fn run_all<S>(rules: &[Rule<S>], spec: &S, ctx: &RuleContext, errs: &mut FieldErrorList) {
    for rule in rules {
        let before = errs.len();
        (rule.check)(spec, ctx, errs);
        debug!(
            rule = rule.name,
            found = errs.len() - before,
            "rule evaluated"
        );
    }
}
