//! Rules for VerticaAutoscaler: scaling granularity and the subcluster template.

use admission_types::{
    paths, AutoscalerSpec, ErrorKind, FieldError, FieldErrorList, ScalingGranularity,
};

use crate::context::RuleContext;

/// `scalingGranularity` must be exactly `Pod` or `Subcluster`.
pub fn validate_scaling_granularity(
    spec: &AutoscalerSpec,
    _ctx: &RuleContext,
    errs: &mut FieldErrorList,
) {
    if spec.granularity().is_some() {
        return;
    }
    errs.push(FieldError::new(
        ErrorKind::InvalidEnumValue,
        paths::scaling_granularity(),
        spec.scaling_granularity.as_str(),
        format!(
            "scalingGranularity must be set to either {} or {}",
            ScalingGranularity::Subcluster,
            ScalingGranularity::Pod
        ),
    ));
}

/// Consistency of an in-use template with the rest of the spec.
///
/// Both checks run; a spec can fail both at once.
pub fn validate_subcluster_template(
    spec: &AutoscalerSpec,
    _ctx: &RuleContext,
    errs: &mut FieldErrorList,
) {
    if !spec.can_use_template() {
        return;
    }

    if spec.template.service_name != spec.service_name {
        errs.push(FieldError::new(
            ErrorKind::FieldMismatch,
            paths::template_service_name(),
            spec.template.service_name.as_str(),
            "The serviceName in the subcluster template must match spec.serviceName",
        ));
    }

    if spec.granularity() == Some(ScalingGranularity::Pod) {
        errs.push(FieldError::new(
            ErrorKind::IncompatibleCombination,
            paths::template_service_name(),
            spec.template.service_name.as_str(),
            "You cannot use the template if scalingGranularity is Pod. Set the template size to 0 to disable the template",
        ));
    }
}
