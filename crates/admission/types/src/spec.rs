//! Resource specifications governed by the admission gate.
//!
//! Specs mirror the user-facing resource documents. Enumerated fields are
//! kept as raw strings because a spec may be deserialized from storage and
//! never pass through a validating constructor; the rule sets check them
//! explicitly at admission time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::path::FieldPath;
use crate::TypesError;

/// API group every governed kind belongs to.
pub const API_GROUP: &str = "vertica.com";

/// How an autoscaler adds or removes capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalingGranularity {
    /// Scale by adding or removing pods in an existing subcluster
    Pod,
    /// Scale by adding or removing whole subclusters
    Subcluster,
}

impl ScalingGranularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalingGranularity::Pod => "Pod",
            ScalingGranularity::Subcluster => "Subcluster",
        }
    }
}

impl fmt::Display for ScalingGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalingGranularity {
    type Err = TypesError;

    /// Exact, case-sensitive match against the closed set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pod" => Ok(ScalingGranularity::Pod),
            "Subcluster" => Ok(ScalingGranularity::Subcluster),
            other => Err(TypesError::UnknownScalingGranularity(other.to_string())),
        }
    }
}

/// Template used when the autoscaler creates new subclusters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubclusterTemplate {
    pub service_name: String,
    /// Pod count for new subclusters. Zero disables the template.
    pub size: i32,
}

/// Spec of a VerticaAutoscaler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoscalerSpec {
    /// Raw granularity; see [`AutoscalerSpec::granularity`].
    pub scaling_granularity: String,
    pub service_name: String,
    pub template: SubclusterTemplate,
}

impl AutoscalerSpec {
    pub fn new(granularity: ScalingGranularity, service_name: impl Into<String>) -> Self {
        Self {
            scaling_granularity: granularity.as_str().to_string(),
            service_name: service_name.into(),
            template: SubclusterTemplate::default(),
        }
    }

    pub fn with_template(mut self, service_name: impl Into<String>, size: i32) -> Self {
        self.template = SubclusterTemplate {
            service_name: service_name.into(),
            size,
        };
        self
    }

    /// The granularity if the raw value is in the closed set.
    pub fn granularity(&self) -> Option<ScalingGranularity> {
        self.scaling_granularity.parse().ok()
    }

    /// True when the template is in use: it declares a positive size.
    pub fn can_use_template(&self) -> bool {
        self.template.size > 0
    }
}

/// Spec of a VerticaScrutinize run. The log window is given either as a
/// duration (`log_age_hours`) or as explicit timestamps, never both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrutinizeSpec {
    pub log_age_hours: i64,
    /// `YYYY-MM-DD HH [+/-XX]`, empty when unset
    pub log_age_oldest_time: String,
    /// `YYYY-MM-DD HH [+/-XX]`, empty when unset
    pub log_age_newest_time: String,
}

impl ScrutinizeSpec {
    pub fn with_log_age_hours(hours: i64) -> Self {
        Self {
            log_age_hours: hours,
            ..Self::default()
        }
    }

    pub fn with_time_window(oldest: impl Into<String>, newest: impl Into<String>) -> Self {
        Self {
            log_age_hours: 0,
            log_age_oldest_time: oldest.into(),
            log_age_newest_time: newest.into(),
        }
    }

    pub fn has_time_window(&self) -> bool {
        !self.log_age_oldest_time.is_empty() || !self.log_age_newest_time.is_empty()
    }
}

/// Kinds of resource the gate governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    VerticaAutoscaler,
    VerticaScrutinize,
}

impl ResourceKind {
    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::VerticaAutoscaler => "VerticaAutoscaler",
            ResourceKind::VerticaScrutinize => "VerticaScrutinize",
        }
    }

    /// Field paths that exist on this kind's spec.
    pub fn field_paths(&self) -> Vec<FieldPath> {
        match self {
            ResourceKind::VerticaAutoscaler => vec![
                paths::scaling_granularity(),
                paths::service_name(),
                paths::template_service_name(),
                paths::template_size(),
            ],
            ResourceKind::VerticaScrutinize => vec![
                paths::log_age_hours(),
                paths::log_age_oldest_time(),
                paths::log_age_newest_time(),
            ],
        }
    }

    /// Whether `path` addresses a field of this kind's spec.
    pub fn governs(&self, path: &FieldPath) -> bool {
        self.field_paths().iter().any(|p| p == path)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resource spec snapshot, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "spec")]
pub enum ResourceSpec {
    #[serde(rename = "VerticaAutoscaler")]
    Autoscaler(AutoscalerSpec),
    #[serde(rename = "VerticaScrutinize")]
    Scrutinize(ScrutinizeSpec),
}

impl ResourceSpec {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceSpec::Autoscaler(_) => ResourceKind::VerticaAutoscaler,
            ResourceSpec::Scrutinize(_) => ResourceKind::VerticaScrutinize,
        }
    }
}

impl From<AutoscalerSpec> for ResourceSpec {
    fn from(spec: AutoscalerSpec) -> Self {
        ResourceSpec::Autoscaler(spec)
    }
}

impl From<ScrutinizeSpec> for ResourceSpec {
    fn from(spec: ScrutinizeSpec) -> Self {
        ResourceSpec::Scrutinize(spec)
    }
}

/// Canonical paths of governed fields.
pub mod paths {
    use crate::path::FieldPath;

    fn spec() -> FieldPath {
        FieldPath::new("spec")
    }

    pub fn scaling_granularity() -> FieldPath {
        spec().child("scalingGranularity")
    }

    pub fn service_name() -> FieldPath {
        spec().child("serviceName")
    }

    pub fn template_service_name() -> FieldPath {
        spec().child("template").child("serviceName")
    }

    pub fn template_size() -> FieldPath {
        spec().child("template").child("size")
    }

    pub fn log_age_hours() -> FieldPath {
        spec().child("logAgeHours")
    }

    pub fn log_age_oldest_time() -> FieldPath {
        spec().child("logAgeOldestTime")
    }

    pub fn log_age_newest_time() -> FieldPath {
        spec().child("logAgeNewestTime")
    }
}
