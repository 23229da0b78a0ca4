//! Gate errors and the admission rejection handed to the lifecycle framework.

use admission_types::{FieldError, ResourceKind};
use thiserror::Error;

/// Failures of the gate itself, never of the resource under review.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GateResult<T> = Result<T, GateError>;

/// A rejected admission: the resource is invalid for the listed reasons.
///
/// Renders like a Kubernetes `Invalid` status, e.g.
/// `VerticaAutoscaler.vertica.com "vas" is invalid: spec.scalingGranularity: ...`.
/// Several errors are wrapped in brackets and comma-separated.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}.{group} {name:?} is invalid: {}", render_errors(.errors))]
pub struct AdmissionError {
    pub kind: ResourceKind,
    pub group: String,
    pub name: String,
    /// Every violation, in the order the rules found them
    pub errors: Vec<FieldError>,
}

impl AdmissionError {
    pub fn new(
        kind: ResourceKind,
        group: impl Into<String>,
        name: impl Into<String>,
        errors: Vec<FieldError>,
    ) -> Self {
        Self {
            kind,
            group: group.into(),
            name: name.into(),
            errors,
        }
    }
}

/// One error inline, several as `[e1, e2]`.
fn render_errors(errors: &[FieldError]) -> String {
    match errors {
        [only] => only.to_string(),
        errors => {
            let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();
            format!("[{}]", rendered.join(", "))
        }
    }
}
