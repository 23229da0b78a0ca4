//! Field paths for addressing validation errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered location of a field inside a resource, e.g. `spec.template.serviceName`.
///
/// Paths are immutable: `child` returns a new path and leaves the receiver
/// untouched, so a prefix can be shared between rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Start a path at a root field.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            segments: vec![root.into()],
        }
    }

    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}
