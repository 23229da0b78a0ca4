//! Admission requests as delivered by the lifecycle framework.

use admission_types::{ResourceSpec, Transition};
use serde::{Deserialize, Serialize};

/// One admission review: a transition plus the object snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionRequest {
    pub operation: Transition,
    pub name: String,
    pub object: ResourceSpec,
    /// Previous snapshot; only present on updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_object: Option<ResourceSpec>,
}

impl AdmissionRequest {
    pub fn create(name: impl Into<String>, object: impl Into<ResourceSpec>) -> Self {
        Self {
            operation: Transition::Create,
            name: name.into(),
            object: object.into(),
            old_object: None,
        }
    }

    pub fn update(
        name: impl Into<String>,
        old: impl Into<ResourceSpec>,
        new: impl Into<ResourceSpec>,
    ) -> Self {
        Self {
            operation: Transition::Update,
            name: name.into(),
            object: new.into(),
            old_object: Some(old.into()),
        }
    }

    pub fn delete(name: impl Into<String>, object: impl Into<ResourceSpec>) -> Self {
        Self {
            operation: Transition::Delete,
            name: name.into(),
            object: object.into(),
            old_object: None,
        }
    }
}
