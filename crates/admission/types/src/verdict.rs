//! Lifecycle transitions and the verdict returned for them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ErrorKind, FieldError, FieldErrorList};

/// Lifecycle transition the gate is asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Create => write!(f, "create"),
            Transition::Update => write!(f, "update"),
            Transition::Delete => write!(f, "delete"),
        }
    }
}

/// Outcome of one validation call. Never partial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationVerdict {
    Accepted,
    Rejected(Vec<FieldError>),
}

impl ValidationVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationVerdict::Accepted)
    }

    pub fn is_rejected(&self) -> bool {
        !self.is_accepted()
    }

    /// Errors in insertion order; empty when accepted.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            ValidationVerdict::Accepted => &[],
            ValidationVerdict::Rejected(errors) => errors.as_slice(),
        }
    }

    pub fn error_kinds(&self) -> Vec<ErrorKind> {
        self.errors().iter().map(|e| e.kind).collect()
    }

    pub fn into_result(self) -> Result<(), Vec<FieldError>> {
        match self {
            ValidationVerdict::Accepted => Ok(()),
            ValidationVerdict::Rejected(errors) => Err(errors),
        }
    }
}

impl From<FieldErrorList> for ValidationVerdict {
    /// Accepted iff the list is empty.
    fn from(list: FieldErrorList) -> Self {
        if list.is_empty() {
            ValidationVerdict::Accepted
        } else {
            ValidationVerdict::Rejected(list.into_vec())
        }
    }
}
