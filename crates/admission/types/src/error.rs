//! Field errors and the ordered aggregator rules append to.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::path::FieldPath;
use crate::spec::ResourceKind;

/// Errors raised by the types themselves (not validation findings).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("unknown scaling granularity: {0:?}")]
    UnknownScalingGranularity(String),
}

/// What kind of rule a [`FieldError`] violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Field outside its closed set
    InvalidEnumValue,
    /// Two field groups that cannot both be set
    MutuallyExclusiveFields,
    /// Duration below zero
    NegativeDuration,
    /// Time boundary after the current instant
    FutureBoundary,
    /// Newest boundary precedes the oldest boundary
    InvertedRange,
    /// Time string does not match `YYYY-MM-DD HH [+/-XX]`
    MalformedTimeString,
    /// Two fields required to be equal are not
    FieldMismatch,
    /// Valid fields combined in a disallowed way
    IncompatibleCombination,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidEnumValue => "InvalidEnumValue",
            ErrorKind::MutuallyExclusiveFields => "MutuallyExclusiveFields",
            ErrorKind::NegativeDuration => "NegativeDuration",
            ErrorKind::FutureBoundary => "FutureBoundary",
            ErrorKind::InvertedRange => "InvertedRange",
            ErrorKind::MalformedTimeString => "MalformedTimeString",
            ErrorKind::FieldMismatch => "FieldMismatch",
            ErrorKind::IncompatibleCombination => "IncompatibleCombination",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rule violation, addressed to a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub path: FieldPath,
    /// The offending value as found in the spec
    pub value: Value,
    pub detail: String,
}

impl FieldError {
    pub fn new(
        kind: ErrorKind,
        path: FieldPath,
        value: impl Into<Value>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            path,
            value: value.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Invalid value: {}: {}", self.path, self.value, self.detail)
    }
}

/// Ordered, append-only list of field errors for one validation pass.
///
/// Nothing is ever removed or deduplicated: two rules that flag the same
/// path both show up, in the order they were pushed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrorList {
    scope: Option<ResourceKind>,
    errors: Vec<FieldError>,
}

impl FieldErrorList {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list that only accepts paths governed by `kind`.
    ///
    /// Pushing a foreign path is a defect in the calling rule and panics in
    /// every build profile.
    pub fn for_kind(kind: ResourceKind) -> Self {
        Self {
            scope: Some(kind),
            errors: Vec::new(),
        }
    }

    pub fn push(&mut self, error: FieldError) {
        if let Some(kind) = self.scope {
            assert!(
                kind.governs(&error.path),
                "rule addressed {} which is not a field of {}",
                error.path,
                kind
            );
        }
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.errors.iter().map(|e| e.kind).collect()
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.errors
    }
}
