//! Admission Types - shared vocabulary of the admission gate
//!
//! Resource specs, field paths, field errors, the ordered error list the
//! rule sets append to, and the verdict handed back to the lifecycle
//! framework.

#![deny(unsafe_code)]

pub mod error;
pub mod path;
pub mod spec;
pub mod verdict;

pub use error::{ErrorKind, FieldError, FieldErrorList, TypesError};
pub use path::FieldPath;
pub use spec::{
    paths, AutoscalerSpec, ResourceKind, ResourceSpec, ScalingGranularity, ScrutinizeSpec,
    SubclusterTemplate, API_GROUP,
};
pub use verdict::{Transition, ValidationVerdict};
