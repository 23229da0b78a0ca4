//! Admission Gate - accept/reject decisions for resource transitions
//!
//! The [`ValidationGate`] is what the lifecycle framework talks to:
//!
//! - `on_create` / `on_update` run the resource kind's rule set against the
//!   new snapshot and return every violation at once
//! - `on_delete` always accepts
//! - `admit` wraps the above for a full [`AdmissionRequest`] and renders a
//!   rejection as an [`AdmissionError`]
//!
//! Wall-clock time comes from an injected [`Clock`] and verdicts are reported
//! to an injected [`AuditSink`].

#![deny(unsafe_code)]

pub mod audit;
pub mod clock;
pub mod config;
pub mod error;
pub mod gate;
pub mod request;

pub use audit::{AuditRecord, AuditSink, NoopAuditSink, TracingAuditSink};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::GateConfig;
pub use error::{AdmissionError, GateError, GateResult};
pub use gate::ValidationGate;
pub use request::AdmissionRequest;

pub use admission_types::{
    ErrorKind, FieldError, FieldPath, ResourceKind, ResourceSpec, Transition, ValidationVerdict,
};
