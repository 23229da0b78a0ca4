//! Audit hook the gate reports each verdict to.

use admission_types::{ResourceKind, Transition, ValidationVerdict};
use serde::Serialize;
use tracing::{info, warn};

/// What the gate decided for one call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditRecord {
    pub kind: ResourceKind,
    pub transition: Transition,
    /// Resource name, when the caller supplied one
    pub name: Option<String>,
    pub accepted: bool,
    pub error_count: usize,
}

impl AuditRecord {
    pub fn new(
        kind: ResourceKind,
        transition: Transition,
        name: Option<&str>,
        verdict: &ValidationVerdict,
    ) -> Self {
        Self {
            kind,
            transition,
            name: name.map(str::to_string),
            accepted: verdict.is_accepted(),
            error_count: verdict.errors().len(),
        }
    }
}

/// Receiver for audit records. Must not influence the verdict.
pub trait AuditSink: Send + Sync {
    fn record(&self, record: &AuditRecord);
}

/// Emits records as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, record: &AuditRecord) {
        let name = record.name.as_deref().unwrap_or("");
        if record.accepted {
            info!(
                kind = %record.kind,
                transition = %record.transition,
                name = %name,
                "admission accepted"
            );
        } else {
            warn!(
                kind = %record.kind,
                transition = %record.transition,
                name = %name,
                errors = record.error_count,
                "admission rejected"
            );
        }
    }
}

/// Discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record(&self, _record: &AuditRecord) {}
}
