//! The validation gate.
//!
//! The gate is the single entry point the lifecycle framework calls. It picks
//! the rule set for the resource kind, runs every rule against the new
//! snapshot with one shared error list, and turns the result into a verdict.

use std::sync::Arc;

use admission_rules::{run_rules, RuleContext};
use admission_types::{FieldErrorList, ResourceSpec, Transition, ValidationVerdict};
use tracing::{debug, info};

use crate::audit::{AuditRecord, AuditSink, NoopAuditSink, TracingAuditSink};
use crate::clock::{Clock, SystemClock};
use crate::config::GateConfig;
use crate::error::AdmissionError;
use crate::request::AdmissionRequest;

/// Admission gate for VerticaAutoscaler and VerticaScrutinize resources.
///
/// Holds no mutable state; one gate can serve concurrent calls.
pub struct ValidationGate {
    config: GateConfig,
    clock: Arc<dyn Clock>,
    audit: Arc<dyn AuditSink>,
}

impl std::fmt::Debug for ValidationGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationGate")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for ValidationGate {
    fn default() -> Self {
        Self::new(GateConfig::default())
    }
}

impl ValidationGate {
    /// Gate on the system clock, auditing through `tracing` unless disabled.
    pub fn new(config: GateConfig) -> Self {
        let audit: Arc<dyn AuditSink> = if config.emit_audit_events {
            Arc::new(TracingAuditSink)
        } else {
            Arc::new(NoopAuditSink)
        };
        Self {
            config,
            clock: Arc::new(SystemClock),
            audit,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_audit_sink(mut self, audit: Arc<dyn AuditSink>) -> Self {
        self.audit = audit;
        self
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Validate one transition.
    ///
    /// `Delete` is always accepted. `Create` and `Update` run the full rule
    /// set of `new_spec`'s kind against `new_spec` alone; `old_spec` is not
    /// diffed, so an unchanged update validates exactly like a create.
    pub fn validate(
        &self,
        transition: Transition,
        new_spec: &ResourceSpec,
        old_spec: Option<&ResourceSpec>,
    ) -> ValidationVerdict {
        self.validate_named(transition, None, new_spec, old_spec)
    }

    pub fn on_create(&self, spec: &ResourceSpec) -> ValidationVerdict {
        self.validate(Transition::Create, spec, None)
    }

    pub fn on_update(&self, old_spec: &ResourceSpec, new_spec: &ResourceSpec) -> ValidationVerdict {
        self.validate(Transition::Update, new_spec, Some(old_spec))
    }

    pub fn on_delete(&self, spec: &ResourceSpec) -> ValidationVerdict {
        self.validate(Transition::Delete, spec, None)
    }

    /// Review a full admission request and translate the verdict into the
    /// framework's accept/reject form.
    pub fn admit(&self, request: &AdmissionRequest) -> Result<(), AdmissionError> {
        let verdict = self.validate_named(
            request.operation,
            Some(&request.name),
            &request.object,
            request.old_object.as_ref(),
        );
        verdict.into_result().map_err(|errors| {
            AdmissionError::new(
                request.object.kind(),
                self.config.api_group.as_str(),
                request.name.as_str(),
                errors,
            )
        })
    }

    fn validate_named(
        &self,
        transition: Transition,
        name: Option<&str>,
        new_spec: &ResourceSpec,
        old_spec: Option<&ResourceSpec>,
    ) -> ValidationVerdict {
        let kind = new_spec.kind();
        info!(
            kind = %kind,
            transition = %transition,
            name = name.unwrap_or(""),
            "validate {}",
            transition
        );

        let verdict = match transition {
            Transition::Delete => ValidationVerdict::Accepted,
            Transition::Create | Transition::Update => {
                if let Some(old) = old_spec {
                    debug!(
                        old_kind = %old.kind(),
                        "previous snapshot ignored by update-invariant rules"
                    );
                }
                let ctx =
                    RuleContext::new(self.clock.now()).with_lookback(self.config.lookback());
                let mut errs = FieldErrorList::for_kind(kind);
                run_rules(new_spec, &ctx, &mut errs);
                ValidationVerdict::from(errs)
            }
        };

        if self.config.emit_audit_events {
            self.audit
                .record(&AuditRecord::new(kind, transition, name, &verdict));
        }
        verdict
    }
}
