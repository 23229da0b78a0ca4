//! Gate configuration.

use admission_rules::DEFAULT_LOOKBACK_HOURS;
use admission_types::API_GROUP;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{GateError, GateResult};

/// Configuration for the validation gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Hours before "now" used as the oldest log boundary when a
    /// scrutinize spec names none.
    pub default_lookback_hours: i64,

    /// Whether verdicts are reported to the audit sink.
    pub emit_audit_events: bool,

    /// API group used when rendering admission rejections.
    pub api_group: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            default_lookback_hours: DEFAULT_LOOKBACK_HOURS,
            emit_audit_events: true,
            api_group: API_GROUP.to_string(),
        }
    }
}

impl GateConfig {
    /// Parse and check a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> GateResult<Self> {
        let config: GateConfig =
            toml::from_str(contents).map_err(|e| GateError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, or return the defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> GateResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> GateResult<()> {
        if self.default_lookback_hours <= 0 {
            return Err(GateError::Config(format!(
                "default_lookback_hours must be positive, got {}",
                self.default_lookback_hours
            )));
        }
        if Duration::try_hours(self.default_lookback_hours).is_none() {
            return Err(GateError::Config(format!(
                "default_lookback_hours is out of range, got {}",
                self.default_lookback_hours
            )));
        }
        if self.api_group.is_empty() {
            return Err(GateError::Config("api_group must not be empty".into()));
        }
        Ok(())
    }

    pub fn with_default_lookback_hours(mut self, hours: i64) -> Self {
        self.default_lookback_hours = hours;
        self
    }

    pub fn with_emit_audit_events(mut self, emit: bool) -> Self {
        self.emit_audit_events = emit;
        self
    }

    /// The look-back as a duration, saturating when the hours do not fit.
    pub fn lookback(&self) -> Duration {
        Duration::try_hours(self.default_lookback_hours).unwrap_or(Duration::MAX)
    }
}
