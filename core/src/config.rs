//! Configuration loading and validation for the simulation settings
//!
//! This module parses a TOML configuration into [`SimulationSettings`],
//! applies sane defaults via serde, and performs strict validation with
//! field-path error messages.

use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default simulated failure rate (probability per probe)
pub const DEFAULT_FAILURE_RATE: f64 = 0.15;

/// Default base probe latency in milliseconds; per-probe latency is
/// drawn uniformly from `[base, base * 4]`
pub const DEFAULT_BASE_LATENCY_MS: u64 = 50;

/// Tuning knobs for the simulated prober
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSettings {
    /// Probability in `[0.0, 1.0]` that a probe reports DOWN
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,
    /// Lower bound of the simulated latency range, in milliseconds
    #[serde(default = "default_base_latency_ms")]
    pub base_latency_ms: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            failure_rate: default_failure_rate(),
            base_latency_ms: default_base_latency_ms(),
        }
    }
}

fn default_failure_rate() -> f64 {
    DEFAULT_FAILURE_RATE
}

fn default_base_latency_ms() -> u64 {
    DEFAULT_BASE_LATENCY_MS
}

impl SimulationSettings {
    /// Latency range a probe draws from: `[base, base * 4]`
    #[must_use]
    pub fn latency_range(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.base_latency_ms),
            Duration::from_millis(self.base_latency_ms.saturating_mul(4)),
        )
    }

    /// Validate the settings and return `Result<()>` with field-path errors
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(CoreError::ValidationError(format!(
                "simulation.failureRate: must be within 0.0..=1.0, got {}",
                self.failure_rate
            )));
        }
        if self.base_latency_ms == 0 {
            return Err(CoreError::ValidationError(
                "simulation.baseLatencyMs: must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level TOML structure for the orchestration service configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsFile {
    /// Simulated prober tuning, `[simulation]` table
    #[serde(default)]
    pub simulation: SimulationSettings,
}

/// Load settings from a TOML file path
pub fn load_settings_from_toml_path(path: impl AsRef<Path>) -> Result<SettingsFile> {
    let data = fs::read_to_string(&path).map_err(|e| {
        CoreError::ConfigurationError(format!("Failed to read config {:?}: {}", path.as_ref(), e))
    })?;
    load_settings_from_toml_str(&data)
}

/// Load settings from a TOML string
pub fn load_settings_from_toml_str(input: &str) -> Result<SettingsFile> {
    let cfg: SettingsFile = toml::from_str(input)
        .map_err(|e| CoreError::ConfigurationError(format!("TOML parse error: {}", e)))?;
    cfg.simulation.validate()?;
    Ok(cfg)
}
