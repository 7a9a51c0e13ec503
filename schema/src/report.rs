//! Health report types for the Altair orchestration core
//!
//! This module contains the request and response structures exchanged at
//! the API boundary: the relationship map describing the system under
//! test, per-component probe outcomes, and the aggregated report.
//!
//! ## Wire format
//!
//! Field names follow the established health-check wire format
//! (`system_status`, `component_details`, `failed_components`,
//! `graph_image_base64`), with statuses rendered as `"UP"` / `"DOWN"`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Health status of a single component or of the whole system
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// The component responded to its probe
    Up,
    /// The component failed its probe
    Down,
}

impl Status {
    /// Whether this status represents a failed probe
    #[must_use]
    pub fn is_down(self) -> bool {
        matches!(self, Status::Down)
    }
}

/// Input structure describing the system as a parent -> children map
///
/// Every key and every listed child becomes a component of the system,
/// so leaf components need not appear as keys themselves.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SystemRelationships {
    /// Map of parent component id to its dependency ids
    pub relationships: HashMap<String, Vec<String>>,
}

/// Probe outcome for a single component
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ComponentDetail {
    /// Unique component identifier
    pub component: String,
    /// Probe outcome
    pub status: Status,
    /// Diagnostic detail; `"OK"` for healthy components
    pub details: String,
}

impl ComponentDetail {
    /// Build a healthy detail entry for `component`
    pub fn up(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            status: Status::Up,
            details: "OK".to_string(),
        }
    }

    /// Build a failed detail entry for `component` with a diagnostic
    pub fn down(component: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            status: Status::Down,
            details: details.into(),
        }
    }
}

/// The final aggregated report returned by one orchestration run
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthReport {
    /// `Down` if any component failed its probe, `Up` otherwise
    pub system_status: Status,
    /// One entry per unique component, sorted by identifier ascending
    pub component_details: Vec<ComponentDetail>,
    /// Identifiers of failed components, in `component_details` order
    pub failed_components: Vec<String>,
    /// Base64-encoded rendering of the dependency graph, if produced
    pub graph_image_base64: Option<String>,
}

impl HealthReport {
    /// An empty report: no components, system considered up
    #[must_use]
    pub fn empty() -> Self {
        Self {
            system_status: Status::Up,
            component_details: Vec::new(),
            failed_components: Vec::new(),
            graph_image_base64: None,
        }
    }
}
