//! Schema definitions for Altair
//!
//! This crate contains shared data structures and schemas used across
//! the entire Altair ecosystem. All types here implement JSON Schema
//! generation for external consumption.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod report;


pub use report::{ComponentDetail, HealthReport, Status, SystemRelationships};

/// Configuration structure for the daemon
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DaemonConfig {
    /// Host to bind the daemon to
    pub host: String,
    /// Port to bind the daemon to
    pub port: u16,
    /// Log level for the daemon
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
