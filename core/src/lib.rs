//! Core functionality for the Altair project
//!
//! This crate contains the health-check orchestration engine: graph
//! construction from a relationship map, concurrent per-component
//! probing, aggregation into a system-wide report, and the report
//! rendering helpers shared by the daemon and CLI boundaries.

pub mod config;
pub mod error;
pub mod graph;
pub mod orchestrator;
pub mod probe;
pub mod report;
pub mod viz;


// Re-export schema types for convenience
pub use schema::*;

pub use config::{SettingsFile, SimulationSettings};
pub use error::{CoreError, Result};
pub use graph::DependencyGraph;
pub use orchestrator::Orchestrator;
pub use probe::{ProbeError, Prober, SimulatedProber};
pub use viz::{GraphRenderer, NullRenderer, SvgRenderer};

/// Core utilities and helper functions
pub mod utils {
    use tracing::info;

    /// Initialize tracing for the application
    pub fn init_tracing(level: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| crate::CoreError::InitializationError(e.to_string()))?;

        info!("Tracing initialized with level: {}", level);
        Ok(())
    }
}
