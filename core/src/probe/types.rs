//! Core trait for health probing

use super::ProbeError;
use async_trait::async_trait;
use schema::ComponentDetail;

/// Trait for health probe implementations
///
/// Implemented by the simulated prober and by any real probe (TCP, HTTP,
/// exec) an embedder supplies. The orchestrator invokes `probe` exactly
/// once per component per run; implementations must not share mutable
/// state across concurrent invocations other than a thread-safe entropy
/// source.
#[async_trait]
pub trait Prober {
    /// Probe a single component
    ///
    /// Returns the probe outcome (UP or DOWN with a diagnostic). An `Err`
    /// means the probe itself failed to complete and is fatal to the
    /// whole orchestration run.
    async fn probe(&self, component: &str) -> Result<ComponentDetail, ProbeError>;
}
