//! Concurrent health-check orchestration
//!
//! One orchestration run fans a probe out over every unique node of the
//! dependency graph, waits for the whole set, and folds the outcomes into
//! a [`HealthReport`]. Edges are never consulted: probe outcomes are
//! independent, so a flat fan-out is strictly faster than any
//! dependency-ordered walk. The only ordering guarantee is post-hoc —
//! the final detail list is sorted by component identifier.

use crate::graph::DependencyGraph;
use crate::probe::Prober;
use crate::{CoreError, Result};
use schema::{ComponentDetail, HealthReport, Status};
use std::sync::Arc;
use tracing::debug;

/// Drives one concurrent probe pass over a dependency graph
#[derive(Clone)]
pub struct Orchestrator {
    prober: Arc<dyn Prober + Send + Sync>,
}

impl Orchestrator {
    /// Create an orchestrator around a probe capability
    pub fn new(prober: Arc<dyn Prober + Send + Sync>) -> Self {
        Self { prober }
    }

    /// Probe every component of `graph` concurrently and aggregate
    ///
    /// # Errors
    /// Returns [`CoreError::ProbeFault`] if any probe fails to complete
    /// (an error or a panicked task, as opposed to a DOWN result). There
    /// is no partial report: the system status is only meaningful over a
    /// complete result set.
    pub async fn run(&self, graph: &DependencyGraph) -> Result<HealthReport> {
        if graph.is_empty() {
            return Ok(HealthReport::empty());
        }

        let nodes: Vec<String> = graph.nodes().map(str::to_string).collect();
        debug!("fanning out {} probes", nodes.len());

        let handles: Vec<_> = nodes
            .into_iter()
            .map(|node| {
                let prober = Arc::clone(&self.prober);
                tokio::spawn(async move { prober.probe(&node).await })
            })
            .collect();

        // Join barrier: nothing below runs until every probe has returned
        let mut details = Vec::with_capacity(handles.len());
        for joined in futures::future::join_all(handles).await {
            let outcome = joined
                .map_err(|e| CoreError::ProbeFault(format!("probe task failed: {}", e)))?;
            details.push(outcome.map_err(|e| CoreError::ProbeFault(e.to_string()))?);
        }

        Ok(assemble_report(details))
    }
}

/// Fold raw probe outcomes into the final sorted report
///
/// The system is DOWN iff at least one component is DOWN; this is a pure
/// function of the result set. `failed_components` is the DOWN
/// subsequence of the sorted details, preserving their relative order.
fn assemble_report(mut details: Vec<ComponentDetail>) -> HealthReport {
    details.sort_by(|a, b| a.component.cmp(&b.component));

    let failed: Vec<String> = details
        .iter()
        .filter(|d| d.status.is_down())
        .map(|d| d.component.clone())
        .collect();

    let system_status = if failed.is_empty() {
        Status::Up
    } else {
        Status::Down
    };
    debug!(
        "aggregated {} components, {} failed",
        details.len(),
        failed.len()
    );

    HealthReport {
        system_status,
        component_details: details,
        failed_components: failed,
        graph_image_base64: None,
    }
}
