//! Daemon library for the Altair project
//!
//! Serves the orchestration core over HTTP: `POST /healthcheck` accepts
//! a relationship map, runs one concurrent probe pass, and returns the
//! aggregated report with an optional graph rendering. The core itself
//! does no logging of results; the rendered table is logged here, at the
//! reporting boundary.

pub mod error;

pub use error::HttpError;

use altair_core::viz::GraphRenderer;
use altair_core::{
    report, CoreError, DependencyGraph, Orchestrator, SimulatedProber, SimulationSettings,
};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use schema::{DaemonConfig, HealthReport, SystemRelationships};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    orchestrator: Orchestrator,
    renderer: Arc<dyn GraphRenderer + Send + Sync>,
}

impl AppState {
    /// Wire up the default state: simulated prober plus SVG renderer
    #[must_use]
    pub fn new(settings: SimulationSettings) -> Self {
        Self {
            orchestrator: Orchestrator::new(Arc::new(SimulatedProber::new(settings))),
            renderer: Arc::new(altair_core::SvgRenderer),
        }
    }

    /// Build state from explicit parts (tests, real probes, no images)
    pub fn with_parts(
        orchestrator: Orchestrator,
        renderer: Arc<dyn GraphRenderer + Send + Sync>,
    ) -> Self {
        Self {
            orchestrator,
            renderer,
        }
    }
}

/// Resolve the daemon bind configuration from environment overrides
///
/// An unparseable port fails startup rather than being silently
/// replaced with the default.
pub fn resolve_config(
    host: Option<String>,
    port: Option<String>,
) -> altair_core::Result<DaemonConfig> {
    let mut config = DaemonConfig::default();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port.parse().map_err(|_| {
            CoreError::ConfigurationError(format!(
                "ALTAIR_PORT must be a port number, got '{}'",
                port
            ))
        })?;
    }
    Ok(config)
}

/// Build the daemon router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", post(healthcheck))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Run one orchestration over the posted relationship map
async fn healthcheck(
    State(state): State<AppState>,
    Json(body): Json<SystemRelationships>,
) -> Result<Json<HealthReport>, HttpError> {
    let started = Instant::now();

    let graph = DependencyGraph::from_relationships(&body.relationships);
    let mut report = state.orchestrator.run(&graph).await.map_err(HttpError::from)?;
    report.graph_image_base64 = state
        .renderer
        .render(&graph, &report.failed_components)
        .map_err(HttpError::from)?;

    info!(
        "System health check complete ({} components, {:.2}s){}",
        report.component_details.len(),
        started.elapsed().as_secs_f64(),
        report::format_table(&report.component_details)
    );

    Ok(Json(report))
}

/// Liveness endpoint for the daemon itself
async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_config_defaults_without_overrides() {
        let config = resolve_config(None, None).unwrap();
        assert_eq!(config, DaemonConfig::default());
    }

    #[test]
    fn resolve_config_applies_overrides() {
        let config =
            resolve_config(Some("0.0.0.0".to_string()), Some("9000".to_string())).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn resolve_config_rejects_bad_port() {
        let err = resolve_config(None, Some("not-a-port".to_string())).unwrap_err();
        assert!(err.to_string().contains("ALTAIR_PORT"));
        assert!(err.to_string().contains("not-a-port"));
    }
}
