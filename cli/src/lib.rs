//! CLI support library for Altair
//!
//! Runs one health-check orchestration in-process from a relationships
//! JSON file. The binary in `main.rs` layers argument parsing and output
//! formatting on top of [`run_check`].

pub mod error;

pub use error::{CliError, Result};

use altair_core::viz::GraphRenderer;
use altair_core::{
    DependencyGraph, Orchestrator, SimulatedProber, SimulationSettings, SvgRenderer,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use schema::{HealthReport, SystemRelationships};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Options for one local check run
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Path to the relationships JSON file
    pub input: PathBuf,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
    /// Override for the simulated failure rate
    pub failure_rate: Option<f64>,
    /// Override for the base latency in milliseconds
    pub latency_ms: Option<u64>,
    /// Whether to render the graph image into the report
    pub render_graph: bool,
}

/// Load a relationship map from a JSON file
///
/// Accepts either the wrapped API shape `{"relationships": {...}}` or a
/// bare object of parent -> children, for convenience at the shell.
pub fn load_relationships(path: &PathBuf) -> Result<HashMap<String, Vec<String>>> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| CliError::InputError(format!("Failed to read {:?}: {}", path, e)))?;

    if let Ok(wrapped) = serde_json::from_str::<SystemRelationships>(&data) {
        return Ok(wrapped.relationships);
    }
    serde_json::from_str::<HashMap<String, Vec<String>>>(&data).map_err(|e| {
        CliError::InputError(format!(
            "{:?} is not a relationships map (string -> [string]): {}",
            path, e
        ))
    })
}

/// Run one orchestration over the relationships file
pub async fn run_check(opts: &CheckOptions) -> Result<HealthReport> {
    let relationships = load_relationships(&opts.input)?;
    let graph = DependencyGraph::from_relationships(&relationships);
    debug!(
        "loaded {} components, {} edges from {:?}",
        graph.node_count(),
        graph.edge_count(),
        opts.input
    );

    let mut settings = SimulationSettings::default();
    if let Some(rate) = opts.failure_rate {
        settings.failure_rate = rate;
    }
    if let Some(latency) = opts.latency_ms {
        settings.base_latency_ms = latency;
    }
    settings.validate().map_err(CliError::CheckFailed)?;

    let prober = match opts.seed {
        Some(seed) => SimulatedProber::seeded(settings, seed),
        None => SimulatedProber::new(settings),
    };
    let mut report = Orchestrator::new(Arc::new(prober)).run(&graph).await?;

    if opts.render_graph {
        report.graph_image_base64 = SvgRenderer.render(&graph, &report.failed_components)?;
    }

    Ok(report)
}

/// Write the report's graph image to `path`, decoded from base64
///
/// Returns `false` without touching the filesystem when the report
/// carries no image (for example an empty graph, where the renderer
/// produces nothing).
pub fn write_graph_svg(report: &HealthReport, path: &Path) -> Result<bool> {
    let Some(encoded) = report.graph_image_base64.as_deref() else {
        return Ok(false);
    };
    let svg = BASE64.decode(encoded).map_err(|e| {
        CliError::InputError(format!("Graph image was not valid base64: {}", e))
    })?;
    std::fs::write(path, svg)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::Status;
    use std::io::Write;

    fn options(input: PathBuf) -> CheckOptions {
        CheckOptions {
            input,
            seed: Some(1),
            failure_rate: Some(0.0),
            latency_ms: Some(1),
            render_graph: false,
        }
    }

    fn write_input(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn checks_a_bare_relationship_map() {
        let file = write_input(r#"{"A":["B","C"],"B":["D"]}"#);
        let report = run_check(&options(file.path().to_path_buf())).await.unwrap();

        assert_eq!(report.system_status, Status::Up);
        assert_eq!(report.component_details.len(), 4);
    }

    #[tokio::test]
    async fn checks_the_wrapped_api_shape() {
        let file = write_input(r#"{"relationships":{"X":["Y"]}}"#);
        let mut opts = options(file.path().to_path_buf());
        opts.failure_rate = Some(1.0);
        let report = run_check(&opts).await.unwrap();

        assert_eq!(report.system_status, Status::Down);
        assert_eq!(report.failed_components, vec!["X", "Y"]);
    }

    #[tokio::test]
    async fn render_flag_attaches_an_image() {
        let file = write_input(r#"{"A":["B"]}"#);
        let mut opts = options(file.path().to_path_buf());
        opts.render_graph = true;
        let report = run_check(&opts).await.unwrap();
        assert!(report.graph_image_base64.is_some());
    }

    #[tokio::test]
    async fn empty_graph_produces_no_image_file() {
        let file = write_input("{}");
        let mut opts = options(file.path().to_path_buf());
        opts.render_graph = true;
        let report = run_check(&opts).await.unwrap();
        assert!(report.graph_image_base64.is_none());

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("graph.svg");
        assert!(!write_graph_svg(&report, &out).unwrap());
        assert!(!out.exists(), "no file should be written without an image");
    }

    #[tokio::test]
    async fn graph_file_holds_the_decoded_svg() {
        let file = write_input(r#"{"A":["B"]}"#);
        let mut opts = options(file.path().to_path_buf());
        opts.render_graph = true;
        let report = run_check(&opts).await.unwrap();

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("graph.svg");
        assert!(write_graph_svg(&report, &out).unwrap());
        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.starts_with("<svg"));
    }

    #[tokio::test]
    async fn rejects_malformed_input() {
        let file = write_input(r#"{"A": [1, 2]}"#);
        let err = run_check(&options(file.path().to_path_buf())).await.unwrap_err();
        assert!(matches!(err, CliError::InputError(_)));
    }

    #[tokio::test]
    async fn rejects_invalid_overrides() {
        let file = write_input(r#"{"A":["B"]}"#);
        let mut opts = options(file.path().to_path_buf());
        opts.failure_rate = Some(2.0);
        let err = run_check(&opts).await.unwrap_err();
        assert!(err.to_string().contains("failureRate"));
    }
}
