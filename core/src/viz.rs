//! Graph visualization boundary
//!
//! Renders the dependency graph as an image with failed nodes
//! highlighted, returned as an opaque base64 blob for embedding in the
//! JSON report. The orchestrator never depends on this; the boundary
//! picks a renderer (or [`NullRenderer`] to skip images entirely).

use crate::graph::DependencyGraph;
use crate::Result;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::collections::HashSet;

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 700.0;
const NODE_RADIUS: f64 = 40.0;

/// Color for healthy nodes
const UP_COLOR: &str = "#7AC142";
/// Color for failed nodes
const DOWN_COLOR: &str = "red";

/// Capability for turning a graph plus failed-node set into an image
///
/// Returns `None` when the implementation does not produce images, in
/// which case the report carries a null `graph_image_base64`.
pub trait GraphRenderer {
    /// Render `graph` with the nodes in `failed` highlighted
    fn render(&self, graph: &DependencyGraph, failed: &[String]) -> Result<Option<String>>;
}

/// Renderer that skips visualization entirely
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl GraphRenderer for NullRenderer {
    fn render(&self, _graph: &DependencyGraph, _failed: &[String]) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Self-contained SVG renderer
///
/// Lays the nodes out on a circle, draws directed edges between them,
/// fills failed nodes red and healthy nodes green, and base64-encodes
/// the resulting SVG document.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    fn node_positions(graph: &DependencyGraph) -> Vec<(String, f64, f64)> {
        let count = graph.node_count();
        let cx = WIDTH / 2.0;
        let cy = HEIGHT / 2.0;
        let radius = (HEIGHT / 2.0) - 2.5 * NODE_RADIUS;

        graph
            .nodes()
            .enumerate()
            .map(|(i, id)| {
                if count == 1 {
                    return (id.to_string(), cx, cy);
                }
                let angle = std::f64::consts::TAU * (i as f64) / (count as f64);
                (
                    id.to_string(),
                    cx + radius * angle.cos(),
                    cy + radius * angle.sin(),
                )
            })
            .collect()
    }

    fn build_svg(graph: &DependencyGraph, failed: &HashSet<&str>) -> String {
        let positions = Self::node_positions(graph);
        let find = |id: &str| positions.iter().find(|(n, _, _)| n == id);

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             viewBox=\"0 0 {} {}\">",
            WIDTH, HEIGHT, WIDTH, HEIGHT
        ));
        svg.push_str(
            "<defs><marker id=\"arrow\" markerWidth=\"10\" markerHeight=\"10\" refX=\"8\" \
             refY=\"3\" orient=\"auto\"><path d=\"M0,0 L8,3 L0,6 Z\" fill=\"gray\"/>\
             </marker></defs>",
        );
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"40\" text-anchor=\"middle\" font-size=\"24\">\
             System Dependency Health Check</text>",
            WIDTH / 2.0
        ));

        // Edges first so nodes paint over the line ends
        for (parent, child) in graph.edges() {
            let (Some((_, x1, y1)), Some((_, x2, y2))) = (find(parent), find(child)) else {
                continue;
            };
            if parent == child {
                // Self-loop: a small circle hanging off the node
                svg.push_str(&format!(
                    "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" fill=\"none\" \
                     stroke=\"gray\"/>",
                    x1,
                    y1 - 1.4 * NODE_RADIUS,
                    NODE_RADIUS / 2.0
                ));
                continue;
            }
            // Shorten the line so the arrowhead stops at the node edge
            let dx = x2 - x1;
            let dy = y2 - y1;
            let len = (dx * dx + dy * dy).sqrt().max(1.0);
            let (ex, ey) = (
                x2 - dx / len * (NODE_RADIUS + 4.0),
                y2 - dy / len * (NODE_RADIUS + 4.0),
            );
            svg.push_str(&format!(
                "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"gray\" \
                 stroke-width=\"1.5\" marker-end=\"url(#arrow)\"/>",
                x1, y1, ex, ey
            ));
        }

        for (id, x, y) in &positions {
            let fill = if failed.contains(id.as_str()) {
                DOWN_COLOR
            } else {
                UP_COLOR
            };
            svg.push_str(&format!(
                "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" fill=\"{}\"/>",
                x, y, NODE_RADIUS, fill
            ));
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" dominant-baseline=\"middle\" \
                 font-size=\"14\" fill=\"black\">{}</text>",
                x,
                y,
                escape_text(id)
            ));
        }

        svg.push_str("</svg>");
        svg
    }
}

impl GraphRenderer for SvgRenderer {
    fn render(&self, graph: &DependencyGraph, failed: &[String]) -> Result<Option<String>> {
        if graph.is_empty() {
            return Ok(None);
        }
        let failed: HashSet<&str> = failed.iter().map(String::as_str).collect();
        let svg = Self::build_svg(graph, &failed);
        Ok(Some(BASE64.encode(svg.as_bytes())))
    }
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sample_graph() -> DependencyGraph {
        let mut relationships = HashMap::new();
        relationships.insert("A".to_string(), vec!["B".to_string(), "C".to_string()]);
        DependencyGraph::from_relationships(&relationships)
    }

    fn decode(encoded: &str) -> String {
        String::from_utf8(BASE64.decode(encoded).unwrap()).unwrap()
    }

    #[test]
    fn null_renderer_skips_image() {
        let rendered = NullRenderer.render(&sample_graph(), &[]).unwrap();
        assert!(rendered.is_none());
    }

    #[test]
    fn svg_renderer_emits_base64_svg() {
        let rendered = SvgRenderer.render(&sample_graph(), &[]).unwrap().unwrap();
        let svg = decode(&rendered);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("System Dependency Health Check"));
    }

    #[test]
    fn failed_nodes_are_highlighted() {
        let rendered = SvgRenderer
            .render(&sample_graph(), &["B".to_string()])
            .unwrap()
            .unwrap();
        let svg = decode(&rendered);
        assert!(svg.contains("fill=\"red\""));
        assert!(svg.contains("fill=\"#7AC142\""));
    }

    #[test]
    fn empty_graph_renders_nothing() {
        let rendered = SvgRenderer.render(&DependencyGraph::new(), &[]).unwrap();
        assert!(rendered.is_none());
    }

    #[test]
    fn node_labels_are_escaped() {
        let mut relationships = HashMap::new();
        relationships.insert("a<b".to_string(), vec!["c&d".to_string()]);
        let graph = DependencyGraph::from_relationships(&relationships);
        let rendered = SvgRenderer.render(&graph, &[]).unwrap().unwrap();
        let svg = decode(&rendered);
        assert!(svg.contains("a&lt;b"));
        assert!(svg.contains("c&amp;d"));
    }
}
