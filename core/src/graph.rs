//! Dependency graph construction from a relationship map
//!
//! The graph is directed, parent -> child, built from the input mapping
//! exactly as given: duplicate edges collapse, self-loops and cycles are
//! accepted, and every identifier appearing anywhere in the map becomes
//! a node. Despite the "dependency" name the orchestrator never walks
//! edges; they exist for the node set and for visualization.

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Directed graph over component identifiers
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<String, ()>,
    indices: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a parent -> children relationship map
    ///
    /// Both endpoints of every listed relationship become nodes, so leaf
    /// components (children that never appear as keys) are included. An
    /// empty map yields an empty graph. No acyclicity check is made.
    #[must_use]
    pub fn from_relationships(relationships: &HashMap<String, Vec<String>>) -> Self {
        let mut graph = Self::new();
        for (parent, children) in relationships {
            for child in children {
                graph.add_edge(parent, child);
            }
            // A parent with no children is still a component
            if children.is_empty() {
                graph.intern(parent);
            }
        }
        graph
    }

    /// Get or insert the node index for `id`
    fn intern(&mut self, id: &str) -> NodeIndex {
        if let Some(&ix) = self.indices.get(id) {
            return ix;
        }
        let ix = self.graph.add_node(id.to_string());
        self.indices.insert(id.to_string(), ix);
        ix
    }

    /// Insert a parent -> child edge, interning both endpoints
    ///
    /// Duplicate edges are idempotent; the edge set is a set, not a
    /// multiset.
    pub fn add_edge(&mut self, parent: &str, child: &str) {
        let a = self.intern(parent);
        let b = self.intern(child);
        self.graph.update_edge(a, b, ());
    }

    /// Number of unique components in the graph
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of unique edges in the graph
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has no components
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Whether `id` is a component of the graph
    #[must_use]
    pub fn contains_node(&self, id: &str) -> bool {
        self.indices.contains_key(id)
    }

    /// Whether the graph holds a parent -> child edge
    #[must_use]
    pub fn contains_edge(&self, parent: &str, child: &str) -> bool {
        match (self.indices.get(parent), self.indices.get(child)) {
            (Some(&a), Some(&b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    /// Iterate over all component identifiers, in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Iterate over all (parent, child) edges
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_indices().filter_map(|e| {
            let (a, b) = self.graph.edge_endpoints(e)?;
            Some((self.graph[a].as_str(), self.graph[b].as_str()))
        })
    }
}
