//! Graph data structures for the URL link graph
//!
//! Uses `petgraph::StableGraph` so node and edge indices stay valid for
//! the lifetime of a conversion run. The graph is append-only: nothing
//! is ever removed or renumbered after insertion, which keeps the
//! 1-based ids carried in the weights aligned with insertion order.

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use serde::{Deserialize, Serialize};

/// A node in the link graph representing one distinct URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// 1-based identifier, assigned in first-seen order
    pub id: u32,
    /// The URL string, used verbatim as the GEXF label
    pub label: String,
}

/// A directed edge between two URLs (source → target)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// 1-based identifier, assigned in first-seen order of the dedup key
    pub id: u32,
}

/// The link graph
///
/// Wraps `StableGraph` behind an append-only API (private to enforce
/// encapsulation). Iteration order over nodes and edges equals
/// insertion order, which the GEXF serializer relies on.
pub struct Graph {
    inner: StableGraph<Node, Edge>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self {
            inner: StableGraph::new(),
        }
    }

    /// Add a node to the graph
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        self.inner.add_node(node)
    }

    /// Add a directed edge between two nodes
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, edge: Edge) -> EdgeIndex {
        self.inner.add_edge(from, to, edge)
    }

    /// Get a node by index
    pub fn node_weight(&self, index: NodeIndex) -> Option<&Node> {
        self.inner.node_weight(index)
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Get the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate over all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.inner.node_weights()
    }

    /// Iterate over all edges in insertion order, with endpoints resolved
    ///
    /// Returns (source_node, target_node, edge_weight) tuples. Endpoints
    /// always exist because edges are only added after both nodes.
    pub fn edges(&self) -> impl Iterator<Item = (&Node, &Node, &Edge)> {
        self.inner
            .edge_references()
            .map(|e| (&self.inner[e.source()], &self.inner[e.target()], e.weight()))
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
