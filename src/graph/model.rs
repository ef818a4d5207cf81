use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::snapshot::GraphSnapshot;

/// A directed edge between two named nodes
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<W> {
    pub from: String,
    pub to: String,
    pub weight: W,
}

/// The mutable graph the engine computes over.
///
/// Nodes and edges are kept in insertion order, and that order is canonical:
/// it drives Bellman-Ford pass order, Dijkstra tie-breaks and the row/column
/// order of the distance matrix. At most one edge exists per ordered node
/// pair; inserting a duplicate is a no-op.
///
/// Every mutator returns `true` only when the model actually changed, so
/// callers can tell effective mutations from rejected or redundant ones.
#[derive(Debug, Clone, Default)]
pub struct GraphModel<W>
where
    W: Float + Zero + Debug + Copy,
{
    nodes: Vec<String>,
    edges: Vec<Edge<W>>,
}

impl<W> GraphModel<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        GraphModel {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Returns the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the node names in insertion order
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Returns the edges in insertion order
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Returns true if a node with this name exists
    pub fn has_node(&self, name: &str) -> bool {
        self.nodes.iter().any(|n| n == name)
    }

    /// Returns true if the ordered pair `from -> to` has an edge
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges.iter().any(|e| e.from == from && e.to == to)
    }

    /// Gets the weight of an edge if it exists
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<W> {
        self.edges
            .iter()
            .find(|e| e.from == from && e.to == to)
            .map(|e| e.weight)
    }

    /// Adds a node. Empty names and duplicates are rejected.
    pub fn add_node(&mut self, name: &str) -> bool {
        if name.is_empty() || self.has_node(name) {
            return false;
        }
        self.nodes.push(name.to_string());
        true
    }

    /// Removes a node and every edge incident to it
    pub fn remove_node(&mut self, name: &str) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n != name);
        if self.nodes.len() == before {
            return false;
        }
        self.edges.retain(|e| e.from != name && e.to != name);
        true
    }

    /// Adds a directed edge between existing nodes.
    ///
    /// Rejected when either endpoint is unknown, the weight is not finite,
    /// or the ordered pair already has an edge. Weights may be negative;
    /// self-loops are allowed (a negative self-loop is a negative cycle and
    /// will be rejected at compute time, not here).
    pub fn add_edge(&mut self, from: &str, to: &str, weight: W) -> bool {
        if !self.has_node(from) || !self.has_node(to) || !weight.is_finite() {
            return false;
        }
        if self.has_edge(from, to) {
            return false;
        }
        self.edges.push(Edge {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        });
        true
    }

    /// Removes the edge `from -> to` if present
    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| !(e.from == from && e.to == to));
        self.edges.len() < before
    }

    /// Updates the weight of an existing edge; the weight must be finite
    pub fn update_edge_weight(&mut self, from: &str, to: &str, weight: W) -> bool {
        if !weight.is_finite() {
            return false;
        }
        for edge in self.edges.iter_mut() {
            if edge.from == from && edge.to == to {
                edge.weight = weight;
                return true;
            }
        }
        false
    }

    /// Removes every node and edge
    pub fn clear(&mut self) -> bool {
        if self.nodes.is_empty() && self.edges.is_empty() {
            return false;
        }
        self.nodes.clear();
        self.edges.clear();
        true
    }

    /// Takes an immutable snapshot of the current nodes and edges
    pub fn snapshot(&self) -> GraphSnapshot<W> {
        GraphSnapshot::from_model(self)
    }
}
