use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::graph::model::GraphModel;

/// An edge with both endpoints resolved to node positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedEdge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

/// An immutable view of the graph taken at one instant.
///
/// Node names are resolved to dense indices (their position in the model's
/// insertion order); all algorithms run on these indices and translate back
/// to names only at the query boundary. The snapshot keeps the true edge
/// weights, which the orchestrator needs for distance correction and path
/// verification after reweighting.
#[derive(Debug, Clone)]
pub struct GraphSnapshot<W>
where
    W: Float + Zero + Debug + Copy,
{
    nodes: Vec<String>,
    index: HashMap<String, usize>,
    edges: Vec<IndexedEdge<W>>,
}

impl<W> GraphSnapshot<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn from_model(model: &GraphModel<W>) -> Self {
        let nodes: Vec<String> = model.nodes().to_vec();
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, name) in nodes.iter().enumerate() {
            index.insert(name.clone(), i);
        }

        let mut edges = Vec::with_capacity(model.edge_count());
        for edge in model.edges() {
            match (index.get(&edge.from), index.get(&edge.to)) {
                (Some(&from), Some(&to)) => edges.push(IndexedEdge {
                    from,
                    to,
                    weight: edge.weight,
                }),
                // The model never keeps an edge without both endpoints
                _ => debug_assert!(false, "edge references a node missing from the model"),
            }
        }

        GraphSnapshot {
            nodes,
            index,
            edges,
        }
    }

    /// Returns the number of nodes in the snapshot
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges in the snapshot
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the node names in their frozen order
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Returns the name at a node position
    pub fn node_name(&self, index: usize) -> Option<&str> {
        self.nodes.get(index).map(|n| n.as_str())
    }

    /// Returns the position of a node name, if it is part of this snapshot
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns the index-resolved edges in model order
    pub fn edges(&self) -> &[IndexedEdge<W>] {
        &self.edges
    }

    /// Gets the true weight of the edge `from -> to` if it exists
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.edges
            .iter()
            .find(|e| e.from == from && e.to == to)
            .map(|e| e.weight)
    }
}
