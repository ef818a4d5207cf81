use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::algorithm::DistanceMatrix;
use crate::graph::GraphModel;
use crate::JohnsonEngine;

/// A whole graph on the wire:
/// `{"nodes":[...],"edges":[{"from":..,"to":..,"weight":..}]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeDocument>,
}

/// One directed edge on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDocument {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl GraphDocument {
    /// Builds the in-memory model, preserving the document's node and
    /// edge order. Fails with a description of the first inconsistency:
    /// empty or duplicate node names, edges with unknown endpoints,
    /// non-finite weights, or duplicate ordered pairs.
    pub fn to_model(&self) -> Result<GraphModel<OrderedFloat<f64>>, String> {
        let mut model = GraphModel::new();
        for name in &self.nodes {
            if !model.add_node(name) {
                return Err(format!("invalid or duplicate node name: {:?}", name));
            }
        }
        for edge in &self.edges {
            if !model.add_edge(&edge.from, &edge.to, OrderedFloat(edge.weight)) {
                return Err(format!(
                    "invalid edge {} -> {} (weight {})",
                    edge.from, edge.to, edge.weight
                ));
            }
        }
        Ok(model)
    }

    /// Serializable view of a model, in insertion order
    pub fn from_model(model: &GraphModel<OrderedFloat<f64>>) -> Self {
        GraphDocument {
            nodes: model.nodes().to_vec(),
            edges: model
                .edges()
                .iter()
                .map(|e| EdgeDocument {
                    from: e.from.clone(),
                    to: e.to.clone(),
                    weight: e.weight.into_inner(),
                })
                .collect(),
        }
    }
}

/// The distance matrix on the wire:
/// `{"source":{"target":distance|null,...},...}` with `null` denoting
/// unreachable. BTreeMap-backed so the serialized key order is stable.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct DistanceDocument(pub BTreeMap<String, BTreeMap<String, Option<f64>>>);

impl DistanceDocument {
    pub fn from_matrix(matrix: &DistanceMatrix<OrderedFloat<f64>>) -> Self {
        let mut outer = BTreeMap::new();
        for (s, from) in matrix.nodes().iter().enumerate() {
            let mut inner = BTreeMap::new();
            for (t, to) in matrix.nodes().iter().enumerate() {
                // Indices come from the matrix's own node list
                let cell = matrix.get(s, t).flatten();
                inner.insert(to.clone(), cell.map(OrderedFloat::into_inner));
            }
            outer.insert(from.clone(), inner);
        }
        DistanceDocument(outer)
    }
}

/// Request body for adding a node
#[derive(Debug, Deserialize)]
pub struct AddNodeRequest {
    pub name: String,
}

/// Request body for adding an edge
#[derive(Debug, Deserialize)]
pub struct AddEdgeRequest {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Response for mutation endpoints
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    /// Whether the model actually changed (no-ops do not invalidate)
    pub changed: bool,
    pub state: String,
    pub node_count: usize,
    pub edge_count: usize,
}

/// Response for a compute trigger
#[derive(Debug, Serialize)]
pub struct ComputeResponse {
    pub state: String,
    pub execution_time_ms: f64,
    pub distances: DistanceDocument,
}

/// Response for a single distance query
#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    pub from: String,
    pub to: String,
    /// `null` means unreachable
    pub distance: Option<f64>,
}

/// Response for a path query
#[derive(Debug, Serialize)]
pub struct PathResponse {
    pub from: String,
    pub to: String,
    pub path: Vec<String>,
    pub distance: f64,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Summary of one session for listings
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub state: String,
    pub node_count: usize,
    pub edge_count: usize,
}

/// One engine instance owned by the server
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub engine: JohnsonEngine<OrderedFloat<f64>>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(engine: JohnsonEngine<OrderedFloat<f64>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            engine,
            created_at: Utc::now(),
        }
    }

    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            id: self.id,
            created_at: self.created_at,
            state: self.engine.state().as_str().to_string(),
            node_count: self.engine.graph().node_count(),
            edge_count: self.engine.graph().edge_count(),
        }
    }
}
