//! Johnson APSP - All-Pairs Shortest Paths with Negative Edge Weights
//!
//! This library implements Johnson's algorithm for the all-pairs shortest
//! path problem on directed graphs whose edge weights may be negative:
//! a virtual-source Bellman-Ford pass produces a potential function, the
//! edges are reweighted to non-negative values, and one Dijkstra run per
//! source yields every pairwise distance after correction. Graphs that
//! contain a negative cycle are rejected.
//!
//! The stateful entry point is [`JohnsonEngine`], which owns the mutable
//! graph, invalidates its cached result on every effective mutation and
//! recomputes only on an explicit `compute()` call.

pub mod algorithm;
pub mod data_structures;
pub mod engine;
pub mod graph;
pub mod web;

pub use algorithm::{
    dense::DenseDijkstra, dijkstra::Dijkstra, AllPairsResult, DistanceMatrix, Johnson,
    ShortestPathSolver, SourceShortestPaths,
};
pub use engine::{EngineState, JohnsonEngine};
/// Re-export main types for convenient use
pub use graph::{Edge, GraphModel, GraphSnapshot};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Graph contains a negative cycle")]
    NegativeCycle,

    #[error("No valid result for the current graph; call compute() first")]
    EngineNotReady,

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("No path from {from} to {to}")]
    NoPathFound { from: String, to: String },

    #[error("Internal invariant violation: {0}")]
    Internal(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
