pub mod traits;
pub mod potentials;
pub mod reweight;
pub mod dijkstra;
pub mod dense;
pub mod johnson;

pub use johnson::{AllPairsResult, DistanceMatrix, Johnson};
pub use traits::{ShortestPathSolver, SourceShortestPaths};
