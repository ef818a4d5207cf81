use std::fmt::Debug;

use log::debug;
use num_traits::{Float, Zero};

use crate::graph::GraphSnapshot;
use crate::{Error, Result};

/// Computes the potential function for Johnson's reweighting step.
///
/// Bellman-Ford from a virtual source that reaches every node through a
/// zero-weight edge. The virtual source is the index `n` past the last
/// real node, so it can never collide with a NodeId. Because the virtual
/// source reaches everything, the final detection pass sees any negative
/// cycle in the graph.
#[derive(Debug, Default)]
pub struct PotentialComputer;

impl PotentialComputer {
    /// Creates a new potential computer
    pub fn new() -> Self {
        PotentialComputer
    }

    /// Runs Bellman-Ford over the snapshot augmented with the virtual
    /// source and returns one potential per node, in snapshot order.
    ///
    /// Fails with [`Error::NegativeCycle`] when the extra relaxation pass
    /// still finds an improving edge; no partial output is produced.
    /// Relaxation order is fixed: snapshot edges in model order first,
    /// then the virtual edges in node order.
    pub fn compute<W>(&self, snapshot: &GraphSnapshot<W>) -> Result<Vec<W>>
    where
        W: Float + Zero + Debug + Copy,
    {
        let n = snapshot.node_count();
        if n == 0 {
            return Ok(Vec::new());
        }

        // Virtual source sits at index n
        let q = n;
        let mut dist = vec![W::infinity(); n + 1];
        dist[q] = W::zero();

        let virtual_edges: Vec<(usize, usize, W)> =
            (0..n).map(|v| (q, v, W::zero())).collect();

        // The augmented graph has n + 1 vertices, so (n + 1) - 1 passes
        for pass in 0..n {
            let mut updated = false;
            for edge in snapshot.edges() {
                let candidate = dist[edge.from] + edge.weight;
                if candidate < dist[edge.to] {
                    dist[edge.to] = candidate;
                    updated = true;
                }
            }
            for &(from, to, weight) in &virtual_edges {
                let candidate = dist[from] + weight;
                if candidate < dist[to] {
                    dist[to] = candidate;
                    updated = true;
                }
            }
            if !updated {
                debug!("Bellman-Ford reached fixpoint after {} passes", pass + 1);
                break;
            }
        }

        // One extra pass: any remaining improvement means a negative cycle
        for edge in snapshot.edges() {
            if dist[edge.from] + edge.weight < dist[edge.to] {
                debug!(
                    "negative cycle detected via edge {} -> {}",
                    edge.from, edge.to
                );
                return Err(Error::NegativeCycle);
            }
        }
        for &(from, to, weight) in &virtual_edges {
            if dist[from] + weight < dist[to] {
                return Err(Error::NegativeCycle);
            }
        }

        dist.truncate(n);
        Ok(dist)
    }
}
