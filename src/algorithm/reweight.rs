use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::graph::GraphSnapshot;

/// The non-negative-weight view of a snapshot, as adjacency lists.
///
/// Topology and edge multiplicity are identical to the snapshot; only the
/// weights are shifted by the potentials. The snapshot itself keeps the
/// true weights for distance correction.
#[derive(Debug, Clone)]
pub struct ReweightedGraph<W> {
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> ReweightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the outgoing `(target, weight)` pairs of a node, in model
    /// edge order
    pub fn outgoing(&self, node: usize) -> &[(usize, W)] {
        &self.adjacency[node]
    }
}

/// Reweights every edge `(u, v, w)` to `w + h[u] - h[v]`.
///
/// With a valid potential function every produced weight is non-negative;
/// the total cost of any u-to-v path shifts by the same telescoping
/// constant `h[u] - h[v]`, so shortest-path trees are preserved.
pub fn reweight<W>(snapshot: &GraphSnapshot<W>, potentials: &[W]) -> ReweightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    debug_assert_eq!(snapshot.node_count(), potentials.len());

    let mut adjacency = vec![Vec::new(); snapshot.node_count()];
    for edge in snapshot.edges() {
        let weight = edge.weight + potentials[edge.from] - potentials[edge.to];
        debug_assert!(
            weight >= W::zero(),
            "reweighted edge {} -> {} is negative: {:?}",
            edge.from,
            edge.to,
            weight
        );
        adjacency[edge.from].push((edge.to, weight));
    }

    ReweightedGraph { adjacency }
}
