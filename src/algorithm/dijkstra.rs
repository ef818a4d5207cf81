use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::algorithm::reweight::ReweightedGraph;
use crate::algorithm::{ShortestPathSolver, SourceShortestPaths};
use crate::data_structures::MinHeap;
use crate::{Error, Result};

/// Binary-heap Dijkstra over the reweighted graph.
///
/// The heap is keyed by `(distance, index)`, so of two nodes with equal
/// tentative distance the one with the lower index settles first. Stale
/// heap entries are skipped on pop instead of being decreased in place.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra solver instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W> ShortestPathSolver<W> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn solve(&self, graph: &ReweightedGraph<W>, source: usize) -> Result<SourceShortestPaths<W>> {
        let n = graph.node_count();
        if source >= n {
            return Err(Error::Internal(format!(
                "solver source {} out of range for {} nodes",
                source, n
            )));
        }

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];

        distances[source] = Some(W::zero());

        let mut queue = MinHeap::with_capacity(n);
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // A shorter path to u was already settled; this entry is stale
            if let Some(current) = distances[u] {
                if current < dist_u {
                    continue;
                }
            }

            for &(v, weight) in graph.outgoing(u) {
                let candidate = dist_u + weight;

                let improves = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };

                if improves {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    queue.push(v, candidate);
                }
            }
        }

        Ok(SourceShortestPaths {
            distances,
            predecessors,
            source,
        })
    }
}
