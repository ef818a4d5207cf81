use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::algorithm::reweight::ReweightedGraph;
use crate::algorithm::{ShortestPathSolver, SourceShortestPaths};
use crate::{Error, Result};

/// Linear-scan Dijkstra without a priority queue.
///
/// Each round scans all nodes for the unvisited one with the smallest
/// finite tentative distance and settles it. O(V² + E), which beats the
/// heap variant on small dense graphs and needs no auxiliary structure.
///
/// The scan goes through indices in ascending order and replaces the
/// candidate only on strict improvement, so equal-distance nodes settle
/// lowest index first. This is the same tie-break [`Dijkstra`] gets from
/// its `(distance, index)` heap keys, and both solvers produce identical
/// distances and predecessors.
///
/// [`Dijkstra`]: crate::algorithm::dijkstra::Dijkstra
#[derive(Debug, Default)]
pub struct DenseDijkstra;

impl DenseDijkstra {
    /// Creates a new dense solver instance
    pub fn new() -> Self {
        DenseDijkstra
    }
}

impl<W> ShortestPathSolver<W> for DenseDijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn name(&self) -> &'static str {
        "DenseDijkstra"
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
        let mut visited = vec![false; n];

        distances[source] = Some(W::zero());

        loop {
            // Pick the unvisited node with the smallest finite distance
            let mut u: Option<(usize, W)> = None;
            for i in 0..n {
                if visited[i] {
                    continue;
                }
                if let Some(dist) = distances[i] {
                    let better = match u {
                        None => true,
                        Some((_, best)) => dist < best,
                    };
                    if better {
                        u = Some((i, dist));
                    }
                }
            }

            let (u, dist_u) = match u {
                Some(found) => found,
                // Every reachable node is settled
                None => break,
            };

            visited[u] = true;
            for &(v, weight) in graph.outgoing(u) {
                let candidate = dist_u + weight;

                let improves = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };

                if improves {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
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
