use std::collections::HashSet;
use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::algorithm::reweight::ReweightedGraph;
use crate::{Error, Result};

/// Distances and predecessors computed from one source node.
///
/// Nodes are identified by their snapshot index. `None` in `distances`
/// means unreachable; `predecessors[source]` is always `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceShortestPaths<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from the source to each node
    pub distances: Vec<Option<W>>,

    /// Predecessor of each node in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source node index
    pub source: usize,
}

impl<W> SourceShortestPaths<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Reconstructs the shortest path from the source to `target` by
    /// walking the predecessor chain backwards.
    ///
    /// Returns `Ok(None)` when no path exists. `target == source` yields
    /// the single-element path `[source]`, no self-loop required. A
    /// revisited node during the walk means the predecessor chain is
    /// cyclic, which a successful compute can never produce; it is
    /// reported as an internal error instead of looping forever.
    pub fn path_to(&self, target: usize) -> Result<Option<Vec<usize>>> {
        if target >= self.predecessors.len() {
            return Err(Error::Internal(format!(
                "path target {} out of range for {} nodes",
                target,
                self.predecessors.len()
            )));
        }

        if self.distances[target].is_none() {
            return Ok(None);
        }

        let mut path = Vec::new();
        let mut visited = HashSet::new();
        let mut current = target;

        while current != self.source {
            if !visited.insert(current) {
                return Err(Error::Internal(format!(
                    "cycle in predecessor chain at node {}",
                    current
                )));
            }
            path.push(current);
            match self.predecessors[current] {
                Some(pred) => current = pred,
                // Chain exhausted before reaching the source
                None => return Ok(None),
            }
        }

        path.push(self.source);
        path.reverse();
        Ok(Some(path))
    }
}

/// Trait for single-source shortest path solvers on a reweighted graph.
///
/// Implementations may assume all weights are non-negative, which the
/// reweighting step guarantees. Both implementations settle nodes with
/// equal tentative distance in ascending index order, so their outputs
/// are interchangeable.
pub trait ShortestPathSolver<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Compute shortest paths from `source` to all other nodes
    fn solve(&self, graph: &ReweightedGraph<W>, source: usize) -> Result<SourceShortestPaths<W>>;

    /// Get the name of the solver
    fn name(&self) -> &'static str;
}
