use std::fmt::Debug;

use log::debug;
use num_traits::{Float, Zero};

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::potentials::PotentialComputer;
use crate::algorithm::reweight::reweight;
use crate::algorithm::{ShortestPathSolver, SourceShortestPaths};
use crate::graph::GraphSnapshot;
use crate::{Error, Result};

/// Johnson's all-pairs algorithm: potentials, reweighting, one
/// single-source run per node, distance correction.
///
/// Generic over the single-source solver; the binary-heap [`Dijkstra`] is
/// the default, [`DenseDijkstra`] trades the heap for a linear scan.
///
/// [`DenseDijkstra`]: crate::algorithm::dense::DenseDijkstra
#[derive(Debug, Default)]
pub struct Johnson<S = Dijkstra> {
    solver: S,
}

impl Johnson<Dijkstra> {
    /// Creates a Johnson runner with the default heap-based solver
    pub fn new() -> Self {
        Johnson {
            solver: Dijkstra::new(),
        }
    }
}

impl<S> Johnson<S> {
    /// Creates a Johnson runner with a specific single-source solver
    pub fn with_solver(solver: S) -> Self {
        Johnson { solver }
    }

    /// Runs the full all-pairs computation over a snapshot.
    ///
    /// Fails with [`Error::NegativeCycle`] before any per-source work when
    /// the potential computation rejects the graph; partial results are
    /// never produced. An empty snapshot yields an empty result.
    pub fn solve<W>(&self, snapshot: GraphSnapshot<W>) -> Result<AllPairsResult<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        S: ShortestPathSolver<W>,
    {
        let n = snapshot.node_count();
        debug!(
            "running Johnson ({}) on {} nodes, {} edges",
            self.solver.name(),
            n,
            snapshot.edge_count()
        );

        let potentials = PotentialComputer::new().compute(&snapshot)?;
        let reweighted = reweight(&snapshot, &potentials);

        let mut per_source = Vec::with_capacity(n);
        for s in 0..n {
            let run = self.solver.solve(&reweighted, s)?;
            per_source.push(correct_distances(run, &potentials, s));
        }

        debug!("Johnson finished: {} per-source results", per_source.len());
        Ok(AllPairsResult {
            snapshot,
            per_source,
        })
    }
}

/// Converts reweighted distances back to true distances.
///
/// Every s-to-t path cost was shifted by the constant `h[s] - h[t]`, so
/// the true distance is `dist'[t] + h[t] - h[s]`. The diagonal is pinned
/// to exactly zero and predecessors carry through unchanged, because the
/// shift never reorders paths sharing the same endpoints.
fn correct_distances<W>(
    run: SourceShortestPaths<W>,
    potentials: &[W],
    source: usize,
) -> SourceShortestPaths<W>
where
    W: Float + Zero + Debug + Copy,
{
    let distances = run
        .distances
        .iter()
        .enumerate()
        .map(|(t, dist)| {
            if t == source {
                Some(W::zero())
            } else {
                dist.map(|d| d + potentials[t] - potentials[source])
            }
        })
        .collect();

    SourceShortestPaths {
        distances,
        predecessors: run.predecessors,
        source,
    }
}

/// The complete all-pairs result of one successful computation.
///
/// Owns the snapshot it was computed from; all name lookups resolve
/// against that snapshot, never against a later state of the model. The
/// result is only ever created whole and discarded whole.
#[derive(Debug, Clone)]
pub struct AllPairsResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    snapshot: GraphSnapshot<W>,
    per_source: Vec<SourceShortestPaths<W>>,
}

impl<W> AllPairsResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the snapshot this result was computed from
    pub fn snapshot(&self) -> &GraphSnapshot<W> {
        &self.snapshot
    }

    /// Returns the per-source result for a node index
    pub fn source_paths(&self, source: usize) -> Option<&SourceShortestPaths<W>> {
        self.per_source.get(source)
    }

    fn resolve(&self, name: &str) -> Result<usize> {
        self.snapshot
            .index_of(name)
            .ok_or_else(|| Error::UnknownNode(name.to_string()))
    }

    /// True shortest distance between two named nodes; `Ok(None)` means
    /// the target is unreachable from the source.
    pub fn distance(&self, from: &str, to: &str) -> Result<Option<W>> {
        let s = self.resolve(from)?;
        let t = self.resolve(to)?;
        Ok(self.per_source[s].distances[t])
    }

    /// Shortest path between two named nodes, source and target inclusive
    pub fn path(&self, from: &str, to: &str) -> Result<Vec<String>> {
        let s = self.resolve(from)?;
        let t = self.resolve(to)?;

        match self.per_source[s].path_to(t)? {
            Some(indices) => indices
                .into_iter()
                .map(|i| {
                    self.snapshot
                        .node_name(i)
                        .map(str::to_string)
                        .ok_or_else(|| {
                            Error::Internal(format!("path node {} missing from snapshot", i))
                        })
                })
                .collect(),
            None => Err(Error::NoPathFound {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }

    /// Extracts the full distance matrix in snapshot node order
    pub fn matrix(&self) -> DistanceMatrix<W> {
        DistanceMatrix {
            nodes: self.snapshot.nodes().to_vec(),
            rows: self
                .per_source
                .iter()
                .map(|run| run.distances.clone())
                .collect(),
        }
    }
}

/// Dense distance matrix for tabular display.
///
/// Row and column order is the snapshot's node order; `None` cells are
/// unreachable pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<W> {
    nodes: Vec<String>,
    rows: Vec<Vec<Option<W>>>,
}

impl<W: Copy> DistanceMatrix<W> {
    /// Returns the node names labelling rows and columns
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Returns the rows, one per source, in node order
    pub fn rows(&self) -> &[Vec<Option<W>>] {
        &self.rows
    }

    /// Returns the cell at a row/column position. `None` means the index
    /// is out of range; `Some(None)` is an in-range but unreachable pair.
    pub fn get(&self, source: usize, target: usize) -> Option<Option<W>> {
        self.rows.get(source).and_then(|row| row.get(target)).copied()
    }
}
