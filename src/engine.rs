use std::fmt::Debug;

use log::{debug, info, warn};
use num_traits::{Float, Zero};

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{AllPairsResult, DistanceMatrix, Johnson, ShortestPathSolver};
use crate::graph::GraphModel;
use crate::{Error, Result};

/// Validity of the engine's cached all-pairs result.
///
/// There is no `Computing` variant: `compute()` is synchronous, so the
/// transient state is never observable. `Failed` behaves exactly like
/// `Stale` for querying; it only records that the last compute was
/// rejected rather than never attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No valid result, or the graph changed since the last compute
    Stale,
    /// The cached result is valid for the current graph
    Ready,
    /// The last compute was aborted by a negative cycle
    Failed,
}

impl EngineState {
    /// Lowercase name, used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineState::Stale => "stale",
            EngineState::Ready => "ready",
            EngineState::Failed => "failed",
        }
    }
}

/// The stateful facade over the whole engine.
///
/// Owns the mutable graph, the cached all-pairs result and the explicit
/// state that guards it. All graph mutation goes through the engine so
/// that every effective change invalidates the cache; queries only ever
/// see a result that matches the snapshot it was computed from.
#[derive(Debug)]
pub struct JohnsonEngine<W, S = Dijkstra>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    model: GraphModel<W>,
    johnson: Johnson<S>,
    state: EngineState,
    result: Option<AllPairsResult<W>>,
}

impl<W> JohnsonEngine<W, Dijkstra>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Creates an empty engine with the default heap-based solver
    pub fn new() -> Self {
        Self::with_solver(Dijkstra::new())
    }

    /// Creates an engine around an existing graph
    pub fn from_model(model: GraphModel<W>) -> Self {
        JohnsonEngine {
            model,
            johnson: Johnson::new(),
            state: EngineState::Stale,
            result: None,
        }
    }
}

impl<W> Default for JohnsonEngine<W, Dijkstra>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W, S> JohnsonEngine<W, S>
where
    W: Float + Zero + Debug + Copy + Ord,
    S: ShortestPathSolver<W>,
{
    /// Creates an empty engine with a specific single-source solver
    pub fn with_solver(solver: S) -> Self {
        JohnsonEngine {
            model: GraphModel::new(),
            johnson: Johnson::with_solver(solver),
            state: EngineState::Stale,
            result: None,
        }
    }

    /// Returns the current graph
    pub fn graph(&self) -> &GraphModel<W> {
        &self.model
    }

    /// Returns the current cache state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Returns the cached result while it is valid
    pub fn result(&self) -> Option<&AllPairsResult<W>> {
        match self.state {
            EngineState::Ready => self.result.as_ref(),
            _ => None,
        }
    }

    /// Discards the cached result and marks the engine stale
    pub fn invalidate(&mut self) {
        self.result = None;
        self.state = EngineState::Stale;
    }

    fn after_mutation(&mut self, changed: bool) -> bool {
        if changed {
            self.invalidate();
        }
        changed
    }

    /// Adds a node; an effective change invalidates the cache
    pub fn add_node(&mut self, name: &str) -> bool {
        let changed = self.model.add_node(name);
        self.after_mutation(changed)
    }

    /// Removes a node and its incident edges
    pub fn remove_node(&mut self, name: &str) -> bool {
        let changed = self.model.remove_node(name);
        self.after_mutation(changed)
    }

    /// Adds a directed edge between existing nodes; the weight may be
    /// negative but must be finite
    pub fn add_edge(&mut self, from: &str, to: &str, weight: W) -> bool {
        let changed = self.model.add_edge(from, to, weight);
        self.after_mutation(changed)
    }

    /// Removes the edge `from -> to`
    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        let changed = self.model.remove_edge(from, to);
        self.after_mutation(changed)
    }

    /// Updates the weight of an existing edge
    pub fn update_edge_weight(&mut self, from: &str, to: &str, weight: W) -> bool {
        let changed = self.model.update_edge_weight(from, to, weight);
        self.after_mutation(changed)
    }

    /// Removes every node and edge
    pub fn clear(&mut self) -> bool {
        let changed = self.model.clear();
        self.after_mutation(changed)
    }

    /// Recomputes the all-pairs result from the current graph.
    ///
    /// Runs synchronously to completion against the snapshot taken at
    /// entry. On success the result is cached and the engine is `Ready`;
    /// a negative cycle discards any previous result, leaves the engine
    /// `Failed` and propagates the error.
    pub fn compute(&mut self) -> Result<()> {
        let snapshot = self.model.snapshot();
        debug!(
            "compute requested: {} nodes, {} edges",
            snapshot.node_count(),
            snapshot.edge_count()
        );

        match self.johnson.solve(snapshot) {
            Ok(result) => {
                info!(
                    "all-pairs result ready for {} nodes",
                    result.snapshot().node_count()
                );
                self.result = Some(result);
                self.state = EngineState::Ready;
                Ok(())
            }
            Err(err) => {
                warn!("compute failed: {}", err);
                self.result = None;
                self.state = EngineState::Failed;
                Err(err)
            }
        }
    }

    fn ready_result(&self) -> Result<&AllPairsResult<W>> {
        match (self.state, self.result.as_ref()) {
            (EngineState::Ready, Some(result)) => Ok(result),
            _ => Err(Error::EngineNotReady),
        }
    }

    /// True shortest distance between two nodes; `Ok(None)` means the
    /// target is unreachable
    pub fn distance(&self, from: &str, to: &str) -> Result<Option<W>> {
        self.ready_result()?.distance(from, to)
    }

    /// Shortest path between two nodes, endpoints inclusive
    pub fn path(&self, from: &str, to: &str) -> Result<Vec<String>> {
        self.ready_result()?.path(from, to)
    }

    /// Full distance matrix in node order
    pub fn all_distances(&self) -> Result<DistanceMatrix<W>> {
        Ok(self.ready_result()?.matrix())
    }
}
