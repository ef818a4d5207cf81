use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::model::GraphModel;

/// Generates a random directed graph with `n` nodes (named `n0..`) and up to
/// `m` edges with integer weights in `1..=max_weight`.
///
/// Seeded so the same call always builds the same graph. No self-loops, no
/// duplicate pairs; when the pair space runs out before `m` edges are placed,
/// the graph simply ends up sparser.
pub fn random_graph(n: usize, m: usize, max_weight: u32, seed: u64) -> GraphModel<OrderedFloat<f64>> {
    assert!(n >= 2, "random graph needs at least two nodes");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = GraphModel::new();
    for i in 0..n {
        graph.add_node(&format!("n{}", i));
    }

    let mut added = 0;
    let mut attempts = 0;
    while added < m && attempts < m.saturating_mul(20) {
        attempts += 1;
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        let weight = OrderedFloat(rng.gen_range(1..=max_weight) as f64);
        if graph.add_edge(&format!("n{}", u), &format!("n{}", v), weight) {
            added += 1;
        }
    }

    graph
}

/// Generates a random directed graph that contains negative edge weights but
/// never a negative cycle.
///
/// Each node gets a random integer offset in `-shift..=shift` and every base
/// weight `w` in `1..=max_weight` is stored as `w + offset[u] - offset[v]`.
/// The offsets telescope around any cycle, so every cycle keeps its base
/// total (at least its length), while individual edges can go well below
/// zero. This is exactly the reweighting step of Johnson's algorithm run in
/// reverse, which makes these graphs the natural workload for it.
pub fn random_reweighted_graph(
    n: usize,
    m: usize,
    max_weight: u32,
    shift: u32,
    seed: u64,
) -> GraphModel<OrderedFloat<f64>> {
    assert!(n >= 2, "random graph needs at least two nodes");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut rng = StdRng::seed_from_u64(seed);
    let offsets: Vec<f64> = (0..n)
        .map(|_| rng.gen_range(-(shift as i64)..=shift as i64) as f64)
        .collect();

    let mut graph = GraphModel::new();
    for i in 0..n {
        graph.add_node(&format!("n{}", i));
    }

    let mut added = 0;
    let mut attempts = 0;
    while added < m && attempts < m.saturating_mul(20) {
        attempts += 1;
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        let base = rng.gen_range(1..=max_weight) as f64;
        let weight = OrderedFloat(base + offsets[u] - offsets[v]);
        if graph.add_edge(&format!("n{}", u), &format!("n{}", v), weight) {
            added += 1;
        }
    }

    graph
}
