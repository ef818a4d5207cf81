use std::fmt::Debug;
use std::time::{Duration, Instant};

use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;

use johnson_apsp::graph::generators::random_reweighted_graph;
use johnson_apsp::graph::GraphSnapshot;
use johnson_apsp::{AllPairsResult, DenseDijkstra, Johnson, ShortestPathSolver};

// Full Johnson run with one solver, timed
fn run_solver<S, W>(
    name: &str,
    johnson: &Johnson<S>,
    snapshot: GraphSnapshot<W>,
) -> (Duration, AllPairsResult<W>)
where
    W: Float + Zero + Debug + Copy + Ord,
    S: ShortestPathSolver<W>,
{
    let start = Instant::now();
    let result = johnson
        .solve(snapshot)
        .expect("benchmark graphs never contain a negative cycle");
    let duration = start.elapsed();

    println!("  {} finished in {:?}", name, duration);
    (duration, result)
}

fn matrices_agree(a: &AllPairsResult<OrderedFloat<f64>>, b: &AllPairsResult<OrderedFloat<f64>>) -> bool {
    a.matrix() == b.matrix()
}

fn main() {
    env_logger::init();

    // (nodes, edges); all-pairs work grows with V * E log V, keep these modest
    let sizes = vec![(50, 200), (100, 600), (200, 1_500), (400, 4_000)];
    let max_weight = 100;
    let shift = 50;
    let seed = 7;

    println!("==============================================");
    println!("Johnson all-pairs: heap vs dense Dijkstra");
    println!("Seeded graphs with negative edges, no negative cycle");
    println!("==============================================");

    let heap = Johnson::new();
    let dense = Johnson::with_solver(DenseDijkstra::new());

    let mut results = Vec::new();

    for &(n, m) in &sizes {
        let graph = random_reweighted_graph(n, m, max_weight, shift, seed);
        let negative = graph
            .edges()
            .iter()
            .filter(|e| e.weight < OrderedFloat(0.0))
            .count();
        println!(
            "\ngraph: {} nodes, {} edges ({} negative)",
            graph.node_count(),
            graph.edge_count(),
            negative
        );

        let (heap_time, heap_result) = run_solver("Dijkstra (heap)", &heap, graph.snapshot());
        let (dense_time, dense_result) = run_solver("DenseDijkstra", &dense, graph.snapshot());

        if !matrices_agree(&heap_result, &dense_result) {
            println!("  WARNING: solvers disagree on the distance matrix!");
        }

        results.push((n, m, heap_time, dense_time));
    }

    println!("\n==============================================");
    println!("Summary");
    println!("==============================================");
    println!(
        "{:<8} | {:<8} | {:<12} | {:<12} | {:<8}",
        "Nodes", "Edges", "Heap (ms)", "Dense (ms)", "Ratio"
    );
    println!("----------------------------------------------");

    for (n, m, heap_time, dense_time) in &results {
        let ratio = dense_time.as_secs_f64() / heap_time.as_secs_f64();
        println!(
            "{:<8} | {:<8} | {:<12.2} | {:<12.2} | {:<8.2}",
            n,
            m,
            heap_time.as_secs_f64() * 1000.0,
            dense_time.as_secs_f64() * 1000.0,
            ratio
        );
    }
}
