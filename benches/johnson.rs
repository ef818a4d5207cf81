use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use johnson_apsp::graph::generators::random_reweighted_graph;
use johnson_apsp::{DenseDijkstra, Johnson};

fn bench_johnson(c: &mut Criterion) {
    let mut group = c.benchmark_group("johnson_all_pairs");

    for &(n, m) in &[(50usize, 200usize), (100, 600), (200, 1_500)] {
        let graph = random_reweighted_graph(n, m, 100, 50, 7);

        group.bench_with_input(
            BenchmarkId::new("heap", format!("{}n_{}m", n, m)),
            &graph,
            |b, graph| {
                let johnson = Johnson::new();
                b.iter(|| johnson.solve(black_box(graph.snapshot())).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("dense", format!("{}n_{}m", n, m)),
            &graph,
            |b, graph| {
                let johnson = Johnson::with_solver(DenseDijkstra::new());
                b.iter(|| johnson.solve(black_box(graph.snapshot())).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_johnson);
criterion_main!(benches);
