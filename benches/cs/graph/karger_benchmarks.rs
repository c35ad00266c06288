use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use karger_mincut::graph::karger::{
    compute_approx_min_cut, compute_approx_min_cut_parallel, run_trial, Graph,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Two random dense halves joined by a handful of edges.
fn clustered_graph(n: usize, seed: u64) -> Graph {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let half = n / 2;
    let mut edges = Vec::new();
    for _ in 0..n * 4 {
        let u = rng.gen_range(0..half);
        let v = rng.gen_range(0..half);
        if u != v {
            edges.push((u, v));
            edges.push((u + half, v + half));
        }
    }
    for i in 0..3 {
        edges.push((i, half + i));
    }
    Graph::from_edges(n, &edges).unwrap()
}

fn bench_single_trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("karger_single_trial");
    for &n in &[50, 200, 800] {
        let graph = clustered_graph(n, 1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            let mut rng = ChaCha20Rng::seed_from_u64(7);
            b.iter(|| run_trial(black_box(graph), &mut rng).unwrap())
        });
    }
    group.finish();
}

fn bench_trial_runner(c: &mut Criterion) {
    let graph = clustered_graph(100, 2);
    let trials = 500;
    let mut group = c.benchmark_group("karger_500_trials");
    group.sample_size(10);
    group.bench_function("sequential", |b| {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        b.iter(|| compute_approx_min_cut(black_box(&graph), trials, &mut rng).unwrap())
    });
    group.bench_function("parallel", |b| {
        b.iter(|| compute_approx_min_cut_parallel(black_box(&graph), trials, 3).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_single_trial, bench_trial_runner);
criterion_main!(benches);
