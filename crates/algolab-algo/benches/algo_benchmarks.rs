// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Algorithm Benchmarks
//!
//! Run with:
//! cargo bench --bench algo_benchmarks

use algolab_algo::algo::algorithms::{
    Algorithm, Bfs, BfsConfig, DfsClassification, DfsClassificationConfig,
};
use algolab_algo::algo::sequence::{PrefixSums, lcs, max_subarray};
use algolab_algo::{Graph, GraphMode};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::hint::black_box;

#[derive(Clone, Debug)]
struct AlgoBenchConfig {
    nodes: usize,
    edges_per_node: usize,
}

impl AlgoBenchConfig {
    fn from_env() -> Self {
        let nodes = env::var("BENCH_NODES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10_000);
        let edges_per_node = env::var("BENCH_EDGES_PER_NODE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);
        Self {
            nodes,
            edges_per_node,
        }
    }

    fn label(&self) -> String {
        format!("{}n_{}deg", self.nodes, self.edges_per_node)
    }
}

fn random_graph(config: &AlgoBenchConfig, mode: GraphMode) -> Graph {
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = Graph::new(config.nodes, mode).expect("graph within limits");
    let n = config.nodes as i64;
    for _ in 0..config.nodes * config.edges_per_node {
        let u = rng.random_range(1..=n);
        let v = rng.random_range(1..=n);
        graph.add_edge(u, v).expect("endpoints in range");
    }
    graph
}

fn bench_graph(c: &mut Criterion) {
    let config = AlgoBenchConfig::from_env();
    let mut group = c.benchmark_group("graph");

    for mode in [GraphMode::Undirected, GraphMode::Directed] {
        let graph = random_graph(&config, mode);
        let label = format!("{}_{:?}", config.label(), mode);

        group.bench_with_input(
            BenchmarkId::new("dfs_classification", &label),
            &graph,
            |b, g| {
                b.iter(|| {
                    DfsClassification::run(black_box(g), DfsClassificationConfig::default())
                        .expect("classification")
                })
            },
        );
    }

    let graph = random_graph(&config, GraphMode::Undirected);
    group.bench_with_input(BenchmarkId::new("bfs", config.label()), &graph, |b, g| {
        b.iter(|| Bfs::run(black_box(g), BfsConfig::default()).expect("bfs"))
    });

    group.finish();
}

fn bench_sequence(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let values: Vec<i64> = (0..100_000).map(|_| rng.random_range(-100..100)).collect();
    let x: String = (0..1_000)
        .map(|_| char::from(b'A' + rng.random_range(0..4u8)))
        .collect();
    let y: String = (0..1_000)
        .map(|_| char::from(b'A' + rng.random_range(0..4u8)))
        .collect();

    let mut group = c.benchmark_group("sequence");
    group.bench_function("kadane_100k", |b| b.iter(|| max_subarray(black_box(&values)).expect("in range")));
    group.bench_function("prefix_build_100k", |b| {
        b.iter(|| PrefixSums::new(black_box(&values)).expect("in range"))
    });
    group.bench_function("lcs_1k_x_1k", |b| b.iter(|| lcs(black_box(&x), black_box(&y))));
    group.finish();
}

criterion_group!(benches, bench_graph, bench_sequence);
criterion_main!(benches);
