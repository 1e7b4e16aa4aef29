//! Criterion benchmarks for bfs-lab.

use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use bfs_lab::format::{GraphReader, GraphWriter};
use bfs_lab::graph::{path_exists, search, shortest_path, traverse, Graph};

/// Build a random graph over `0..node_count` with `edges_per_node` out-edges each.
fn make_large_graph(node_count: u32, edges_per_node: usize) -> Graph<u32> {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::with_capacity(node_count as usize);
    for i in 0..node_count {
        graph.add_node(i);
        for _ in 0..edges_per_node {
            graph.add_edge(i, rng.gen_range(0..node_count));
        }
    }
    graph
}

/// Same shape as `make_large_graph`, with string node names.
fn make_named_graph(node_count: u32, edges_per_node: usize) -> Graph<String> {
    make_large_graph(node_count, edges_per_node)
        .iter()
        .map(|(node, neighbors)| {
            (
                format!("person_{}", node),
                neighbors.iter().map(|n| format!("person_{}", n)).collect(),
            )
        })
        .collect()
}

fn bench_shortest_path_100k(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 3);

    c.bench_function("shortest_path_100k", |b| {
        b.iter(|| shortest_path(&graph, black_box(&0u32), black_box(&99_999u32)))
    });
}

fn bench_path_exists_100k(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 3);

    c.bench_function("path_exists_100k", |b| {
        b.iter(|| path_exists(&graph, black_box(&0u32), black_box(&99_999u32)))
    });
}

fn bench_search_no_match_100k(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 3);

    // Exhausts everything reachable from node 0.
    c.bench_function("search_no_match_100k", |b| {
        b.iter(|| search(&graph, black_box(&0u32), |n: &u32| *n > 100_000))
    });
}

fn bench_search_names_10k(c: &mut Criterion) {
    let graph = make_named_graph(10_000, 3);
    let start = "person_0".to_string();

    c.bench_function("search_suffix_10k", |b| {
        b.iter(|| search(&graph, black_box(&start), |n: &String| n.ends_with("9999")))
    });
}

fn bench_search_hashmap_10k(c: &mut Criterion) {
    let map: HashMap<u32, Vec<u32>> = make_large_graph(10_000, 3)
        .iter()
        .map(|(node, neighbors)| (*node, neighbors.to_vec()))
        .collect();

    c.bench_function("search_hashmap_10k", |b| {
        b.iter(|| search(&map, black_box(&0u32), |n: &u32| *n == 9_999))
    });
}

fn bench_traverse_depth_5(c: &mut Criterion) {
    let graph = make_large_graph(100_000, 3);

    c.bench_function("traverse_depth5_100k", |b| {
        b.iter(|| traverse(&graph, black_box(&50_000u32), 5, 1_000))
    });
}

fn bench_write_json_10k(c: &mut Criterion) {
    let graph = make_named_graph(10_000, 3);
    let writer = GraphWriter::new(false);

    c.bench_function("write_json_10k", |b| b.iter(|| writer.to_string(&graph)));
}

fn bench_read_json_10k(c: &mut Criterion) {
    let graph = make_named_graph(10_000, 3);
    let json = GraphWriter::new(false).to_string(&graph).unwrap();

    c.bench_function("read_json_10k", |b| {
        b.iter(|| GraphReader::from_str(black_box(&json)))
    });
}

criterion_group!(
    benches,
    bench_shortest_path_100k,
    bench_path_exists_100k,
    bench_search_no_match_100k,
    bench_search_names_10k,
    bench_search_hashmap_10k,
    bench_traverse_depth_5,
    bench_write_json_10k,
    bench_read_json_10k,
);
criterion_main!(benches);
