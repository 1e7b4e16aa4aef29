//! 100K node performance demo.

use std::time::Instant;

use bfs_lab::*;

fn main() -> BfsResult<()> {
    let node_count: u32 = 100_000;
    let edges_per_node = 3;

    println!("Creating graph with {} nodes...", node_count);
    let start = Instant::now();

    let mut graph = Graph::with_capacity(node_count as usize);
    for i in 0..node_count {
        for j in 1..=edges_per_node {
            graph.add_edge(i, (i + j * 7) % node_count);
        }
    }
    println!(
        "  Graph built in {:?} ({} nodes, {} edges)",
        start.elapsed(),
        graph.node_count(),
        graph.edge_count()
    );

    // Shortest path across the graph
    let start = Instant::now();
    let path = shortest_path(&graph, &0, &(node_count - 1));
    println!(
        "  Shortest path 0 -> {}: {:?} hops in {:?}",
        node_count - 1,
        path.map(|p| p.len() - 1),
        start.elapsed()
    );

    // Predicate search
    let start = Instant::now();
    let found = search(&graph, &0, |n: &u32| n % 9_973 == 0 && *n > 0);
    println!("  Search: found {:?} in {:?}", found, start.elapsed());

    // Traversal
    let query = QueryEngine::new();
    let start = Instant::now();
    let result = query.traverse(
        &graph,
        TraversalParams {
            start: 50_000,
            max_depth: 5,
            max_results: 100,
        },
    );
    println!(
        "  Traversal: {} nodes visited in {:?}",
        result.len(),
        start.elapsed()
    );

    println!("\nDone!");
    Ok(())
}
