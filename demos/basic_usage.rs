//! Basic build -> search -> shortest path flow.

use bfs_lab::*;

fn main() -> BfsResult<()> {
    // Build the social network from the chapter
    let graph = GraphBuilder::new()
        .node("you", ["alice", "bob", "claire"])
        .node("bob", ["anuj", "peggy"])
        .node("alice", ["peggy"])
        .node("claire", ["thom", "jonny"])
        .build();

    println!(
        "Graph created with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    // Who is the closest mango seller?
    match search(&graph, &"you", is_mango_seller) {
        Some(seller) => println!("Closest mango seller: {}", seller),
        None => println!("Nobody in the network sells mangoes"),
    }

    // Shortest route to that seller
    if let Some(path) = shortest_path(&graph, &"you", &"thom") {
        println!("Route: {} ({} hops)", path.join(" -> "), path.len() - 1);
    }

    // Level order from "you"
    let ripples = traverse(&graph, &"you", DEFAULT_MAX_DEPTH, DEFAULT_MAX_RESULTS);
    for (depth, level) in ripples.levels().iter().enumerate() {
        println!("  [depth {}] {}", depth, level.join(", "));
    }

    // Save to file
    let owned: Graph<String> = graph
        .iter()
        .map(|(n, list)| (n.to_string(), list.iter().map(|s| s.to_string()).collect()))
        .collect();
    let path = std::env::temp_dir().join("social_network.json");
    GraphWriter::new(true).write_to_file(&owned, &path)?;
    println!("\nSaved to {}", path.display());

    // Reload and verify
    let loaded = GraphReader::read_from_file(&path)?;
    println!(
        "Reloaded: {} nodes, {} edges",
        loaded.node_count(),
        loaded.edge_count()
    );

    Ok(())
}
