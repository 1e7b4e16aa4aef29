//! Narrated walkthrough of breadth-first search, printed by `bfs-lab` with no arguments.

use std::collections::VecDeque;
use std::io::Write;

use crate::demo;
use crate::graph::{is_mango_seller, is_valid_path, search, shortest_path, traverse};
use crate::types::{BfsResult, DEFAULT_MAX_DEPTH, DEFAULT_MAX_RESULTS};

const RULE_WIDTH: usize = 60;

/// Print the whole tutorial to `out`.
pub fn run(out: &mut impl Write) -> BfsResult<()> {
    banner(out)?;
    graph_intro(out)?;
    queue_intro(out)?;
    demo_mango_seller(out)?;
    demo_shortest_path(out)?;
    bfs_vs_dfs(out)?;

    header(out, "NEXT STEPS")?;
    writeln!(out)?;
    writeln!(out, "    Try the queries yourself:")?;
    writeln!(out, "        bfs-lab search you")?;
    writeln!(out, "        bfs-lab path you thom")?;
    writeln!(out, "        bfs-lab traverse you --demo peggy")?;
    writeln!(out, "        bfs-lab show --graph my_graph.json")?;
    Ok(())
}

fn header(out: &mut impl Write, title: &str) -> BfsResult<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "  {}", title)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    Ok(())
}

fn banner(out: &mut impl Write) -> BfsResult<()> {
    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "   BREADTH-FIRST SEARCH")?;
    writeln!(out, "   Finding shortest paths")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out)?;
    writeln!(out, "    BFS answers two questions:")?;
    writeln!(out, "    1. Is there a path from A to B?")?;
    writeln!(out, "    2. What is the SHORTEST path from A to B?")?;
    writeln!(out)?;
    writeln!(out, "    It explores level by level: every node 1 hop away,")?;
    writeln!(out, "    then every node 2 hops away, and so on. The first")?;
    writeln!(out, "    path it finds to a node is therefore a shortest one.")?;
    Ok(())
}

fn graph_intro(out: &mut impl Write) -> BfsResult<()> {
    header(out, "GRAPHS AS ADJACENCY LISTS")?;
    writeln!(out)?;
    writeln!(out, "    A graph is a set of nodes and directed edges between them.")?;
    writeln!(out, "    We store it as a map from each node to its neighbors:")?;
    writeln!(out)?;

    let graph = demo::social_network();
    for (node, neighbors) in graph.iter() {
        writeln!(out, "        {:<8} -> {:?}", node, neighbors)?;
    }

    writeln!(out)?;
    writeln!(out, "    Edges only go one way: bob lists peggy, peggy lists nobody.")?;
    writeln!(out, "    A node without an entry simply has no neighbors.")?;
    Ok(())
}

fn queue_intro(out: &mut impl Write) -> BfsResult<()> {
    header(out, "QUEUES")?;
    writeln!(out)?;
    writeln!(out, "    BFS keeps its frontier in a FIFO queue: new nodes join at")?;
    writeln!(out, "    the back, the next node to visit leaves from the front.")?;
    writeln!(out, "    VecDeque gives O(1) push_back and pop_front.")?;
    writeln!(out)?;
    writeln!(out, "LIVE DEMO:")?;

    let mut queue: VecDeque<&str> = VecDeque::new();
    writeln!(out, "    VecDeque::new()           -> {:?}", queue)?;
    for name in ["alice", "bob", "claire"] {
        queue.push_back(name);
        writeln!(out, "    push_back({:<8})       -> {:?}", format!("{:?}", name), queue)?;
    }
    if let Some(front) = queue.pop_front() {
        writeln!(out, "    pop_front()               -> {:?}, queue = {:?}", front, queue)?;
    }
    Ok(())
}

fn demo_mango_seller(out: &mut impl Write) -> BfsResult<()> {
    header(out, "PART 1: search() - find the mango seller")?;
    writeln!(out)?;
    writeln!(out, "    Rule: a person sells mangoes if their name ends with 'm'.")?;
    writeln!(out)?;
    writeln!(out, "    1. Seed the queue with the start node's neighbors")?;
    writeln!(out, "    2. Pop the front node; skip it if already searched")?;
    writeln!(out, "    3. If it is a seller, stop; otherwise enqueue its neighbors")?;
    writeln!(out, "       and mark it searched")?;
    writeln!(out, "    4. An empty queue means there is no seller")?;
    writeln!(out)?;
    writeln!(out, "    The searched set is what keeps cycles from looping forever.")?;
    writeln!(out)?;

    let graph = demo::social_network();
    let you = "you".to_string();
    match search(&graph, &you, is_mango_seller) {
        Some(seller) if seller == "thom" => {
            writeln!(out, "    search(graph, \"you\") = {:?} ✅", seller)?;
            writeln!(out, "    thom is two hops away, through claire.")?;
        }
        Some(other) => {
            writeln!(out, "    search(graph, \"you\") = {:?} ❌ expected \"thom\"", other)?;
        }
        None => {
            writeln!(out, "    search(graph, \"you\") = None ❌ expected \"thom\"")?;
        }
    }

    let lonely = demo::mango_free_network();
    let verdict = match search(&lonely, &you, is_mango_seller) {
        None => "✅",
        Some(_) => "❌",
    };
    writeln!(out, "    search(no_sellers, \"you\") = None {}", verdict)?;
    Ok(())
}

fn demo_shortest_path(out: &mut impl Write) -> BfsResult<()> {
    header(out, "PART 2: shortest_path()")?;
    writeln!(out)?;
    writeln!(out, "    Same traversal, but each queue entry carries the path that")?;
    writeln!(out, "    reached it: (node, [start, ..., node]). The first time the")?;
    writeln!(out, "    target is dequeued, its path is a shortest one.")?;
    writeln!(out)?;

    let graph = demo::peggy_network();
    for (node, neighbors) in graph.iter() {
        writeln!(out, "        {:<8} -> {:?}", node, neighbors)?;
    }
    writeln!(out)?;

    // Expected hop counts; either route to peggy is acceptable.
    let cases: [(&str, &str, Option<usize>); 4] = [
        ("you", "peggy", Some(2)),
        ("you", "anuj", Some(2)),
        ("you", "you", Some(0)),
        ("alice", "anuj", None),
    ];

    for (start, end, expected) in cases {
        let path = shortest_path(&graph, &start.to_string(), &end.to_string());
        let ok = match (&path, expected) {
            (Some(p), Some(hops)) => p.len() == hops + 1 && is_valid_path(&graph, p),
            (None, None) => true,
            _ => false,
        };
        let mark = if ok { "✅" } else { "❌" };
        match path {
            Some(p) => writeln!(out, "    path({:?} -> {:?}) = {:?} {}", start, end, p, mark)?,
            None => writeln!(out, "    path({:?} -> {:?}) = None {} (no path)", start, end, mark)?,
        }
    }
    Ok(())
}

fn bfs_vs_dfs(out: &mut impl Write) -> BfsResult<()> {
    header(out, "BFS vs DFS")?;
    writeln!(out)?;
    writeln!(out, "    BFS                          DFS")?;
    writeln!(out, "    ---                          ---")?;
    writeln!(out, "    queue (FIFO)                 stack (LIFO)")?;
    writeln!(out, "    level by level               deep first")?;
    writeln!(out, "    finds shortest paths         finds some path")?;
    writeln!(out, "    memory ~ widest level        memory ~ deepest branch")?;
    writeln!(out)?;
    writeln!(out, "    BFS spreads like ripples. On the social network:")?;
    writeln!(out)?;

    let graph = demo::social_network();
    let ripples = traverse(
        &graph,
        &"you".to_string(),
        DEFAULT_MAX_DEPTH,
        DEFAULT_MAX_RESULTS,
    );
    for (depth, level) in ripples.levels().iter().enumerate() {
        writeln!(out, "        hop {}: {}", depth, level.join(", "))?;
    }
    Ok(())
}
