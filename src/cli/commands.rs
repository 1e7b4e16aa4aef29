//! CLI command implementations.

use std::path::PathBuf;

use log::warn;

use crate::demo;
use crate::engine::{QueryEngine, SearchParams, TraversalParams};
use crate::format::{GraphReader, GraphWriter};
use crate::graph::Graph;
use crate::types::{BfsError, BfsResult, DEFAULT_DEMO};

use super::tutorial;

/// Where a command gets its graph from.
#[derive(Debug, Clone)]
pub enum GraphSource {
    /// A JSON adjacency-list file.
    File(PathBuf),
    /// One of the built-in demo graphs.
    Demo(String),
}

impl GraphSource {
    /// Pick a source from the `--graph` / `--demo` flags, defaulting to the social demo.
    pub fn from_args(graph: Option<PathBuf>, demo: Option<String>) -> Self {
        match (graph, demo) {
            (Some(path), _) => Self::File(path),
            (None, Some(name)) => Self::Demo(name),
            (None, None) => Self::Demo(DEFAULT_DEMO.to_string()),
        }
    }

    /// Load the graph.
    pub fn load(&self) -> BfsResult<Graph<String>> {
        match self {
            Self::File(path) => GraphReader::read_from_file(path),
            Self::Demo(name) => demo::by_name(name),
        }
    }
}

/// Parse a `--suffix` value, which must be exactly one character.
pub fn parse_suffix(value: &str) -> BfsResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(BfsError::InvalidArgument(format!(
            "suffix must be a single character, got {:?}",
            value
        ))),
    }
}

fn warn_if_absent(graph: &Graph<String>, node: &str) {
    if !graph.contains_node(&node.to_string()) {
        warn!("{} has no adjacency entry; treating it as having no neighbors", node);
    }
}

/// Print the interactive tutorial.
pub fn cmd_tutorial() -> BfsResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    tutorial::run(&mut out)
}

/// List the built-in demo graphs.
pub fn cmd_demos(json: bool) -> BfsResult<()> {
    if json {
        println!("{}", serde_json::json!(demo::DEMO_NAMES));
    } else {
        for name in demo::DEMO_NAMES {
            let graph = demo::by_name(name)?;
            println!(
                "{:<14} {} nodes, {} edges",
                name,
                graph.node_count(),
                graph.edge_count()
            );
        }
    }
    Ok(())
}

/// Print a graph's adjacency list.
pub fn cmd_show(source: &GraphSource, json: bool) -> BfsResult<()> {
    let graph = source.load()?;
    if json {
        println!("{}", GraphWriter::new(true).to_string(&graph)?);
    } else {
        print!("{}", graph);
        println!(
            "{} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
    }
    Ok(())
}

/// Find the closest node whose name ends with `suffix`.
pub fn cmd_search(source: &GraphSource, start: &str, suffix: char, json: bool) -> BfsResult<()> {
    let graph = source.load()?;
    warn_if_absent(&graph, start);

    let result = QueryEngine::new().search(
        &graph,
        SearchParams {
            start: start.to_string(),
            suffix,
        },
    );

    if json {
        println!(
            "{}",
            serde_json::json!({
                "start": result.start,
                "suffix": suffix.to_string(),
                "found": result.found,
            })
        );
    } else {
        match &result.found {
            Some(node) => println!(
                "Found {} (closest name ending in '{}' from {})",
                node, suffix, result.start
            ),
            None => println!(
                "No name ending in '{}' reachable from {}",
                suffix, result.start
            ),
        }
    }
    Ok(())
}

/// Find the shortest path between two nodes.
pub fn cmd_path(source: &GraphSource, start: &str, end: &str, json: bool) -> BfsResult<()> {
    let graph = source.load()?;
    warn_if_absent(&graph, start);

    let result = QueryEngine::new().shortest_path(&graph, start.to_string(), end.to_string());

    if json {
        println!(
            "{}",
            serde_json::json!({
                "start": result.start,
                "end": result.end,
                "path": result.path,
                "hops": result.hops(),
            })
        );
    } else {
        match (&result.path, result.hops()) {
            (Some(path), Some(hops)) => {
                println!("{} ({} hops)", path.join(" -> "), hops);
            }
            _ => println!("No path from {} to {}", result.start, result.end),
        }
    }
    Ok(())
}

/// Run a level-order traversal from a starting node.
pub fn cmd_traverse(
    source: &GraphSource,
    start: &str,
    max_depth: u32,
    max_results: usize,
    json: bool,
) -> BfsResult<()> {
    let graph = source.load()?;
    warn_if_absent(&graph, start);

    let result = QueryEngine::new().traverse(
        &graph,
        TraversalParams {
            start: start.to_string(),
            max_depth,
            max_results,
        },
    );

    if json {
        let nodes_info: Vec<serde_json::Value> = result
            .order
            .iter()
            .map(|node| {
                serde_json::json!({
                    "node": node,
                    "depth": result.depth(node).unwrap_or(0),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&nodes_info).unwrap_or_default()
        );
    } else {
        println!("Traversal from {}:", start);
        for node in &result.order {
            println!("  [depth {}] {}", result.depth(node).unwrap_or(0), node);
        }
        println!("Total: {} nodes", result.len());
    }
    Ok(())
}
