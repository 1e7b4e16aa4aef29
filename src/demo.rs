//! Canned graphs from the social-network walkthrough.

use crate::graph::{Graph, GraphBuilder};
use crate::types::{BfsError, BfsResult};

/// Names accepted by [`by_name`].
pub const DEMO_NAMES: [&str; 4] = ["social", "no-sellers", "peggy", "disconnected"];

/// The chapter graph: `you` and three friends, with `thom` the only mango seller.
///
/// ```text
/// you -> alice, bob, claire
/// bob -> anuj, peggy
/// alice -> peggy
/// claire -> thom, jonny
/// ```
pub fn social_network() -> Graph<String> {
    strings(
        GraphBuilder::new()
            .node("you", ["alice", "bob", "claire"])
            .node("bob", ["anuj", "peggy"])
            .node("alice", ["peggy"])
            .node("claire", ["thom", "jonny"])
            .leaf("anuj")
            .leaf("peggy")
            .leaf("thom")
            .leaf("jonny")
            .build(),
    )
}

/// A small network in which nobody sells mangoes.
pub fn mango_free_network() -> Graph<String> {
    strings(
        GraphBuilder::new()
            .node("you", ["alice", "bob"])
            .leaf("alice")
            .leaf("bob")
            .build(),
    )
}

/// Two equal-length routes to `peggy` and one to `anuj`.
pub fn peggy_network() -> Graph<String> {
    strings(
        GraphBuilder::new()
            .node("you", ["alice", "bob"])
            .node("alice", ["peggy"])
            .node("bob", ["peggy", "anuj"])
            .leaf("peggy")
            .leaf("anuj")
            .build(),
    )
}

/// `a -> b`, with `c` unreachable from either.
pub fn disconnected() -> Graph<String> {
    strings(
        GraphBuilder::new()
            .node("a", ["b"])
            .leaf("b")
            .leaf("c")
            .build(),
    )
}

/// Look up a demo graph by name.
pub fn by_name(name: &str) -> BfsResult<Graph<String>> {
    match name {
        "social" => Ok(social_network()),
        "no-sellers" => Ok(mango_free_network()),
        "peggy" => Ok(peggy_network()),
        "disconnected" => Ok(disconnected()),
        other => Err(BfsError::UnknownDemo(other.to_string())),
    }
}

fn strings(graph: Graph<&str>) -> Graph<String> {
    graph
        .iter()
        .map(|(node, neighbors)| {
            (
                node.to_string(),
                neighbors.iter().map(|n| n.to_string()).collect(),
            )
        })
        .collect()
}
