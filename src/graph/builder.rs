//! Fluent API for building Graph instances.

use std::hash::Hash;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// ```
/// use bfs_lab::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .node("you", ["alice", "bob"])
///     .link("bob", "anuj")
///     .leaf("alice")
///     .build();
/// assert_eq!(graph.neighbors(&"you"), &["alice", "bob"]);
/// ```
pub struct GraphBuilder<N> {
    graph: Graph<N>,
}

impl<N: Eq + Hash + Clone> GraphBuilder<N> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Set the full neighbor list of a node.
    pub fn node<I>(mut self, node: N, neighbors: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        self.graph
            .set_neighbors(node, neighbors.into_iter().collect());
        self
    }

    /// Add a node with no outgoing edges.
    pub fn leaf(mut self, node: N) -> Self {
        self.graph.add_node(node);
        self
    }

    /// Add an edge between two nodes.
    pub fn link(mut self, from: N, to: N) -> Self {
        self.graph.add_edge(from, to);
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph<N> {
        self.graph
    }
}

impl<N: Eq + Hash + Clone> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
