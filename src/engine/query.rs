//! Query executor — parameterised BFS queries.

use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::traversal::{ends_with, search, shortest_path, traverse, Traversal};
use crate::graph::AdjacencyList;
use crate::types::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_RESULTS, MANGO_SELLER_SUFFIX};

/// Parameters for a suffix search query.
pub struct SearchParams<N> {
    /// Node whose neighbors seed the search.
    pub start: N,
    /// Last character a matching node name must have.
    pub suffix: char,
}

impl<N> SearchParams<N> {
    /// Search for mango sellers (names ending in `'m'`) from `start`.
    pub fn mango_seller(start: N) -> Self {
        Self {
            start,
            suffix: MANGO_SELLER_SUFFIX,
        }
    }
}

/// Result of a suffix search query.
pub struct SearchResult<N> {
    /// The node the search started from.
    pub start: N,
    /// The closest matching node, if any.
    pub found: Option<N>,
}

/// Result of a shortest path query.
pub struct PathResult<N> {
    /// Requested start node.
    pub start: N,
    /// Requested end node.
    pub end: N,
    /// The shortest path, `None` when `end` is unreachable.
    pub path: Option<Vec<N>>,
}

impl<N> PathResult<N> {
    /// Number of edges on the path.
    pub fn hops(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}

/// Parameters for a traversal query.
pub struct TraversalParams<N> {
    /// Starting node.
    pub start: N,
    /// Maximum depth (number of hops).
    pub max_depth: u32,
    /// Maximum number of nodes to return.
    pub max_results: usize,
}

impl<N> TraversalParams<N> {
    /// Traversal from `start` with the default limits.
    pub fn from_start(start: N) -> Self {
        Self {
            start,
            max_depth: DEFAULT_MAX_DEPTH,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// The query engine supports all query operations.
pub struct QueryEngine;

impl QueryEngine {
    /// Create a new query engine.
    pub fn new() -> Self {
        Self
    }

    /// Find the closest node, excluding `start`, whose name ends with the suffix.
    pub fn search<N, G>(&self, graph: &G, params: SearchParams<N>) -> SearchResult<N>
    where
        N: AsRef<str> + Eq + Hash + Clone + Debug,
        G: AdjacencyList<N> + ?Sized,
    {
        let found = search(graph, &params.start, ends_with::<N>(params.suffix));
        SearchResult {
            start: params.start,
            found,
        }
    }

    /// Shortest path from `start` to `end`.
    pub fn shortest_path<N, G>(&self, graph: &G, start: N, end: N) -> PathResult<N>
    where
        N: Eq + Hash + Clone + Debug,
        G: AdjacencyList<N> + ?Sized,
    {
        let path = shortest_path(graph, &start, &end);
        PathResult { start, end, path }
    }

    /// Level-order traversal from a starting node.
    pub fn traverse<N, G>(&self, graph: &G, params: TraversalParams<N>) -> Traversal<N>
    where
        N: Eq + Hash + Clone,
        G: AdjacencyList<N> + ?Sized,
    {
        traverse(graph, &params.start, params.max_depth, params.max_results)
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}
