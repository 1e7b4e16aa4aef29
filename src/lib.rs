//! bfs-lab — breadth-first search over adjacency-list graphs.
//!
//! Two level-order traversals sit at the core: [`search`] finds the closest
//! node satisfying a predicate, and [`shortest_path`] finds a minimum-hop path
//! between two nodes. Both run against any [`AdjacencyList`], so a plain
//! `HashMap<N, Vec<N>>` works as well as the owned [`Graph`].

pub mod cli;
pub mod demo;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{PathResult, QueryEngine, SearchParams, SearchResult, TraversalParams};
pub use format::{GraphReader, GraphWriter};
pub use graph::{
    ends_with, is_mango_seller, is_valid_path, path_exists, search, shortest_path, traverse,
    AdjacencyList, Graph, GraphBuilder, Traversal,
};
pub use types::{
    BfsError, BfsResult, DEFAULT_DEMO, DEFAULT_MAX_DEPTH, DEFAULT_MAX_RESULTS,
    MANGO_SELLER_SUFFIX,
};
