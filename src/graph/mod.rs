//! In-memory graph operations — the core data structure and BFS.

pub mod adjacency;
pub mod builder;
pub mod traversal;

pub use adjacency::{AdjacencyList, Graph};
pub use builder::GraphBuilder;
pub use traversal::{
    ends_with, is_mango_seller, is_valid_path, path_exists, search, shortest_path, traverse,
    Traversal,
};
