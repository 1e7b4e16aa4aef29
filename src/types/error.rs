//! Error types for the bfs-lab library.

use thiserror::Error;

/// Errors raised by the fallible surfaces: graph files, demo lookup and CLI input.
///
/// Traversals themselves never fail. An absent result is `None`, and a node
/// without an adjacency entry simply has no neighbors.
#[derive(Error, Debug)]
pub enum BfsError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Graph file is not a JSON object of node -> neighbor list.
    #[error("Malformed graph JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A node name that cannot be used as an identifier.
    #[error("Invalid node name: {0:?}")]
    InvalidNode(String),

    /// No demo graph with this name.
    #[error("Unknown demo graph: {0}")]
    UnknownDemo(String),

    /// A command-line argument that could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience result type for bfs-lab operations.
pub type BfsResult<T> = Result<T, BfsError>;
