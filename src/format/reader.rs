//! Reads JSON graph files into an in-memory graph.

use std::io::Read;
use std::path::Path;

use log::debug;

use crate::graph::Graph;
use crate::types::{BfsError, BfsResult};

/// Reader for JSON adjacency-list files: `{"node": ["neighbor", ...], ...}`.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph file.
    pub fn read_from_file(path: &Path) -> BfsResult<Graph<String>> {
        let data = std::fs::read_to_string(path)?;
        let graph = Self::from_str(&data)?;
        debug!(
            "loaded {} ({} nodes, {} edges)",
            path.display(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Read from any reader.
    pub fn read_from(reader: &mut impl Read) -> BfsResult<Graph<String>> {
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Self::from_str(&data)
    }

    /// Parse a graph from a JSON string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(data: &str) -> BfsResult<Graph<String>> {
        let graph: Graph<String> = serde_json::from_str(data)?;
        validate(&graph)?;
        Ok(graph)
    }
}

/// Node names, keys and neighbors alike, must be non-blank.
fn validate(graph: &Graph<String>) -> BfsResult<()> {
    for (node, neighbors) in graph.iter() {
        if node.trim().is_empty() {
            return Err(BfsError::InvalidNode(node.clone()));
        }
        if let Some(bad) = neighbors.iter().find(|n| n.trim().is_empty()) {
            return Err(BfsError::InvalidNode(bad.clone()));
        }
    }
    Ok(())
}
