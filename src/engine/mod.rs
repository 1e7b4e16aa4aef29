//! High-level operations — the query engine.

pub mod query;

pub use query::{PathResult, QueryEngine, SearchParams, SearchResult, TraversalParams};
