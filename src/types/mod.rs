//! Shared types and defaults.

pub mod error;

pub use error::{BfsError, BfsResult};

/// Last letter that marks a mango seller in the demo network.
pub const MANGO_SELLER_SUFFIX: char = 'm';

/// Default depth limit for level-order traversal reports.
pub const DEFAULT_MAX_DEPTH: u32 = 32;

/// Default cap on nodes returned by a traversal report.
pub const DEFAULT_MAX_RESULTS: usize = 1000;

/// Demo graph used when no graph source is given.
pub const DEFAULT_DEMO: &str = "social";
