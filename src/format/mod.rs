//! JSON graph file format — reader and writer.

pub mod reader;
pub mod writer;

pub use reader::GraphReader;
pub use writer::GraphWriter;
