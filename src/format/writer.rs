//! Writes in-memory graphs to JSON graph files.

use std::io::Write;
use std::path::Path;

use crate::graph::Graph;
use crate::types::BfsResult;

/// Writer for JSON adjacency-list files.
pub struct GraphWriter {
    pretty: bool,
}

impl GraphWriter {
    /// Create a writer. `pretty` selects indented output.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Write a graph to a file, replacing any existing content.
    pub fn write_to_file(&self, graph: &Graph<String>, path: &Path) -> BfsResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a graph to any writer, followed by a newline.
    pub fn write_to(&self, graph: &Graph<String>, writer: &mut impl Write) -> BfsResult<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, graph)?;
        } else {
            serde_json::to_writer(&mut *writer, graph)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    /// Serialize a graph to a JSON string.
    pub fn to_string(&self, graph: &Graph<String>) -> BfsResult<String> {
        let s = if self.pretty {
            serde_json::to_string_pretty(graph)?
        } else {
            serde_json::to_string(graph)?
        };
        Ok(s)
    }
}

impl Default for GraphWriter {
    fn default() -> Self {
        Self::new(true)
    }
}
