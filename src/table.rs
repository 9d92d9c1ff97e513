use crate::prelude::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{BufRead, Write};

pub type StateKey = String;

/// One record of the solution tree: a state, the state it was expanded from,
/// and the turn that produced it. The root (the solved state) has neither.
/// Records are written once by the builder and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub state: StateKey,
    pub parent: Option<StateKey>,
    pub action: Option<Move>,
}

/// Point lookups against a built solution tree. A backing store that cannot
/// be reached reports [`Error::TableUnavailable`], which is retryable;
/// an absent key is `Ok(None)`.
pub trait TableLookup {
    fn get(&self, key: &str) -> Result<Option<TreeNode>>;
}

impl<T: TableLookup + ?Sized> TableLookup for &T {
    fn get(&self, key: &str) -> Result<Option<TreeNode>> {
        (**self).get(key)
    }
}

/// Bulk inserts from the tree builder. A failed batch must fail the whole
/// build; implementations never drop records silently.
pub trait TableSink {
    fn insert_batch(&mut self, nodes: &[TreeNode]) -> Result<()>;
}

/// In-memory solution tree: loaded once, then read-only.
#[derive(Debug, Default)]
pub struct MemoryTable {
    nodes: HashMap<StateKey, TreeNode>,
}

impl MemoryTable {
    pub fn new() -> MemoryTable {
        MemoryTable::default()
    }

    pub fn insert(&mut self, node: TreeNode) {
        self.nodes.insert(node.state.clone(), node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Load a table serialized as one JSON document per line.
    pub fn read_json_lines(reader: impl BufRead) -> Result<MemoryTable> {
        let mut table = MemoryTable::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            table.insert(serde_json::from_str(&line)?);
        }
        Ok(table)
    }
}

impl TableLookup for MemoryTable {
    fn get(&self, key: &str) -> Result<Option<TreeNode>> {
        Ok(self.nodes.get(key).cloned())
    }
}

impl TableSink for MemoryTable {
    fn insert_batch(&mut self, nodes: &[TreeNode]) -> Result<()> {
        for node in nodes {
            self.insert(node.clone());
        }
        Ok(())
    }
}

/// Streams tree records to a writer as one JSON document per line, the format
/// [`MemoryTable::read_json_lines`] loads.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> JsonLinesSink<W> {
        JsonLinesSink { writer }
    }

    /// Flush and hand the writer back.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> TableSink for JsonLinesSink<W> {
    fn insert_batch(&mut self, nodes: &[TreeNode]) -> Result<()> {
        for node in nodes {
            serde_json::to_writer(&mut self.writer, node)?;
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }
}
