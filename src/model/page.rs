//! Page-level types.

use super::Block;
use serde::{Deserialize, Serialize};

/// The blocks returned by one document-analysis call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Blocks in source order
    pub blocks: Vec<Block>,
}

impl Page {
    /// Create a new empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page from a block list.
    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Add a block to the page.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Get the number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Get the number of TABLE blocks.
    pub fn table_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_table()).count()
    }

    /// Check if the page has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
