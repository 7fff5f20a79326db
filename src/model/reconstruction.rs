//! Reconstruction output and statistics.

use super::TableGrid;
use serde::{Deserialize, Serialize};

/// Tables rebuilt from one document, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reconstruction {
    /// One grid per TABLE block
    pub tables: Vec<TableGrid>,

    /// Counters collected while indexing and building
    pub stats: ReconstructionStats,
}

impl Reconstruction {
    /// Create a reconstruction from grids and stats.
    pub fn new(tables: Vec<TableGrid>, stats: ReconstructionStats) -> Self {
        Self { tables, stats }
    }

    /// Get the number of tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Check if no TABLE block was found.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Statistics collected during reconstruction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconstructionStats {
    /// Number of pages indexed
    pub page_count: usize,

    /// Number of blocks indexed, including shadowed ones
    pub block_count: usize,

    /// Number of TABLE blocks
    pub table_count: usize,

    /// Number of cells placed across all grids
    pub cell_count: usize,

    /// Blocks whose id replaced an earlier block's entry
    pub id_collisions: usize,

    /// CHILD references that resolve to no block
    pub dangling_references: usize,
}

impl ReconstructionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }
}
