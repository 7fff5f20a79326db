//! Reconstructed table grid.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Columns of one row, keyed by column index in insertion order.
pub type GridRow = IndexMap<i64, String>;

/// Sparse row -> column -> text grid of one table.
///
/// Rows and columns keep the order in which cells were discovered. A missing
/// index means no cell was detected there; it is never filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableGrid {
    rows: IndexMap<i64, GridRow>,
}

impl TableGrid {
    /// Create a new empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place text at `(row, column)`.
    ///
    /// The row is created on first use. Writing an occupied position replaces
    /// its text but keeps its original position in iteration order.
    pub fn insert(&mut self, row: i64, column: i64, text: String) {
        self.rows.entry(row).or_default().insert(column, text);
    }

    /// Get the text at `(row, column)`.
    pub fn cell(&self, row: i64, column: i64) -> Option<&str> {
        self.rows
            .get(&row)
            .and_then(|cols| cols.get(&column))
            .map(String::as_str)
    }

    /// Get a row by index.
    pub fn row(&self, row: i64) -> Option<&GridRow> {
        self.rows.get(&row)
    }

    /// Iterate rows in discovery order.
    pub fn rows(&self) -> impl Iterator<Item = (i64, &GridRow)> {
        self.rows.iter().map(|(index, cols)| (*index, cols))
    }

    /// Row indices in discovery order.
    pub fn row_indices(&self) -> Vec<i64> {
        self.rows.keys().copied().collect()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the widest row's column count.
    pub fn column_count(&self) -> usize {
        self.rows.values().map(IndexMap::len).max().unwrap_or(0)
    }

    /// Get the total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(IndexMap::len).sum()
    }

    /// Check if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Copy of this grid with rows and columns in ascending index order.
    pub fn sorted(&self) -> Self {
        let mut rows = self.rows.clone();
        rows.sort_keys();
        for cols in rows.values_mut() {
            cols.sort_keys();
        }
        Self { rows }
    }
}
