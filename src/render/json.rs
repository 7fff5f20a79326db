//! JSON rendering for reconstructed tables.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Reconstruction, ReconstructionStats, TableGrid};

use super::{RenderOptions, RowOrder};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    table_count: usize,
    stats: &'a ReconstructionStats,
    tables: Vec<JsonTable>,
}

#[derive(Serialize)]
struct JsonTable {
    index: usize,
    rows: Vec<JsonRow>,
}

#[derive(Serialize)]
struct JsonRow {
    row: i64,
    cells: Vec<JsonCell>,
}

#[derive(Serialize)]
struct JsonCell {
    column: i64,
    text: String,
}

impl JsonTable {
    fn from_grid(index: usize, grid: &TableGrid) -> Self {
        let rows = grid
            .rows()
            .map(|(row, cols)| JsonRow {
                row,
                cells: cols
                    .iter()
                    .map(|(column, text)| JsonCell {
                        column: *column,
                        text: text.clone(),
                    })
                    .collect(),
            })
            .collect();
        Self { index, rows }
    }
}

/// Convert a reconstruction to JSON.
///
/// Rows and cells are arrays so their order survives any JSON consumer.
pub fn to_json(
    reconstruction: &Reconstruction,
    options: &RenderOptions,
    format: JsonFormat,
) -> Result<String> {
    let tables = reconstruction
        .tables
        .iter()
        .enumerate()
        .map(|(index, grid)| match options.row_order {
            RowOrder::Discovery => JsonTable::from_grid(index, grid),
            RowOrder::Sorted => JsonTable::from_grid(index, &grid.sorted()),
        })
        .collect();

    let report = JsonReport {
        table_count: reconstruction.table_count(),
        stats: &reconstruction.stats,
        tables,
    };

    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&report),
        JsonFormat::Compact => serde_json::to_string(&report),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
