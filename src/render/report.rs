//! Delimited-text report rendering.

use std::borrow::Cow;
use std::fmt::Write;

use crate::error::{Error, Result};
use crate::model::TableGrid;

use super::{RenderOptions, ReportStyle, RowOrder};

/// Report returned when the document has no TABLE block.
pub const NO_TABLE_SENTINEL: &str = "<b> NO TABLE FOUND </b>";

/// Cell terminator.
pub const CELL_SEPARATOR: char = ';';

/// Render grids as a delimited-text report.
///
/// Each table gets a `Table_<i>` header and a blank line, then one line per
/// row where every cell, the last included, is followed by `;`. Two blank
/// lines close each table. An empty slice yields [`NO_TABLE_SENTINEL`]; an
/// empty grid still gets its header.
pub fn to_report(tables: &[TableGrid], options: &RenderOptions) -> Result<String> {
    if tables.is_empty() {
        return Ok(NO_TABLE_SENTINEL.to_string());
    }

    let mut output = String::new();
    for (index, grid) in tables.iter().enumerate() {
        write_table(&mut output, index, grid, options)
            .map_err(|e| Error::Render(format!("table {}: {}", index, e)))?;
    }
    Ok(output)
}

fn write_table(
    output: &mut String,
    index: usize,
    grid: &TableGrid,
    options: &RenderOptions,
) -> std::fmt::Result {
    let grid = match options.row_order {
        RowOrder::Discovery => Cow::Borrowed(grid),
        RowOrder::Sorted => Cow::Owned(grid.sorted()),
    };

    match options.style {
        ReportStyle::Plain => write!(output, "Table_{}\n\n", index)?,
        ReportStyle::Legacy => write!(output, "Table: Table_{}\n\n", index)?,
    }

    for (_, cols) in grid.rows() {
        for text in cols.values() {
            output.push_str(text);
            output.push(CELL_SEPARATOR);
        }
        output.push('\n');
    }

    match options.style {
        ReportStyle::Plain => output.push_str("\n\n"),
        ReportStyle::Legacy => output.push_str("\n\n\n\n\n"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(cells: &[(i64, i64, &str)]) -> TableGrid {
        let mut grid = TableGrid::new();
        for &(row, col, text) in cells {
            grid.insert(row, col, text.to_string());
        }
        grid
    }

    #[test]
    fn test_no_tables_sentinel() {
        let report = to_report(&[], &RenderOptions::default()).unwrap();
        assert_eq!(report, NO_TABLE_SENTINEL);

        let legacy = to_report(
            &[],
            &RenderOptions::new().with_style(ReportStyle::Legacy),
        )
        .unwrap();
        assert_eq!(legacy, NO_TABLE_SENTINEL);
    }

    #[test]
    fn test_single_table() {
        let tables = [grid(&[(1, 1, "Qty "), (1, 2, "")])];
        let report = to_report(&tables, &RenderOptions::default()).unwrap();
        assert_eq!(report, "Table_0\n\nQty ;;\n\n\n");
    }

    #[test]
    fn test_tables_separated() {
        let tables = [
            grid(&[(1, 1, "a "), (2, 1, "b ")]),
            grid(&[(1, 1, "c ")]),
        ];
        let report = to_report(&tables, &RenderOptions::default()).unwrap();
        assert_eq!(report, "Table_0\n\na ;\nb ;\n\n\nTable_1\n\nc ;\n\n\n");
    }

    #[test]
    fn test_empty_grid_gets_header() {
        let report = to_report(&[TableGrid::new()], &RenderOptions::default()).unwrap();
        assert_eq!(report, "Table_0\n\n\n\n");
    }

    #[test]
    fn test_discovery_order_by_default() {
        let tables = [grid(&[(2, 2, "d "), (2, 1, "c "), (1, 1, "a ")])];

        let discovery = to_report(&tables, &RenderOptions::default()).unwrap();
        assert_eq!(discovery, "Table_0\n\nd ;c ;\na ;\n\n\n");

        let sorted = to_report(&tables, &RenderOptions::new().sorted()).unwrap();
        assert_eq!(sorted, "Table_0\n\na ;\nc ;d ;\n\n\n");
    }

    #[test]
    fn test_legacy_layout() {
        let tables = [grid(&[(1, 1, "x ")])];
        let report = to_report(
            &tables,
            &RenderOptions::new().with_style(ReportStyle::Legacy),
        )
        .unwrap();
        assert_eq!(report, "Table: Table_0\n\nx ;\n\n\n\n\n\n");
    }

    #[test]
    fn test_negative_indices_rendered_as_is() {
        let tables = [grid(&[(-1, 0, "neg ")])];
        let report = to_report(&tables, &RenderOptions::default()).unwrap();
        assert_eq!(report, "Table_0\n\nneg ;\n\n\n");
    }
}
