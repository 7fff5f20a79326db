//! Table grid building.

use super::{resolve_text, BlockIndex};
use crate::model::{Block, BlockKind, TableGrid};

/// Rebuild the grid of one TABLE block.
///
/// CELL children are placed at their `(row, column)` in the order the
/// relationship list names them; nothing is sorted. Non-CELL children and
/// dangling ids are ignored.
pub fn build_grid(table: &Block, index: &BlockIndex, threshold: f64) -> TableGrid {
    let mut grid = TableGrid::new();

    for child in index.children(table) {
        if let BlockKind::Cell { row, column } = child.kind {
            grid.insert(row, column, resolve_text(child, index, threshold));
        }
    }

    log::trace!(
        "Table {:?}: {} rows, {} cells",
        table.id,
        grid.row_count(),
        grid.cell_count()
    );
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;
    use crate::parser::IdScope;

    #[test]
    fn test_grid_follows_child_order() {
        let index = BlockIndex::build(
            vec![Page::with_blocks(vec![
                Block::table("t").with_children(["c22", "c11", "c21"]),
                Block::cell("c11", 1, 1).with_children(["a"]),
                Block::cell("c21", 2, 1).with_children(["b"]),
                Block::cell("c22", 2, 2).with_children(["c"]),
                Block::word("a", "a", 99.0),
                Block::word("b", "b", 99.0),
                Block::word("c", "c", 99.0),
            ])],
            IdScope::Document,
        );
        let grid = build_grid(index.get("t").unwrap(), &index, 0.0);

        assert_eq!(grid.row_indices(), vec![2, 1]);
        let row2: Vec<(i64, &str)> = grid
            .row(2)
            .unwrap()
            .iter()
            .map(|(col, text)| (*col, text.as_str()))
            .collect();
        assert_eq!(row2, vec![(2, "c "), (1, "b ")]);
        assert_eq!(grid.cell(1, 1), Some("a "));
    }

    #[test]
    fn test_non_cell_children_ignored() {
        let index = BlockIndex::build(
            vec![Page::with_blocks(vec![
                Block::table("t").with_children(["w", "c", "missing"]),
                Block::word("w", "stray", 99.0),
                Block::cell("c", 1, 1),
            ])],
            IdScope::Document,
        );
        let grid = build_grid(index.get("t").unwrap(), &index, 0.0);

        assert_eq!(grid.cell_count(), 1);
        assert_eq!(grid.cell(1, 1), Some(""));
    }

    #[test]
    fn test_table_without_cells_is_empty() {
        let index = BlockIndex::build(
            vec![Page::with_blocks(vec![Block::table("t")])],
            IdScope::Document,
        );
        let grid = build_grid(index.get("t").unwrap(), &index, 0.0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_sparse_rows_not_synthesized() {
        let index = BlockIndex::build(
            vec![Page::with_blocks(vec![
                Block::table("t").with_children(["r1", "r3"]),
                Block::cell("r1", 1, 1),
                Block::cell("r3", 3, 5),
            ])],
            IdScope::Document,
        );
        let grid = build_grid(index.get("t").unwrap(), &index, 0.0);

        assert_eq!(grid.row_indices(), vec![1, 3]);
        assert!(grid.row(2).is_none());
    }
}
