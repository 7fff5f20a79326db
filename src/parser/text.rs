//! Cell text resolution.

use super::BlockIndex;
use crate::model::{Block, BlockKind, SelectionStatus};

/// Token emitted for a selected checkbox or radio mark.
pub const SELECTED_MARK: &str = "X";

/// Aggregate the text contributed by `block`'s CHILD blocks.
///
/// WORD children add their text when `confidence >= threshold`. Selected
/// SELECTION_ELEMENT children add [`SELECTED_MARK`] whatever their
/// confidence. Each token is followed by one space, the last one included.
/// Other children and dangling ids add nothing.
pub fn resolve_text(block: &Block, index: &BlockIndex, threshold: f64) -> String {
    let mut text = String::new();

    for child in index.children(block) {
        match &child.kind {
            BlockKind::Word {
                text: word,
                confidence,
            } if *confidence >= threshold => {
                text.push_str(word);
                text.push(' ');
            }
            BlockKind::SelectionElement {
                status: SelectionStatus::Selected,
            } => {
                text.push_str(SELECTED_MARK);
                text.push(' ');
            }
            _ => {}
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;
    use crate::parser::IdScope;

    fn index_of(blocks: Vec<Block>) -> BlockIndex {
        BlockIndex::build(vec![Page::with_blocks(blocks)], IdScope::Document)
    }

    #[test]
    fn test_words_in_relationship_order() {
        let index = index_of(vec![
            Block::cell("c", 1, 1).with_children(["w2", "w1"]),
            Block::word("w1", "world", 90.0),
            Block::word("w2", "hello", 90.0),
        ]);
        let cell = index.get("c").unwrap();
        assert_eq!(resolve_text(cell, &index, 50.0), "hello world ");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let index = index_of(vec![
            Block::cell("c", 1, 1).with_children(["w1", "w2"]),
            Block::word("w1", "keep", 50.0),
            Block::word("w2", "drop", 49.99),
        ]);
        let cell = index.get("c").unwrap();
        assert_eq!(resolve_text(cell, &index, 50.0), "keep ");
    }

    #[test]
    fn test_threshold_keeps_full_precision() {
        let index = index_of(vec![
            Block::cell("c", 1, 1).with_children(["w1", "w2"]),
            Block::word("w1", "keep", 80.000_000_02),
            Block::word("w2", "drop", 80.000_000_01),
        ]);
        let cell = index.get("c").unwrap();
        assert_eq!(resolve_text(cell, &index, 80.000_000_015), "keep ");
    }

    #[test]
    fn test_selection_marks_ignore_confidence() {
        let index = index_of(vec![
            Block::cell("c", 1, 1).with_children(["s1", "s2", "w"]),
            Block::selection("s1", SelectionStatus::Selected),
            Block::selection("s2", SelectionStatus::NotSelected),
            Block::word("w", "low", 1.0),
        ]);
        let cell = index.get("c").unwrap();
        assert_eq!(resolve_text(cell, &index, 100.0), "X ");
    }

    #[test]
    fn test_dangling_and_other_children_add_nothing() {
        let index = index_of(vec![
            Block::cell("c", 1, 1).with_children(["nope", "l", "w"]),
            Block::new(
                "l",
                BlockKind::Other {
                    block_type: "LINE".into(),
                },
            ),
            Block::word("w", "ok", 80.0),
        ]);
        let cell = index.get("c").unwrap();
        assert_eq!(resolve_text(cell, &index, 0.0), "ok ");
    }

    #[test]
    fn test_no_children_is_empty() {
        let index = index_of(vec![Block::cell("c", 1, 1)]);
        let cell = index.get("c").unwrap();
        assert_eq!(resolve_text(cell, &index, 0.0), "");
    }
}
