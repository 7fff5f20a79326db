//! Recognition graph nodes.

use serde::{Deserialize, Serialize};

/// A single node of the document-analysis graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Opaque identifier, unique within one page only.
    /// `None` when the source record carried no usable id.
    pub id: Option<String>,

    /// 0-based index of the page this block was decoded from
    pub page: usize,

    /// Block type with the fields valid for it
    pub kind: BlockKind,

    /// Outgoing relationships, in source order
    pub relationships: Vec<Relationship>,
}

impl Block {
    /// Create a block with no relationships.
    pub fn new(id: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id: Some(id.into()),
            page: 0,
            kind,
            relationships: Vec::new(),
        }
    }

    /// Create a block that has no identifier.
    pub fn anonymous(kind: BlockKind) -> Self {
        Self {
            id: None,
            page: 0,
            kind,
            relationships: Vec::new(),
        }
    }

    /// Create a TABLE block.
    pub fn table(id: impl Into<String>) -> Self {
        Self::new(id, BlockKind::Table)
    }

    /// Create a CELL block at the given 1-based position.
    pub fn cell(id: impl Into<String>, row: i64, column: i64) -> Self {
        Self::new(id, BlockKind::Cell { row, column })
    }

    /// Create a WORD block.
    pub fn word(id: impl Into<String>, text: impl Into<String>, confidence: f64) -> Self {
        Self::new(
            id,
            BlockKind::Word {
                text: text.into(),
                confidence,
            },
        )
    }

    /// Create a SELECTION_ELEMENT block.
    pub fn selection(id: impl Into<String>, status: SelectionStatus) -> Self {
        Self::new(id, BlockKind::SelectionElement { status })
    }

    /// Append a CHILD relationship and return self.
    pub fn with_children<S: Into<String>>(mut self, ids: impl IntoIterator<Item = S>) -> Self {
        self.relationships.push(Relationship::child(ids));
        self
    }

    /// Append an arbitrary relationship and return self.
    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// Set the page index and return self.
    pub fn on_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Ids referenced through CHILD relationships, in order.
    pub fn child_ids(&self) -> impl Iterator<Item = &str> {
        self.relationships
            .iter()
            .filter(|r| r.kind == RelationshipKind::Child)
            .flat_map(|r| r.ids.iter().map(String::as_str))
    }

    /// Check if this block is a table root.
    pub fn is_table(&self) -> bool {
        matches!(self.kind, BlockKind::Table)
    }

    /// Source type name (e.g. `"WORD"`).
    pub fn block_type(&self) -> &str {
        self.kind.type_name()
    }
}

/// Block type, carrying only the fields valid for each type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockKind {
    /// A page root
    Page,
    /// A table root
    Table,
    /// A table cell; indices are 1-based and may be sparse
    Cell { row: i64, column: i64 },
    /// A recognized word
    Word { text: String, confidence: f64 },
    /// A checkbox or radio mark
    SelectionElement { status: SelectionStatus },
    /// Any other type, or a known type missing its required fields
    Other { block_type: String },
}

impl BlockKind {
    /// Wire name of this type.
    pub fn type_name(&self) -> &str {
        match self {
            BlockKind::Page => "PAGE",
            BlockKind::Table => "TABLE",
            BlockKind::Cell { .. } => "CELL",
            BlockKind::Word { .. } => "WORD",
            BlockKind::SelectionElement { .. } => "SELECTION_ELEMENT",
            BlockKind::Other { block_type } => block_type,
        }
    }
}

/// State of a selection mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionStatus {
    Selected,
    NotSelected,
}

impl SelectionStatus {
    /// Parse the wire value; unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "SELECTED" => Some(SelectionStatus::Selected),
            "NOT_SELECTED" => Some(SelectionStatus::NotSelected),
            _ => None,
        }
    }
}

/// A typed edge list from a block to other blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Relationship type
    pub kind: RelationshipKind,

    /// Target block ids, in source order
    pub ids: Vec<String>,
}

impl Relationship {
    /// Create a CHILD relationship.
    pub fn child<S: Into<String>>(ids: impl IntoIterator<Item = S>) -> Self {
        Self {
            kind: RelationshipKind::Child,
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Relationship type. Only `Child` is consumed during reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipKind {
    Child,
    Other(String),
}

impl RelationshipKind {
    /// Parse the wire value.
    pub fn parse(s: &str) -> Self {
        match s {
            "CHILD" => RelationshipKind::Child,
            other => RelationshipKind::Other(other.to_string()),
        }
    }
}
