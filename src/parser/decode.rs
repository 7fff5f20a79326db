//! Decoding of document-analysis responses.
//!
//! Responses use the analysis service's wire shape:
//!
//! ```json
//! { "Blocks": [ { "Id": "1", "BlockType": "WORD", "Text": "Qty",
//!                 "Confidence": 98.2,
//!                 "Relationships": [ { "Type": "CHILD", "Ids": ["2"] } ] } ] }
//! ```
//!
//! Fields are read one at a time so a bad field only degrades its own block.
//! A known type that lacks the fields it needs is kept as
//! [`BlockKind::Other`]: it stays addressable but contributes nothing.

use crate::error::{Error, Result};
use crate::model::{Block, BlockKind, Page, Relationship, RelationshipKind, SelectionStatus};
use serde_json::Value;

/// Decode a JSON document holding one response or an array of responses.
pub fn pages_from_str(json: &str) -> Result<Vec<Page>> {
    let value: Value = serde_json::from_str(json)?;
    pages_from_value(&value)
}

/// Decode JSON bytes holding one response or an array of responses.
pub fn pages_from_slice(data: &[u8]) -> Result<Vec<Page>> {
    let value: Value = serde_json::from_slice(data)?;
    pages_from_value(&value)
}

/// Decode an already parsed response or array of responses.
pub fn pages_from_value(value: &Value) -> Result<Vec<Page>> {
    match value {
        Value::Array(responses) => responses.iter().map(page_from_value).collect(),
        Value::Object(_) => Ok(vec![page_from_value(value)?]),
        _ => Err(Error::InvalidResponse(
            "expected a response object or an array of responses".into(),
        )),
    }
}

/// Decode a single response into a page.
///
/// The response must be an object with a `Blocks` array; anything inside
/// that array is decoded best-effort.
pub fn page_from_value(value: &Value) -> Result<Page> {
    let blocks = value
        .get("Blocks")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::InvalidResponse("missing Blocks array".into()))?;

    let mut page = Page::new();
    for (position, entry) in blocks.iter().enumerate() {
        match block_from_value(entry) {
            Some(block) => page.add_block(block),
            None => log::warn!("Skipping non-object entry at Blocks[{}]", position),
        }
    }
    Ok(page)
}

/// Decode one block record. Returns `None` only when `value` is not an object.
pub fn block_from_value(value: &Value) -> Option<Block> {
    let record = value.as_object()?;

    let id = record.get("Id").and_then(Value::as_str).map(str::to_string);
    let block_type = record
        .get("BlockType")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let kind = match block_type {
        "PAGE" => BlockKind::Page,
        "TABLE" => BlockKind::Table,
        "CELL" => match (index_field(value, "RowIndex"), index_field(value, "ColumnIndex")) {
            (Some(row), Some(column)) => BlockKind::Cell { row, column },
            _ => other(block_type),
        },
        "WORD" => match (
            value.get("Text").and_then(Value::as_str),
            value.get("Confidence").and_then(Value::as_f64),
        ) {
            (Some(text), Some(confidence)) => BlockKind::Word {
                text: text.to_string(),
                confidence,
            },
            _ => other(block_type),
        },
        "SELECTION_ELEMENT" => match value
            .get("SelectionStatus")
            .and_then(Value::as_str)
            .and_then(SelectionStatus::parse)
        {
            Some(status) => BlockKind::SelectionElement { status },
            None => other(block_type),
        },
        _ => other(block_type),
    };

    Some(Block {
        id,
        page: 0,
        kind,
        relationships: relationships(value),
    })
}

fn other(block_type: &str) -> BlockKind {
    BlockKind::Other {
        block_type: block_type.to_string(),
    }
}

fn index_field(value: &Value, key: &str) -> Option<i64> {
    let field = value.get(key)?;
    // some producers emit indices as floats (1.0)
    field
        .as_i64()
        .or_else(|| field.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
}

fn relationships(value: &Value) -> Vec<Relationship> {
    let Some(entries) = value.get("Relationships").and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let kind = RelationshipKind::parse(entry.get("Type")?.as_str()?);
            let ids = entry
                .get("Ids")
                .and_then(Value::as_array)
                .map(|ids| {
                    ids.iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            Some(Relationship { kind, ids })
        })
        .collect()
}
