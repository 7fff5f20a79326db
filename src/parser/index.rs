//! Block index: an arena of blocks plus an id lookup table.

use super::IdScope;
use crate::model::{Block, Page};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum BlockKey {
    Document(String),
    Page(usize, String),
}

/// All blocks of one document, addressable by id.
///
/// Every decoded block is kept in the arena, including blocks whose id was
/// later reused. The lookup table points at the block that wins for each key.
#[derive(Debug, Clone)]
pub struct BlockIndex {
    blocks: Vec<Block>,
    lookup: HashMap<BlockKey, usize>,
    tables: Vec<usize>,
    scope: IdScope,
    page_count: usize,
    collisions: usize,
}

impl BlockIndex {
    /// Merge pages into one index.
    ///
    /// Pages are visited in order and blocks in page order. Each block's
    /// `page` field is set to its page position. TABLE blocks are recorded in
    /// discovery order.
    pub fn build(pages: impl IntoIterator<Item = Page>, scope: IdScope) -> Self {
        let mut index = Self {
            blocks: Vec::new(),
            lookup: HashMap::new(),
            tables: Vec::new(),
            scope,
            page_count: 0,
            collisions: 0,
        };

        for (page_number, page) in pages.into_iter().enumerate() {
            log::debug!(
                "Indexing page {} with {} blocks",
                page_number,
                page.block_count()
            );
            for mut block in page.blocks {
                block.page = page_number;
                index.push(block);
            }
            index.page_count += 1;
        }

        index
    }

    fn push(&mut self, block: Block) {
        let slot = self.blocks.len();

        if let Some(id) = &block.id {
            let key = self.key(block.page, id);
            if let Some(previous) = self.lookup.insert(key, slot) {
                log::debug!(
                    "Block id {:?} on page {} replaces a {} block from page {}",
                    id,
                    block.page,
                    self.blocks[previous].block_type(),
                    self.blocks[previous].page
                );
                self.collisions += 1;
            }
        }

        if block.is_table() {
            self.tables.push(slot);
        }
        self.blocks.push(block);
    }

    fn key(&self, page: usize, id: &str) -> BlockKey {
        match self.scope {
            IdScope::Document => BlockKey::Document(id.to_string()),
            IdScope::Page => BlockKey::Page(page, id.to_string()),
        }
    }

    /// Resolve an id as seen from a block on `page`.
    pub fn resolve(&self, page: usize, id: &str) -> Option<&Block> {
        self.lookup
            .get(&self.key(page, id))
            .map(|&slot| &self.blocks[slot])
    }

    /// Look up an id without page context.
    ///
    /// With per-page scope the latest page holding the id wins, mirroring
    /// the document-wide behaviour.
    pub fn get(&self, id: &str) -> Option<&Block> {
        match self.scope {
            IdScope::Document => self.resolve(0, id),
            IdScope::Page => (0..self.page_count)
                .rev()
                .find_map(|page| self.resolve(page, id)),
        }
    }

    /// Resolved CHILD targets of `block`, in relationship order.
    /// Dangling references are skipped.
    pub fn children<'a>(&'a self, block: &'a Block) -> impl Iterator<Item = &'a Block> + 'a {
        block
            .child_ids()
            .filter_map(move |id| self.resolve(block.page, id))
    }

    /// TABLE blocks in discovery order.
    pub fn tables(&self) -> impl Iterator<Item = &Block> {
        self.tables.iter().map(|&slot| &self.blocks[slot])
    }

    /// Every indexed block, in insertion order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Count CHILD references that resolve to no block.
    pub fn dangling_references(&self) -> usize {
        self.blocks
            .iter()
            .flat_map(|block| {
                block
                    .child_ids()
                    .filter(move |id| self.resolve(block.page, id).is_none())
            })
            .count()
    }

    /// Get the number of TABLE blocks.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Get the number of blocks, including shadowed ones.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if no block was indexed.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of pages merged.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Get the number of id collisions seen while merging.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Get the id scope used for keys.
    pub fn scope(&self) -> IdScope {
        self.scope
    }
}
