//! Table reconstruction driver.

use std::fs;
use std::io::Read;
use std::path::Path;

use rayon::prelude::*;

use crate::error::Result;
use crate::model::{Page, Reconstruction, ReconstructionStats, TableGrid};

use super::decode::{pages_from_slice, pages_from_str};
use super::options::ReconstructOptions;
use super::{build_grid, BlockIndex};

/// Rebuilds the tables of one document from its analysis pages.
pub struct TableReconstructor {
    pages: Vec<Page>,
    options: ReconstructOptions,
}

impl TableReconstructor {
    /// Wrap already decoded pages.
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self::from_pages_with_options(pages, ReconstructOptions::default())
    }

    /// Wrap already decoded pages with custom options.
    pub fn from_pages_with_options(pages: Vec<Page>, options: ReconstructOptions) -> Self {
        Self { pages, options }
    }

    /// Open a response file (one response or an array of responses).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ReconstructOptions::default())
    }

    /// Open a response file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ReconstructOptions) -> Result<Self> {
        Self::open_many_with_options([path], options)
    }

    /// Open several response files; their pages are merged in argument order.
    pub fn open_many_with_options<P: AsRef<Path>>(
        paths: impl IntoIterator<Item = P>,
        options: ReconstructOptions,
    ) -> Result<Self> {
        let mut pages = Vec::new();
        for path in paths {
            let path = path.as_ref();
            let data = fs::read(path)?;
            let decoded = pages_from_slice(&data)?;
            log::debug!("{}: {} pages", path.display(), decoded.len());
            pages.extend(decoded);
        }
        Ok(Self { pages, options })
    }

    /// Decode response JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with_options(json, ReconstructOptions::default())
    }

    /// Decode response JSON text with custom options.
    pub fn from_json_with_options(json: &str, options: ReconstructOptions) -> Result<Self> {
        Ok(Self {
            pages: pages_from_str(json)?,
            options,
        })
    }

    /// Decode response JSON bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ReconstructOptions::default())
    }

    /// Decode response JSON bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ReconstructOptions) -> Result<Self> {
        Ok(Self {
            pages: pages_from_slice(data)?,
            options,
        })
    }

    /// Decode response JSON from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ReconstructOptions::default())
    }

    /// Decode response JSON from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(
        mut reader: R,
        options: ReconstructOptions,
    ) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Get the pages to be merged.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Index the pages and rebuild every table.
    ///
    /// Fails only on an invalid confidence threshold; graph irregularities
    /// yield sparser grids instead.
    pub fn reconstruct(self) -> Result<Reconstruction> {
        self.options.validate()?;

        let index = BlockIndex::build(self.pages, self.options.id_scope);
        let threshold = self.options.confidence;

        let tables: Vec<TableGrid> = if self.options.parallel {
            let roots: Vec<_> = index.tables().collect();
            roots
                .par_iter()
                .map(|table| build_grid(table, &index, threshold))
                .collect()
        } else {
            index
                .tables()
                .map(|table| build_grid(table, &index, threshold))
                .collect()
        };

        let stats = ReconstructionStats {
            page_count: index.page_count(),
            block_count: index.len(),
            table_count: index.table_count(),
            cell_count: tables.iter().map(TableGrid::cell_count).sum(),
            id_collisions: index.collisions(),
            dangling_references: index.dangling_references(),
        };
        log::debug!(
            "Rebuilt {} tables from {} blocks on {} pages",
            stats.table_count,
            stats.block_count,
            stats.page_count
        );

        Ok(Reconstruction::new(tables, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::Block;

    fn pages() -> Vec<Page> {
        vec![Page::with_blocks(vec![
            Block::table("t1").with_children(["c1"]),
            Block::cell("c1", 1, 1).with_children(["w1"]),
            Block::word("w1", "hi", 90.0),
            Block::table("t2"),
        ])]
    }

    #[test]
    fn test_reconstruct_parallel_matches_sequential() {
        let parallel = TableReconstructor::from_pages(pages()).reconstruct().unwrap();
        let sequential = TableReconstructor::from_pages_with_options(
            pages(),
            ReconstructOptions::new().sequential(),
        )
        .reconstruct()
        .unwrap();

        assert_eq!(parallel, sequential);
        assert_eq!(parallel.table_count(), 2);
        assert_eq!(parallel.tables[0].cell(1, 1), Some("hi "));
        assert!(parallel.tables[1].is_empty());
    }

    #[test]
    fn test_stats() {
        let result = TableReconstructor::from_pages(pages()).reconstruct().unwrap();
        assert_eq!(result.stats.page_count, 1);
        assert_eq!(result.stats.block_count, 4);
        assert_eq!(result.stats.table_count, 2);
        assert_eq!(result.stats.cell_count, 1);
        assert_eq!(result.stats.dangling_references, 0);
    }

    #[test]
    fn test_invalid_confidence() {
        let result = TableReconstructor::from_pages_with_options(
            pages(),
            ReconstructOptions::new().with_confidence(101.0),
        )
        .reconstruct();
        assert!(matches!(result, Err(Error::InvalidConfidence(_))));
    }

    #[test]
    fn test_from_reader() {
        let json = br#"{"Blocks":[{"Id":"t","BlockType":"TABLE"}]}"#;
        let result = TableReconstructor::from_reader(&json[..])
            .unwrap()
            .reconstruct()
            .unwrap();
        assert_eq!(result.table_count(), 1);
    }

    #[test]
    fn test_open_missing_file() {
        let result = TableReconstructor::open("/nonexistent/response.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
