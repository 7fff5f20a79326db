//! # blockgrid
//!
//! Table reconstruction from document-analysis block graphs.
//!
//! An analysis service returns, per page, a flat list of typed blocks
//! (pages, tables, cells, words, selection marks) linked only by CHILD id
//! lists. This library merges those pages, rebuilds the row/column grid of
//! every table and renders it as delimited text or JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use blockgrid::reconstruct_file;
//!
//! fn main() -> blockgrid::Result<()> {
//!     // Words below 50% confidence are left out
//!     let report = reconstruct_file("analysis.json", 50.0)?;
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Best-effort**: malformed blocks and dangling references only make
//!   tables sparser, they never fail the document
//! - **Discovery order**: rows and columns keep graph order unless sorting
//!   is requested
//! - **Id scoping**: document-wide ids by default, per-page ids on request
//! - **Parallel processing**: Uses Rayon for tables and document batches

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Block, BlockKind, Page, Reconstruction, ReconstructionStats, Relationship, RelationshipKind,
    SelectionStatus, TableGrid,
};
pub use parser::{BlockIndex, IdScope, ReconstructOptions, TableReconstructor};
pub use render::{JsonFormat, RenderOptions, ReportStyle, RowOrder, NO_TABLE_SENTINEL};

use rayon::prelude::*;
use std::path::Path;

/// Rebuild the tables of decoded pages and render the report.
///
/// # Arguments
///
/// * `pages` - Per-page block lists, in page order
/// * `confidence` - Minimum WORD confidence (0-100, inclusive)
///
/// # Example
///
/// ```
/// use blockgrid::{reconstruct, Block, Page};
///
/// let page = Page::with_blocks(vec![
///     Block::table("t").with_children(["c"]),
///     Block::cell("c", 1, 1).with_children(["w"]),
///     Block::word("w", "Qty", 98.0),
/// ]);
/// let report = reconstruct(vec![page], 50.0).unwrap();
/// assert_eq!(report, "Table_0\n\nQty ;\n\n\n");
/// ```
pub fn reconstruct(pages: Vec<Page>, confidence: f64) -> Result<String> {
    BlockGrid::new()
        .with_confidence(confidence)
        .reconstruct(pages)?
        .to_report()
}

/// Rebuild and render tables from response JSON text.
///
/// The text may hold one response object or an array of responses.
pub fn reconstruct_json(json: &str, confidence: f64) -> Result<String> {
    BlockGrid::new()
        .with_confidence(confidence)
        .reconstruct_json(json)?
        .to_report()
}

/// Rebuild and render tables from a response file.
///
/// # Example
///
/// ```no_run
/// use blockgrid::reconstruct_file;
///
/// let report = reconstruct_file("analysis.json", 80.0).unwrap();
/// std::fs::write("tables.csv", report).unwrap();
/// ```
pub fn reconstruct_file<P: AsRef<Path>>(path: P, confidence: f64) -> Result<String> {
    BlockGrid::new()
        .with_confidence(confidence)
        .reconstruct_files([path])?
        .to_report()
}

/// Rebuild and render several independent documents.
///
/// Each document gets its own index; results keep input order. Documents
/// are processed in parallel unless `options.parallel` is false.
pub fn reconstruct_batch(
    documents: Vec<Vec<Page>>,
    options: &ReconstructOptions,
    render_options: &RenderOptions,
) -> Vec<Result<String>> {
    let run = |pages: Vec<Page>| {
        let reconstruction =
            TableReconstructor::from_pages_with_options(pages, options.clone().sequential())
                .reconstruct()?;
        render::to_report(&reconstruction.tables, render_options)
    };

    if options.parallel {
        documents.into_par_iter().map(run).collect()
    } else {
        documents.into_iter().map(run).collect()
    }
}

/// Builder for reconstructing and rendering tables.
///
/// # Example
///
/// ```no_run
/// use blockgrid::BlockGrid;
///
/// let report = BlockGrid::new()
///     .with_confidence(80.0)
///     .per_page_ids()
///     .sorted_rows()
///     .reconstruct_files(["page1.json", "page2.json"])?
///     .to_report()?;
/// # Ok::<(), blockgrid::Error>(())
/// ```
pub struct BlockGrid {
    reconstruct_options: ReconstructOptions,
    render_options: RenderOptions,
}

impl BlockGrid {
    /// Create a new BlockGrid builder.
    pub fn new() -> Self {
        Self {
            reconstruct_options: ReconstructOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Create a builder from existing option sets.
    pub fn with_options(
        reconstruct_options: ReconstructOptions,
        render_options: RenderOptions,
    ) -> Self {
        Self {
            reconstruct_options,
            render_options,
        }
    }

    /// Set the WORD confidence threshold (0-100).
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.reconstruct_options = self.reconstruct_options.with_confidence(confidence);
        self
    }

    /// Key block ids per page.
    pub fn per_page_ids(mut self) -> Self {
        self.reconstruct_options = self.reconstruct_options.per_page_ids();
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.reconstruct_options = self.reconstruct_options.sequential();
        self
    }

    /// Render rows and columns in ascending index order.
    pub fn sorted_rows(mut self) -> Self {
        self.render_options = self.render_options.sorted();
        self
    }

    /// Set the report style.
    pub fn with_style(mut self, style: ReportStyle) -> Self {
        self.render_options = self.render_options.with_style(style);
        self
    }

    /// Rebuild tables from decoded pages.
    pub fn reconstruct(self, pages: Vec<Page>) -> Result<BlockGridResult> {
        let reconstructor =
            TableReconstructor::from_pages_with_options(pages, self.reconstruct_options);
        Ok(BlockGridResult {
            reconstruction: reconstructor.reconstruct()?,
            render_options: self.render_options,
        })
    }

    /// Rebuild tables from response JSON text.
    pub fn reconstruct_json(self, json: &str) -> Result<BlockGridResult> {
        let reconstructor =
            TableReconstructor::from_json_with_options(json, self.reconstruct_options)?;
        Ok(BlockGridResult {
            reconstruction: reconstructor.reconstruct()?,
            render_options: self.render_options,
        })
    }

    /// Rebuild tables from response files, merging their pages in order.
    pub fn reconstruct_files<P: AsRef<Path>>(
        self,
        paths: impl IntoIterator<Item = P>,
    ) -> Result<BlockGridResult> {
        let reconstructor =
            TableReconstructor::open_many_with_options(paths, self.reconstruct_options)?;
        Ok(BlockGridResult {
            reconstruction: reconstructor.reconstruct()?,
            render_options: self.render_options,
        })
    }
}

impl Default for BlockGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of reconstructing a document.
pub struct BlockGridResult {
    /// The rebuilt tables
    pub reconstruction: Reconstruction,
    /// Render options to use
    render_options: RenderOptions,
}

impl BlockGridResult {
    /// Render the delimited-text report.
    pub fn to_report(&self) -> Result<String> {
        render::to_report(&self.reconstruction.tables, &self.render_options)
    }

    /// Render JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.reconstruction, &self.render_options, format)
    }

    /// Get the rebuilt grids.
    pub fn tables(&self) -> &[TableGrid] {
        &self.reconstruction.tables
    }

    /// Get reconstruction statistics.
    pub fn stats(&self) -> &ReconstructionStats {
        &self.reconstruction.stats
    }
}
