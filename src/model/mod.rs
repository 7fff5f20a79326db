//! Model types for document-analysis graphs and reconstructed tables.
//!
//! [`Block`] and [`Page`] describe the recognition graph as it arrives from
//! the analysis service. [`TableGrid`] and [`Reconstruction`] describe what
//! the parser rebuilds from it.

mod block;
mod grid;
mod page;
mod reconstruction;

pub use block::{Block, BlockKind, Relationship, RelationshipKind, SelectionStatus};
pub use grid::{GridRow, TableGrid};
pub use page::Page;
pub use reconstruction::{Reconstruction, ReconstructionStats};
