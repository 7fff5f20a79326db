//! Block graph parsing and table reconstruction.

pub mod decode;
mod index;
mod options;
mod reconstructor;
mod table;
mod text;

pub use index::BlockIndex;
pub use options::{IdScope, ReconstructOptions, MAX_CONFIDENCE, MIN_CONFIDENCE};
pub use reconstructor::TableReconstructor;
pub use table::build_grid;
pub use text::{resolve_text, SELECTED_MARK};
