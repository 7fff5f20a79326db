//! Rendering module for converting reconstructed tables to output formats.

mod json;
mod options;
mod report;

pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, ReportStyle, RowOrder};
pub use report::{to_report, CELL_SEPARATOR, NO_TABLE_SENTINEL};
