//! Rendering options and configuration.

/// Options for rendering reconstructed tables.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Order in which rows and columns are written
    pub row_order: RowOrder,

    /// Report layout
    pub style: ReportStyle,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row order.
    pub fn with_row_order(mut self, order: RowOrder) -> Self {
        self.row_order = order;
        self
    }

    /// Write rows and columns in ascending index order.
    pub fn sorted(mut self) -> Self {
        self.row_order = RowOrder::Sorted;
        self
    }

    /// Set the report style.
    pub fn with_style(mut self, style: ReportStyle) -> Self {
        self.style = style;
        self
    }
}

/// Row and column ordering in rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// The order cells were discovered in the block graph
    #[default]
    Discovery,
    /// Ascending row index, then ascending column index
    Sorted,
}

/// Layout of the delimited-text report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportStyle {
    /// `Table_<i>` headers, tables separated by three newlines
    #[default]
    Plain,
    /// `Table: Table_<i>` headers and the wider spacing of the earlier
    /// service output
    Legacy,
}
