//! Reconstruction options and configuration.

use crate::error::{Error, Result};

/// Lowest accepted confidence threshold.
pub const MIN_CONFIDENCE: f64 = 0.0;

/// Highest accepted confidence threshold.
pub const MAX_CONFIDENCE: f64 = 100.0;

/// Options for rebuilding tables from a block graph.
#[derive(Debug, Clone)]
pub struct ReconstructOptions {
    /// Minimum WORD confidence (inclusive, 0-100) for its text to be kept
    pub confidence: f64,

    /// How block ids are keyed across pages
    pub id_scope: IdScope,

    /// Whether to build grids in parallel
    pub parallel: bool,
}

impl ReconstructOptions {
    /// Create new reconstruct options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the confidence threshold.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Set the id scope.
    pub fn with_id_scope(mut self, scope: IdScope) -> Self {
        self.id_scope = scope;
        self
    }

    /// Key ids per page so equal ids on different pages never collide.
    pub fn per_page_ids(mut self) -> Self {
        self.id_scope = IdScope::Page;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check that the threshold is a number on the 0-100 scale.
    pub fn validate(&self) -> Result<()> {
        if (MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&self.confidence) {
            Ok(())
        } else {
            Err(Error::InvalidConfidence(self.confidence))
        }
    }
}

impl Default for ReconstructOptions {
    fn default() -> Self {
        Self {
            confidence: MIN_CONFIDENCE,
            id_scope: IdScope::Document,
            parallel: true,
        }
    }
}

/// How block ids are keyed when pages are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdScope {
    /// One namespace for the whole document; a later page's block replaces
    /// an earlier block with the same id
    #[default]
    Document,
    /// One namespace per page; CHILD references resolve within their own page
    Page,
}
