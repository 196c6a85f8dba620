//! Position-derived identity for rendered nodes.
//!
//! A [`RenderIndex`] is a path of structural positions, composed as the
//! renderer recurses: the root is `"0"`, the third child of the root is
//! `"0.2"`, and so on. Table cells get dedicated segments (`h<col>` for
//! header cells, `r<row>.c<col>` for body cells) so header and body indices
//! can never collide with each other or with ordinary child positions.
//!
//! Indices exist to let a host tell structurally-equal siblings apart across
//! re-renders. They are derived values with the lifetime of one render pass:
//! recomputed every pass, never persisted.

use serde::Serialize;
use std::fmt;

/// A path-like identifier for one rendered node within a render pass.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RenderIndex(String);

impl RenderIndex {
    /// The index of a render pass's root node.
    pub fn root() -> Self {
        RenderIndex("0".to_string())
    }

    /// Derive the index for the child at `position` among this node's children.
    pub fn child(&self, position: usize) -> Self {
        RenderIndex(format!("{}.{position}", self.0))
    }

    /// Derive the index for the header cell in column `column` of a table
    /// rendered at this index.
    pub fn header_cell(&self, column: usize) -> Self {
        RenderIndex(format!("{}.h{column}", self.0))
    }

    /// Derive the index for body row `row` of a table rendered at this index.
    pub fn body_row(&self, row: usize) -> Self {
        RenderIndex(format!("{}.r{row}", self.0))
    }

    /// Derive the index for the cell in column `column` of this row.
    pub fn cell(&self, column: usize) -> Self {
        RenderIndex(format!("{}.c{column}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RenderIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
