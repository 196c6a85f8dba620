//! Structural table rendering: header group and body group assembly.
//!
//! Tables break the generic parent/child flow: their output is grouped into
//! one header row and one body of rows, and every cell is an arbitrary
//! sub-tree rendered through the same dispatch as any other node. The only
//! work done here is ordering and identity; no padding, truncation, sorting,
//! or deduplication ever happens. A row with more or fewer cells than the
//! header renders with exactly its own cell count — callers needing fixed
//! column alignment must pad the data model upstream.

use crate::doc::nodes::{Node, TableRow};
use crate::render::index::RenderIndex;
use crate::render::tree::{RenderRow, StructuredTable};
use crate::render::Renderer;

impl Renderer {
    /// Render a table's header cells and body rows into a [`StructuredTable`].
    ///
    /// Header cell `i` is rendered at `index.header_cell(i)`; the cell at row
    /// `r`, column `c` at `index.body_row(r).cell(c)`. The two segment shapes
    /// cannot collide with each other, with other rows, or with ordinary
    /// child positions.
    pub fn render_table(
        &self,
        header: &[Node],
        rows: &[TableRow],
        index: &RenderIndex,
    ) -> StructuredTable {
        let header = header
            .iter()
            .enumerate()
            .map(|(column, cell)| self.render(cell, &index.header_cell(column)))
            .collect();

        let body = rows
            .iter()
            .enumerate()
            .map(|(row, table_row)| {
                let row_index = index.body_row(row);
                let cells = table_row
                    .cells
                    .iter()
                    .enumerate()
                    .map(|(column, cell)| self.render(cell, &row_index.cell(column)))
                    .collect();
                RenderRow {
                    index: row_index,
                    cells,
                }
            })
            .collect();

        StructuredTable { header, body }
    }
}
