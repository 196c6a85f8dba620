//! Structural table rendering: grouping, ordering, identity, and the ragged
//! and empty shapes.

use docview_render::doc::nodes::{Node, TableRow};
use docview_render::{RenderContent, RenderIndex, Renderer};
use std::collections::HashSet;

fn text(content: &str) -> Node {
    Node::Text(content.to_string())
}

fn row(cells: &[&str]) -> TableRow {
    TableRow {
        cells: cells.iter().map(|cell| text(cell)).collect(),
    }
}

#[test]
fn test_ragged_table() {
    let renderer = Renderer::default();
    let header = vec![text("A"), text("B"), text("C")];
    let rows = vec![row(&["x", "y"]), row(&["1", "2", "3", "4"])];

    let table = renderer.render_table(&header, &rows, &RenderIndex::root());

    // No padding, no truncation: each row keeps exactly its own cell count.
    assert_eq!(table.header.len(), 3);
    assert_eq!(table.body.len(), 2);
    assert_eq!(table.body[0].cells.len(), 2);
    assert_eq!(table.body[1].cells.len(), 4);
}

#[test]
fn test_empty_table() {
    let renderer = Renderer::default();

    let table = renderer.render_table(&[], &[], &RenderIndex::root());

    assert!(table.header.is_empty());
    assert!(table.body.is_empty());
}

#[test]
fn test_rows_and_cells_preserve_input_order() {
    let renderer = Renderer::default();
    let header = vec![text("first"), text("second")];
    let rows = vec![row(&["a", "b"]), row(&["c", "d"])];

    let table = renderer.render_table(&header, &rows, &RenderIndex::root());

    assert_eq!(table.header[0].content, RenderContent::Text("first".to_string()));
    assert_eq!(table.header[1].content, RenderContent::Text("second".to_string()));
    assert_eq!(
        table.body[1].cells[0].content,
        RenderContent::Text("c".to_string())
    );
    assert_eq!(
        table.body[1].cells[1].content,
        RenderContent::Text("d".to_string())
    );
}

#[test]
fn test_identical_cells_get_distinct_indices() {
    let renderer = Renderer::default();
    // Every cell is the same text; only position can tell them apart.
    let header = vec![text("same"), text("same")];
    let rows = vec![row(&["same", "same"]), row(&["same", "same"])];

    let table = renderer.render_table(&header, &rows, &RenderIndex::root());

    let mut indices = HashSet::new();
    for cell in table.header.iter().chain(
        table
            .body
            .iter()
            .flat_map(|body_row| body_row.cells.iter()),
    ) {
        assert!(
            indices.insert(cell.index.clone()),
            "duplicate index {}",
            cell.index
        );
    }
    assert_eq!(indices.len(), 6);
}

#[test]
fn test_header_indices_never_collide_with_body() {
    let renderer = Renderer::default();
    let header = vec![text("h")];
    let rows = vec![row(&["b"])];

    let table = renderer.render_table(&header, &rows, &RenderIndex::root());

    assert_eq!(table.header[0].index.as_str(), "0.h0");
    assert_eq!(table.body[0].index.as_str(), "0.r0");
    assert_eq!(table.body[0].cells[0].index.as_str(), "0.r0.c0");
}

#[test]
fn test_same_column_across_rows_is_distinct() {
    let renderer = Renderer::default();
    let rows = vec![row(&["x"]), row(&["x"])];

    let table = renderer.render_table(&[], &rows, &RenderIndex::root());

    assert_ne!(table.body[0].cells[0].index, table.body[1].cells[0].index);
}
