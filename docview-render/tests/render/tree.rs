//! Renderer dispatch over whole documents: count invariant, purity, nesting,
//! and degraded-node containment.

use super::count_input_nodes;
use docview_render::doc::nodes::{
    DocumentNode, Heading, Link, List, ListItem, Node, Table, TableRow, UnknownNode,
};
use docview_render::{render_document, FallbackPolicy, RenderContent, RenderIndex, Renderer};

fn text(content: &str) -> Node {
    Node::Text(content.to_string())
}

fn sample_document() -> Node {
    Node::Document(DocumentNode {
        children: vec![
            Node::Heading(Heading {
                level: 1,
                children: vec![text("Title")],
            }),
            Node::Paragraph(vec![
                text("Plain "),
                Node::Bold(vec![text("bold")]),
                Node::Italic(vec![text("italic")]),
            ]),
            Node::List(List {
                ordered: true,
                items: vec![
                    ListItem {
                        children: vec![text("one")],
                    },
                    ListItem {
                        children: vec![Node::Paragraph(vec![text("two")])],
                    },
                ],
            }),
            Node::Table(Table {
                header: vec![text("A"), text("B")],
                rows: vec![TableRow {
                    cells: vec![
                        Node::Link(Link {
                            destination: Some("https://example.com".to_string()),
                            title: None,
                            children: vec![text("link")],
                        }),
                        text("plain"),
                    ],
                }],
            }),
        ],
    })
}

#[test]
fn test_one_output_per_input_node() {
    let doc = sample_document();
    let tree = render_document(&doc);

    assert_eq!(tree.node_count(), count_input_nodes(&doc));
}

#[test]
fn test_rendering_is_idempotent() {
    let doc = sample_document();

    let first = render_document(&doc);
    let second = render_document(&doc);

    assert_eq!(first, second);
}

#[test]
fn test_rendering_does_not_mutate_input() {
    let doc = sample_document();
    let copy = doc.clone();

    let _ = render_document(&doc);

    assert_eq!(doc, copy);
}

#[test]
fn test_nested_cell_preserves_wrapping_order() {
    // A cell containing a link wrapping text renders as one cell output
    // containing the link's form wrapping the text's form.
    let renderer = Renderer::default();
    let rows = vec![TableRow {
        cells: vec![Node::Link(Link {
            destination: Some("https://example.com".to_string()),
            title: None,
            children: vec![text("inner")],
        })],
    }];

    let table = renderer.render_table(&[], &rows, &RenderIndex::root());

    let cell = &table.body[0].cells[0];
    assert_eq!(
        cell.content,
        RenderContent::Link {
            destination: "https://example.com".to_string()
        }
    );
    assert_eq!(cell.children.len(), 1);
    assert_eq!(cell.children[0].content, RenderContent::Text("inner".to_string()));
    assert_eq!(cell.index.as_str(), "0.r0.c0");
    assert_eq!(cell.children[0].index.as_str(), "0.r0.c0.0");
}

#[test]
fn test_unknown_node_does_not_disturb_siblings() {
    let unknown = Node::Unknown(UnknownNode {
        kind: "FootnoteReference".to_string(),
        literal: None,
    });
    let rows = vec![TableRow {
        cells: vec![text("before"), unknown, text("after")],
    }];

    for policy in [FallbackPolicy::Skip, FallbackPolicy::Placeholder] {
        let renderer = Renderer::new(policy);
        let table = renderer.render_table(&[], &rows, &RenderIndex::root());
        let cells = &table.body[0].cells;

        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].content, RenderContent::Text("before".to_string()));
        assert_eq!(cells[2].content, RenderContent::Text("after".to_string()));
        match policy {
            FallbackPolicy::Skip => assert_eq!(cells[1].content, RenderContent::Empty),
            FallbackPolicy::Placeholder => assert_eq!(
                cells[1].content,
                RenderContent::Placeholder {
                    note: "FootnoteReference".to_string()
                }
            ),
        }
    }
}

#[test]
fn test_deep_nesting_terminates_with_stable_indices() {
    // depth-40 chain of Bold wrappers around a text leaf
    let mut node = text("leaf");
    for _ in 0..40 {
        node = Node::Bold(vec![node]);
    }

    let tree = render_document(&node);
    assert_eq!(tree.node_count(), 41);

    let mut deepest = &tree;
    while !deepest.children.is_empty() {
        deepest = &deepest.children[0];
    }
    assert_eq!(deepest.content, RenderContent::Text("leaf".to_string()));
    // "0" plus one ".0" per wrapper level
    assert_eq!(deepest.index.as_str().matches(".0").count(), 40);
}
