//! Property tests for the render pass: the structural invariants hold for
//! arbitrary trees, not just the handwritten scenarios.

use super::count_input_nodes;
use docview_render::doc::nodes::{Link, Node, Table, TableRow, UnknownNode};
use docview_render::render_document;
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        "[a-z ]{0,12}".prop_map(Node::Text),
        "[a-z]{0,8}".prop_map(Node::Code),
        Just(Node::Rule),
        Just(Node::LineBreak),
        Just(Node::Unknown(UnknownNode {
            kind: "Mystery".to_string(),
            literal: None,
        })),
    ];

    leaf.prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Node::Paragraph),
            prop::collection::vec(inner.clone(), 0..3).prop_map(Node::Bold),
            prop::collection::vec(inner.clone(), 0..3).prop_map(|children| {
                Node::Link(Link {
                    destination: Some("https://example.com".to_string()),
                    title: None,
                    children,
                })
            }),
            (
                prop::collection::vec(inner.clone(), 0..3),
                prop::collection::vec(prop::collection::vec(inner, 0..3), 0..3),
            )
                .prop_map(|(header, rows)| {
                    Node::Table(Table {
                        header,
                        rows: rows
                            .into_iter()
                            .map(|cells| TableRow { cells })
                            .collect(),
                    })
                }),
        ]
    })
}

proptest! {
    #[test]
    fn one_output_per_input_node(node in arb_node()) {
        let tree = render_document(&node);
        prop_assert_eq!(tree.node_count(), count_input_nodes(&node));
    }

    #[test]
    fn indices_are_unique_within_a_pass(node in arb_node()) {
        let tree = render_document(&node);

        let mut indices = Vec::new();
        tree.visit(&mut |rendered| indices.push(rendered.index.clone()));

        let unique: HashSet<_> = indices.iter().cloned().collect();
        prop_assert_eq!(unique.len(), indices.len());
    }

    #[test]
    fn rendering_is_idempotent(node in arb_node()) {
        prop_assert_eq!(render_document(&node), render_document(&node));
    }
}
