//! Markdown parsing (Markdown string → Comrak AST → document tree)

use crate::doc::nodes::{
    CodeBlock, DocumentNode, Heading, Image, Link, List, ListItem, Node, Table, TableRow,
    UnknownNode,
};
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

/// Parse a Markdown string into a document tree rooted at [`Node::Document`].
pub fn parse_markdown(source: &str) -> Node {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, source, &options);
    convert_node(root)
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options
}

fn convert_children<'a>(node: &'a AstNode<'a>) -> Vec<Node> {
    node.children().map(convert_node).collect()
}

fn convert_node<'a>(node: &'a AstNode<'a>) -> Node {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Document => Node::Document(DocumentNode {
            children: convert_children(node),
        }),

        NodeValue::Heading(heading) => Node::Heading(Heading {
            level: heading.level,
            children: convert_children(node),
        }),

        NodeValue::Paragraph => Node::Paragraph(convert_children(node)),

        NodeValue::BlockQuote => Node::BlockQuote(convert_children(node)),

        NodeValue::List(list) => {
            let ordered = matches!(list.list_type, ListType::Ordered);
            let items = node
                .children()
                .map(|item| ListItem {
                    children: convert_children(item),
                })
                .collect();
            Node::List(List { items, ordered })
        }

        // Items are consumed by the List handler above; comrak only ever
        // produces them under a List.
        NodeValue::Item(_) => Node::Unknown(UnknownNode {
            kind: "Item".to_string(),
            literal: None,
        }),

        NodeValue::CodeBlock(block) => Node::CodeBlock(CodeBlock {
            language: if block.info.is_empty() {
                None
            } else {
                Some(block.info.clone())
            },
            literal: block.literal.clone(),
        }),

        NodeValue::ThematicBreak => Node::Rule,

        NodeValue::Table(_) => convert_table(node),

        // Table rows are consumed by the Table handler.
        NodeValue::TableRow(_) => Node::Unknown(UnknownNode {
            kind: "TableRow".to_string(),
            literal: None,
        }),
        NodeValue::TableCell => convert_cell(node),

        NodeValue::Text(text) => Node::Text(text.clone()),

        NodeValue::Strong => Node::Bold(convert_children(node)),

        NodeValue::Emph => Node::Italic(convert_children(node)),

        NodeValue::Strikethrough => Node::Strikethrough(convert_children(node)),

        NodeValue::Code(code) => Node::Code(code.literal.clone()),

        NodeValue::Link(link) => Node::Link(Link {
            destination: Some(link.url.clone()),
            title: none_if_empty(&link.title),
            children: convert_children(node),
        }),

        NodeValue::Image(link) => Node::Image(Image {
            source: link.url.clone(),
            title: none_if_empty(&link.title),
            children: convert_children(node),
        }),

        NodeValue::SoftBreak => Node::SoftBreak,

        NodeValue::LineBreak => Node::LineBreak,

        value => {
            let literal = match value {
                NodeValue::HtmlBlock(block) => Some(block.literal.clone()),
                NodeValue::HtmlInline(html) => Some(html.clone()),
                _ => None,
            };
            Node::Unknown(UnknownNode {
                kind: value_kind_name(value),
                literal,
            })
        }
    }
}

/// Derive a stable kind name from a comrak node value (the variant name).
fn value_kind_name(value: &NodeValue) -> String {
    let debug = format!("{value:?}");
    debug
        .split(['(', ' ', '{'])
        .next()
        .unwrap_or("Unknown")
        .to_string()
}

/// Split a comrak table into header cells and body rows.
///
/// Comrak marks its first row as the header row; its cells become the
/// table's `header` and every following row becomes a body `TableRow` with
/// exactly the cells it carries.
fn convert_table<'a>(table: &'a AstNode<'a>) -> Node {
    let mut header: Vec<Node> = Vec::new();
    let mut rows: Vec<TableRow> = Vec::new();

    for row in table.children() {
        let is_header = matches!(&row.data.borrow().value, NodeValue::TableRow(true));
        let cells: Vec<Node> = row.children().map(convert_cell).collect();

        if is_header && header.is_empty() && rows.is_empty() {
            header = cells;
        } else {
            rows.push(TableRow { cells });
        }
    }

    Node::Table(Table { header, rows })
}

/// A cell is a single `Node` sub-tree: one inline child is used directly,
/// several are wrapped in a paragraph, and an empty cell becomes empty text.
fn convert_cell<'a>(cell: &'a AstNode<'a>) -> Node {
    let mut children = convert_children(cell);
    match children.len() {
        0 => Node::Text(String::new()),
        1 => children.remove(0),
        _ => Node::Paragraph(children),
    }
}

fn none_if_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
