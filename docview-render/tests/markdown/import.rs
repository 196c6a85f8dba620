//! Markdown import shapes: what the comrak adapter hands the renderer.

use docview_render::doc::nodes::Node;
use docview_render::markdown::parse_markdown;

const KITCHENSINK: &str = include_str!("../fixtures/kitchensink.md");

fn children(doc: &Node) -> &[Node] {
    match doc {
        Node::Document(document) => &document.children,
        other => panic!("expected document root, got {}", other.kind()),
    }
}

fn find_table(doc: &Node) -> &docview_render::doc::nodes::Table {
    children(doc)
        .iter()
        .find_map(|node| match node {
            Node::Table(table) => Some(table),
            _ => None,
        })
        .expect("document should contain a table")
}

#[test]
fn test_table_import() {
    let md = "| Header 1 | Header 2 |\n| :--- | :---: |\n| Cell 1 | Cell 2 |\n| Cell 3 | Cell 4 |\n";
    let doc = parse_markdown(md);

    let table = find_table(&doc);
    assert_eq!(table.header.len(), 2);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.header[0], Node::Text("Header 1".to_string()));
    assert_eq!(table.rows[0].cells[1], Node::Text("Cell 2".to_string()));
    assert_eq!(table.rows[1].cells[0], Node::Text("Cell 3".to_string()));
}

#[test]
fn test_table_cell_with_nested_inline_content() {
    let md = "| A |\n| --- |\n| **bold** text |\n";
    let doc = parse_markdown(md);

    let table = find_table(&doc);
    // Multi-inline cells are wrapped in a paragraph.
    let Node::Paragraph(inline) = &table.rows[0].cells[0] else {
        panic!("expected paragraph-wrapped cell");
    };
    assert!(matches!(inline[0], Node::Bold(_)));
    assert_eq!(inline[1], Node::Text(" text".to_string()));
}

#[test]
fn test_kitchensink_shapes() {
    let doc = parse_markdown(KITCHENSINK);
    let top = children(&doc);

    assert!(matches!(top[0], Node::Heading(_)));
    assert!(top.iter().any(|node| matches!(node, Node::List(_))));
    assert!(top.iter().any(|node| matches!(node, Node::BlockQuote(_))));
    assert!(top.iter().any(|node| matches!(node, Node::CodeBlock(_))));
    assert!(top.iter().any(|node| matches!(node, Node::Table(_))));
    assert!(top.iter().any(|node| matches!(node, Node::Rule)));
    // The raw HTML block arrives as an unknown node, not a crash.
    assert!(top
        .iter()
        .any(|node| matches!(node, Node::Unknown(unknown) if unknown.kind == "HtmlBlock")));
}

#[test]
fn test_kitchensink_table_keeps_rich_cells() {
    let doc = parse_markdown(KITCHENSINK);
    let table = find_table(&doc);

    assert_eq!(table.header.len(), 3);
    assert_eq!(table.rows.len(), 2);
    // "**stable**" cell is a bold sub-tree, not flattened text.
    assert!(matches!(table.rows[0].cells[1], Node::Bold(_)));
    // "[docs](...)" cell is a link sub-tree.
    assert!(matches!(table.rows[1].cells[1], Node::Link(_)));
}

#[test]
fn test_strikethrough_and_code_inline() {
    let doc = parse_markdown("Some ~~struck~~ and `coded` words.\n");
    let top = children(&doc);

    let Node::Paragraph(inline) = &top[0] else {
        panic!("expected paragraph");
    };
    assert!(inline.iter().any(|node| matches!(node, Node::Strikethrough(_))));
    assert!(inline
        .iter()
        .any(|node| matches!(node, Node::Code(code) if code == "coded")));
}
