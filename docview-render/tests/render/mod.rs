//! Tests for the renderer core: dispatch, table grouping, and render-pass
//! properties.

use docview_render::doc::nodes::Node;

pub mod properties;
pub mod table;
pub mod tree;

/// Count the input entities the renderer owes an output for: every `Node`
/// plus every list item (items are entities of the list payload, not `Node`s
/// themselves). Table rows are grouping structs on both sides and count on
/// neither.
pub fn count_input_nodes(node: &Node) -> usize {
    let children_count: usize = match node {
        Node::Document(doc) => doc.children.iter().map(count_input_nodes).sum(),
        Node::Heading(heading) => heading.children.iter().map(count_input_nodes).sum(),
        Node::Paragraph(children)
        | Node::BlockQuote(children)
        | Node::Bold(children)
        | Node::Italic(children)
        | Node::Strikethrough(children) => children.iter().map(count_input_nodes).sum(),
        Node::List(list) => list
            .items
            .iter()
            .map(|item| 1 + item.children.iter().map(count_input_nodes).sum::<usize>())
            .sum(),
        Node::Table(table) => {
            let header: usize = table.header.iter().map(count_input_nodes).sum();
            let body: usize = table
                .rows
                .iter()
                .flat_map(|row| row.cells.iter())
                .map(count_input_nodes)
                .sum();
            header + body
        }
        Node::Link(link) => link.children.iter().map(count_input_nodes).sum(),
        Node::Image(image) => image.children.iter().map(count_input_nodes).sum(),
        Node::CodeBlock(_)
        | Node::Rule
        | Node::Text(_)
        | Node::Code(_)
        | Node::LineBreak
        | Node::SoftBreak
        | Node::Unknown(_) => 0,
    };
    1 + children_count
}
