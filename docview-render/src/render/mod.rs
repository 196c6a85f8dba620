//! The recursive, type-dispatching renderer.
//!
//! [`Renderer::render`] turns one input [`Node`] and its positional
//! [`RenderIndex`] into one [`RenderNode`]. Dispatch is an exhaustive match
//! over the closed kind set, so a new node kind cannot be added without this
//! module handling it. Composite kinds recurse into their children with
//! indices derived from the parent's path, which keeps every index in a pass
//! unique even when sibling nodes are structurally identical.
//!
//! A render pass is pure and synchronous: the input tree is never mutated,
//! the output tree is freshly allocated, and there are no suspension points.
//! Degenerate input degrades locally — a malformed or unrecognized node
//! renders as a default or placeholder and its siblings are unaffected.

pub mod index;
pub mod table;
pub mod tree;

use crate::doc::nodes::{Link, Node};
use crate::render::index::RenderIndex;
use crate::render::tree::{RenderContent, RenderNode};

/// How the renderer handles [`Node::Unknown`].
///
/// Both policies keep the one-output-per-input-node invariant; they differ
/// only in what the output carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Emit an empty output node; targets render nothing for it.
    Skip,
    /// Emit a visibly distinct placeholder naming the unrecognized kind.
    #[default]
    Placeholder,
}

/// Renders parsed document trees into [`RenderNode`] trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    pub fallback: FallbackPolicy,
}

impl Renderer {
    pub fn new(fallback: FallbackPolicy) -> Self {
        Renderer { fallback }
    }

    /// Render one node at the given structural position.
    ///
    /// Produces exactly one output node per input node and recurses into
    /// children with derived indices.
    pub fn render(&self, node: &Node, index: &RenderIndex) -> RenderNode {
        let (content, children) = match node {
            Node::Document(doc) => (RenderContent::Document, self.render_children(&doc.children, index)),
            Node::Heading(heading) => (
                RenderContent::Heading { level: heading.level },
                self.render_children(&heading.children, index),
            ),
            Node::Paragraph(children) => (RenderContent::Paragraph, self.render_children(children, index)),
            Node::BlockQuote(children) => (RenderContent::BlockQuote, self.render_children(children, index)),
            Node::List(list) => {
                let items = list
                    .items
                    .iter()
                    .enumerate()
                    .map(|(position, item)| {
                        let item_index = index.child(position);
                        let children = self.render_children(&item.children, &item_index);
                        RenderNode {
                            index: item_index,
                            content: RenderContent::ListItem,
                            children,
                        }
                    })
                    .collect();
                (RenderContent::List { ordered: list.ordered }, items)
            }
            Node::CodeBlock(block) => (
                RenderContent::CodeBlock {
                    language: block.language.clone(),
                    literal: block.literal.clone(),
                },
                vec![],
            ),
            Node::Rule => (RenderContent::Rule, vec![]),
            Node::Table(table) => (
                RenderContent::Table(self.render_table(&table.header, &table.rows, index)),
                vec![],
            ),
            Node::Text(text) => (RenderContent::Text(text.clone()), vec![]),
            Node::Bold(children) => (RenderContent::Bold, self.render_children(children, index)),
            Node::Italic(children) => (RenderContent::Italic, self.render_children(children, index)),
            Node::Strikethrough(children) => {
                (RenderContent::Strikethrough, self.render_children(children, index))
            }
            Node::Code(literal) => (RenderContent::Code(literal.clone()), vec![]),
            Node::Link(link) => (
                RenderContent::Link {
                    destination: self.link_destination(link, index),
                },
                self.render_children(&link.children, index),
            ),
            Node::Image(image) => (
                RenderContent::Image {
                    source: image.source.clone(),
                    title: image.title.clone(),
                },
                self.render_children(&image.children, index),
            ),
            Node::LineBreak => (RenderContent::LineBreak, vec![]),
            Node::SoftBreak => (RenderContent::SoftBreak, vec![]),
            Node::Unknown(unknown) => {
                log::warn!("unrecognized node kind '{}' at {index}", unknown.kind);
                let content = match self.fallback {
                    FallbackPolicy::Skip => RenderContent::Empty,
                    FallbackPolicy::Placeholder => RenderContent::Placeholder {
                        note: unknown.kind.clone(),
                    },
                };
                (content, vec![])
            }
        };

        RenderNode {
            index: index.clone(),
            content,
            children,
        }
    }

    fn render_children(&self, children: &[Node], index: &RenderIndex) -> Vec<RenderNode> {
        children
            .iter()
            .enumerate()
            .map(|(position, child)| self.render(child, &index.child(position)))
            .collect()
    }

    fn link_destination(&self, link: &Link, index: &RenderIndex) -> String {
        match &link.destination {
            Some(destination) => destination.clone(),
            None => {
                log::warn!("link without destination at {index}, rendering empty target");
                String::new()
            }
        }
    }
}

/// Render a whole document tree with the default renderer.
pub fn render_document(root: &Node) -> RenderNode {
    Renderer::default().render(root, &RenderIndex::root())
}
