//! The output tree produced by a render pass.
//!
//! The output mirrors the input: one [`RenderNode`] per input node, each
//! carrying the [`RenderIndex`] derived from its structural position, a
//! content discriminant, and its rendered children. Tables are the exception
//! to plain child flow: their output is a [`StructuredTable`] with a distinct
//! header group and body group, so hosts can place `<thead>`/`<tbody>`-style
//! boundaries without re-deriving them.
//!
//! Everything here derives `Serialize` so a host (or the json target) can
//! consume the tree directly.

use crate::render::index::RenderIndex;
use serde::Serialize;

/// One rendered node: identity, content, and rendered children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    pub index: RenderIndex,
    pub content: RenderContent,
    pub children: Vec<RenderNode>,
}

/// The rendered form of a node, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RenderContent {
    Document,
    Heading { level: u8 },
    Paragraph,
    BlockQuote,
    List { ordered: bool },
    ListItem,
    CodeBlock { language: Option<String>, literal: String },
    Rule,
    Table(StructuredTable),
    Text(String),
    Bold,
    Italic,
    Strikethrough,
    Code(String),
    Link { destination: String },
    Image { source: String, title: Option<String> },
    LineBreak,
    SoftBreak,
    /// Fallback output under [`FallbackPolicy::Skip`]: the node occupies its
    /// position but carries nothing. Targets emit nothing for it.
    ///
    /// [`FallbackPolicy::Skip`]: crate::render::FallbackPolicy::Skip
    Empty,
    /// Fallback output under [`FallbackPolicy::Placeholder`]: a visibly
    /// distinct stand-in naming what could not be rendered.
    ///
    /// [`FallbackPolicy::Placeholder`]: crate::render::FallbackPolicy::Placeholder
    Placeholder { note: String },
}

impl RenderContent {
    /// Stable kind name used for icons, labels, and log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            RenderContent::Document => "Document",
            RenderContent::Heading { .. } => "Heading",
            RenderContent::Paragraph => "Paragraph",
            RenderContent::BlockQuote => "BlockQuote",
            RenderContent::List { .. } => "List",
            RenderContent::ListItem => "ListItem",
            RenderContent::CodeBlock { .. } => "CodeBlock",
            RenderContent::Rule => "Rule",
            RenderContent::Table(_) => "Table",
            RenderContent::Text(_) => "Text",
            RenderContent::Bold => "Bold",
            RenderContent::Italic => "Italic",
            RenderContent::Strikethrough => "Strikethrough",
            RenderContent::Code(_) => "Code",
            RenderContent::Link { .. } => "Link",
            RenderContent::Image { .. } => "Image",
            RenderContent::LineBreak => "LineBreak",
            RenderContent::SoftBreak => "SoftBreak",
            RenderContent::Empty => "Empty",
            RenderContent::Placeholder { .. } => "Placeholder",
        }
    }
}

/// The two-dimensional output of a rendered table.
///
/// `header` holds one rendered cell per input header cell; `body` holds one
/// [`RenderRow`] per input row, each with exactly that row's own cell count.
/// An empty input header yields an empty `header` group (no row is emitted),
/// and zero input rows yield an empty `body` group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredTable {
    pub header: Vec<RenderNode>,
    pub body: Vec<RenderRow>,
}

/// One rendered body row of a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderRow {
    pub index: RenderIndex,
    pub cells: Vec<RenderNode>,
}

impl RenderNode {
    /// Visit this node and every rendered node below it, including table
    /// header and body cells, in depth-first order.
    pub fn visit(&self, f: &mut impl FnMut(&RenderNode)) {
        f(self);
        if let RenderContent::Table(table) = &self.content {
            for cell in &table.header {
                cell.visit(f);
            }
            for row in &table.body {
                for cell in &row.cells {
                    cell.visit(f);
                }
            }
        }
        for child in &self.children {
            child.visit(f);
        }
    }

    /// Total number of rendered nodes in this subtree (table cells included).
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.visit(&mut |_| count += 1);
        count
    }
}
