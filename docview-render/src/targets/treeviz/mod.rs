//! Treeviz target for render trees
//!
//! Treeviz is a visual representation of the render tree, designed for quick
//! inspection of what a render pass produced. It encodes structure with
//! box-drawing connectors and one icon + label per node, with the node's
//! render index appended so positional identity is visible at a glance.
//!
//! So the format is:
//! `<prefix><connector> <icon> <label> (truncated to 30 characters) [<index>]`
//!
//! Example:
//!
//!   ⧉ Document [0]
//!   ├─ § Heading 1 [0.0]
//!   │ └─ ◦ Title [0.0.0]
//!   └─ ▦ Table (2 columns, 1 rows) [0.1]
//!     ├─ ⊤ header
//!     │ ├─ ◦ A [0.1.h0]
//!     │ └─ ◦ B [0.1.h1]
//!     └─ ➔ row 0 [0.1.r0]
//!       └─ ◦ x [0.1.r0.c0]
//!
//! Table output gets two synthetic group lines (`header`, `row <n>`) that
//! mirror the header/body grouping of the structured table.

use crate::error::RenderError;
use crate::render::tree::{RenderContent, RenderNode};
use crate::target::RenderTarget;
use crate::targets::icons::get_icon;
use std::collections::HashMap;

const LABEL_LIMIT: usize = 30;

/// Connector-tree debug view of a render tree.
pub struct TreevizTarget;

impl RenderTarget for TreevizTarget {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation of the render output"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn emit(&self, tree: &RenderNode) -> Result<String, RenderError> {
        Ok(to_treeviz_str(tree, true))
    }

    /// Supported parameters: `indices` (`true`/`false`, default `true`)
    /// toggles the `[index]` suffix. Unrecognized parameters are rejected.
    fn emit_with_options(
        &self,
        tree: &RenderNode,
        options: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        let mut show_indices = true;
        for (key, value) in options {
            match key.as_str() {
                "indices" => show_indices = value.to_lowercase() != "false",
                _ => {
                    return Err(RenderError::NotSupported(format!(
                        "Unknown parameter '{key}' for target 'treeviz'"
                    )))
                }
            }
        }
        Ok(to_treeviz_str(tree, show_indices))
    }
}

/// Render the tree as connector-prefixed lines.
pub fn to_treeviz_str(tree: &RenderNode, show_indices: bool) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} {}",
        get_icon(tree.content.kind()),
        label(&tree.content)
    ));
    if show_indices {
        output.push_str(&format!(" [{}]", tree.index));
    }
    output.push('\n');

    format_groups(tree, "", show_indices, &mut output);
    output
}

/// Format one node line plus everything below it.
fn format_node(
    node: &RenderNode,
    prefix: &str,
    is_last: bool,
    show_indices: bool,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{prefix}{connector} {} {}",
        get_icon(node.content.kind()),
        label(&node.content)
    ));
    if show_indices {
        output.push_str(&format!(" [{}]", node.index));
    }
    output.push('\n');

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_groups(node, &child_prefix, show_indices, output);
}

/// Emit a node's subordinate lines: table groups for tables, plain children
/// otherwise.
fn format_groups(node: &RenderNode, prefix: &str, show_indices: bool, output: &mut String) {
    if let RenderContent::Table(table) = &node.content {
        let group_count = usize::from(!table.header.is_empty()) + table.body.len();
        let mut group = 0;

        if !table.header.is_empty() {
            group += 1;
            let is_last = group == group_count;
            let connector = if is_last { "└─" } else { "├─" };
            output.push_str(&format!("{prefix}{connector} {} header\n", get_icon("TableHeader")));
            let cell_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
            format_children(&table.header, &cell_prefix, show_indices, output);
        }

        for row in &table.body {
            group += 1;
            let is_last = group == group_count;
            let connector = if is_last { "└─" } else { "├─" };
            output.push_str(&format!(
                "{prefix}{connector} {} row",
                get_icon("TableRow")
            ));
            if show_indices {
                output.push_str(&format!(" [{}]", row.index));
            }
            output.push('\n');
            let cell_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
            format_children(&row.cells, &cell_prefix, show_indices, output);
        }
        return;
    }

    format_children(&node.children, prefix, show_indices, output);
}

fn format_children(
    children: &[RenderNode],
    prefix: &str,
    show_indices: bool,
    output: &mut String,
) {
    let count = children.len();
    for (position, child) in children.iter().enumerate() {
        format_node(child, prefix, position == count - 1, show_indices, output);
    }
}

/// One-line label for a node, truncated to keep the tree narrow.
fn label(content: &RenderContent) -> String {
    let text = match content {
        RenderContent::Document => "Document".to_string(),
        RenderContent::Heading { level } => format!("Heading {level}"),
        RenderContent::Paragraph => "Paragraph".to_string(),
        RenderContent::BlockQuote => "BlockQuote".to_string(),
        RenderContent::List { ordered: true } => "List (ordered)".to_string(),
        RenderContent::List { ordered: false } => "List (unordered)".to_string(),
        RenderContent::ListItem => "Item".to_string(),
        RenderContent::CodeBlock { language, .. } => match language {
            Some(language) => format!("CodeBlock ({language})"),
            None => "CodeBlock".to_string(),
        },
        RenderContent::Rule => "Rule".to_string(),
        RenderContent::Table(table) => format!(
            "Table ({} columns, {} rows)",
            table.header.len(),
            table.body.len()
        ),
        RenderContent::Text(text) => text.clone(),
        RenderContent::Bold => "Bold".to_string(),
        RenderContent::Italic => "Italic".to_string(),
        RenderContent::Strikethrough => "Strikethrough".to_string(),
        RenderContent::Code(literal) => literal.clone(),
        RenderContent::Link { destination } => {
            if destination.is_empty() {
                "(no destination)".to_string()
            } else {
                destination.clone()
            }
        }
        RenderContent::Image { source, .. } => source.clone(),
        RenderContent::LineBreak => String::new(),
        RenderContent::SoftBreak => String::new(),
        RenderContent::Empty => "(skipped)".to_string(),
        RenderContent::Placeholder { note } => note.clone(),
    };
    truncate_label(&text)
}

fn truncate_label(text: &str) -> String {
    if text.chars().count() <= LABEL_LIMIT {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(LABEL_LIMIT).collect();
    truncated.push('…');
    truncated
}
