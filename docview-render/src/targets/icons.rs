//! Shared icon mapping for tree visualization targets
//!
//! This module provides a centralized icon mapping so that all tree-based
//! visualization output stays consistent.

/// Get the Unicode icon for a given render content kind
///
/// Returns a single glyph that visually identifies the kind in tree
/// visualization output.
pub fn get_icon(kind: &str) -> &'static str {
    match kind {
        "Document" => "⧉",
        "Heading" => "§",
        "Paragraph" => "¶",
        "Text" => "◦",
        "Bold" => "𝐁",
        "Italic" => "𝐼",
        "Strikethrough" => "~",
        "Code" => "ƒ",
        "CodeBlock" => "𝒱",
        "Link" => "⊕",
        "Image" => "⊡",
        "List" => "☰",
        "ListItem" => "•",
        "BlockQuote" => "❝",
        "Rule" => "⎯",
        "LineBreak" => "↵",
        "SoftBreak" => "↵",
        "Table" => "▦",
        "TableHeader" => "⊤",
        "TableRow" => "➔",
        "Placeholder" => "∅",
        "Empty" => "○",
        _ => "○",
    }
}
