//! Markdown input adapter (Markdown → document tree)
//!
//! # Library Choice
//!
//! We use the `comrak` crate for Markdown parsing. This choice is based on:
//! - CommonMark compliance with GFM extensions (tables in particular)
//! - Robust and well-maintained
//! - An arena AST that is cheap to walk once and discard
//!
//! We never implement Markdown syntax rules here: comrak owns parsing, and
//! this module only adapts its AST into the [`Node`] tree the renderer
//! consumes.
//!
//! # Element Mapping Table
//!
//! | Markdown construct    | Node                  | Notes                                   |
//! |-----------------------|-----------------------|-----------------------------------------|
//! | Document              | Document              | Root of the tree                        |
//! | Heading (# ## ###)    | Heading               | Level carried as-is                     |
//! | Paragraph             | Paragraph             | Direct mapping                          |
//! | Block quote           | BlockQuote            | Direct mapping                          |
//! | List / item           | List / ListItem       | Ordered flag from the list type         |
//! | Code block (```)      | CodeBlock             | Info string → language                  |
//! | Thematic break (---)  | Rule                  | Direct mapping                          |
//! | Table (GFM)           | Table                 | First header row → `header`, rest → rows|
//! | Text                  | Text                  | Direct mapping                          |
//! | **bold** / *italic*   | Bold / Italic         | Both marker styles                      |
//! | ~~strike~~            | Strikethrough         | GFM extension                           |
//! | `code`                | Code                  | Direct mapping                          |
//! | [text](url)           | Link                  | Destination always present on import    |
//! | ![alt](url)           | Image                 | Alt content kept as children            |
//! | Hard / soft break     | LineBreak / SoftBreak | Direct mapping                          |
//! | Anything else         | Unknown               | Fallback policy applies at render time  |
//!
//! A table cell is a single `Node` sub-tree: cells with one inline child use
//! that child directly, cells with several are wrapped in a `Paragraph`, and
//! empty cells become `Text("")`.

mod parser;

pub use parser::parse_markdown;
