//! Render-tree construction for parsed document trees
//!
//!     This crate turns a parsed document tree (markdown or similar markup)
//!     into a nested structural render tree, and emits that tree through a
//!     uniform target interface (HTML, treeviz, JSON).
//!
//!     TLDR: For target authors:
//!         - The renderer owns all structural decisions: order, grouping, and
//!           positional identity are fixed in the render tree before any
//!           target sees it.
//!         - A target only maps render content to its concrete syntax; it
//!           never re-sorts, pads, or filters.
//!         - Input parsing is delegated to the format's library (comrak for
//!           markdown); we only adapt its AST into our node model.
//!
//! Architecture
//!
//!     The core is a recursive, type-dispatching renderer. The parsed tree is
//!     a closed sum type (./doc/nodes.rs); dispatch is one exhaustive match
//!     (./render/mod.rs), so the compiler guarantees every node kind has
//!     exactly one handling strategy. Composite kinds recurse through the
//!     same dispatch, threading a path-like RenderIndex (./render/index.rs)
//!     composed from parent path + child position. That index is what lets a
//!     host tell structurally-identical siblings apart when reconciling
//!     across re-renders.
//!
//!     Tables are the structurally rich case and get their own assembly step
//!     (./render/table.rs): one header group and one body group, every cell
//!     an arbitrary sub-tree rendered through the same dispatch, with
//!     dedicated index segments so header and body cells can never collide.
//!     Rows render with exactly the cells they carry; ragged tables are a
//!     supported shape, not an error.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── target.rs               # RenderTarget trait definition
//!     ├── registry.rs             # TargetRegistry for discovery and selection
//!     ├── doc
//!     │   └── nodes.rs            # Parsed document tree (input model)
//!     ├── render
//!     │   ├── index.rs            # RenderIndex composition
//!     │   ├── tree.rs             # Render output tree
//!     │   ├── table.rs            # Header/body group assembly
//!     │   └── mod.rs              # Renderer dispatch core
//!     ├── markdown                # comrak input adapter
//!     ├── targets
//!     │   ├── html                # rcdom-backed HTML emission
//!     │   ├── treeviz             # connector-tree debug view
//!     │   ├── json                # lossless serde_json view
//!     │   └── icons.rs
//!     └── lib.rs
//!
//! Error Handling
//!
//!     Rendering never fails: a malformed payload renders with a default, an
//!     unrecognized kind goes through the configured fallback policy, and in
//!     both cases siblings are unaffected. RenderError covers the host-facing
//!     surface only (target lookup, emission).
//!
//! Testing
//!
//!     tests
//!     ├── render                  # dispatch, table grouping, properties
//!     ├── markdown                # comrak import shapes
//!     ├── html                    # HTML emission
//!     └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories,
//!     so we need to include these in the mod.
//!
//! Library Choices
//!
//!     Parsing and low-level serialization are offloaded to specialized
//!     crates: comrak owns markdown parsing, html5ever/markup5ever_rcdom own
//!     HTML serialization, serde/serde_json own the machine-readable view.
//!     This crate's own scope is the tree walk: dispatch, recursion,
//!     identity, and table grouping.

pub mod doc;
pub mod error;
pub mod markdown;
pub mod registry;
pub mod render;
pub mod target;
pub mod targets;

pub use error::RenderError;
pub use registry::TargetRegistry;
pub use render::index::RenderIndex;
pub use render::tree::{RenderContent, RenderNode, RenderRow, StructuredTable};
pub use render::{render_document, FallbackPolicy, Renderer};
pub use target::RenderTarget;

/// Parse a markdown string and render it in one step.
///
/// Convenience for hosts that do not need to hold the intermediate node
/// tree; equivalent to `render_document(&markdown::parse_markdown(source))`.
pub fn render_markdown(source: &str) -> RenderNode {
    render_document(&markdown::parse_markdown(source))
}
