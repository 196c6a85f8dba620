//! HTML target for render trees
//!
//! Emits semantic HTML5 with embedded CSS.
//! Pipeline: render tree → RcDom → HTML string → complete document
//!
//! Structural elements (headings, paragraphs, lists, tables, rows, cells)
//! carry a `data-key` attribute holding the node's render index, which is
//! what a host needs for stable incremental reconciliation across re-renders.
//! Inline elements (emphasis, links, code spans) are left unkeyed: hosts
//! reconcile at block granularity, and the json target carries every index
//! for anything finer.

mod serializer;

use crate::error::RenderError;
use crate::render::tree::RenderNode;
use crate::target::RenderTarget;
use std::collections::HashMap;

/// The baseline stylesheet embedded in every emitted document. Exposed so
/// callers can save and extend it, then feed the result back via
/// [`HtmlOptions::custom_css`].
pub const BASELINE_CSS: &str = include_str!("../../../css/baseline.css");

/// Options for HTML emission
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Optional custom CSS appended after the baseline CSS
    pub custom_css: Option<String>,
    /// Whether to annotate structural elements with `data-key`
    pub include_keys: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        HtmlOptions {
            custom_css: None,
            include_keys: true,
        }
    }
}

impl HtmlOptions {
    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

/// Semantic HTML5 emission of the render tree.
#[derive(Default)]
pub struct HtmlTarget {
    options: HtmlOptions,
}

impl HtmlTarget {
    pub fn new(options: HtmlOptions) -> Self {
        HtmlTarget { options }
    }
}

impl RenderTarget for HtmlTarget {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Semantic HTML5 document with embedded CSS"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn emit(&self, tree: &RenderNode) -> Result<String, RenderError> {
        serializer::emit_html(tree, &self.options)
    }

    /// Supported parameters: `include-keys` (`true`/`false`) and
    /// `custom-css` (raw CSS appended after the baseline).
    fn emit_with_options(
        &self,
        tree: &RenderNode,
        options: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        let mut emit_options = self.options.clone();
        for (key, value) in options {
            match key.as_str() {
                "include-keys" => emit_options.include_keys = value.to_lowercase() != "false",
                "custom-css" => emit_options.custom_css = Some(value.clone()),
                _ => {
                    return Err(RenderError::NotSupported(format!(
                        "Unknown parameter '{key}' for target 'html'"
                    )))
                }
            }
        }
        serializer::emit_html(tree, &emit_options)
    }
}
