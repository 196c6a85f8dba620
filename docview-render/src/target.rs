//! Render target trait definition
//!
//! A target consumes a finished render tree and emits a textual
//! representation of it. Targets are pure consumers: they never mutate the
//! tree and never re-derive structure the renderer already decided (grouping,
//! order, identity).

use crate::error::RenderError;
use crate::render::tree::RenderNode;
use std::collections::HashMap;

/// Trait for render-tree output targets
///
/// Implementors turn a [`RenderNode`] tree into a string in some concrete
/// syntax (HTML, a debug tree, JSON, ...).
///
/// # Examples
///
/// ```ignore
/// struct MyTarget;
///
/// impl RenderTarget for MyTarget {
///     fn name(&self) -> &str {
///         "my-target"
///     }
///
///     fn emit(&self, tree: &RenderNode) -> Result<String, RenderError> {
///         // Walk the tree and build output
///         todo!()
///     }
/// }
/// ```
pub trait RenderTarget: Send + Sync {
    /// The name of this target (e.g., "html", "treeviz", "json")
    fn name(&self) -> &str;

    /// Optional description of this target
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this target (e.g., ["html", "htm"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic target detection from output filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Emit the render tree as a string.
    fn emit(&self, tree: &RenderNode) -> Result<String, RenderError>;

    /// Emit the render tree, optionally using extra parameters.
    ///
    /// Targets without tunable output can rely on the default implementation,
    /// which delegates to [`RenderTarget::emit`] and rejects any parameters.
    fn emit_with_options(
        &self,
        tree: &RenderNode,
        options: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        if options.is_empty() {
            self.emit(tree)
        } else {
            Err(RenderError::NotSupported(format!(
                "Target '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
