//! JSON target for render trees
//!
//! Serializes the render tree as pretty-printed JSON, index annotations
//! included. This is the lossless machine-readable view of a render pass,
//! suitable for host UIs that reconcile against indices themselves.

use crate::error::RenderError;
use crate::render::tree::RenderNode;
use crate::target::RenderTarget;

/// Lossless JSON view of the render tree.
pub struct JsonTarget;

impl RenderTarget for JsonTarget {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Render tree as pretty-printed JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn emit(&self, tree: &RenderNode) -> Result<String, RenderError> {
        serde_json::to_string_pretty(tree)
            .map_err(|e| RenderError::EmitError(format!("JSON serialization failed: {e}")))
    }
}
