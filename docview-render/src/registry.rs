//! Target registry for target discovery and selection
//!
//! This module provides a centralized registry for all available output
//! targets. Targets can be registered and retrieved by name.

use crate::error::RenderError;
use crate::render::tree::RenderNode;
use crate::target::RenderTarget;
use std::collections::HashMap;

/// Registry of output targets
///
/// # Examples
///
/// ```ignore
/// let mut registry = TargetRegistry::new();
/// registry.register(MyTarget);
///
/// let target = registry.get("my-target")?;
/// let output = target.emit(&tree)?;
/// ```
pub struct TargetRegistry {
    targets: HashMap<String, Box<dyn RenderTarget>>,
}

impl TargetRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        TargetRegistry {
            targets: HashMap::new(),
        }
    }

    /// Register a target
    ///
    /// If a target with the same name already exists, it will be replaced.
    pub fn register<T: RenderTarget + 'static>(&mut self, target: T) {
        self.targets
            .insert(target.name().to_string(), Box::new(target));
    }

    /// Get a target by name
    pub fn get(&self, name: &str) -> Result<&dyn RenderTarget, RenderError> {
        self.targets
            .get(name)
            .map(|t| t.as_ref())
            .ok_or_else(|| RenderError::TargetNotFound(name.to_string()))
    }

    /// Check if a target exists
    pub fn has(&self, name: &str) -> bool {
        self.targets.contains_key(name)
    }

    /// List all available target names (sorted)
    pub fn list_targets(&self) -> Vec<String> {
        let mut names: Vec<_> = self.targets.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect target from filename based on file extension
    ///
    /// Returns the target name if a matching extension is found, or None
    /// otherwise.
    pub fn detect_target_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        for target in self.targets.values() {
            if target.file_extensions().contains(&extension) {
                return Some(target.name().to_string());
            }
        }

        None
    }

    /// Emit a render tree using the specified target
    pub fn emit(&self, tree: &RenderNode, target: &str) -> Result<String, RenderError> {
        self.get(target)?.emit(tree)
    }

    /// Emit a render tree using the specified target and options
    pub fn emit_with_options(
        &self,
        tree: &RenderNode,
        target: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        self.get(target)?.emit_with_options(tree, options)
    }

    /// Create a registry with the built-in targets
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::targets::html::HtmlTarget::default());
        registry.register(crate::targets::treeviz::TreevizTarget);
        registry.register(crate::targets::json::JsonTarget);

        registry
    }
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
