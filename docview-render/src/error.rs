//! Error types for target operations.
//!
//! Rendering itself never fails: degenerate nodes degrade to defaults or
//! placeholders inside the render pass. Errors here belong to the host-facing
//! surface — target lookup and emission.

use std::fmt;

/// Errors that can occur when emitting a render tree through a target.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Target not found in registry
    TargetNotFound(String),
    /// Error during emission
    EmitError(String),
    /// Target does not support the requested operation
    NotSupported(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TargetNotFound(name) => write!(f, "Target '{name}' not found"),
            RenderError::EmitError(msg) => write!(f, "Emit error: {msg}"),
            RenderError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}
