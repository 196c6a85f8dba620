//! Shared configuration loader for the docview toolchain.
//!
//! `defaults/docview.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`DocviewConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use docview_render::targets::html::HtmlOptions;
use docview_render::FallbackPolicy;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/docview.default.toml");

/// Top-level configuration consumed by docview applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DocviewConfig {
    pub render: RenderConfig,
    pub html: HtmlConfig,
    pub treeviz: TreevizConfig,
}

/// Renderer-related knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub unknown_nodes: UnknownNodePolicy,
}

/// How unrecognized node kinds should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum UnknownNodePolicy {
    #[serde(rename = "skip")]
    Skip,
    #[serde(rename = "placeholder")]
    Placeholder,
}

/// HTML target knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub include_keys: bool,
}

/// Treeviz target knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct TreevizConfig {
    pub show_indices: bool,
}

impl From<UnknownNodePolicy> for FallbackPolicy {
    fn from(policy: UnknownNodePolicy) -> Self {
        match policy {
            UnknownNodePolicy::Skip => FallbackPolicy::Skip,
            UnknownNodePolicy::Placeholder => FallbackPolicy::Placeholder,
        }
    }
}

impl From<&HtmlConfig> for HtmlOptions {
    fn from(config: &HtmlConfig) -> Self {
        HtmlOptions {
            include_keys: config.include_keys,
            ..HtmlOptions::default()
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DocviewConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DocviewConfig, ConfigError> {
    Loader::new().build()
}
