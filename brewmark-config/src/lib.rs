//! Configuration loader for brewmark.
//!
//! `defaults/brewmark.default.toml` is embedded into every binary so that the documented
//! defaults and runtime behavior stay in sync. Applications layer user files and
//! command-line overrides on top of them via [`Loader`] before deserializing into
//! [`BrewConfig`].

use brewmark::{BreakSpelling, HeadingStyle, SerializeRules};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/brewmark.default.toml");

/// Top-level configuration consumed by brewmark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BrewConfig {
    pub serializer: SerializerConfig,
    pub convert: ConvertConfig,
}

/// Mirrors the knobs exposed by the markup serializer.
#[derive(Debug, Clone, Deserialize)]
pub struct SerializerConfig {
    pub heading_style: HeadingStyle,
    pub break_spelling: BreakSpelling,
    pub blank_lines_between_blocks: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub normalize: bool,
}

impl From<&SerializerConfig> for SerializeRules {
    fn from(config: &SerializerConfig) -> Self {
        SerializeRules {
            heading_style: config.heading_style,
            break_spelling: config.break_spelling,
            blank_lines_between_blocks: config.blank_lines_between_blocks,
        }
    }
}

impl BrewConfig {
    pub fn serialize_rules(&self) -> SerializeRules {
        SerializeRules::from(&self.serializer)
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

    /// Apply a single key/value override (useful for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<BrewConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BrewConfig, ConfigError> {
    Loader::new().build()
}
