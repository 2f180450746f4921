//! Shared configuration loader for the inkstone toolchain.
//!
//! `defaults/inkstone.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user files
//! and `INKSTONE_*` environment variables on top of those defaults via
//! [`Loader`] before deserializing into [`InkstoneConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/inkstone.default.toml");

/// Environment prefix; `INKSTONE_API__TOKEN` maps to `api.token`.
const ENV_PREFIX: &str = "INKSTONE";

/// Top-level configuration consumed by inkstone applications.
#[derive(Debug, Clone, Deserialize)]
pub struct InkstoneConfig {
    pub api: ApiConfig,
    pub log: LogConfig,
}

/// Workspace API connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Bearer token. Empty in the defaults; validated by the application,
    /// not the loader, so read-only commands can fail with a useful
    /// message instead of a deserialization error.
    pub token: String,
    pub base_url: String,
    pub version: String,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// EnvFilter directive applied when `RUST_LOG` is unset.
    pub filter: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults and the
    /// `INKSTONE_*` environment layer.
    pub fn new() -> Self {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));
        Loader { builder }
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
    pub fn build(self) -> Result<InkstoneConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<InkstoneConfig, ConfigError> {
    Loader::new().build()
}
