//! Shared configuration loader for proust.
//!
//! `defaults/proust.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files,
//! `PROUST_*` environment toggles and command-line overrides on top of those
//! defaults via [`Loader`] before deserializing into [`ProustConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/proust.default.toml");

/// Prefix of the environment toggles (`PROUST_LOADER__PARAGRAPH_LIMIT=0`).
pub const ENV_PREFIX: &str = "PROUST";

/// Top-level configuration consumed by the proust binary.
#[derive(Debug, Clone, Deserialize)]
pub struct ProustConfig {
    pub loader: LoaderConfig,
    pub segmenter: SegmenterConfig,
    pub reader: ReaderConfig,
    pub export: ExportConfig,
}

/// How raw text files are cut into paragraphs.
#[derive(Debug, Clone, Deserialize)]
pub struct LoaderConfig {
    pub header_lines: usize,
    /// 0 keeps every paragraph.
    pub paragraph_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SegmenterConfig {
    pub title: String,
    pub default_tag: DefaultTagSetting,
    pub tagger: TaggerConfig,
}

/// Fallback tag for words the heuristic classifier does not recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefaultTagSetting {
    Word,
    Noun,
}

/// External tagger program. Only consulted when `enabled` is set.
#[derive(Debug, Clone, Deserialize)]
pub struct TaggerConfig {
    pub enabled: bool,
    pub program: String,
    pub args: Vec<String>,
}

/// Pace of the interactive reader.
#[derive(Debug, Clone, Deserialize)]
pub struct ReaderConfig {
    pub seconds_per_word: f64,
    pub step: f64,
    pub min_seconds_per_word: f64,
    pub max_seconds_per_word: f64,
    pub context_paragraphs: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub format: String,
    pub from: usize,
    pub to: usize,
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

    /// Layer `PROUST_*` environment variables, nested keys separated by `__`.
    pub fn with_env(mut self) -> Self {
        let source = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
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
    pub fn build(self) -> Result<ProustConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ProustConfig, ConfigError> {
    Loader::new().build()
}
