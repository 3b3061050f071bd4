//! Shared configuration loader for the wiki conversion tools.
//!
//! `defaults/wiki.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`WikiConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use wiki_babel::formats::{HtmlOptions, MarkdownOptions};

pub use config::ValueKind;

const DEFAULT_TOML: &str = include_str!("../defaults/wiki.default.toml");

/// File picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "wiki.toml";

/// Top-level configuration consumed by the converters.
#[derive(Debug, Clone, Deserialize)]
pub struct WikiConfig {
    pub html: HtmlConfig,
    pub markdown: MarkdownConfig,
}

impl WikiConfig {
    /// Location of `markdown.custom_css`.
    ///
    /// A relative path set by `explicit_file` resolves against that file's
    /// directory; otherwise it resolves against the working directory, where
    /// `wiki.toml` lives.
    pub fn custom_css_path(&self, explicit_file: Option<&Path>) -> Option<PathBuf> {
        let css = self.markdown.custom_css.as_deref()?;
        let base = explicit_file
            .filter(|file| file_sets_key(file, "markdown.custom_css"))
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new(""));
        Some(base.join(css))
    }
}

fn file_sets_key(path: &Path, key: &str) -> bool {
    Config::builder()
        .add_source(File::from(path).format(FileFormat::Toml))
        .build()
        .is_ok_and(|config| config.get_string(key).is_ok())
}

/// Link prefixes for the HTML target.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub image_path: String,
    pub file_path: String,
}

impl From<HtmlConfig> for HtmlOptions {
    fn from(config: HtmlConfig) -> Self {
        HtmlOptions {
            image_base_path: config.image_path,
            file_base_path: config.file_path,
        }
    }
}

impl From<&HtmlConfig> for HtmlOptions {
    fn from(config: &HtmlConfig) -> Self {
        HtmlOptions {
            image_base_path: config.image_path.clone(),
            file_base_path: config.file_path.clone(),
        }
    }
}

/// Knobs for the markdown target.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub include_css: bool,
    pub callout_images: bool,
    /// Path to a stylesheet replacing the built-in one. Read by the caller.
    #[serde(default)]
    pub custom_css: Option<String>,
}

impl From<&MarkdownConfig> for MarkdownOptions {
    /// The stylesheet is left unset; `custom_css` is a path the caller must read.
    fn from(config: &MarkdownConfig) -> Self {
        MarkdownOptions {
            include_header: config.include_css,
            callout_images: config.callout_images,
            stylesheet: None,
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
    pub fn build(self) -> Result<WikiConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<WikiConfig, ConfigError> {
    Loader::new().build()
}
