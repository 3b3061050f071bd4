//! Format trait definition
//!
//! This module defines the Format trait that both conversion targets implement.
//! The drivers in [`crate::publish`] and [`crate::batch`] only talk to this trait, so
//! everything that differs between targets (passes, wrapping, output naming, walk
//! depth) lives behind it.

use std::path::{Path, PathBuf};

/// Trait for conversion targets
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Format for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn convert(&self, source: &str) -> String {
///         source.to_uppercase()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "markdown")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Source file extensions picked up by directory runs, without the leading dot.
    fn file_extensions(&self) -> &[&str] {
        &["md"]
    }

    /// Run the substitution passes over a whole document.
    ///
    /// Must be pure: the same source always yields the same text.
    fn convert(&self, source: &str) -> String;

    /// Wrap a converted body before it is written.
    ///
    /// Called by the file driver only, never by [`Format::convert`], so running the
    /// passes again over finished output cannot add a second wrapper.
    fn finalize(&self, body: String, _source_path: &Path) -> String {
        body
    }

    /// Destination used when a single file is converted without an explicit output.
    fn default_output(&self, input: &Path) -> PathBuf {
        input.to_path_buf()
    }

    /// Output root used when a directory is converted without an explicit output.
    fn default_output_dir(&self, input_dir: &Path) -> PathBuf {
        input_dir.to_path_buf()
    }

    /// Whether directory runs descend into subdirectories.
    fn recursive(&self) -> bool {
        true
    }

    /// Files a directory run should leave alone even though their extension matches.
    fn skip_in_batch(&self, _path: &Path) -> bool {
        false
    }

    /// Whether `path` carries one of [`Format::file_extensions`].
    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.file_extensions().contains(&ext))
    }
}
