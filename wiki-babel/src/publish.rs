//! File conversion driver.
//!
//! Reads one source file, runs the format's passes, lets the format wrap the
//! result, and writes one output file. Failures are captured in the returned
//! [`ConversionResult`] rather than propagated, so a batch can keep going.
//!
//! ```ignore
//! let format = MarkdownFormat::default();
//! let result = publish(PublishSpec::new(&format, "note.md").with_output_path("out.md"));
//! assert!(result.is_success());
//! ```

use crate::batch::{convert_directory, BatchReport};
use crate::error::ConvertError;
use crate::format::Format;
use std::fs;
use std::path::{Path, PathBuf};

/// Specifies one file conversion.
///
/// Without an output path the format's [`Format::default_output`] is used.
pub struct PublishSpec<'a> {
    pub format: &'a dyn Format,
    pub input: PathBuf,
    pub output: Option<PathBuf>,
}

impl<'a> PublishSpec<'a> {
    pub fn new(format: &'a dyn Format, input: impl AsRef<Path>) -> Self {
        Self {
            format,
            input: input.as_ref().to_path_buf(),
            output: None,
        }
    }

    /// Sets the destination file.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    fn destination(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.format.default_output(&self.input))
    }
}

/// Outcome of converting one file.
#[derive(Debug)]
pub struct ConversionResult {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// `None` on success.
    pub error: Option<ConvertError>,
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Result of [`publish_path`]: one file or a directory batch.
#[derive(Debug)]
pub enum Outcome {
    File(ConversionResult),
    Batch(BatchReport),
}

/// Converts the single file described by `spec`.
pub fn publish(spec: PublishSpec<'_>) -> ConversionResult {
    let destination = spec.destination();
    let error = convert_file(spec.format, &spec.input, &destination).err();

    match &error {
        None => tracing::debug!(
            format = spec.format.name(),
            source = %spec.input.display(),
            destination = %destination.display(),
            "converted file"
        ),
        Some(err) => tracing::debug!(
            format = spec.format.name(),
            source = %spec.input.display(),
            error = %err,
            "conversion failed"
        ),
    }

    ConversionResult {
        source: spec.input,
        destination,
        error,
    }
}

/// Converts `input` whether it is a file or a directory.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidInput`] when `input` is neither, and
/// [`ConvertError::CreateDir`] when a batch output root cannot be created.
/// Per-file failures are reported inside the [`Outcome`].
pub fn publish_path(
    format: &dyn Format,
    input: &Path,
    output: Option<&Path>,
) -> Result<Outcome, ConvertError> {
    if input.is_file() {
        let mut spec = PublishSpec::new(format, input);
        if let Some(path) = output {
            spec = spec.with_output_path(path);
        }
        Ok(Outcome::File(publish(spec)))
    } else if input.is_dir() {
        convert_directory(format, input, output).map(Outcome::Batch)
    } else {
        Err(ConvertError::InvalidInput(input.to_path_buf()))
    }
}

fn convert_file(format: &dyn Format, input: &Path, destination: &Path) -> Result<(), ConvertError> {
    let source = fs::read_to_string(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let body = format.convert(&source);
    let document = format.finalize(body, input);

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConvertError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(destination, document).map_err(|source| ConvertError::Write {
        path: destination.to_path_buf(),
        source,
    })
}
