//! Directory conversion driver.
//!
//! Enumerates source files under a root (recursively or top level only, as the
//! format asks), converts them one at a time in file name order, and mirrors
//! their relative location into the output root.

use crate::error::ConvertError;
use crate::format::Format;
use crate::publish::{publish, ConversionResult, PublishSpec};
use pathdiff::diff_paths;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Per-file results of one directory run, in conversion order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<ConversionResult>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ConversionResult> {
        self.results.iter().filter(|r| !r.is_success())
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Converts every matching file under `input_dir`.
///
/// Without `output_dir`, the format's [`Format::default_output_dir`] is used;
/// when that is `input_dir` itself, files are rewritten in place.
///
/// # Errors
///
/// Only when the output root cannot be created. Failures of individual files are
/// recorded in the report and do not stop the run.
pub fn convert_directory(
    format: &dyn Format,
    input_dir: &Path,
    output_dir: Option<&Path>,
) -> Result<BatchReport, ConvertError> {
    let output_root = output_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| format.default_output_dir(input_dir));

    fs::create_dir_all(&output_root).map_err(|source| ConvertError::CreateDir {
        path: output_root.clone(),
        source,
    })?;

    let sources = collect_sources(format, input_dir);
    let mut report = BatchReport::default();

    for source in sources {
        let relative = diff_paths(&source, input_dir).unwrap_or_else(|| source.clone());
        let destination = output_root.join(relative);
        let result = publish(PublishSpec::new(format, &source).with_output_path(destination));
        report.results.push(result);
    }

    tracing::info!(
        format = format.name(),
        root = %input_dir.display(),
        succeeded = report.succeeded(),
        total = report.total(),
        "batch finished"
    );

    Ok(report)
}

/// Source files a directory run would convert, sorted by file name per directory.
///
/// Symlinks are followed, so a linked note counts like any other file.
pub fn collect_sources(format: &dyn Format, input_dir: &Path) -> Vec<PathBuf> {
    let walker = WalkDir::new(input_dir)
        .follow_links(true)
        .min_depth(1)
        .sort_by_file_name();
    let walker = if format.recursive() {
        walker
    } else {
        walker.max_depth(1)
    };

    walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| format.accepts(path) && !format.skip_in_batch(path))
        .collect()
}
