//! Error types for conversion runs

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while converting files.
///
/// Pattern substitution itself never fails; every variant here comes from the
/// file system boundary.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source missing, unreadable, or not valid UTF-8
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Destination could not be written
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Output directory could not be created
    #[error("failed to create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Input path is neither a file nor a directory
    #[error("path '{}' does not exist", .0.display())]
    InvalidInput(PathBuf),
}

impl ConvertError {
    /// The path the failure is about.
    pub fn path(&self) -> &Path {
        match self {
            ConvertError::Read { path, .. }
            | ConvertError::Write { path, .. }
            | ConvertError::CreateDir { path, .. }
            | ConvertError::InvalidInput(path) => path,
        }
    }
}
