//! Error types for building and decoding elv archives.

use crate::archive::ValidateError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for archive construction and decoding.
pub type ElvResult<T> = Result<T, ElvError>;

/// Errors raised while building, decoding, or unpacking an archive.
///
/// Validation never produces these: see [`ValidateError`] and
/// [`crate::validate`] for the fail-closed side.
#[derive(Debug, Error)]
pub enum ElvError {
    /// A source asset could not be read.
    #[error("failed to read asset {path}: {source}")]
    ReadAsset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The destination archive could not be created or flushed.
    #[error("failed to create archive {path}: {source}")]
    CreateArchive {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An existing archive could not be opened for decoding.
    #[error("failed to open archive {path}: {source}")]
    OpenArchive {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Appending an entry to the tar stream failed.
    #[error("failed to write entry {entry}: {source}")]
    WriteEntry {
        entry: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Finishing the tar or gzip stream failed.
    #[error("failed to finalize {stage}: {source}")]
    Finalize {
        stage: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// A required bundle entry is not present in the archive.
    #[error("archive is missing entry {entry}")]
    MissingEntry { entry: &'static str },

    /// An archive was written but did not pass validation.
    #[error("archive {path} failed validation: {source}")]
    Validation {
        path: PathBuf,
        #[source]
        source: ValidateError,
    },

    /// Writing an unpacked asset failed.
    #[error("failed to write {path}: {source}")]
    WriteAsset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic I/O failure while decoding a stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ElvError {
    /// Returns true if this error came from reading a source asset.
    pub fn is_read_asset(&self) -> bool {
        matches!(self, Self::ReadAsset { .. })
    }

    /// Returns true if this error means an archive failed validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
