//! Archive validation: a single forward scan that stops at the config entry.
//!
//! Every failure collapses to "not valid" for [`validate_archive`]. The
//! `check_*` variants keep the reason as a [`ValidateError`].

use crate::archive::config::{decode_config, ElvConfig};
use crate::archive::layout::{has_canonical_extension, paths};
use crate::archive::limits::{bounded_archive, ValidateLimits};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Stable codes for validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    /// Path does not end in `.tar.gz`.
    Extension,
    /// Source could not be opened.
    Open,
    /// Corrupt gzip or tar stream.
    Stream,
    /// Archive or decoded stream exceeded a configured limit.
    Limit,
    /// No `elvdoc/config.yaml` entry.
    MissingConfig,
    ConfigTooLarge,
    ConfigEncoding,
    ConfigYaml,
    MissingVersion,
    MissingElvdoc,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Typed validation failure with stable code.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message} ({code})")]
pub struct ValidateError {
    pub code: ErrorCode,
    pub message: String,
}

impl ValidateError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.message = format!("{}: {}", context.into(), self.message);
        self
    }

    fn from_stream(err: std::io::Error) -> Self {
        let message = err.to_string();
        let limited =
            message.contains("LimitArchiveBytes") || message.contains("LimitDecodeBytes");
        let code = if limited {
            ErrorCode::Limit
        } else {
            ErrorCode::Stream
        };
        Self { code, message }
    }
}

/// True if `path` is a valid elv archive under default limits.
pub fn validate_archive(path: &Path) -> bool {
    validate_archive_with_limits(path, &ValidateLimits::default())
}

/// True if `path` is a valid elv archive under `limits`.
pub fn validate_archive_with_limits(path: &Path, limits: &ValidateLimits) -> bool {
    match check_archive(path, limits) {
        Ok(config) => {
            debug!(path = %path.display(), version = %config.version, "archive valid");
            true
        }
        Err(e) => {
            debug!(path = %path.display(), code = %e.code, "archive invalid: {}", e.message);
            false
        }
    }
}

/// Validate an archive on disk and return its decoded config.
///
/// The extension gate runs before the file is opened.
pub fn check_archive(path: &Path, limits: &ValidateLimits) -> Result<ElvConfig, ValidateError> {
    if !has_canonical_extension(path) {
        return Err(ValidateError::new(
            ErrorCode::Extension,
            format!("{} does not end in .tar.gz", path.display()),
        ));
    }

    let file = File::open(path).map_err(|e| {
        ValidateError::new(ErrorCode::Open, e.to_string()).with_context(path.display().to_string())
    })?;

    check_reader(file, limits)
}

/// Validate an archive stream and return its decoded config.
///
/// Entries before the config entry are skipped without reading their bodies
/// into memory; nothing after it is read.
pub fn check_reader<R: Read>(
    reader: R,
    limits: &ValidateLimits,
) -> Result<ElvConfig, ValidateError> {
    let mut archive = bounded_archive(reader, limits);

    let entries = archive
        .entries()
        .map_err(|e| ValidateError::from_stream(e).with_context("Gzip/Tar stream"))?;

    for (i, entry) in entries.enumerate() {
        let entry = entry
            .map_err(|e| ValidateError::from_stream(e).with_context(format!("Entry #{}", i)))?;

        if entry.path_bytes().as_ref() != paths::CONFIG.as_bytes() {
            continue;
        }

        return read_config(entry, limits);
    }

    Err(ValidateError::new(
        ErrorCode::MissingConfig,
        format!("archive has no {} entry", paths::CONFIG),
    ))
}

fn read_config<R: Read>(entry: R, limits: &ValidateLimits) -> Result<ElvConfig, ValidateError> {
    let mut body = Vec::new();
    entry
        .take(limits.max_config_bytes.saturating_add(1))
        .read_to_end(&mut body)
        .map_err(|e| ValidateError::from_stream(e).with_context(paths::CONFIG))?;

    if body.len() as u64 > limits.max_config_bytes {
        return Err(ValidateError::new(
            ErrorCode::ConfigTooLarge,
            format!(
                "{} exceeds limit of {} bytes",
                paths::CONFIG,
                limits.max_config_bytes
            ),
        ));
    }

    decode_config(body)
}
