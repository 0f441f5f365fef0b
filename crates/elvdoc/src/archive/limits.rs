//! Resource limits and bounded readers for archive decoding.

use flate2::read::MultiGzDecoder;
use serde::Deserialize;
use std::io::Read;

/// Resource limits applied while validating or decoding an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidateLimits {
    pub max_archive_bytes: u64,
    pub max_decode_bytes: u64,
    pub max_config_bytes: u64,
}

impl Default for ValidateLimits {
    fn default() -> Self {
        Self {
            max_archive_bytes: 100 * 1024 * 1024, // 100 MB compressed
            max_decode_bytes: 1024 * 1024 * 1024, // 1 GB uncompressed
            max_config_bytes: 1024 * 1024,        // 1 MB
        }
    }
}

/// Partial overrides for `ValidateLimits`. Used for CLI JSON parsing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidateLimitsOverrides {
    pub max_archive_bytes: Option<u64>,
    pub max_decode_bytes: Option<u64>,
    pub max_config_bytes: Option<u64>,
}

impl ValidateLimits {
    /// Apply overrides onto these limits. Only `Some` values override.
    pub fn apply(self, overrides: ValidateLimitsOverrides) -> Self {
        Self {
            max_archive_bytes: overrides
                .max_archive_bytes
                .unwrap_or(self.max_archive_bytes),
            max_decode_bytes: overrides.max_decode_bytes.unwrap_or(self.max_decode_bytes),
            max_config_bytes: overrides.max_config_bytes.unwrap_or(self.max_config_bytes),
        }
    }
}

/// A reader that limits the total number of bytes read and fails explicitly on overflow.
pub(crate) struct LimitReader<R> {
    inner: R,
    limit: u64,
    read: u64,
    error_tag: &'static str,
}

impl<R: Read> LimitReader<R> {
    pub(crate) fn new(inner: R, limit: u64, error_tag: &'static str) -> Self {
        Self {
            inner,
            limit,
            read: 0,
            error_tag,
        }
    }
}

impl<R: Read> Read for LimitReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.read >= self.limit {
            return Err(std::io::Error::other(format!(
                "{}: exceeded limit of {} bytes",
                self.error_tag, self.limit
            )));
        }

        let max_to_read = (self.limit - self.read).min(buf.len() as u64) as usize;
        let n = self.inner.read(&mut buf[..max_to_read])?;
        self.read += n as u64;

        Ok(n)
    }
}

/// Wrap a compressed source so both the input and the decoded stream are bounded.
///
/// Concatenated gzip members decode as one stream, as `gzip -dc` does.
pub(crate) fn bounded_archive<R: Read>(
    reader: R,
    limits: &ValidateLimits,
) -> tar::Archive<LimitReader<MultiGzDecoder<LimitReader<R>>>> {
    let reader = LimitReader::new(reader, limits.max_archive_bytes, "LimitArchiveBytes");
    let decoder = MultiGzDecoder::new(reader);
    let decoded = LimitReader::new(decoder, limits.max_decode_bytes, "LimitDecodeBytes");
    tar::Archive::new(decoded)
}
