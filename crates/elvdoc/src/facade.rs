//! Path-level operations on elv archives.
//!
//! Every encode operation rewrites a `.elv` destination to `.tar.gz` first and
//! returns the path it actually wrote. Validation never rewrites.

use crate::archive::layout::canonical_destination;
use crate::archive::limits::ValidateLimits;
use crate::archive::{check_archive, read_bundle_file, validate_archive, write_archive_file};
use crate::bundle::Bundle;
use crate::error::{ElvError, ElvResult};
use std::path::{Path, PathBuf};
use tracing::info;

/// True if `path` names a well-formed elv archive. Never fails.
pub fn validate(path: impl AsRef<Path>) -> bool {
    validate_archive(path.as_ref())
}

/// Encode four in-memory assets into an archive at `destination`.
pub fn encode(
    destination: impl AsRef<Path>,
    template: &str,
    style: &str,
    script: &str,
    config: &str,
) -> ElvResult<PathBuf> {
    encode_bundle(destination, &Bundle::new(template, style, script, config))
}

/// Encode `bundle` into an archive at `destination`.
pub fn encode_bundle(destination: impl AsRef<Path>, bundle: &Bundle) -> ElvResult<PathBuf> {
    let destination = canonical_destination(destination.as_ref());
    write_archive_file(&destination, bundle)?;
    Ok(destination)
}

/// Read four asset files and encode them. Nothing is written if any read fails.
pub fn encode_from_paths(
    destination: impl AsRef<Path>,
    template_path: impl AsRef<Path>,
    style_path: impl AsRef<Path>,
    script_path: impl AsRef<Path>,
    config_path: impl AsRef<Path>,
) -> ElvResult<PathBuf> {
    let bundle = Bundle::read_from_paths(template_path, style_path, script_path, config_path)?;
    encode_bundle(destination, &bundle)
}

/// Encode the four fixed asset files found in `source_dir`.
pub fn encode_from_directory(
    destination: impl AsRef<Path>,
    source_dir: impl AsRef<Path>,
) -> ElvResult<PathBuf> {
    let bundle = read_assets_from_directory(source_dir)?;
    encode_bundle(destination, &bundle)
}

/// Read the four fixed asset files from `source_dir`.
pub fn read_assets_from_directory(source_dir: impl AsRef<Path>) -> ElvResult<Bundle> {
    Bundle::read_from_directory(source_dir)
}

/// Encode `source_dir`, then validate what was written.
pub fn pack_and_verify(
    destination: impl AsRef<Path>,
    source_dir: impl AsRef<Path>,
) -> ElvResult<PathBuf> {
    let written = encode_from_directory(destination, source_dir)?;
    let config = check_archive(&written, &ValidateLimits::default()).map_err(|source| {
        ElvError::Validation {
            path: written.clone(),
            source,
        }
    })?;
    info!(path = %written.display(), version = %config.version, "packed archive");
    Ok(written)
}

/// Decode `archive` and write its four assets into `dest_dir`.
///
/// Only the fixed asset file names are written, whatever the archive holds.
pub fn unpack_to_directory(
    archive: impl AsRef<Path>,
    dest_dir: impl AsRef<Path>,
) -> ElvResult<Bundle> {
    let bundle = read_bundle_file(archive.as_ref(), &ValidateLimits::default())?;
    bundle.write_to_directory(dest_dir)?;
    Ok(bundle)
}
