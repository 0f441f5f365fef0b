//! The elv archive codec.
//!
//! An archive is a deterministic tar.gz holding four entries under `elvdoc/`:
//! - `template.html`, `style.css`, `function.js`: opaque payloads
//! - `config.yaml`: the only entry that decides validity
//!
//! # Modules
//!
//! - [`write`]: encode a [`Bundle`](crate::Bundle) with `write_archive`
//! - [`verify`]: fail-closed validation with `validate_archive` / `check_archive`
//! - [`read`]: full decoding with `read_bundle`

pub mod config;
pub mod layout;
pub mod limits;
pub mod read;
pub mod verify;
pub mod write;

// Re-exports for convenience
pub use config::{decode_config, parse_config, ElvConfig};
pub use layout::{canonical_destination, has_canonical_extension, paths, AssetRole};
pub use limits::{ValidateLimits, ValidateLimitsOverrides};
pub use read::{list_entries, read_bundle, read_bundle_file, read_entries, ArchiveEntry, EntryInfo};
pub use verify::{
    check_archive, check_reader, validate_archive, validate_archive_with_limits, ErrorCode,
    ValidateError,
};
pub use write::{encode_to_vec, write_archive, write_archive_file};
