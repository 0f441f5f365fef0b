//! Reading, writing, and validating `.elv` document archives.
//!
//! An elv archive is a gzip-compressed tar holding a template, a stylesheet,
//! a script, and a YAML config under `elvdoc/`. Validity is decided by the
//! config entry alone.
//!
//! ```no_run
//! let written = elvdoc::encode(
//!     "invoice.elv",
//!     "<html></html>",
//!     "",
//!     "",
//!     "version: \"1.0.0\"\nelvdoc:\n  name: invoice",
//! )?;
//! assert!(elvdoc::validate(&written));
//! # Ok::<(), elvdoc::ElvError>(())
//! ```

pub mod archive;
pub mod bundle;
pub mod document;
pub mod error;
pub mod facade;

// Convenience re-exports
pub use archive::{
    canonical_destination, check_archive, check_reader, list_entries, read_bundle,
    read_bundle_file, read_entries, validate_archive, validate_archive_with_limits,
    write_archive, write_archive_file, ArchiveEntry, AssetRole, ElvConfig, EntryInfo, ErrorCode,
    ValidateError, ValidateLimits, ValidateLimitsOverrides,
};
pub use bundle::Bundle;
pub use document::{DocumentReader, DocumentWriter};
pub use error::{ElvError, ElvResult};
pub use facade::{
    encode, encode_bundle, encode_from_directory, encode_from_paths, pack_and_verify,
    read_assets_from_directory, unpack_to_directory, validate,
};
