//! Extension point for structured documents stored in an elv archive.
//!
//! This crate knows nothing about the `elvdoc` payload. Consumers that do
//! implement these traits on their own types; none ship here.

use crate::archive::limits::ValidateLimits;
use crate::archive::read_bundle_file;
use crate::bundle::Bundle;
use crate::error::ElvError;
use crate::facade::encode_bundle;
use std::path::{Path, PathBuf};

/// Builds a document from a decoded bundle.
pub trait DocumentReader {
    type Document;
    type Error: From<ElvError>;

    fn read_document(&self, bundle: &Bundle) -> Result<Self::Document, Self::Error>;
}

/// Renders a document into a bundle.
pub trait DocumentWriter {
    type Document;
    type Error: From<ElvError>;

    fn write_document(&self, document: &Self::Document) -> Result<Bundle, Self::Error>;
}

/// Decode the archive at `path` and hand its bundle to `reader`.
pub fn read_document_file<D: DocumentReader>(
    reader: &D,
    path: impl AsRef<Path>,
) -> Result<D::Document, D::Error> {
    let bundle = read_bundle_file(path.as_ref(), &ValidateLimits::default())?;
    reader.read_document(&bundle)
}

/// Render `document` with `writer` and encode it at `destination`.
pub fn write_document_file<D: DocumentWriter>(
    writer: &D,
    destination: impl AsRef<Path>,
    document: &D::Document,
) -> Result<PathBuf, D::Error> {
    let bundle = writer.write_document(document)?;
    Ok(encode_bundle(destination, &bundle)?)
}
