//! Deterministic archive writer.
//!
//! Byte-for-byte reproducible for the same bundle: fixed header metadata,
//! zero mtimes, and a fixed entry order.

use crate::archive::layout::AssetRole;
use crate::bundle::Bundle;
use crate::error::{ElvError, ElvResult};
use flate2::{Compression, GzBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tar::{Builder, Header};
use tracing::debug;

/// Write `bundle` to `writer` as a tar.gz archive and hand the writer back.
///
/// All four entries are always written, empty payloads included.
pub fn write_archive<W: Write>(writer: W, bundle: &Bundle) -> ElvResult<W> {
    let encoder = GzBuilder::new()
        .mtime(0)
        .operating_system(255)
        .write(writer, Compression::best());
    let mut tar = Builder::new(encoder);
    tar.mode(tar::HeaderMode::Deterministic);

    for role in AssetRole::ALL {
        let entry = role.entry_path();
        write_entry(&mut tar, entry, bundle.asset(role))
            .map_err(|source| ElvError::WriteEntry { entry, source })?;
    }

    let encoder = tar.into_inner().map_err(|source| ElvError::Finalize {
        stage: "tar archive",
        source,
    })?;
    encoder.finish().map_err(|source| ElvError::Finalize {
        stage: "gzip stream",
        source,
    })
}

/// Encode `bundle` into an in-memory archive.
pub fn encode_to_vec(bundle: &Bundle) -> ElvResult<Vec<u8>> {
    write_archive(Vec::new(), bundle)
}

/// Create or overwrite `path` with the encoded `bundle`.
///
/// No extension rewriting happens here; see [`crate::canonical_destination`].
pub fn write_archive_file(path: &Path, bundle: &Bundle) -> ElvResult<()> {
    let file = File::create(path).map_err(|source| ElvError::CreateArchive {
        path: path.to_path_buf(),
        source,
    })?;

    let writer = write_archive(BufWriter::new(file), bundle)?;
    writer
        .into_inner()
        .map_err(|e| ElvError::CreateArchive {
            path: path.to_path_buf(),
            source: e.into_error(),
        })?;

    debug!(path = %path.display(), "wrote archive");
    Ok(())
}

fn write_entry<T: Write>(tar: &mut Builder<T>, path: &str, data: &[u8]) -> std::io::Result<()> {
    let mut header = Header::new_gnu();
    header.set_path(path)?;
    header.set_size(data.len() as u64);
    header.set_mode(0o644);
    header.set_uid(0);
    header.set_gid(0);
    header.set_mtime(0);
    header.set_username("elvdoc")?;
    header.set_groupname("elvdoc")?;
    header.set_cksum();

    tar.append(&header, data)
}
