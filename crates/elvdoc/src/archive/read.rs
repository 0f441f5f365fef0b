//! Full archive decoding.
//!
//! Unlike validation, [`read_entries`] and [`read_bundle`] read entry bodies
//! into memory. [`list_entries`] only looks at headers.

use crate::archive::layout::AssetRole;
use crate::archive::limits::{bounded_archive, ValidateLimits};
use crate::bundle::Bundle;
use crate::error::{ElvError, ElvResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// One raw entry from an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Entry path as stored in the tar header.
    pub path: String,
    pub data: Vec<u8>,
}

/// Path and size of one entry, taken from its tar header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub path: String,
    pub size: u64,
}

/// List the entries of an archive stream without reading their bodies.
pub fn list_entries<R: Read>(reader: R, limits: &ValidateLimits) -> ElvResult<Vec<EntryInfo>> {
    let mut archive = bounded_archive(reader, limits);
    let mut out = Vec::new();

    for entry in archive.entries()? {
        let entry = entry?;
        out.push(EntryInfo {
            path: String::from_utf8_lossy(&entry.path_bytes()).into_owned(),
            size: entry.size(),
        });
    }

    Ok(out)
}

/// Read every entry of an archive stream, in stream order.
pub fn read_entries<R: Read>(reader: R, limits: &ValidateLimits) -> ElvResult<Vec<ArchiveEntry>> {
    let mut archive = bounded_archive(reader, limits);
    let mut out = Vec::new();

    for entry in archive.entries()? {
        let mut entry = entry?;
        let path = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
        let mut data = Vec::new();
        entry.read_to_end(&mut data)?;
        out.push(ArchiveEntry { path, data });
    }

    Ok(out)
}

/// Decode an archive stream back into its bundle.
///
/// All four entries must be present and their bytes are returned unchanged.
/// Other entries are skipped, and for a repeated entry name the first
/// occurrence wins, as in validation.
pub fn read_bundle<R: Read>(reader: R, limits: &ValidateLimits) -> ElvResult<Bundle> {
    let mut archive = bounded_archive(reader, limits);
    let mut slots: [Option<Vec<u8>>; 4] = Default::default();

    for entry in archive.entries()? {
        let mut entry = entry?;
        let path = String::from_utf8_lossy(&entry.path_bytes()).into_owned();

        let Some(role) = AssetRole::from_entry_path(&path) else {
            warn!(entry = %path, "skipping unexpected archive entry");
            continue;
        };
        let slot = &mut slots[role.index()];
        if slot.is_some() {
            warn!(entry = %path, "skipping duplicate archive entry");
            continue;
        }

        let mut data = Vec::new();
        entry.read_to_end(&mut data)?;
        *slot = Some(data);
    }

    let [template, style, script, config] = slots;
    let require = |slot: Option<Vec<u8>>, role: AssetRole| {
        slot.ok_or(ElvError::MissingEntry {
            entry: role.entry_path(),
        })
    };

    Ok(Bundle {
        template: require(template, AssetRole::Template)?,
        style: require(style, AssetRole::Style)?,
        script: require(script, AssetRole::Script)?,
        config: require(config, AssetRole::Config)?,
    })
}

/// Open `path` and decode it with [`read_bundle`].
///
/// Unlike validation, the extension is not checked.
pub fn read_bundle_file(path: &Path, limits: &ValidateLimits) -> ElvResult<Bundle> {
    let file = File::open(path).map_err(|source| ElvError::OpenArchive {
        path: path.to_path_buf(),
        source,
    })?;
    read_bundle(file, limits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::layout::paths;
    use crate::archive::write::encode_to_vec;
    use std::io::Cursor;

    fn archive_with(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::fast());
        let mut tar = tar::Builder::new(encoder);
        for (path, data) in entries {
            let mut header = tar::Header::new_gnu();
            header.set_path(path).unwrap();
            header.set_size(data.len() as u64);
            header.set_cksum();
            tar.append(&header, *data).unwrap();
        }
        tar.into_inner().unwrap().finish().unwrap()
    }

    #[test]
    fn test_read_bundle_roundtrip() {
        let bundle = Bundle::new("<html/>", "body{}", "go()", "version: 1\nelvdoc: {}");
        let bytes = encode_to_vec(&bundle).unwrap();
        let decoded = read_bundle(Cursor::new(bytes), &ValidateLimits::default()).unwrap();
        assert_eq!(decoded, bundle);
    }

    #[test]
    fn test_read_entries_lists_everything() {
        let bytes = archive_with(&[
            ("notes.txt", &b"hello"[..]),
            (paths::CONFIG, &b"version: 1"[..]),
        ]);
        let entries = read_entries(Cursor::new(bytes), &ValidateLimits::default()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path, "notes.txt");
        assert_eq!(entries[0].data, b"hello");
        assert_eq!(entries[1].path, paths::CONFIG);
    }

    #[test]
    fn test_read_bundle_missing_entry() {
        let bytes = archive_with(&[(paths::CONFIG, &b"version: 1\nelvdoc: 1"[..])]);
        let err = read_bundle(Cursor::new(bytes), &ValidateLimits::default()).unwrap_err();
        assert!(matches!(
            err,
            ElvError::MissingEntry {
                entry: paths::TEMPLATE
            }
        ));
    }

    #[test]
    fn test_read_bundle_skips_extras_and_duplicates() {
        let bytes = archive_with(&[
            (paths::TEMPLATE, &b"first"[..]),
            ("extra/readme.md", &b"ignored"[..]),
            (paths::TEMPLATE, &b"second"[..]),
            (paths::STYLE, &b""[..]),
            (paths::SCRIPT, &b""[..]),
            (paths::CONFIG, &b"c"[..]),
        ]);
        let bundle = read_bundle(Cursor::new(bytes), &ValidateLimits::default()).unwrap();
        assert_eq!(bundle.template, b"first");
        assert_eq!(bundle.config, b"c");
    }

    #[test]
    fn test_read_bundle_keeps_binary_payload() {
        let bytes = archive_with(&[
            (paths::TEMPLATE, &[0xc3u8, 0x28][..]),
            (paths::STYLE, &b""[..]),
            (paths::SCRIPT, &b""[..]),
            (paths::CONFIG, &b""[..]),
        ]);
        let bundle = read_bundle(Cursor::new(bytes), &ValidateLimits::default()).unwrap();
        assert_eq!(bundle.template, [0xc3u8, 0x28]);
    }

    #[test]
    fn test_list_entries_reports_header_sizes() {
        let bundle = Bundle::new("<html/>", "", "go()", "version: 1\nelvdoc: {}");
        let bytes = encode_to_vec(&bundle).unwrap();
        let entries = list_entries(Cursor::new(bytes), &ValidateLimits::default()).unwrap();

        let sizes: Vec<_> = entries.iter().map(|e| (e.path.as_str(), e.size)).collect();
        assert_eq!(
            sizes,
            vec![
                (paths::TEMPLATE, 7),
                (paths::STYLE, 0),
                (paths::SCRIPT, 4),
                (paths::CONFIG, 21),
            ]
        );
    }

    #[test]
    fn test_list_entries_not_gzip() {
        let err = list_entries(Cursor::new(b"plain text".to_vec()), &ValidateLimits::default())
            .unwrap_err();
        assert!(matches!(err, ElvError::Io(_)));
    }

    #[test]
    fn test_read_bundle_file_missing() {
        let err = read_bundle_file(
            Path::new("/nonexistent/archive.tar.gz"),
            &ValidateLimits::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ElvError::OpenArchive { .. }));
    }
}
