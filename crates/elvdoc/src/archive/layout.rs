//! Fixed entry layout and file naming for elv archives.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Directory prefix every bundle entry lives under.
pub const PREFIX: &str = "elvdoc/";

/// Canonical archive extension. Validation only accepts paths ending in it.
pub const CANONICAL_EXTENSION: &str = ".tar.gz";

/// Short alias rewritten to [`CANONICAL_EXTENSION`] before writing.
pub const SHORT_EXTENSION: &str = ".elv";

/// Canonical entry paths inside the archive (POSIX, relative to root).
pub mod paths {
    pub const TEMPLATE: &str = "elvdoc/template.html";
    pub const STYLE: &str = "elvdoc/style.css";
    pub const SCRIPT: &str = "elvdoc/function.js";
    /// The only entry that gates validity.
    pub const CONFIG: &str = "elvdoc/config.yaml";
}

/// One of the four asset roles in a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetRole {
    Template,
    Style,
    Script,
    Config,
}

impl AssetRole {
    /// All roles in write order. Config goes last.
    pub const ALL: [AssetRole; 4] = [
        AssetRole::Template,
        AssetRole::Style,
        AssetRole::Script,
        AssetRole::Config,
    ];

    /// File name of this asset in a source directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Template => "template.html",
            Self::Style => "style.css",
            Self::Script => "function.js",
            Self::Config => "config.yaml",
        }
    }

    /// Entry path of this asset inside the archive.
    pub fn entry_path(self) -> &'static str {
        match self {
            Self::Template => paths::TEMPLATE,
            Self::Style => paths::STYLE,
            Self::Script => paths::SCRIPT,
            Self::Config => paths::CONFIG,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Map an archive entry path back to its role, if it is one of the four.
    pub fn from_entry_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.entry_path() == path)
    }
}

impl std::fmt::Display for AssetRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Case-insensitive check for the canonical `.tar.gz` suffix.
///
/// A cheap pre-filter only; it says nothing about the file contents.
pub fn has_canonical_extension(path: &Path) -> bool {
    path.to_string_lossy()
        .to_lowercase()
        .ends_with(CANONICAL_EXTENSION)
}

/// Rewrite a destination ending in `.elv` to end in `.tar.gz`.
///
/// Any other path is returned unchanged.
pub fn canonical_destination(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    let cut = raw.len().saturating_sub(SHORT_EXTENSION.len());
    let matches = raw.len() >= SHORT_EXTENSION.len()
        && raw.as_bytes()[cut..].eq_ignore_ascii_case(SHORT_EXTENSION.as_bytes());
    if matches {
        // The matched tail is ASCII, so `cut` is a char boundary.
        return PathBuf::from(format!("{}{CANONICAL_EXTENSION}", &raw[..cut]));
    }
    path.to_path_buf()
}
