//! The four-asset bundle carried by an elv archive.

use crate::archive::config::{decode_config, ElvConfig};
use crate::archive::layout::AssetRole;
use crate::archive::verify::ValidateError;
use crate::error::{ElvError, ElvResult};
use std::fs;
use std::path::Path;

/// Template, stylesheet, script, and YAML config payloads.
///
/// A bundle always has all four assets; any of them may be empty. Payloads
/// are raw bytes and are never re-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    pub template: Vec<u8>,
    pub style: Vec<u8>,
    pub script: Vec<u8>,
    pub config: Vec<u8>,
}

impl Bundle {
    pub fn new(
        template: impl Into<Vec<u8>>,
        style: impl Into<Vec<u8>>,
        script: impl Into<Vec<u8>>,
        config: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            template: template.into(),
            style: style.into(),
            script: script.into(),
            config: config.into(),
        }
    }

    /// Payload for `role`.
    pub fn asset(&self, role: AssetRole) -> &[u8] {
        match role {
            AssetRole::Template => &self.template,
            AssetRole::Style => &self.style,
            AssetRole::Script => &self.script,
            AssetRole::Config => &self.config,
        }
    }

    /// Iterate `(role, payload)` pairs in write order.
    pub fn assets(&self) -> impl Iterator<Item = (AssetRole, &[u8])> + '_ {
        AssetRole::ALL.into_iter().map(|role| (role, self.asset(role)))
    }

    /// Decode the config payload the same way validation does.
    pub fn decode_config(&self) -> Result<ElvConfig, ValidateError> {
        decode_config(self.config.clone())
    }

    /// Read four asset files. Fails on the first missing or unreadable one.
    pub fn read_from_paths(
        template: impl AsRef<Path>,
        style: impl AsRef<Path>,
        script: impl AsRef<Path>,
        config: impl AsRef<Path>,
    ) -> ElvResult<Self> {
        Ok(Self {
            template: read_asset(template.as_ref())?,
            style: read_asset(style.as_ref())?,
            script: read_asset(script.as_ref())?,
            config: read_asset(config.as_ref())?,
        })
    }

    /// Read `template.html`, `style.css`, `function.js`, and `config.yaml` from `dir`.
    pub fn read_from_directory(dir: impl AsRef<Path>) -> ElvResult<Self> {
        let dir = dir.as_ref();
        Self::read_from_paths(
            dir.join(AssetRole::Template.file_name()),
            dir.join(AssetRole::Style.file_name()),
            dir.join(AssetRole::Script.file_name()),
            dir.join(AssetRole::Config.file_name()),
        )
    }

    /// Write the four assets into `dir` under their fixed file names.
    ///
    /// `dir` is created if needed. Existing files are overwritten.
    pub fn write_to_directory(&self, dir: impl AsRef<Path>) -> ElvResult<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| ElvError::WriteAsset {
            path: dir.to_path_buf(),
            source,
        })?;
        for (role, payload) in self.assets() {
            let path = dir.join(role.file_name());
            fs::write(&path, payload).map_err(|source| ElvError::WriteAsset { path, source })?;
        }
        Ok(())
    }
}

fn read_asset(path: &Path) -> ElvResult<Vec<u8>> {
    fs::read(path).map_err(|source| ElvError::ReadAsset {
        path: path.to_path_buf(),
        source,
    })
}
