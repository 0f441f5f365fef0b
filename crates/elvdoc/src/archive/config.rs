//! Decoding of the `elvdoc/config.yaml` payload.

use crate::archive::verify::{ErrorCode, ValidateError};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// The validated content of an archive's config entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElvConfig {
    /// Format version declared by the archive. Never empty.
    pub version: String,
    /// Document payload. Opaque to this crate, never null.
    pub elvdoc: Value,
}

#[derive(Deserialize)]
struct RawConfig {
    /// Plain scalars deserialize as their source text, so `1.10` stays `"1.10"`.
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    elvdoc: Option<Value>,
}

/// Decode a raw config body: UTF-8 first, then [`parse_config`].
pub fn decode_config(body: Vec<u8>) -> Result<ElvConfig, ValidateError> {
    let text = String::from_utf8(body)
        .map_err(|e| ValidateError::new(ErrorCode::ConfigEncoding, e.to_string()))?;
    parse_config(&text)
}

/// Decode config YAML and check the required fields.
///
/// Only the first YAML document is considered. Unknown keys are ignored.
/// A scalar `version` keeps its text even when YAML would type it as a number
/// or boolean; a null one counts as missing.
pub fn parse_config(text: &str) -> Result<ElvConfig, ValidateError> {
    let document = serde_yaml::Deserializer::from_str(text)
        .next()
        .ok_or_else(|| ValidateError::new(ErrorCode::ConfigYaml, "config.yaml has no document"))?;

    let raw = RawConfig::deserialize(document)
        .map_err(|e| ValidateError::new(ErrorCode::ConfigYaml, e.to_string()))?;

    let version = raw.version.unwrap_or_default();
    if version.is_empty() {
        return Err(ValidateError::new(
            ErrorCode::MissingVersion,
            "version is missing or empty",
        ));
    }

    let elvdoc = match raw.elvdoc {
        None | Some(Value::Null) => {
            return Err(ValidateError::new(
                ErrorCode::MissingElvdoc,
                "elvdoc is missing or null",
            ))
        }
        Some(value) => value,
    };

    Ok(ElvConfig { version, elvdoc })
}
