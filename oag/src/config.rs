//! Raw option loading: a TOML config file plus `-p name=value` overrides.

use std::path::Path;

use eyre::{Result, WrapErr, eyre};
use oag_codegen::RawOptions;
use serde::Deserialize;

/// Shape of the optional config file. Only the `[options]` table matters;
/// option values keep their TOML types so the registry can check them.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    options: toml::Table,
}

/// Build the raw option map: config file values first, `-p` pairs on top.
///
/// `-p` values arrive as strings; the registry coerces "true"/"false" for
/// boolean options and rejects anything else.
pub fn load(config: Option<&Path>, properties: &[String]) -> Result<RawOptions> {
    let mut raw = RawOptions::new();

    if let Some(path) = config {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        let file: ConfigFile = toml::from_str(&content)
            .wrap_err_with(|| format!("failed to parse '{}'", path.display()))?;
        for (name, value) in file.options {
            raw.insert(name, value);
        }
    }

    for pair in properties {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| eyre!("invalid property '{pair}', expected NAME=VALUE"))?;
        raw.insert(name.to_string(), toml::Value::String(value.to_string()));
    }

    Ok(raw)
}
