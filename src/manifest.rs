//! Reading the project version from its manifest.
//!
//! `package.json` style manifests carry a top-level `"version"`, Cargo-style
//! TOML manifests carry `package.version`. The extension picks the format.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{ReleaseError, Result};

#[derive(Debug, Deserialize)]
struct JsonManifest {
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlManifest {
    package: Option<TomlPackage>,
}

#[derive(Debug, Deserialize)]
struct TomlPackage {
    version: Option<String>,
}

/// Reads and validates the version string declared in the manifest at `path`.
///
/// # Returns
/// * `Ok(String)` - The version, exactly as written in the manifest
/// * `Err` - If the file is unreadable, malformed, has no version, or the
///   version is not a semantic version
pub fn read_version(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let version = if is_toml {
        parse_toml_version(&content)?
    } else {
        parse_json_version(&content)?
    };

    let version = version.ok_or_else(|| {
        ReleaseError::manifest(format!("{} does not declare a version", path.display()))
    })?;

    semver::Version::parse(&version).map_err(|e| {
        ReleaseError::manifest(format!(
            "Invalid version '{}' in {}: {}",
            version,
            path.display(),
            e
        ))
    })?;

    Ok(version)
}

fn parse_json_version(content: &str) -> Result<Option<String>> {
    let manifest: JsonManifest =
        serde_json::from_str(content).map_err(|e| ReleaseError::manifest(e.to_string()))?;
    Ok(manifest.version)
}

fn parse_toml_version(content: &str) -> Result<Option<String>> {
    let manifest: TomlManifest =
        toml::from_str(content).map_err(|e| ReleaseError::manifest(e.to_string()))?;
    Ok(manifest.package.and_then(|p| p.version))
}
