//! `gleam.toml` manifest parsing and validation.
//!
//! Only the fields the resolver cares about are modeled; unknown keys
//! are ignored so newer manifest fields do not break older resolvers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use semver::Version;
use serde::Deserialize;
use thiserror::Error;

/// Error loading or validating a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("no manifest found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read manifest {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("manifest {} is missing a non-empty `name`", path.display())]
    MissingName { path: PathBuf },
}

/// Compilation target declared in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Javascript,
    Erlang,
}

/// JavaScript-specific compiler settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JavascriptConfig {
    #[serde(default)]
    pub typescript_declarations: bool,
}

/// Raw manifest as deserialized from TOML.
#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    version: Option<String>,

    #[serde(default)]
    target: Option<Target>,

    #[serde(default)]
    javascript: Option<JavascriptConfig>,
}

/// The parsed `gleam.toml` manifest.
#[derive(Debug, Clone)]
pub struct GleamManifest {
    /// Project name; names the artifact subtree under `build/`
    pub name: String,

    /// Project version string, if declared
    pub version: Option<String>,

    /// Declared compilation target, if any
    pub target: Option<Target>,

    /// JavaScript-specific settings
    pub javascript: Option<JavascriptConfig>,

    /// Path this manifest was loaded from
    pub manifest_path: PathBuf,
}

impl GleamManifest {
    /// Load a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Err(ManifestError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content =
            std::fs::read_to_string(path).map_err(|source| ManifestError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;

        Self::parse(&content, path)
    }

    /// Parse manifest content.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let raw: RawManifest =
            toml::from_str(content).map_err(|source| ManifestError::Invalid {
                path: path.to_path_buf(),
                source,
            })?;

        let name = match raw.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                return Err(ManifestError::MissingName {
                    path: path.to_path_buf(),
                })
            }
        };

        Ok(GleamManifest {
            name,
            version: raw.version,
            target: raw.target,
            javascript: raw.javascript,
            manifest_path: path.to_path_buf(),
        })
    }

    /// Parse the version string as semver.
    pub fn version(&self) -> Result<Option<Version>> {
        self.version
            .as_deref()
            .map(|v| {
                v.parse()
                    .with_context(|| format!("invalid version: {}", v))
            })
            .transpose()
    }
}
