//! Project - central configuration hub.
//!
//! A `Project` ties together the directory layout, the manifest, and
//! the effective plugin options. The manifest is loaded eagerly, once;
//! a changed `gleam.toml` requires constructing a fresh `Project`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::layout::ProjectLayout;
use crate::core::manifest::GleamManifest;
use crate::util::config::{BuildOptions, PluginOptions, ResolveOptions};
use crate::util::process::find_executable;

/// An initialized Gleam project, immutable for its lifetime.
#[derive(Debug)]
pub struct Project {
    /// Directory layout (root, src/, build/)
    layout: ProjectLayout,

    /// The parsed manifest
    manifest: GleamManifest,

    /// Compiler executable path or name
    bin: String,

    /// Compiler invocation settings
    build: BuildOptions,

    /// Resolution policy
    resolve: ResolveOptions,
}

impl Project {
    /// Create a project from plugin options.
    ///
    /// Resolves the root directory (falling back to the process working
    /// directory), computes the layout, and loads the manifest. Fails if
    /// the manifest is missing, unparseable, or has no `name`.
    pub fn new(options: &PluginOptions) -> Result<Self> {
        let effective = options.effective();

        let root = match effective.cwd {
            Some(cwd) if cwd.is_absolute() => cwd,
            Some(cwd) => std::env::current_dir()
                .context("failed to get current directory")?
                .join(cwd),
            None => std::env::current_dir().context("failed to get current directory")?,
        };

        let layout = ProjectLayout::new(root);
        let manifest = GleamManifest::load(&layout.manifest_path())?;

        let bin = effective.bin;
        if find_executable(&bin).is_none() {
            tracing::warn!("compiler `{}` not found on PATH", bin);
        }

        tracing::debug!(
            root = %layout.root().display(),
            name = %manifest.name,
            bin = %bin,
            force = effective.build.force,
            "gleam project initialized"
        );

        Ok(Project {
            layout,
            manifest,
            bin,
            build: effective.build,
            resolve: effective.resolve,
        })
    }

    /// Get the directory layout.
    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &GleamManifest {
        &self.manifest
    }

    /// Get the project name from the manifest.
    pub fn name(&self) -> &str {
        &self.manifest.name
    }

    /// Get the compiler executable.
    pub fn bin(&self) -> &str {
        &self.bin
    }

    /// Get the project root directory.
    pub fn root(&self) -> &Path {
        self.layout.root()
    }

    /// Get the compiler invocation settings.
    pub fn build_options(&self) -> &BuildOptions {
        &self.build
    }

    /// Get the resolution policy.
    pub fn resolve_options(&self) -> &ResolveOptions {
        &self.resolve
    }

    /// Artifact root for this project: `<root>/build/<name>`.
    pub fn artifact_root(&self) -> PathBuf {
        self.layout.output_dir().join(&self.manifest.name)
    }
}
