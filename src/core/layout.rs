//! Project directory layout and Gleam naming conventions.
//!
//! The Gleam compiler expects `src/` at the project root and emits
//! artifacts under `build/`. Neither location is configurable, so the
//! layout is computed once per project and never changes.

use std::path::{Path, PathBuf};

/// Manifest filename at the project root.
pub const MANIFEST_NAME: &str = "gleam.toml";

/// Source directory name, fixed by the Gleam compiler.
pub const SOURCE_DIR: &str = "src";

/// Output directory name, fixed by the Gleam compiler.
pub const OUTPUT_DIR: &str = "build";

/// Extension of Gleam source modules.
pub const MODULE_EXT: &str = ".gleam";

/// Extension of compiled JavaScript artifacts.
pub const ARTIFACT_EXT: &str = ".mjs";

/// Prefix for registry-style specifiers referencing published modules.
pub const HEX_PREFIX: &str = "hex:";

/// Default compiler binary name.
pub const DEFAULT_BIN: &str = "gleam";

/// The fixed directory layout of a Gleam project.
///
/// `source_dir` and `output_dir` are always direct children of `root`
/// and never overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Project root (the directory containing `gleam.toml`)
    root: PathBuf,

    /// Source module root (`<root>/src`)
    source_dir: PathBuf,

    /// Compiled artifact root (`<root>/build`)
    output_dir: PathBuf,
}

impl ProjectLayout {
    /// Create a layout rooted at the given project directory.
    pub fn new(root: PathBuf) -> Self {
        let source_dir = root.join(SOURCE_DIR);
        let output_dir = root.join(OUTPUT_DIR);

        ProjectLayout {
            root,
            source_dir,
            output_dir,
        }
    }

    /// Get the project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the source module root (`<root>/src`).
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Get the compiled artifact root (`<root>/build`).
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Get the manifest path (`<root>/gleam.toml`).
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_NAME)
    }
}
