//! gleam-resolve - bundler-side import resolution for Gleam projects.
//!
//! The Gleam compiler emits one JavaScript artifact per source module
//! into an opaque `build/` tree. This crate intercepts module-specifier
//! resolution during bundling: relative `.gleam` imports and `hex:`
//! registry references are rewritten to the paths of their compiled
//! `.mjs` artifacts, and an optional forced `gleam build` runs before
//! bundling starts.
//!
//! Embedders implement [`BundlerHost`] for their bundler's plugin
//! surface and attach a [`GleamPlugin`]:
//!
//! ```no_run
//! use gleam_resolve::{GleamPlugin, PluginOptions};
//!
//! # fn attach(host: &mut dyn gleam_resolve::BundlerHost) -> anyhow::Result<()> {
//! let plugin = GleamPlugin::new(PluginOptions::default().with_force(true))?;
//! plugin.attach(host);
//! # Ok(())
//! # }
//! ```

pub mod compiler;
pub mod core;
pub mod host;
pub mod resolver;
pub mod util;

pub use crate::compiler::{BuildOutput, CompilerError, GleamCompiler};
pub use crate::core::{GleamManifest, ManifestError, Project, ProjectLayout};
pub use crate::host::{BundlerHost, GleamPlugin, ResolveContext};
pub use crate::resolver::{resolve, ResolveError, Resolved};
pub use crate::util::config::{BuildOptions, LogLevel, PluginOptions, ResolveOptions};
