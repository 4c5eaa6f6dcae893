//! Core data structures for the resolver.
//!
//! This module contains the foundational types:
//! - The fixed project directory layout
//! - The `gleam.toml` manifest
//! - The initialized `Project` tying layout, manifest, and options together

pub mod layout;
pub mod manifest;
pub mod project;

pub use layout::ProjectLayout;
pub use manifest::{GleamManifest, ManifestError, Target};
pub use project::Project;
