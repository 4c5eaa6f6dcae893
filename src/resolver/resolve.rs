//! Specifier-to-artifact-path resolution.
//!
//! This is the logic behind the bundler's resolve hook: classify the
//! specifier, normalize it, and join the result under the project's
//! artifact root (`build/<name>/`).

use std::path::{Component, Path, PathBuf};

use crate::core::project::Project;
use crate::resolver::errors::ResolveError;
use crate::resolver::normalize::{artifact_id, classify, normalize, Specifier};

/// A successfully resolved artifact path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Absolute path of the compiled artifact
    pub path: PathBuf,
}

/// Resolve an import specifier seen inside `importer`.
///
/// Returns `Ok(None)` when the specifier is not ours to handle (no
/// importer context, or not a Gleam specifier); the bundler then falls
/// back to its default resolution. Errors are raised only for
/// specifiers that unambiguously address this resolver.
pub fn resolve(
    project: &Project,
    specifier: &str,
    importer: Option<&Path>,
) -> Result<Option<Resolved>, ResolveError> {
    // No importer means no base directory to resolve against. Checked
    // before the registry prefix so both specifier shapes share one gate.
    if importer.is_none() {
        tracing::trace!(specifier, "skip: no importer");
        return Ok(None);
    }

    match classify(specifier) {
        Specifier::Hex(id) => resolve_hex(project, specifier, id).map(Some),
        Specifier::RelativeModule => resolve_relative(project, specifier, importer),
        Specifier::Unmanaged => {
            tracing::trace!(specifier, "skip: unmanaged specifier");
            Ok(None)
        }
    }
}

/// Resolve a `hex:` registry specifier to `build/<name>/<id>.mjs`.
fn resolve_hex(
    project: &Project,
    specifier: &str,
    id: &str,
) -> Result<Resolved, ResolveError> {
    if id.is_empty() {
        return Err(ResolveError::EmptyModuleId {
            specifier: specifier.to_string(),
        });
    }

    let path = project.artifact_root().join(artifact_id(id));
    tracing::debug!(specifier, path = %path.display(), "resolved hex module");
    Ok(Resolved { path })
}

/// Resolve a relative `.gleam` specifier through the path normalizer.
fn resolve_relative(
    project: &Project,
    specifier: &str,
    importer: Option<&Path>,
) -> Result<Option<Resolved>, ResolveError> {
    let Some(normalized) = normalize(project.layout(), importer, specifier) else {
        return Ok(None);
    };

    if !project.resolve_options().allow_outside_source && escapes_root(&normalized) {
        return Err(ResolveError::OutsideSourceRoot {
            specifier: specifier.to_string(),
            normalized,
        });
    }

    let path = project.artifact_root().join(&normalized);
    tracing::debug!(specifier, path = %path.display(), "resolved gleam module");
    Ok(Some(Resolved { path }))
}

/// Does a normalized source-root-relative path point above the root?
fn escapes_root(normalized: &Path) -> bool {
    matches!(normalized.components().next(), Some(Component::ParentDir))
}
