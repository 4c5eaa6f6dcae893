//! Path normalization: pure mapping from `(importer, specifier)` pairs
//! to source-root-relative artifact paths.
//!
//! Everything here is lexical. No filesystem access, no existence
//! checks; whether the artifact is actually on disk is the bundler's
//! problem.

use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::core::layout::{ProjectLayout, ARTIFACT_EXT, HEX_PREFIX, MODULE_EXT};

/// Canonical module-reference pattern, suffix-anchored.
///
/// Matches both `.gleam` sources and already-rewritten `.mjs`
/// references, which makes the extension rewrite idempotent.
static MODULE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(gleam|mjs)$").expect("valid module-reference pattern"));

/// Classification of an import specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specifier<'a> {
    /// `hex:`-prefixed reference to a published module, by logical id
    Hex(&'a str),

    /// Relative path to a compiler-managed module
    RelativeModule,

    /// Anything else; left to the bundler's default resolution
    Unmanaged,
}

/// Classify a specifier by shape.
pub fn classify(specifier: &str) -> Specifier<'_> {
    if let Some(id) = specifier.strip_prefix(HEX_PREFIX) {
        return Specifier::Hex(id);
    }
    if is_gleam_specifier(specifier) {
        Specifier::RelativeModule
    } else {
        Specifier::Unmanaged
    }
}

/// Is this a relative specifier denoting a compiler-managed module?
///
/// Absolute and bare specifiers are never managed; an empty string is
/// never eligible.
pub fn is_gleam_specifier(specifier: &str) -> bool {
    let relative = specifier.starts_with("./") || specifier.starts_with("../");
    relative && (specifier.ends_with(MODULE_EXT) || MODULE_REF.is_match(specifier))
}

/// Rewrite a module path suffix to the artifact extension.
///
/// Suffix-anchored, so directory segments that merely contain the
/// extension string are left alone. Idempotent.
pub fn rewrite_extension(path: &str) -> String {
    MODULE_REF.replace(path, ARTIFACT_EXT).into_owned()
}

/// Turn a registry module id into an artifact id.
///
/// Unlike [`rewrite_extension`], an id with no recognized suffix gets
/// the artifact extension appended, since a bare id like `foo/bar`
/// still names exactly one artifact.
pub fn artifact_id(module_id: &str) -> String {
    if MODULE_REF.is_match(module_id) {
        rewrite_extension(module_id)
    } else {
        format!("{}{}", module_id, ARTIFACT_EXT)
    }
}

/// Map an `(importer, specifier)` pair to a source-root-relative
/// artifact path, or `None` when the specifier is not ours to handle.
///
/// Steps: eligibility gate, importer gate (no importer means no base
/// directory, a deliberate skip), lexical resolution against the
/// importer's directory, relativization against the source root, and
/// the extension rewrite. The result may start with `..` when the
/// target lies outside the source root; policy on that belongs to the
/// caller.
pub fn normalize(
    layout: &ProjectLayout,
    importer: Option<&Path>,
    specifier: &str,
) -> Option<PathBuf> {
    if !is_gleam_specifier(specifier) {
        tracing::trace!(specifier, "skip: not a gleam module specifier");
        return None;
    }

    let Some(importer) = importer else {
        tracing::trace!(specifier, "skip: no importer");
        return None;
    };

    let base = importer.parent().unwrap_or_else(|| Path::new("."));
    let target = resolve_lexically(&base.join(specifier));

    let relative = pathdiff::diff_paths(&target, layout.source_dir())
        .unwrap_or_else(|| target.clone());

    let normalized = PathBuf::from(rewrite_extension(&relative.to_string_lossy()));
    tracing::trace!(
        specifier,
        importer = %importer.display(),
        normalized = %normalized.display(),
        "normalized module specifier"
    );
    Some(normalized)
}

/// Collapse `.` and `..` components without touching the filesystem.
fn resolve_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                // Past the top of a relative path the `..` is kept;
                // at an absolute root it has nowhere to go.
                Some(Component::ParentDir) | None => out.push(Component::ParentDir),
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                Some(_) => {
                    out.pop();
                }
            },
            other => out.push(other.as_os_str()),
        }
    }

    out
}
