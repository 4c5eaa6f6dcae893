//! Resolution error types.
//!
//! Pass-through ("not a Gleam specifier", "no importer") is not an
//! error and is represented as `Ok(None)` by the resolver; these
//! variants cover the cases where a specifier unambiguously addresses
//! this resolver and still cannot be satisfied.

use std::path::PathBuf;

use thiserror::Error;

/// Error during specifier resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A `hex:` specifier with nothing after the prefix.
    #[error("empty module id in registry specifier `{specifier}`")]
    EmptyModuleId { specifier: String },

    /// A relative specifier normalized to a path outside the source
    /// root while `resolve.allowOutsideSource` is disabled.
    #[error("`{specifier}` resolves outside the source root (to `{}`)", normalized.display())]
    OutsideSourceRoot {
        specifier: String,
        normalized: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_specifier() {
        let err = ResolveError::EmptyModuleId {
            specifier: "hex:".to_string(),
        };
        assert!(err.to_string().contains("hex:"));

        let err = ResolveError::OutsideSourceRoot {
            specifier: "../../escape.gleam".to_string(),
            normalized: PathBuf::from("../escape.mjs"),
        };
        assert!(err.to_string().contains("../../escape.gleam"));
        assert!(err.to_string().contains("../escape.mjs"));
    }
}
