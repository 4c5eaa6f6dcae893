//! Import specifier resolution.
//!
//! The resolver is pure and lexical: after a `Project` is constructed
//! no I/O happens on the resolve path, so concurrent resolve calls
//! need no synchronization.

pub mod errors;
pub mod normalize;
pub mod resolve;

pub use errors::ResolveError;
pub use normalize::{artifact_id, classify, is_gleam_specifier, normalize, rewrite_extension, Specifier};
pub use resolve::{resolve, Resolved};
