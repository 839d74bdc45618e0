//! Error types for appfile merging
//!
//! Uses `thiserror` for library errors.

use thiserror::Error;

/// Structural problems that make two file trees incompatible for merging.
///
/// Merging is keyed by entry names, so both operands must satisfy the
/// uniqueness invariants. The invariants are checked on both operands
/// before any field is touched; a returned error means the base operand
/// was left unmodified.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    /// An infrastructure entry has no name and cannot be keyed
    #[error("infrastructure entry without a name cannot be merged")]
    UnnamedInfrastructure,

    /// Two infrastructure entries in the same file share a name
    #[error("duplicate infrastructure '{name}' in the same file")]
    DuplicateInfrastructure { name: String },

    /// A foundation entry has no name and cannot be keyed
    #[error("foundation entry without a name under infrastructure '{infrastructure}'")]
    UnnamedFoundation { infrastructure: String },

    /// Two foundations under one infrastructure share a name
    #[error("duplicate foundation '{name}' under infrastructure '{infrastructure}'")]
    DuplicateFoundation {
        infrastructure: String,
        name: String,
    },
}
