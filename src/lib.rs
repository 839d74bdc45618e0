//! Appfile - in-memory model of declarative application deployment files
//!
//! An application file names a deployable unit (its name, runtime type,
//! version) and the infrastructure targets it may be deployed to, each with
//! its own foundations and configuration. This crate owns the parsed
//! representation only: an external loader builds a [`File`] tree, and the
//! crate provides field-level merging of override trees into a base, a
//! stable 64-bit content fingerprint for cache/build keys, positional
//! selection of the active infrastructure, and independent deep snapshots
//! via `Clone`.

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::entities::{Application, File, Foundation, Infrastructure};
pub use domain::services::fingerprint::{config_hash, preimage};
pub use domain::value_objects::{ConfigMap, Version, VersionParseError};
pub use error::MergeError;
