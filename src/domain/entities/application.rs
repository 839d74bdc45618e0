//! Application entity - identity of the deployable unit

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Version, VersionParseError};

/// Name, runtime type, and version metadata for the unit a file deploys.
///
/// A file carries at most one application block and may omit it entirely
/// (pure-infrastructure override files do). The name may be left empty
/// while `detect` is set, deferring resolution to an external detector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Application name; may be empty while `detect` is set
    #[serde(default)]
    pub name: String,

    /// Runtime type of the application (e.g. "go", "ruby")
    #[serde(default, rename = "type")]
    pub kind: String,

    /// Ask an external detector to infer name and type from the project
    #[serde(default)]
    pub detect: bool,

    /// Raw version text, parsed on demand by `version()`
    #[serde(default, rename = "version")]
    pub version_raw: String,
}

impl Application {
    /// Create an application with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder: set the runtime type
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Builder: set the detect flag
    pub fn with_detect(mut self, detect: bool) -> Self {
        self.detect = detect;
        self
    }

    /// Builder: set the raw version text
    pub fn with_version_raw(mut self, raw: impl Into<String>) -> Self {
        self.version_raw = raw.into();
        self
    }

    /// Parse the raw version text.
    ///
    /// Deferred until requested so files that never state a version are
    /// unaffected by malformed or missing text.
    pub fn version(&self) -> Result<Version, VersionParseError> {
        Version::parse(&self.version_raw)
    }

    /// Merge `other` into this application, field by field.
    ///
    /// Scalar fields follow last-non-empty-wins: an override that leaves
    /// a field empty never erases a value already present. `detect` is
    /// taken when the override requests it, but a concrete override
    /// `kind` clears it - once the runtime type is known there is
    /// nothing left to detect.
    pub fn merge(&mut self, other: Application) {
        if !other.name.is_empty() {
            self.name = other.name;
        }
        if other.detect {
            self.detect = true;
        }
        if !other.kind.is_empty() {
            self.kind = other.kind;
            self.detect = false;
        }
        if !other.version_raw.is_empty() {
            self.version_raw = other.version_raw;
        }
    }
}
