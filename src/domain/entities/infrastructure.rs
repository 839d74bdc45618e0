//! Infrastructure entity - a named deployment target

use serde::{Deserialize, Serialize};

use super::Foundation;
use crate::domain::value_objects::ConfigMap;

/// A deployment target (e.g. "aws", "google") an application may be
/// deployed to, together with the foundations layered on top of it.
///
/// Within one file, infrastructures are unique by name; the merge engine
/// relies on that to decide between replacing an entry and appending a
/// new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Infrastructure {
    /// Identifier, unique among the infrastructures of one file
    pub name: String,

    /// Schema-free configuration for the target
    #[serde(default)]
    pub config: ConfigMap,

    /// Add-ons in declaration order, unique by name
    #[serde(default)]
    pub foundations: Vec<Foundation>,
}

impl Infrastructure {
    /// Create an infrastructure with no config and no foundations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: ConfigMap::new(),
            foundations: Vec::new(),
        }
    }

    /// Builder: set the config block
    pub fn with_config(mut self, config: ConfigMap) -> Self {
        self.config = config;
        self
    }

    /// Builder: append a foundation
    pub fn with_foundation(mut self, foundation: Foundation) -> Self {
        self.foundations.push(foundation);
        self
    }

    /// Look up a foundation by name.
    pub fn find_foundation(&self, name: &str) -> Option<&Foundation> {
        self.foundations.iter().find(|f| f.name == name)
    }

    /// Merge `other` into this entry.
    ///
    /// The override side replaces this entry wholesale, with one
    /// exception: an override that defines no foundations keeps the
    /// foundations already present here. A non-empty override foundation
    /// list replaces the existing list entirely, never unions with it.
    pub fn merge(&mut self, mut other: Infrastructure) {
        if other.foundations.is_empty() {
            other.foundations = std::mem::take(&mut self.foundations);
        }
        *self = other;
    }
}
