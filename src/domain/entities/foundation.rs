//! Foundation entity - an add-on attached to an infrastructure target
//!
//! Foundations are supporting services (service discovery, security
//! layers, and the like) deployed alongside their parent infrastructure.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ConfigMap;

/// A named add-on owned exclusively by its parent infrastructure.
///
/// Foundations are matched by name during merging and never mutated
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Foundation {
    /// Identifier, unique among the foundations of one infrastructure
    pub name: String,

    /// Schema-free configuration for the add-on
    #[serde(default)]
    pub config: ConfigMap,
}

impl Foundation {
    /// Create a foundation with an empty config block.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: ConfigMap::new(),
        }
    }

    /// Builder: set the config block
    pub fn with_config(mut self, config: ConfigMap) -> Self {
        self.config = config;
        self
    }

    /// Replace this foundation with `other` wholesale.
    ///
    /// Matching foundations do not merge field-by-field the way
    /// applications do: the override side wins entirely, config included.
    pub fn merge(&mut self, other: Foundation) {
        *self = other;
    }
}
