//! File aggregate - the root of one parsed application file

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{Application, Infrastructure};
use crate::domain::services::fingerprint;
use crate::error::MergeError;

/// Root representation of one application's deployment configuration.
///
/// An external loader populates the tree; this type owns what happens
/// afterwards: merging override trees into a base, fingerprinting the
/// semantic content, and selecting the active infrastructure.
///
/// Cloning a `File` yields a fully independent tree. Every string, list,
/// and config map is owned, so no mutation of a clone is observable
/// through the original. Clones are the intended way to hand snapshots
/// to concurrent consumers; the type itself never locks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// Stable identifier for this file instance, distinct from content
    #[serde(default)]
    pub id: String,

    /// Source location; identity only, never part of the fingerprint
    #[serde(default)]
    pub path: PathBuf,

    /// At most one application block
    #[serde(default)]
    pub application: Option<Application>,

    /// Deployment targets in declaration order, unique by name
    #[serde(default)]
    pub infrastructure: Vec<Infrastructure>,
}

impl File {
    /// Create an empty file with an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Builder: set the source path
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Builder: set the application block
    pub fn with_application(mut self, application: Application) -> Self {
        self.application = Some(application);
        self
    }

    /// Builder: append an infrastructure entry
    pub fn with_infrastructure(mut self, infrastructure: Infrastructure) -> Self {
        self.infrastructure.push(infrastructure);
        self
    }

    /// The positionally-first declared infrastructure, by convention the
    /// one deployments act on. `None` when the file declares no targets.
    pub fn active_infrastructure(&self) -> Option<&Infrastructure> {
        self.infrastructure.first()
    }

    /// Look up an infrastructure entry by name.
    pub fn find_infrastructure(&self, name: &str) -> Option<&Infrastructure> {
        self.infrastructure.iter().find(|i| i.name == name)
    }

    /// Merge `other` into this file, field by field.
    ///
    /// `self` is the base and is mutated in place; `other` is the
    /// override and is consumed. Callers that need the base preserved
    /// clone it first.
    ///
    /// Scalars (`id`, `path`) follow last-non-empty-wins. The
    /// application block merges field-by-field when both sides have one,
    /// and is taken from whichever side has one otherwise.
    /// Infrastructure entries are keyed by name: a matching base entry
    /// is merged ([`Infrastructure::merge`]), a new entry is appended,
    /// so base ordering is preserved and extended.
    ///
    /// Both operands are checked against the keyed-merge invariants
    /// before anything is touched, so an `Err` leaves `self` unchanged.
    pub fn merge(&mut self, other: File) -> Result<(), MergeError> {
        self.validate()?;
        other.validate()?;

        if !other.id.is_empty() {
            self.id = other.id;
        }
        if !other.path.as_os_str().is_empty() {
            self.path = other.path;
        }

        if let Some(over) = other.application {
            self.application = match self.application.take() {
                Some(mut base) => {
                    base.merge(over);
                    Some(base)
                }
                None => Some(over),
            };
        }

        for entry in other.infrastructure {
            match self.infrastructure.iter().position(|i| i.name == entry.name) {
                Some(index) => self.infrastructure[index].merge(entry),
                None => self.infrastructure.push(entry),
            }
        }

        Ok(())
    }

    /// Check the invariants the keyed merge relies on: every
    /// infrastructure and foundation entry named, no duplicate names
    /// among siblings.
    ///
    /// Useful at the input boundary to reject malformed trees before
    /// they reach a merge.
    pub fn validate(&self) -> Result<(), MergeError> {
        let mut seen = HashSet::new();
        for infra in &self.infrastructure {
            if infra.name.is_empty() {
                return Err(MergeError::UnnamedInfrastructure);
            }
            if !seen.insert(infra.name.as_str()) {
                return Err(MergeError::DuplicateInfrastructure {
                    name: infra.name.clone(),
                });
            }

            let mut seen_foundations = HashSet::new();
            for foundation in &infra.foundations {
                if foundation.name.is_empty() {
                    return Err(MergeError::UnnamedFoundation {
                        infrastructure: infra.name.clone(),
                    });
                }
                if !seen_foundations.insert(foundation.name.as_str()) {
                    return Err(MergeError::DuplicateFoundation {
                        infrastructure: infra.name.clone(),
                        name: foundation.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Stable fingerprint over the semantic configuration content.
    ///
    /// Two files with identical content hash equal even when `id` and
    /// `path` differ; any change to application fields, the
    /// infrastructure set, its order, or any config block changes the
    /// value. Deterministic across runs and platforms, so the result is
    /// safe to persist as a cache or build key.
    pub fn config_hash(&self) -> u64 {
        fingerprint::config_hash(self)
    }
}
