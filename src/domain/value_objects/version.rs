//! Semantic version value object
//!
//! Application files carry the version as raw text; parsing happens on
//! demand so files without a version requirement never pay for it.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Failures turning raw version text into a [`Version`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionParseError {
    #[error("empty version string")]
    Empty,

    #[error("too many numeric components in '{raw}' (at most major.minor.patch)")]
    TooManyComponents { raw: String },

    #[error("invalid numeric component '{component}' in '{raw}'")]
    InvalidComponent { raw: String, component: String },

    #[error("empty identifier in '{raw}'")]
    EmptyIdentifier { raw: String },
}

/// An immutable semantic version.
///
/// Ordering follows semantic-version precedence: numeric components
/// first, then pre-release identifiers (a pre-release sorts before the
/// release it precedes; numeric identifiers sort below alphanumeric
/// ones). Build metadata carries no precedence of its own but acts as a
/// final tie-break so the total order stays consistent with equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Vec<String>,
    build: Option<String>,
}

impl Version {
    /// Create a release version with no pre-release or build metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            build: None,
        }
    }

    /// Parse raw version text.
    ///
    /// One, two, or three numeric components are accepted; missing
    /// components default to zero, so `"1.0"` parses and formats back as
    /// `"1.0.0"`. An optional pre-release suffix (`-rc.1`) and build
    /// metadata (`+abc123`) follow the numeric components.
    pub fn parse(raw: &str) -> Result<Self, VersionParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let (rest, build) = match trimmed.split_once('+') {
            Some((_, "")) => {
                return Err(VersionParseError::EmptyIdentifier {
                    raw: trimmed.to_string(),
                })
            }
            Some((rest, build)) => (rest, Some(build.to_string())),
            None => (trimmed, None),
        };

        let (numbers, prerelease) = match rest.split_once('-') {
            Some((numbers, pre)) => {
                let mut identifiers = Vec::new();
                for identifier in pre.split('.') {
                    if identifier.is_empty() {
                        return Err(VersionParseError::EmptyIdentifier {
                            raw: trimmed.to_string(),
                        });
                    }
                    identifiers.push(identifier.to_string());
                }
                (numbers, identifiers)
            }
            None => (rest, Vec::new()),
        };

        let mut components = [0u64; 3];
        let mut count = 0;
        for component in numbers.split('.') {
            if count == 3 {
                return Err(VersionParseError::TooManyComponents {
                    raw: trimmed.to_string(),
                });
            }
            let invalid = || VersionParseError::InvalidComponent {
                raw: trimmed.to_string(),
                component: component.to_string(),
            };
            if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            components[count] = component.parse().map_err(|_| invalid())?;
            count += 1;
        }

        Ok(Self {
            major: components[0],
            minor: components[1],
            patch: components[2],
            prerelease,
            build,
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Pre-release identifiers, empty for a release version.
    pub fn prerelease(&self) -> &[String] {
        &self.prerelease
    }

    /// Build metadata after `+`, if any.
    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// Whether this is a pre-release of some later release version.
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }
}

impl fmt::Display for Version {
    /// Canonical `X.Y.Z[-pre][+build]` form, always three components.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease.join("."))?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| cmp_prerelease(&self.prerelease, &other.prerelease))
            .then_with(|| self.build.cmp(&other.build))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn cmp_prerelease(a: &[String], b: &[String]) -> Ordering {
    // A release outranks every one of its pre-releases.
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    for (x, y) in a.iter().zip(b) {
        let ord = cmp_identifier(x, y);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

fn cmp_identifier(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        // The lexical tie-break keeps the total order consistent with
        // equality for leading-zero identifiers ("07" vs "7").
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
