//! Dependency coordinates and the buckets they are registered into.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::project::ProjectError;

/// A `group:artifact[:version]` dependency coordinate.
///
/// A missing version means the version is supplied elsewhere (a BOM or the
/// framework's dependency management).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    group: String,
    artifact: String,
    version: Option<String>,
}

impl Coordinate {
    /// Create a coordinate without a version.
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Coordinate {
            group: group.into(),
            artifact: artifact.into(),
            version: None,
        }
    }

    /// Set the version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Parse a `group:artifact[:version]` string.
    pub fn parse(s: &str) -> Result<Self, ProjectError> {
        let malformed = || ProjectError::MalformedCoordinate {
            coordinate: s.to_string(),
        };

        let parts: Vec<&str> = s.trim().split(':').collect();
        let blank_or_spaced = |p: &&str| p.trim().is_empty() || p.contains(char::is_whitespace);
        if parts.iter().any(blank_or_spaced) {
            return Err(malformed());
        }

        match parts.as_slice() {
            [group, artifact] => Ok(Coordinate::new(*group, *artifact)),
            [group, artifact, version] => {
                Ok(Coordinate::new(*group, *artifact).with_version(*version))
            }
            _ => Err(malformed()),
        }
    }

    /// Group identifier.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Artifact identifier.
    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    /// Version, if pinned.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The coordinate without its version.
    pub fn module(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{}:{}", self.group, self.artifact, version),
            None => write!(f, "{}:{}", self.group, self.artifact),
        }
    }
}

impl FromStr for Coordinate {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::parse(s)
    }
}

/// A named grouping of dependency coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Bucket {
    /// Compile-time and runtime
    Implementation,
    /// Test compile-time and runtime
    TestImplementation,
    /// Test runtime only
    TestRuntimeOnly,
    /// A custom bucket created by a feature
    Named(String),
}

impl Bucket {
    /// Bucket name as used in reports.
    pub fn name(&self) -> &str {
        match self {
            Bucket::Implementation => "implementation",
            Bucket::TestImplementation => "testImplementation",
            Bucket::TestRuntimeOnly => "testRuntimeOnly",
            Bucket::Named(name) => name,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<&str> for Bucket {
    fn from(s: &str) -> Self {
        match s {
            "implementation" => Bucket::Implementation,
            "testImplementation" => Bucket::TestImplementation,
            "testRuntimeOnly" => Bucket::TestRuntimeOnly,
            other => Bucket::Named(other.to_string()),
        }
    }
}

impl From<String> for Bucket {
    fn from(s: String) -> Self {
        Bucket::from(s.as_str())
    }
}

impl From<Bucket> for String {
    fn from(bucket: Bucket) -> Self {
        bucket.name().to_string()
    }
}

/// A negative dependency constraint on a bucket.
///
/// Matches every coordinate with the given group and module, whatever its
/// version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exclusion {
    /// Group to exclude
    pub group: String,
    /// Module (artifact) to exclude
    pub module: String,
}

impl Exclusion {
    /// Create an exclusion.
    pub fn new(group: impl Into<String>, module: impl Into<String>) -> Self {
        Exclusion {
            group: group.into(),
            module: module.into(),
        }
    }

    /// Check whether a coordinate is excluded by this rule.
    pub fn matches(&self, coordinate: &Coordinate) -> bool {
        coordinate.group() == self.group && coordinate.artifact() == self.module
    }
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.module)
    }
}
