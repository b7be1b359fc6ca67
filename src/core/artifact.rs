//! Published artifacts.

use std::fmt;

use serde::Serialize;

/// Classifiers of artifacts the build produces on its own. Anything else in
/// the artifact set was added by a user or a convention and gets published
/// explicitly.
const STANDARD_CLASSIFIERS: [&str; 7] = [
    "",
    "module",
    "jar",
    "sources",
    "stubs",
    "plain",
    "Leveransepakke",
];

/// An entry in a project's artifact set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// Base name (without extension)
    pub name: String,
    /// File extension (jar, zip, tar)
    pub extension: String,
    /// Classifier, empty when unclassified
    pub classifier: String,
    /// Step producing the artifact, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
}

impl Artifact {
    /// Create an unclassified artifact.
    pub fn new(name: impl Into<String>, extension: impl Into<String>) -> Self {
        Artifact {
            name: name.into(),
            extension: extension.into(),
            classifier: String::new(),
            producer: None,
        }
    }

    /// Set the classifier.
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = classifier.into();
        self
    }

    /// Record the producing step.
    pub fn produced_by(mut self, step: impl Into<String>) -> Self {
        self.producer = Some(step.into());
        self
    }

    /// Tar archives and duplicate `boot`-suffixed artifacts are never
    /// delivered.
    pub fn is_superfluous(&self) -> bool {
        self.extension == "tar" || self.name.ends_with("boot")
    }

    /// Whether the artifact needs explicit publishing.
    pub fn is_custom(&self) -> bool {
        !STANDARD_CLASSIFIERS.contains(&self.classifier.as_str())
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.classifier.is_empty() {
            write!(f, "{}.{}", self.name, self.extension)
        } else {
            write!(f, "{}-{}.{}", self.name, self.classifier, self.extension)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superfluous() {
        assert!(Artifact::new("app", "tar").is_superfluous());
        assert!(Artifact::new("app-boot", "zip").is_superfluous());
        assert!(!Artifact::new("app", "zip").is_superfluous());
        assert!(!Artifact::new("app", "jar").is_superfluous());
    }

    #[test]
    fn test_custom() {
        assert!(!Artifact::new("app", "jar").is_custom());
        let stubs = Artifact::new("app", "jar").with_classifier("stubs");
        assert!(!stubs.is_custom());
        let docs = Artifact::new("app", "zip").with_classifier("docs");
        assert!(docs.is_custom());
    }

    #[test]
    fn test_display() {
        let a = Artifact::new("app", "zip").with_classifier("Leveransepakke");
        assert_eq!(a.to_string(), "app-Leveransepakke.zip");
    }
}
