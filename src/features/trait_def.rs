//! Feature trait definition.
//!
//! A feature is one convention: a predicate deciding whether it applies and
//! an operation applying it to the project. Features are invoked at most
//! once per evaluation.

use std::fmt;

use crate::config::{EffectiveConfiguration, OptionKey};
use crate::core::capability::Capability;
use crate::core::project::{Project, ProjectError};
use crate::ops::report::Report;

/// Feature groups, in execution order.
///
/// Later groups observe state written by earlier ones: packaging relies on
/// the framework group having toggled bootable-jar packaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureGroup {
    JavaBasics,
    LanguageToolchain,
    Framework,
    TestQuality,
    Packaging,
    Publishing,
}

impl FeatureGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureGroup::JavaBasics => "java-basics",
            FeatureGroup::LanguageToolchain => "language-toolchain",
            FeatureGroup::Framework => "framework",
            FeatureGroup::TestQuality => "test-quality",
            FeatureGroup::Packaging => "packaging",
            FeatureGroup::Publishing => "publishing",
        }
    }
}

impl fmt::Display for FeatureGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What makes a feature applicable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Always, subject to a configuration flag
    Flag(OptionKey),
    /// Only when a capability is already active on the project
    Capability(Capability),
}

/// A convention unit.
pub trait Feature {
    /// Stable feature name. Reports carry it and are sorted by it.
    fn name(&self) -> &'static str;

    fn group(&self) -> FeatureGroup;

    fn trigger(&self) -> Trigger;

    /// Whether the feature applies to the project in its current state.
    fn applies_when(&self, project: &dyn Project, config: &EffectiveConfiguration) -> bool {
        match self.trigger() {
            Trigger::Flag(key) => config.flag(key),
            Trigger::Capability(capability) => project.has_capability(&capability),
        }
    }

    /// Apply the feature.
    ///
    /// Errors from the project abort the evaluation.
    fn apply(
        &self,
        project: &mut dyn Project,
        config: &EffectiveConfiguration,
    ) -> Result<Report, ProjectError>;
}
