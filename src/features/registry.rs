//! Capability registry.
//!
//! The registry holds features in execution order. Order is by
//! [`FeatureGroup`] first, then by registration order within a group, so a
//! feature registered late still runs with its group.

use crate::features::analysis::{Checkstyle, Versions};
use crate::features::java::{AsciiDoc, DefaultPlugins, JavaDefaults};
use crate::features::kotlin::{Kotlin, KtLint};
use crate::features::packaging::DeliveryBundle;
use crate::features::publishing::MavenDeployer;
use crate::features::spring::{CloudContract, KotlinSpring, SpringBoot};
use crate::features::testing::{Jacoco, Junit5, Pitest, Spock};
use crate::features::trait_def::Feature;

/// An ordered set of features, unique by name.
pub struct CapabilityRegistry {
    features: Vec<Box<dyn Feature>>,
}

impl CapabilityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        CapabilityRegistry {
            features: Vec::new(),
        }
    }

    /// The full convention catalog.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(DefaultPlugins);
        registry.register(JavaDefaults);
        registry.register(AsciiDoc);
        registry.register(Kotlin);
        registry.register(KtLint);
        registry.register(SpringBoot);
        registry.register(CloudContract);
        registry.register(KotlinSpring);
        registry.register(Junit5);
        registry.register(Jacoco);
        registry.register(Pitest);
        registry.register(Spock);
        registry.register(Checkstyle);
        registry.register(Versions);
        registry.register(DeliveryBundle);
        registry.register(MavenDeployer);
        registry
    }

    /// Register a feature.
    ///
    /// A feature with the same name replaces the registered one.
    pub fn register(&mut self, feature: impl Feature + 'static) {
        self.features.retain(|f| f.name() != feature.name());

        let group = feature.group();
        let position = self
            .features
            .iter()
            .position(|f| f.group() > group)
            .unwrap_or(self.features.len());
        self.features.insert(position, Box::new(feature));
    }

    /// Look up a feature by name.
    pub fn get(&self, name: &str) -> Option<&dyn Feature> {
        self.features
            .iter()
            .find(|f| f.name() == name)
            .map(|f| f.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Features in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Feature> {
        self.features.iter().map(|f| f.as_ref())
    }

    /// Feature names in execution order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|f| f.name()).collect()
    }
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EffectiveConfiguration, OptionKey};
    use crate::core::project::{Project, ProjectError};
    use crate::features::trait_def::{FeatureGroup, Trigger};
    use crate::ops::report::Report;

    struct Named(&'static str, FeatureGroup, &'static str);

    impl Feature for Named {
        fn name(&self) -> &'static str {
            self.0
        }

        fn group(&self) -> FeatureGroup {
            self.1
        }

        fn trigger(&self) -> Trigger {
            Trigger::Flag(OptionKey::ApplyDefaultPlugins)
        }

        fn apply(
            &self,
            _project: &mut dyn Project,
            _config: &EffectiveConfiguration,
        ) -> Result<Report, ProjectError> {
            Ok(Report::new(self.0).described(self.2))
        }
    }

    #[test]
    fn test_standard_catalog_order() {
        let registry = CapabilityRegistry::standard();

        assert_eq!(registry.len(), 16);
        assert_eq!(
            registry.names(),
            vec![
                "aurora.applyDefaultPlugins",
                "aurora.applyJavaDefaults",
                "plugin org.asciidoctor.convert",
                "plugin org.jetbrains.kotlin.jvm",
                "plugin org.jlleitschuh.gradle.ktlint",
                "plugin org.springframework.boot",
                "plugin spring-cloud-contract",
                "plugin org.jetbrains.kotlin.plugin.spring",
                "aurora.applyJunit5Support",
                "aurora.applyJacocoTestReport",
                "plugin info.solidsoft.pitest",
                "aurora.applySpockSupport",
                "aurora.applyCheckstylePlugin",
                "plugin com.github.ben-manes.versions",
                "aurora.applyDeliveryBundleConfig",
                "aurora.applyMavenDeployer",
            ]
        );
    }

    #[test]
    fn test_groups_are_non_decreasing() {
        let registry = CapabilityRegistry::standard();
        let groups: Vec<FeatureGroup> = registry.iter().map(|f| f.group()).collect();
        assert!(groups.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_register_keeps_group_order() {
        let mut registry = CapabilityRegistry::new();
        registry.register(Named("publish", FeatureGroup::Publishing, ""));
        registry.register(Named("basics", FeatureGroup::JavaBasics, ""));
        registry.register(Named("framework", FeatureGroup::Framework, ""));
        registry.register(Named("framework-2", FeatureGroup::Framework, ""));

        assert_eq!(
            registry.names(),
            vec!["basics", "framework", "framework-2", "publish"]
        );
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = CapabilityRegistry::new();
        registry.register(Named("x", FeatureGroup::Framework, "first"));
        registry.register(Named("x", FeatureGroup::Framework, "second"));

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("x"));
        assert!(!registry.contains("y"));
    }

    #[test]
    fn test_empty() {
        let registry = CapabilityRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.get("aurora.applyDefaultPlugins").is_none());
    }
}
