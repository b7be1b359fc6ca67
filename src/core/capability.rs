//! Capability identifiers.
//!
//! A capability marks a plugin or toolchain as active on a project. The
//! plugins the conventions know about get their own variant; anything else is
//! carried verbatim so descriptors can name arbitrary plugins.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named plugin/toolchain marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Capability {
    /// `java`
    Java,
    /// `maven-publish`
    MavenPublish,
    /// `application`
    Application,
    /// `distribution`
    Distribution,
    /// `groovy`
    Groovy,
    /// `jacoco`
    Jacoco,
    /// `checkstyle`
    Checkstyle,
    /// Kotlin JVM toolchain
    KotlinJvm,
    /// Kotlin all-open support for Spring
    KotlinSpring,
    /// Kotlin style linter
    KtLint,
    /// Spring Boot framework
    SpringBoot,
    /// Spring dependency management (BOM imports)
    DependencyManagement,
    /// Spring Cloud Contract testing
    CloudContract,
    /// AsciiDoc documentation generation
    AsciiDoctor,
    /// Mutation testing
    Pitest,
    /// Dependency update reporting
    Versions,
    /// Automatic upgrade of declared versions
    LatestVersions,
    /// Git metadata in build output
    GitProperties,
    /// Test output formatting
    TestLogger,
    /// SonarQube analysis
    Sonar,
    /// Any plugin id the conventions do not know about
    Other(String),
}

impl Capability {
    /// Every capability with a dedicated variant.
    pub const KNOWN: [Capability; 20] = [
        Capability::Java,
        Capability::MavenPublish,
        Capability::Application,
        Capability::Distribution,
        Capability::Groovy,
        Capability::Jacoco,
        Capability::Checkstyle,
        Capability::KotlinJvm,
        Capability::KotlinSpring,
        Capability::KtLint,
        Capability::SpringBoot,
        Capability::DependencyManagement,
        Capability::CloudContract,
        Capability::AsciiDoctor,
        Capability::Pitest,
        Capability::Versions,
        Capability::LatestVersions,
        Capability::GitProperties,
        Capability::TestLogger,
        Capability::Sonar,
    ];

    /// The canonical plugin id.
    pub fn id(&self) -> &str {
        match self {
            Capability::Java => "java",
            Capability::MavenPublish => "maven-publish",
            Capability::Application => "application",
            Capability::Distribution => "distribution",
            Capability::Groovy => "groovy",
            Capability::Jacoco => "jacoco",
            Capability::Checkstyle => "checkstyle",
            Capability::KotlinJvm => "org.jetbrains.kotlin.jvm",
            Capability::KotlinSpring => "org.jetbrains.kotlin.plugin.spring",
            Capability::KtLint => "org.jlleitschuh.gradle.ktlint",
            Capability::SpringBoot => "org.springframework.boot",
            Capability::DependencyManagement => "io.spring.dependency-management",
            Capability::CloudContract => "org.springframework.cloud.contract",
            Capability::AsciiDoctor => "org.asciidoctor.convert",
            Capability::Pitest => "info.solidsoft.pitest",
            Capability::Versions => "com.github.ben-manes.versions",
            Capability::LatestVersions => "se.patrikerdes.use-latest-versions",
            Capability::GitProperties => "com.gorylenko.gradle-git-properties",
            Capability::TestLogger => "com.adarshr.test-logger",
            Capability::Sonar => "org.sonarqube",
            Capability::Other(id) => id,
        }
    }

    /// Human-readable name used in lifecycle logging.
    pub fn display_name(&self) -> &str {
        match self {
            Capability::KotlinJvm => "Kotlin",
            Capability::KotlinSpring => "Kotlin Spring",
            Capability::KtLint => "KtLint",
            Capability::SpringBoot => "Spring Boot",
            Capability::DependencyManagement => "Spring Dependency Management",
            Capability::CloudContract => "Spring Cloud Contract",
            Capability::AsciiDoctor => "AsciiDoctor",
            Capability::Pitest => "PiTest",
            Capability::Versions => "Ben Manes Versions",
            Capability::LatestVersions => "Patrikerdes Use Latest Versions",
            Capability::GitProperties => "Gorylenko Git Properties",
            Capability::TestLogger => "Gradle Test Logger",
            Capability::Sonar => "SonarQube",
            other => other.id(),
        }
    }

    /// Whether this is one of the known capabilities.
    pub fn is_known(&self) -> bool {
        !matches!(self, Capability::Other(_))
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Capability {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let capability = match s.trim() {
            "java" | "java-library" => Capability::Java,
            "maven-publish" => Capability::MavenPublish,
            "application" => Capability::Application,
            "distribution" => Capability::Distribution,
            "groovy" => Capability::Groovy,
            "jacoco" => Capability::Jacoco,
            "checkstyle" => Capability::Checkstyle,
            "org.jetbrains.kotlin.jvm" | "kotlin" => Capability::KotlinJvm,
            "org.jetbrains.kotlin.plugin.spring" => Capability::KotlinSpring,
            "org.jlleitschuh.gradle.ktlint" => Capability::KtLint,
            "org.springframework.boot" => Capability::SpringBoot,
            "io.spring.dependency-management" => Capability::DependencyManagement,
            "org.springframework.cloud.contract" | "spring-cloud-contract" => {
                Capability::CloudContract
            }
            "org.asciidoctor.convert" | "org.asciidoctor.jvm.convert" => Capability::AsciiDoctor,
            "info.solidsoft.pitest" => Capability::Pitest,
            "com.github.ben-manes.versions" => Capability::Versions,
            "se.patrikerdes.use-latest-versions" => Capability::LatestVersions,
            "com.gorylenko.gradle-git-properties" => Capability::GitProperties,
            "com.adarshr.test-logger" => Capability::TestLogger,
            "org.sonarqube" => Capability::Sonar,
            other => Capability::Other(other.to_string()),
        };
        Ok(capability)
    }
}

impl From<&str> for Capability {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(capability) => capability,
            Err(never) => match never {},
        }
    }
}

impl From<String> for Capability {
    fn from(s: String) -> Self {
        Capability::from(s.as_str())
    }
}

impl From<Capability> for String {
    fn from(capability: Capability) -> Self {
        capability.id().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids_round_trip() {
        for capability in Capability::KNOWN.iter() {
            assert_eq!(&Capability::from(capability.id()), capability);
            assert!(capability.is_known());
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(
            Capability::from("spring-cloud-contract"),
            Capability::CloudContract
        );
        assert_eq!(
            Capability::from("org.asciidoctor.jvm.convert"),
            Capability::AsciiDoctor
        );
        assert_eq!(Capability::from("java-library"), Capability::Java);
    }

    #[test]
    fn test_unknown_plugin_is_kept() {
        let capability = Capability::from("com.example.custom");
        assert_eq!(capability, Capability::Other("com.example.custom".into()));
        assert_eq!(capability.id(), "com.example.custom");
        assert!(!capability.is_known());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Capability::KotlinJvm.display_name(), "Kotlin");
        assert_eq!(Capability::Java.display_name(), "java");
    }
}
