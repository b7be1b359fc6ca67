//! The catalog of recognised options.

use std::fmt;

use serde::Serialize;

/// How an option's value is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// Free-form text (versions, paths)
    Text,
    /// Boolean toggle
    Flag,
}

/// A recognised configuration option.
///
/// The declaration order is the stable rendering order of an
/// [`EffectiveConfiguration`](super::EffectiveConfiguration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionKey {
    JavaSourceCompatibility,
    GroovyVersion,
    SpockVersion,
    Junit5Version,
    CglibVersion,
    ObjenesisVersion,
    AuroraSpringBootMvcStarterVersion,
    AuroraSpringBootWebFluxStarterVersion,
    SpringCloudContractVersion,
    KotlinLoggingVersion,
    CheckstyleConfigVersion,
    CheckstyleConfigFile,
    ApplyDefaultPlugins,
    ApplyJavaDefaults,
    ApplyDeliveryBundleConfig,
    ApplySpockSupport,
    ApplyCheckstylePlugin,
    ApplyJacocoTestReport,
    ApplyMavenDeployer,
    ApplyJunit5Support,
    SpringDevTools,
    UseWebFlux,
    UseBootJar,
    UseAuroraStarters,
}

impl OptionKey {
    /// Every option, in rendering order.
    pub const ALL: [OptionKey; 24] = [
        OptionKey::JavaSourceCompatibility,
        OptionKey::GroovyVersion,
        OptionKey::SpockVersion,
        OptionKey::Junit5Version,
        OptionKey::CglibVersion,
        OptionKey::ObjenesisVersion,
        OptionKey::AuroraSpringBootMvcStarterVersion,
        OptionKey::AuroraSpringBootWebFluxStarterVersion,
        OptionKey::SpringCloudContractVersion,
        OptionKey::KotlinLoggingVersion,
        OptionKey::CheckstyleConfigVersion,
        OptionKey::CheckstyleConfigFile,
        OptionKey::ApplyDefaultPlugins,
        OptionKey::ApplyJavaDefaults,
        OptionKey::ApplyDeliveryBundleConfig,
        OptionKey::ApplySpockSupport,
        OptionKey::ApplyCheckstylePlugin,
        OptionKey::ApplyJacocoTestReport,
        OptionKey::ApplyMavenDeployer,
        OptionKey::ApplyJunit5Support,
        OptionKey::SpringDevTools,
        OptionKey::UseWebFlux,
        OptionKey::UseBootJar,
        OptionKey::UseAuroraStarters,
    ];

    /// The option name, which is also its flat property suffix.
    pub fn name(&self) -> &'static str {
        match self {
            OptionKey::JavaSourceCompatibility => "javaSourceCompatibility",
            OptionKey::GroovyVersion => "groovyVersion",
            OptionKey::SpockVersion => "spockVersion",
            OptionKey::Junit5Version => "junit5Version",
            OptionKey::CglibVersion => "cglibVersion",
            OptionKey::ObjenesisVersion => "objenesisVersion",
            OptionKey::AuroraSpringBootMvcStarterVersion => "auroraSpringBootMvcStarterVersion",
            OptionKey::AuroraSpringBootWebFluxStarterVersion => {
                "auroraSpringBootWebFluxStarterVersion"
            }
            OptionKey::SpringCloudContractVersion => "springCloudContractVersion",
            OptionKey::KotlinLoggingVersion => "kotlinLoggingVersion",
            OptionKey::CheckstyleConfigVersion => "checkstyleConfigVersion",
            OptionKey::CheckstyleConfigFile => "checkstyleConfigFile",
            OptionKey::ApplyDefaultPlugins => "applyDefaultPlugins",
            OptionKey::ApplyJavaDefaults => "applyJavaDefaults",
            OptionKey::ApplyDeliveryBundleConfig => "applyDeliveryBundleConfig",
            OptionKey::ApplySpockSupport => "applySpockSupport",
            OptionKey::ApplyCheckstylePlugin => "applyCheckstylePlugin",
            OptionKey::ApplyJacocoTestReport => "applyJacocoTestReport",
            OptionKey::ApplyMavenDeployer => "applyMavenDeployer",
            OptionKey::ApplyJunit5Support => "applyJunit5Support",
            OptionKey::SpringDevTools => "springDevTools",
            OptionKey::UseWebFlux => "useWebFlux",
            OptionKey::UseBootJar => "useBootJar",
            OptionKey::UseAuroraStarters => "useAuroraStarters",
        }
    }

    /// Look up an option by name.
    pub fn from_name(name: &str) -> Option<OptionKey> {
        OptionKey::ALL.into_iter().find(|key| key.name() == name)
    }

    pub fn kind(&self) -> OptionKind {
        match self {
            OptionKey::JavaSourceCompatibility
            | OptionKey::GroovyVersion
            | OptionKey::SpockVersion
            | OptionKey::Junit5Version
            | OptionKey::CglibVersion
            | OptionKey::ObjenesisVersion
            | OptionKey::AuroraSpringBootMvcStarterVersion
            | OptionKey::AuroraSpringBootWebFluxStarterVersion
            | OptionKey::SpringCloudContractVersion
            | OptionKey::KotlinLoggingVersion
            | OptionKey::CheckstyleConfigVersion
            | OptionKey::CheckstyleConfigFile => OptionKind::Text,
            _ => OptionKind::Flag,
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A typed option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Text(String),
    Flag(bool),
}

impl OptionValue {
    /// The kind this value satisfies.
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionValue::Text(_) => OptionKind::Text,
            OptionValue::Flag(_) => OptionKind::Flag,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Text(s) => write!(f, "{}", s),
            OptionValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Flag(b)
    }
}
