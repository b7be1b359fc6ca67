//! Structured extension overrides.
//!
//! This is the `[aurora]` table of a project descriptor. Every field is
//! optional: `Some` means the user wrote to it and the value wins over any
//! property override or default.
//!
//! ```toml
//! [aurora]
//! useKotlin = { ktLint = true }
//! useAuroraDefaults = true
//!
//! [aurora.versions]
//! junit5 = "5.8.1"
//!
//! [aurora.features]
//! spock = true
//!
//! [aurora.useSpringBoot]
//! webFluxEnabled = true
//! ```

use serde::{Deserialize, Serialize};

use crate::config::option::{OptionKey, OptionValue};
use crate::config::source::ConfigSource;

/// Version overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct VersionOverrides {
    pub java_source_compatibility: Option<String>,
    pub groovy: Option<String>,
    pub spock: Option<String>,
    pub junit5: Option<String>,
    pub cglib: Option<String>,
    pub objenesis: Option<String>,
    pub aurora_spring_boot_mvc_starter: Option<String>,
    pub aurora_spring_boot_web_flux_starter: Option<String>,
    pub spring_cloud_contract: Option<String>,
    pub kotlin_logging: Option<String>,
    pub checkstyle_config: Option<String>,
    pub checkstyle_config_file: Option<String>,
}

/// Feature toggle overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct FeatureOverrides {
    pub default_plugins: Option<bool>,
    pub java_defaults: Option<bool>,
    pub delivery_bundle: Option<bool>,
    pub spock: Option<bool>,
    pub checkstyle_plugin: Option<bool>,
    pub jacoco_test_report: Option<bool>,
    pub maven_deployer: Option<bool>,
    pub junit5_support: Option<bool>,
    pub spring_dev_tools: Option<bool>,
    pub aurora_starters: Option<bool>,
}

/// Spring Boot settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct UseSpringBoot {
    /// Reactive starter instead of the servlet one
    pub web_flux_enabled: Option<bool>,
    /// Bootable jar packaging instead of the classic distribution
    pub boot_jar_enabled: Option<bool>,
    /// Also apply contract testing
    pub cloud_contract: bool,
}

/// Kotlin settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct UseKotlin {
    /// Also apply the Kotlin style linter
    pub kt_lint: bool,
}

/// A shortcut that is either a plain toggle or a settings table.
///
/// Writing the table enables the shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Shortcut<T> {
    Toggle(bool),
    Configured(T),
}

impl<T> Shortcut<T> {
    /// Whether the shortcut is switched on.
    pub fn is_enabled(&self) -> bool {
        match self {
            Shortcut::Toggle(enabled) => *enabled,
            Shortcut::Configured(_) => true,
        }
    }

    /// The settings table, if one was written.
    pub fn settings(&self) -> Option<&T> {
        match self {
            Shortcut::Toggle(_) => None,
            Shortcut::Configured(settings) => Some(settings),
        }
    }
}

/// The structured override object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ExtensionOverrides {
    pub versions: VersionOverrides,
    pub features: FeatureOverrides,
    pub use_spring_boot: Option<Shortcut<UseSpringBoot>>,
    pub use_kotlin: Option<Shortcut<UseKotlin>>,
    pub use_aurora_defaults: bool,
    pub use_latest_versions: bool,
    pub use_git_properties: bool,
    pub use_gradle_logger: bool,
    pub use_sonar: bool,
    #[serde(rename = "useAsciiDoctor")]
    pub use_asciidoctor: bool,
    pub use_versions: bool,
    pub use_pitest: bool,
}

impl ExtensionOverrides {
    /// Spring Boot settings, when the table was written.
    pub fn spring_boot(&self) -> Option<&UseSpringBoot> {
        self.use_spring_boot.as_ref().and_then(Shortcut::settings)
    }

    /// Kotlin settings, when the table was written.
    pub fn kotlin(&self) -> Option<&UseKotlin> {
        self.use_kotlin.as_ref().and_then(Shortcut::settings)
    }

    /// Whether the Spring Boot shortcut is on.
    pub fn uses_spring_boot(&self) -> bool {
        self.use_aurora_defaults
            || self
                .use_spring_boot
                .as_ref()
                .is_some_and(Shortcut::is_enabled)
    }

    /// Whether the Kotlin shortcut is on.
    pub fn uses_kotlin(&self) -> bool {
        self.use_kotlin.as_ref().is_some_and(Shortcut::is_enabled)
    }
}

impl ConfigSource for ExtensionOverrides {
    fn name(&self) -> &str {
        "extension"
    }

    fn value(&self, key: OptionKey) -> Option<OptionValue> {
        let v = &self.versions;
        let f = &self.features;
        let text = |s: &Option<String>| s.as_deref().map(OptionValue::from);
        let flag = |b: Option<bool>| b.map(OptionValue::from);

        match key {
            OptionKey::JavaSourceCompatibility => text(&v.java_source_compatibility),
            OptionKey::GroovyVersion => text(&v.groovy),
            OptionKey::SpockVersion => text(&v.spock),
            OptionKey::Junit5Version => text(&v.junit5),
            OptionKey::CglibVersion => text(&v.cglib),
            OptionKey::ObjenesisVersion => text(&v.objenesis),
            OptionKey::AuroraSpringBootMvcStarterVersion => {
                text(&v.aurora_spring_boot_mvc_starter)
            }
            OptionKey::AuroraSpringBootWebFluxStarterVersion => {
                text(&v.aurora_spring_boot_web_flux_starter)
            }
            OptionKey::SpringCloudContractVersion => text(&v.spring_cloud_contract),
            OptionKey::KotlinLoggingVersion => text(&v.kotlin_logging),
            OptionKey::CheckstyleConfigVersion => text(&v.checkstyle_config),
            OptionKey::CheckstyleConfigFile => text(&v.checkstyle_config_file),
            OptionKey::ApplyDefaultPlugins => flag(f.default_plugins),
            OptionKey::ApplyJavaDefaults => flag(f.java_defaults),
            OptionKey::ApplyDeliveryBundleConfig => flag(f.delivery_bundle),
            OptionKey::ApplySpockSupport => flag(f.spock),
            OptionKey::ApplyCheckstylePlugin => flag(f.checkstyle_plugin),
            OptionKey::ApplyJacocoTestReport => flag(f.jacoco_test_report),
            OptionKey::ApplyMavenDeployer => flag(f.maven_deployer),
            OptionKey::ApplyJunit5Support => flag(f.junit5_support),
            OptionKey::SpringDevTools => flag(f.spring_dev_tools),
            OptionKey::UseAuroraStarters => flag(f.aurora_starters),
            OptionKey::UseWebFlux => flag(self.spring_boot().and_then(|s| s.web_flux_enabled)),
            OptionKey::UseBootJar => flag(self.spring_boot().and_then(|s| s.boot_jar_enabled)),
        }
    }
}
