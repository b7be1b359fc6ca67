//! The resolved, immutable configuration of one evaluation.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::option::{OptionKey, OptionValue};

/// Fully resolved build options.
///
/// Every field carries a concrete value. Built once by
/// [`ConfigResolver`](super::ConfigResolver) and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveConfiguration {
    pub java_source_compatibility: String,
    pub groovy_version: String,
    pub spock_version: String,
    pub junit5_version: String,
    pub cglib_version: String,
    pub objenesis_version: String,
    pub aurora_spring_boot_mvc_starter_version: String,
    pub aurora_spring_boot_web_flux_starter_version: String,
    pub spring_cloud_contract_version: String,
    pub kotlin_logging_version: String,
    pub checkstyle_config_version: String,
    pub checkstyle_config_file: PathBuf,
    pub apply_default_plugins: bool,
    pub apply_java_defaults: bool,
    pub apply_delivery_bundle_config: bool,
    pub apply_spock_support: bool,
    pub apply_checkstyle_plugin: bool,
    pub apply_jacoco_test_report: bool,
    pub apply_maven_deployer: bool,
    pub apply_junit5_support: bool,
    pub spring_dev_tools: bool,
    pub use_web_flux: bool,
    pub use_boot_jar: bool,
    pub use_aurora_starters: bool,
}

impl EffectiveConfiguration {
    /// Build a configuration from a total lookup function.
    ///
    /// A value of the wrong kind is coerced: text flags are `true` only when
    /// they read `true` (ignoring case), flags render as text.
    pub fn from_fn(mut lookup: impl FnMut(OptionKey) -> OptionValue) -> Self {
        let mut text = |key| match lookup(key) {
            OptionValue::Text(s) => s,
            OptionValue::Flag(b) => b.to_string(),
        };
        let java_source_compatibility = text(OptionKey::JavaSourceCompatibility);
        let groovy_version = text(OptionKey::GroovyVersion);
        let spock_version = text(OptionKey::SpockVersion);
        let junit5_version = text(OptionKey::Junit5Version);
        let cglib_version = text(OptionKey::CglibVersion);
        let objenesis_version = text(OptionKey::ObjenesisVersion);
        let aurora_spring_boot_mvc_starter_version =
            text(OptionKey::AuroraSpringBootMvcStarterVersion);
        let aurora_spring_boot_web_flux_starter_version =
            text(OptionKey::AuroraSpringBootWebFluxStarterVersion);
        let spring_cloud_contract_version = text(OptionKey::SpringCloudContractVersion);
        let kotlin_logging_version = text(OptionKey::KotlinLoggingVersion);
        let checkstyle_config_version = text(OptionKey::CheckstyleConfigVersion);
        let checkstyle_config_file = PathBuf::from(text(OptionKey::CheckstyleConfigFile));

        let mut flag = |key| match lookup(key) {
            OptionValue::Flag(b) => b,
            OptionValue::Text(s) => s.eq_ignore_ascii_case("true"),
        };

        EffectiveConfiguration {
            java_source_compatibility,
            groovy_version,
            spock_version,
            junit5_version,
            cglib_version,
            objenesis_version,
            aurora_spring_boot_mvc_starter_version,
            aurora_spring_boot_web_flux_starter_version,
            spring_cloud_contract_version,
            kotlin_logging_version,
            checkstyle_config_version,
            checkstyle_config_file,
            apply_default_plugins: flag(OptionKey::ApplyDefaultPlugins),
            apply_java_defaults: flag(OptionKey::ApplyJavaDefaults),
            apply_delivery_bundle_config: flag(OptionKey::ApplyDeliveryBundleConfig),
            apply_spock_support: flag(OptionKey::ApplySpockSupport),
            apply_checkstyle_plugin: flag(OptionKey::ApplyCheckstylePlugin),
            apply_jacoco_test_report: flag(OptionKey::ApplyJacocoTestReport),
            apply_maven_deployer: flag(OptionKey::ApplyMavenDeployer),
            apply_junit5_support: flag(OptionKey::ApplyJunit5Support),
            spring_dev_tools: flag(OptionKey::SpringDevTools),
            use_web_flux: flag(OptionKey::UseWebFlux),
            use_boot_jar: flag(OptionKey::UseBootJar),
            use_aurora_starters: flag(OptionKey::UseAuroraStarters),
        }
    }

    /// The value of one option.
    pub fn get(&self, key: OptionKey) -> OptionValue {
        let text = |s: &str| OptionValue::Text(s.to_string());
        match key {
            OptionKey::JavaSourceCompatibility => text(&self.java_source_compatibility),
            OptionKey::GroovyVersion => text(&self.groovy_version),
            OptionKey::SpockVersion => text(&self.spock_version),
            OptionKey::Junit5Version => text(&self.junit5_version),
            OptionKey::CglibVersion => text(&self.cglib_version),
            OptionKey::ObjenesisVersion => text(&self.objenesis_version),
            OptionKey::AuroraSpringBootMvcStarterVersion => {
                text(&self.aurora_spring_boot_mvc_starter_version)
            }
            OptionKey::AuroraSpringBootWebFluxStarterVersion => {
                text(&self.aurora_spring_boot_web_flux_starter_version)
            }
            OptionKey::SpringCloudContractVersion => text(&self.spring_cloud_contract_version),
            OptionKey::KotlinLoggingVersion => text(&self.kotlin_logging_version),
            OptionKey::CheckstyleConfigVersion => text(&self.checkstyle_config_version),
            OptionKey::CheckstyleConfigFile => {
                OptionValue::Text(self.checkstyle_config_file.display().to_string())
            }
            _ => OptionValue::Flag(self.flag(key)),
        }
    }

    /// The value of a flag option. Text options read as `false`.
    pub fn flag(&self, key: OptionKey) -> bool {
        match key {
            OptionKey::ApplyDefaultPlugins => self.apply_default_plugins,
            OptionKey::ApplyJavaDefaults => self.apply_java_defaults,
            OptionKey::ApplyDeliveryBundleConfig => self.apply_delivery_bundle_config,
            OptionKey::ApplySpockSupport => self.apply_spock_support,
            OptionKey::ApplyCheckstylePlugin => self.apply_checkstyle_plugin,
            OptionKey::ApplyJacocoTestReport => self.apply_jacoco_test_report,
            OptionKey::ApplyMavenDeployer => self.apply_maven_deployer,
            OptionKey::ApplyJunit5Support => self.apply_junit5_support,
            OptionKey::SpringDevTools => self.spring_dev_tools,
            OptionKey::UseWebFlux => self.use_web_flux,
            OptionKey::UseBootJar => self.use_boot_jar,
            OptionKey::UseAuroraStarters => self.use_aurora_starters,
            _ => false,
        }
    }
}

/// One `name=value` line per option, in catalog order.
impl fmt::Display for EffectiveConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in OptionKey::ALL {
            writeln!(f, "{}={}", key.name(), self.get(key))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::Defaults;

    #[test]
    fn test_get_matches_lookup() {
        let config = EffectiveConfiguration::from_fn(|key| Defaults.get(key));
        for key in OptionKey::ALL {
            assert_eq!(config.get(key), Defaults.get(key), "{}", key);
        }
    }

    #[test]
    fn test_rendering_is_one_line_per_option() {
        let config = EffectiveConfiguration::from_fn(|key| Defaults.get(key));
        let rendered = config.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), OptionKey::ALL.len());
        assert_eq!(lines[0], "javaSourceCompatibility=11");
        assert_eq!(
            lines[11],
            "checkstyleConfigFile=checkstyle/checkstyle-with-metrics.xml"
        );
        assert_eq!(lines[23], "useAuroraStarters=true");
        assert_eq!(rendered, config.clone().to_string());
    }

    #[test]
    fn test_kind_coercion() {
        let config = EffectiveConfiguration::from_fn(|key| match key {
            OptionKey::UseWebFlux => OptionValue::Text("TRUE".into()),
            OptionKey::GroovyVersion => OptionValue::Flag(false),
            other => Defaults.get(other),
        });
        assert!(config.use_web_flux);
        assert_eq!(config.groovy_version, "false");
    }
}
