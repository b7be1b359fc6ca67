//! Compiled-in defaults.

use crate::config::option::{OptionKey, OptionValue};
use crate::config::source::ConfigSource;

pub const JAVA_SOURCE_COMPATIBILITY: &str = "11";
pub const GROOVY_VERSION: &str = "3.0.5";
pub const SPOCK_VERSION: &str = "1.3-groovy-2.5";
pub const JUNIT5_VERSION: &str = "5.7.0";
pub const CGLIB_VERSION: &str = "3.3.0";
pub const OBJENESIS_VERSION: &str = "3.1";
pub const AURORA_SPRING_BOOT_MVC_STARTER_VERSION: &str = "1.0.+";
pub const AURORA_SPRING_BOOT_WEBFLUX_STARTER_VERSION: &str = "1.0.+";
pub const SPRING_CLOUD_CONTRACT_VERSION: &str = "2.2.4.RELEASE";
pub const KOTLIN_LOGGING_VERSION: &str = "1.11.3";
pub const CHECKSTYLE_CONFIG_VERSION: &str = "2.2.5";
pub const CHECKSTYLE_CONFIG_FILE: &str = "checkstyle/checkstyle-with-metrics.xml";

pub const APPLY_DEFAULT_PLUGINS: bool = true;
pub const APPLY_JAVA_DEFAULTS: bool = true;
pub const APPLY_DELIVERY_BUNDLE_CONFIG: bool = true;
pub const APPLY_SPOCK_SUPPORT: bool = false;
pub const APPLY_CHECKSTYLE_PLUGIN: bool = true;
pub const APPLY_JACOCO_TEST_REPORT: bool = true;
pub const APPLY_MAVEN_DEPLOYER: bool = true;
pub const APPLY_JUNIT5_SUPPORT: bool = true;
pub const SPRING_DEV_TOOLS: bool = false;
pub const USE_WEB_FLUX: bool = false;
pub const USE_BOOT_JAR: bool = false;
pub const USE_AURORA_STARTERS: bool = true;

/// The defaults source. Holds a value for every option.
#[derive(Debug, Clone, Copy, Default)]
pub struct Defaults;

impl Defaults {
    /// The default for `key`.
    pub fn get(&self, key: OptionKey) -> OptionValue {
        match key {
            OptionKey::JavaSourceCompatibility => JAVA_SOURCE_COMPATIBILITY.into(),
            OptionKey::GroovyVersion => GROOVY_VERSION.into(),
            OptionKey::SpockVersion => SPOCK_VERSION.into(),
            OptionKey::Junit5Version => JUNIT5_VERSION.into(),
            OptionKey::CglibVersion => CGLIB_VERSION.into(),
            OptionKey::ObjenesisVersion => OBJENESIS_VERSION.into(),
            OptionKey::AuroraSpringBootMvcStarterVersion => {
                AURORA_SPRING_BOOT_MVC_STARTER_VERSION.into()
            }
            OptionKey::AuroraSpringBootWebFluxStarterVersion => {
                AURORA_SPRING_BOOT_WEBFLUX_STARTER_VERSION.into()
            }
            OptionKey::SpringCloudContractVersion => SPRING_CLOUD_CONTRACT_VERSION.into(),
            OptionKey::KotlinLoggingVersion => KOTLIN_LOGGING_VERSION.into(),
            OptionKey::CheckstyleConfigVersion => CHECKSTYLE_CONFIG_VERSION.into(),
            OptionKey::CheckstyleConfigFile => CHECKSTYLE_CONFIG_FILE.into(),
            OptionKey::ApplyDefaultPlugins => APPLY_DEFAULT_PLUGINS.into(),
            OptionKey::ApplyJavaDefaults => APPLY_JAVA_DEFAULTS.into(),
            OptionKey::ApplyDeliveryBundleConfig => APPLY_DELIVERY_BUNDLE_CONFIG.into(),
            OptionKey::ApplySpockSupport => APPLY_SPOCK_SUPPORT.into(),
            OptionKey::ApplyCheckstylePlugin => APPLY_CHECKSTYLE_PLUGIN.into(),
            OptionKey::ApplyJacocoTestReport => APPLY_JACOCO_TEST_REPORT.into(),
            OptionKey::ApplyMavenDeployer => APPLY_MAVEN_DEPLOYER.into(),
            OptionKey::ApplyJunit5Support => APPLY_JUNIT5_SUPPORT.into(),
            OptionKey::SpringDevTools => SPRING_DEV_TOOLS.into(),
            OptionKey::UseWebFlux => USE_WEB_FLUX.into(),
            OptionKey::UseBootJar => USE_BOOT_JAR.into(),
            OptionKey::UseAuroraStarters => USE_AURORA_STARTERS.into(),
        }
    }
}

impl ConfigSource for Defaults {
    fn name(&self) -> &str {
        "defaults"
    }

    fn value(&self, key: OptionKey) -> Option<OptionValue> {
        Some(self.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_kind() {
        for key in OptionKey::ALL {
            assert_eq!(Defaults.get(key).kind(), key.kind(), "{}", key);
        }
    }
}
