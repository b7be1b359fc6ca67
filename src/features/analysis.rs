//! Static analysis and dependency-update reporting.

use tracing::info;

use crate::config::{EffectiveConfiguration, OptionKey};
use crate::core::capability::Capability;
use crate::core::coordinate::Bucket;
use crate::core::project::{Project, ProjectError};
use crate::core::step::{StepConfig, UpgradePolicy};
use crate::features::stability::is_non_stable;
use crate::features::support::{add_dependencies, apply_plugin, settings};
use crate::features::trait_def::{Feature, FeatureGroup, Trigger};
use crate::ops::report::Report;

/// Bucket holding the shared checkstyle rule set.
pub const CHECKSTYLE_CONFIG_BUCKET: &str = "auroraCheckstyleConfig";

/// Checkstyle with the shared rule set.
pub struct Checkstyle;

impl Feature for Checkstyle {
    fn name(&self) -> &'static str {
        "aurora.applyCheckstylePlugin"
    }

    fn group(&self) -> FeatureGroup {
        FeatureGroup::TestQuality
    }

    fn trigger(&self) -> Trigger {
        Trigger::Flag(OptionKey::ApplyCheckstylePlugin)
    }

    fn apply(
        &self,
        project: &mut dyn Project,
        config: &EffectiveConfiguration,
    ) -> Result<Report, ProjectError> {
        let report = Report::new(self.name());
        if !project.has_capability(&Capability::Java) {
            return Ok(report.described("java plugin not available, will not apply checkstyle"));
        }

        info!("Apply checkstyle support");

        let bucket = Bucket::Named(CHECKSTYLE_CONFIG_BUCKET.to_string());
        project.create_bucket(&bucket);
        let report = add_dependencies(
            project,
            &bucket,
            &[format!(
                "no.skatteetaten.aurora.checkstyle:checkstyle-config:{}",
                config.checkstyle_config_version
            )],
            report,
        )?;

        let report = apply_plugin(project, Capability::Checkstyle, report)?;
        let file = config.checkstyle_config_file.display().to_string();
        project.configure_extension(
            "checkstyle",
            settings([
                ("config", file.as_str().into()),
                ("ignoreFailures", true.into()),
            ]),
        )?;

        Ok(report.described(format!("with file {}", file)))
    }
}

/// Dependency update reports restricted to stable versions.
pub struct Versions;

impl Versions {
    pub const POLICY: UpgradePolicy = UpgradePolicy {
        reason: "Release candidate",
        reject: is_non_stable,
    };
}

impl Feature for Versions {
    fn name(&self) -> &'static str {
        "plugin com.github.ben-manes.versions"
    }

    fn group(&self) -> FeatureGroup {
        FeatureGroup::TestQuality
    }

    fn trigger(&self) -> Trigger {
        Trigger::Capability(Capability::Versions)
    }

    fn apply(
        &self,
        project: &mut dyn Project,
        _config: &EffectiveConfiguration,
    ) -> Result<Report, ProjectError> {
        info!("Apply versions support");

        project.configure_step(
            "dependencyUpdates",
            StepConfig::new()
                .set("revision", "release")
                .set("checkForGradleUpdate", true)
                .set("outputFormatter", "json")
                .set("outputDir", "build/dependencyUpdates")
                .set("reportfileName", "report"),
        )?;
        project.set_upgrade_policy("dependencyUpdates", Self::POLICY)?;

        Ok(Report::new(self.name()).described("only allow stable versions in upgrade"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::memory::InMemoryProject;
    use crate::core::step::Setting;
    use crate::test_support::fixtures::{default_config, java_project};

    #[test]
    fn test_checkstyle() {
        let mut project = java_project();
        let report = Checkstyle.apply(&mut project, &default_config()).unwrap();

        let bucket = Bucket::Named(CHECKSTYLE_CONFIG_BUCKET.into());
        assert_eq!(
            project.dependencies(&bucket)[0].to_string(),
            "no.skatteetaten.aurora.checkstyle:checkstyle-config:2.2.5"
        );
        assert!(project.has_capability(&Capability::Checkstyle));
        assert_eq!(report.plugins_applied, vec!["checkstyle"]);
        assert_eq!(
            report.description,
            "with file checkstyle/checkstyle-with-metrics.xml"
        );

        let extension = project.extension("checkstyle").unwrap();
        assert_eq!(extension["ignoreFailures"], Setting::Bool(true));
    }

    #[test]
    fn test_checkstyle_without_java() {
        let mut project = InMemoryProject::new("app");
        let report = Checkstyle.apply(&mut project, &default_config()).unwrap();

        assert_eq!(
            report.description,
            "java plugin not available, will not apply checkstyle"
        );
        assert!(!project.has_capability(&Capability::Checkstyle));
    }

    #[test]
    fn test_versions_policy() {
        let mut project = java_project().with_plugin(Capability::Versions);
        let report = Versions.apply(&mut project, &default_config()).unwrap();

        assert_eq!(report.description, "only allow stable versions in upgrade");
        let policy = project.upgrade_policy("dependencyUpdates").unwrap();
        assert_eq!(
            policy.select(&["2.0.0", "3.0.0-alpha-6", "2.1.0.RELEASE", "4.0-rc1"]),
            vec!["2.0.0", "2.1.0.RELEASE"]
        );
        assert_eq!(
            project
                .step("dependencyUpdates")
                .unwrap()
                .setting("revision")
                .and_then(Setting::as_text),
            Some("release")
        );
    }
}
