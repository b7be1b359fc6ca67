//! Kotlin toolchain and style linting.

use tracing::info;

use crate::config::EffectiveConfiguration;
use crate::core::capability::Capability;
use crate::core::coordinate::Bucket;
use crate::core::project::{Project, ProjectError};
use crate::core::step::{Setting, StepConfig};
use crate::features::support::{add_dependencies, settings};
use crate::features::trait_def::{Feature, FeatureGroup, Trigger};
use crate::ops::report::Report;

/// Property that, when `false`, opts the project out of the Kotlin stdlib
/// and with it out of every Kotlin convention.
pub const KOTLIN_STDLIB_PROPERTY: &str = "kotlin.stdlib.default.dependency";

const KOTLIN_COMPILE_STEPS: [&str; 2] = ["compileKotlin", "compileTestKotlin"];

/// Whether the project keeps the default Kotlin stdlib dependency.
pub fn kotlin_stdlib_enabled(project: &dyn Project) -> bool {
    project.property(KOTLIN_STDLIB_PROPERTY) != Some("false")
}

/// Kotlin dependencies and compiler settings.
pub struct Kotlin;

impl Feature for Kotlin {
    fn name(&self) -> &'static str {
        "plugin org.jetbrains.kotlin.jvm"
    }

    fn group(&self) -> FeatureGroup {
        FeatureGroup::LanguageToolchain
    }

    fn trigger(&self) -> Trigger {
        Trigger::Capability(Capability::KotlinJvm)
    }

    fn applies_when(&self, project: &dyn Project, _config: &EffectiveConfiguration) -> bool {
        project.has_capability(&Capability::KotlinJvm) && kotlin_stdlib_enabled(project)
    }

    fn apply(
        &self,
        project: &mut dyn Project,
        config: &EffectiveConfiguration,
    ) -> Result<Report, ProjectError> {
        info!("Apply kotlin support");

        let dependencies = [
            "org.jetbrains.kotlin:kotlin-reflect".to_string(),
            "org.jetbrains.kotlin:kotlin-stdlib-jdk8".to_string(),
            format!(
                "io.github.microutils:kotlin-logging:{}",
                config.kotlin_logging_version
            ),
        ];

        for step in KOTLIN_COMPILE_STEPS {
            if project.has_step(step) {
                project.configure_step(
                    step,
                    StepConfig::new()
                        .set("suppressWarnings", true)
                        .set("jvmTarget", config.java_source_compatibility.as_str())
                        .set(
                            "freeCompilerArgs",
                            Setting::List(vec!["-Xjsr305=strict".into()]),
                        ),
                )?;
            }
        }

        let report = Report::new(self.name()).described(format!(
            "jsr305 strict, jvmTarget {}, suppress warnings",
            config.java_source_compatibility
        ));
        add_dependencies(project, &Bucket::Implementation, &dependencies, report)
    }
}

/// KtLint settings and check-before-compile wiring.
pub struct KtLint;

impl Feature for KtLint {
    fn name(&self) -> &'static str {
        "plugin org.jlleitschuh.gradle.ktlint"
    }

    fn group(&self) -> FeatureGroup {
        FeatureGroup::LanguageToolchain
    }

    fn trigger(&self) -> Trigger {
        Trigger::Capability(Capability::KtLint)
    }

    fn applies_when(&self, project: &dyn Project, _config: &EffectiveConfiguration) -> bool {
        project.has_capability(&Capability::KtLint) && kotlin_stdlib_enabled(project)
    }

    fn apply(
        &self,
        project: &mut dyn Project,
        _config: &EffectiveConfiguration,
    ) -> Result<Report, ProjectError> {
        info!("Apply ktlint support");

        project.configure_extension(
            "ktlint",
            settings([
                ("android", false.into()),
                ("disabledRules", Setting::List(vec!["import-ordering".into()])),
            ]),
        )?;

        let wiring: [(&str, &[&str]); 5] = [
            ("ktlintKotlinScriptCheck", &["ktlintKotlinScriptFormat"]),
            ("ktlintMainSourceSetCheck", &["ktlintMainSourceSetFormat"]),
            ("ktlintTestSourceSetCheck", &["ktlintTestSourceSetFormat"]),
            (
                "compileKotlin",
                &["ktlintKotlinScriptCheck", "ktlintMainSourceSetCheck"],
            ),
            ("compileTestKotlin", &["ktlintTestSourceSetCheck"]),
        ];
        for (step, deps) in wiring {
            let config = deps
                .iter()
                .fold(StepConfig::new(), |config, dep| config.depends_on(*dep));
            project.configure_step(step, config)?;
        }

        Ok(Report::new(self.name()).described("disable android"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::memory::InMemoryProject;
    use crate::test_support::fixtures::default_config;

    fn kotlin_project() -> InMemoryProject {
        InMemoryProject::new("app")
            .with_plugin(Capability::KotlinJvm)
            .with_plugin(Capability::KtLint)
    }

    #[test]
    fn test_kotlin_dependencies_and_compiler_settings() {
        let mut project = kotlin_project();
        let report = Kotlin.apply(&mut project, &default_config()).unwrap();

        let deps: Vec<String> = project
            .dependencies(&Bucket::Implementation)
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(
            deps,
            vec![
                "org.jetbrains.kotlin:kotlin-reflect",
                "org.jetbrains.kotlin:kotlin-stdlib-jdk8",
                "io.github.microutils:kotlin-logging:1.11.3",
            ]
        );
        assert_eq!(report.dependencies_added.len(), 3);

        let compile = project.step("compileKotlin").unwrap();
        assert_eq!(
            compile.setting("jvmTarget"),
            Some(&Setting::Text("11".into()))
        );
        assert_eq!(
            compile.setting("suppressWarnings"),
            Some(&Setting::Bool(true))
        );
    }

    #[test]
    fn test_stdlib_opt_out_skips_kotlin_features() {
        let project = kotlin_project().with_property(KOTLIN_STDLIB_PROPERTY, "false");
        let config = default_config();

        assert!(!Kotlin.applies_when(&project, &config));
        assert!(!KtLint.applies_when(&project, &config));
        assert!(Kotlin.applies_when(&kotlin_project(), &config));
    }

    #[test]
    fn test_ktlint_wiring() {
        let mut project = kotlin_project();
        KtLint.apply(&mut project, &default_config()).unwrap();

        let compile = &project.step("compileKotlin").unwrap().depends_on;
        assert!(compile.contains(&"ktlintMainSourceSetCheck".to_string()));
        assert!(compile.contains(&"ktlintKotlinScriptCheck".to_string()));
        assert_eq!(
            project.step("ktlintTestSourceSetCheck").unwrap().depends_on,
            vec!["ktlintTestSourceSetFormat"]
        );
        assert_eq!(
            project.extension("ktlint").unwrap()["android"],
            Setting::Bool(false)
        );
        assert!(project.step_order().is_ok());
    }
}
