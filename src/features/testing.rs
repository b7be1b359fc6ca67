//! Test frameworks and coverage.

use tracing::info;

use crate::config::{EffectiveConfiguration, OptionKey};
use crate::core::capability::Capability;
use crate::core::coordinate::Bucket;
use crate::core::project::{Project, ProjectError};
use crate::core::step::{Setting, StepConfig};
use crate::features::support::{add_dependencies, apply_plugin, settings};
use crate::features::trait_def::{Feature, FeatureGroup, Trigger};
use crate::ops::report::Report;

/// Where the jacoco XML report is written.
pub const JACOCO_XML_REPORT: &str = "build/reports/jacoco/report.xml";

/// Runs tests on the JUnit platform.
pub struct Junit5;

impl Feature for Junit5 {
    fn name(&self) -> &'static str {
        "aurora.applyJunit5Support"
    }

    fn group(&self) -> FeatureGroup {
        FeatureGroup::TestQuality
    }

    fn trigger(&self) -> Trigger {
        Trigger::Flag(OptionKey::ApplyJunit5Support)
    }

    fn apply(
        &self,
        project: &mut dyn Project,
        config: &EffectiveConfiguration,
    ) -> Result<Report, ProjectError> {
        info!("Apply Junit 5 support");

        let version = config.junit5_version.as_str();
        project.set_extra("junit-jupiter.version", version);

        if project.has_step("test") {
            project.configure_step(
                "test",
                StepConfig::new()
                    .set("useJUnitPlatform", true)
                    .set("failFast", true),
            )?;
        }

        let report = Report::new(self.name()).described("use JUnit platform");
        let report = add_dependencies(
            project,
            &Bucket::TestImplementation,
            &[
                format!("org.junit.jupiter:junit-jupiter-api:{}", version),
                format!("org.junit.jupiter:junit-jupiter-params:{}", version),
            ],
            report,
        )?;
        add_dependencies(
            project,
            &Bucket::TestRuntimeOnly,
            &[format!("org.junit.jupiter:junit-jupiter-engine:{}", version)],
            report,
        )
    }
}

/// Coverage reports in a format CI tooling reads.
pub struct Jacoco;

impl Feature for Jacoco {
    fn name(&self) -> &'static str {
        "aurora.applyJacocoTestReport"
    }

    fn group(&self) -> FeatureGroup {
        FeatureGroup::TestQuality
    }

    fn trigger(&self) -> Trigger {
        Trigger::Flag(OptionKey::ApplyJacocoTestReport)
    }

    fn apply(
        &self,
        project: &mut dyn Project,
        _config: &EffectiveConfiguration,
    ) -> Result<Report, ProjectError> {
        let report = Report::new(self.name());
        if !project.has_capability(&Capability::Java) {
            return Ok(report.described("java plugin not available, cannot apply jacoco"));
        }

        info!("Apply jacoco support");
        let report = apply_plugin(project, Capability::Jacoco, report)?;
        project.configure_step(
            "jacocoTestReport",
            StepConfig::new()
                .set("xml.enabled", true)
                .set("xml.destination", JACOCO_XML_REPORT)
                .set("csv.enabled", false),
        )?;

        Ok(report.described("enable xml, disable csv report"))
    }
}

/// Mutation testing output formats.
pub struct Pitest;

impl Feature for Pitest {
    fn name(&self) -> &'static str {
        "plugin info.solidsoft.pitest"
    }

    fn group(&self) -> FeatureGroup {
        FeatureGroup::TestQuality
    }

    fn trigger(&self) -> Trigger {
        Trigger::Capability(Capability::Pitest)
    }

    fn apply(
        &self,
        project: &mut dyn Project,
        _config: &EffectiveConfiguration,
    ) -> Result<Report, ProjectError> {
        let report = Report::new(self.name());
        if !project.has_capability(&Capability::Java) {
            return Ok(report.described("java plugin not available, cannot apply pitest"));
        }

        info!("Apply pitest support");
        project.configure_extension(
            "pitest",
            settings([(
                "outputFormats",
                Setting::List(vec!["XML".into(), "HTML".into()]),
            )]),
        )?;

        Ok(report.described("output format xml and html"))
    }
}

/// Spock specifications compiled with Groovy.
pub struct Spock;

impl Feature for Spock {
    fn name(&self) -> &'static str {
        "aurora.applySpockSupport"
    }

    fn group(&self) -> FeatureGroup {
        FeatureGroup::TestQuality
    }

    fn trigger(&self) -> Trigger {
        Trigger::Flag(OptionKey::ApplySpockSupport)
    }

    fn apply(
        &self,
        project: &mut dyn Project,
        config: &EffectiveConfiguration,
    ) -> Result<Report, ProjectError> {
        info!("Apply spock support");

        let report = apply_plugin(project, Capability::Groovy, Report::new(self.name()))?;

        let mut dependencies = vec![
            format!("org.codehaus.groovy:groovy-all:{}", config.groovy_version),
            format!("org.spockframework:spock-core:{}", config.spock_version),
            format!("cglib:cglib-nodep:{}", config.cglib_version),
            format!("org.objenesis:objenesis:{}", config.objenesis_version),
        ];
        if project.has_capability(&Capability::SpringBoot) {
            dependencies.push(format!(
                "org.spockframework:spock-spring:{}",
                config.spock_version
            ));
        }

        if project.has_capability(&Capability::KotlinJvm) {
            project.configure_step(
                "compileTestGroovy",
                StepConfig::new()
                    .set(
                        "classpath",
                        Setting::List(vec![
                            "sourceSets.test.compileClasspath".into(),
                            "compileTestKotlin.destinationDir".into(),
                        ]),
                    )
                    .depends_on("compileTestKotlin"),
            )?;
            project.configure_step(
                "testClasses",
                StepConfig::new().depends_on("compileTestGroovy"),
            )?;
        }

        add_dependencies(project, &Bucket::TestImplementation, &dependencies, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::memory::InMemoryProject;
    use crate::test_support::fixtures::{default_config, java_project, spring_project};

    fn test_deps(project: &InMemoryProject, bucket: Bucket) -> Vec<String> {
        project
            .dependencies(&bucket)
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn test_junit5() {
        let mut project = java_project();
        let report = Junit5.apply(&mut project, &default_config()).unwrap();

        assert_eq!(
            test_deps(&project, Bucket::TestImplementation),
            vec![
                "org.junit.jupiter:junit-jupiter-api:5.7.0",
                "org.junit.jupiter:junit-jupiter-params:5.7.0",
            ]
        );
        assert_eq!(
            test_deps(&project, Bucket::TestRuntimeOnly),
            vec!["org.junit.jupiter:junit-jupiter-engine:5.7.0"]
        );
        let test = project.step("test").unwrap();
        assert_eq!(test.setting("useJUnitPlatform"), Some(&Setting::Bool(true)));
        assert_eq!(test.setting("failFast"), Some(&Setting::Bool(true)));
        assert_eq!(project.property("junit-jupiter.version"), Some("5.7.0"));
        assert_eq!(
            report.dependencies_added[2],
            "testRuntimeOnly org.junit.jupiter:junit-jupiter-engine:5.7.0"
        );
    }

    #[test]
    fn test_junit5_twice() {
        let mut project = java_project();
        Junit5.apply(&mut project, &default_config()).unwrap();
        Junit5.apply(&mut project, &default_config()).unwrap();
        assert_eq!(project.dependencies(&Bucket::TestImplementation).len(), 2);
    }

    #[test]
    fn test_jacoco() {
        let mut project = java_project();
        let report = Jacoco.apply(&mut project, &default_config()).unwrap();

        assert_eq!(report.plugins_applied, vec!["jacoco"]);
        let step = project.step("jacocoTestReport").unwrap();
        assert_eq!(step.setting("xml.enabled"), Some(&Setting::Bool(true)));
        assert_eq!(step.setting("csv.enabled"), Some(&Setting::Bool(false)));
        assert_eq!(
            step.setting("xml.destination").and_then(Setting::as_text),
            Some(JACOCO_XML_REPORT)
        );
    }

    #[test]
    fn test_jacoco_without_java() {
        let mut project = InMemoryProject::new("app");
        let report = Jacoco.apply(&mut project, &default_config()).unwrap();

        assert_eq!(
            report.description,
            "java plugin not available, cannot apply jacoco"
        );
        assert!(report.plugins_applied.is_empty());
        assert!(!project.has_capability(&Capability::Jacoco));
    }

    #[test]
    fn test_pitest() {
        let mut project = java_project().with_plugin(Capability::Pitest);
        let report = Pitest.apply(&mut project, &default_config()).unwrap();

        assert_eq!(report.description, "output format xml and html");
        assert_eq!(
            project.extension("pitest").unwrap()["outputFormats"],
            Setting::List(vec!["XML".into(), "HTML".into()])
        );
    }

    #[test]
    fn test_pitest_without_java() {
        let mut project = InMemoryProject::new("app").with_plugin(Capability::Pitest);
        let report = Pitest.apply(&mut project, &default_config()).unwrap();
        assert_eq!(
            report.description,
            "java plugin not available, cannot apply pitest"
        );
    }

    #[test]
    fn test_spock() {
        let mut project = java_project();
        let mut config = default_config();
        config.groovy_version = "3.0.6".into();

        let report = Spock.apply(&mut project, &config).unwrap();

        assert_eq!(report.plugins_applied, vec!["groovy"]);
        let deps = test_deps(&project, Bucket::TestImplementation);
        assert!(deps.contains(&"org.codehaus.groovy:groovy-all:3.0.6".to_string()));
        assert!(deps.contains(&"org.spockframework:spock-core:1.3-groovy-2.5".to_string()));
        assert!(!deps.iter().any(|d| d.contains("spock-spring")));
        assert_eq!(deps.len(), 4);
    }

    #[test]
    fn test_spock_with_spring_and_kotlin() {
        let mut project = spring_project().with_plugin(Capability::KotlinJvm);
        Spock.apply(&mut project, &default_config()).unwrap();

        let deps = test_deps(&project, Bucket::TestImplementation);
        assert!(deps.contains(&"org.spockframework:spock-spring:1.3-groovy-2.5".to_string()));

        let groovy = project.step("compileTestGroovy").unwrap();
        assert!(groovy.depends_on.contains(&"compileTestKotlin".to_string()));
        assert!(project
            .step("testClasses")
            .unwrap()
            .depends_on
            .contains(&"compileTestGroovy".to_string()));
        assert!(project.step_order().is_ok());
    }
}
