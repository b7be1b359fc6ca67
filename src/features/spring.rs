//! Spring Boot, Spring Cloud Contract and Kotlin-Spring support.

use tracing::info;

use crate::config::EffectiveConfiguration;
use crate::core::artifact::Artifact;
use crate::core::capability::Capability;
use crate::core::coordinate::{Bucket, Coordinate, Exclusion};
use crate::core::project::{Project, ProjectError};
use crate::core::step::StepConfig;
use crate::features::support::{
    add_dependencies, apply_plugin, register_or_configure, settings, version_or_unspecified,
};
use crate::features::trait_def::{Feature, FeatureGroup, Trigger};
use crate::ops::report::Report;

const AURORA_STARTER_GROUP: &str = "no.skatteetaten.aurora.springboot";

/// Modules kept off the compile classpath in reactive mode.
const SERVLET_EXCLUSIONS: [(&str, &str); 2] = [
    ("org.springframework", "spring-webmvc"),
    ("org.springframework.boot", "spring-boot-starter-tomcat"),
];

/// Spring Boot conventions.
///
/// Picks the reactive or servlet starter, and bootable-jar or plain-jar
/// packaging. The two packaging modes are mutually exclusive: exactly one of
/// `bootJar` and `jar` is enabled afterwards.
pub struct SpringBoot;

impl Feature for SpringBoot {
    fn name(&self) -> &'static str {
        "plugin org.springframework.boot"
    }

    fn group(&self) -> FeatureGroup {
        FeatureGroup::Framework
    }

    fn trigger(&self) -> Trigger {
        Trigger::Capability(Capability::SpringBoot)
    }

    fn apply(
        &self,
        project: &mut dyn Project,
        config: &EffectiveConfiguration,
    ) -> Result<Report, ProjectError> {
        info!("Apply Spring support");

        let mut dependencies =
            vec!["com.fasterxml.jackson.datatype:jackson-datatype-jsr310".to_string()];
        if config.use_aurora_starters {
            dependencies.push(if config.use_web_flux {
                format!(
                    "{}:aurora-spring-boot-webflux-starter:{}",
                    AURORA_STARTER_GROUP, config.aurora_spring_boot_web_flux_starter_version
                )
            } else {
                format!(
                    "{}:aurora-spring-boot-mvc-starter:{}",
                    AURORA_STARTER_GROUP, config.aurora_spring_boot_mvc_starter_version
                )
            });
        }
        if config.spring_dev_tools {
            dependencies.push("org.springframework.boot:spring-boot-devtools".to_string());
        }

        let report = apply_plugin(
            project,
            Capability::DependencyManagement,
            Report::new(self.name()),
        )?;

        if config.use_boot_jar {
            project.set_step_enabled("bootJar", true)?;
            project.set_step_enabled("jar", false)?;
        } else {
            project.set_step_enabled("jar", true)?;
            if project.has_step("distZip") {
                project.set_step_enabled("distZip", true)?;
            }
            project.set_step_enabled("bootJar", false)?;
            project.disable_step_if_present("distTar")?;
            project.set_step_enabled("bootDistTar", false)?;
            project.set_step_enabled("bootDistZip", false)?;
        }

        if config.use_web_flux {
            for (group, module) in SERVLET_EXCLUSIONS {
                let exclusion = Exclusion::new(group, module);
                project.exclude_dependency(&Bucket::Implementation, exclusion)?;
            }
        }

        project.configure_extension("springBoot", settings([("buildInfo", true.into())]))?;
        register_or_configure(
            project,
            "bootBuildInfo",
            StepConfig::new().described("Generates a META-INF/build-info.properties file."),
        )?;

        let report = add_dependencies(project, &Bucket::Implementation, &dependencies, report)?;

        let boot_jar = if config.use_boot_jar {
            "bootJar enabled"
        } else {
            "bootJar disabled"
        };
        let web = match (config.use_web_flux, config.use_aurora_starters) {
            (true, true) => "webflux starter added and webmvc + tomcat excluded",
            (true, false) => "webflux enabled and webmvc + tomcat excluded",
            (false, true) => "webflux disabled and mvc starter added",
            (false, false) => "webflux disabled",
        };

        Ok(report.described(format!("Build info, {}, {}, Optional devtools", boot_jar, web)))
    }
}

/// Contract testing with Spring Cloud Contract.
pub struct CloudContract;

impl CloudContract {
    /// The test framework generated contract tests target.
    pub fn test_framework(config: &EffectiveConfiguration) -> &'static str {
        if config.apply_junit5_support {
            "JUNIT5"
        } else {
            "SPOCK"
        }
    }
}

impl Feature for CloudContract {
    fn name(&self) -> &'static str {
        "plugin spring-cloud-contract"
    }

    fn group(&self) -> FeatureGroup {
        FeatureGroup::Framework
    }

    fn trigger(&self) -> Trigger {
        Trigger::Capability(Capability::CloudContract)
    }

    fn apply(
        &self,
        project: &mut dyn Project,
        config: &EffectiveConfiguration,
    ) -> Result<Report, ProjectError> {
        info!("Apply spring-cloud-contract support");

        let dependencies = [
            "org.springframework.cloud:spring-cloud-starter-contract-stub-runner",
            "org.springframework.cloud:spring-cloud-starter-contract-verifier",
            "org.springframework.cloud:spring-cloud-contract-wiremock",
            "org.springframework.restdocs:spring-restdocs-mockmvc",
        ];
        let bom = Coordinate::new(
            "org.springframework.cloud",
            "spring-cloud-contract-dependencies",
        )
        .with_version(config.spring_cloud_contract_version.as_str());

        let mut report = Report::new(self.name()).described("Configure stubs, testframework");
        if !project.has_capability(&Capability::DependencyManagement) {
            report = apply_plugin(project, Capability::DependencyManagement, report)?;
        }
        project.import_bom(bom.clone())?;

        let group = project.group().unwrap_or_default().to_string();
        let name = project.name().to_string();
        let version = version_or_unspecified(project);

        project.configure_extension(
            "contracts",
            settings([
                (
                    "packageWithBaseClasses",
                    format!("{}.{}.contracts", group, name).into(),
                ),
                ("failOnNoContracts", false.into()),
                ("testFramework", Self::test_framework(config).into()),
            ]),
        )?;

        let report = add_dependencies(project, &Bucket::TestImplementation, &dependencies, report)?;

        register_or_configure(
            project,
            "stubsJar",
            StepConfig::new()
                .set("archiveClassifier", "stubs")
                .set(
                    "into",
                    format!("META-INF/{}/{}/{}/mappings", group, name, version),
                )
                .set("include", "**/*.*")
                .set("from", "build/generated-snippets/stubs")
                .depends_on("test"),
        )?;
        project.set_step_enabled("verifierStubsJar", false)?;
        project.add_artifact(
            Artifact::new(name, "jar")
                .with_classifier("stubs")
                .produced_by("stubsJar"),
        );

        Ok(report.with_bom(&bom))
    }
}

/// Jackson support for Kotlin classes in Spring projects.
pub struct KotlinSpring;

impl Feature for KotlinSpring {
    fn name(&self) -> &'static str {
        "plugin org.jetbrains.kotlin.plugin.spring"
    }

    fn group(&self) -> FeatureGroup {
        FeatureGroup::Framework
    }

    fn trigger(&self) -> Trigger {
        Trigger::Capability(Capability::KotlinSpring)
    }

    fn apply(
        &self,
        project: &mut dyn Project,
        _config: &EffectiveConfiguration,
    ) -> Result<Report, ProjectError> {
        info!("Apply spring kotlin support");

        add_dependencies(
            project,
            &Bucket::Implementation,
            &["com.fasterxml.jackson.module:jackson-module-kotlin"],
            Report::new(self.name()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::memory::InMemoryProject;
    use crate::test_support::fixtures::{default_config, spring_project};

    fn modules(project: &InMemoryProject) -> Vec<String> {
        project
            .dependencies(&Bucket::Implementation)
            .iter()
            .map(|c| c.module())
            .collect()
    }

    #[test]
    fn test_servlet_mode() {
        let mut project = spring_project();
        let report = SpringBoot.apply(&mut project, &default_config()).unwrap();

        let modules = modules(&project);
        let starter = format!("{}:aurora-spring-boot-mvc-starter", AURORA_STARTER_GROUP);
        assert!(modules.contains(&starter));
        assert!(!modules.iter().any(|m| m.contains("webflux")));
        assert!(project.exclusions(&Bucket::Implementation).is_empty());
        assert!(report.description.contains("mvc starter added"));
        assert!(project.has_capability(&Capability::DependencyManagement));
    }

    #[test]
    fn test_reactive_mode_excludes_servlet_stack() {
        let mut project = spring_project();
        project
            .add_dependency(
                &Bucket::Implementation,
                Coordinate::new("org.springframework.boot", "spring-boot-starter-tomcat"),
            )
            .unwrap();
        let mut config = default_config();
        config.use_web_flux = true;

        let report = SpringBoot.apply(&mut project, &config).unwrap();

        let modules = modules(&project);
        let starter = format!(
            "{}:aurora-spring-boot-webflux-starter",
            AURORA_STARTER_GROUP
        );
        assert!(modules.contains(&starter));
        assert!(!modules.iter().any(|m| m.contains("mvc-starter")));
        assert!(!modules.contains(&"org.springframework.boot:spring-boot-starter-tomcat".into()));
        assert_eq!(project.exclusions(&Bucket::Implementation).len(), 2);
        assert!(report.description.contains("webflux starter added"));
        assert!(report.description.contains("webmvc + tomcat excluded"));
    }

    #[test]
    fn test_boot_jar_mode() {
        let mut project = spring_project();
        let mut config = default_config();
        config.use_boot_jar = true;

        SpringBoot.apply(&mut project, &config).unwrap();

        assert!(project.step("bootJar").unwrap().enabled);
        assert!(!project.step("jar").unwrap().enabled);
    }

    #[test]
    fn test_plain_jar_mode() {
        let mut project = spring_project();
        SpringBoot.apply(&mut project, &default_config()).unwrap();

        assert!(project.step("jar").unwrap().enabled);
        assert!(!project.step("bootJar").unwrap().enabled);
        assert!(!project.step("bootDistZip").unwrap().enabled);
        assert!(!project.step("bootDistTar").unwrap().enabled);
        assert!(project.has_step("bootBuildInfo"));
    }

    #[test]
    fn test_starters_disabled() {
        let mut project = spring_project();
        let mut config = default_config();
        config.use_aurora_starters = false;
        config.spring_dev_tools = true;

        let report = SpringBoot.apply(&mut project, &config).unwrap();

        let modules = modules(&project);
        assert!(!modules.iter().any(|m| m.contains("aurora-spring-boot")));
        assert!(modules.contains(&"org.springframework.boot:spring-boot-devtools".into()));
        assert_eq!(report.dependencies_added.len(), 2);
    }

    #[test]
    fn test_cloud_contract_framework_switch() {
        let mut config = default_config();
        assert_eq!(CloudContract::test_framework(&config), "JUNIT5");
        config.apply_junit5_support = false;
        assert_eq!(CloudContract::test_framework(&config), "SPOCK");
    }

    #[test]
    fn test_cloud_contract() {
        let config = default_config();
        let mut project = spring_project()
            .with_group("no.skatteetaten.demo")
            .with_version("1.0.0")
            .with_plugin(Capability::CloudContract);

        let report = CloudContract.apply(&mut project, &config).unwrap();

        assert_eq!(project.boms().len(), 1);
        assert_eq!(project.dependencies(&Bucket::TestImplementation).len(), 4);
        assert_eq!(
            report.dependencies_added.last().unwrap(),
            "bom org.springframework.cloud:spring-cloud-contract-dependencies:2.2.4.RELEASE"
        );

        let stubs = project.step("stubsJar").unwrap();
        assert_eq!(stubs.depends_on, vec!["test"]);
        assert_eq!(
            stubs.setting("into").unwrap().as_text(),
            Some("META-INF/no.skatteetaten.demo/app/1.0.0/mappings")
        );
        assert!(!project.step("verifierStubsJar").unwrap().enabled);
        assert!(project.artifacts().iter().any(|a| a.classifier == "stubs"));

        let contracts = project.extension("contracts").unwrap();
        assert_eq!(
            contracts["packageWithBaseClasses"].as_text(),
            Some("no.skatteetaten.demo.app.contracts")
        );
    }

    #[test]
    fn test_cloud_contract_twice() {
        let config = default_config();
        let mut project = spring_project().with_plugin(Capability::CloudContract);
        CloudContract.apply(&mut project, &config).unwrap();
        CloudContract.apply(&mut project, &config).unwrap();

        assert_eq!(project.boms().len(), 1);
        assert_eq!(project.dependencies(&Bucket::TestImplementation).len(), 4);
    }

    #[test]
    fn test_kotlin_spring() {
        let mut project = spring_project();
        let report = KotlinSpring.apply(&mut project, &default_config()).unwrap();
        assert_eq!(
            report.dependencies_added,
            vec!["implementation com.fasterxml.jackson.module:jackson-module-kotlin"]
        );
    }
}
