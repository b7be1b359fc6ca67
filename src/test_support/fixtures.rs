//! Test fixtures for common test scenarios.
//!
//! Pre-built projects and configurations that unit tests apply features to.

use crate::config::{Defaults, EffectiveConfiguration};
use crate::core::capability::Capability;
use crate::core::memory::InMemoryProject;

/// The configuration every option's default resolves to.
pub fn default_config() -> EffectiveConfiguration {
    EffectiveConfiguration::from_fn(|key| Defaults.get(key))
}

/// A project with `java` applied.
pub fn java_project() -> InMemoryProject {
    InMemoryProject::new("app").with_plugin(Capability::Java)
}

/// A project with Spring Boot (and through it `java`) applied.
pub fn spring_project() -> InMemoryProject {
    InMemoryProject::new("app").with_plugin(Capability::SpringBoot)
}

/// A Kotlin Spring Boot project.
pub fn kotlin_spring_project() -> InMemoryProject {
    spring_project()
        .with_plugin(Capability::KotlinJvm)
        .with_plugin(Capability::KotlinSpring)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::project::Project;

    #[test]
    fn test_default_config_matches_defaults() {
        let config = default_config();
        assert_eq!(config.java_source_compatibility, "11");
        assert!(config.apply_default_plugins);
        assert!(!config.use_boot_jar);
    }

    #[test]
    fn test_spring_project_implies_java() {
        let project = spring_project();
        assert!(project.has_capability(&Capability::Java));
        assert!(project.has_step("bootJar"));
    }

    #[test]
    fn test_kotlin_spring_project() {
        let project = kotlin_spring_project();
        assert!(project.has_capability(&Capability::KotlinSpring));
        assert!(project.has_step("compileKotlin"));
    }
}
