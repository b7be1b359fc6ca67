//! In-memory build graph.
//!
//! `InMemoryProject` is a faithful-enough model of a JVM build graph to apply
//! conventions against: plugins contribute steps, buckets, extensions and
//! artifacts when activated, step ordering is a real dependency graph, and
//! every lookup that a real build tool would reject is rejected here too.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::core::artifact::Artifact;
use crate::core::capability::Capability;
use crate::core::coordinate::{Bucket, Coordinate, Exclusion};
use crate::core::project::{Project, ProjectError};
use crate::core::publishing::{Publication, Repository};
use crate::core::step::{Settings, Step, StepConfig, UpgradePolicy};

fn step_def(
    name: &'static str,
    deps: &'static [&'static str],
) -> (&'static str, &'static [&'static str]) {
    (name, deps)
}

/// What activating a plugin adds to a project.
#[derive(Debug, Default)]
struct PluginContribution {
    implies: Vec<Capability>,
    /// (step, steps it depends on)
    steps: Vec<(&'static str, &'static [&'static str])>,
    buckets: Vec<Bucket>,
    extensions: Vec<&'static str>,
    /// (name suffix, extension, producing step)
    artifacts: Vec<(&'static str, &'static str, &'static str)>,
}

impl PluginContribution {
    fn of(capability: &Capability) -> Self {
        match capability {
            Capability::Java => PluginContribution {
                steps: vec![
                    step_def("clean", &[]),
                    step_def("compileJava", &[]),
                    step_def("processResources", &[]),
                    step_def("classes", &["compileJava", "processResources"]),
                    step_def("jar", &["classes"]),
                    step_def("javadoc", &["classes"]),
                    step_def("compileTestJava", &["classes"]),
                    step_def("testClasses", &["compileTestJava"]),
                    step_def("test", &["testClasses"]),
                    step_def("assemble", &["jar"]),
                    step_def("check", &["test"]),
                    step_def("build", &["assemble", "check"]),
                ],
                buckets: vec![
                    Bucket::Implementation,
                    Bucket::TestImplementation,
                    Bucket::TestRuntimeOnly,
                    Bucket::Named("runtimeClasspath".into()),
                    Bucket::Named("archives".into()),
                ],
                extensions: vec!["java"],
                artifacts: vec![("", "jar", "jar")],
                ..Default::default()
            },
            Capability::MavenPublish => PluginContribution {
                steps: vec![
                    step_def("publish", &[]),
                    step_def("publishToMavenLocal", &[]),
                ],
                extensions: vec!["publishing"],
                ..Default::default()
            },
            Capability::Application => PluginContribution {
                implies: vec![Capability::Java, Capability::Distribution],
                steps: vec![
                    step_def("startScripts", &["jar"]),
                    step_def("run", &["classes"]),
                ],
                extensions: vec!["application"],
                ..Default::default()
            },
            Capability::Distribution => PluginContribution {
                steps: vec![
                    step_def("distZip", &[]),
                    step_def("distTar", &[]),
                    step_def("installDist", &[]),
                ],
                extensions: vec!["distributions"],
                artifacts: vec![("", "zip", "distZip"), ("", "tar", "distTar")],
                ..Default::default()
            },
            Capability::Groovy => PluginContribution {
                implies: vec![Capability::Java],
                steps: vec![
                    step_def("compileGroovy", &["compileJava"]),
                    step_def("compileTestGroovy", &["classes"]),
                ],
                ..Default::default()
            },
            Capability::Jacoco => PluginContribution {
                steps: vec![step_def("jacocoTestReport", &[])],
                extensions: vec!["jacoco"],
                ..Default::default()
            },
            Capability::Checkstyle => PluginContribution {
                steps: vec![
                    step_def("checkstyleMain", &[]),
                    step_def("checkstyleTest", &[]),
                ],
                extensions: vec!["checkstyle"],
                ..Default::default()
            },
            Capability::KotlinJvm => PluginContribution {
                implies: vec![Capability::Java],
                steps: vec![
                    step_def("compileKotlin", &[]),
                    step_def("compileTestKotlin", &[]),
                ],
                extensions: vec!["kotlin"],
                ..Default::default()
            },
            Capability::KtLint => PluginContribution {
                steps: vec![
                    step_def("ktlintMainSourceSetFormat", &[]),
                    step_def("ktlintMainSourceSetCheck", &[]),
                    step_def("ktlintTestSourceSetFormat", &[]),
                    step_def("ktlintTestSourceSetCheck", &[]),
                    step_def("ktlintKotlinScriptFormat", &[]),
                    step_def("ktlintKotlinScriptCheck", &[]),
                ],
                extensions: vec!["ktlint"],
                ..Default::default()
            },
            Capability::SpringBoot => PluginContribution {
                implies: vec![Capability::Java],
                steps: vec![
                    step_def("bootJar", &["classes"]),
                    step_def("bootRun", &["classes"]),
                    step_def("bootStartScripts", &["bootJar"]),
                    step_def("bootDistZip", &["bootJar"]),
                    step_def("bootDistTar", &["bootJar"]),
                ],
                extensions: vec!["springBoot"],
                artifacts: vec![
                    ("-boot", "zip", "bootDistZip"),
                    ("-boot", "tar", "bootDistTar"),
                ],
                ..Default::default()
            },
            Capability::DependencyManagement => PluginContribution {
                extensions: vec!["dependencyManagement"],
                ..Default::default()
            },
            Capability::CloudContract => PluginContribution {
                steps: vec![
                    step_def("generateContractTests", &[]),
                    step_def("verifierStubsJar", &[]),
                ],
                extensions: vec!["contracts"],
                ..Default::default()
            },
            Capability::AsciiDoctor => PluginContribution {
                steps: vec![step_def("asciidoctor", &[])],
                ..Default::default()
            },
            Capability::Pitest => PluginContribution {
                steps: vec![step_def("pitest", &[])],
                extensions: vec!["pitest"],
                ..Default::default()
            },
            Capability::Versions => PluginContribution {
                steps: vec![step_def("dependencyUpdates", &[])],
                ..Default::default()
            },
            Capability::LatestVersions => PluginContribution {
                steps: vec![
                    step_def("useLatestVersions", &[]),
                    step_def("useLatestVersionsCheck", &[]),
                ],
                ..Default::default()
            },
            Capability::GitProperties => PluginContribution {
                steps: vec![step_def("generateGitProperties", &[])],
                ..Default::default()
            },
            Capability::TestLogger => PluginContribution {
                extensions: vec!["testlogger"],
                ..Default::default()
            },
            Capability::Sonar => PluginContribution {
                steps: vec![step_def("sonarqube", &[])],
                extensions: vec!["sonarqube"],
                ..Default::default()
            },
            Capability::KotlinSpring | Capability::Other(_) => PluginContribution::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct BucketState {
    dependencies: Vec<Coordinate>,
    exclusions: Vec<Exclusion>,
}

/// A project held entirely in memory.
#[derive(Debug, Clone)]
pub struct InMemoryProject {
    name: String,
    directory: PathBuf,
    group: Option<String>,
    version: Option<String>,
    properties: BTreeMap<String, String>,
    capabilities: Vec<Capability>,
    steps: BTreeMap<String, Step>,
    extensions: BTreeMap<String, Settings>,
    buckets: BTreeMap<Bucket, BucketState>,
    boms: Vec<Coordinate>,
    upgrade_policies: BTreeMap<String, UpgradePolicy>,
    artifacts: Vec<Artifact>,
    publications: Vec<Publication>,
    repositories: Vec<Repository>,
    default_steps: Vec<String>,
}

impl InMemoryProject {
    /// Create an empty project rooted at the current directory.
    pub fn new(name: impl Into<String>) -> Self {
        InMemoryProject {
            name: name.into(),
            directory: PathBuf::from("."),
            group: None,
            version: None,
            properties: BTreeMap::new(),
            capabilities: Vec::new(),
            steps: BTreeMap::new(),
            extensions: BTreeMap::new(),
            buckets: BTreeMap::new(),
            boms: Vec::new(),
            upgrade_policies: BTreeMap::new(),
            artifacts: Vec::new(),
            publications: Vec::new(),
            repositories: Vec::new(),
            default_steps: Vec::new(),
        }
    }

    /// Set the project directory.
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Assign an explicit group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Assign an explicit version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Add a project property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Apply a plugin.
    pub fn with_plugin(mut self, capability: impl Into<Capability>) -> Self {
        self.activate(&capability.into());
        self
    }

    /// Set the default steps.
    pub fn with_default_steps(mut self, steps: Vec<String>) -> Self {
        self.default_steps = steps;
        self
    }

    fn activate(&mut self, capability: &Capability) -> bool {
        if self.capabilities.contains(capability) {
            return false;
        }
        self.capabilities.push(capability.clone());

        let contribution = PluginContribution::of(capability);
        for implied in &contribution.implies {
            self.activate(implied);
        }
        for (step, deps) in contribution.steps {
            let entry = self
                .steps
                .entry(step.to_string())
                .or_insert_with(|| Step::new(step));
            entry.apply(StepConfig {
                depends_on: deps.iter().map(|d| d.to_string()).collect(),
                ..StepConfig::default()
            });
        }
        for bucket in contribution.buckets {
            self.buckets.entry(bucket).or_default();
        }
        for extension in contribution.extensions {
            self.extensions.entry(extension.to_string()).or_default();
        }
        for (suffix, extension, producer) in contribution.artifacts {
            self.artifacts.push(
                Artifact::new(format!("{}{}", self.name, suffix), extension).produced_by(producer),
            );
        }
        true
    }

    fn bucket_mut(&mut self, bucket: &Bucket) -> Result<&mut BucketState, ProjectError> {
        self.buckets
            .get_mut(bucket)
            .ok_or_else(|| ProjectError::UnknownBucket {
                bucket: bucket.to_string(),
            })
    }

    /// Settings of a plugin extension.
    pub fn extension(&self, name: &str) -> Option<&Settings> {
        self.extensions.get(name)
    }

    /// All registered steps, by name.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.values()
    }

    /// Imported BOMs.
    pub fn boms(&self) -> &[Coordinate] {
        &self.boms
    }

    /// The upgrade policy attached to a step.
    pub fn upgrade_policy(&self, step: &str) -> Option<&UpgradePolicy> {
        self.upgrade_policies.get(step)
    }

    /// Registered publications.
    pub fn publications(&self) -> &[Publication] {
        &self.publications
    }

    /// Registered repositories.
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// Every bucket with its effective dependencies.
    pub fn buckets(&self) -> Vec<(Bucket, Vec<Coordinate>)> {
        self.buckets
            .keys()
            .map(|bucket| (bucket.clone(), self.dependencies(bucket)))
            .collect()
    }

    /// Steps in execution order: every step comes after the steps it depends
    /// on and after the existing steps it must run after.
    pub fn step_order(&self) -> Result<Vec<String>, ProjectError> {
        let mut graph: DiGraph<&str, ()> = DiGraph::new();
        let nodes: BTreeMap<&str, NodeIndex> = self
            .steps
            .keys()
            .map(|name| (name.as_str(), graph.add_node(name.as_str())))
            .collect();

        for step in self.steps.values() {
            let to = nodes[step.name.as_str()];
            for dep in &step.depends_on {
                let from = nodes
                    .get(dep.as_str())
                    .ok_or_else(|| ProjectError::UnknownStep { step: dep.clone() })?;
                graph.update_edge(*from, to, ());
            }
            for after in &step.must_run_after {
                if let Some(from) = nodes.get(after.as_str()) {
                    graph.update_edge(*from, to, ());
                }
            }
        }

        let order = toposort(&graph, None).map_err(|cycle| ProjectError::StepCycle {
            step: graph[cycle.node_id()].to_string(),
        })?;

        Ok(order.into_iter().map(|n| graph[n].to_string()).collect())
    }
}

impl Project for InMemoryProject {
    fn name(&self) -> &str {
        &self.name
    }

    fn directory(&self) -> &Path {
        &self.directory
    }

    fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn set_group(&mut self, group: &str) {
        self.group = Some(group.to_string());
    }

    fn set_version(&mut self, version: &str) {
        self.version = Some(version.to_string());
    }

    fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    fn set_extra(&mut self, key: &str, value: &str) {
        self.properties.insert(key.to_string(), value.to_string());
    }

    fn has_capability(&self, capability: &Capability) -> bool {
        self.capabilities.contains(capability)
    }

    fn capabilities(&self) -> Vec<Capability> {
        self.capabilities.clone()
    }

    fn activate_capability(&mut self, capability: &Capability) -> Result<bool, ProjectError> {
        Ok(self.activate(capability))
    }

    fn step(&self, name: &str) -> Option<&Step> {
        self.steps.get(name)
    }

    fn register_step(&mut self, name: &str, config: StepConfig) -> Result<(), ProjectError> {
        if self.steps.contains_key(name) {
            return Err(ProjectError::DuplicateStep {
                step: name.to_string(),
            });
        }
        let mut step = Step::new(name);
        step.apply(config);
        self.steps.insert(name.to_string(), step);
        Ok(())
    }

    fn configure_step(&mut self, name: &str, config: StepConfig) -> Result<(), ProjectError> {
        let step = self
            .steps
            .get_mut(name)
            .ok_or_else(|| ProjectError::UnknownStep {
                step: name.to_string(),
            })?;
        step.apply(config);
        Ok(())
    }

    fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains_key(name)
    }

    fn configure_extension(&mut self, name: &str, settings: Settings) -> Result<(), ProjectError> {
        let extension =
            self.extensions
                .get_mut(name)
                .ok_or_else(|| ProjectError::UnknownExtension {
                    extension: name.to_string(),
                })?;
        extension.extend(settings);
        Ok(())
    }

    fn create_bucket(&mut self, bucket: &Bucket) {
        self.buckets.entry(bucket.clone()).or_default();
    }

    fn add_dependency(
        &mut self,
        bucket: &Bucket,
        coordinate: Coordinate,
    ) -> Result<(), ProjectError> {
        let state = self.bucket_mut(bucket)?;
        if !state.dependencies.contains(&coordinate) {
            state.dependencies.push(coordinate);
        }
        Ok(())
    }

    fn exclude_dependency(
        &mut self,
        bucket: &Bucket,
        exclusion: Exclusion,
    ) -> Result<(), ProjectError> {
        let state = self.bucket_mut(bucket)?;
        if !state.exclusions.contains(&exclusion) {
            state.exclusions.push(exclusion);
        }
        Ok(())
    }

    fn dependencies(&self, bucket: &Bucket) -> Vec<Coordinate> {
        self.buckets
            .get(bucket)
            .map(|state| {
                state
                    .dependencies
                    .iter()
                    .filter(|c| !state.exclusions.iter().any(|e| e.matches(c)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn exclusions(&self, bucket: &Bucket) -> Vec<Exclusion> {
        self.buckets
            .get(bucket)
            .map(|state| state.exclusions.clone())
            .unwrap_or_default()
    }

    fn import_bom(&mut self, coordinate: Coordinate) -> Result<(), ProjectError> {
        if !self.extensions.contains_key("dependencyManagement") {
            return Err(ProjectError::UnknownExtension {
                extension: "dependencyManagement".to_string(),
            });
        }
        if !self.boms.contains(&coordinate) {
            self.boms.push(coordinate);
        }
        Ok(())
    }

    fn set_upgrade_policy(
        &mut self,
        step: &str,
        policy: UpgradePolicy,
    ) -> Result<(), ProjectError> {
        if !self.steps.contains_key(step) {
            return Err(ProjectError::UnknownStep {
                step: step.to_string(),
            });
        }
        self.upgrade_policies.insert(step.to_string(), policy);
        Ok(())
    }

    fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    fn add_artifact(&mut self, artifact: Artifact) {
        if !self.artifacts.contains(&artifact) {
            self.artifacts.push(artifact);
        }
    }

    fn remove_artifacts(&mut self, predicate: &dyn Fn(&Artifact) -> bool) -> usize {
        let before = self.artifacts.len();
        self.artifacts.retain(|a| !predicate(a));
        before - self.artifacts.len()
    }

    fn add_publication(&mut self, publication: Publication) -> Result<(), ProjectError> {
        if !self.extensions.contains_key("publishing") {
            return Err(ProjectError::PublishingUnavailable);
        }
        self.publications.retain(|p| p.name != publication.name);
        self.publications.push(publication);
        Ok(())
    }

    fn add_repository(&mut self, repository: Repository) -> Result<(), ProjectError> {
        if !self.extensions.contains_key("publishing") {
            return Err(ProjectError::PublishingUnavailable);
        }
        self.repositories.retain(|r| r.name() != repository.name());
        self.repositories.push(repository);
        Ok(())
    }

    fn default_steps(&self) -> &[String] {
        &self.default_steps
    }

    fn set_default_steps(&mut self, steps: Vec<String>) {
        self.default_steps = steps;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_contributes_steps_and_buckets() {
        let project = InMemoryProject::new("app").with_plugin(Capability::Java);

        assert!(project.has_step("jar"));
        assert!(project.has_step("test"));
        assert!(project.has_extension("java"));
        assert!(project.dependencies(&Bucket::Implementation).is_empty());
        assert_eq!(project.artifacts()[0].to_string(), "app.jar");
    }

    #[test]
    fn test_activation_is_idempotent() {
        let mut project = InMemoryProject::new("app");
        assert!(project.activate_capability(&Capability::Java).unwrap());
        assert!(!project.activate_capability(&Capability::Java).unwrap());
        assert_eq!(project.capabilities(), vec![Capability::Java]);
        assert_eq!(project.artifacts().len(), 1);
    }

    #[test]
    fn test_implied_plugins() {
        let project = InMemoryProject::new("app").with_plugin("application");

        assert!(project.has_capability(&Capability::Java));
        assert!(project.has_capability(&Capability::Distribution));
        assert!(project.has_step("startScripts"));
        assert!(project.has_step("distTar"));
    }

    #[test]
    fn test_unknown_bucket() {
        let mut project = InMemoryProject::new("app");
        let err = project
            .add_dependency(
                &Bucket::Implementation,
                Coordinate::new("org.example", "lib"),
            )
            .unwrap_err();
        assert!(matches!(err, ProjectError::UnknownBucket { .. }));
    }

    #[test]
    fn test_configure_unknown_step() {
        let mut project = InMemoryProject::new("app");
        let err = project.set_step_enabled("bootJar", false).unwrap_err();
        assert!(matches!(err, ProjectError::UnknownStep { step } if step == "bootJar"));
    }

    #[test]
    fn test_exclusion_applies_to_later_additions() {
        let mut project = InMemoryProject::new("app").with_plugin(Capability::Java);
        project
            .exclude_dependency(
                &Bucket::Implementation,
                Exclusion::new("org.springframework", "spring-webmvc"),
            )
            .unwrap();
        project
            .add_dependency(
                &Bucket::Implementation,
                Coordinate::new("org.springframework", "spring-webmvc"),
            )
            .unwrap();
        project
            .add_dependency(
                &Bucket::Implementation,
                Coordinate::new("org.springframework", "spring-webflux"),
            )
            .unwrap();

        let deps = project.dependencies(&Bucket::Implementation);
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].artifact(), "spring-webflux");
    }

    #[test]
    fn test_step_order() {
        let project = InMemoryProject::new("app").with_plugin(Capability::Java);
        let order = project.step_order().unwrap();
        let pos = |s: &str| order.iter().position(|o| o == s).unwrap();

        assert!(pos("compileJava") < pos("classes"));
        assert!(pos("classes") < pos("jar"));
        assert!(pos("testClasses") < pos("test"));
        assert!(pos("assemble") < pos("build"));
    }

    #[test]
    fn test_step_order_cycle() {
        let mut project = InMemoryProject::new("app").with_plugin(Capability::Java);
        project
            .configure_step("compileJava", StepConfig::new().depends_on("jar"))
            .unwrap();
        assert!(matches!(
            project.step_order(),
            Err(ProjectError::StepCycle { .. })
        ));
    }

    #[test]
    fn test_step_order_dangling_dependency() {
        let mut project = InMemoryProject::new("app").with_plugin(Capability::Java);
        project
            .configure_step("jar", StepConfig::new().depends_on("bootJar"))
            .unwrap();
        assert!(matches!(
            project.step_order(),
            Err(ProjectError::UnknownStep { step }) if step == "bootJar"
        ));
    }

    #[test]
    fn test_publishing_requires_plugin() {
        let mut project = InMemoryProject::new("app");
        assert!(matches!(
            project.add_repository(Repository::MavenLocal),
            Err(ProjectError::PublishingUnavailable)
        ));

        let mut project = project.with_plugin(Capability::MavenPublish);
        project.add_repository(Repository::MavenLocal).unwrap();
        assert_eq!(project.repositories().len(), 1);
    }

    #[test]
    fn test_remove_artifacts() {
        let mut project = InMemoryProject::new("app")
            .with_plugin(Capability::Java)
            .with_plugin(Capability::Distribution)
            .with_plugin(Capability::SpringBoot);

        let removed = project.remove_artifacts(&|a| a.is_superfluous());
        assert_eq!(removed, 3);
        let names: Vec<String> = project.artifacts().iter().map(|a| a.to_string()).collect();
        assert_eq!(names, vec!["app.jar", "app.zip"]);
    }
}
