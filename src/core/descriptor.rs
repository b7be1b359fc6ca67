//! `aurora.toml` project descriptor.
//!
//! The descriptor is plain data standing in for a build script: the project's
//! identity and applied plugins, its flat properties, and the structured
//! `[aurora]` extension block.
//!
//! ```toml
//! [project]
//! name = "demo"
//! group = "no.skatteetaten.demo"
//! plugins = ["org.springframework.boot", "org.jetbrains.kotlin.jvm"]
//!
//! [properties]
//! aurora.useWebFlux = true
//! repositoryUsername = "deployer"
//!
//! [aurora]
//! useKotlin = { ktLint = true }
//! versions = { javaSourceCompatibility = "17" }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::ExtensionOverrides;
use crate::core::capability::Capability;
use crate::core::memory::InMemoryProject;

/// Canonical descriptor file name.
pub const DESCRIPTOR_FILE: &str = "aurora.toml";

/// The `[project]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ProjectSection {
    /// Project name
    pub name: String,
    /// Explicit group
    #[serde(default)]
    pub group: Option<String>,
    /// Explicit version
    #[serde(default)]
    pub version: Option<String>,
    /// Project directory, relative to the descriptor
    #[serde(default)]
    pub directory: Option<PathBuf>,
    /// Plugins applied by the build script
    #[serde(default)]
    pub plugins: Vec<Capability>,
    /// Steps run when none are named
    #[serde(default)]
    pub default_steps: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDescriptor {
    project: ProjectSection,
    #[serde(default)]
    properties: toml::Table,
    #[serde(default)]
    aurora: ExtensionOverrides,
}

/// A parsed project descriptor.
#[derive(Debug, Clone)]
pub struct Descriptor {
    pub project: ProjectSection,
    /// Flat properties, nested keys joined with `.`
    pub properties: BTreeMap<String, String>,
    pub aurora: ExtensionOverrides,
    /// Directory containing the descriptor
    pub descriptor_dir: PathBuf,
}

impl Descriptor {
    /// Load a descriptor from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read descriptor: {}", path.display()))?;

        Self::parse(&content, path)
    }

    /// Parse descriptor content.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let raw: RawDescriptor = toml::from_str(content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if raw.project.name.trim().is_empty() {
            anyhow::bail!("descriptor at {} has an empty project name", path.display());
        }

        let mut properties = BTreeMap::new();
        flatten(None, &raw.properties, &mut properties);

        Ok(Descriptor {
            project: raw.project,
            properties,
            aurora: raw.aurora,
            descriptor_dir: path.parent().unwrap_or(Path::new(".")).to_path_buf(),
        })
    }

    /// Set a property, replacing any value from the file.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    /// The project directory.
    pub fn project_dir(&self) -> PathBuf {
        match &self.project.directory {
            Some(dir) => self.descriptor_dir.join(dir),
            None => self.descriptor_dir.clone(),
        }
    }

    /// Build the in-memory project the descriptor describes.
    pub fn to_project(&self) -> InMemoryProject {
        let mut project =
            InMemoryProject::new(self.project.name.as_str()).with_directory(self.project_dir());
        if let Some(group) = &self.project.group {
            project = project.with_group(group.as_str());
        }
        if let Some(version) = &self.project.version {
            project = project.with_version(version.as_str());
        }
        for (key, value) in &self.properties {
            project = project.with_property(key.as_str(), value.as_str());
        }
        for plugin in &self.project.plugins {
            project = project.with_plugin(plugin.clone());
        }
        project.with_default_steps(self.project.default_steps.clone())
    }
}

/// Flatten nested property tables into dotted keys.
fn flatten(prefix: Option<&str>, table: &toml::Table, out: &mut BTreeMap<String, String>) {
    for (key, value) in table {
        let key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };
        match value {
            toml::Value::Table(nested) => flatten(Some(&key), nested, out),
            toml::Value::String(s) => {
                out.insert(key, s.clone());
            }
            other => {
                out.insert(key, other.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::project::Project;
    use crate::test_support::{create_test_project, minimal_descriptor, spring_descriptor};

    #[test]
    fn test_parse_descriptor() {
        let content = r#"
[project]
name = "demo"
group = "no.skatteetaten.demo"
plugins = ["org.springframework.boot", "com.example.custom"]
defaultSteps = ["build"]

[properties]
aurora.useWebFlux = true
"aurora.springDevTools" = "TRUE"
repositoryUsername = "deployer"

[aurora]
useKotlin = { ktLint = true }
versions = { javaSourceCompatibility = "17" }
"#;
        let descriptor = Descriptor::parse(content, Path::new("/work/aurora.toml")).unwrap();

        assert_eq!(descriptor.project.name, "demo");
        assert_eq!(
            descriptor.project.plugins,
            vec![
                Capability::SpringBoot,
                Capability::Other("com.example.custom".into())
            ]
        );
        assert_eq!(descriptor.properties["aurora.useWebFlux"], "true");
        assert_eq!(descriptor.properties["aurora.springDevTools"], "TRUE");
        assert_eq!(descriptor.properties["repositoryUsername"], "deployer");
        assert!(descriptor.aurora.uses_kotlin());
        let versions = &descriptor.aurora.versions;
        assert_eq!(
            versions.java_source_compatibility.as_deref(),
            Some("17")
        );
        assert_eq!(descriptor.descriptor_dir, PathBuf::from("/work"));
    }

    #[test]
    fn test_to_project() {
        let content = r#"
[project]
name = "demo"
version = "1.0.0"
directory = "app"
plugins = ["java"]

[properties]
groupId = "no.skatteetaten.demo"
"#;
        let descriptor = Descriptor::parse(content, Path::new("/work/aurora.toml")).unwrap();
        let project = descriptor.to_project();

        assert_eq!(project.name(), "demo");
        assert_eq!(project.version(), Some("1.0.0"));
        assert_eq!(project.group(), None);
        assert_eq!(project.directory(), Path::new("/work/app"));
        assert!(project.has_capability(&Capability::Java));
        assert_eq!(project.property("groupId"), Some("no.skatteetaten.demo"));
    }

    #[test]
    fn test_load_from_disk() {
        let tmp = create_test_project(&spring_descriptor("demo", &[("aurora.useWebFlux", "true")]));
        let descriptor = Descriptor::load(&tmp.path().join(DESCRIPTOR_FILE)).unwrap();

        assert_eq!(descriptor.project.plugins, vec![Capability::SpringBoot]);
        assert_eq!(descriptor.properties["aurora.useWebFlux"], "true");
        assert_eq!(descriptor.project_dir(), tmp.path());
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = create_test_project(&minimal_descriptor("demo"));
        let err = Descriptor::load(&tmp.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read descriptor"));
    }

    #[test]
    fn test_set_property_overrides_file() {
        let content = "[project]\nname = \"demo\"\n[properties]\nversion = \"1\"\n";
        let mut descriptor = Descriptor::parse(content, Path::new("aurora.toml")).unwrap();
        descriptor.set_property("version", "2");
        assert_eq!(descriptor.properties["version"], "2");
    }

    #[test]
    fn test_missing_project_section() {
        let err = Descriptor::parse("[properties]\n", Path::new("aurora.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to parse"));
    }

    #[test]
    fn test_empty_name() {
        let err = Descriptor::parse("[project]\nname = \" \"\n", Path::new("aurora.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("empty project name"));
    }

    #[test]
    fn test_unknown_extension_field() {
        let content = "[project]\nname = \"demo\"\n[aurora]\nuseNothing = true\n";
        assert!(Descriptor::parse(content, Path::new("aurora.toml")).is_err());
    }

    #[test]
    fn test_misspelled_version_key() {
        let content = r#"
[project]
name = "demo"

[aurora.versions]
junit5Versoin = "5.9.0"
"#;
        assert!(Descriptor::parse(content, Path::new("aurora.toml")).is_err());
    }

    #[test]
    fn test_misspelled_feature_key() {
        let content = "[project]\nname = \"demo\"\n[aurora.features]\nspok = true\n";
        assert!(Descriptor::parse(content, Path::new("aurora.toml")).is_err());
    }

    #[test]
    fn test_misspelled_spring_boot_key() {
        let content = r#"
[project]
name = "demo"

[aurora.useSpringBoot]
webfluxEnabled = true
"#;
        assert!(Descriptor::parse(content, Path::new("aurora.toml")).is_err());
    }

    #[test]
    fn test_snake_case_project_key_rejected() {
        let content = "[project]\nname = \"demo\"\ndefault_steps = [\"build\"]\n";
        assert!(Descriptor::parse(content, Path::new("aurora.toml")).is_err());
    }
}
