//! Maven publishing of the delivery artifacts.

use tracing::{info, warn};
use url::Url;

use crate::config::coordinates::{publication_version, FALLBACK_VERSION, PLACEHOLDER_GROUP_PREFIX};
use crate::config::{EffectiveConfiguration, OptionKey};
use crate::core::project::{Project, ProjectError};
use crate::core::publishing::{Credentials, Publication, Repository};
use crate::core::step::StepConfig;
use crate::features::support::register_or_configure;
use crate::features::trait_def::{Feature, FeatureGroup, Trigger};
use crate::ops::report::Report;

/// Name of the publication carrying the delivery artifacts.
pub const PUBLICATION_NAME: &str = "leveranse";

const MISSING_CREDENTIALS: &str =
    "One of the following properties are missing in your .gradle file\n \
     repositoryUsername, repositoryPassword, repositoryReleaseUrl,\n \
     repositorySnapshotUrl, only local depoy possible";

/// Remote repository settings read from project properties.
#[derive(Clone, PartialEq, Eq)]
pub struct DeployTarget {
    pub username: String,
    pub password: String,
    pub release_url: String,
    pub snapshot_url: String,
}

impl DeployTarget {
    /// Read the target from properties. `None` when any of them is missing.
    pub fn from_project(project: &dyn Project) -> Option<Self> {
        let get = |key: &str| project.property(key).map(str::to_string);
        Some(DeployTarget {
            username: get("repositoryUsername")?,
            password: get("repositoryPassword")?,
            release_url: get("repositoryReleaseUrl")?,
            snapshot_url: get("repositorySnapshotUrl")?,
        })
    }

    /// Repository for a version: snapshots and releases go to separate
    /// repositories.
    pub fn repository(&self, version: &str) -> Result<Repository, ProjectError> {
        let (name, url) = if version.ends_with("SNAPSHOT") {
            ("snapshotRepository", &self.snapshot_url)
        } else {
            ("repository", &self.release_url)
        };

        let parsed = Url::parse(url).map_err(|source| ProjectError::InvalidRepositoryUrl {
            repository: name.to_string(),
            url: url.clone(),
            source,
        })?;

        Ok(Repository::Remote {
            name: name.to_string(),
            url: parsed,
            allow_insecure_protocol: true,
            credentials: Credentials {
                username: self.username.clone(),
                password: self.password.clone(),
            },
        })
    }
}

/// Publishes the jar, the delivery bundle and custom artifacts.
pub struct MavenDeployer;

impl MavenDeployer {
    fn publication(project: &dyn Project) -> Publication {
        let mut artifacts = Vec::new();
        if project.has_step("distZip") {
            artifacts.push("distZip zip".to_string());
        }
        artifacts.extend(
            project
                .artifacts()
                .iter()
                .filter(|a| a.is_custom())
                .map(|a| a.to_string()),
        );
        if project.has_step("stubsJar") {
            artifacts.push("stubsJar".to_string());
        }

        let group = project
            .group()
            .filter(|g| !g.trim().is_empty())
            .unwrap_or(PLACEHOLDER_GROUP_PREFIX);
        let version = project
            .version()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(FALLBACK_VERSION);
        Publication {
            name: PUBLICATION_NAME.to_string(),
            component: "java".to_string(),
            group_id: group.to_string(),
            artifact_id: project.name().to_string(),
            version: publication_version(version),
            artifacts,
            runtime_version_mapping: true,
        }
    }
}

impl Feature for MavenDeployer {
    fn name(&self) -> &'static str {
        "aurora.applyMavenDeployer"
    }

    fn group(&self) -> FeatureGroup {
        FeatureGroup::Publishing
    }

    fn trigger(&self) -> Trigger {
        Trigger::Flag(OptionKey::ApplyMavenDeployer)
    }

    fn apply(
        &self,
        project: &mut dyn Project,
        _config: &EffectiveConfiguration,
    ) -> Result<Report, ProjectError> {
        let target = DeployTarget::from_project(project);
        let publication = Self::publication(project);
        let version = publication.version.clone();

        project.add_publication(publication)?;
        project.add_repository(Repository::MavenLocal)?;

        let report = Report::new(self.name());
        let Some(target) = target else {
            warn!("{}", MISSING_CREDENTIALS);
            return Ok(report.described(MISSING_CREDENTIALS));
        };

        info!("Apply maven deployment");
        project.add_repository(target.repository(&version)?)?;
        register_or_configure(
            project,
            "upload",
            StepConfig::new()
                .described("Build and deploy artifacts to Nexus")
                .depends_on("publish")
                .must_run_after("clean"),
        )?;

        Ok(report.described(
            "add deploy task and configure from repository* properties in .gradle.properties.",
        ))
    }
}
