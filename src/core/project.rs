//! The typed project interface conventions are applied through.
//!
//! Everything a feature may observe or change on the live build graph goes
//! through [`Project`]. Lookups by name that the build graph cannot satisfy
//! are errors, not silent no-ops: a feature referencing a step that does not
//! exist aborts the evaluation.

use std::collections::BTreeMap;
use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;

use crate::core::artifact::Artifact;
use crate::core::capability::Capability;
use crate::core::coordinate::{Bucket, Coordinate, Exclusion};
use crate::core::publishing::{Publication, Repository};
use crate::core::step::{Settings, Step, StepConfig, UpgradePolicy};

/// Failure raised by the build graph while a convention is being applied.
#[derive(Debug, Error, Diagnostic)]
pub enum ProjectError {
    #[error("step `{step}` not found")]
    #[diagnostic(
        code(aurora::project::unknown_step),
        help("the plugin that provides `{step}` is not applied to this project")
    )]
    UnknownStep { step: String },

    #[error("step `{step}` already exists")]
    #[diagnostic(code(aurora::project::duplicate_step))]
    DuplicateStep { step: String },

    #[error("dependency bucket `{bucket}` not found")]
    #[diagnostic(
        code(aurora::project::unknown_bucket),
        help("apply the `java` plugin or enable `applyDefaultPlugins`")
    )]
    UnknownBucket { bucket: String },

    #[error("extension `{extension}` not found")]
    #[diagnostic(code(aurora::project::unknown_extension))]
    UnknownExtension { extension: String },

    #[error("malformed dependency coordinate `{coordinate}`")]
    #[diagnostic(
        code(aurora::project::malformed_coordinate),
        help("coordinates have the form group:artifact[:version]")
    )]
    MalformedCoordinate { coordinate: String },

    #[error("invalid URL `{url}` for repository `{repository}`")]
    #[diagnostic(code(aurora::project::invalid_repository_url))]
    InvalidRepositoryUrl {
        repository: String,
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("publishing is not available on this project")]
    #[diagnostic(
        code(aurora::project::publishing_unavailable),
        help("apply the `maven-publish` plugin first")
    )]
    PublishingUnavailable,

    #[error("step dependency cycle involving `{step}`")]
    #[diagnostic(code(aurora::project::step_cycle))]
    StepCycle { step: String },
}

/// Read and write access to one project's build graph.
pub trait Project {
    /// Project name.
    fn name(&self) -> &str;

    /// Project directory.
    fn directory(&self) -> &Path;

    /// Explicitly assigned group, if any.
    fn group(&self) -> Option<&str>;

    /// Explicitly assigned version, if any.
    fn version(&self) -> Option<&str>;

    fn set_group(&mut self, group: &str);

    fn set_version(&mut self, version: &str);

    /// Look up a project property.
    fn property(&self, key: &str) -> Option<&str> {
        self.properties().get(key).map(String::as_str)
    }

    /// All project properties (flat, string-valued).
    fn properties(&self) -> &BTreeMap<String, String>;

    /// Record an extra property.
    fn set_extra(&mut self, key: &str, value: &str);

    fn has_capability(&self, capability: &Capability) -> bool;

    /// Active capabilities in activation order.
    fn capabilities(&self) -> Vec<Capability>;

    /// Activate a capability. Returns false when it was already active.
    fn activate_capability(&mut self, capability: &Capability) -> Result<bool, ProjectError>;

    fn has_step(&self, name: &str) -> bool {
        self.step(name).is_some()
    }

    fn step(&self, name: &str) -> Option<&Step>;

    /// Register a new step.
    fn register_step(&mut self, name: &str, config: StepConfig) -> Result<(), ProjectError>;

    /// Merge configuration into an existing step.
    fn configure_step(&mut self, name: &str, config: StepConfig) -> Result<(), ProjectError>;

    fn set_step_enabled(&mut self, name: &str, enabled: bool) -> Result<(), ProjectError> {
        self.configure_step(name, StepConfig::new().enabled(enabled))
    }

    /// Disable a step when it exists. Returns whether it did.
    fn disable_step_if_present(&mut self, name: &str) -> Result<bool, ProjectError> {
        if self.has_step(name) {
            self.set_step_enabled(name, false)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn has_extension(&self, name: &str) -> bool;

    /// Merge settings into a plugin extension.
    fn configure_extension(&mut self, name: &str, settings: Settings) -> Result<(), ProjectError>;

    /// Create a bucket. Creating an existing bucket is a no-op.
    fn create_bucket(&mut self, bucket: &Bucket);

    fn add_dependency(&mut self, bucket: &Bucket, coordinate: Coordinate)
        -> Result<(), ProjectError>;

    fn exclude_dependency(
        &mut self,
        bucket: &Bucket,
        exclusion: Exclusion,
    ) -> Result<(), ProjectError>;

    /// Effective coordinates in a bucket, with exclusions applied.
    fn dependencies(&self, bucket: &Bucket) -> Vec<Coordinate>;

    /// Exclusions registered on a bucket.
    fn exclusions(&self, bucket: &Bucket) -> Vec<Exclusion>;

    /// Import a BOM into dependency management.
    fn import_bom(&mut self, coordinate: Coordinate) -> Result<(), ProjectError>;

    /// Attach an upgrade candidate filter to a step.
    fn set_upgrade_policy(&mut self, step: &str, policy: UpgradePolicy)
        -> Result<(), ProjectError>;

    fn artifacts(&self) -> &[Artifact];

    fn add_artifact(&mut self, artifact: Artifact);

    /// Remove matching artifacts. Returns how many were removed.
    fn remove_artifacts(&mut self, predicate: &dyn Fn(&Artifact) -> bool) -> usize;

    fn add_publication(&mut self, publication: Publication) -> Result<(), ProjectError>;

    fn add_repository(&mut self, repository: Repository) -> Result<(), ProjectError>;

    fn default_steps(&self) -> &[String];

    fn set_default_steps(&mut self, steps: Vec<String>);
}
