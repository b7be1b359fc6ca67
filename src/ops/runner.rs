//! Feature runner.

use tracing::debug;

use crate::config::EffectiveConfiguration;
use crate::core::project::{Project, ProjectError};
use crate::features::CapabilityRegistry;
use crate::ops::report::Report;

/// Applies every applicable feature of a registry, in registry order.
pub struct FeatureRunner;

impl FeatureRunner {
    /// Run the registry against a project.
    ///
    /// Applicability is checked right before each feature runs, so a feature
    /// sees the capabilities activated by the features before it. Reports
    /// come back in invocation order. The first error aborts the run.
    pub fn run(
        registry: &CapabilityRegistry,
        project: &mut dyn Project,
        config: &EffectiveConfiguration,
    ) -> Result<Vec<Report>, ProjectError> {
        let mut reports = Vec::new();

        for feature in registry.iter() {
            if !feature.applies_when(project, config) {
                debug!("Skipping {} ({})", feature.name(), feature.group());
                continue;
            }
            reports.push(feature.apply(project, config)?);
        }

        Ok(reports)
    }
}
