//! Full evaluation of a project.
//!
//! One evaluation runs these steps in order:
//!
//! 1. activate `maven-publish`
//! 2. apply extension shortcuts
//! 3. resolve the effective configuration
//! 4. run the standard registry
//! 5. default the default steps to `clean install`
//! 6. register the diagnostic steps
//!
//! The configuration is resolved once and never changes afterwards.

use serde::Serialize;
use tracing::info;

use crate::config::{
    apply_shortcuts, resolve, EffectiveConfiguration, ExtensionOverrides, PropertyOverrides,
};
use crate::core::capability::Capability;
use crate::core::project::{Project, ProjectError};
use crate::core::step::{Setting, StepConfig};
use crate::features::CapabilityRegistry;
use crate::ops::report::{Report, ReportPrinter};
use crate::ops::runner::FeatureRunner;

/// Steps run when the project names none.
pub const DEFAULT_STEPS: [&str; 2] = ["clean", "install"];

/// Outcome of one evaluation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// The resolved configuration
    pub configuration: EffectiveConfiguration,
    /// Capabilities activated by shortcuts
    pub shortcuts_applied: Vec<Capability>,
    /// One entry per applied feature, in invocation order
    pub reports: Vec<Report>,
}

impl Evaluation {
    /// The report as the `aurora` step prints it.
    pub fn report_text(&self) -> String {
        ReportPrinter::format(&self.reports)
    }
}

/// Evaluate a project with the standard registry.
///
/// Property overrides are read from the project's own properties.
pub fn evaluate(
    project: &mut dyn Project,
    extension: &ExtensionOverrides,
) -> Result<Evaluation, ProjectError> {
    evaluate_with(&CapabilityRegistry::standard(), project, extension)
}

/// Activate `maven-publish`, apply the shortcuts and resolve the
/// configuration without running any feature.
///
/// Returns the configuration and the capabilities the shortcuts activated.
pub fn resolve_configuration(
    project: &mut dyn Project,
    extension: &ExtensionOverrides,
) -> Result<(EffectiveConfiguration, Vec<Capability>), ProjectError> {
    project.activate_capability(&Capability::MavenPublish)?;

    let (extension, shortcuts_applied) = apply_shortcuts(extension, project)?;
    let properties = PropertyOverrides::from_properties(project.properties());
    Ok((resolve(&extension, &properties), shortcuts_applied))
}

/// Evaluate a project with a custom registry.
pub fn evaluate_with(
    registry: &CapabilityRegistry,
    project: &mut dyn Project,
    extension: &ExtensionOverrides,
) -> Result<Evaluation, ProjectError> {
    let (configuration, shortcuts_applied) = resolve_configuration(project, extension)?;

    let reports = FeatureRunner::run(registry, project, &configuration)?;

    if project.default_steps().is_empty() {
        info!("Apply clean and install as default tasks");
        project.set_default_steps(DEFAULT_STEPS.iter().map(|s| s.to_string()).collect());
    }
    register_diagnostic_steps(project)?;

    Ok(Evaluation {
        configuration,
        shortcuts_applied,
        reports,
    })
}

fn register_diagnostic_steps(project: &mut dyn Project) -> Result<(), ProjectError> {
    let steps = [
        (
            "aurora",
            StepConfig::new().described("Print the conventions applied to this project"),
        ),
        (
            "auroraConfiguration",
            StepConfig::new().described("Print the resolved convention configuration"),
        ),
        (
            "auroraCyclonedxBom",
            StepConfig::new()
                .described("Generate a CycloneDX software bill of materials")
                .set(
                    "includeConfigs",
                    Setting::List(vec!["runtimeClasspath".into()]),
                )
                .set("projectType", "application")
                .set("schemaVersion", "1.4")
                .set("destination", "build/reports")
                .set("outputName", "bom"),
        ),
    ];

    for (name, config) in steps {
        if !project.has_step(name) {
            project.register_step(name, config)?;
        }
    }
    Ok(())
}
