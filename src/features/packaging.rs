//! Delivery bundle packaging.
//!
//! The delivery bundle is a zip archive classified `Leveransepakke`. It wraps
//! either the bootable jar or the plain jar with its start scripts, never
//! both. Which one is decided by `useBootJar`, which the framework group has
//! already acted on by the time packaging runs.

use tracing::info;

use crate::config::{EffectiveConfiguration, OptionKey};
use crate::core::artifact::Artifact;
use crate::core::capability::Capability;
use crate::core::project::{Project, ProjectError};
use crate::core::step::StepConfig;
use crate::features::support::{apply_plugin, settings};
use crate::features::trait_def::{Feature, FeatureGroup, Trigger};
use crate::ops::report::Report;

/// Classifier of the delivery bundle archive.
pub const BUNDLE_CLASSIFIER: &str = "Leveransepakke";

/// Packages the project as a delivery bundle.
pub struct DeliveryBundle;

impl DeliveryBundle {
    fn apply_boot_jar(&self, project: &mut dyn Project) -> Result<Report, ProjectError> {
        info!("Apply bootjar delivery bundle");

        let report = apply_plugin(project, Capability::Distribution, Report::new(self.name()))?;
        project.configure_extension(
            "distributions",
            settings([
                ("main.contents.lib", "build/libs".into()),
                ("main.contents.metadata", "src/main/dist/metadata".into()),
            ]),
        )?;
        project.configure_step(
            "distZip",
            StepConfig::new()
                .set("archiveClassifier", BUNDLE_CLASSIFIER)
                .set("duplicatesStrategy", "exclude")
                .depends_on("bootJar"),
        )?;
        project.set_step_enabled("jar", false)?;
        project.set_step_enabled("bootJar", true)?;
        disable_superfluous(project)?;

        Ok(report.described("Configure Leveransepakke for bootJar"))
    }

    fn apply_classic(&self, project: &mut dyn Project) -> Result<Report, ProjectError> {
        info!("Apply standard delivery bundle");

        let report = apply_plugin(project, Capability::Application, Report::new(self.name()))?;
        project.configure_step(
            "distZip",
            StepConfig::new()
                .set("archiveClassifier", BUNDLE_CLASSIFIER)
                .depends_on("jar"),
        )?;
        project.set_step_enabled("startScripts", false)?;
        project.set_step_enabled("jar", true)?;
        project.disable_step_if_present("bootJar")?;
        disable_superfluous(project)?;

        Ok(report.described("Configure Leveransepakke"))
    }
}

/// Drop tar archives and boot duplicates, and classify the bundle zip.
fn disable_superfluous(project: &mut dyn Project) -> Result<(), ProjectError> {
    project.disable_step_if_present("distTar")?;
    project.remove_artifacts(&|a| a.is_superfluous());

    let name = project.name().to_string();
    project.remove_artifacts(&|a| a.producer.as_deref() == Some("distZip"));
    project.add_artifact(
        Artifact::new(name, "zip")
            .with_classifier(BUNDLE_CLASSIFIER)
            .produced_by("distZip"),
    );
    Ok(())
}

impl Feature for DeliveryBundle {
    fn name(&self) -> &'static str {
        "aurora.applyDeliveryBundleConfig"
    }

    fn group(&self) -> FeatureGroup {
        FeatureGroup::Packaging
    }

    fn trigger(&self) -> Trigger {
        Trigger::Flag(OptionKey::ApplyDeliveryBundleConfig)
    }

    fn apply(
        &self,
        project: &mut dyn Project,
        config: &EffectiveConfiguration,
    ) -> Result<Report, ProjectError> {
        if config.use_boot_jar {
            self.apply_boot_jar(project)
        } else {
            self.apply_classic(project)
        }
    }
}
