//! Java basics: default plugins, Java defaults and AsciiDoc documentation.

use tracing::info;

use crate::config::{apply_coordinates, EffectiveConfiguration, OptionKey};
use crate::core::capability::Capability;
use crate::core::project::{Project, ProjectError};
use crate::core::step::{Setting, StepConfig};
use crate::features::support::{apply_plugin, settings, version_or_unspecified};
use crate::features::trait_def::{Feature, FeatureGroup, Trigger};
use crate::ops::report::Report;

/// Directory REST Docs snippets are generated into.
pub const SNIPPETS_DIR: &str = "build/generated-snippets";

/// Applies `java` and `maven-publish`.
pub struct DefaultPlugins;

impl Feature for DefaultPlugins {
    fn name(&self) -> &'static str {
        "aurora.applyDefaultPlugins"
    }

    fn group(&self) -> FeatureGroup {
        FeatureGroup::JavaBasics
    }

    fn trigger(&self) -> Trigger {
        Trigger::Flag(OptionKey::ApplyDefaultPlugins)
    }

    fn apply(
        &self,
        project: &mut dyn Project,
        _config: &EffectiveConfiguration,
    ) -> Result<Report, ProjectError> {
        info!("Apply java and maven-publish plugins");

        let report = Report::new(self.name());
        let report = apply_plugin(project, Capability::Java, report)?;
        apply_plugin(project, Capability::MavenPublish, report)
    }
}

/// Sets source compatibility and settles group and version.
pub struct JavaDefaults;

impl Feature for JavaDefaults {
    fn name(&self) -> &'static str {
        "aurora.applyJavaDefaults"
    }

    fn group(&self) -> FeatureGroup {
        FeatureGroup::JavaBasics
    }

    fn trigger(&self) -> Trigger {
        Trigger::Flag(OptionKey::ApplyJavaDefaults)
    }

    fn apply(
        &self,
        project: &mut dyn Project,
        config: &EffectiveConfiguration,
    ) -> Result<Report, ProjectError> {
        let compatibility = config.java_source_compatibility.as_str();

        project.set_extra("sourceCompatibility", compatibility);
        if project.has_extension("java") {
            project.configure_extension(
                "java",
                settings([("sourceCompatibility", compatibility.into())]),
            )?;
        }

        let coordinates = apply_coordinates(project);
        info!(
            "Using group {} and version {}",
            coordinates.group, coordinates.version
        );

        Ok(Report::new(self.name())
            .described("Set groupId, version and add sourceCompatibility"))
    }
}

/// Renders AsciiDoc documentation into the jar.
pub struct AsciiDoc;

impl Feature for AsciiDoc {
    fn name(&self) -> &'static str {
        "plugin org.asciidoctor.convert"
    }

    fn group(&self) -> FeatureGroup {
        FeatureGroup::JavaBasics
    }

    fn trigger(&self) -> Trigger {
        Trigger::Capability(Capability::AsciiDoctor)
    }

    fn apply(
        &self,
        project: &mut dyn Project,
        _config: &EffectiveConfiguration,
    ) -> Result<Report, ProjectError> {
        info!("Apply asciiDoctor support");

        let version = version_or_unspecified(project);
        project.set_extra("snippetsDir", SNIPPETS_DIR);

        project.configure_step(
            "asciidoctor",
            StepConfig::new()
                .set(
                    "attributes",
                    Setting::List(vec![
                        format!("snippets={}", SNIPPETS_DIR),
                        format!("version={}", version),
                    ]),
                )
                .set("inputs", SNIPPETS_DIR)
                .set("outputDir", "build/asciidoc")
                .set("sourceDir", "src/main/asciidoc")
                .depends_on("test"),
        )?;

        project.configure_step(
            "jar",
            StepConfig::new()
                .set("from", "build/asciidoc/html5")
                .set("into", "static/docs")
                .depends_on("asciidoctor"),
        )?;

        Ok(Report::new(self.name()).described("configure html5 report in static/docs"))
    }
}
