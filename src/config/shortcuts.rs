//! Shortcut toggles.
//!
//! Shortcuts on the extension object (`useKotlin`, `useSpringBoot`,
//! `useAuroraDefaults`, ...) apply missing plugins before options are
//! resolved. They never touch flat properties.

use tracing::info;

use crate::config::extension::ExtensionOverrides;
use crate::core::capability::Capability;
use crate::core::project::{Project, ProjectError};

/// Activate a capability when it is absent, logging the activation.
fn apply_missing(
    project: &mut dyn Project,
    capability: Capability,
    applied: &mut Vec<Capability>,
) -> Result<(), ProjectError> {
    if project.activate_capability(&capability)? {
        info!("Applied missing plugin: {}", capability.display_name());
        applied.push(capability);
    }
    Ok(())
}

/// Apply the enabled shortcuts to a project.
///
/// Returns the extension as the shortcuts leave it: `useAuroraDefaults`
/// turns the checkstyle feature on unless it was set explicitly. The
/// capabilities that had to be activated are returned alongside.
pub fn apply_shortcuts(
    extension: &ExtensionOverrides,
    project: &mut dyn Project,
) -> Result<(ExtensionOverrides, Vec<Capability>), ProjectError> {
    let mut extension = extension.clone();
    let mut applied = Vec::new();

    if extension.use_aurora_defaults {
        use_git_properties(project, &mut applied)?;
        apply_missing(project, Capability::LatestVersions, &mut applied)?;
        apply_missing(project, Capability::Versions, &mut applied)?;
        apply_missing(project, Capability::Sonar, &mut applied)?;
        apply_missing(project, Capability::TestLogger, &mut applied)?;
        extension.features.checkstyle_plugin.get_or_insert(true);
    }

    if extension.use_latest_versions {
        apply_missing(project, Capability::LatestVersions, &mut applied)?;
    }
    if extension.use_git_properties {
        use_git_properties(project, &mut applied)?;
    }
    if extension.use_gradle_logger {
        apply_missing(project, Capability::TestLogger, &mut applied)?;
    }
    if extension.use_sonar {
        apply_missing(project, Capability::Sonar, &mut applied)?;
    }
    if extension.use_asciidoctor {
        apply_missing(project, Capability::AsciiDoctor, &mut applied)?;
    }
    if extension.use_versions {
        apply_missing(project, Capability::Versions, &mut applied)?;
    }
    if extension.use_pitest {
        apply_missing(project, Capability::Pitest, &mut applied)?;
    }

    if extension.uses_kotlin() {
        apply_missing(project, Capability::KotlinJvm, &mut applied)?;
        if project.has_capability(&Capability::SpringBoot) {
            apply_missing(project, Capability::KotlinSpring, &mut applied)?;
        }
        if extension.kotlin().is_some_and(|k| k.kt_lint) {
            apply_missing(project, Capability::KtLint, &mut applied)?;
        }
    }

    if extension.uses_spring_boot() {
        apply_missing(project, Capability::SpringBoot, &mut applied)?;
        if project.has_capability(&Capability::KotlinJvm) {
            apply_missing(project, Capability::KotlinSpring, &mut applied)?;
        }
        if extension.spring_boot().is_some_and(|s| s.cloud_contract) {
            apply_missing(project, Capability::CloudContract, &mut applied)?;
        }
    }

    Ok((extension, applied))
}

fn use_git_properties(
    project: &mut dyn Project,
    applied: &mut Vec<Capability>,
) -> Result<(), ProjectError> {
    if project.has_capability(&Capability::GitProperties) {
        return Ok(());
    }
    if project.directory().join(".git").exists() {
        apply_missing(project, Capability::GitProperties, applied)
    } else {
        info!(
            "Cannot apply {}! No .git Directory!",
            Capability::GitProperties.display_name()
        );
        Ok(())
    }
}
