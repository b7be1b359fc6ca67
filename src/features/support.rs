//! Helpers shared by feature definitions.

use crate::core::capability::Capability;
use crate::core::coordinate::{Bucket, Coordinate};
use crate::core::project::{Project, ProjectError};
use crate::core::step::{Setting, Settings, StepConfig};
use crate::ops::report::Report;

/// Add coordinates to a bucket and record them on the report.
pub(crate) fn add_dependencies<S: AsRef<str>>(
    project: &mut dyn Project,
    bucket: &Bucket,
    coordinates: &[S],
    report: Report,
) -> Result<Report, ProjectError> {
    coordinates.iter().try_fold(report, |report, coordinate| {
        let coordinate = Coordinate::parse(coordinate.as_ref())?;
        project.add_dependency(bucket, coordinate.clone())?;
        Ok(report.with_dependency(bucket, &coordinate))
    })
}

/// Activate a plugin and record it on the report.
pub(crate) fn apply_plugin(
    project: &mut dyn Project,
    capability: Capability,
    report: Report,
) -> Result<Report, ProjectError> {
    project.activate_capability(&capability)?;
    Ok(report.with_plugin(capability.id()))
}

/// Configure a step, registering it first when it does not exist yet.
pub(crate) fn register_or_configure(
    project: &mut dyn Project,
    name: &str,
    config: StepConfig,
) -> Result<(), ProjectError> {
    if project.has_step(name) {
        project.configure_step(name, config)
    } else {
        project.register_step(name, config)
    }
}

/// Build a settings map from key/value pairs.
pub(crate) fn settings<const N: usize>(pairs: [(&str, Setting); N]) -> Settings {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// The project's version, as a build tool reports an unset one.
pub(crate) fn version_or_unspecified(project: &dyn Project) -> String {
    project.version().unwrap_or("unspecified").to_string()
}
