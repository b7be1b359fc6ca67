//! Group and version defaulting.

use serde::Serialize;
use uuid::Uuid;

use crate::core::project::Project;

/// Prefix of generated placeholder groups.
pub const PLACEHOLDER_GROUP_PREFIX: &str = "no.skatteetaten.aurora.noop";

/// Version used when nothing else supplies one.
pub const FALLBACK_VERSION: &str = "local-SNAPSHOT";

/// Resolved project coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coordinates {
    pub group: String,
    pub version: String,
}

/// Resolve group and version for a project.
///
/// An explicit project value wins, then the `groupId`/`version` property,
/// then a fallback. The fallback group is unique per call.
pub fn resolve_coordinates(project: &dyn Project) -> Coordinates {
    let group = project
        .group()
        .filter(|g| !g.trim().is_empty())
        .or_else(|| project.property("groupId"))
        .map(str::to_string)
        .unwrap_or_else(placeholder_group);

    let version = project
        .version()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| project.property("version"))
        .unwrap_or(FALLBACK_VERSION)
        .to_string();

    Coordinates { group, version }
}

/// Resolve coordinates and write them back to the project.
pub fn apply_coordinates(project: &mut dyn Project) -> Coordinates {
    let coordinates = resolve_coordinates(project);
    project.set_group(&coordinates.group);
    project.set_version(&coordinates.version);
    coordinates
}

/// A fresh placeholder group.
pub fn placeholder_group() -> String {
    format!("{}.{}", PLACEHOLDER_GROUP_PREFIX, Uuid::new_v4().simple())
}

/// Collapse a doubled snapshot suffix to a single one.
pub fn publication_version(version: &str) -> String {
    match version.strip_suffix("-SNAPSHOT-SNAPSHOT") {
        Some(base) => format!("{}-SNAPSHOT", base),
        None => version.to_string(),
    }
}
