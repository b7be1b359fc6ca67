//! Publication and repository records for artifact publishing.

use serde::Serialize;
use url::Url;

/// Repository credentials.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A publishing target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Repository {
    /// The local repository on the build machine
    MavenLocal,
    /// A remote repository
    Remote {
        name: String,
        url: Url,
        allow_insecure_protocol: bool,
        credentials: Credentials,
    },
}

impl Repository {
    /// Repository name.
    pub fn name(&self) -> &str {
        match self {
            Repository::MavenLocal => "mavenLocal",
            Repository::Remote { name, .. } => name,
        }
    }
}

/// A publication of the project's artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Publication {
    /// Publication name
    pub name: String,
    /// Component published
    pub component: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    /// Extra artifacts published next to the component
    pub artifacts: Vec<String>,
    /// Resolve published dependency versions from the runtime resolution
    pub runtime_version_mapping: bool,
}
