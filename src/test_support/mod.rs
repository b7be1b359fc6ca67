//! Test utilities for Aurora unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use aurora::test_support::{create_test_project, minimal_descriptor};
//!
//! #[test]
//! fn test_example() {
//!     let tmp = create_test_project(&minimal_descriptor("demo"));
//!     let descriptor = Descriptor::load(&tmp.path().join("aurora.toml")).unwrap();
//!     // ...
//! }
//! ```

pub mod fixtures;

// Re-export fixtures for convenience
pub use fixtures::*;

use crate::core::descriptor::DESCRIPTOR_FILE;

/// Create a temporary project directory containing an `aurora.toml`.
///
/// Returns the TempDir handle - dropping it will clean up the directory.
pub fn create_test_project(descriptor: &str) -> tempfile::TempDir {
    let tmp = tempfile::TempDir::new().expect("failed to create temp dir");
    std::fs::write(tmp.path().join(DESCRIPTOR_FILE), descriptor)
        .expect("failed to write descriptor");
    tmp
}

/// Create a temporary project directory that is also a git checkout.
pub fn create_git_project(descriptor: &str) -> tempfile::TempDir {
    let tmp = create_test_project(descriptor);
    std::fs::create_dir(tmp.path().join(".git")).expect("failed to create .git");
    tmp
}

/// A descriptor with only a project name.
pub fn minimal_descriptor(name: &str) -> String {
    format!(
        r#"[project]
name = "{name}"
"#
    )
}

/// A Spring Boot descriptor with the given extra property lines.
pub fn spring_descriptor(name: &str, properties: &[(&str, &str)]) -> String {
    let mut descriptor = format!(
        r#"[project]
name = "{name}"
plugins = ["org.springframework.boot"]

[properties]
"#
    );
    for (key, value) in properties {
        descriptor.push_str(&format!("\"{}\" = \"{}\"\n", key, value));
    }
    descriptor
}
