//! Aurora - layered build conventions for JVM projects
//!
//! This crate resolves convention options from three layered sources,
//! applies the resulting conventions to a project's build graph, and
//! reports what each convention did.

pub mod config;
pub mod core;
pub mod features;
pub mod ops;
pub mod util;

/// Test fixtures for Aurora unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests.
#[cfg(test)]
pub mod test_support;

pub use config::{resolve, ConfigResolver, EffectiveConfiguration, ExtensionOverrides};
pub use core::{Capability, Descriptor, InMemoryProject, Project, ProjectError};
pub use features::{CapabilityRegistry, Feature};
pub use ops::{evaluate, Evaluation, FeatureRunner, Report, ReportPrinter};
