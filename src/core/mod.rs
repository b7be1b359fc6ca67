//! Core data structures for Aurora.
//!
//! This module contains the foundational types conventions are applied to:
//! - Capability identifiers (applied plugins and toolchains)
//! - Dependency coordinates, buckets and exclusions
//! - Build steps and their configuration records
//! - Artifacts and publishing records
//! - The `Project` interface and its in-memory implementation
//! - The `aurora.toml` project descriptor

pub mod artifact;
pub mod capability;
pub mod coordinate;
pub mod descriptor;
pub mod memory;
pub mod project;
pub mod publishing;
pub mod step;

pub use artifact::Artifact;
pub use capability::Capability;
pub use coordinate::{Bucket, Coordinate, Exclusion};
pub use descriptor::{Descriptor, DESCRIPTOR_FILE};
pub use memory::InMemoryProject;
pub use project::{Project, ProjectError};
pub use publishing::{Credentials, Publication, Repository};
pub use step::{Setting, Settings, Step, StepConfig, UpgradePolicy};
