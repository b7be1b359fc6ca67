//! Conventions and the registry that orders them.
//!
//! Each feature is a unit struct implementing [`Feature`]. Features are
//! grouped by area and run group by group:
//!
//! 1. Java basics
//! 2. Language toolchain (Kotlin, ktlint)
//! 3. Framework (Spring Boot, contract testing)
//! 4. Test and quality tooling
//! 5. Packaging
//! 6. Publishing

pub mod analysis;
pub mod java;
pub mod kotlin;
pub mod packaging;
pub mod publishing;
pub mod registry;
pub mod spring;
pub mod stability;
mod support;
pub mod testing;
pub mod trait_def;

pub use registry::CapabilityRegistry;
pub use stability::{is_non_stable, is_stable};
pub use trait_def::{Feature, FeatureGroup, Trigger};
