//! High-level operations.
//!
//! This module runs conventions against a project and reports on them.

pub mod evaluate;
pub mod report;
pub mod runner;

pub use evaluate::{evaluate, evaluate_with, resolve_configuration, Evaluation, DEFAULT_STEPS};
pub use report::{Report, ReportPrinter};
pub use runner::FeatureRunner;
