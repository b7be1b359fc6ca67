//! Command implementations

pub mod configuration;
pub mod report;
pub mod stable;
pub mod steps;

use anyhow::{Context, Result};

use crate::cli::ProjectArgs;
use aurora::core::{Descriptor, InMemoryProject};
use aurora::ops::{evaluate, Evaluation};

/// Load the descriptor named by the arguments, with `-P` properties applied.
pub fn load_descriptor(args: &ProjectArgs) -> Result<Descriptor> {
    let mut descriptor = Descriptor::load(&args.manifest)?;
    for (key, value) in &args.properties {
        descriptor.set_property(key.as_str(), value.as_str());
    }
    Ok(descriptor)
}

/// Load the project and apply the conventions to it.
pub fn evaluate_project(args: &ProjectArgs) -> Result<(InMemoryProject, Evaluation)> {
    let descriptor = load_descriptor(args)?;
    let mut project = descriptor.to_project();

    let evaluation = evaluate(&mut project, &descriptor.aurora).with_context(|| {
        format!(
            "failed to apply conventions to `{}`",
            descriptor.project.name
        )
    })?;

    Ok((project, evaluation))
}
