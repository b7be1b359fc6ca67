//! `aurora configuration` command

use anyhow::{Context, Result};

use super::load_descriptor;
use crate::cli::{ConfigurationArgs, Format};
use aurora::ops::resolve_configuration;

pub fn execute(args: ConfigurationArgs) -> Result<()> {
    let descriptor = load_descriptor(&args.project)?;
    let mut project = descriptor.to_project();

    let (config, _) = resolve_configuration(&mut project, &descriptor.aurora).with_context(|| {
        format!(
            "failed to resolve configuration of `{}`",
            descriptor.project.name
        )
    })?;

    match args.format {
        Format::Text => print!("{}", config),
        Format::Json => println!("{}", serde_json::to_string_pretty(&config)?),
    }

    Ok(())
}
