//! `aurora steps` command

use anyhow::Result;

use super::evaluate_project;
use crate::cli::StepsArgs;
use aurora::core::Project;

pub fn execute(args: StepsArgs) -> Result<()> {
    let (project, _) = evaluate_project(&args.project)?;

    for name in project.step_order()? {
        let Some(step) = project.step(&name) else {
            continue;
        };
        if args.enabled && !step.enabled {
            continue;
        }

        let marker = if step.enabled { "+" } else { "-" };
        match &step.description {
            Some(description) => println!("{} {:<24} {}", marker, step.name, description),
            None => println!("{} {}", marker, step.name),
        }
    }

    println!();
    println!("default: {}", project.default_steps().join(" "));

    Ok(())
}
