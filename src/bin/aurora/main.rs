//! Aurora CLI - layered build conventions for JVM projects

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use aurora::util::diagnostic::{emit, suggestions, Diagnostic};
use aurora::ProjectError;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stderr().is_terminal();

    if let Err(e) = run(cli) {
        report_error(&e, color);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("aurora=debug")
    } else {
        EnvFilter::new("aurora=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Report(args) => commands::report::execute(args),
        Commands::Configuration(args) => commands::configuration::execute(args),
        Commands::Steps(args) => commands::steps::execute(args),
        Commands::Stable(args) => commands::stable::execute(args),
    }
}

fn report_error(error: &anyhow::Error, color: bool) {
    if let Some(project_error) = error.downcast_ref::<ProjectError>() {
        let mut diag = Diagnostic::from_error(project_error);
        if matches!(project_error, ProjectError::UnknownStep { .. }) {
            diag = diag.with_suggestion(suggestions::MISSING_PLUGIN);
        }
        emit(&diag, color);
        return;
    }

    let missing_descriptor = error.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
    });
    if missing_descriptor {
        let mut diag = Diagnostic::error(error.to_string());
        for cause in error.chain().skip(1) {
            diag = diag.with_context(cause.to_string());
        }
        emit(&diag.with_suggestion(suggestions::NO_DESCRIPTOR), color);
        return;
    }

    eprintln!("error: {:#}", error);
}
