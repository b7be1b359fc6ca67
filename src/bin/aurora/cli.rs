//! CLI definitions using clap.

use std::path::PathBuf;

use aurora::util::diagnostic::suggestions;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Aurora - layered build conventions for JVM projects
#[derive(Parser)]
#[command(name = "aurora")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply the conventions and print what each one did
    Report(ReportArgs),

    /// Print the resolved configuration
    Configuration(ConfigurationArgs),

    /// Apply the conventions and print the resulting step order
    Steps(StepsArgs),

    /// Classify version strings as stable or not
    Stable(StableArgs),
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Options shared by every command that evaluates a project.
#[derive(Args)]
pub struct ProjectArgs {
    /// Path to the project descriptor
    #[arg(long, env = "AURORA_MANIFEST", default_value = "aurora.toml")]
    pub manifest: PathBuf,

    /// Set a project property, overriding the descriptor (key=value)
    #[arg(short = 'P', long = "property", value_parser = parse_property)]
    pub properties: Vec<(String, String)>,
}

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: Format,
}

#[derive(Args)]
pub struct ConfigurationArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: Format,
}

#[derive(Args)]
pub struct StepsArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Only list enabled steps
    #[arg(long)]
    pub enabled: bool,
}

#[derive(Args)]
pub struct StableArgs {
    /// Versions to classify
    #[arg(required = true)]
    pub versions: Vec<String>,
}

fn parse_property(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!(
            "expected key=value, found `{}`\n{}",
            s,
            suggestions::PROPERTY_SYNTAX
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_property() {
        assert_eq!(
            parse_property("aurora.useWebFlux=true"),
            Ok(("aurora.useWebFlux".into(), "true".into()))
        );
        assert_eq!(
            parse_property("version=1.0=beta"),
            Ok(("version".into(), "1.0=beta".into()))
        );
        assert!(parse_property("novalue").is_err());
        assert!(parse_property("=x").is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "aurora",
            "report",
            "--manifest",
            "demo/aurora.toml",
            "-P",
            "aurora.useBootJar=true",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Report(args) => {
                assert_eq!(args.format, Format::Json);
                assert_eq!(args.project.manifest, PathBuf::from("demo/aurora.toml"));
                assert_eq!(args.project.properties.len(), 1);
            }
            _ => panic!("expected report"),
        }
    }
}
