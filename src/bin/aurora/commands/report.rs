//! `aurora report` command

use anyhow::Result;

use super::evaluate_project;
use crate::cli::{Format, ReportArgs};
use aurora::ops::ReportPrinter;

pub fn execute(args: ReportArgs) -> Result<()> {
    let (_, evaluation) = evaluate_project(&args.project)?;

    match args.format {
        Format::Text => print!("{}", ReportPrinter::format(&evaluation.reports)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&evaluation)?),
    }

    Ok(())
}
