//! `aurora stable` command

use anyhow::Result;

use crate::cli::StableArgs;
use aurora::features::is_stable;

pub fn execute(args: StableArgs) -> Result<()> {
    for version in &args.versions {
        let verdict = if is_stable(version) {
            "stable"
        } else {
            "unstable"
        };
        println!("{} {}", version, verdict);
    }

    Ok(())
}
