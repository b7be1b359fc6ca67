//! Report entries and their rendering.
//!
//! Every feature returns exactly one [`Report`] describing what it did.
//! Reports are flat data: they can be serialized and rendered without
//! access to the project they describe.

use std::fmt;

use serde::Serialize;

use crate::core::coordinate::{Bucket, Coordinate};

/// Summary of one feature invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Feature name, used for sorting
    pub name: String,
    /// What was configured, empty when nothing worth saying
    pub description: String,
    /// Plugins activated, in activation order
    pub plugins_applied: Vec<String>,
    /// Dependencies added, as `<bucket> <coordinate>` or `bom <coordinate>`
    pub dependencies_added: Vec<String>,
}

impl Report {
    /// Create an empty report for a feature.
    pub fn new(name: impl Into<String>) -> Self {
        Report {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Record an applied plugin.
    pub fn with_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugins_applied.push(plugin.into());
        self
    }

    /// Record a dependency added to a bucket.
    pub fn with_dependency(mut self, bucket: &Bucket, coordinate: &Coordinate) -> Self {
        self.dependencies_added
            .push(format!("{} {}", bucket, coordinate));
        self
    }

    /// Record an imported BOM.
    pub fn with_bom(mut self, coordinate: &Coordinate) -> Self {
        self.dependencies_added.push(format!("bom {}", coordinate));
        self
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.description.is_empty() {
            write!(f, "\n  Configuration: {}", self.description)?;
        }
        if !self.plugins_applied.is_empty() {
            write!(f, "\n  Plugins      : {}", self.plugins_applied.join(", "))?;
        }
        if !self.dependencies_added.is_empty() {
            write!(f, "\n  Dependencies :")?;
            for dependency in &self.dependencies_added {
                write!(f, "\n     {}", dependency)?;
            }
        }
        Ok(())
    }
}

/// Renders report lists for humans.
pub struct ReportPrinter;

impl ReportPrinter {
    pub const HEADER: &'static str = "----- Aurora Plugin Report -----";
    pub const FOOTER: &'static str = "--------------------------------";

    /// Render entries sorted by name.
    ///
    /// An empty list renders as the empty string. Entries with the same name
    /// keep their relative order.
    pub fn format(entries: &[Report]) -> String {
        if entries.is_empty() {
            return String::new();
        }

        let mut sorted: Vec<&Report> = entries.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));

        let mut output = String::new();
        output.push_str(Self::HEADER);
        output.push('\n');
        output.push_str(
            "The aurora plugin can be configured via aurora.* feature flags \
             in .gradle.properties or reacting on applied plugins.\n\n",
        );
        output.push_str(
            "Each feature can add dependencies to your build, add another \
             plugin or modify configuration\n\n",
        );
        for entry in sorted {
            output.push_str(&entry.to_string());
            output.push_str("\n\n");
        }
        output.push_str(Self::FOOTER);
        output.push('\n');
        output
    }
}
