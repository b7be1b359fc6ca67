//! User-facing diagnostic messages.
//!
//! Errors raised while conventions are applied carry a `miette` code and, for
//! the common mistakes, a help line. The front end renders them through
//! [`Diagnostic`] so every failure names its cause and a next step.

use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;

/// Common suggestion messages.
pub mod suggestions {
    /// No descriptor at the given path.
    pub const NO_DESCRIPTOR: &str =
        "help: Create an aurora.toml with a [project] section, or pass --manifest <path>";

    /// A step a convention needs is missing.
    pub const MISSING_PLUGIN: &str =
        "help: Add the plugin providing the step to [project].plugins";

    /// A `-P` argument without `=`.
    pub const PROPERTY_SYNTAX: &str = "help: Properties are written as -P key=value";
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn label(&self, color: bool) -> &'static str {
        match (self, color) {
            (Severity::Error, true) => "\x1b[1;31merror\x1b[0m",
            (Severity::Error, false) => "error",
            (Severity::Warning, true) => "\x1b[1;33mwarning\x1b[0m",
            (Severity::Warning, false) => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label(false))
    }
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Severity level
    pub severity: Severity,
    /// Diagnostic code, such as `aurora::project::unknown_step`
    pub code: Option<String>,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Related file
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity: Severity::Error,
            code: None,
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            ..Self::error(message)
        }
    }

    /// Build an error diagnostic from a typed error, keeping its code, help
    /// and source chain.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: MietteDiagnostic + ?Sized,
    {
        let mut diag = Self::error(error.to_string());
        diag.code = error.code().map(|c| c.to_string());

        let mut source = error.source();
        while let Some(cause) = source {
            diag = diag.with_context(cause.to_string());
            source = cause.source();
        }
        if let Some(help) = error.help() {
            diag = diag.with_suggestion(help.to_string());
        }
        diag
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        output.push_str(self.severity.label(color));
        if let Some(code) = &self.code {
            output.push_str(&format!("[{}]", code));
        }
        output.push_str(&format!(": {}\n", self.message));

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("  caused by: {}\n", ctx));
        }

        if !self.suggestions.is_empty() {
            output.push('\n');
            for suggestion in &self.suggestions {
                if suggestion.starts_with("help:") {
                    output.push_str(&format!("{}\n", suggestion));
                } else {
                    output.push_str(&format!("help: {}\n", suggestion));
                }
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}
