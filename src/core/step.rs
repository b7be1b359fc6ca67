//! Build steps (tasks) and their configuration records.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// A single configuration value on a step or extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Setting {
    Bool(bool),
    Text(String),
    List(Vec<String>),
}

impl Setting {
    /// The value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Setting::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The value as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Setting::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The value as a list, if it is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Setting::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Setting::Bool(b) => write!(f, "{}", b),
            Setting::Text(s) => write!(f, "{}", s),
            Setting::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<bool> for Setting {
    fn from(b: bool) -> Self {
        Setting::Bool(b)
    }
}

impl From<&str> for Setting {
    fn from(s: &str) -> Self {
        Setting::Text(s.to_string())
    }
}

impl From<String> for Setting {
    fn from(s: String) -> Self {
        Setting::Text(s)
    }
}

impl From<Vec<String>> for Setting {
    fn from(items: Vec<String>) -> Self {
        Setting::List(items)
    }
}

impl From<&[&str]> for Setting {
    fn from(items: &[&str]) -> Self {
        Setting::List(items.iter().map(|s| s.to_string()).collect())
    }
}

/// Named settings, kept in key order so renderings are stable.
pub type Settings = BTreeMap<String, Setting>;

/// A partial update to a step. Applying it merges into the step:
/// settings are overwritten key by key, dependency lists are extended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepConfig {
    /// Settings to write
    pub settings: Settings,
    /// Steps that must run before this one
    pub depends_on: Vec<String>,
    /// Ordering hints that do not pull the other step in
    pub must_run_after: Vec<String>,
    /// Replacement description
    pub description: Option<String>,
    /// Replacement enabled flag
    pub enabled: Option<bool>,
}

impl StepConfig {
    /// An empty update.
    pub fn new() -> Self {
        StepConfig::default()
    }

    /// Write a setting.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Setting>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Add a step this step depends on.
    pub fn depends_on(mut self, step: impl Into<String>) -> Self {
        self.depends_on.push(step.into());
        self
    }

    /// Add a must-run-after ordering hint.
    pub fn must_run_after(mut self, step: impl Into<String>) -> Self {
        self.must_run_after.push(step.into());
        self
    }

    /// Set the description.
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the enabled flag.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}

/// A build step registered on a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Step name
    pub name: String,
    /// Whether the step runs
    pub enabled: bool,
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Step settings
    pub settings: Settings,
    /// Hard dependencies
    pub depends_on: Vec<String>,
    /// Soft ordering
    pub must_run_after: Vec<String>,
}

impl Step {
    /// Create an enabled step with no configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Step {
            name: name.into(),
            enabled: true,
            description: None,
            settings: Settings::new(),
            depends_on: Vec::new(),
            must_run_after: Vec::new(),
        }
    }

    /// Merge a configuration update into this step. Last writer wins.
    pub fn apply(&mut self, config: StepConfig) {
        self.settings.extend(config.settings);
        for dep in config.depends_on {
            if !self.depends_on.contains(&dep) {
                self.depends_on.push(dep);
            }
        }
        for after in config.must_run_after {
            if !self.must_run_after.contains(&after) {
                self.must_run_after.push(after);
            }
        }
        if let Some(description) = config.description {
            self.description = Some(description);
        }
        if let Some(enabled) = config.enabled {
            self.enabled = enabled;
        }
    }

    /// Look up a setting.
    pub fn setting(&self, key: &str) -> Option<&Setting> {
        self.settings.get(key)
    }
}

/// Candidate filter for dependency-upgrade proposals.
///
/// The step owning the policy proposes a candidate version only when
/// `reject` returns false for it.
#[derive(Clone, Copy)]
pub struct UpgradePolicy {
    /// Reason recorded against rejected candidates
    pub reason: &'static str,
    /// Returns true for candidates that must not be proposed
    pub reject: fn(&str) -> bool,
}

impl UpgradePolicy {
    /// Keep only the candidates the policy accepts, in input order.
    pub fn select<'a>(&self, candidates: &[&'a str]) -> Vec<&'a str> {
        candidates
            .iter()
            .copied()
            .filter(|c| !(self.reject)(c))
            .collect()
    }
}

impl fmt::Debug for UpgradePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpgradePolicy")
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}
