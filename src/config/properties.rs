//! Flat property overrides.
//!
//! Options are read from project properties named `aurora.<optionName>`.
//! Values are plain strings and are typed by the option they target: text
//! options take any value, flag options take case-insensitive `true` or
//! `false` and treat anything else as absent.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::config::option::{OptionKey, OptionKind, OptionValue};
use crate::config::source::ConfigSource;

/// Prefix marking a property as an option override.
pub const PREFIX: &str = "aurora.";

/// Option overrides collected from flat properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyOverrides {
    values: BTreeMap<OptionKey, String>,
}

impl PropertyOverrides {
    /// Collect overrides from a property map.
    ///
    /// Properties without the prefix are ignored. Prefixed properties that
    /// name no known option are logged and dropped.
    pub fn from_properties(properties: &BTreeMap<String, String>) -> Self {
        let mut values = BTreeMap::new();

        for (key, value) in properties {
            let Some(name) = key.strip_prefix(PREFIX) else {
                continue;
            };
            match OptionKey::from_name(name) {
                Some(option) => {
                    info!("overrides -> {}:{}", name, value);
                    values.insert(option, value.clone());
                }
                None => warn!("ignoring unknown override `{}`", key),
            }
        }

        PropertyOverrides { values }
    }

    /// The raw string supplied for an option.
    pub fn raw(&self, key: OptionKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Number of recognised overrides.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse a flag, ignoring case. Anything but `true`/`false` is no value.
pub fn parse_flag(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

impl ConfigSource for PropertyOverrides {
    fn name(&self) -> &str {
        "properties"
    }

    fn value(&self, key: OptionKey) -> Option<OptionValue> {
        let raw = self.raw(key)?;
        match key.kind() {
            OptionKind::Text => Some(OptionValue::Text(raw.to_string())),
            OptionKind::Flag => parse_flag(raw).map(OptionValue::Flag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_prefix_filtering() {
        let overrides = PropertyOverrides::from_properties(&props(&[
            ("aurora.junit5Version", "5.9.0"),
            ("aurora.python", "true"),
            ("groupId", "no.skatteetaten.demo"),
            ("junit5Version", "1.0"),
        ]));

        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides.raw(OptionKey::Junit5Version), Some("5.9.0"));
    }

    #[test]
    fn test_flag_parsing_is_case_insensitive() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("False"), Some(false));
        assert_eq!(parse_flag("notabool"), None);
        assert_eq!(parse_flag(""), None);
        assert_eq!(parse_flag("1"), None);
    }

    #[test]
    fn test_unparseable_flag_is_absent() {
        let overrides = PropertyOverrides::from_properties(&props(&[
            ("aurora.useWebFlux", "notabool"),
            ("aurora.useBootJar", "TRUE"),
        ]));

        assert_eq!(overrides.value(OptionKey::UseWebFlux), None);
        assert_eq!(
            overrides.value(OptionKey::UseBootJar),
            Some(OptionValue::Flag(true))
        );
    }

    #[test]
    fn test_text_takes_any_value() {
        let overrides =
            PropertyOverrides::from_properties(&props(&[("aurora.javaSourceCompatibility", "17")]));
        assert_eq!(
            overrides.value(OptionKey::JavaSourceCompatibility),
            Some(OptionValue::Text("17".into()))
        );
    }
}
