//! Option resolution.
//!
//! Resolution applies one precedence rule to every option:
//!
//! 1. Structured extension value, when explicitly set
//! 2. Flat property override, when present and parseable
//! 3. Compiled-in default

use tracing::debug;

use crate::config::defaults::Defaults;
use crate::config::effective::EffectiveConfiguration;
use crate::config::extension::ExtensionOverrides;
use crate::config::option::{OptionKey, OptionValue};
use crate::config::properties::PropertyOverrides;
use crate::config::source::ConfigSource;

/// Merges override sources into an [`EffectiveConfiguration`].
pub struct ConfigResolver<'a> {
    /// Override sources, highest precedence first
    overrides: Vec<&'a dyn ConfigSource>,
    defaults: Defaults,
}

impl<'a> ConfigResolver<'a> {
    /// A resolver over the standard sources.
    pub fn new(extension: &'a ExtensionOverrides, properties: &'a PropertyOverrides) -> Self {
        ConfigResolver {
            overrides: vec![extension as &dyn ConfigSource, properties],
            defaults: Defaults,
        }
    }

    /// The value `key` resolves to. Never fails.
    pub fn value(&self, key: OptionKey) -> OptionValue {
        for source in &self.overrides {
            if let Some(value) = source.value(key).filter(|v| v.kind() == key.kind()) {
                debug!("{} from {}", key, source.name());
                return value;
            }
        }
        self.defaults.get(key)
    }

    /// Resolve every option.
    pub fn resolve(&self) -> EffectiveConfiguration {
        EffectiveConfiguration::from_fn(|key| self.value(key))
    }
}

/// Resolve the standard sources in one call.
pub fn resolve(
    extension: &ExtensionOverrides,
    properties: &PropertyOverrides,
) -> EffectiveConfiguration {
    ConfigResolver::new(extension, properties).resolve()
}
