//! The `ConfigSource` trait.

use crate::config::option::{OptionKey, OptionValue};

/// Read-only provider of option values.
///
/// A source answers `None` for every option it has nothing to say about.
/// Values are already typed: a source never hands out a text value for a
/// flag option.
pub trait ConfigSource {
    /// Source name, used in logging.
    fn name(&self) -> &str;

    /// The value this source holds for `key`, if any.
    fn value(&self, key: OptionKey) -> Option<OptionValue>;
}
