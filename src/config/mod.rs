//! Configuration sources and resolution.
//!
//! Three sources feed one immutable [`EffectiveConfiguration`]:
//! - [`ExtensionOverrides`]: structured, typed fields written by the user
//! - [`PropertyOverrides`]: flat `aurora.<option>` properties
//! - [`Defaults`]: compiled-in constants
//!
//! The extension wins over properties, properties win over defaults. The
//! rule is the same for every option.

pub mod coordinates;
pub mod defaults;
pub mod effective;
pub mod extension;
pub mod option;
pub mod properties;
pub mod resolver;
pub mod shortcuts;
pub mod source;

pub use coordinates::{apply_coordinates, resolve_coordinates, Coordinates};
pub use defaults::Defaults;
pub use effective::EffectiveConfiguration;
pub use extension::{
    ExtensionOverrides, FeatureOverrides, UseKotlin, UseSpringBoot, VersionOverrides,
};
pub use option::{OptionKey, OptionKind, OptionValue};
pub use properties::PropertyOverrides;
pub use resolver::{resolve, ConfigResolver};
pub use shortcuts::apply_shortcuts;
pub use source::ConfigSource;
