//! Configuration and dependency wiring for the related-item system.

mod dependencies;
mod search_options;
mod settings;

pub use dependencies::Dependencies;
pub use search_options::{DocumentTransform, SearchOptions, DEFAULT_SEARCH_FIELDS};
pub use settings::{EnvSettings, Settings, SettingsError};
