//! Startup configuration.
//!
//! Locates `strata.yaml`, validates the global settings document at the top
//! of it, loads the modules it lists, and hands each following tagged
//! document to the component it names.

mod document;
mod loading;
mod locator;
mod paths;
mod settings;

#[cfg(test)]
mod tests;

pub use document::{ComponentBlock, ConfigDocument, MAX_TAG_LEN, parse_tag};
pub use loading::{
    ConfigLoader, DocumentFailure, LoadReport, ModuleFailure, ModuleLoadPolicy,
};
pub use locator::{ConfigLocator, ConfigSource};
pub use paths::ConfigPaths;
pub use settings::{GlobalSettings, Settings};

/// Logical name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "strata.yaml";

/// Namespace component tags must carry, as in `!strata:tile`.
pub const TAG_NAMESPACE: &str = "strata";
