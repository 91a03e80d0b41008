use std::{fmt, path::Path};

use thiserror::Error;

use crate::components::{ConfigureError, LoadError};

/// Errors that abort a configuration load.
///
/// Every variant is raised while the global settings document is being
/// read or applied. Once one of these is returned no component
/// configuration block has been dispatched.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The first document of the stream is not a mapping
    #[error("global settings in '{location}' must be a mapping, found {found}")]
    MalformedRoot {
        /// Location of the stream (file path or "string")
        location: String,
        /// Kind of YAML node found instead
        found: &'static str,
    },

    /// The `modules` key does not hold a sequence of names
    #[error("invalid 'modules' list: {reason}")]
    MalformedModuleList {
        /// Why the list was rejected
        reason: String,
    },

    /// A scalar setting could not be interpreted
    #[error("invalid value for '{key}': {value}")]
    MalformedScalar {
        /// Settings key holding the value
        key: String,
        /// Offending value as written
        value: String,
    },

    /// A module listed in `modules` failed to load
    #[error("failed to load module '{name}': {source}")]
    ComponentLoad {
        /// Module name as listed
        name: String,
        /// Error reported by the component host
        #[source]
        source: LoadError,
    },

    /// YAML syntax error in the settings document
    #[error("failed to parse YAML at '{location}': {details}")]
    Parse {
        /// Location of the stream (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },
}

/// Errors raised while dispatching one component configuration document.
///
/// These never abort a load. The loader records them against the document
/// and moves on to the next one.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The document tag does not name a component
    #[error("malformed tag {}: {source}", .tag.as_deref().unwrap_or("(none)"))]
    MalformedTag {
        /// Tag as written, if the document had one
        tag: Option<String>,
        /// What is wrong with it
        #[source]
        source: TagError,
    },

    /// The tag names a component that was never loaded
    #[error("component '{name}' is not loaded")]
    UnknownComponent {
        /// Component name taken from the tag
        name: String,
    },

    /// The component refused the configuration block
    #[error("component '{name}' rejected its configuration: {reason}")]
    ComponentConfigRejected {
        /// Component name taken from the tag
        name: String,
        /// Reason given by the component
        reason: String,
    },

    /// YAML syntax error; no further documents are read
    #[error("failed to parse document: {details}")]
    Parse {
        /// Parse error details
        details: String,
    },
}

impl From<ConfigureError> for DispatchError {
    fn from(error: ConfigureError) -> Self {
        match error {
            ConfigureError::UnknownComponent { name } => DispatchError::UnknownComponent { name },
            ConfigureError::Rejected { name, reason } => {
                DispatchError::ComponentConfigRejected { name, reason }
            }
        }
    }
}

/// Reasons a document tag fails to name a component.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// The document carries no tag
    #[error("document has no tag")]
    Missing,

    /// The tag is longer than any component tag can be
    #[error("tag is {len} bytes long, limit is {limit}")]
    TooLong {
        /// Length of the tag
        len: usize,
        /// Maximum accepted length
        limit: usize,
    },

    /// No `:` between namespace and component name
    #[error("expected '!{expected}:<component>'")]
    MissingSeparator {
        /// Namespace the loader accepts
        expected: String,
    },

    /// The tag belongs to another namespace
    #[error("namespace '{found}' is not '{expected}'")]
    WrongNamespace {
        /// Namespace found in the tag
        found: String,
        /// Namespace the loader accepts
        expected: String,
    },

    /// Nothing follows the separator
    #[error("component name is empty")]
    EmptyName,

    /// The component name contains characters outside `[A-Za-z0-9_.-]`
    #[error("invalid component name '{name}'")]
    InvalidName {
        /// Name as written
        name: String,
    },
}

/// A specialized `Result` type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Creates a YAML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `location` - Optional path to the file that failed to parse
    pub fn parse(error: impl fmt::Display, location: Option<&Path>) -> Self {
        ConfigError::Parse {
            location: describe_location(location),
            details: error.to_string(),
        }
    }
}

pub(crate) fn describe_location(location: Option<&Path>) -> String {
    match location {
        Some(path) => path.to_string_lossy().to_string(),
        None => "string".to_string(),
    }
}
