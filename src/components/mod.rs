//! Pluggable window-manager components.
//!
//! A component is a named unit of functionality that the settings document
//! asks to load, that may register layouts while loading, and that later
//! receives its own tagged configuration block. Components are compiled in
//! and selected by name through a [`ModuleRegistry`].

mod floating;
mod registry;
mod spawn;
mod tile;

pub use floating::{FloatingComponent, FloatingConfig};
pub use registry::{ComponentFactory, ModuleRegistry};
pub use spawn::{SpawnComponent, SpawnConfig};
pub use tile::{TileComponent, TileConfig};

use schemars::Schema;
use thiserror::Error;

use crate::{config::ConfigDocument, layout::LayoutRegistry};

/// Errors reported when a module cannot be loaded.
#[derive(Error, Debug)]
pub enum LoadError {
    /// No component with this name is known to the host
    #[error("no component named '{name}' is available")]
    NotAvailable {
        /// Requested module name
        name: String,
    },

    /// The component refused to initialize
    #[error("component '{name}' failed to initialize: {reason}")]
    InitFailed {
        /// Module name
        name: String,
        /// Reason given by the component
        reason: String,
    },
}

/// Errors reported when a configuration block cannot be applied.
#[derive(Error, Debug)]
pub enum ConfigureError {
    /// The block targets a component that was never loaded
    #[error("component '{name}' is not loaded")]
    UnknownComponent {
        /// Component name taken from the document tag
        name: String,
    },

    /// The component rejected the block
    #[error("component '{name}' rejected its configuration: {reason}")]
    Rejected {
        /// Component name
        name: String,
        /// Reason given by the component
        reason: String,
    },
}

/// Errors a component reports about its own load or configuration block.
#[derive(Error, Debug)]
pub enum ComponentError {
    /// The block does not match the component's configuration type
    #[error("invalid configuration block: {0}")]
    InvalidBlock(#[from] serde_yaml::Error),

    /// A field parsed but holds a value the component cannot use
    #[error("{field} {reason}")]
    InvalidValue {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// The two operations the configuration loader needs from whatever owns the
/// components.
///
/// [`ModuleRegistry`] is the production implementation. Tests substitute
/// recording hosts to observe call order.
pub trait ComponentHost {
    /// Loads the component registered under `name`.
    ///
    /// # Errors
    /// Returns [`LoadError`] if the component is unknown or fails to start.
    fn load(&mut self, name: &str) -> Result<(), LoadError>;

    /// Hands a configuration document to the loaded component `name`.
    ///
    /// # Errors
    /// Returns [`ConfigureError::UnknownComponent`] if `name` was never
    /// loaded, or [`ConfigureError::Rejected`] if the component refuses the
    /// block.
    fn configure(&mut self, name: &str, document: &ConfigDocument) -> Result<(), ConfigureError>;
}

/// A compiled-in window-manager component.
pub trait Component {
    /// Name used in the `modules` list and in document tags.
    fn name(&self) -> &str;

    /// Called once when the component is loaded.
    ///
    /// Components register the layouts they provide here.
    ///
    /// # Errors
    /// Returns [`ComponentError`] if the component cannot start.
    fn load(&mut self, layouts: &mut LayoutRegistry) -> Result<(), ComponentError>;

    /// Applies a configuration block addressed to this component.
    ///
    /// # Errors
    /// Returns [`ComponentError`] if the block is invalid. The component's
    /// previous settings stay in effect.
    fn configure(&mut self, document: &ConfigDocument) -> Result<(), ComponentError>;

    /// Current effective settings, for reporting.
    fn settings(&self) -> serde_json::Value;

    /// JSON schema of the configuration block this component accepts.
    fn schema(&self) -> Schema;
}
