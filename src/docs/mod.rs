//! Reference documentation for component configuration blocks.
//!
//! Each component publishes a JSON schema for the block it accepts. This
//! module turns those schemas into markdown tables.

mod markdown;
pub mod schema;

pub use markdown::{component_page, generate_property_table};
pub use schema::{PropertyInfo, extract_property_info};

use thiserror::Error;

/// Errors raised while generating documentation.
#[derive(Error, Debug)]
pub enum DocsError {
    /// The component schema could not be converted to JSON
    #[error("failed to convert schema for component '{component}': {details}")]
    SchemaConversion {
        /// Component whose schema failed
        component: String,
        /// Conversion error details
        details: String,
    },
}
