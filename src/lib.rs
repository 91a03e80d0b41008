//! Strata - configuration core of a tiling window manager.
//!
//! Strata reads its startup configuration from a single YAML stream:
//!
//! - The first document holds global settings and lists the modules to load
//! - Each following document is tagged `!strata:<component>` and configures
//!   one loaded component
//! - Components register named layouts that the window manager selects at
//!   runtime
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use strata::{
//!     components::ModuleRegistry,
//!     config::{ConfigLoader, ConfigLocator, Settings},
//!     layout::LayoutRegistry,
//! };
//!
//! let mut layouts = LayoutRegistry::init();
//! let mut settings = Settings::default();
//! {
//!     let mut modules = ModuleRegistry::builtin(&mut layouts);
//!     let report = ConfigLoader::new(ConfigLocator::from_env())
//!         .load(&mut modules, &mut settings)?;
//!     println!("configured: {:?}", report.configured);
//! }
//! println!("layouts: {:?}", layouts.names());
//! layouts.teardown();
//! # Ok::<(), strata::ConfigError>(())
//! ```

/// Command-line presentation helpers.
pub mod cli;

/// Compiled-in components and the host that loads them.
pub mod components;

/// Config file discovery and the configuration stream protocol.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Documentation generation for component configuration blocks.
pub mod docs;

/// Registry of named layouts.
pub mod layout;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{ConfigError, DispatchError, Result, TagError};
