use std::path::PathBuf;

use serde_json::{Value, json};

use crate::{components::LoadError, config::GlobalSettings, core::DispatchError};

/// A module that failed to load under [`ModuleLoadPolicy::BestEffort`].
///
/// [`ModuleLoadPolicy::BestEffort`]: super::ModuleLoadPolicy::BestEffort
#[derive(Debug)]
pub struct ModuleFailure {
    /// Module name as listed in `modules`
    pub name: String,
    /// Error reported by the component host
    pub error: LoadError,
}

/// A configuration document that could not be applied.
#[derive(Debug)]
pub struct DocumentFailure {
    /// Position of the document in the stream; the settings document is 0
    pub index: usize,
    /// What went wrong
    pub error: DispatchError,
}

/// Outcome of a completed configuration load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// File the configuration was read from, if any
    pub source: Option<PathBuf>,
    /// Settings document as read, if the stream had one
    pub settings: Option<GlobalSettings>,
    /// Modules loaded, in load order
    pub loaded_modules: Vec<String>,
    /// Modules skipped under the best-effort policy
    pub module_failures: Vec<ModuleFailure>,
    /// Components that accepted a configuration block, in stream order
    pub configured: Vec<String>,
    /// Configuration blocks that were not applied
    pub failures: Vec<DocumentFailure>,
}

impl LoadReport {
    /// Whether every module loaded and every block was applied.
    pub fn is_clean(&self) -> bool {
        self.module_failures.is_empty() && self.failures.is_empty()
    }

    /// JSON rendering for machine-readable output.
    pub fn to_json(&self) -> Value {
        json!({
            "source": self.source.as_ref().map(|path| path.display().to_string()),
            "settings": self.settings,
            "loaded_modules": self.loaded_modules,
            "module_failures": self
                .module_failures
                .iter()
                .map(|failure| json!({ "module": failure.name, "error": failure.error.to_string() }))
                .collect::<Vec<_>>(),
            "configured": self.configured,
            "failures": self
                .failures
                .iter()
                .map(|failure| json!({ "document": failure.index, "error": failure.error.to_string() }))
                .collect::<Vec<_>>(),
        })
    }
}
