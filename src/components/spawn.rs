use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

use crate::{config::ConfigDocument, layout::LayoutRegistry};

use super::{Component, ComponentError};

/// Configuration block for the spawn component.
///
/// Names the programs bound to the terminal and launcher actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct SpawnConfig {
    /// Command started by the terminal action.
    pub terminal: String,

    /// Command started by the launcher action.
    pub launcher: String,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            terminal: "xterm".to_string(),
            launcher: "dmenu_run".to_string(),
        }
    }
}

/// Launches external programs. Provides no layouts.
#[derive(Debug, Default)]
pub struct SpawnComponent {
    config: SpawnConfig,
}

impl SpawnComponent {
    /// Currently applied configuration.
    pub fn config(&self) -> &SpawnConfig {
        &self.config
    }
}

impl Component for SpawnComponent {
    fn name(&self) -> &str {
        "spawn"
    }

    fn load(&mut self, _layouts: &mut LayoutRegistry) -> Result<(), ComponentError> {
        Ok(())
    }

    fn configure(&mut self, document: &ConfigDocument) -> Result<(), ComponentError> {
        let config: SpawnConfig = document.parse()?;

        for (field, command) in [("terminal", &config.terminal), ("launcher", &config.launcher)] {
            if command.trim().is_empty() {
                return Err(ComponentError::InvalidValue {
                    field,
                    reason: "must not be empty".to_string(),
                });
            }
        }

        self.config = config;
        Ok(())
    }

    fn settings(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or_default()
    }

    fn schema(&self) -> Schema {
        schema_for!(SpawnConfig)
    }
}
