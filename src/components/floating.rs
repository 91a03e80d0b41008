use std::sync::Arc;

use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

use crate::{
    config::ConfigDocument,
    layout::{LayoutRegistry, StaticLayout},
};

use super::{Component, ComponentError};

/// Configuration block for the floating component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct FloatingConfig {
    /// Distance in pixels at which dragged windows snap to screen edges.
    pub snap_distance: u32,

    /// Whether new windows are centered on the screen.
    pub center_new_windows: bool,
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self {
            snap_distance: 8,
            center_new_windows: true,
        }
    }
}

/// Free window placement. Provides the `float` layout.
#[derive(Debug, Default)]
pub struct FloatingComponent {
    config: FloatingConfig,
}

impl FloatingComponent {
    /// Currently applied configuration.
    pub fn config(&self) -> &FloatingConfig {
        &self.config
    }
}

impl Component for FloatingComponent {
    fn name(&self) -> &str {
        "floating"
    }

    fn load(&mut self, layouts: &mut LayoutRegistry) -> Result<(), ComponentError> {
        layouts.register(Arc::new(StaticLayout::new(
            "float",
            self.name(),
            "windows keep the position and size they ask for",
        )));
        Ok(())
    }

    fn configure(&mut self, document: &ConfigDocument) -> Result<(), ComponentError> {
        self.config = document.parse()?;
        Ok(())
    }

    fn settings(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or_default()
    }

    fn schema(&self) -> Schema {
        schema_for!(FloatingConfig)
    }
}
