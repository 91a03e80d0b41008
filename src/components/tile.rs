use std::sync::Arc;

use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

use crate::{
    config::ConfigDocument,
    layout::{LayoutRegistry, StaticLayout},
};

use super::{Component, ComponentError};

/// Configuration block for the tiling component.
///
/// ```yaml
/// --- !strata:tile
/// master_factor: 0.6
/// master_count: 2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct TileConfig {
    /// Fraction of the screen width given to the master area, between 0 and 1.
    pub master_factor: f32,

    /// Number of windows kept in the master area.
    pub master_count: u32,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            master_factor: 0.5,
            master_count: 1,
        }
    }
}

impl TileConfig {
    fn validate(&self) -> Result<(), ComponentError> {
        if !(self.master_factor > 0.0 && self.master_factor < 1.0) {
            return Err(ComponentError::InvalidValue {
                field: "master_factor",
                reason: format!("must be between 0 and 1, got {}", self.master_factor),
            });
        }
        Ok(())
    }
}

/// Master/stack tiling. Provides the `tile` and `grid` layouts.
#[derive(Debug, Default)]
pub struct TileComponent {
    config: TileConfig,
}

impl TileComponent {
    /// Currently applied configuration.
    pub fn config(&self) -> &TileConfig {
        &self.config
    }
}

impl Component for TileComponent {
    fn name(&self) -> &str {
        "tile"
    }

    fn load(&mut self, layouts: &mut LayoutRegistry) -> Result<(), ComponentError> {
        layouts.register(Arc::new(StaticLayout::new(
            "tile",
            self.name(),
            "master area on the left, stack on the right",
        )));
        layouts.register(Arc::new(StaticLayout::new(
            "grid",
            self.name(),
            "windows in an evenly divided grid",
        )));
        Ok(())
    }

    fn configure(&mut self, document: &ConfigDocument) -> Result<(), ComponentError> {
        let config: TileConfig = document.parse()?;
        config.validate()?;
        self.config = config;
        Ok(())
    }

    fn settings(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or_default()
    }

    fn schema(&self) -> Schema {
        schema_for!(TileConfig)
    }
}
