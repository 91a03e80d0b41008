use serde::Serialize;
use serde_yaml::Value;
use tracing::{debug, info};

use crate::core::{ConfigError, Result};

/// Window-manager settings that the global settings document controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Width of window borders in pixels.
    pub border_width: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self { border_width: 2 }
    }
}

/// The validated contents of the first document in the stream.
///
/// ```yaml
/// modules: [tile, floating, spawn]
/// border_width: 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GlobalSettings {
    /// Modules to load, in the order they are listed.
    pub modules: Vec<String>,

    /// Border width, if the document sets one.
    pub border_width: Option<u32>,

    /// Keys this version does not understand. They are ignored.
    pub unrecognized: Vec<String>,
}

impl GlobalSettings {
    /// Validates the root document of the stream.
    ///
    /// Every key is checked before anything is applied.
    ///
    /// # Errors
    /// * `ConfigError::MalformedRoot` - the root is not a mapping
    /// * `ConfigError::MalformedModuleList` - `modules` is not a list of names
    /// * `ConfigError::MalformedScalar` - `border_width` is not a non-negative integer
    pub fn from_root(root: &Value, location: &str) -> Result<Self> {
        let Value::Mapping(mapping) = root else {
            return Err(ConfigError::MalformedRoot {
                location: location.to_string(),
                found: kind(root),
            });
        };

        let mut settings = Self::default();

        for (key, value) in mapping {
            match key.as_str() {
                Some("modules") => settings.modules = parse_modules(value)?,
                Some("border_width") => settings.border_width = Some(parse_border_width(value)?),
                Some(other) => {
                    debug!(key = other, "ignoring unrecognized setting");
                    settings.unrecognized.push(other.to_string());
                }
                None => debug!("ignoring non-string settings key ({})", kind(key)),
            }
        }

        Ok(settings)
    }

    /// Writes the scalar settings into `settings`.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(border_width) = self.border_width {
            settings.border_width = border_width;
            info!(border_width, "set border width");
        }
    }
}

fn parse_modules(value: &Value) -> Result<Vec<String>> {
    let Value::Sequence(items) = value else {
        return Err(ConfigError::MalformedModuleList {
            reason: format!("expected a sequence of module names, found {}", kind(value)),
        });
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(name) if !name.trim().is_empty() => Ok(name.clone()),
            Value::String(_) => Err(ConfigError::MalformedModuleList {
                reason: format!("entry {index} is empty"),
            }),
            other => Err(ConfigError::MalformedModuleList {
                reason: format!("entry {index} is a {}, expected a module name", kind(other)),
            }),
        })
        .collect()
}

fn parse_border_width(value: &Value) -> Result<u32> {
    let parsed = match value {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse::<u32>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| ConfigError::MalformedScalar {
        key: "border_width".to_string(),
        value: render(value),
    })
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => format!("\"{text}\""),
        other => kind(other).to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
