//! Property extraction from component configuration schemas.

use serde_json::{Map, Value};

/// One documented property of a configuration block.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyInfo {
    /// Key as written in the YAML block.
    pub name: String,
    /// JSON Schema type; alternatives are joined with ` | `.
    pub type_name: String,
    /// Doc comment of the field, or a placeholder.
    pub description: String,
    /// Rendered default value, or "-" if the schema has none.
    pub default_value: String,
}

/// Extracts the top-level properties of a JSON Schema document.
///
/// Returns an empty vector if the schema has no `properties` object.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use strata::docs::schema::extract_property_info;
///
/// let schema = json!({
///     "properties": {
///         "terminal": {
///             "type": "string",
///             "description": "Command started by the terminal action.",
///             "default": "xterm"
///         }
///     }
/// });
///
/// let properties = extract_property_info(&schema);
/// assert_eq!(properties[0].name, "terminal");
/// assert_eq!(properties[0].default_value, "\"xterm\"");
/// ```
pub fn extract_property_info(schema: &Value) -> Vec<PropertyInfo> {
    schema
        .get("properties")
        .and_then(Value::as_object)
        .map(collect_properties)
        .unwrap_or_default()
}

fn collect_properties(properties: &Map<String, Value>) -> Vec<PropertyInfo> {
    properties
        .iter()
        .map(|(name, property)| PropertyInfo {
            name: name.clone(),
            type_name: type_name(property),
            description: property
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("No description provided")
                .to_string(),
            default_value: property.get("default").map_or_else(|| "-".to_string(), render),
        })
        .collect()
}

fn type_name(property: &Value) -> String {
    match property.get("type") {
        Some(Value::String(single)) => single.clone(),
        Some(Value::Array(alternatives)) => alternatives
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(" | "),
        _ => "unknown".to_string(),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        other => other.to_string(),
    }
}
