use crate::{components::Component, config::TAG_NAMESPACE};

use super::{DocsError, PropertyInfo, extract_property_info};

const TABLE_HEADER: &str =
    "| Property | Type | Description | Default |\n|----------|------|-------------|---------|";

/// Generates a markdown table documenting configuration properties.
pub fn generate_property_table(section_title: &str, tag: &str, properties: &[PropertyInfo]) -> String {
    if properties.is_empty() {
        return String::new();
    }

    let property_rows = properties
        .iter()
        .map(|prop| {
            format!(
                "| `{}` | `{}` | {} | `{}` |",
                prop.name, prop.type_name, prop.description, prop.default_value
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    format!("## {section_title}\n**Document tag:** `{tag}`\n\n{TABLE_HEADER}\n{property_rows}\n")
}

/// Generates the documentation page for one component.
///
/// Components without configurable properties get a header only.
///
/// # Errors
///
/// Returns `DocsError::SchemaConversion` if schema serialization fails.
pub fn component_page(component: &dyn Component) -> Result<String, DocsError> {
    let name = component.name();
    let schema_value =
        serde_json::to_value(component.schema()).map_err(|e| DocsError::SchemaConversion {
            component: name.to_string(),
            details: e.to_string(),
        })?;

    let properties = extract_property_info(&schema_value);
    let tag = format!("!{TAG_NAMESPACE}:{name}");

    let mut content = format!("# {} Component\n\n", title_case(name));
    content.push_str(&generate_property_table("Configuration", &tag, &properties));
    Ok(content)
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
