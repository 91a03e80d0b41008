use serde::de::DeserializeOwned;
use serde_yaml::{Value, value::TaggedValue};

use crate::core::TagError;

/// Longest tag accepted on a component configuration document.
pub const MAX_TAG_LEN: usize = 255;

/// One document read from the configuration stream.
///
/// The tag is split off the root node so components only see their
/// configuration tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    tag: Option<String>,
    value: Value,
}

impl ConfigDocument {
    /// Wraps a parsed YAML node, separating a root tag if present.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Tagged(tagged) => {
                let TaggedValue { tag, value } = *tagged;
                Self {
                    tag: Some(tag.to_string()),
                    value,
                }
            }
            value => Self { tag: None, value },
        }
    }

    /// Root tag as written, including the leading `!`.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Configuration tree below the tag.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether the document is untagged and holds nothing.
    pub fn is_empty(&self) -> bool {
        self.tag.is_none() && self.value.is_null()
    }

    /// Deserializes the configuration tree into `T`.
    ///
    /// An empty tree yields `T::default()`.
    ///
    /// # Errors
    /// Returns the deserialization error if the tree does not match `T`.
    pub fn parse<T>(&self) -> Result<T, serde_yaml::Error>
    where
        T: DeserializeOwned + Default,
    {
        if self.value.is_null() {
            return Ok(T::default());
        }
        serde_yaml::from_value(self.value.clone())
    }

    /// Interprets the tag as `!<namespace>:<component>`.
    ///
    /// # Errors
    /// Returns a [`TagError`] if the tag is missing or does not follow the
    /// scheme.
    pub fn component_block(&self, namespace: &str) -> Result<ComponentBlock<'_>, TagError> {
        let tag = self.tag().ok_or(TagError::Missing)?;
        let component = parse_tag(tag, namespace)?;

        Ok(ComponentBlock {
            component,
            document: self,
        })
    }
}

/// A document addressed to a single component.
#[derive(Debug, Clone, Copy)]
pub struct ComponentBlock<'a> {
    component: &'a str,
    document: &'a ConfigDocument,
}

impl<'a> ComponentBlock<'a> {
    /// Name of the component the block is addressed to.
    pub fn component(&self) -> &'a str {
        self.component
    }

    /// The full document.
    pub fn document(&self) -> &'a ConfigDocument {
        self.document
    }
}

/// Extracts the component name from a tag of the form
/// `!<namespace>:<component>`.
///
/// The leading `!` is optional. Component names are limited to ASCII
/// letters, digits, `_`, `-` and `.`.
///
/// # Errors
/// Returns a [`TagError`] describing the first violation found.
pub fn parse_tag<'t>(tag: &'t str, namespace: &str) -> Result<&'t str, TagError> {
    if tag.len() > MAX_TAG_LEN {
        return Err(TagError::TooLong {
            len: tag.len(),
            limit: MAX_TAG_LEN,
        });
    }

    let body = tag.strip_prefix('!').unwrap_or(tag);
    let (found, name) = body
        .split_once(':')
        .ok_or_else(|| TagError::MissingSeparator {
            expected: namespace.to_string(),
        })?;

    if found != namespace {
        return Err(TagError::WrongNamespace {
            found: found.to_string(),
            expected: namespace.to_string(),
        });
    }

    if name.is_empty() {
        return Err(TagError::EmptyName);
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    {
        return Err(TagError::InvalidName {
            name: name.to_string(),
        });
    }

    Ok(name)
}
