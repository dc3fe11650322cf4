use crate::constants::*;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One XML element as read from an OSM extract: tag name, attributes and
/// child elements in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawElement {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<RawElement>,
}

impl RawElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute setter, mostly useful in tests.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Appends a `<tag k=".." v=".."/>` child.
    pub fn with_tag(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.children.push(
            RawElement::new(TAG_ELEMENT)
                .with_attribute("k", k)
                .with_attribute("v", v),
        );
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Looks up an attribute that must be present.
    ///
    /// # Errors
    ///
    /// Returns `MissingAttribute` naming this element and the attribute.
    pub fn require(&self, key: &str) -> AppResult<&str> {
        self.attribute(key)
            .ok_or_else(|| AppError::missing_attribute(&self.name, key))
    }

    /// Child `tag` elements in source order.
    pub fn tags(&self) -> impl Iterator<Item = &RawElement> {
        self.children.iter().filter(|c| c.name == TAG_ELEMENT)
    }
}

/// Flat JSON document shaped from one `node` or `way`.
///
/// Keys keep their insertion order. Re-inserting an existing key replaces the
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapedDocument {
    fields: Map<String, Value>,
}

impl ShapedDocument {
    pub fn new(element_type: &str, id: &str) -> Self {
        let mut doc = Self::default();
        doc.insert("type", Value::from(element_type));
        doc.insert("id", Value::from(id));
        doc
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn element_type(&self) -> Option<&str> {
        self.get("type").and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.get("id").and_then(Value::as_str)
    }

    pub fn address(&self) -> Option<&Map<String, Value>> {
        self.get("address").and_then(Value::as_object)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}

/// Abbreviation to full-word table used by the street name normalizer.
///
/// Keys are matched exactly against the last word of a street name, so "St"
/// and "St." are distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreetMapping(BTreeMap<String, String>);

impl StreetMapping {
    pub fn get(&self, abbreviation: &str) -> Option<&str> {
        self.0.get(abbreviation).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Rejects entries that can never match or would erase a word.
    pub fn validate(&self) -> AppResult<()> {
        for (abbreviation, full) in self.iter() {
            if abbreviation.is_empty() || abbreviation.contains(' ') {
                return Err(AppError::InvalidInput(format!(
                    "Street abbreviation '{abbreviation}' must be a single non-empty word"
                )));
            }
            if full.is_empty() {
                return Err(AppError::InvalidInput(format!(
                    "Street abbreviation '{abbreviation}' maps to an empty name"
                )));
            }
        }
        Ok(())
    }
}

impl Default for StreetMapping {
    fn default() -> Self {
        DEFAULT_STREET_MAPPING
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl FromIterator<(String, String)> for StreetMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
