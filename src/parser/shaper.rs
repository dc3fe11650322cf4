use super::street_names::update_name;
use crate::constants::*;
use crate::errors::{AppError, AppResult};
use crate::models::{RawElement, ShapedDocument, StreetMapping};
use serde_json::{Map, Value};

/// Shapes a `node` or `way` element into a flat document.
///
/// Returns `Ok(None)` for any other element. The document carries `type`,
/// `id`, optional `visible`, optional `pos` (`[lat, lon]` when both are
/// present), the `created` provenance block, one top-level key per non-address
/// tag, and an `address` block built from `addr:*` tags. `addr:street:*` tags
/// are dropped and `addr:street` is passed through [`update_name`].
///
/// # Errors
///
/// - `MissingAttribute` if `id`, any created attribute, or a tag's `k`/`v` is absent
/// - `InvalidCoordinate` if `lat`/`lon` is not a finite number
pub fn shape_element(
    element: &RawElement,
    mapping: &StreetMapping,
) -> AppResult<Option<ShapedDocument>> {
    if !SHAPED_ELEMENTS.contains(&element.name.as_str()) {
        return Ok(None);
    }

    let mut doc = ShapedDocument::new(&element.name, element.require("id")?);

    if let Some(visible) = element.attribute("visible") {
        doc.insert("visible", Value::from(visible));
    }

    if let (Some(lat), Some(lon)) = (element.attribute("lat"), element.attribute("lon")) {
        let pos = vec![
            Value::from(parse_coordinate("lat", lat)?),
            Value::from(parse_coordinate("lon", lon)?),
        ];
        doc.insert("pos", Value::Array(pos));
    }

    let mut created = Map::with_capacity(CREATED_FIELDS.len());
    for field in CREATED_FIELDS {
        created.insert(field.to_string(), Value::from(element.require(field)?));
    }
    doc.insert("created", Value::Object(created));

    let mut address = Map::new();
    for tag in element.tags() {
        let key = tag.require("k")?;
        let value = tag.require("v")?;

        match key.strip_prefix(ADDRESS_PREFIX) {
            Some(field) if field.starts_with(NESTED_STREET_PREFIX) => {}
            Some(field) if field == STREET_FIELD => {
                address.insert(field.to_string(), Value::from(update_name(value, mapping)));
            }
            Some(field) => {
                address.insert(field.to_string(), Value::from(value));
            }
            None => doc.insert(key, Value::from(value)),
        }
    }

    if !address.is_empty() {
        doc.insert("address", Value::Object(address));
    }

    Ok(Some(doc))
}

fn parse_coordinate(attribute: &str, text: &str) -> AppResult<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::InvalidCoordinate {
            attribute: attribute.to_string(),
            value: text.to_string(),
        })
}
