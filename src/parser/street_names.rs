use crate::models::StreetMapping;

/// Expands an abbreviated street suffix using `mapping`.
///
/// The name is split on its last space and the final word is looked up
/// exactly (case-sensitive, trailing period included). On a match the word is
/// replaced and the rest of the name is kept as is; otherwise the name is
/// returned unchanged.
///
/// A single-word name that is itself an abbreviation ("St") becomes the bare
/// mapped word ("Street"), without a leading space.
///
/// # Example
///
/// ```
/// use osm_wrangle::models::StreetMapping;
/// use osm_wrangle::parser::update_name;
///
/// let mapping = StreetMapping::default();
/// assert_eq!(update_name("Main St", &mapping), "Main Street");
/// assert_eq!(update_name("Oak Ct.", &mapping), "Oak Ct.");
/// ```
pub fn update_name(name: &str, mapping: &StreetMapping) -> String {
    let (prefix, street_type) = match name.rsplit_once(' ') {
        Some((prefix, last)) => (Some(prefix), last),
        None => (None, name),
    };

    match (prefix, mapping.get(street_type)) {
        (Some(prefix), Some(full)) => format!("{prefix} {full}"),
        (None, Some(full)) => full.to_string(),
        (_, None) => name.to_string(),
    }
}
