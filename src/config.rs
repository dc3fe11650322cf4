use crate::constants::*;
use crate::errors::{AppError, AppResult};
use crate::models::StreetMapping;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Resolved configuration with all values filled in (no Options).
///
/// Every field has a default, so an empty TOML file is valid. CLI flags are
/// applied on top of the loaded values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// Write each document indented over several lines instead of one line
    pub pretty: bool,

    // Document store
    /// Logical database holding the collection
    pub database: String,
    /// Collection queried by the aggregation
    pub collection: String,
    /// Field whose presence selects a document
    pub match_field: String,

    // Normalization
    /// Street suffix abbreviations. Replaces the built-in table when given.
    pub street_mapping: StreetMapping,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            match_field: DEFAULT_MATCH_FIELD.to_string(),
            street_mapping: StreetMapping::default(),
        }
    }
}

impl ResolvedConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the TOML is malformed, unknown keys are
    /// present, a name is empty, or the street mapping has an unusable entry.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ResolvedConfig = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        for (name, value) in [
            ("database", &self.database),
            ("collection", &self.collection),
            ("match_field", &self.match_field),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::InvalidInput(format!("{name} must not be empty")));
            }
        }
        self.street_mapping.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn load(contents: &str) -> AppResult<ResolvedConfig> {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "{contents}").unwrap();
        ResolvedConfig::from_toml_file(tmp.path())
    }

    #[test]
    fn default_config_values() {
        let config = ResolvedConfig::default();
        assert!(!config.pretty);
        assert_eq!(config.database, "opendata");
        assert_eq!(config.collection, "aurora_il");
        assert_eq!(config.match_field, "NHD:way_id");
        assert_eq!(config.street_mapping, StreetMapping::default());
    }

    #[test]
    fn empty_toml_uses_defaults() {
        assert_eq!(load("").unwrap(), ResolvedConfig::default());
    }

    #[test]
    fn street_mapping_table_replaces_defaults() {
        let config = load(
            r#"
            pretty = true

            [street_mapping]
            Pkwy = "Parkway"
            "St." = "Street"
            "#,
        )
        .unwrap();

        assert!(config.pretty);
        assert_eq!(config.street_mapping.len(), 2);
        assert_eq!(config.street_mapping.get("Pkwy"), Some("Parkway"));
        assert_eq!(config.street_mapping.get("Ave"), None);
    }

    #[test]
    fn unknown_key_errors() {
        assert!(load("batch_size = 10").is_err());
    }

    #[test]
    fn empty_match_field_errors() {
        assert!(matches!(
            load(r#"match_field = " ""#),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn multi_word_abbreviation_errors() {
        let result = load(
            r#"
            [street_mapping]
            "N St" = "North Street"
            "#,
        );
        assert!(result.is_err());
    }
}
