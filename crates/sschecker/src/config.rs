//! Checker configuration: dialect profiles, schemas and sample-check columns.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SscheckError};
use crate::schema::SchemaSet;
use crate::sheet::{Role, SheetProfile};

/// Everything the report driver needs besides the input files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Dialect of the samplesheet under test.
    pub samplesheet: SheetProfile,
    /// Dialect of the index/chemistry registry.
    pub index_registry: SheetProfile,
    /// Field rules per section role.
    pub schemas: SchemaSet,
    /// Column holding sample identifiers in the data table.
    pub sample_id_column: String,
    /// Data columns that must be ascending or descending.
    pub ordered_columns: Vec<String>,
    /// Data columns whose values must appear in the registry.
    pub index_columns: Vec<String>,
}

/// A configuration file; every field is optional and overrides the
/// built-in value it names.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    samplesheet: Option<SheetProfile>,
    index_registry: Option<SheetProfile>,
    schemas: Option<SchemaSet>,
    sample_id_column: Option<String>,
    ordered_columns: Option<Vec<String>>,
    index_columns: Option<Vec<String>>,
}

impl CheckerConfig {
    /// Built-in configuration for TSO500 run samplesheets.
    pub fn tso500() -> Result<Self> {
        Ok(Self {
            samplesheet: SheetProfile::tso500(),
            index_registry: SheetProfile::index_registry(),
            schemas: SchemaSet::tso500()?,
            sample_id_column: "Sample_ID".to_string(),
            ordered_columns: vec![
                "Index_ID".to_string(),
                "I7_Index_ID".to_string(),
                "I5_Index_ID".to_string(),
            ],
            index_columns: vec!["index".to_string(), "index2".to_string()],
        })
    }

    /// Load overrides from a JSON file on top of the built-in configuration.
    ///
    /// Schemas are replaced per role: a file that only lists `site` keeps the
    /// built-in rules for every other section.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SscheckError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let overrides: ConfigFile = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            SscheckError::Config(format!("failed to parse '{}': {}", path.display(), e))
        })?;

        Self::tso500()?.merge(overrides)
    }

    /// Parse overrides from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let overrides: ConfigFile = serde_json::from_str(json)?;
        Self::tso500()?.merge(overrides)
    }

    fn merge(mut self, overrides: ConfigFile) -> Result<Self> {
        if let Some(profile) = overrides.samplesheet {
            self.samplesheet = profile;
        }
        if let Some(profile) = overrides.index_registry {
            self.index_registry = profile;
        }
        if let Some(schemas) = overrides.schemas {
            for role in schemas.roles() {
                if let Some(schema) = schemas.get(role) {
                    self.schemas = self.schemas.with_schema(role, schema.clone());
                }
            }
        }
        if let Some(column) = overrides.sample_id_column {
            self.sample_id_column = column;
        }
        if let Some(columns) = overrides.ordered_columns {
            self.ordered_columns = columns;
        }
        if let Some(columns) = overrides.index_columns {
            self.index_columns = columns;
        }

        self.check()?;
        Ok(self)
    }

    /// Reject configurations the driver cannot run.
    fn check(&self) -> Result<()> {
        self.samplesheet.check_sections()?;
        self.index_registry.check_sections()?;
        if !self.samplesheet.sections.contains_key(&Role::Data) {
            return Err(SscheckError::Config(format!(
                "profile '{}' has no data section",
                self.samplesheet.name
            )));
        }
        if !self.index_registry.sections.contains_key(&Role::Data) {
            return Err(SscheckError::Config(format!(
                "profile '{}' has no data section",
                self.index_registry.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Rule;

    #[test]
    fn test_builtin_config() {
        let config = CheckerConfig::tso500().unwrap();
        assert_eq!(config.sample_id_column, "Sample_ID");
        assert_eq!(config.ordered_columns.len(), 3);
        assert_eq!(config.samplesheet.section_name(Role::Site), Some("NSWHP"));
    }

    #[test]
    fn test_site_override_keeps_other_schemas() {
        let config = CheckerConfig::from_json(
            r#"{"schemas": {"site": {"Sequencing Site": "UCSF", "Instrument ID": "A01234"}}}"#,
        )
        .unwrap();

        let site = config.schemas.get(Role::Site).unwrap();
        assert_eq!(site.get("Sequencing Site"), Some(&Rule::literal("UCSF")));
        assert!(config.schemas.get(Role::Header).is_some());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(CheckerConfig::from_json(r#"{"colour": "blue"}"#).is_err());
    }

    #[test]
    fn test_profile_without_data_rejected() {
        let err = CheckerConfig::from_json(
            r#"{"samplesheet": {"name": "bare", "sections": {"header": "Header"}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SscheckError::Config(_)));
    }

    #[test]
    fn test_profile_with_shared_section_rejected() {
        let err = CheckerConfig::from_json(
            r#"{"samplesheet": {"name": "merged", "sections": {
                "header": "Header", "site": "Header", "data": "Data"}}}"#,
        )
        .unwrap_err();
        match err {
            SscheckError::Config(message) => assert!(message.contains("[Header]")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = CheckerConfig::load("/nonexistent/sschecker.json").unwrap_err();
        assert!(matches!(err, SscheckError::Io { .. }));
    }
}
