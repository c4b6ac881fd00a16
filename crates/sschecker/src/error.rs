//! Error types for the sschecker library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for samplesheet checking.
#[derive(Debug, Error)]
pub enum SscheckError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed section structure.
    #[error("Format error at line {line}: {message}")]
    Format { line: usize, message: String },

    /// A section required by the sheet profile is absent.
    #[error("Missing section: [{section}]")]
    MissingSection { section: String },

    /// Schema fields absent from a section, with any invalid entries found
    /// alongside them.
    #[error("Missing keys in [{section}]: {fields:?}{}", invalid_suffix(.invalid))]
    MissingFields {
        section: String,
        fields: Vec<String>,
        invalid: Vec<String>,
    },

    /// Values that failed their literal or pattern rule.
    #[error("Invalid entry in [{section}]: {values:?}")]
    InvalidFields {
        section: String,
        values: Vec<String>,
    },

    /// The same key appears in more than one flattened record.
    #[error("Duplicate keys: {keys:?}")]
    DuplicateKeys { keys: Vec<String> },

    /// Index columns that are neither ascending nor descending.
    #[error("Columns not ordered: {columns:?}")]
    Ordering { columns: Vec<String> },

    /// Unpaired or duplicated sample identifiers.
    #[error("{violations} exceptions detected for D/R sample pairs")]
    Pairing { violations: usize },

    /// A sample identifier carries neither the DNA nor the RNA marker.
    #[error("Sample format need to be either DNA or RNA: '{sample_id}'")]
    UnclassifiableSample { sample_id: String },

    /// Sample index values not present in the index registry.
    #[error("Index values not found in registry for columns: {columns:?}")]
    IndexMembership { columns: Vec<String> },

    /// Several sample-level checks failed in the same section.
    #[error("A total of {} exceptions detected in [{section}]", errors.len())]
    SampleChecks {
        section: String,
        errors: Vec<SscheckError>,
    },

    /// Error writing rendered report output.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regex compilation error.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl SscheckError {
    /// True for errors raised because the data failed a check, as opposed
    /// to errors reading or understanding the input.
    pub fn is_violation(&self) -> bool {
        matches!(
            self,
            SscheckError::MissingFields { .. }
                | SscheckError::InvalidFields { .. }
                | SscheckError::DuplicateKeys { .. }
                | SscheckError::Ordering { .. }
                | SscheckError::Pairing { .. }
                | SscheckError::UnclassifiableSample { .. }
                | SscheckError::IndexMembership { .. }
                | SscheckError::SampleChecks { .. }
        )
    }
}

fn invalid_suffix(invalid: &[String]) -> String {
    if invalid.is_empty() {
        String::new()
    } else {
        format!("; invalid entries: {:?}", invalid)
    }
}

/// Result type alias for sschecker operations.
pub type Result<T> = std::result::Result<T, SscheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_invalid_entries() {
        let err = SscheckError::MissingFields {
            section: "NSWHP".into(),
            fields: vec!["Instrument ID".into()],
            invalid: vec!["Sequencing Site".into()],
        };
        assert_eq!(
            err.to_string(),
            r#"Missing keys in [NSWHP]: ["Instrument ID"]; invalid entries: ["Sequencing Site"]"#
        );

        let err = SscheckError::MissingFields {
            section: "Reads".into(),
            fields: vec!["Read1Cycles".into()],
            invalid: Vec::new(),
        };
        assert_eq!(err.to_string(), r#"Missing keys in [Reads]: ["Read1Cycles"]"#);
        assert!(err.is_violation());
    }
}
