//! Schema validation over record and tabular sections.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::input::{Record, Table};
use crate::schema::{Rule, Schema};

/// A section as seen by the validator.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    /// Flat key/value section; results name fields.
    Record(&'a Record),
    /// Tabular section; results hold cell values.
    Table(&'a Table),
}

impl<'a> From<&'a Record> for View<'a> {
    fn from(record: &'a Record) -> Self {
        View::Record(record)
    }
}

impl<'a> From<&'a Table> for View<'a> {
    fn from(table: &'a Table) -> Self {
        View::Table(table)
    }
}

impl View<'_> {
    /// Whether the field is a key (record) or column (table).
    pub fn contains(&self, field: &str) -> bool {
        match self {
            View::Record(record) => record.contains_key(field),
            View::Table(table) => table.has_column(field),
        }
    }
}

/// Outcome of checking one view against one schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Schema fields absent from the view.
    pub missing_keys: BTreeSet<String>,
    /// Field names (records) or cell values (tables) that passed.
    pub valid_keys: Vec<String>,
    /// Field names (records) or cell values (tables) that failed.
    pub invalid_keys: Vec<String>,
}

impl ValidationResult {
    /// True when nothing is missing or invalid.
    pub fn is_valid(&self) -> bool {
        self.missing_keys.is_empty() && self.invalid_keys.is_empty()
    }
}

/// Check a view against a schema.
///
/// Literal rules compare exactly; pattern rules must match starting at the
/// first character. A field with an [`Rule::Unsupported`] rule is reported
/// invalid by name, in both record and table views.
pub fn validate<'a>(view: impl Into<View<'a>>, schema: &Schema) -> ValidationResult {
    let view = view.into();
    let mut result = ValidationResult::default();

    for (field, rule) in schema.iter() {
        if !view.contains(field) {
            result.missing_keys.insert(field.to_string());
            continue;
        }

        if let Rule::Unsupported(_) = rule {
            result.invalid_keys.push(field.to_string());
            continue;
        }

        match view {
            View::Record(record) => {
                let value = record.get(field).map(String::as_str).unwrap_or_default();
                classify(rule, value, field, &mut result);
            }
            View::Table(table) => {
                for value in table.column(field).unwrap_or_default() {
                    classify(rule, value, value, &mut result);
                }
            }
        }
    }

    result
}

/// Record `key` as valid or invalid depending on whether `value` passes.
fn classify(rule: &Rule, value: &str, key: &str, result: &mut ValidationResult) {
    if rule.matches(value).unwrap_or(false) {
        result.valid_keys.push(key.to_string());
    } else {
        result.invalid_keys.push(key.to_string());
    }
}
