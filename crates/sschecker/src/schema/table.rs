//! Per-section schemas and the set of schemas for a sheet dialect.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::rule::Rule;
use crate::error::Result;
use crate::sheet::Role;

/// Ordered mapping from field name to rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: IndexMap<String, Rule>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field with any rule.
    pub fn with_rule(mut self, field: impl Into<String>, rule: Rule) -> Self {
        self.fields.insert(field.into(), rule);
        self
    }

    /// Add a field that must equal `value`.
    pub fn with_literal(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_rule(field, Rule::literal(value))
    }

    /// Add a field that must match `pattern`.
    pub fn with_pattern(self, field: impl Into<String>, pattern: &str) -> Result<Self> {
        Ok(self.with_rule(field, Rule::pattern(pattern)?))
    }

    /// Get the rule for a field.
    pub fn get(&self, field: &str) -> Option<&Rule> {
        self.fields.get(field)
    }

    /// Iterate over fields and rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, Rule)> for Schema {
    fn from_iter<I: IntoIterator<Item = (String, Rule)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Schemas for every section role of a sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaSet {
    schemas: IndexMap<Role, Schema>,
}

impl SchemaSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schema for a role.
    pub fn with_schema(mut self, role: Role, schema: Schema) -> Self {
        self.schemas.insert(role, schema);
        self
    }

    /// Get the schema for a role.
    pub fn get(&self, role: Role) -> Option<&Schema> {
        self.schemas.get(&role)
    }

    /// Roles that have a schema.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.schemas.keys().copied()
    }

    /// Built-in schemas for TSO500 run samplesheets.
    pub fn tso500() -> Result<Self> {
        super::tso500::schema_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_keeps_declaration_order() {
        let schema = Schema::new()
            .with_literal("Read1Cycles", "101")
            .with_literal("Read2Cycles", "101")
            .with_literal("Index1Cycles", "10");

        let names: Vec<_> = schema.field_names().collect();
        assert_eq!(names, vec!["Read1Cycles", "Read2Cycles", "Index1Cycles"]);
    }

    #[test]
    fn test_schema_from_json() {
        let json = r#"{
            "InstrumentType": "NovaSeq6000",
            "RunName": {"pattern": "^\\d{6}_\\d{2}$"}
        }"#;
        let schema: Schema = serde_json::from_str(json).unwrap();

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.get("InstrumentType"), Some(&Rule::literal("NovaSeq6000")));
        assert_eq!(schema.get("RunName").map(Rule::kind), Some("pattern"));
    }

    #[test]
    fn test_schema_set_by_role() {
        let set: SchemaSet = serde_json::from_str(
            r#"{"reads": {"Read1Cycles": "151"}, "site": {"Sequencing Site": "JHH"}}"#,
        )
        .unwrap();

        assert_eq!(
            set.get(Role::Reads).and_then(|s| s.get("Read1Cycles")),
            Some(&Rule::literal("151"))
        );
        assert!(set.get(Role::Header).is_none());
    }
}
