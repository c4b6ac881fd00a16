//! Cross-check of sample index sequences against an index registry.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::input::Table;

/// Sample index values of one column that the registry does not list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexMismatch {
    pub column: String,
    /// Offending values in sample order, without repeats.
    pub values: Vec<String>,
}

/// Check that every value of each column in `samples` appears in the same
/// column of `registry`.
///
/// A column missing from the registry matches nothing; a column missing
/// from the samples has nothing to check.
pub fn check_index_membership(
    samples: &Table,
    registry: &Table,
    columns: &[String],
) -> Vec<IndexMismatch> {
    let mut mismatches = Vec::new();

    for column in columns {
        let Some(values) = samples.column(column) else {
            continue;
        };
        let allowed: HashSet<&str> = registry
            .column(column)
            .map(|v| v.into_iter().collect())
            .unwrap_or_default();

        let mut seen = HashSet::new();
        let missing: Vec<String> = values
            .into_iter()
            .filter(|value| !allowed.contains(value) && seen.insert(*value))
            .map(str::to_string)
            .collect();

        if !missing.is_empty() {
            mismatches.push(IndexMismatch {
                column: column.clone(),
                values: missing,
            });
        }
    }

    mismatches
}
