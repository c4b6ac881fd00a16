//! Property-based tests for the parser and checks.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p sschecker --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p sschecker --test property_tests
//! ```

use proptest::prelude::*;

use sschecker::input::{MISSING_VALUE, ParserConfig, Record, Table};
use sschecker::validation::{check_pairs, is_ordered};
use sschecker::{Schema, SectionParser, validate};

// =============================================================================
// Test Strategies
// =============================================================================

/// Cell text without delimiters, quotes or line breaks.
fn cell() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_ ./-]{0,12}"
}

fn section_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,15}"
}

fn sample_id() -> impl Strategy<Value = String> {
    "(NTC|[0-9]{1,3})-[0-9]{8}-(D|R)"
}

// =============================================================================
// Parser
// =============================================================================

proptest! {
    #[test]
    fn parser_never_panics(input in "\\PC{0,400}") {
        let parser = SectionParser::with_config(
            ParserConfig::default().with_tabular(["Data"]).with_array(["Manifests"]),
        );
        let _ = parser.parse_str(&input);
    }

    #[test]
    fn parser_never_panics_on_bytes(input in proptest::collection::vec(any::<u8>(), 0..400)) {
        let _ = SectionParser::new().parse_bytes(&input);
    }

    #[test]
    fn record_sections_keep_last_value(
        name in section_name(),
        key in "[A-Za-z][A-Za-z0-9_]{0,10}",
        first in cell(),
        second in cell(),
    ) {
        let text = format!("[{}]\n{},{}\n{},{}\n", name, key, first, key, second);
        let doc = SectionParser::new().parse_str(&text).unwrap();
        let record = doc.get(&name).and_then(|c| c.as_record()).unwrap();
        prop_assert_eq!(record.get(&key), Some(&second));
    }

    #[test]
    fn skipped_lines_are_ignored(skip in 0usize..5, junk in "[a-z ]{1,20}") {
        let mut text = String::new();
        for _ in 0..skip {
            text.push_str(&junk);
            text.push('\n');
        }
        text.push_str("[Header]\nRunName,240115_01\n");

        let parser = SectionParser::with_config(ParserConfig::default().with_skip_lines(skip));
        let doc = parser.parse_str(&text).unwrap();
        prop_assert_eq!(doc.len(), 1);
    }
}

// =============================================================================
// Table shape
// =============================================================================

proptest! {
    #[test]
    fn rows_always_match_header_width(
        width in 1usize..8,
        rows in proptest::collection::vec(proptest::collection::vec(cell(), 0..12), 0..10),
    ) {
        let columns: Vec<String> = (0..width).map(|i| format!("col{}", i)).collect();
        let mut table = Table::new(columns.clone());
        for row in &rows {
            table.push_values(row.clone());
        }

        prop_assert_eq!(table.row_count(), rows.len());
        for (row, source) in table.rows.iter().zip(&rows) {
            prop_assert_eq!(row.len(), width);
            for (i, column) in columns.iter().enumerate() {
                let expected = source.get(i).map(String::as_str).unwrap_or(MISSING_VALUE);
                prop_assert_eq!(row.get(column).map(String::as_str), Some(expected));
            }
        }
    }
}

// =============================================================================
// Ordering
// =============================================================================

proptest! {
    #[test]
    fn sorted_sequences_are_ordered(mut values in proptest::collection::vec(any::<i64>(), 0..50)) {
        values.sort();
        prop_assert!(is_ordered(&values));
        values.reverse();
        prop_assert!(is_ordered(&values));
    }

    #[test]
    fn ordered_matches_sort_comparison(values in proptest::collection::vec(0u8..10, 0..20)) {
        let mut ascending = values.clone();
        ascending.sort();
        let mut descending = ascending.clone();
        descending.reverse();

        prop_assert_eq!(is_ordered(&values), values == ascending || values == descending);
    }
}

// =============================================================================
// Pairing and validation
// =============================================================================

proptest! {
    #[test]
    fn complete_pairs_are_clean(prefixes in proptest::collection::hash_set("[0-9]{1,3}-[0-9]{8}", 0..20)) {
        let ids: Vec<String> = prefixes
            .iter()
            .flat_map(|p| [format!("{}-D", p), format!("{}-R", p)])
            .collect();
        let report = check_pairs(&ids).unwrap();
        prop_assert!(report.is_clean());
    }

    #[test]
    fn findings_are_bounded_by_ids(ids in proptest::collection::vec(sample_id(), 0..30)) {
        let report = check_pairs(&ids).unwrap();
        prop_assert!(report.unpaired.len() <= ids.len());
        prop_assert!(report.duplicates.len() <= ids.len() / 2);
    }

    #[test]
    fn every_schema_field_is_classified(
        fields in proptest::collection::btree_map("[A-Za-z]{1,8}", cell(), 0..10),
        expected in proptest::collection::btree_map("[A-Za-z]{1,8}", cell(), 0..10),
    ) {
        let record: Record = fields.clone().into_iter().collect();
        let schema: Schema = expected
            .iter()
            .map(|(k, v)| (k.clone(), sschecker::Rule::literal(v.clone())))
            .collect();

        let result = validate(&record, &schema);
        prop_assert_eq!(
            result.missing_keys.len() + result.valid_keys.len() + result.invalid_keys.len(),
            expected.len()
        );
        prop_assert_eq!(result.is_valid(), expected.iter().all(|(k, v)| fields.get(k) == Some(v)));
    }
}
