//! Monotonic ordering check for index columns.

use crate::input::Table;

/// True when the values are non-decreasing or non-increasing.
///
/// Empty, single-element and all-equal sequences count as ordered.
pub fn is_ordered<T: PartialOrd>(values: &[T]) -> bool {
    let ascending = values.windows(2).all(|w| w[0] <= w[1]);
    ascending || values.windows(2).all(|w| w[0] >= w[1])
}

/// Columns of `table` whose values are not ordered.
///
/// Columns absent from the table are skipped; schema validation reports
/// those.
pub fn unordered_columns<'a>(table: &Table, columns: &'a [String]) -> Vec<&'a str> {
    columns
        .iter()
        .filter(|column| {
            table
                .column(column)
                .is_some_and(|values| !is_ordered(values.as_slice()))
        })
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_sequences() {
        assert!(is_ordered(&[1, 2, 3]));
        assert!(is_ordered(&[3, 2, 1]));
        assert!(!is_ordered(&[1, 3, 2]));
        assert!(is_ordered(&[5, 5, 5]));
        assert!(is_ordered(&[1, 1, 2, 2]));
    }

    #[test]
    fn test_trivial_sequences() {
        assert!(is_ordered::<i32>(&[]));
        assert!(is_ordered(&[42]));
    }

    #[test]
    fn test_strings_compare_lexicographically() {
        assert!(is_ordered(&["UDP0001", "UDP0002", "UDP0010"]));
        assert!(!is_ordered(&["UDP0002", "UDP0001", "UDP0003"]));
        assert!(is_ordered(&["UDP0010", "UDP0009", "UDP0001"]));
    }

    #[test]
    fn test_unordered_columns() {
        let mut table = Table::new(vec!["Index_ID".into(), "I7_Index_ID".into()]);
        table.push_values(vec!["UDP0001".into(), "UDP0002".into()]);
        table.push_values(vec!["UDP0002".into(), "UDP0001".into()]);
        table.push_values(vec!["UDP0003".into(), "UDP0003".into()]);

        let columns = vec![
            "Index_ID".to_string(),
            "I7_Index_ID".to_string(),
            "I5_Index_ID".to_string(),
        ];
        assert_eq!(unordered_columns(&table, &columns), vec!["I7_Index_ID"]);
    }
}
