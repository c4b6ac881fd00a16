//! Merging several record sections into one.

use indexmap::IndexMap;

use crate::error::{Result, SscheckError};
use crate::input::Record;

/// Keys that appear in more than one record, in first-appearance order.
pub fn find_duplicate_keys(records: &[&Record]) -> Vec<String> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for record in records {
        for key in record.keys() {
            *counts.entry(key.as_str()).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(key, _)| key.to_string())
        .collect()
}

/// Merge records into one.
///
/// Fails with [`SscheckError::DuplicateKeys`] listing every key present in
/// more than one record.
pub fn flatten_records(records: &[&Record]) -> Result<Record> {
    let duplicates = find_duplicate_keys(records);
    if !duplicates.is_empty() {
        return Err(SscheckError::DuplicateKeys { keys: duplicates });
    }

    Ok(records
        .iter()
        .flat_map(|record| record.iter())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect())
}
