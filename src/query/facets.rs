//! Facet indexing: the sorted distinct values a field takes across the
//! loaded table, used to populate filter choice lists.

use crate::models::{Field, Manuscript};
use std::collections::BTreeSet;

/// Collect the distinct non-empty trimmed values observed for `field`
/// across all records, lexicographically sorted. Sequence fields
/// contribute every element; scalar fields contribute their single value.
pub fn unique_values(records: &[Manuscript], field: Field) -> Vec<String> {
    let mut values = BTreeSet::new();

    for ms in records {
        if let Some(elements) = ms.sequence(field) {
            for element in elements {
                let trimmed = element.trim();
                if !trimmed.is_empty() {
                    values.insert(trimmed.to_string());
                }
            }
        } else if let Some(value) = ms.scalar(field) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                values.insert(trimmed.to_string());
            }
        }
    }

    values.into_iter().collect()
}
