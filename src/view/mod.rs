//! Presentation-facing projection of a result set: stable sort plus a
//! clamped page slice. The underlying result sequence is never mutated.

use crate::models::{Field, Manuscript};
use serde::{Deserialize, Serialize};

/// Sort order for projected results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Ascending
    }
}

/// One page of a projected result set, with the figures the presentation
/// layer needs to render pagination controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<Manuscript>,
    pub page_index: usize,
    pub page_size: usize,
    pub total: usize,
}

impl Page {
    /// Number of pages the full result set spans at this page size.
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }
}

/// Sort key for one record: the scalar value, or the first element of a
/// sequence field. Records with no extractable key sort as empty strings,
/// and the stable sort keeps equal keys in source order.
fn sort_key(ms: &Manuscript, field: Field) -> &str {
    ms.scalar(field)
        .or_else(|| ms.sequence(field).and_then(|s| s.first().map(String::as_str)))
        .unwrap_or("")
}

/// Project `results` into one page: optional stable sort by `sort`, then
/// the slice `[page_index * page_size, +page_size)` clamped to the result
/// length. An out-of-range page is an empty page, not an error.
pub fn project(
    results: &[Manuscript],
    sort: Option<(Field, SortOrder)>,
    page_index: usize,
    page_size: usize,
) -> Page {
    let mut ordered: Vec<&Manuscript> = results.iter().collect();

    if let Some((field, order)) = sort {
        ordered.sort_by(|a, b| {
            let cmp = sort_key(a, field).cmp(sort_key(b, field));
            match order {
                SortOrder::Ascending => cmp,
                SortOrder::Descending => cmp.reverse(),
            }
        });
    }

    let start = page_index.saturating_mul(page_size).min(ordered.len());
    let end = start.saturating_add(page_size).min(ordered.len());

    Page {
        items: ordered[start..end].iter().map(|ms| (*ms).clone()).collect(),
        page_index,
        page_size,
        total: results.len(),
    }
}
