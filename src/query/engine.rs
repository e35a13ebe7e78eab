//! Compound search+filter evaluation over the loaded manuscript table.
//!
//! A record passes when it matches the free-text term (if any) AND every
//! informative filter entry. Evaluation is a stable filter: matching
//! records keep their source order, nothing is re-sorted here.
//!
//! The per-field rules are deliberately asymmetric (exact membership for
//! categories, substring for shuhras and titles, equality for century);
//! they mirror distinct affordances of the filter UI that feeds them and
//! must not be unified.

use crate::models::{Field, Manuscript};
use crate::query::criteria::FilterCriteria;
use crate::query::dates::is_date_in_range;

/// All fields tried by an unscoped free-text search.
const ALL_SEARCH_FIELDS: [Field; 7] = [
    Field::UniqueId,
    Field::Author,
    Field::DeathDate,
    Field::Century,
    Field::Categories,
    Field::Titles,
    Field::Shuhras,
];

/// Evaluate `term` + `criteria` against `records`, returning the matching
/// subset in source order. An empty term with empty criteria is the
/// identity query and returns the full set.
pub fn search(
    records: &[Manuscript],
    term: &str,
    fields: &[Field],
    criteria: &FilterCriteria,
) -> Vec<Manuscript> {
    if term.is_empty() && criteria.is_empty() {
        return records.to_vec();
    }

    let term = term.trim().to_lowercase();

    records
        .iter()
        .filter(|ms| (term.is_empty() || matches_free_text(ms, &term, fields)))
        .filter(|ms| matches_criteria(ms, criteria))
        .cloned()
        .collect()
}

/// ANY-of match across the scoped fields (or all fields when the scope is
/// empty). `term` is already lowercased.
fn matches_free_text(ms: &Manuscript, term: &str, fields: &[Field]) -> bool {
    let scope: &[Field] = if fields.is_empty() {
        &ALL_SEARCH_FIELDS
    } else {
        fields
    };

    scope.iter().any(|&field| {
        if let Some(elements) = ms.sequence(field) {
            elements.iter().any(|e| e.to_lowercase().contains(term))
        } else {
            ms.scalar(field)
                .is_some_and(|v| v.to_lowercase().contains(term))
        }
    })
}

/// Conjunction over every informative filter entry.
fn matches_criteria(ms: &Manuscript, criteria: &FilterCriteria) -> bool {
    if let Some(id) = criteria.unique_id.as_deref().filter(|v| !v.is_empty()) {
        if !ms.unique_id.contains(id) {
            return false;
        }
    }

    if let Some(author) = criteria.author.as_deref().filter(|v| !v.is_empty()) {
        if !ms.author.contains(author) {
            return false;
        }
    }

    // Exact element membership, not substring
    if let Some(category) = criteria.categories.as_deref().filter(|v| !v.is_empty()) {
        if !ms.categories.iter().any(|c| c == category) {
            return false;
        }
    }

    if let Some(century) = criteria.century.as_deref().filter(|v| !v.is_empty()) {
        if ms.century != century {
            return false;
        }
    }

    if let Some(title) = criteria.titles.as_deref().filter(|v| !v.is_empty()) {
        if !ms.titles.iter().any(|t| t.contains(title)) {
            return false;
        }
    }

    if let Some(shuhra) = criteria.shuhras.as_deref().filter(|v| !v.is_empty()) {
        if !ms.shuhras.iter().any(|s| s.contains(shuhra)) {
            return false;
        }
    }

    if let Some(date) = criteria.death_date.as_deref().filter(|v| !v.is_empty()) {
        if !ms.death_date.contains(date) {
            return false;
        }
    }

    if let Some(range) = criteria.death_date_range.as_ref().filter(|r| !r.is_empty()) {
        if !is_date_in_range(&ms.death_date, range.min.as_deref(), range.max.as_deref()) {
            return false;
        }
    }

    true
}
