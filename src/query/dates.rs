//! Range semantics over noisy free-text date strings.
//!
//! Death dates come straight from the source table: Hijri years with era
//! markers ("١٠٥٤هـ"), dual dates ("660/1262"), or nothing at all. Range
//! filtering compares the first digit run of the date against the first
//! digit run of each bound.

use crate::normalize::extract_integer;

fn informative(bound: Option<&str>) -> bool {
    bound.is_some_and(|b| !b.trim().is_empty())
}

/// Whether `date` falls inside the inclusive `[min, max]` range.
///
/// An empty date is in range only when `min` is also empty: a max-only
/// range excludes records with unknown dates, while a fully unconstrained
/// range includes everything. A date or bound whose integer extraction
/// fails contributes no constraint (bound) or never matches (date).
pub fn is_date_in_range(date: &str, min: Option<&str>, max: Option<&str>) -> bool {
    if date.trim().is_empty() {
        return !informative(min);
    }

    let Some(date_value) = extract_integer(date) else {
        return false;
    };

    if informative(min) {
        if let Some(min_value) = min.and_then(extract_integer) {
            if date_value < min_value {
                return false;
            }
        }
    }

    if informative(max) {
        if let Some(max_value) = max.and_then(extract_integer) {
            if date_value > max_value {
                return false;
            }
        }
    }

    true
}
