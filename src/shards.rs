//! Shard routing and id equivalence rules.
//!
//! Location records are partitioned into fixed-size shards by the numeric
//! core of the manuscript id. `CHUNK_SIZE` must match the partitioning that
//! produced the shard files; it is an external contract, not a tunable.

use crate::normalize::{digit_run, extract_integer};

/// Number of ids per location shard, fixed by the upstream partitioning.
pub const CHUNK_SIZE: u64 = 1000;

/// Map a manuscript id to the 1-based index of the shard expected to hold
/// it. Ids with no numeric component route to shard 1.
pub fn route_to_shard(id: &str) -> u32 {
    let numeric = extract_integer(id).unwrap_or(0);
    (numeric / CHUNK_SIZE) as u32 + 1
}

/// Id equivalence used when scanning a shard: exact match on the trimmed
/// ids first, then a fallback on the first digit run of each side. The
/// fallback tolerates differing alphabetic prefixes (a stored "MS-1054"
/// matches a queried bare "1054" and vice versa).
pub fn ids_match(stored: &str, queried: &str) -> bool {
    let stored = stored.trim();
    let queried = queried.trim();

    if stored == queried {
        return true;
    }

    match (digit_run(stored), digit_run(queried)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_first_bucket() {
        for id in ["0", "1", "500", "999"] {
            assert_eq!(route_to_shard(id), 1, "id {}", id);
        }
    }

    #[test]
    fn test_route_second_bucket() {
        for id in ["1000", "1500", "1999"] {
            assert_eq!(route_to_shard(id), 2, "id {}", id);
        }
    }

    #[test]
    fn test_route_is_monotonic_in_numeric_value() {
        let shards: Vec<u32> = (0u64..5000)
            .step_by(250)
            .map(|n| route_to_shard(&n.to_string()))
            .collect();
        assert!(shards.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_route_ignores_prefix_and_digit_script() {
        assert_eq!(route_to_shard("MS-1054"), route_to_shard("1054"));
        assert_eq!(route_to_shard("١٠٥٤"), route_to_shard("1054"));
    }

    #[test]
    fn test_route_without_numeric_component_defaults_to_first_shard() {
        assert_eq!(route_to_shard(""), 1);
        assert_eq!(route_to_shard("no-digits-here"), 1);
    }

    #[test]
    fn test_ids_match_exact() {
        assert!(ids_match("MS-1054", "MS-1054"));
        assert!(ids_match(" MS-1054 ", "MS-1054"));
    }

    #[test]
    fn test_ids_match_numeric_fallback() {
        assert!(ids_match("MS-1054", "1054"));
        assert!(ids_match("1054", "MS-1054"));
        assert!(!ids_match("MS-1054", "1055"));
    }

    #[test]
    fn test_ids_without_digits_only_match_exactly() {
        assert!(ids_match("uncatalogued", "uncatalogued"));
        assert!(!ids_match("uncatalogued", "unlisted"));
        assert!(!ids_match("uncatalogued", "1054"));
    }
}
