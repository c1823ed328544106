//! Process-wide read-only lookup table and fixed sequence.
//!
//! # Invariants
//! - Lookup keys are unique; entries carry no ordering guarantee.
//! - The fixed sequence is `1..=9` in ascending order on every read.
//! - Neither container is mutated after initialization.

use once_cell::sync::Lazy;
use std::collections::HashMap;

const FIXED_SEQUENCE: [i64; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

static LOOKUP_TABLE: Lazy<HashMap<i64, &'static str>> =
    Lazy::new(|| HashMap::from([(1, "apple"), (2, "ball")]));

/// Returns the full lookup table.
pub fn lookup_table() -> &'static HashMap<i64, &'static str> {
    &LOOKUP_TABLE
}

/// Looks up one entry by key.
///
/// Unknown keys yield `None`, never a default value.
pub fn lookup(key: i64) -> Option<&'static str> {
    LOOKUP_TABLE.get(&key).copied()
}

/// Returns the fixed ascending sequence `1..=9`.
pub fn fixed_sequence() -> &'static [i64] {
    &FIXED_SEQUENCE
}

#[cfg(test)]
mod tests {
    use super::{fixed_sequence, lookup, lookup_table};

    #[test]
    fn lookup_returns_known_entries() {
        assert_eq!(lookup(1), Some("apple"));
        assert_eq!(lookup(2), Some("ball"));
    }

    #[test]
    fn lookup_rejects_unknown_keys() {
        for key in [0, 3, -1, i64::MAX] {
            assert_eq!(lookup(key), None, "key {key} should be absent");
        }
    }

    #[test]
    fn lookup_table_has_exactly_two_entries() {
        assert_eq!(lookup_table().len(), 2);
    }

    #[test]
    fn fixed_sequence_is_stable_across_reads() {
        let expected: Vec<i64> = (1..=9).collect();
        assert_eq!(fixed_sequence(), expected.as_slice());
        assert_eq!(fixed_sequence(), fixed_sequence());
    }
}
