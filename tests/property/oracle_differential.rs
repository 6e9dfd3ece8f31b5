//! Differential testing: compare the index against obviously-correct oracles.
//!
//! Each query is checked against a linear scan or a direct suffix sort. If
//! they disagree, the oracle is right.

use super::common::{
    build_index, interval_strategy, naive_occurrences, naive_suffix_array, pattern_strategy,
    sorted_occurrences, terminated, text_strategy,
};
use fmdex::{NaiveSortBuilder, SaisBuilder, SuffixArrayBuilder};
use proptest::prelude::*;

// =============================================================================
// OCCURRENCES: index vs linear scan
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every occurrence reported by the index is exactly the scan result.
    #[test]
    fn diff_occurrences(
        text in text_strategy(b"acgt", 120),
        pattern in pattern_strategy(b"acgt", 6),
        (checkpoint, sampling) in interval_strategy(),
    ) {
        let index = build_index(&text, checkpoint, sampling);
        prop_assert_eq!(
            sorted_occurrences(&index, &pattern),
            naive_occurrences(&text, &pattern),
            "pattern {:?} in {:?}",
            String::from_utf8_lossy(&pattern),
            String::from_utf8_lossy(&text)
        );
    }

    /// Patterns taken from the text are always found at their source offset.
    #[test]
    fn diff_substring_found(
        text in text_strategy(b"ab", 80),
        start in 0usize..80,
        len in 1usize..10,
    ) {
        let start = start % text.len();
        let end = (start + len).min(text.len());
        let pattern = &text[start..end];
        let index = build_index(&text, 4, 4);

        prop_assert!(index.has_substring(pattern));
        prop_assert!(sorted_occurrences(&index, pattern).contains(&start));
    }

    /// Patterns with a symbol outside the text never match.
    #[test]
    fn diff_absent_symbol(
        text in text_strategy(b"acgt", 60),
        pattern in pattern_strategy(b"acgtx", 6),
    ) {
        let index = build_index(&text, 8, 8);
        if pattern.contains(&b'x') {
            prop_assert!(!index.has_substring(&pattern));
            prop_assert_eq!(index.count_matches(&pattern), 0);
            prop_assert!(index.occurrences(&pattern).is_empty());
        }
    }

    /// Suffix checks agree with `ends_with` on the raw text.
    #[test]
    fn diff_has_suffix(
        text in text_strategy(b"ab", 60),
        pattern in pattern_strategy(b"ab", 8),
        (checkpoint, sampling) in interval_strategy(),
    ) {
        let index = build_index(&text, checkpoint, sampling);
        prop_assert_eq!(index.has_suffix(&pattern), text.ends_with(&pattern));
    }
}

// =============================================================================
// CONSTRUCTION: suffix arrays and BWT vs direct sort
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// SA-IS matches a direct sort of all suffixes.
    #[test]
    fn diff_sais_vs_naive(text in text_strategy(b"abcd", 200)) {
        let text = terminated(&text, b'$');
        prop_assert_eq!(SaisBuilder.suffix_array(&text), naive_suffix_array(&text));
        prop_assert_eq!(NaiveSortBuilder.suffix_array(&text), naive_suffix_array(&text));
    }

    /// Every row resolves to the offset the direct sort puts there.
    #[test]
    fn diff_resolve_vs_naive(
        text in text_strategy(b"acgt", 100),
        (checkpoint, sampling) in interval_strategy(),
    ) {
        let index = build_index(&text, checkpoint, sampling);
        let expected = naive_suffix_array(&terminated(&text, b'$'));
        let resolved: Vec<usize> = (0..index.len()).map(|row| index.resolve(row)).collect();
        prop_assert_eq!(resolved, expected);
    }

    /// The BWT is the symbol preceding each sorted suffix.
    #[test]
    fn diff_bwt_vs_naive(text in text_strategy(b"acgt", 100)) {
        let index = build_index(&text, 50, 50);
        let full = terminated(&text, b'$');
        let n = full.len();
        let expected: Vec<u8> = naive_suffix_array(&full)
            .into_iter()
            .map(|offset| full[(offset + n - 1) % n])
            .collect();
        prop_assert_eq!(index.bwt(), expected);
    }
}
