//! Structural properties of the index that hold for every text.

use super::common::{build_index, interval_strategy, pattern_strategy, text_strategy};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Rank never decreases along the rows and ends at the symbol's total.
    #[test]
    fn prop_rank_monotone(
        text in text_strategy(b"acgt", 100),
        (checkpoint, _) in interval_strategy(),
    ) {
        let index = build_index(&text, checkpoint, 50);
        let bwt = index.bwt();

        for &symbol in b"$acgt" {
            let mut previous = 0;
            for row in 0..index.len() {
                let rank = index.rank(symbol, row);
                prop_assert!(rank >= previous);
                prop_assert_eq!(
                    rank,
                    bwt[..=row].iter().filter(|&&b| b == symbol).count()
                );
                prop_assert_eq!(index.rank_before(symbol, row), rank - usize::from(bwt[row] == symbol));
                previous = rank;
            }
            let total = text.iter().filter(|&&b| b == symbol).count()
                + usize::from(symbol == b'$');
            prop_assert_eq!(previous, total);
        }
    }

    /// Extending a pattern to the right narrows its range.
    #[test]
    fn prop_ranges_nest(
        text in text_strategy(b"acgt", 100),
        pattern in pattern_strategy(b"acgt", 5),
        next in prop::sample::select(b"acgt".to_vec()),
    ) {
        let index = build_index(&text, 8, 8);
        let outer = index.range(&pattern);

        let mut extended = pattern.clone();
        extended.push(next);
        let inner = index.range(&extended);

        prop_assert!(inner.len() <= outer.len());
        if !inner.is_empty() {
            prop_assert!(outer.start <= inner.start && inner.end <= outer.end);
        }
    }

    /// LF steps one position back in the text.
    #[test]
    fn prop_lf_steps_back(
        text in text_strategy(b"acgt", 100),
        (checkpoint, sampling) in interval_strategy(),
    ) {
        let index = build_index(&text, checkpoint, sampling);
        let n = index.len();
        for row in 0..n {
            let offset = index.resolve(row);
            prop_assert_eq!(index.resolve(index.lf(row)), (offset + n - 1) % n);
        }
    }

    /// Range size and occurrence count agree, and offsets are distinct.
    #[test]
    fn prop_count_matches_occurrences(
        text in text_strategy(b"ab", 80),
        pattern in pattern_strategy(b"ab", 6),
        (checkpoint, sampling) in interval_strategy(),
    ) {
        let index = build_index(&text, checkpoint, sampling);
        let mut offsets = index.occurrences(&pattern);
        prop_assert_eq!(offsets.len(), index.count_matches(&pattern));

        offsets.sort_unstable();
        offsets.dedup();
        prop_assert_eq!(offsets.len(), index.count_matches(&pattern));
    }

    /// Intervals change memory, never answers.
    #[test]
    fn prop_intervals_do_not_change_results(
        text in text_strategy(b"acgt", 100),
        pattern in pattern_strategy(b"acgt", 4),
        (checkpoint, sampling) in interval_strategy(),
    ) {
        let reference = build_index(&text, 1, 1);
        let index = build_index(&text, checkpoint, sampling);
        prop_assert_eq!(index.range(&pattern), reference.range(&pattern));
        prop_assert_eq!(index.bwt(), reference.bwt());
        prop_assert_eq!(index.dollar_row(), reference.dollar_row());
    }

    /// Batch lookups equal one-at-a-time lookups.
    #[test]
    fn prop_batch_matches_single(
        text in text_strategy(b"acgt", 80),
        patterns in prop::collection::vec(pattern_strategy(b"acgt", 4), 0..8),
    ) {
        let index = build_index(&text, 4, 4);
        let batch = index.occurrences_many(&patterns);
        prop_assert_eq!(batch.len(), patterns.len());
        for (pattern, offsets) in patterns.iter().zip(batch) {
            prop_assert_eq!(offsets, index.occurrences(pattern));
        }
    }
}
