//! Seed generation properties.

use super::common::{build_index, text_strategy};
use fmdex::{kmers, seed_candidates, spaced_kmers};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// A pattern of length m yields m - k + 1 windows, each the right slice.
    #[test]
    fn prop_kmer_windows(
        pattern in prop::collection::vec(any::<u8>(), 0..40),
        k in 1usize..10,
    ) {
        let windows = kmers(&pattern, k);
        prop_assert_eq!(windows.len(), (pattern.len() + 1).saturating_sub(k));
        for (offset, window) in windows.iter().enumerate() {
            prop_assert_eq!(*window, &pattern[offset..offset + k]);
        }
    }

    /// Spaced k-mers are full windows at multiples of the stride.
    #[test]
    fn prop_spaced_kmer_offsets(
        pattern in prop::collection::vec(any::<u8>(), 0..40),
        k in 1usize..10,
        stride in 1usize..10,
    ) {
        let (windows, offsets) = spaced_kmers(&pattern, k, stride);
        prop_assert_eq!(windows.len(), offsets.len());
        for (window, &offset) in windows.iter().zip(&offsets) {
            prop_assert_eq!(offset % stride, 0);
            prop_assert!(offset + k <= pattern.len());
            prop_assert_eq!(*window, &pattern[offset..offset + k]);
        }
        if k <= pattern.len() {
            prop_assert_eq!(offsets.len(), (pattern.len() - k) / stride + 1);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// An exact substring collects a vote from every seed at its source offset.
    #[test]
    fn prop_exact_substring_gets_every_vote(
        text in text_strategy(b"acgt", 120),
        start in 0usize..120,
        len in 4usize..24,
        k in 2usize..5,
    ) {
        let start = start % text.len();
        let end = (start + len).min(text.len());
        let pattern = &text[start..end];
        prop_assume!(pattern.len() >= k);

        let index = build_index(&text, 8, 8);
        let seeds = spaced_kmers(pattern, k, k).0.len();
        let candidates = seed_candidates(&index, pattern, k, k);

        let at_source = candidates.iter().find(|c| c.text_offset == start);
        prop_assert_eq!(at_source.map(|c| c.votes), Some(seeds));
        prop_assert_eq!(candidates[0].votes, seeds);
        prop_assert!(candidates.windows(2).all(|w| w[0].votes >= w[1].votes));
    }
}
