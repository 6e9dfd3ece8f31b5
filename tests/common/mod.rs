//! Shared test utilities and fixtures.

#![allow(dead_code)]

use fmdex::{FmIndex, IndexConfig};
use proptest::prelude::*;

// Re-export canonical oracles from fmdex::testing
pub use fmdex::testing::{naive_occurrences, naive_suffix_array, terminated};

// ============================================================================
// FIXTURES
// ============================================================================

/// A few hundred bases with repeats at several scales.
pub const DNA_FIXTURE: &str = "ACGTACGTTAGCATCGATCGGATCCATGACGTACGTTAGCAAAAAAAAAAAAAAATTTTGCA\
GCATCGATCGGATCCATGACGTACGTTAGCATTAGGACCATGGACCATGGACCATGGTTTTTTACGATCGA\
TCGATCGGGCGCGCGCGCATATATATATACGTACGTTAGCATCGATCGGATCCATGAC";

// ============================================================================
// BUILDERS
// ============================================================================

/// Build an index with explicit intervals and the default sentinel.
pub fn build_index(text: &[u8], checkpoint_interval: usize, sampling_interval: usize) -> FmIndex {
    let config = IndexConfig::default()
        .with_checkpoint_interval(checkpoint_interval)
        .with_sampling_interval(sampling_interval);
    FmIndex::with_config(text, config).expect("valid test text")
}

/// Occurrences in ascending order.
pub fn sorted_occurrences(index: &FmIndex, pattern: &[u8]) -> Vec<usize> {
    let mut offsets = index.occurrences(pattern);
    offsets.sort_unstable();
    offsets
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Random texts over a small alphabet so patterns repeat often.
pub fn text_strategy(alphabet: &'static [u8], max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(alphabet.to_vec()), 1..max_len)
}

/// Random patterns over the same (or a wider) alphabet.
pub fn pattern_strategy(alphabet: &'static [u8], max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(alphabet.to_vec()), 0..max_len)
}

/// Checkpoint and sampling intervals, including the degenerate interval 1.
pub fn interval_strategy() -> impl Strategy<Value = (usize, usize)> {
    (1usize..16, 1usize..16)
}
