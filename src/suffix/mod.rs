// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Collaborators that turn a text into its suffix array and BWT.
//!
//! The index only consumes these two narrow contracts, so any suffix sorter can
//! be plugged in:
//!
//! ```text
//! text ──SuffixArrayBuilder──▶ SA ──BwtDeriver──▶ (BWT, dollar row)
//! ```
//!
//! Both receive a text that already ends with a unique minimal sentinel. Their
//! output is verified during construction and rejected with an error if it
//! breaks either contract.

mod sais;

pub use sais::SaisBuilder;

/// Ranks every suffix of a sentinel-terminated text.
///
/// Must return a permutation of `0..text.len()` with the suffix at `sa[i]` being
/// the i-th smallest. Deterministic for a given text.
pub trait SuffixArrayBuilder {
    fn suffix_array(&self, text: &[u8]) -> Vec<usize>;
}

/// Derives the Burrows-Wheeler Transform from a text and its suffix array.
pub trait BwtDeriver {
    fn derive(&self, text: &[u8], suffix_array: &[usize]) -> DerivedBwt;
}

/// Output of a [`BwtDeriver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedBwt {
    /// `bwt[i] = text[(sa[i] - 1) mod n]`
    pub bwt: Vec<u8>,
    /// Row whose suffix starts at offset 0.
    pub dollar_row: usize,
}

/// Comparison-sort suffix array: O(n² log n) worst case but obviously correct.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveSortBuilder;

impl SuffixArrayBuilder for NaiveSortBuilder {
    fn suffix_array(&self, text: &[u8]) -> Vec<usize> {
        let mut sa: Vec<usize> = (0..text.len()).collect();
        sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
        sa
    }
}

/// Reads the last column of the sorted rotation matrix off the suffix array.
#[derive(Debug, Clone, Copy, Default)]
pub struct CyclicBwt;

impl BwtDeriver for CyclicBwt {
    fn derive(&self, text: &[u8], suffix_array: &[usize]) -> DerivedBwt {
        let n = text.len();
        let mut bwt = Vec::with_capacity(n);
        let mut dollar_row = 0;

        for (row, &pos) in suffix_array.iter().enumerate() {
            if pos == 0 {
                // wrap around: the symbol before offset 0 is the sentinel
                bwt.push(text[n - 1]);
                dollar_row = row;
            } else {
                bwt.push(text[pos - 1]);
            }
        }

        DerivedBwt { bwt, dollar_row }
    }
}
