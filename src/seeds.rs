// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Seed generation for approximate matching.
//!
//! An approximate matcher built on top of the index splits a query into short
//! exact seeds, looks each one up, and verifies the surviving candidates. By
//! the pigeonhole principle, a pattern with at most `e` edits that is cut into
//! `e + 1` non-overlapping pieces keeps at least one piece intact.
//!
//! These helpers stop at candidate generation; alignment is someone else's job.

use std::collections::HashMap;

use serde::Serialize;

use crate::fm::FmIndex;

/// Every length-`k` window of `pattern`, sliding by one.
///
/// Yields `pattern.len() - k + 1` windows, or none when `k` is zero or longer
/// than the pattern.
pub fn kmers(pattern: &[u8], k: usize) -> Vec<&[u8]> {
    if k == 0 {
        return Vec::new();
    }
    pattern.windows(k).collect()
}

/// Length-`k` windows starting at offsets `0, stride, 2·stride, …`.
///
/// Returns the windows and their start offsets as parallel vectors. Only full
/// windows are produced; a zero `k` or `stride` yields nothing.
pub fn spaced_kmers(pattern: &[u8], k: usize, stride: usize) -> (Vec<&[u8]>, Vec<usize>) {
    if k == 0 || stride == 0 || k > pattern.len() {
        return (Vec::new(), Vec::new());
    }

    let offsets: Vec<usize> = (0..=pattern.len() - k).step_by(stride).collect();
    let windows = offsets.iter().map(|&start| &pattern[start..start + k]).collect();
    (windows, offsets)
}

/// A text offset where the whole pattern may align, with the number of seeds
/// that point there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedCandidate {
    pub text_offset: usize,
    pub votes: usize,
}

/// Look up every spaced k-mer of `pattern` and vote for implied alignment starts.
///
/// A seed found at text offset `t` that starts at pattern offset `o` votes for
/// `t - o`. Hits that would start before the text are dropped. Results are
/// ordered by votes (descending), then by offset.
pub fn seed_candidates(
    index: &FmIndex,
    pattern: &[u8],
    k: usize,
    stride: usize,
) -> Vec<SeedCandidate> {
    let (windows, offsets) = spaced_kmers(pattern, k, stride);

    let mut votes: HashMap<usize, usize> = HashMap::new();
    for (window, &seed_offset) in windows.iter().zip(&offsets) {
        for hit in index.occurrences(window) {
            if let Some(start) = hit.checked_sub(seed_offset) {
                *votes.entry(start).or_insert(0) += 1;
            }
        }
    }

    let mut candidates: Vec<SeedCandidate> = votes
        .into_iter()
        .map(|(text_offset, votes)| SeedCandidate { text_offset, votes })
        .collect();
    candidates.sort_by(|a, b| {
        b.votes
            .cmp(&a.votes)
            .then_with(|| a.text_offset.cmp(&b.text_offset))
    });
    candidates
}
