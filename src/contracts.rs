// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index invariants.
//!
//! These are debug-mode assertions (`debug_assert!`): zero-cost in release
//! builds, early failure during development and tests. A violation means the
//! construction code or an external collaborator is wrong. They are never
//! reachable from query input.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function                  | Property                                          |
//! |------------------------------------|---------------------------------------------------|
//! | `check_suffix_array_sorted`        | adjacent suffixes are in increasing order         |
//! | `check_first_column_total`         | first-column table sums to the text length        |
//! | `check_checkpoints_monotone`       | per-symbol tallies never decrease                 |
//! | `check_resolve_steps`              | LF walk stays below the sampling interval         |

/// Check that a suffix array is sorted lexicographically.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair violates the ordering.
#[inline]
pub fn check_suffix_array_sorted(text: &[u8], suffix_array: &[usize]) {
    if !cfg!(debug_assertions) {
        return;
    }

    for row in 1..suffix_array.len() {
        let prev = &text[suffix_array[row - 1]..];
        let curr = &text[suffix_array[row]..];
        debug_assert!(
            prev < curr,
            "Contract violation: suffix at row {} ({:?}) does not sort before row {} ({:?})",
            row - 1,
            String::from_utf8_lossy(&prev[..prev.len().min(20)]),
            row,
            String::from_utf8_lossy(&curr[..curr.len().min(20)])
        );
    }
}

/// Check that the first-column table ends at the text length and never decreases.
#[inline]
pub fn check_first_column_total(first: &[usize], n: usize) {
    debug_assert_eq!(
        first.last().copied(),
        Some(n),
        "Contract violation: first-column total {:?} != text length {}",
        first.last(),
        n
    );
    debug_assert!(
        first.windows(2).all(|w| w[0] <= w[1]),
        "Contract violation: first-column table is not cumulative"
    );
}

/// Check that successive checkpoints never lose occurrences of any symbol.
#[inline]
pub fn check_checkpoints_monotone(
    checkpoints: &crate::fm::RankCheckpoints,
    bwt: &[u8],
    sigma: usize,
) {
    if !cfg!(debug_assertions) || bwt.is_empty() {
        return;
    }

    let interval = checkpoints.interval();
    for code in 0..sigma {
        let mut previous = 0;
        for row in (0..bwt.len()).step_by(interval) {
            let current = checkpoints.rank(bwt, code, row);
            debug_assert!(
                current >= previous,
                "Contract violation: rank of code {} drops from {} to {} at row {}",
                code,
                previous,
                current,
                row
            );
            previous = current;
        }
    }
}

/// Check that an LF walk found a sample within the guaranteed bound.
#[inline]
pub fn check_resolve_steps(steps: usize, sampling_interval: usize) {
    debug_assert!(
        steps < sampling_interval,
        "Contract violation: resolve took {} steps with sampling interval {}",
        steps,
        sampling_interval
    );
}
