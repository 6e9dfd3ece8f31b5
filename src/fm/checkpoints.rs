// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rank checkpoints: sparse cumulative counts over the BWT.
//!
//! At every row that is a multiple of the interval we snapshot the tally of
//! every symbol seen so far (inclusive of that row). A rank query walks back to
//! the nearest checkpoint at or before the row and adds what it passed.
//!
//! ```text
//! interval = 3, bwt = a n n b $ a a
//! row        0 1 2 3 4 5 6
//! snapshot   ✓     ✓     ✓
//! tally[a]   1     1     3
//! ```
//!
//! Query cost is at most `interval - 1` BWT reads. Space is
//! `ceil(n / interval) × σ` counters, stored flat, one row of σ per checkpoint.

/// Periodic per-symbol cumulative counts over a BWT of dense codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankCheckpoints {
    interval: usize,
    sigma: usize,
    tallies: Vec<usize>,
}

impl RankCheckpoints {
    /// Single left-to-right scan of `bwt`, snapshotting every `interval` rows.
    ///
    /// `bwt` holds codes in `0..sigma`.
    pub fn build(bwt: &[u8], sigma: usize, interval: usize) -> Self {
        debug_assert!(interval > 0, "checkpoint interval must be positive");

        let rows = bwt.len().div_ceil(interval);
        let mut tallies = Vec::with_capacity(rows * sigma);
        let mut tally = vec![0usize; sigma];

        for (row, &code) in bwt.iter().enumerate() {
            tally[code as usize] += 1; // up to *and including* row
            if row % interval == 0 {
                tallies.extend_from_slice(&tally);
            }
        }

        Self {
            interval,
            sigma,
            tallies,
        }
    }

    /// Occurrences of `code` in `bwt[0..=row]`.
    ///
    /// `bwt` must be the sequence the checkpoints were built from.
    #[inline]
    pub fn rank(&self, bwt: &[u8], code: usize, row: usize) -> usize {
        let mut i = row;
        let mut passed = 0;
        // Always walk up toward the checkpoint
        while i % self.interval != 0 {
            if bwt[i] as usize == code {
                passed += 1;
            }
            i -= 1;
        }
        self.tallies[(i / self.interval) * self.sigma + code] + passed
    }

    /// Occurrences of `code` in `bwt[0..row]`; zero for `row == 0`.
    #[inline]
    pub fn rank_before(&self, bwt: &[u8], code: usize, row: usize) -> usize {
        if row == 0 {
            0
        } else {
            self.rank(bwt, code, row - 1)
        }
    }

    pub fn interval(&self) -> usize {
        self.interval
    }

    /// Number of stored checkpoint rows.
    pub fn len(&self) -> usize {
        if self.sigma == 0 {
            0
        } else {
            self.tallies.len() / self.sigma
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// Heap bytes held by the checkpoint table.
    pub fn heap_bytes(&self) -> usize {
        self.tallies.capacity() * std::mem::size_of::<usize>()
    }
}
