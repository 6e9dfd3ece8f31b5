// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Downsampled suffix array.
//!
//! Keeps `row → offset` only for rows whose *text offset* is a multiple of the
//! interval. Sampling by offset (not by row) means walking LF from any row
//! reaches a sample within `interval - 1` steps, since each step moves one
//! position left in the text. Offset 0 is always kept, so every walk ends.

/// Sparse `row → text offset` map, sorted by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledSuffixArray {
    interval: usize,
    entries: Vec<(usize, usize)>,
}

impl SampledSuffixArray {
    /// Take every suffix whose offset is a multiple of `interval`.
    pub fn downsample(suffix_array: &[usize], interval: usize) -> Self {
        debug_assert!(interval > 0, "sampling interval must be positive");

        // Rows are visited in order, so entries come out sorted
        let entries = suffix_array
            .iter()
            .enumerate()
            .filter(|&(_, &offset)| offset % interval == 0)
            .map(|(row, &offset)| (row, offset))
            .collect();

        Self { interval, entries }
    }

    /// Offset stored for `row`, if the row was sampled.
    #[inline]
    pub fn get(&self, row: usize) -> Option<usize> {
        self.entries
            .binary_search_by_key(&row, |&(r, _)| r)
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    pub fn interval(&self) -> usize {
        self.interval
    }

    /// Number of retained rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sampled `(row, offset)` pairs in row order.
    pub fn entries(&self) -> &[(usize, usize)] {
        &self.entries
    }

    pub fn heap_bytes(&self) -> usize {
        self.entries.capacity() * std::mem::size_of::<(usize, usize)>()
    }
}
