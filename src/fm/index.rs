// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The FM-index core.
//!
//! Owns the BWT (as dense codes), rank checkpoints, the first-column table and
//! the downsampled suffix array. Everything is built once and never mutated,
//! so an index can be shared across threads by reference.
//!
//! # Backward search
//!
//! ```text
//! pattern "ana" over "banana$"      rows are the sorted rotations
//!
//!   'a' → rows [1, 4)   $banana  a$banan  ana$ban  anana$b ...
//!   'n' → rows [5, 7)   na$bana  nana$ba
//!   'a' → rows [2, 4)   ana$ban  anana$b
//! ```
//!
//! Each step is two rank queries plus a first-column lookup:
//! `lo = C[c] + rank_before(c, lo)`, `hi = C[c] + rank_before(c, hi)`.

use std::ops::Range;

use log::{debug, trace};
use serde::Serialize;

use crate::alphabet::Alphabet;
use crate::config::IndexConfig;
use crate::contracts::{
    check_checkpoints_monotone, check_first_column_total, check_resolve_steps,
    check_suffix_array_sorted,
};
use crate::error::{FmIndexError, Result};
use crate::suffix::{BwtDeriver, CyclicBwt, DerivedBwt, SaisBuilder, SuffixArrayBuilder};

use super::checkpoints::RankCheckpoints;
use super::sample::SampledSuffixArray;

/// Compressed substring index over one sentinel-terminated text.
#[derive(Debug, Clone)]
pub struct FmIndex {
    /// BWT as dense codes.
    bwt: Vec<u8>,
    dollar_row: usize,
    alphabet: Alphabet,
    checkpoints: RankCheckpoints,
    /// `first[code]` = number of BWT symbols smaller than `code`; `first[σ] = n`.
    first: Vec<usize>,
    samples: SampledSuffixArray,
    /// Sentinel-terminated source text, kept only when requested.
    text: Option<Vec<u8>>,
    config: IndexConfig,
}

/// Size summary of a built index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Length including the sentinel.
    pub text_len: usize,
    pub alphabet_size: usize,
    pub dollar_row: usize,
    pub checkpoint_interval: usize,
    pub checkpoint_rows: usize,
    pub sampling_interval: usize,
    pub sampled_rows: usize,
    pub retains_text: bool,
    /// Approximate heap usage of all owned tables.
    pub heap_bytes: usize,
}

impl FmIndex {
    /// Index `text` with the default configuration.
    ///
    /// A `$` sentinel is appended unless the text already ends with one.
    ///
    /// # Example
    ///
    /// ```
    /// use fmdex::FmIndex;
    ///
    /// let index = FmIndex::new(b"banana").unwrap();
    /// let mut offsets = index.occurrences(b"ana");
    /// offsets.sort_unstable();
    /// assert_eq!(offsets, vec![1, 3]);
    /// ```
    pub fn new(text: impl AsRef<[u8]>) -> Result<Self> {
        Self::with_config(text, IndexConfig::default())
    }

    /// Index `text` and keep an owned copy of it.
    pub fn with_text(text: impl AsRef<[u8]>) -> Result<Self> {
        Self::with_config(text, IndexConfig::default().with_retained_text(true))
    }

    /// Index `text` with explicit intervals and sentinel, using SA-IS.
    pub fn with_config(text: impl AsRef<[u8]>, config: IndexConfig) -> Result<Self> {
        Self::build_with(text, config, &SaisBuilder, &CyclicBwt)
    }

    /// Index `text` using caller-supplied suffix-array and BWT collaborators.
    pub fn build_with<S, D>(
        text: impl AsRef<[u8]>,
        config: IndexConfig,
        sa_builder: &S,
        deriver: &D,
    ) -> Result<Self>
    where
        S: SuffixArrayBuilder + ?Sized,
        D: BwtDeriver + ?Sized,
    {
        config.validate()?;
        let text = terminate(text.as_ref(), config.sentinel)?;
        let n = text.len();

        let suffix_array = sa_builder.suffix_array(&text);
        if suffix_array.len() != n {
            return Err(FmIndexError::SuffixArrayLength {
                expected: n,
                actual: suffix_array.len(),
            });
        }
        require_permutation(&suffix_array)?;
        debug!("suffix array built for {} symbols", n);

        let derived = deriver.derive(&text, &suffix_array);
        require_bwt_matches(&text, &suffix_array, &derived)?;
        let alphabet = Alphabet::from_text(&text);
        let sigma = alphabet.len();

        let mut totals = vec![0usize; sigma];
        let mut bwt = Vec::with_capacity(n);
        for (row, &symbol) in derived.bwt.iter().enumerate() {
            let code = alphabet.code(symbol).ok_or_else(|| FmIndexError::BwtMismatch {
                row,
                expected: text[(suffix_array[row] + n - 1) % n],
                actual: symbol,
            })?;
            totals[code] += 1;
            bwt.push(code as u8);
        }

        let mut first = Vec::with_capacity(sigma + 1);
        let mut running = 0;
        first.push(0);
        for total in totals {
            running += total;
            first.push(running);
        }
        check_first_column_total(&first, n);
        require_lf_steps_back(&bwt, &first, &suffix_array)?;
        check_suffix_array_sorted(&text, &suffix_array);

        let checkpoints = RankCheckpoints::build(&bwt, sigma, config.checkpoint_interval);
        check_checkpoints_monotone(&checkpoints, &bwt, sigma);

        let samples = SampledSuffixArray::downsample(&suffix_array, config.sampling_interval);
        debug!(
            "index ready: sigma={} checkpoints={} samples={} dollar_row={}",
            sigma,
            checkpoints.len(),
            samples.len(),
            derived.dollar_row
        );

        Ok(Self {
            bwt,
            dollar_row: derived.dollar_row,
            alphabet,
            checkpoints,
            first,
            samples,
            text: config.retain_text.then_some(text),
            config,
        })
    }

    /// Number of rows (text length including the sentinel).
    #[inline]
    pub fn len(&self) -> usize {
        self.bwt.len()
    }

    /// Always false: a built index holds at least the sentinel.
    pub fn is_empty(&self) -> bool {
        self.bwt.is_empty()
    }

    /// Number of BWT symbols strictly smaller than `symbol`.
    ///
    /// Symbols absent from the text fall back to the first-column value of the
    /// next larger known symbol, or the total length when none is larger.
    #[inline]
    pub fn count(&self, symbol: u8) -> usize {
        if let Some(code) = self.alphabet.code(symbol) {
            return self.first[code];
        }
        match self.alphabet.successor(symbol) {
            Some(code) => self.first[code],
            None => self.len(),
        }
    }

    /// Occurrences of `symbol` in `bwt[0..=row]`. Zero for unknown symbols.
    pub fn rank(&self, symbol: u8, row: usize) -> usize {
        match self.alphabet.code(symbol) {
            Some(code) => self.checkpoints.rank(&self.bwt, code, row),
            None => 0,
        }
    }

    /// Occurrences of `symbol` in `bwt[0..row]`; `rank_before(c, 0) == 0`.
    #[inline]
    pub fn rank_before(&self, symbol: u8, row: usize) -> usize {
        match self.alphabet.code(symbol) {
            Some(code) => self.checkpoints.rank_before(&self.bwt, code, row),
            None => 0,
        }
    }

    /// Half-open range of BWM rows prefixed by `pattern`.
    ///
    /// Empty ranges are normalized to `lo..lo`. The empty pattern matches
    /// every row.
    pub fn range(&self, pattern: &[u8]) -> Range<usize> {
        let mut lo = 0;
        let mut hi = self.len();

        for &symbol in pattern.iter().rev() {
            let smaller = self.count(symbol);
            lo = self.rank_before(symbol, lo) + smaller;
            hi = self.rank_before(symbol, hi) + smaller;
            if hi <= lo {
                trace!("range: {:?} exhausted at symbol 0x{:02x}", pattern, symbol);
                return lo..lo;
            }
        }

        lo..hi
    }

    /// Number of occurrences of `pattern` without resolving offsets.
    pub fn count_matches(&self, pattern: &[u8]) -> usize {
        self.range(pattern).len()
    }

    /// One LF-mapping step: the row of the suffix starting one position earlier.
    #[inline]
    pub fn lf(&self, row: usize) -> usize {
        let code = self.bwt[row] as usize;
        self.first[code] + self.checkpoints.rank_before(&self.bwt, code, row)
    }

    /// Text offset of the suffix at `row`.
    ///
    /// Walks LF until a sampled row is reached, at most `sampling_interval - 1`
    /// steps. Panics if `row >= self.len()`.
    pub fn resolve(&self, row: usize) -> usize {
        assert!(row < self.len(), "row {} out of bounds for {} rows", row, self.len());

        let mut row = row;
        let mut steps = 0;
        loop {
            if let Some(offset) = self.samples.get(row) {
                check_resolve_steps(steps, self.samples.interval());
                return offset + steps;
            }
            row = self.lf(row);
            steps += 1;
        }
    }

    /// True iff `pattern` occurs in the text.
    pub fn has_substring(&self, pattern: &[u8]) -> bool {
        !self.range(pattern).is_empty()
    }

    /// True iff `pattern` ends exactly at the last symbol before the sentinel.
    ///
    /// The row prefixed by `pattern` + sentinel sorts first within the range,
    /// so only the left boundary needs resolving.
    pub fn has_suffix(&self, pattern: &[u8]) -> bool {
        let range = self.range(pattern);
        !range.is_empty() && self.resolve(range.start) + pattern.len() == self.len() - 1
    }

    /// Start offsets of every occurrence of `pattern`, in no particular order.
    pub fn occurrences(&self, pattern: &[u8]) -> Vec<usize> {
        self.range(pattern).map(|row| self.resolve(row)).collect()
    }

    /// [`occurrences`](Self::occurrences) for many patterns at once.
    ///
    /// Runs in parallel with the `parallel` feature.
    pub fn occurrences_many<P>(&self, patterns: &[P]) -> Vec<Vec<usize>>
    where
        P: AsRef<[u8]> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            patterns
                .par_iter()
                .map(|pattern| self.occurrences(pattern.as_ref()))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            patterns
                .iter()
                .map(|pattern| self.occurrences(pattern.as_ref()))
                .collect()
        }
    }

    /// BWT as bytes (decoded from the internal codes).
    pub fn bwt(&self) -> Vec<u8> {
        self.bwt.iter().map(|&code| self.alphabet.symbol(code as usize)).collect()
    }

    /// Row whose suffix is the whole text.
    pub fn dollar_row(&self) -> usize {
        self.dollar_row
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Sentinel-terminated text, if the index was built to retain it.
    pub fn text(&self) -> Option<&[u8]> {
        self.text.as_deref()
    }

    pub fn stats(&self) -> IndexStats {
        let heap_bytes = self.bwt.capacity()
            + self.first.capacity() * std::mem::size_of::<usize>()
            + self.checkpoints.heap_bytes()
            + self.samples.heap_bytes()
            + self.text.as_ref().map_or(0, Vec::capacity);

        IndexStats {
            text_len: self.len(),
            alphabet_size: self.alphabet.len(),
            dollar_row: self.dollar_row,
            checkpoint_interval: self.checkpoints.interval(),
            checkpoint_rows: self.checkpoints.len(),
            sampling_interval: self.samples.interval(),
            sampled_rows: self.samples.len(),
            retains_text: self.text.is_some(),
            heap_bytes,
        }
    }
}

/// Append the sentinel if missing and reject texts where it is not unique and minimal.
/// Reject a suffix array that repeats or skips an offset.
fn require_permutation(suffix_array: &[usize]) -> Result<()> {
    let n = suffix_array.len();
    let mut seen = vec![false; n];
    for (row, &offset) in suffix_array.iter().enumerate() {
        if offset >= n || seen[offset] {
            return Err(FmIndexError::SuffixArrayNotPermutation { row, offset });
        }
        seen[offset] = true;
    }
    Ok(())
}

/// Reject a derived BWT that is not `text[(sa[i] - 1) mod n]` row by row.
fn require_bwt_matches(text: &[u8], suffix_array: &[usize], derived: &DerivedBwt) -> Result<()> {
    let n = text.len();
    if derived.bwt.len() != n {
        return Err(FmIndexError::BwtLength {
            expected: n,
            actual: derived.bwt.len(),
        });
    }

    let mut dollar_row = None;
    for (row, (&offset, &actual)) in suffix_array.iter().zip(&derived.bwt).enumerate() {
        let expected = text[(offset + n - 1) % n];
        if actual != expected {
            return Err(FmIndexError::BwtMismatch {
                row,
                expected,
                actual,
            });
        }
        if offset == 0 {
            dollar_row = Some(row);
        }
    }

    match dollar_row {
        Some(expected) if expected == derived.dollar_row => Ok(()),
        Some(expected) => Err(FmIndexError::DollarRow {
            expected,
            actual: derived.dollar_row,
        }),
        // unreachable once the permutation check passed
        None => Err(FmIndexError::SuffixArrayNotPermutation { row: 0, offset: 0 }),
    }
}

/// Every LF step must move exactly one offset back in the text.
///
/// One pass with running tallies, so O(n) regardless of checkpoint spacing.
/// Holding this guarantees `resolve` reaches a sample within the interval.
fn require_lf_steps_back(bwt: &[u8], first: &[usize], suffix_array: &[usize]) -> Result<()> {
    let n = bwt.len();
    let mut seen = vec![0usize; first.len()];
    for (row, &code) in bwt.iter().enumerate() {
        let code = code as usize;
        let next = first[code] + seen[code];
        seen[code] += 1;
        if suffix_array[next] != (suffix_array[row] + n - 1) % n {
            return Err(FmIndexError::SuffixArrayUnsorted { row });
        }
    }
    Ok(())
}

fn terminate(text: &[u8], sentinel: u8) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Err(FmIndexError::EmptyText);
    }

    let body = match text.split_last() {
        Some((&last, body)) if last == sentinel => body,
        _ => text,
    };

    for (position, &symbol) in body.iter().enumerate() {
        if symbol == sentinel {
            return Err(FmIndexError::SentinelInText { position, sentinel });
        }
        if symbol < sentinel {
            return Err(FmIndexError::SentinelNotMinimal {
                position,
                symbol,
                sentinel,
            });
        }
    }

    let mut terminated = Vec::with_capacity(body.len() + 1);
    terminated.extend_from_slice(body);
    terminated.push(sentinel);
    Ok(terminated)
}
