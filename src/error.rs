// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Construction errors.
//!
//! Only building an index can fail. Every query is total: an unknown symbol or a
//! pattern that does not occur simply produces an empty range.

use thiserror::Error;

/// Malformed input or configuration rejected while building an [`FmIndex`](crate::FmIndex).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FmIndexError {
    /// The text had no symbols at all.
    #[error("cannot index an empty text")]
    EmptyText,

    /// The sentinel occurs somewhere other than the final position.
    #[error("sentinel byte 0x{sentinel:02x} occurs inside the text at offset {position}")]
    SentinelInText { position: usize, sentinel: u8 },

    /// A text byte sorts at or below the sentinel, so the sentinel is not uniquely minimal.
    #[error(
        "byte 0x{symbol:02x} at offset {position} does not sort after sentinel 0x{sentinel:02x}"
    )]
    SentinelNotMinimal {
        position: usize,
        symbol: u8,
        sentinel: u8,
    },

    /// A checkpoint or sampling interval of zero.
    #[error("{name} must be at least 1 (got {value})")]
    InvalidInterval { name: &'static str, value: usize },

    /// The suffix-array collaborator returned the wrong number of entries.
    #[error("suffix array has {actual} entries, expected {expected}")]
    SuffixArrayLength { expected: usize, actual: usize },

    /// The suffix array repeats an offset or holds one past the text end.
    #[error("suffix array is not a permutation: row {row} holds offset {offset}")]
    SuffixArrayNotPermutation { row: usize, offset: usize },

    /// Stepping back one offset from `row` does not land on the row the
    /// BWT ranks predict, so the suffixes are not in sorted order.
    #[error("suffix array is not sorted: LF-mapping from row {row} does not step back one offset")]
    SuffixArrayUnsorted { row: usize },

    /// The BWT collaborator returned the wrong number of symbols.
    #[error("BWT has {actual} symbols, expected {expected}")]
    BwtLength { expected: usize, actual: usize },

    /// A BWT symbol is not the one preceding its row's suffix.
    #[error("BWT row {row} holds byte 0x{actual:02x}, expected 0x{expected:02x}")]
    BwtMismatch { row: usize, expected: u8, actual: u8 },

    /// The reported dollar row is not the row of offset 0.
    #[error("dollar row reported as {actual}, but offset 0 sorts at row {expected}")]
    DollarRow { expected: usize, actual: usize },
}

/// Result alias used by the construction API.
pub type Result<T> = std::result::Result<T, FmIndexError>;
