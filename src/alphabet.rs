// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dense symbol codes.
//!
//! Every byte that occurs in the indexed text gets a code in `0..σ`, assigned in
//! byte order, so the sentinel always maps to code 0. Rank and first-column tables
//! are plain arrays indexed by these codes; no hashing on the query path.
//!
//! ```text
//! text  = "banana$"
//! bytes =  $  a  b  n
//! codes =  0  1  2  3
//! ```

/// Fixed byte → code mapping for one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    codes: [Option<u8>; 256],
    symbols: Vec<u8>,
}

impl Alphabet {
    /// Collect the distinct bytes of `text` in sorted order.
    pub fn from_text(text: &[u8]) -> Self {
        let mut present = [false; 256];
        for &b in text {
            present[b as usize] = true;
        }

        let mut codes = [None; 256];
        let mut symbols = Vec::new();
        for byte in 0..256 {
            if present[byte] {
                codes[byte] = Some(symbols.len() as u8);
                symbols.push(byte as u8);
            }
        }

        Self { codes, symbols }
    }

    /// Number of distinct symbols (σ).
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Code of `symbol`, or `None` if it never occurs in the text.
    #[inline]
    pub fn code(&self, symbol: u8) -> Option<usize> {
        self.codes[symbol as usize].map(usize::from)
    }

    /// Byte for a code. Panics on codes outside `0..σ`.
    #[inline]
    pub fn symbol(&self, code: usize) -> u8 {
        self.symbols[code]
    }

    /// Code of the smallest known symbol strictly greater than `symbol`.
    ///
    /// `None` when `symbol` sorts after every symbol in the text.
    pub fn successor(&self, symbol: u8) -> Option<usize> {
        let idx = self.symbols.partition_point(|&s| s <= symbol);
        (idx < self.symbols.len()).then_some(idx)
    }

    /// Sorted distinct symbols.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }
}
