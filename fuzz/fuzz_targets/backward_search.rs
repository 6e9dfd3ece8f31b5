// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for backward search.
//!
//! Builds an index over arbitrary bytes with arbitrary intervals and checks
//! every answer against a linear scan. Texts the index must reject are
//! rejected with an error, never a panic.

#![no_main]

use arbitrary::Arbitrary;
use fmdex::testing::naive_occurrences;
use fmdex::{FmIndex, FmIndexError, IndexConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    text: Vec<u8>,
    patterns: Vec<Vec<u8>>,
    checkpoint_interval: u8,
    sampling_interval: u8,
    sentinel: u8,
}

fuzz_target!(|input: Input| {
    if input.text.len() > 4096 || input.patterns.len() > 16 {
        return;
    }

    let config = IndexConfig::default()
        .with_checkpoint_interval(usize::from(input.checkpoint_interval))
        .with_sampling_interval(usize::from(input.sampling_interval))
        .with_sentinel(input.sentinel);

    let index = match FmIndex::with_config(&input.text, config) {
        Ok(index) => index,
        Err(FmIndexError::EmptyText) => {
            assert!(input.text.is_empty());
            return;
        }
        Err(FmIndexError::InvalidInterval { .. }) => {
            assert!(input.checkpoint_interval == 0 || input.sampling_interval == 0);
            return;
        }
        Err(_) => return,
    };

    // Body without the sentinel, whether or not the input carried one.
    let body = match input.text.split_last() {
        Some((&last, body)) if last == input.sentinel => body,
        _ => &input.text[..],
    };
    assert_eq!(index.len(), body.len() + 1);

    for pattern in &input.patterns {
        let mut found = index.occurrences(pattern);
        found.sort_unstable();

        // A pattern holding the sentinel can match the text end; skip those.
        if pattern.contains(&input.sentinel) {
            continue;
        }
        assert_eq!(found, naive_occurrences(body, pattern));
        assert_eq!(index.has_suffix(pattern), body.ends_with(pattern));
    }
});
