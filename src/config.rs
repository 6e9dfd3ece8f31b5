// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction parameters.
//!
//! The two intervals are independent knobs. The checkpoint interval bounds the
//! backward walk inside a rank query; the sampling interval bounds the number of
//! LF steps inside `resolve`. Both trade memory for query time.

use serde::{Deserialize, Serialize};

use crate::error::{FmIndexError, Result};

/// Default spacing between rank checkpoints (rows of the BWT).
pub const DEFAULT_CHECKPOINT_INTERVAL: usize = 50;

/// Default spacing between retained suffix-array samples (text offsets).
pub const DEFAULT_SAMPLING_INTERVAL: usize = 50;

/// Default end-of-text marker.
pub const DEFAULT_SENTINEL: u8 = b'$';

/// Parameters for building an [`FmIndex`](crate::FmIndex).
///
/// Missing fields fall back to their defaults when deserialized, so a JSON
/// document like `{"sampling_interval": 8}` is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Rows between rank checkpoints.
    pub checkpoint_interval: usize,
    /// Text offsets between suffix-array samples.
    pub sampling_interval: usize,
    /// Unique, minimal terminator appended to the text when absent.
    pub sentinel: u8,
    /// Keep an owned copy of the sentinel-terminated text.
    pub retain_text: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
            sampling_interval: DEFAULT_SAMPLING_INTERVAL,
            sentinel: DEFAULT_SENTINEL,
            retain_text: false,
        }
    }
}

impl IndexConfig {
    pub fn with_checkpoint_interval(mut self, interval: usize) -> Self {
        self.checkpoint_interval = interval;
        self
    }

    pub fn with_sampling_interval(mut self, interval: usize) -> Self {
        self.sampling_interval = interval;
        self
    }

    pub fn with_sentinel(mut self, sentinel: u8) -> Self {
        self.sentinel = sentinel;
        self
    }

    pub fn with_retained_text(mut self, retain: bool) -> Self {
        self.retain_text = retain;
        self
    }

    /// Reject intervals that would make checkpoints or samples meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.checkpoint_interval == 0 {
            return Err(FmIndexError::InvalidInterval {
                name: "checkpoint_interval",
                value: self.checkpoint_interval,
            });
        }
        if self.sampling_interval == 0 {
            return Err(FmIndexError::InvalidInterval {
                name: "sampling_interval",
                value: self.sampling_interval,
            });
        }
        Ok(())
    }
}
