// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index structures: rank checkpoints, the suffix-array sample, and the
//! FM-index that ties them together.

mod checkpoints;
mod index;
mod sample;

pub use checkpoints::RankCheckpoints;
pub use index::{FmIndex, IndexStats};
pub use sample::SampledSuffixArray;
