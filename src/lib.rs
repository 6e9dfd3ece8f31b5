//! FM-index: a compressed full-text substring index over the Burrows-Wheeler Transform.
//!
//! The index answers existence, suffix and occurrence queries over a static
//! text in time proportional to the pattern length (plus the number of matches
//! when enumerating them), while storing only the BWT, sparse rank checkpoints,
//! a first-column table and a downsampled suffix array.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌─────────────────────────┐
//! │  suffix/     │────▶│  fm/index.rs │────▶│  range / resolve /      │
//! │ (SA-IS, BWT) │     │  (FmIndex)   │     │  occurrences / suffix   │
//! └──────────────┘     └──────────────┘     └─────────────────────────┘
//!                        │          │                   │
//!                        ▼          ▼                   ▼
//!          ┌──────────────────┐ ┌────────────────┐ ┌──────────┐
//!          │ fm/checkpoints.rs│ │ fm/sample.rs   │ │ seeds.rs │
//!          │ (rank)           │ │ (SA sample)    │ │ (k-mers) │
//!          └──────────────────┘ └────────────────┘ └──────────┘
//! ```
//!
//! Data flows one way: text → suffix array → BWT → (checkpoints, first column,
//! sample) → query answers. Nothing is mutated after construction.
//!
//! # Usage
//!
//! ```
//! use fmdex::{FmIndex, IndexConfig};
//!
//! let index = FmIndex::with_config(
//!     "mississippi",
//!     IndexConfig::default().with_sampling_interval(4),
//! )
//! .unwrap();
//!
//! assert!(index.has_substring(b"ssi"));
//! assert!(index.has_suffix(b"ppi"));
//!
//! let mut hits = index.occurrences(b"ss");
//! hits.sort_unstable();
//! assert_eq!(hits, vec![2, 5]);
//! ```

// Module declarations
pub mod alphabet;
pub mod config;
pub mod contracts;
pub mod error;
mod fm;
pub mod seeds;
pub mod suffix;
pub mod testing;

// Re-exports for public API
pub use alphabet::Alphabet;
pub use config::{
    IndexConfig, DEFAULT_CHECKPOINT_INTERVAL, DEFAULT_SAMPLING_INTERVAL, DEFAULT_SENTINEL,
};
pub use error::{FmIndexError, Result};
pub use fm::{FmIndex, IndexStats, RankCheckpoints, SampledSuffixArray};
pub use seeds::{kmers, seed_candidates, spaced_kmers, SeedCandidate};
pub use suffix::{BwtDeriver, CyclicBwt, DerivedBwt, NaiveSortBuilder, SaisBuilder, SuffixArrayBuilder};
