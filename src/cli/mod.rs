// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fmdex command-line interface.
//!
//! Four subcommands: `search` queries patterns against a text file, `stats`
//! reports index table sizes, `seeds` prints the k-mers an approximate matcher
//! would look up, and `map` votes those seeds into candidate alignment starts.
//! The index is built in memory on every invocation; there is no on-disk format.

pub mod display;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use fmdex::IndexConfig;

#[derive(Parser)]
#[command(
    name = "fmdex",
    about = "Compressed substring search over a single text (FM-index)",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find every occurrence of one or more patterns
    Search {
        /// Text file to index
        file: PathBuf,

        /// Patterns to look up (non-empty)
        #[arg(required = true, value_parser = NonEmptyStringValueParser::new())]
        patterns: Vec<String>,

        #[command(flatten)]
        index: IndexArgs,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Build the index and report its table sizes
    Stats {
        /// Text file to index
        file: PathBuf,

        #[command(flatten)]
        index: IndexArgs,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the spaced k-mers of a pattern
    Seeds {
        /// Query pattern
        pattern: String,

        /// Seed length
        #[arg(short)]
        k: usize,

        /// Distance between seed starts
        #[arg(long, default_value = "1")]
        stride: usize,
    },

    /// Vote seed hits into candidate alignment starts
    Map {
        /// Text file to index
        file: PathBuf,

        /// Query pattern
        pattern: String,

        /// Seed length
        #[arg(short)]
        k: usize,

        /// Distance between seed starts (defaults to k, non-overlapping seeds)
        #[arg(long)]
        stride: Option<usize>,

        /// Maximum number of candidates to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        #[command(flatten)]
        index: IndexArgs,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Index construction flags shared by every subcommand that reads a file.
#[derive(Args, Clone, Copy, Debug)]
pub struct IndexArgs {
    /// Rows between rank checkpoints
    #[arg(long, default_value_t = fmdex::DEFAULT_CHECKPOINT_INTERVAL)]
    pub checkpoint_interval: usize,

    /// Text offsets between suffix-array samples
    #[arg(long, default_value_t = fmdex::DEFAULT_SAMPLING_INTERVAL)]
    pub sampling_interval: usize,

    /// Sentinel byte value; must sort below every byte in the file
    #[arg(long, default_value = "0")]
    pub sentinel: u8,

    /// Index a trailing newline instead of stripping it
    #[arg(long)]
    pub keep_newline: bool,
}

impl IndexArgs {
    pub fn config(&self) -> IndexConfig {
        IndexConfig::default()
            .with_checkpoint_interval(self.checkpoint_interval)
            .with_sampling_interval(self.sampling_interval)
            .with_sentinel(self.sentinel)
    }
}

/// Read a text file, dropping one trailing `\n` or `\r\n` unless asked not to.
pub fn load_text(path: &Path, keep_newline: bool) -> Result<Vec<u8>> {
    let mut text =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    if !keep_newline && text.last() == Some(&b'\n') {
        text.pop();
        if text.last() == Some(&b'\r') {
            text.pop();
        }
    }

    Ok(text)
}
