// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the fmdex CLI.
//!
//! Plain ANSI colors when stdout is a terminal, nothing when it is a pipe or
//! `NO_COLOR` is set. Every report can also be emitted as JSON for scripts.

use anyhow::Result;
use fmdex::{IndexStats, SeedCandidate};
use serde::Serialize;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
}

pub use colors::*;

/// Offsets shown per pattern before eliding the rest.
const MAX_LISTED_OFFSETS: usize = 20;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply color if TTY, otherwise return plain text
pub fn color(c: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", c, text, RESET)
    } else {
        text.to_string()
    }
}

/// Human-readable byte count.
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Pattern bytes for display; invalid UTF-8 is replaced.
pub fn printable(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Result of one `search` pattern.
#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub pattern: String,
    pub matches: usize,
    pub is_suffix: bool,
    pub offsets: Vec<usize>,
}

/// One k-mer with its start in the query.
#[derive(Debug, Serialize)]
pub struct SeedRow {
    pub offset: usize,
    pub kmer: String,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_search(reports: &[SearchReport], json: bool) -> Result<()> {
    if json {
        return print_json(reports);
    }

    for report in reports {
        let count = if report.matches == 0 {
            color(RED, "0 matches")
        } else {
            color(GREEN, &format!("{} matches", report.matches))
        };
        let suffix = if report.is_suffix {
            color(YELLOW, " (suffix)")
        } else {
            String::new()
        };
        println!("{} {}{}", color(BOLD, &report.pattern), count, suffix);

        if report.offsets.is_empty() {
            continue;
        }
        let listed: Vec<String> = report
            .offsets
            .iter()
            .take(MAX_LISTED_OFFSETS)
            .map(ToString::to_string)
            .collect();
        let elided = report.offsets.len().saturating_sub(MAX_LISTED_OFFSETS);
        let tail = if elided > 0 {
            color(DIM, &format!(" … {} more", elided))
        } else {
            String::new()
        };
        println!("  {}{}", listed.join(", "), tail);
    }
    Ok(())
}

pub fn print_stats(stats: &IndexStats, json: bool) -> Result<()> {
    if json {
        return print_json(stats);
    }

    let rows = [
        ("text length", stats.text_len.to_string()),
        ("alphabet size", stats.alphabet_size.to_string()),
        ("dollar row", stats.dollar_row.to_string()),
        (
            "checkpoints",
            format!(
                "{} (every {} rows)",
                stats.checkpoint_rows, stats.checkpoint_interval
            ),
        ),
        (
            "sa samples",
            format!(
                "{} (every {} offsets)",
                stats.sampled_rows, stats.sampling_interval
            ),
        ),
        ("heap", format_size(stats.heap_bytes)),
    ];
    for (label, value) in rows {
        println!("{:<14} {}", color(CYAN, label), value);
    }
    Ok(())
}

pub fn print_seeds(rows: &[SeedRow]) {
    for row in rows {
        println!("{:>6}  {}", color(DIM, &row.offset.to_string()), row.kmer);
    }
}

pub fn print_candidates(candidates: &[SeedCandidate], json: bool) -> Result<()> {
    if json {
        return print_json(candidates);
    }

    if candidates.is_empty() {
        println!("{}", color(RED, "no seed hits"));
        return Ok(());
    }
    for candidate in candidates {
        println!(
            "{:>10}  {} votes",
            color(BOLD, &candidate.text_offset.to_string()),
            candidate.votes
        );
    }
    Ok(())
}
