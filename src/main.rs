// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use fmdex::{seed_candidates, spaced_kmers, FmIndex};

mod cli;
use cli::display::{self, SearchReport, SeedRow};
use cli::{load_text, Cli, Commands, IndexArgs};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("{} {:#}", display::color(display::RED, "error:"), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            file,
            patterns,
            index,
            json,
        } => {
            let fm = build_index(&file, &index)?;
            let hits = fm.occurrences_many(&patterns);

            let reports: Vec<SearchReport> = patterns
                .iter()
                .zip(hits)
                .map(|(pattern, mut offsets)| {
                    offsets.sort_unstable();
                    SearchReport {
                        pattern: pattern.clone(),
                        matches: offsets.len(),
                        is_suffix: fm.has_suffix(pattern.as_bytes()),
                        offsets,
                    }
                })
                .collect();
            display::print_search(&reports, json)
        }

        Commands::Stats { file, index, json } => {
            let fm = build_index(&file, &index)?;
            display::print_stats(&fm.stats(), json)
        }

        Commands::Seeds { pattern, k, stride } => {
            let (kmers, offsets) = spaced_kmers(pattern.as_bytes(), k, stride);
            let rows: Vec<SeedRow> = kmers
                .iter()
                .zip(offsets)
                .map(|(kmer, offset)| SeedRow {
                    offset,
                    kmer: display::printable(kmer),
                })
                .collect();
            display::print_seeds(&rows);
            Ok(())
        }

        Commands::Map {
            file,
            pattern,
            k,
            stride,
            limit,
            index,
            json,
        } => {
            let fm = build_index(&file, &index)?;
            let mut candidates = seed_candidates(&fm, pattern.as_bytes(), k, stride.unwrap_or(k));
            candidates.truncate(limit);
            display::print_candidates(&candidates, json)
        }
    }
}

fn build_index(path: &std::path::Path, args: &IndexArgs) -> Result<FmIndex> {
    let text = load_text(path, args.keep_newline)?;
    info!("indexing {} ({} bytes)", path.display(), text.len());
    FmIndex::with_config(&text, args.config())
        .with_context(|| format!("Failed to index {}", path.display()))
}
