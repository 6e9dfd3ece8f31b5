//! Custom cargo commands for fmdex.
//!
//! Usage:
//!   cargo xtask verify    - Contract markers, tests, clippy, no-default-features build
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (cargo check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz [s]  - Fuzz backward search for `s` seconds (default 60)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify        Contract markers, tests, clippy, and a build without rayon
  test          Run all Rust tests
  check         Quick check (cargo check + test + clippy)
  bench         Run benchmarks
  fuzz [SECS]   Fuzz backward search against a linear scan (needs cargo-fuzz)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("fmdex Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract checks present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Building without default features...");
    run_cargo(&["check", "--quiet", "--no-default-features"])?;
    println!("✓ Sequential build passes\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench", "--bench", "search_bench"])
}

/// Run the backward-search fuzz target for a fixed time budget.
fn fuzz(seconds: Option<&str>) -> Result<()> {
    let seconds: u64 = match seconds {
        Some(s) => s
            .parse()
            .with_context(|| format!("Invalid fuzz duration: {}", s))?,
        None => 60,
    };
    let max_time = format!("-max_total_time={}", seconds);

    let root = project_root()?;
    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", "backward_search", "--", &max_time])
        .current_dir(&root)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("Fuzzing found a failure");
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// The construction contracts must stay wired in.
fn check_contract_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args([
            "-r",
            "-E",
            r"check_[a-z_]+\(",
            "--include=*.rs",
            "--exclude=contracts.rs",
        ])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output
        .stdout
        .split(|&b| b == b'\n')
        .filter(|l| !l.is_empty())
        .count();

    if count < 4 {
        bail!(
            "Expected at least 4 contract calls in src/, found {}. Someone may have removed a check!",
            count
        );
    }

    Ok(())
}
