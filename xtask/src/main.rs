//! Custom cargo commands for the collections crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask kani      - Run Kani proofs
//!   cargo xtask fuzz [TARGET] [SECONDS] - Run a fuzz target

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets under fuzz/fuzz_targets
const FUZZ_TARGETS: &[&str] = &["collection_ops", "render"];

/// Growth constants that kani-proofs copies from src/growth.rs
const MIRRORED_CONSTANTS: &[&str] = &[
    "DEFAULT_GROWTH_FACTOR",
    "DEFAULT_INITIAL_CAPACITY",
    "MIN_GROWTH_FACTOR",
    "MAX_GROWTH_FACTOR",
];

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("kani") => kani()?,
        Some("fuzz") => fuzz(args.get(1).map(String::as_str), args.get(2).map(String::as_str))?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify              Run full verification suite (tests + clippy + mirrored constants)
  test                Run all Rust tests
  check               Quick check (cargo test + clippy)
  bench               Run benchmarks
  kani                Run Kani proofs for growth arithmetic
  fuzz [TARGET] [S]   Run a fuzz target for S seconds (default: all targets, 30s)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Collections Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract markers present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Verifying growth constants mirrored in kani-proofs...");
    verify_constants()?;
    println!("✓ Constants aligned\n");

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

    println!("[1/2] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run Kani proofs (standalone crate, not a workspace member)
fn kani() -> Result<()> {
    let kani_dir = project_root()?.join("kani-proofs");
    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(&kani_dir)
        .status()
        .context("Failed to run cargo kani (is Kani installed?)")?;

    if !status.success() {
        bail!("Kani proofs failed");
    }
    Ok(())
}

/// Run one fuzz target, or all of them, for a bounded time
fn fuzz(target: Option<&str>, seconds: Option<&str>) -> Result<()> {
    let seconds: u64 = match seconds {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("Invalid fuzz duration '{}'", raw))?,
        None => 30,
    };
    let targets: Vec<&str> = match target {
        Some(name) if FUZZ_TARGETS.contains(&name) => vec![name],
        Some(name) => bail!("Unknown fuzz target '{}', expected one of {:?}", name, FUZZ_TARGETS),
        None => FUZZ_TARGETS.to_vec(),
    };

    let root = project_root()?;
    for name in targets {
        println!("Fuzzing {} for {}s...", name, seconds);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", name, "--"])
            .arg(format!("-max_total_time={}", seconds))
            .current_dir(&root)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

        if !status.success() {
            bail!("Fuzz target {} failed", name);
        }
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

fn check_contract_markers() -> Result<()> {
    let root = project_root()?;
    let contracts = std::fs::read_to_string(root.join("src/contracts.rs"))
        .context("Failed to read src/contracts.rs")?;

    let count = contracts.matches("Contract violation").count();
    if count < 3 {
        bail!(
            "Expected at least 3 contract checks, found {}. Someone may have removed invariant checks!",
            count
        );
    }

    Ok(())
}

fn verify_constants() -> Result<()> {
    let root = project_root()?;

    let growth_rs = std::fs::read_to_string(root.join("src/growth.rs"))
        .context("Failed to read src/growth.rs")?;
    let kani_rs = std::fs::read_to_string(root.join("kani-proofs/src/lib.rs"))
        .context("Failed to read kani-proofs/src/lib.rs")?;

    for name in MIRRORED_CONSTANTS {
        let source = extract_const(&growth_rs, name);
        let mirrored = extract_const(&kani_rs, name);
        match (source, mirrored) {
            (Some(source), Some(mirrored)) if source == mirrored => {}
            (Some(source), Some(mirrored)) => {
                bail!("{}: src/growth.rs has {} but kani-proofs has {}", name, source, mirrored)
            }
            (None, _) => bail!("{} not found in src/growth.rs", name),
            (_, None) => bail!("{} not found in kani-proofs/src/lib.rs", name),
        }
    }

    Ok(())
}

/// Value text of `pub const NAME: Ty = VALUE;`
fn extract_const(content: &str, name: &str) -> Option<String> {
    let prefix = format!("pub const {}:", name);
    content
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with(&prefix))
        .and_then(|line| line.split('=').nth(1))
        .map(|value| value.trim().trim_end_matches(';').trim().to_string())
}
