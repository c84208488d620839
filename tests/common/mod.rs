//! Shared test utilities and fixtures.

#![allow(dead_code)]

use collections::{Collection, CollectionError};
use std::process::{Command, Output};
use std::time::{Duration, Instant};

// Re-export canonical test utilities from collections::testing
pub use collections::testing::{
    assert_invariants, expected_rendering, nested_pronouns, pronouns, sequential, strings,
};

// ============================================================================
// LARGE-SCALE SCENARIOS
// ============================================================================

/// Element count for the tail-removal scenario.
pub const LARGE_COUNT: usize = 1_000_000;

/// Element count for the bulk-append scenario.
pub const BULK_COUNT: usize = 1_000_001;

/// Time budget for one large-scale phase, sized for unoptimized test builds.
pub const LARGE_BUDGET: Duration = Duration::from_secs(10);

/// Run `f`, returning its result and how long it took.
pub fn timed<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert `result` is the out-of-range error for `index` at `count`.
pub fn assert_out_of_range<T>(
    result: Result<T, CollectionError>,
    index: usize,
    count: usize,
) {
    assert_eq!(
        result.err(),
        Some(CollectionError::IndexOutOfRange { index, count }),
        "expected IndexOutOfRange for index {} at count {}",
        index,
        count
    );
}

/// Assert the collection renders to `expected` and still satisfies the
/// structural invariants.
pub fn assert_renders<T: std::fmt::Display>(collection: &Collection<T>, expected: &str) {
    assert_eq!(collection.to_string(), expected);
    assert_invariants(collection);
}

// ============================================================================
// CLI
// ============================================================================

/// Run the collections binary with the given arguments.
pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_collections"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run collections binary")
}

/// Stdout of a successful run, without the trailing newline.
pub fn cli_stdout(args: &[&str]) -> String {
    let output = run_cli(args);
    assert!(
        output.status.success(),
        "collections {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}
