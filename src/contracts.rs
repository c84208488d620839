// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the collection invariants.
//!
//! These are debug-mode assertions called from every mutating operation:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **O(1)** per call, so they stay on even for million-element tests
//! 3. **Early failure**: a broken invariant panics at the operation that
//!    broke it, not three calls later
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function             | Invariant                                  |
//! |-------------------------------|--------------------------------------------|
//! | `check_capacity_covers_count` | `capacity >= count` after every operation  |
//! | `check_capacity_monotonic`    | capacity never shrinks implicitly          |
//! | `check_count_delta`           | each operation moves count by what it says |
//!
//! # Usage
//!
//! ```ignore
//! let before = self.capacity();
//! // ... mutate ...
//! check_capacity_monotonic(before, self.capacity());
//! check_capacity_covers_count(self.count, self.capacity());
//! ```

// ============================================================================
// CAPACITY CONTRACTS
// ============================================================================

/// Check that the live elements fit in the backing store.
///
/// # Panics (debug builds only)
/// Panics if `count > capacity`.
#[inline]
pub fn check_capacity_covers_count(count: usize, capacity: usize) {
    debug_assert!(
        capacity >= count,
        "Contract violation: capacity {} < count {}",
        capacity,
        count
    );
}

/// Check that an operation did not shrink the backing store.
///
/// # Panics (debug builds only)
/// Panics if `after < before`.
#[inline]
pub fn check_capacity_monotonic(before: usize, after: usize) {
    debug_assert!(
        after >= before,
        "Contract violation: capacity shrank from {} to {}",
        before,
        after
    );
}

// ============================================================================
// COUNT CONTRACTS
// ============================================================================

/// Check that count moved by exactly `delta` (negative for removals).
///
/// # Panics (debug builds only)
/// Panics if `after != before + delta`.
#[inline]
pub fn check_count_delta(before: usize, after: usize, delta: isize) {
    debug_assert!(
        before.checked_add_signed(delta) == Some(after),
        "Contract violation: count went from {} to {}, expected delta {}",
        before,
        after,
        delta
    );
}
