// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Growth policy for the backing store.
//!
//! A collection only reallocates when it runs out of slots. When it does, the
//! new capacity is the largest of:
//!
//! - the capacity actually required by the pending operation,
//! - the old capacity scaled by the growth factor,
//! - the initial capacity.
//!
//! Geometric growth is what keeps a long run of single appends amortized O(1):
//! with factor `g`, the total number of element moves across all reallocations
//! is bounded by `n * g / (g - 1)`. Taking the required capacity into account
//! means a bulk append grows once, not once per element.

/// Multiplicative factor applied to the capacity on reallocation.
pub const DEFAULT_GROWTH_FACTOR: f64 = 2.0;

/// Capacity of the first allocation of a collection created empty.
pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

/// Smallest accepted growth factor. Anything closer to 1.0 degrades into
/// near-linear growth.
pub const MIN_GROWTH_FACTOR: f64 = 1.125;

/// Largest accepted growth factor.
pub const MAX_GROWTH_FACTOR: f64 = 16.0;

const _: () = {
    assert!(DEFAULT_GROWTH_FACTOR > 1.0);
    assert!(MIN_GROWTH_FACTOR > 1.0);
    assert!(MIN_GROWTH_FACTOR <= DEFAULT_GROWTH_FACTOR);
    assert!(DEFAULT_GROWTH_FACTOR <= MAX_GROWTH_FACTOR);
    assert!(DEFAULT_INITIAL_CAPACITY > 0);
};

/// Tunable growth parameters carried by every collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthPolicy {
    growth_factor: f64,
    initial_capacity: usize,
}

impl GrowthPolicy {
    /// Doubling growth starting at [`DEFAULT_INITIAL_CAPACITY`] slots.
    pub const fn doubling() -> Self {
        Self {
            growth_factor: DEFAULT_GROWTH_FACTOR,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }

    /// Set the growth factor.
    ///
    /// The value is clamped to `[MIN_GROWTH_FACTOR, MAX_GROWTH_FACTOR]`; NaN
    /// becomes `MIN_GROWTH_FACTOR`.
    pub fn with_growth_factor(mut self, growth_factor: f64) -> Self {
        // f64::max returns the non-NaN operand
        self.growth_factor = growth_factor.max(MIN_GROWTH_FACTOR).min(MAX_GROWTH_FACTOR);
        self
    }

    /// Set the capacity used for the first allocation. Zero is bumped to 1.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity.max(1);
        self
    }

    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Capacity to allocate so that `required` slots fit.
    ///
    /// Returns `current` unchanged when it already covers `required`; the
    /// result is never smaller than either argument.
    pub fn next_capacity(&self, current: usize, required: usize) -> usize {
        if required <= current {
            return current;
        }
        // float -> int `as` casts saturate, so huge capacities clamp to usize::MAX
        let scaled = (current as f64 * self.growth_factor).ceil() as usize;
        scaled.max(required).max(self.initial_capacity)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::doubling()
    }
}
