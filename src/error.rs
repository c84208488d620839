// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for bounds-checked collection operations.
//!
//! There is exactly one way a collection operation can fail: the caller asked
//! for a position that does not exist. Allocation failure is not modeled here;
//! it aborts like any other allocation in std.

use std::fmt;

/// Error returned by `get`, `get_mut`, `insert_at` and `remove_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// `index` falls outside the valid range for the operation.
    ///
    /// `count` is the number of elements at the time of the call. For
    /// `insert_at` the valid range is `0..=count`, for everything else
    /// `0..count`.
    IndexOutOfRange { index: usize, count: usize },
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::IndexOutOfRange { index, count } => {
                write!(
                    f,
                    "index {} out of range for collection of count {}",
                    index, count
                )
            }
        }
    }
}

impl std::error::Error for CollectionError {}

/// Result type for collection operations.
pub type Result<T> = std::result::Result<T, CollectionError>;
