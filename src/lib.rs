//! A growable, indexable sequence container with explicit bounds checks.
//!
//! `Collection<T>` keeps its elements in one contiguous backing store and
//! offers amortized O(1) append, O(1) indexed access, O(n) insert/remove at
//! arbitrary positions, and a deterministic `[a, b, c]` rendering.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌────────────────┐     ┌──────────────────┐
//! │  growth.rs  │────▶│ collection.rs  │◀────│ serialization.rs │
//! │(GrowthPolicy│     │ (Collection,   │     │ (serde seq impl) │
//! │  constants) │     │  collection!)  │     │                  │
//! └─────────────┘     └────────────────┘     └──────────────────┘
//!                       │            │
//!                       ▼            ▼
//!              ┌──────────────┐ ┌──────────────┐
//!              │ contracts.rs │ │   error.rs   │
//!              │ (debug-mode  │ │(IndexOutOf-  │
//!              │  invariants) │ │  Range)      │
//!              └──────────────┘ └──────────────┘
//! ```
//!
//! # Invariants
//!
//! | Invariant                          | Enforced by                          |
//! |------------------------------------|--------------------------------------|
//! | `capacity >= count`                | `contracts::check_capacity_covers_count` |
//! | capacity never shrinks implicitly  | `contracts::check_capacity_monotonic` |
//! | failed operations change nothing   | bounds check before any mutation     |
//! | amortized O(1) append              | `GrowthPolicy::next_capacity`        |
//!
//! # Usage
//!
//! ```
//! use collections::{collection, Collection, CollectionError};
//!
//! let mut words = collection!["I", "You", "He"];
//! assert_eq!(words.remove_at(1), Ok("You"));
//! assert_eq!(words.to_string(), "[I, He]");
//!
//! assert_eq!(
//!     words.get(5),
//!     Err(CollectionError::IndexOutOfRange { index: 5, count: 2 })
//! );
//!
//! let mut big = Collection::new();
//! big.add_range(0..1_000_001);
//! assert_eq!(big.count(), 1_000_001);
//! ```

// Module declarations
mod collection;
pub mod contracts;
mod error;
pub mod growth;
mod serialization;
pub mod testing;

// Re-exports for public API
pub use collection::{Collection, DynamicArray};
pub use error::{CollectionError, Result};
pub use growth::{
    GrowthPolicy, DEFAULT_GROWTH_FACTOR, DEFAULT_INITIAL_CAPACITY, MAX_GROWTH_FACTOR,
    MIN_GROWTH_FACTOR,
};
