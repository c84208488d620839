// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The growable, indexable sequence container.
//!
//! `Collection<T>` owns one contiguous backing store of `capacity` slots. The
//! first `count` slots hold the elements in positional order; the rest are
//! empty. The store is a boxed slice of `Option<T>`, which keeps the crate
//! free of `unsafe` while still giving exactly one allocation whose length is
//! the observable capacity.
//!
//! # Cost model
//!
//! | Operation            | Cost                               |
//! |----------------------|------------------------------------|
//! | `get`                | O(1)                               |
//! | `add`                | amortized O(1)                     |
//! | `add_range(n items)` | O(n), one reallocation at most for sized input |
//! | `insert_at(i)`       | O(count - i)                       |
//! | `remove_at(i)`       | O(count - i), O(1) at the tail     |
//! | `clear`              | O(count), capacity kept            |
//!
//! Every bounds-checked operation validates the index before touching the
//! store, so a failed call leaves the collection exactly as it was.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::contracts::{check_capacity_covers_count, check_capacity_monotonic, check_count_delta};
use crate::error::{CollectionError, Result};
use crate::growth::GrowthPolicy;

/// Growable, indexable sequence with explicit bounds checks.
///
/// ```
/// use collections::{collection, Collection};
///
/// let mut pronouns = collection!["I", "He"];
/// pronouns.insert_at(1, "You").unwrap();
/// assert_eq!(pronouns.to_string(), "[I, You, He]");
///
/// let mut nums = Collection::new();
/// nums.add(5).add(6);
/// assert_eq!(nums.to_string(), "[5, 6]");
/// ```
#[derive(Clone)]
pub struct Collection<T> {
    slots: Box<[Option<T>]>,
    count: usize,
    policy: GrowthPolicy,
}

/// Alias matching the data-structure name rather than the role.
pub type DynamicArray<T> = Collection<T>;

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Collection<T> {
    /// Create an empty collection. Nothing is allocated until the first add.
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Create an empty collection that grows according to `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self::with_capacity_and_policy(0, policy)
    }

    /// Create an empty collection with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_policy(capacity, GrowthPolicy::default())
    }

    pub fn with_capacity_and_policy(capacity: usize, policy: GrowthPolicy) -> Self {
        Self {
            slots: empty_slots(capacity),
            count: 0,
            policy,
        }
    }

    /// Create a collection holding `elements` in the order given.
    pub fn from_elements<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut collection = Self::new();
        collection.add_range(elements);
        collection
    }

    /// Number of elements present.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of allocated slots, including unused trailing ones.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn growth_policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Element at `index`.
    ///
    /// # Errors
    /// `IndexOutOfRange` unless `index < count`.
    pub fn get(&self, index: usize) -> Result<&T> {
        match self.slots[..self.count].get(index) {
            Some(Some(element)) => Ok(element),
            _ => Err(self.out_of_range(index)),
        }
    }

    /// Mutable element at `index`, with the same contract as [`get`](Self::get).
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let count = self.count;
        match self.slots[..count].get_mut(index) {
            Some(Some(element)) => Ok(element),
            _ => Err(CollectionError::IndexOutOfRange { index, count }),
        }
    }

    /// Append `element` at position `count`, growing the store if it is full.
    pub fn add(&mut self, element: T) -> &mut Self {
        let (count_before, capacity_before) = (self.count, self.capacity());

        self.grow_for(self.count + 1);
        self.slots[self.count] = Some(element);
        self.count += 1;

        check_count_delta(count_before, self.count, 1);
        check_capacity_monotonic(capacity_before, self.capacity());
        check_capacity_covers_count(self.count, self.capacity());
        self
    }

    /// Append every element of `elements`, preserving their order.
    ///
    /// Room for the iterator's lower size bound is reserved up front, so a
    /// sized input of any length costs at most one reallocation.
    pub fn add_range<I: IntoIterator<Item = T>>(&mut self, elements: I) -> &mut Self {
        let (count_before, capacity_before) = (self.count, self.capacity());
        let elements = elements.into_iter();
        let (lower_bound, _) = elements.size_hint();
        self.reserve(lower_bound);

        let mut added = 0usize;
        for element in elements {
            self.add(element);
            added += 1;
        }

        check_count_delta(count_before, self.count, added as isize);
        check_capacity_monotonic(capacity_before, self.capacity());
        check_capacity_covers_count(self.count, self.capacity());
        self
    }

    /// Make sure at least `additional` more elements fit without another
    /// reallocation. Growth follows the collection's policy.
    pub fn reserve(&mut self, additional: usize) {
        self.grow_for(self.count.saturating_add(additional));
    }

    /// Insert `element` at `index`, shifting `[index, count)` one slot right.
    ///
    /// `index == count` appends.
    ///
    /// # Errors
    /// `IndexOutOfRange` unless `index <= count`. The element is dropped and
    /// the collection is left untouched.
    pub fn insert_at(&mut self, index: usize, element: T) -> Result<()> {
        if index > self.count {
            return Err(self.out_of_range(index));
        }
        let (count_before, capacity_before) = (self.count, self.capacity());

        self.grow_for(self.count + 1);
        self.slots[self.count] = Some(element);
        self.slots[index..=self.count].rotate_right(1);
        self.count += 1;

        check_count_delta(count_before, self.count, 1);
        check_capacity_monotonic(capacity_before, self.capacity());
        check_capacity_covers_count(self.count, self.capacity());
        Ok(())
    }

    /// Remove and return the element at `index`, shifting `[index + 1, count)`
    /// one slot left. Capacity is unchanged.
    ///
    /// # Errors
    /// `IndexOutOfRange` unless `index < count`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let (count_before, capacity_before) = (self.count, self.capacity());
        let Some(removed) = self.slots[..count_before]
            .get_mut(index)
            .and_then(Option::take)
        else {
            return Err(CollectionError::IndexOutOfRange {
                index,
                count: count_before,
            });
        };

        // the emptied slot travels to the end of the live range
        self.slots[index..count_before].rotate_left(1);
        self.count -= 1;

        check_count_delta(count_before, self.count, -1);
        check_capacity_monotonic(capacity_before, self.capacity());
        check_capacity_covers_count(self.count, self.capacity());
        Ok(removed)
    }

    /// Drop every element. Capacity is retained for reuse.
    pub fn clear(&mut self) {
        let capacity_before = self.capacity();

        self.slots[..self.count].fill_with(|| None);
        self.count = 0;

        check_capacity_monotonic(capacity_before, self.capacity());
    }

    /// Live elements in positional order.
    pub(crate) fn elements(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.count].iter().flatten()
    }

    fn out_of_range(&self, index: usize) -> CollectionError {
        CollectionError::IndexOutOfRange {
            index,
            count: self.count,
        }
    }

    /// Reallocate so that `required` slots fit. Live elements move into the
    /// new store; the old one is released when it goes out of scope.
    fn grow_for(&mut self, required: usize) {
        let capacity = self.capacity();
        if required <= capacity {
            return;
        }
        let new_capacity = self.policy.next_capacity(capacity, required);

        let mut slots = std::mem::take(&mut self.slots).into_vec();
        slots.truncate(self.count);
        slots.reserve_exact(new_capacity - self.count);
        slots.resize_with(new_capacity, || None);
        self.slots = slots.into_boxed_slice();
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_elements(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_elements(elements)
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

/// Panicking indexer. Prefer [`Collection::get`] when the index is not
/// already known to be valid.
impl<T> Index<usize> for Collection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for Collection<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Element-wise equality. Capacity and growth policy are not compared.
impl<T: PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.elements().eq(other.elements())
    }
}

impl<T: Eq> Eq for Collection<T> {}

/// `[a, b, c]`, each element in its own `Display` form. Nested collections
/// render recursively: `[[I, You], []]`.
impl<T: fmt::Display> fmt::Display for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, element) in self.elements().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", element)?;
        }
        f.write_str("]")
    }
}

struct DebugElements<'a, T>(&'a Collection<T>);

impl<T: fmt::Debug> fmt::Debug for DebugElements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.elements()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("count", &self.count)
            .field("capacity", &self.capacity())
            .field("elements", &DebugElements(self))
            .finish()
    }
}

/// Build a collection from a list of elements, like `vec!`.
///
/// ```
/// use collections::collection;
///
/// let nums = collection![10, 20, 30, 100, 2000000];
/// assert_eq!(nums.to_string(), "[10, 20, 30, 100, 2000000]");
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::Collection::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Collection::from([$($element),+])
    };
}
