//! Test utilities shared across unit tests, integration tests, fuzz targets
//! and benchmarks.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures and a `Vec`-backed oracle so every harness
//! checks the collection against the same reference behavior.

#![doc(hidden)]

use std::fmt::{self, Debug, Display};

use crate::collection::Collection;
use crate::error::CollectionError;

/// `[I, You, He]`
pub fn pronouns() -> Collection<String> {
    strings(&["I", "You", "He"])
}

/// `[[I, You, He], [We, You, They], [She, It], []]`
pub fn nested_pronouns() -> Collection<Collection<String>> {
    Collection::from([
        strings(&["I", "You", "He"]),
        strings(&["We", "You", "They"]),
        strings(&["She", "It"]),
        Collection::new(),
    ])
}

/// Owned-string collection from string literals.
pub fn strings(items: &[&str]) -> Collection<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// `[0, 1, ..., count - 1]`
pub fn sequential(count: usize) -> Collection<usize> {
    Collection::from_elements(0..count)
}

/// Reference rendering: `"[" + join(", ", items) + "]"`.
pub fn expected_rendering<T: Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// Panic unless the structural invariants hold.
pub fn assert_invariants<T>(collection: &Collection<T>) {
    assert!(
        collection.capacity() >= collection.count(),
        "capacity {} < count {}",
        collection.capacity(),
        collection.count()
    );
    assert_eq!(
        collection.get(collection.count()).err(),
        Some(CollectionError::IndexOutOfRange {
            index: collection.count(),
            count: collection.count(),
        }),
        "get(count) must fail"
    );
}

/// One step of a randomized operation sequence.
#[derive(Clone, PartialEq)]
pub enum Op<T> {
    Add(T),
    AddRange(Vec<T>),
    InsertAt(usize, T),
    RemoveAt(usize),
    Get(usize),
    Clear,
}

impl<T: Debug> Debug for Op<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Add(element) => write!(f, "add({:?})", element),
            Op::AddRange(elements) => write!(f, "add_range({:?})", elements),
            Op::InsertAt(index, element) => write!(f, "insert_at({}, {:?})", index, element),
            Op::RemoveAt(index) => write!(f, "remove_at({})", index),
            Op::Get(index) => write!(f, "get({})", index),
            Op::Clear => f.write_str("clear()"),
        }
    }
}

/// Apply `op` to both the collection and a `Vec` oracle and panic on any
/// disagreement in results, contents, or capacity monotonicity.
pub fn apply_op<T: Clone + PartialEq + Debug>(
    collection: &mut Collection<T>,
    oracle: &mut Vec<T>,
    op: Op<T>,
) {
    let capacity_before = collection.capacity();
    let description = format!("{:?}", op);

    match op {
        Op::Add(element) => {
            collection.add(element.clone());
            oracle.push(element);
        }
        Op::AddRange(elements) => {
            collection.add_range(elements.iter().cloned());
            oracle.extend(elements);
        }
        Op::InsertAt(index, element) => {
            let result = collection.insert_at(index, element.clone());
            if index <= oracle.len() {
                assert_eq!(result, Ok(()), "{}", description);
                oracle.insert(index, element);
            } else {
                assert!(result.is_err(), "{} should fail", description);
            }
        }
        Op::RemoveAt(index) => {
            let result = collection.remove_at(index);
            if index < oracle.len() {
                assert_eq!(result, Ok(oracle.remove(index)), "{}", description);
            } else {
                assert!(result.is_err(), "{} should fail", description);
            }
        }
        Op::Get(index) => {
            assert_eq!(collection.get(index).ok(), oracle.get(index), "{}", description);
        }
        Op::Clear => {
            collection.clear();
            oracle.clear();
        }
    }

    assert!(
        collection.capacity() >= capacity_before,
        "{} shrank capacity",
        description
    );
    assert_eq!(collection.count(), oracle.len(), "{} count", description);
    for (index, expected) in oracle.iter().enumerate() {
        assert_eq!(collection.get(index), Ok(expected), "{} at {}", description, index);
    }
    assert_invariants(collection);
}
