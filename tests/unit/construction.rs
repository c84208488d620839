//! Construction: empty, variadic, from sequences.

use super::common::{assert_renders, sequential};
use collections::{collection, Collection, DynamicArray, GrowthPolicy, DEFAULT_INITIAL_CAPACITY};

#[test]
fn test_empty() {
    let empty: Collection<i32> = Collection::new();
    assert_eq!(empty.count(), 0);
    assert_eq!(empty.capacity(), 0);
    assert_renders(&empty, "[]");
}

#[test]
fn test_empty_macro() {
    let empty: Collection<&str> = collection![];
    assert!(empty.is_empty());
}

#[test]
fn test_variadic_single() {
    let nums = collection![10];
    assert_eq!(nums.count(), 1);
    assert!(nums.capacity() >= 1);
    assert_renders(&nums, "[10]");
}

#[test]
fn test_variadic_multiple() {
    let nums = collection![10, 20, 30, 100, 2000000];
    assert_eq!(nums.count(), 5);
    assert_renders(&nums, "[10, 20, 30, 100, 2000000]");
}

#[test]
fn test_variadic_trailing_comma() {
    let words = collection!["I", "You",];
    assert_renders(&words, "[I, You]");
}

#[test]
fn test_from_vec_and_array() {
    let from_vec = Collection::from(vec![1, 2, 3]);
    let from_array = Collection::from([1, 2, 3]);
    assert_eq!(from_vec, from_array);
    assert_renders(&from_vec, "[1, 2, 3]");
}

#[test]
fn test_from_iterator() {
    let squares: Collection<u64> = (1..=4).map(|n| n * n).collect();
    assert_renders(&squares, "[1, 4, 9, 16]");
}

#[test]
fn test_from_elements_sizes_capacity_to_input() {
    let nums = sequential(2000);
    assert_eq!(nums.count(), 2000);
    assert_eq!(nums.capacity(), 2000);
}

#[test]
fn test_with_capacity_preallocates() {
    let mut nums = Collection::with_capacity(10);
    assert_eq!(nums.capacity(), 10);
    nums.add_range(0..10);
    assert_eq!(nums.capacity(), 10);
}

#[test]
fn test_first_growth_uses_initial_capacity() {
    let mut nums = Collection::new();
    nums.add('a');
    assert_eq!(nums.capacity(), DEFAULT_INITIAL_CAPACITY);
}

#[test]
fn test_with_policy() {
    let policy = GrowthPolicy::default().with_initial_capacity(16);
    let mut nums = Collection::with_policy(policy);
    nums.add(1);
    assert_eq!(nums.capacity(), 16);
}

#[test]
fn test_dynamic_array_alias() {
    let mut nums: DynamicArray<i32> = DynamicArray::new();
    nums.add(1);
    assert_renders(&nums, "[1]");
}

#[test]
fn test_default_is_empty() {
    let nums: Collection<String> = Collection::default();
    assert_renders(&nums, "[]");
}
