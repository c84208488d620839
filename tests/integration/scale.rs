//! Large-scale workloads with time budgets.
//!
//! A collection that grew one slot at a time, or shifted on tail removal,
//! would turn these into quadratic work and blow far past the budget.

use super::common::{timed, BULK_COUNT, LARGE_BUDGET, LARGE_COUNT};
use collections::Collection;

#[test]
fn test_remove_all_from_tail_within_budget() {
    let mut collection = Collection::from_elements(0..LARGE_COUNT);
    let capacity = collection.capacity();

    let ((), elapsed) = timed(|| {
        for index in (0..LARGE_COUNT).rev() {
            assert_eq!(collection.remove_at(index), Ok(index));
        }
    });

    assert!(
        elapsed < LARGE_BUDGET,
        "tail removal of {} elements took {:?}",
        LARGE_COUNT,
        elapsed
    );
    assert_eq!(collection.to_string(), "[]");
    assert_eq!(collection.count(), 0);
    assert_eq!(collection.capacity(), capacity);
}

#[test]
fn test_bulk_add_range_within_budget() {
    let mut collection = Collection::new();

    let ((), elapsed) = timed(|| {
        collection.add_range(0..BULK_COUNT);
    });

    assert!(
        elapsed < LARGE_BUDGET,
        "add_range of {} elements took {:?}",
        BULK_COUNT,
        elapsed
    );
    assert_eq!(collection.count(), BULK_COUNT);
    assert!(collection.capacity() >= collection.count());
    assert_eq!(collection.get(BULK_COUNT - 1), Ok(&(BULK_COUNT - 1)));
}

#[test]
fn test_bulk_add_range_from_unsized_source_within_budget() {
    let mut collection = Collection::new();

    // filter() reports a lower bound of 0, so growth falls back to doubling
    let ((), elapsed) = timed(|| {
        collection.add_range((0..BULK_COUNT * 2).filter(|n| n % 2 == 0));
    });

    assert!(elapsed < LARGE_BUDGET, "unsized add_range took {:?}", elapsed);
    assert_eq!(collection.count(), BULK_COUNT);
}

#[test]
fn test_single_adds_within_budget() {
    let mut collection = Collection::new();

    let ((), elapsed) = timed(|| {
        for n in 0..LARGE_COUNT {
            collection.add(n);
        }
    });

    assert!(elapsed < LARGE_BUDGET, "{} adds took {:?}", LARGE_COUNT, elapsed);
    assert_eq!(collection.count(), LARGE_COUNT);
    // doubling from 4 reaches the first power-of-two multiple of 4 above the count
    assert_eq!(collection.capacity(), 1 << 20);
}

#[test]
fn test_add_range_2000_onto_existing() {
    let mut collection = Collection::from_elements(0..10);
    collection.add_range(10..2010);
    assert_eq!(collection.count(), 2010);
    for index in [0, 9, 10, 2009] {
        assert_eq!(collection.get(index), Ok(&index));
    }
}
