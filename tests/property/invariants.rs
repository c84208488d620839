//! Properties of single operations.

use super::common::{assert_invariants, expected_rendering};
use collections::{Collection, CollectionError, GrowthPolicy};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Generate word-like strings, including the empty string.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ,]{0,8}").unwrap()
}

/// Generate a list of words.
fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..20)
}

/// Generate a growth policy across the accepted factor range.
fn policy_strategy() -> impl Strategy<Value = GrowthPolicy> {
    (1.0f64..20.0, 0usize..10).prop_map(|(factor, initial)| {
        GrowthPolicy::default()
            .with_growth_factor(factor)
            .with_initial_capacity(initial)
    })
}

proptest! {
    /// Rendering equals "[" + join(", ", elements) + "]" in insertion order.
    #[test]
    fn prop_render_matches_join(words in words_strategy()) {
        let collection = Collection::from(words.clone());
        prop_assert_eq!(collection.to_string(), expected_rendering(&words));
    }

    /// Building by repeated add renders the same as building from a sequence.
    #[test]
    fn prop_add_equals_from_sequence(words in words_strategy()) {
        let mut added = Collection::new();
        for word in &words {
            added.add(word.clone());
        }
        prop_assert_eq!(&added, &Collection::from(words));
        assert_invariants(&added);
    }

    /// Every valid index returns what was placed there.
    #[test]
    fn prop_get_returns_placed_element(words in words_strategy()) {
        let collection = Collection::from(words.clone());
        for (index, word) in words.iter().enumerate() {
            prop_assert_eq!(collection.get(index), Ok(word));
        }
    }

    /// Any index at or beyond count fails for get and remove_at.
    #[test]
    fn prop_out_of_range_get_and_remove_fail(
        words in words_strategy(),
        excess in 0usize..100,
    ) {
        let mut collection = Collection::from(words.clone());
        let index = words.len() + excess;
        let expected = CollectionError::IndexOutOfRange { index, count: words.len() };

        prop_assert_eq!(collection.get(index).err(), Some(expected));
        prop_assert_eq!(collection.remove_at(index).err(), Some(expected));
        prop_assert_eq!(collection.to_string(), expected_rendering(&words));
    }

    /// insert_at fails only beyond count.
    #[test]
    fn prop_insert_range_includes_count(
        words in words_strategy(),
        excess in 1usize..100,
    ) {
        let mut collection = Collection::from(words.clone());
        let count = words.len();

        let too_far = collection.insert_at(count + excess, "x".to_string());
        prop_assert_eq!(
            too_far,
            Err(CollectionError::IndexOutOfRange { index: count + excess, count })
        );
        prop_assert_eq!(collection.insert_at(count, "x".to_string()), Ok(()));
        prop_assert_eq!(collection.count(), count + 1);
    }

    /// add_range of N grows count by exactly N and keeps capacity >= count.
    #[test]
    fn prop_add_range_count_delta(
        initial in words_strategy(),
        extra in words_strategy(),
        policy in policy_strategy(),
    ) {
        let mut collection = Collection::with_policy(policy);
        collection.add_range(initial.clone());
        let before = collection.count();

        collection.add_range(extra.clone());

        prop_assert_eq!(collection.count(), before + extra.len());
        prop_assert!(collection.capacity() >= collection.count());
    }

    /// Sized bulk appends reallocate at most once.
    #[test]
    fn prop_add_range_reallocates_once(
        existing in 0usize..64,
        incoming in 0usize..5000,
    ) {
        let mut collection = Collection::from_elements(0..existing);
        let capacity_before = collection.capacity();
        collection.add_range(0..incoming);

        let required = existing + incoming;
        if required <= capacity_before {
            prop_assert_eq!(collection.capacity(), capacity_before);
        } else {
            // one growth step straight to max(required, scaled, initial)
            let expected = GrowthPolicy::default().next_capacity(capacity_before, required);
            prop_assert_eq!(collection.capacity(), expected);
        }
    }

    /// Removing everything from the tail leaves "[]" and the capacity intact.
    #[test]
    fn prop_remove_from_tail_empties(count in 0usize..500) {
        let mut collection = Collection::from_elements(0..count);
        let capacity = collection.capacity();
        for index in (0..count).rev() {
            prop_assert_eq!(collection.remove_at(index), Ok(index));
        }
        prop_assert_eq!(collection.to_string(), "[]");
        prop_assert_eq!(collection.capacity(), capacity);
    }

    /// Nested rendering applies the same rule at every level.
    #[test]
    fn prop_nested_render(groups in prop::collection::vec(words_strategy(), 0..6)) {
        let nested: Collection<Collection<String>> =
            groups.iter().cloned().map(Collection::from).collect();
        let inner: Vec<String> = groups.iter().map(|g| expected_rendering(g)).collect();
        prop_assert_eq!(nested.to_string(), expected_rendering(&inner));
    }
}
