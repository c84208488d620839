// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for rendering.
//!
//! Elements are arbitrary strings, including empty ones and ones containing
//! the separator or brackets. Rendering adds no quoting, so the output must be
//! exactly `"[" + join(", ", elements) + "]"`, flat or nested.

#![no_main]

use collections::testing::expected_rendering;
use collections::Collection;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|groups: Vec<Vec<String>>| {
    let nested: Collection<Collection<String>> = groups
        .iter()
        .map(|group| Collection::from(group.clone()))
        .collect();

    // Property 1: each inner collection renders like the oracle
    let inner: Vec<String> = groups.iter().map(|group| expected_rendering(group)).collect();
    for (index, expected) in inner.iter().enumerate() {
        assert_eq!(&nested.get(index).unwrap().to_string(), expected);
    }

    // Property 2: nesting renders recursively with the same rule
    assert_eq!(nested.to_string(), expected_rendering(&inner));

    // Property 3: count matches input length at both levels
    assert_eq!(nested.count(), groups.len());
});
