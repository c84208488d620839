// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for arbitrary operation sequences.
//!
//! Every operation runs against the collection and a `Vec` oracle side by
//! side. Any disagreement in results, contents, or error behavior panics,
//! as does a shrinking capacity or `capacity < count`.

#![no_main]

use collections::testing::{apply_op, Op};
use collections::{Collection, GrowthPolicy};
use libfuzzer_sys::fuzz_target;

/// Fuzz input: a growth policy plus a bounded operation script.
#[derive(Debug, Clone)]
struct OpsInput {
    growth_factor: f64,
    initial_capacity: usize,
    ops: Vec<Op<u16>>,
}

fn arbitrary_op(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Op<u16>> {
    // Indices stay small so they land both inside and just outside the live range
    let index = u.int_in_range(0usize..=40)?;
    Ok(match u.int_in_range(0u8..=9)? {
        0..=2 => Op::Add(u.arbitrary()?),
        3 => {
            let len = u.int_in_range(0usize..=32)?;
            let elements = (0..len)
                .map(|_| u.arbitrary())
                .collect::<arbitrary::Result<Vec<u16>>>()?;
            Op::AddRange(elements)
        }
        4 | 5 => Op::InsertAt(index, u.arbitrary()?),
        6 | 7 => Op::RemoveAt(index),
        8 => Op::Get(index),
        _ => Op::Clear,
    })
}

impl<'a> arbitrary::Arbitrary<'a> for OpsInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let growth_factor = match u.int_in_range(0u8..=3)? {
            0 => 2.0,
            1 => 1.5,
            2 => 0.0, // clamped up to the minimum
            _ => f64::from(u.int_in_range(0u8..=40)?) / 2.0,
        };
        let initial_capacity = u.int_in_range(0usize..=8)?;
        let len = u.int_in_range(0usize..=200)?;
        let ops = (0..len)
            .map(|_| arbitrary_op(u))
            .collect::<arbitrary::Result<Vec<_>>>()?;
        Ok(Self {
            growth_factor,
            initial_capacity,
            ops,
        })
    }
}

fuzz_target!(|input: OpsInput| {
    let policy = GrowthPolicy::default()
        .with_growth_factor(input.growth_factor)
        .with_initial_capacity(input.initial_capacity);
    let mut collection = Collection::with_policy(policy);
    let mut oracle = Vec::new();

    for op in input.ops {
        apply_op(&mut collection, &mut oracle, op);
    }

    // Property: rendering agrees with the oracle after any script
    assert_eq!(
        collection.to_string(),
        collections::testing::expected_rendering(&oracle)
    );
});
