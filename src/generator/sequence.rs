/*
sequence.rs

Copyright 2025 Hervé Quatremain

This file is part of Tenpair.

Tenpair is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Tenpair is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Tenpair. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Generate the random number sequence a board is dealt from.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{GameError, Result};

/// The `(x, 10 - x)` couples of distinct values in `[min, max]`, in increasing order of `x`.
///
/// Both orders are listed, so `(3, 7)` and `(7, 3)` are two candidates.
/// The couples are computed on demand and never stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SumToTenPairs {
    /// Smallest `x` whose complement fits in the range.
    low: i64,

    /// Largest `x` whose complement fits in the range.
    high: i64,
}

impl SumToTenPairs {
    /// Create a [`SumToTenPairs`] object for the range `[min, max]`.
    pub fn new(min: i32, max: i32) -> Self {
        let (min, max) = (i64::from(min), i64::from(max));
        Self {
            low: min.max(10 - max),
            high: max.min(10 - min),
        }
    }

    /// Whether `(5, 5)` falls in the range. It is skipped because both values are equal.
    fn has_midpoint(&self) -> bool {
        self.low <= 5 && 5 <= self.high
    }

    /// Return the number of couples.
    pub fn len(&self) -> u64 {
        if self.high < self.low {
            return 0;
        }
        (self.high - self.low + 1) as u64 - u64::from(self.has_midpoint())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the couple at the given index, or None if the index is out of range.
    pub fn get(&self, index: u64) -> Option<(i32, i32)> {
        if index >= self.len() {
            return None;
        }
        let mut x: i64 = self.low + index as i64;
        if self.has_midpoint() && x >= 5 {
            x += 1;
        }
        Some((i32::try_from(x).ok()?, i32::try_from(10 - x).ok()?))
    }

    /// Pick a couple uniformly at random, or None if there is no couple.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(i32, i32)> {
        if self.is_empty() {
            return None;
        }
        self.get(rng.random_range(0..self.len()))
    }
}

/// [`SequenceGenerator`] object.
///
/// The random number generator is injected so that sequences can be reproduced from a seed.
pub struct SequenceGenerator<R: Rng> {
    rng: R,

    /// Number of sum-to-ten pairs in the last generated sequence.
    pub sum_pairs: usize,

    /// Number of duplicate pairs in the last generated sequence.
    pub duplicate_pairs: usize,

    /// Number of random values added after the guaranteed pairs in the last generated sequence.
    pub padding: usize,
}

impl SequenceGenerator<StdRng> {
    /// Create a generator that always produces the same sequences for the same seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded by the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> SequenceGenerator<R> {
    /// Create the object.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            sum_pairs: 0,
            duplicate_pairs: 0,
            padding: 0,
        }
    }

    /// Generate and return a shuffled sequence of `total_cells` values in `[min, max]`.
    ///
    /// The sequence starts with `guaranteed_pairs` pairs of values that can be matched (two
    /// identical values, or two values that sum to ten), then is padded with random values,
    /// and finally shuffled.
    /// The number of pairs is capped to `total_cells / 2`.
    ///
    /// Nothing guarantees that the members of a pair can still reach each other once the
    /// sequence is shuffled and dealt.
    ///
    /// # Errors
    ///
    /// The method returns an error if `min` is greater than `max`.
    pub fn generate(
        &mut self,
        total_cells: usize,
        min: i32,
        max: i32,
        guaranteed_pairs: usize,
    ) -> Result<Vec<i32>> {
        if min > max {
            return Err(GameError::InvalidNumberRange { min, max });
        }

        self.sum_pairs = 0;
        self.duplicate_pairs = 0;
        self.padding = 0;

        let pairs: usize = guaranteed_pairs.min(total_cells / 2);
        if pairs < guaranteed_pairs {
            debug!("Only {pairs} pairs fit in {total_cells} cells ({guaranteed_pairs} requested)");
        }

        let candidates: SumToTenPairs = SumToTenPairs::new(min, max);
        let mut numbers: Vec<i32> = Vec::with_capacity(total_cells);

        for _ in 0..pairs {
            if self.rng.random_bool(0.5)
                && let Some((x, y)) = candidates.choose(&mut self.rng)
            {
                numbers.push(x);
                numbers.push(y);
                self.sum_pairs += 1;
                continue;
            }
            let n: i32 = self.rng.random_range(min..=max);
            numbers.push(n);
            numbers.push(n);
            self.duplicate_pairs += 1;
        }

        while numbers.len() < total_cells {
            numbers.push(self.rng.random_range(min..=max));
            self.padding += 1;
        }

        // Fisher-Yates shuffle
        numbers.shuffle(&mut self.rng);

        debug!(
            "Sequence of {} values in [{min}, {max}]: {} sum-to-ten pairs, {} duplicate pairs, {} padding values",
            numbers.len(),
            self.sum_pairs,
            self.duplicate_pairs,
            self.padding
        );
        Ok(numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Size of the largest set of disjoint matchable pairs in `values`.
    ///
    /// A value `v` matches every other `v` and every `10 - v`, so each `{v, 10 - v}` class is a
    /// complete graph and contributes half its size.
    fn max_pairs(values: &[i32]) -> usize {
        let mut counts: HashMap<i32, usize> = HashMap::new();
        for v in values {
            *counts.entry(*v).or_default() += 1;
        }
        let mut total: usize = 0;
        for (v, c) in &counts {
            let complement: i32 = 10 - v;
            if *v == complement {
                total += c / 2;
            } else if *v < complement {
                total += (c + counts.get(&complement).copied().unwrap_or(0)) / 2;
            } else if !counts.contains_key(&complement) {
                total += c / 2;
            }
        }
        total
    }

    #[test]
    fn sequence_has_requested_length_and_range() {
        for seed in 0..50 {
            let mut generator = SequenceGenerator::from_seed(seed);
            let values = generator.generate(40, 1, 9, 16).unwrap();

            assert_eq!(values.len(), 40);
            assert!(values.iter().all(|v| (1..=9).contains(v)));
        }
    }

    #[test]
    fn sequence_contains_guaranteed_pairs() {
        for seed in 0..50 {
            let mut generator = SequenceGenerator::from_seed(seed);
            let values = generator.generate(30, 1, 7, 12).unwrap();

            assert_eq!(generator.sum_pairs + generator.duplicate_pairs, 12);
            assert_eq!(generator.padding, 6);
            assert!(max_pairs(&values) >= 12);
        }
    }

    #[test]
    fn too_many_pairs_are_capped() {
        let mut generator = SequenceGenerator::from_seed(7);
        let values = generator.generate(9, 1, 5, 20).unwrap();

        assert_eq!(values.len(), 9);
        assert_eq!(generator.sum_pairs + generator.duplicate_pairs, 4);
        assert!(max_pairs(&values) >= 4);
    }

    #[test]
    fn single_value_range_uses_duplicates() {
        let mut generator = SequenceGenerator::from_seed(3);
        let values = generator.generate(10, 5, 5, 5).unwrap();

        assert_eq!(values, vec![5; 10]);
        assert_eq!(generator.sum_pairs, 0);
        assert_eq!(generator.duplicate_pairs, 5);
    }

    #[test]
    fn empty_and_pad_only_sequences() {
        let mut generator = SequenceGenerator::from_seed(1);
        assert!(generator.generate(0, 1, 9, 4).unwrap().is_empty());

        let values = generator.generate(6, 2, 3, 0).unwrap();
        assert_eq!(values.len(), 6);
        assert_eq!(generator.padding, 6);
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = SequenceGenerator::from_seed(42).generate(40, 1, 9, 16).unwrap();
        let b = SequenceGenerator::from_seed(42).generate(40, 1, 9, 16).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let mut generator = SequenceGenerator::from_seed(0);
        assert_eq!(
            generator.generate(10, 9, 1, 2),
            Err(GameError::InvalidNumberRange { min: 9, max: 1 })
        );
    }

    fn all_pairs(min: i32, max: i32) -> Vec<(i32, i32)> {
        let pairs = SumToTenPairs::new(min, max);
        (0..pairs.len()).map(|i| pairs.get(i).unwrap()).collect()
    }

    #[test]
    fn sum_to_ten_candidates() {
        assert!(SumToTenPairs::new(1, 5).is_empty());
        assert_eq!(all_pairs(3, 7), vec![(3, 7), (4, 6), (6, 4), (7, 3)]);
        assert!(SumToTenPairs::new(5, 5).is_empty());
        assert!(SumToTenPairs::new(8, 2).is_empty());
        assert_eq!(SumToTenPairs::new(3, 7).get(4), None);
        assert_eq!(all_pairs(-2, 12), vec![
            (-2, 12),
            (-1, 11),
            (0, 10),
            (1, 9),
            (2, 8),
            (3, 7),
            (4, 6),
            (6, 4),
            (7, 3),
            (8, 2),
            (9, 1),
            (10, 0),
            (11, -1),
            (12, -2),
        ]);
    }

    #[test]
    fn wide_ranges_are_not_enumerated() {
        let pairs = SumToTenPairs::new(-1_000_000_000, 1_000_000_000);
        assert_eq!(pairs.len(), 1_999_999_990);
        assert_eq!(pairs.get(0), Some((-999_999_990, 1_000_000_000)));
        assert_eq!(pairs.get(pairs.len() - 1), Some((1_000_000_000, -999_999_990)));

        let full = SumToTenPairs::new(i32::MIN, i32::MAX);
        assert_eq!(full.get(0), Some((i32::MIN + 11, i32::MAX)));
        assert_eq!(full.get(full.len() - 1), Some((i32::MAX, i32::MIN + 11)));

        let mut generator = SequenceGenerator::from_seed(5);
        let values = generator
            .generate(40, -1_000_000_000, 1_000_000_000, 16)
            .unwrap();
        assert_eq!(values.len(), 40);
        assert!(max_pairs(&values) >= 16);
    }
}
