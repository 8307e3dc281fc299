// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Small helpers over index arrays shared by the construction algorithms.

use std::{collections::HashMap, hash::Hash};

/// Returns the inverse of the permutation `array`, i.e., `inverse[array[i]] == i` for all `i`.
///
/// # Panics
///
/// Panics if `array` is not a permutation of `0..array.len()`.
///
/// # Examples
///
/// ```
/// assert_eq!(sufarray::arrays::inverse(&[2, 0, 1]), vec![1, 2, 0]);
/// ```
#[must_use]
pub fn inverse(array: &[usize]) -> Vec<usize> {
    let mut inverse = vec![usize::MAX; array.len()];
    for (i, &value) in array.iter().enumerate() {
        assert!(
            inverse[value] == usize::MAX,
            "value {value} appears more than once in the permutation",
        );
        inverse[value] = i;
    }

    inverse
}

/// Maps each value of `array` to the index it occurs at.
///
/// Unlike [`inverse()`], the values do not need to be dense. If a value occurs more than once, the
/// last index wins.
#[must_use]
pub fn inverse_table<T>(array: &[T]) -> HashMap<T, usize>
where
    T: Copy + Eq + Hash,
{
    array.iter().enumerate().map(|(i, &value)| (value, i)).collect()
}

/// Counts the occurrences of every value in `0..bound` in `array`.
///
/// # Panics
///
/// Panics if any value in `array` is not less than `bound`.
///
/// # Examples
///
/// ```
/// assert_eq!(sufarray::arrays::frequencies(&[1, 3, 1, 0], 4), vec![1, 2, 0, 1]);
/// ```
#[must_use]
pub fn frequencies(array: &[usize], bound: usize) -> Vec<usize> {
    let mut frequency = vec![0; bound];
    for &value in array {
        frequency[value] += 1;
    }

    frequency
}

/// Counts the occurrences of every distinct value in `array`.
#[must_use]
pub fn frequency_table<T>(array: &[T]) -> HashMap<T, usize>
where
    T: Copy + Eq + Hash,
{
    let mut frequency = HashMap::new();
    for &value in array {
        *frequency.entry(value).or_insert(0) += 1;
    }

    frequency
}

/// Turns per-bucket counts into the starting offset of each bucket, in place.
pub(crate) fn bucket_starts(counts: &mut [usize]) {
    let mut sum = 0;
    for count in counts {
        let size = *count;
        *count = sum;
        sum += size;
    }
}
