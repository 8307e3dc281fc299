// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use log::trace;

use crate::encode::Symbol;

/// Computes the suffix array of `text` by prefix doubling with a comparison sort.
///
/// This is *O*(*n* log² *n*). It is slower than counting-sort doubling, but has no buckets to
/// size and so makes a useful cross-check.
pub(crate) fn suffix_array(text: &[Symbol]) -> Vec<usize> {
    let n = text.len();
    let mut suffix_array = (0..n).collect::<Vec<_>>();
    if n == 0 {
        return suffix_array;
    }

    // Classes start out as the symbols themselves and become dense ranks after the first round
    let mut class = text.iter().map(|&s| i64::from(s)).collect::<Vec<_>>();
    let mut next_class = vec![0; n];
    let mut gap = 1;
    loop {
        // A suffix with nothing `gap` ahead has an empty second half, which sorts first
        let compare = |a: usize, b: usize| {
            class[a]
                .cmp(&class[b])
                .then_with(|| class.get(a + gap).cmp(&class.get(b + gap)))
        };
        suffix_array.sort_unstable_by(|&a, &b| compare(a, b));

        next_class[0] = 0;
        for w in 1..n {
            let step = compare(suffix_array[w - 1], suffix_array[w]).is_lt();
            next_class[w] = next_class[w - 1] + usize::from(step);
        }
        for (w, &p) in suffix_array.iter().enumerate() {
            class[p] = next_class[w] as i64;
        }

        trace!("comparison gap {gap}: {} distinct classes", next_class[n - 1] + 1);
        if next_class[n - 1] == n - 1 {
            break;
        }
        gap <<= 1;
    }

    suffix_array
}
