// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::mem;

use log::trace;

use crate::{arrays, encode::Symbol};

/// Computes the suffix array of `text` by prefix doubling with counting sort.
///
/// Every round sorts the suffixes by their first `2 * gap` symbols using the classes of the
/// previous round, so there are *O*(log *n*) rounds of *O*(*n*) work each.
pub(crate) fn suffix_array(text: &[Symbol]) -> Vec<usize> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }

    // Seed with a stable sort so that equal symbols stay in position order
    let mut suffix_array = (0..n).collect::<Vec<_>>();
    suffix_array.sort_by_key(|&i| text[i]);

    // Classes are dense: equal prefixes share a class, and classes only increase along the order
    let mut class = vec![0; n];
    for w in 1..n {
        let (prev, cur) = (suffix_array[w - 1], suffix_array[w]);
        class[cur] = class[prev] + usize::from(text[prev] != text[cur]);
    }

    let mut order = Vec::with_capacity(n);
    let mut next_class = vec![0; n];
    let mut gap = 1;
    while class[suffix_array[n - 1]] < n - 1 {
        // Order by the second half first. Suffixes with nothing `gap` ahead have an empty second
        // half, which is the smallest possible.
        order.clear();
        order.extend(n.saturating_sub(gap)..n);
        order.extend(
            suffix_array
                .iter()
                .filter(|&&p| p >= gap)
                .map(|&p| p - gap),
        );

        // Then stably by the first half
        let mut starts = arrays::frequencies(&class, n);
        arrays::bucket_starts(&mut starts);
        for &p in &order {
            suffix_array[starts[class[p]]] = p;
            starts[class[p]] += 1;
        }

        let key = |p: usize| (class[p], class.get(p + gap));
        next_class[suffix_array[0]] = 0;
        for w in 1..n {
            let (prev, cur) = (suffix_array[w - 1], suffix_array[w]);
            next_class[cur] = next_class[prev] + usize::from(key(prev) != key(cur));
        }
        mem::swap(&mut class, &mut next_class);

        trace!(
            "doubling gap {gap}: {} distinct classes",
            class[suffix_array[n - 1]] + 1,
        );
        gap <<= 1;
    }

    suffix_array
}
