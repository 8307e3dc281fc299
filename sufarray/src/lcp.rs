// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Longest common prefix arrays.

use crate::encode::Symbol;

/// Computes the LCP array of `text` with Kasai's algorithm.
///
/// The result is indexed by rank: `lcp[r]` is the length of the longest common prefix of the
/// suffixes at ranks `r` and `r + 1`. The entry for the last rank is 0.
///
/// Moving from position `p` to `p + 1` shortens the common prefix with the next suffix by at most
/// one, so the total work is *O*(*n*).
///
/// # Panics
///
/// Panics if `suffix_array` or `rank` is not as long as `text`.
///
/// # Examples
///
/// ```
/// use sufarray::{arrays, lcp};
///
/// // "aab"
/// let text = [1, 1, 2];
/// let suffix_array = [0, 1, 2];
/// let rank = arrays::inverse(&suffix_array);
///
/// assert_eq!(lcp::kasai(&text, &suffix_array, &rank), vec![1, 0, 0]);
/// ```
#[must_use]
pub fn kasai(text: &[Symbol], suffix_array: &[usize], rank: &[usize]) -> Vec<usize> {
    let n = text.len();
    assert_eq!(suffix_array.len(), n, "suffix array length must match text");
    assert_eq!(rank.len(), n, "rank array length must match text");

    let mut lcp = vec![0; n];
    let mut k = 0;
    for (i, &r) in rank.iter().enumerate() {
        if r + 1 == n {
            k = 0;
            continue;
        }

        let j = suffix_array[r + 1];
        while i + k < n && j + k < n && text[i + k] == text[j + k] {
            k += 1;
        }
        lcp[r] = k;
        k = k.saturating_sub(1);
    }

    lcp
}

/// Returns the length of the longest common prefix of two symbol sequences.
#[must_use]
pub fn common_prefix(a: &[Symbol], b: &[Symbol]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrays;

    #[test]
    fn banana() {
        // "banana$"
        let text = [98, 97, 110, 97, 110, 97, -1];
        let suffix_array = [6, 5, 3, 1, 0, 4, 2];
        let rank = arrays::inverse(&suffix_array);

        assert_eq!(
            kasai(&text, &suffix_array, &rank),
            vec![0, 1, 3, 0, 0, 2, 0],
        );
    }

    #[test]
    fn unterminated_text_stays_in_bounds() {
        // "aaa"
        let text = [1, 1, 1];
        let suffix_array = [2, 1, 0];
        let rank = arrays::inverse(&suffix_array);

        assert_eq!(kasai(&text, &suffix_array, &rank), vec![1, 2, 0]);
    }

    #[test]
    fn empty() {
        assert!(kasai(&[], &[], &[]).is_empty());
    }

    #[test]
    fn common_prefix_lengths() {
        assert_eq!(common_prefix(&[1, 2, 3], &[1, 2, 4]), 2);
        assert_eq!(common_prefix(&[1, 2], &[1, 2, 4]), 2);
        assert_eq!(common_prefix(&[], &[1]), 0);
    }
}
