// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use crate::{
    algorithm::{is_unary_run, reverse_identity},
    encode::Symbol,
};

/// Computes the suffix array of `text` by comparing suffixes directly.
///
/// This is *O*(*n*² log *n*) in the worst case and only meant for short texts.
pub(crate) fn suffix_array(text: &[Symbol]) -> Vec<usize> {
    if is_unary_run(text) {
        return reverse_identity(text.len());
    }

    let mut suffix_array = (0..text.len()).collect::<Vec<_>>();
    // Slices compare element-wise, and a proper prefix sorts first
    suffix_array.sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]));

    suffix_array
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abaab() {
        assert_eq!(
            suffix_array(&[97, 98, 97, 97, 98, -1]),
            vec![5, 2, 3, 0, 4, 1],
        );
    }

    #[test]
    fn shorter_suffix_sorts_first() {
        // No terminator: "aba"
        assert_eq!(suffix_array(&[1, 2, 1]), vec![2, 0, 1]);
    }

    #[test]
    fn unary_run_is_reversed() {
        assert_eq!(suffix_array(&[4; 6]), vec![5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn larger_last_symbol_is_not_a_run() {
        assert_eq!(suffix_array(&[1, 1, 2]), vec![0, 1, 2]);
    }

    #[test]
    fn empty() {
        assert!(suffix_array(&[]).is_empty());
    }
}
