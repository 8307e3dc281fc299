// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use sufarray::{BuildError, SuffixArray, Text};

/// Computes the LCP array of `text`, sorting its suffixes with the algorithm registered as
/// `algorithm`.
///
/// The result is indexed by rank. See [`SuffixArray::lcp()`].
///
/// # Errors
///
/// Returns an error if `algorithm` is not a registered algorithm name or `text` cannot be
/// encoded.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), sufarray::BuildError> {
/// let lcp = substring::longest_common_prefix_array("banana", "default")?;
///
/// assert_eq!(lcp, [0, 1, 3, 0, 0, 2, 0]);
/// # Ok(())
/// # }
/// ```
pub fn longest_common_prefix_array<'a>(
    text: impl Into<Text<'a>>,
    algorithm: &str,
) -> Result<Vec<usize>, BuildError> {
    let suffix_array = SuffixArray::with_algorithm_name(text, algorithm)?;

    Ok(suffix_array.lcp().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_for_every_algorithm() {
        let expected = longest_common_prefix_array("mississippi", "brute").unwrap();

        for name in ["counting sort", "radix sort", "dc3", "default"] {
            assert_eq!(longest_common_prefix_array("mississippi", name).unwrap(), expected);
        }
        assert_eq!(expected, [0, 1, 1, 4, 0, 0, 1, 0, 2, 1, 3, 0]);
    }

    #[test]
    fn unknown_algorithm() {
        assert!(matches!(
            longest_common_prefix_array("abc", "suffix tree"),
            Err(BuildError::InvalidAlgorithm(_)),
        ));
    }
}
