// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use log::debug;

use crate::{BuildError, brute, comparison, dc3, doubling, encode::Symbol};

/// A suffix array construction algorithm.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Sorts suffixes by direct comparison in *O*(*n*² log *n*)
    Brute,
    /// Prefix doubling with counting sort in *O*(*n* log *n*)
    CountingSort,
    /// Prefix doubling with a comparison sort in *O*(*n* log² *n*)
    RadixSort,
    /// The DC3 (skew) algorithm in *O*(*n*)
    Dc3,
    /// Picks one of the other algorithms based on the text
    #[default]
    Default,
}

impl Algorithm {
    /// Every algorithm, in registry order
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Brute,
        Algorithm::CountingSort,
        Algorithm::RadixSort,
        Algorithm::Dc3,
        Algorithm::Default,
    ];

    /// Returns the registry name of the algorithm.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Brute => "brute",
            Algorithm::CountingSort => "counting sort",
            Algorithm::RadixSort => "radix sort",
            Algorithm::Dc3 => "dc3",
            Algorithm::Default => "default",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = BuildError;

    /// Looks up an algorithm by name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| BuildError::InvalidAlgorithm(s.to_owned()))
    }
}

/// Thresholds used to pick an algorithm for [`Algorithm::Default`].
///
/// The defaults favor low constant factors on short texts and fall back to DC3 on everything
/// else.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SelectorConfig {
    binary_max_len: usize,
    small_max_len: usize,
    medium_max_len: usize,
    wide_alphabet: usize,
}

impl SelectorConfig {
    /// Creates a new configuration with the default thresholds
    pub const fn new() -> Self {
        Self {
            binary_max_len: Self::DEFAULT_BINARY_MAX_LEN,
            small_max_len: Self::DEFAULT_SMALL_MAX_LEN,
            medium_max_len: Self::DEFAULT_MEDIUM_MAX_LEN,
            wide_alphabet: Self::DEFAULT_WIDE_ALPHABET,
        }
    }

    /// Sets the longest two-letter text that is sorted by counting-sort doubling.
    pub fn binary_max_len(&mut self, len: usize) -> &mut Self {
        self.binary_max_len = len;
        self
    }

    /// Sets the longest text of any alphabet that is sorted by brute force.
    pub fn small_max_len(&mut self, len: usize) -> &mut Self {
        self.small_max_len = len;
        self
    }

    /// Sets the longest text with a wide alphabet that is sorted by brute force.
    ///
    /// Comparisons on such texts terminate quickly, so brute force stays competitive for longer.
    pub fn medium_max_len(&mut self, len: usize) -> &mut Self {
        self.medium_max_len = len;
        self
    }

    /// Sets the smallest alphabet considered wide.
    pub fn wide_alphabet(&mut self, letters: usize) -> &mut Self {
        self.wide_alphabet = letters;
        self
    }

    /// Picks the algorithm for a text of `len` symbols over `letters` distinct characters.
    ///
    /// Never returns [`Algorithm::Default`].
    pub fn select(&self, len: usize, letters: usize) -> Algorithm {
        if letters == 2 && len <= self.binary_max_len {
            Algorithm::CountingSort
        } else if len <= self.small_max_len
            || (len <= self.medium_max_len && letters >= self.wide_alphabet)
        {
            Algorithm::Brute
        } else {
            Algorithm::Dc3
        }
    }

    /// The default length limit for counting-sort doubling on binary texts
    pub const DEFAULT_BINARY_MAX_LEN: usize = 100;

    /// The default length limit for brute force
    pub const DEFAULT_SMALL_MAX_LEN: usize = 100;

    /// The default length limit for brute force on wide alphabets
    pub const DEFAULT_MEDIUM_MAX_LEN: usize = 1000;

    /// The default number of letters making an alphabet wide
    pub const DEFAULT_WIDE_ALPHABET: usize = 10;
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `true` if every symbol of `text` but the last is the same and the last is not greater.
///
/// The suffixes of such a text sort by decreasing starting position.
pub(crate) fn is_unary_run(text: &[Symbol]) -> bool {
    match text.split_last() {
        None => true,
        Some((&last, body)) => match body.first() {
            None => true,
            Some(&first) => last <= first && body.iter().all(|&s| s == first),
        },
    }
}

pub(crate) fn reverse_identity(len: usize) -> Vec<usize> {
    (0..len).rev().collect()
}

/// Sorts the suffixes of `text` with `algorithm`, returning the suffix array and the algorithm
/// that actually ran.
pub(crate) fn run(
    algorithm: Algorithm,
    text: &[Symbol],
    letters: usize,
    selector: &SelectorConfig,
) -> (Vec<usize>, Algorithm) {
    let algorithm = match algorithm {
        Algorithm::Default if letters <= 1 && is_unary_run(text) => {
            debug!("unary text of length {}, skipping sort", text.len());
            return (reverse_identity(text.len()), Algorithm::Default);
        }
        Algorithm::Default => selector.select(text.len(), letters),
        algorithm => algorithm,
    };
    debug!(
        "sorting {} symbols over {letters} letters with {algorithm}",
        text.len(),
    );

    let suffix_array = match algorithm {
        Algorithm::Brute => brute::suffix_array(text),
        Algorithm::CountingSort => doubling::suffix_array(text),
        Algorithm::RadixSort => comparison::suffix_array(text),
        Algorithm::Dc3 | Algorithm::Default => dc3::suffix_array(text),
    };

    (suffix_array, algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("brute".parse(), Ok(Algorithm::Brute));
        assert_eq!("Counting Sort".parse(), Ok(Algorithm::CountingSort));
        assert_eq!("RADIX SORT".parse(), Ok(Algorithm::RadixSort));
        assert_eq!(" dc3 ".parse(), Ok(Algorithm::Dc3));
        assert_eq!("default".parse(), Ok(Algorithm::Default));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "heap sort".parse::<Algorithm>(),
            Err(BuildError::InvalidAlgorithm("heap sort".to_owned())),
        );
    }

    #[test]
    fn names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse(), Ok(algorithm));
        }
    }

    #[test]
    fn selector_thresholds() {
        let selector = SelectorConfig::default();

        assert_eq!(selector.select(100, 2), Algorithm::CountingSort);
        assert_eq!(selector.select(101, 2), Algorithm::Dc3);
        assert_eq!(selector.select(100, 3), Algorithm::Brute);
        assert_eq!(selector.select(1000, 10), Algorithm::Brute);
        assert_eq!(selector.select(1000, 9), Algorithm::Dc3);
        assert_eq!(selector.select(1001, 26), Algorithm::Dc3);
    }

    #[test]
    fn selector_can_be_retuned() {
        let selector = *SelectorConfig::new()
            .binary_max_len(0)
            .small_max_len(10)
            .medium_max_len(20)
            .wide_alphabet(3);

        assert_eq!(selector.select(5, 2), Algorithm::Brute);
        assert_eq!(selector.select(15, 3), Algorithm::Brute);
        assert_eq!(selector.select(15, 2), Algorithm::Dc3);
    }

    #[test]
    fn unary_runs() {
        assert!(is_unary_run(&[]));
        assert!(is_unary_run(&[-1]));
        assert!(is_unary_run(&[97, 97, 97, -1]));
        assert!(is_unary_run(&[5, 5, 5]));
        assert!(!is_unary_run(&[97, 97, 98]));
        assert!(!is_unary_run(&[97, -1, 97, -2]));
    }

    #[test]
    fn default_skips_sorting_unary_text() {
        let (suffix_array, algorithm) =
            run(Algorithm::Default, &[7, 7, 7, -1], 1, &SelectorConfig::new());

        assert_eq!(suffix_array, vec![3, 2, 1, 0]);
        assert_eq!(algorithm, Algorithm::Default);
    }

    #[test]
    fn default_sorts_unary_documents() {
        // Two documents over one letter are not a single run
        let (suffix_array, algorithm) =
            run(Algorithm::Default, &[97, -1, 97, -2], 1, &SelectorConfig::new());

        assert_eq!(suffix_array, vec![3, 1, 2, 0]);
        assert_eq!(algorithm, Algorithm::Brute);
    }
}
